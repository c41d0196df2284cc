//! Shared traits for operations that manipulate pixel buffers
use log::trace;

use crate::buffer::PixelBuffer;
use crate::errors::ImageErrors;

/// An operation that transforms a pixel buffer in place
///
/// Implementations must uphold the buffer length invariant on both
/// success and failure: when `execute` returns, the buffer's byte
/// length matches its dimensions, and a failed operation leaves the
/// input untouched.
pub trait OperationsTrait {
    /// The name of this operation, used in logs and error messages
    fn name(&self) -> &'static str;

    /// Run the operation on `image`
    ///
    /// # Errors
    /// Operation specific, see the implementing type
    fn execute_impl(&self, image: &mut PixelBuffer) -> Result<(), ImageErrors>;

    /// Run the operation, tracing it in the logs
    ///
    /// # Errors
    /// Propagates whatever [`execute_impl`](Self::execute_impl) returns
    fn execute(&self, image: &mut PixelBuffer) -> Result<(), ImageErrors> {
        trace!("running operation {}", self.name());
        self.execute_impl(image)
    }
}
