//! RGB to grayscale conversion and back
//!
//! Grayscale conversion averages the three color samples of each
//! pixel, `(r + g + b) / 3`, summed in a wider type and truncated
//! toward zero. The reverse direction replicates the single gray
//! sample into all three color channels, which is why the pair does
//! not round-trip exactly: averaging is lossy, but a second
//! application of either conversion is a pass-through.
//!
//! Both operations inherit a sentinel contract for channel counts
//! other than 1 and 3: the buffer is collapsed to the empty 0x0x0
//! state rather than erroring. Callers that care must check
//! [`PixelBuffer::is_empty`] afterwards.
use log::warn;
use microcv_image::buffer::PixelBuffer;
use microcv_image::errors::ImageErrors;
use microcv_image::traits::OperationsTrait;

/// Convert an RGB image to grayscale by averaging its channels
///
/// - 3 channel input becomes 1 channel, each output sample the floor
///   of the mean of the pixel's r, g and b
/// - 1 channel input is passed through unchanged
/// - any other channel count collapses the buffer to the empty
///   sentinel state
#[derive(Default, Copy, Clone)]
pub struct RgbToGrayscale;

impl RgbToGrayscale {
    #[must_use]
    pub fn new() -> RgbToGrayscale {
        Self
    }
}

impl OperationsTrait for RgbToGrayscale {
    fn name(&self) -> &'static str {
        "rgb to grayscale"
    }

    fn execute_impl(&self, image: &mut PixelBuffer) -> Result<(), ImageErrors> {
        let (width, height) = image.dimensions();

        match image.channels() {
            1 => {} // already grayscale
            3 => {
                let mut out = PixelBuffer::allocate(width, height, 1);
                rgb_to_grayscale(image.data(), out.data_mut());
                *image = out;
            }
            channels => {
                warn!(
                    "cannot convert a {channels} channel image to grayscale, emptying buffer"
                );
                image.resize(0, 0, 0);
            }
        }
        Ok(())
    }
}

/// Convert a grayscale image to RGB by replicating its channel
///
/// - 1 channel input becomes 3 channel, the gray sample copied into
///   r, g and b
/// - 3 channel input is passed through unchanged
/// - any other channel count collapses the buffer to the empty
///   sentinel state
#[derive(Default, Copy, Clone)]
pub struct GrayscaleToRgb;

impl GrayscaleToRgb {
    #[must_use]
    pub fn new() -> GrayscaleToRgb {
        Self
    }
}

impl OperationsTrait for GrayscaleToRgb {
    fn name(&self) -> &'static str {
        "grayscale to rgb"
    }

    fn execute_impl(&self, image: &mut PixelBuffer) -> Result<(), ImageErrors> {
        let (width, height) = image.dimensions();

        match image.channels() {
            3 => {} // already rgb
            1 => {
                let mut out = PixelBuffer::allocate(width, height, 3);
                grayscale_to_rgb(image.data(), out.data_mut());
                *image = out;
            }
            channels => {
                warn!("cannot convert a {channels} channel image to rgb, emptying buffer");
                image.resize(0, 0, 0);
            }
        }
        Ok(())
    }
}

/// Average interleaved rgb samples into single gray samples
///
/// `out_pixels` holds one byte per three input bytes. The sum is
/// carried in u16, three u8 samples cannot overflow it.
pub fn rgb_to_grayscale(in_pixels: &[u8], out_pixels: &mut [u8]) {
    for (rgb, gray) in in_pixels.chunks_exact(3).zip(out_pixels.iter_mut()) {
        let sum = u16::from(rgb[0]) + u16::from(rgb[1]) + u16::from(rgb[2]);
        *gray = (sum / 3) as u8;
    }
}

/// Replicate gray samples into interleaved rgb triples
pub fn grayscale_to_rgb(in_pixels: &[u8], out_pixels: &mut [u8]) {
    for (gray, rgb) in in_pixels.iter().zip(out_pixels.chunks_exact_mut(3)) {
        rgb.fill(*gray);
    }
}
