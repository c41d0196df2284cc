//! Crop an image
//!
//! A crop is a bytewise sub-copy: every output row is one contiguous
//! run of `(x2 - x1) * channels` bytes taken from the matching source
//! row starting at `x1 * channels`, so interleaving is preserved
//! untouched.
//!
//! The rectangle uses exclusive upper bounds, `(x1, y1)` inclusive to
//! `(x2, y2)` exclusive. An invalid rectangle is deliberately a no-op
//! rather than an error, the buffer is returned unchanged.
use log::warn;
use microcv_image::buffer::PixelBuffer;
use microcv_image::errors::ImageErrors;
use microcv_image::traits::OperationsTrait;

/// Crop out a part of an image
///
/// This replaces the image with a smaller one holding exactly the
/// pixels inside the rectangle, row by row.
///
/// # Example
/// Cut a 100x100 window out of a larger image
/// ```
/// use microcv_image::buffer::PixelBuffer;
/// use microcv_image::traits::OperationsTrait;
/// use microcv_imageprocs::crop::Crop;
///
/// let mut image = PixelBuffer::fill(255, 1000, 1000, 3);
/// Crop::new(450, 450, 550, 550).execute(&mut image).unwrap();
/// assert_eq!(image.dimensions(), (100, 100));
/// ```
pub struct Crop {
    x1: usize,
    y1: usize,
    x2: usize,
    y2: usize
}

impl Crop {
    /// Create a new crop operation
    ///
    /// # Arguments
    /// - x1, y1: Top left corner of the rectangle, inclusive
    /// - x2, y2: Bottom right corner of the rectangle, exclusive
    ///
    /// Origin is the image top left corner.
    #[must_use]
    pub fn new(x1: usize, y1: usize, x2: usize, y2: usize) -> Crop {
        Crop { x1, y1, x2, y2 }
    }

    const fn is_valid_for(&self, width: usize, height: usize) -> bool {
        self.x1 < self.x2 && self.x2 <= width && self.y1 < self.y2 && self.y2 <= height
    }
}

impl OperationsTrait for Crop {
    fn name(&self) -> &'static str {
        "crop"
    }

    fn execute_impl(&self, image: &mut PixelBuffer) -> Result<(), ImageErrors> {
        let (width, height) = image.dimensions();

        if !self.is_valid_for(width, height) {
            // fail soft, the caller gets their buffer back unchanged
            warn!(
                "crop rectangle ({},{})-({},{}) is invalid for a {}x{} image, skipping",
                self.x1, self.y1, self.x2, self.y2, width, height
            );
            return Ok(());
        }
        let channels = image.channels();
        let mut out = PixelBuffer::allocate(self.x2 - self.x1, self.y2 - self.y1, channels);

        crop(
            image.data(),
            width,
            out.data_mut(),
            self.x1,
            self.y1,
            self.x2,
            self.y2,
            channels
        );
        *image = out;

        Ok(())
    }
}

/// Crop a raw interleaved buffer
///
/// # Arguments
///
/// * `in_image`:  Input interleaved samples
/// * `in_width`:  Input width in pixels
/// * `out_image`: Output buffer, `(x2-x1) * (y2-y1) * channels` bytes
/// * `x1`, `y1`:  Top left corner, inclusive
/// * `x2`, `y2`:  Bottom right corner, exclusive
/// * `channels`:  Interleaved channels per pixel
///
/// `out_image` will contain the cropped image. The caller is expected
/// to have validated the rectangle; rows that would fall outside the
/// input are simply not copied.
#[allow(clippy::too_many_arguments)]
pub fn crop(
    in_image: &[u8], in_width: usize, out_image: &mut [u8], x1: usize, y1: usize, x2: usize,
    y2: usize, channels: usize
) {
    let in_stride = in_width * channels;
    let out_stride = (x2 - x1) * channels;

    if in_stride == 0 || out_stride == 0 {
        // these generate panic paths for chunks_exact so just eliminate them
        return;
    }

    for (in_row, out_row) in in_image
        .chunks_exact(in_stride)
        .skip(y1)
        .take(y2 - y1)
        .zip(out_image.chunks_exact_mut(out_stride))
    {
        if let Some(run) = in_row.get(x1 * channels..x2 * channels) {
            out_row.copy_from_slice(run);
        }
    }
}
