//! Sobel derivative filter
//!
//! This operation calculates the gradient of the image, which
//! represents how quickly pixel values change from one point to
//! another in the horizontal and vertical directions, and is the
//! classic way to highlight edges.
//!
//! The matrix for sobel is
//!
//! Gx matrix
//! ```text
//!   -1, 0, 1,
//!   -2, 0, 2,
//!   -1, 0, 1
//! ```
//! Gy matrix
//! ```text
//!  1,  2,  1,
//!  0,  0,  0,
//! -1, -2, -1
//! ```
//!
//! The window is a 3x3 window. The magnitude written out is the L1
//! approximation `|gx| + |gy|` rather than the Euclidean
//! `sqrt(gx^2 + gy^2)`, saturating-clamped into 0..=255.
use log::trace;
use microcv_image::buffer::PixelBuffer;
use microcv_image::errors::ImageErrors;
use microcv_image::traits::OperationsTrait;

use crate::grayscale::RgbToGrayscale;
use crate::mathops::clamp_to_pixel;

#[rustfmt::skip]
const GX: [i32; 9] = [
    -1, 0, 1,
    -2, 0, 2,
    -1, 0, 1
];

#[rustfmt::skip]
const GY: [i32; 9] = [
     1,  2,  1,
     0,  0,  0,
    -1, -2, -1
];

/// Perform a sobel image derivative
///
/// The output is always a single channel buffer with the input's
/// width and height. Non-grayscale input is converted through
/// [`RgbToGrayscale`] first; if that cannot produce exactly one
/// channel the operation fails and the input buffer is left
/// untouched.
///
/// The outermost one-pixel ring has no full 3x3 neighbourhood and is
/// not computed. The destination is freshly allocated here, so border
/// pixels come out zero.
#[derive(Default, Copy, Clone)]
pub struct Sobel;

impl Sobel {
    #[must_use]
    pub fn new() -> Sobel {
        Self
    }
}

impl OperationsTrait for Sobel {
    fn name(&self) -> &'static str {
        "sobel"
    }

    fn execute_impl(&self, image: &mut PixelBuffer) -> Result<(), ImageErrors> {
        let gray;
        let source = if image.is_grayscale() {
            &*image
        } else {
            trace!("sobel: converting {} channel input to grayscale", image.channels());
            let mut converted = image.clone();
            RgbToGrayscale::new().execute_impl(&mut converted)?;

            if !converted.is_grayscale() {
                // conversion collapsed to the empty sentinel, the
                // input cannot be forced into single-channel form
                return Err(ImageErrors::UnsupportedChannels("sobel", image.channels()));
            }
            gray = converted;
            &gray
        };

        let (width, height) = source.dimensions();
        let mut out = PixelBuffer::allocate(width, height, 1);

        sobel_edges(source.data(), out.data_mut(), width, height);
        *image = out;

        Ok(())
    }
}

/// Carry out the sobel filter over a single channel
///
/// # Arguments
/// - `in_channel`:  Input samples, `width * height` bytes
/// - `out_channel`: Output samples, same length
/// - `width`:  Width of both channels
/// - `height`: Height of both channels
///
/// Only interior pixels are written; the outermost one-pixel ring of
/// `out_channel` keeps whatever values it already holds. Pass a
/// zeroed buffer if you want zeroed borders.
pub fn sobel_edges(in_channel: &[u8], out_channel: &mut [u8], width: usize, height: usize) {
    if width < 3 || height < 3 {
        // no pixel has a full neighbourhood
        return;
    }

    for y in 1..height - 1 {
        for x in 1..width - 1 {
            let mut gx = 0_i32;
            let mut gy = 0_i32;

            for ky in 0..3 {
                for kx in 0..3 {
                    let sample = i32::from(in_channel[(y + ky - 1) * width + (x + kx - 1)]);

                    gx += sample * GX[ky * 3 + kx];
                    gy += sample * GY[ky * 3 + kx];
                }
            }
            out_channel[y * width + x] = clamp_to_pixel(gx.abs() + gy.abs());
        }
    }
}

#[cfg(test)]
mod tests {
    use microcv_image::buffer::PixelBuffer;
    use microcv_image::errors::ImageErrors;
    use microcv_image::traits::OperationsTrait;
    use nanorand::Rng;

    use crate::sobel::Sobel;

    fn random_buffer(width: usize, height: usize, channels: usize) -> PixelBuffer {
        let mut pixels = vec![0_u8; width * height * channels];
        nanorand::WyRand::new().fill(&mut pixels);
        PixelBuffer::from_vec(pixels, width, height, channels).unwrap()
    }

    #[test]
    fn preserves_dimensions_on_grayscale_input() {
        let mut image = random_buffer(100, 100, 1);

        Sobel::new().execute(&mut image).unwrap();

        assert_eq!(image.dimensions(), (100, 100));
        assert_eq!(image.channels(), 1);
        assert_eq!(image.data().len(), 100 * 100);
    }

    #[test]
    fn converts_rgb_input_to_single_channel() {
        let mut image = random_buffer(64, 48, 3);

        Sobel::new().execute(&mut image).unwrap();

        assert_eq!(image.dimensions(), (64, 48));
        assert_eq!(image.channels(), 1);
        // same pixel count, a third of the byte count
        assert_eq!(image.data().len(), 64 * 48);
    }

    #[test]
    fn rejects_input_that_cannot_become_grayscale() {
        let original = random_buffer(32, 32, 2);
        let mut image = original.clone();

        let result = Sobel::new().execute(&mut image);

        assert!(matches!(
            result,
            Err(ImageErrors::UnsupportedChannels("sobel", 2))
        ));
        // the failed operation must not have touched the buffer
        assert_eq!(image, original);
    }

    #[test]
    fn horizontal_step_produces_two_bright_rows() {
        // top half black, bottom half white
        let (w, h) = (100, 100);
        let mut pixels = vec![0_u8; w * h];
        pixels[w * 50..].fill(255);
        let mut image = PixelBuffer::from_vec(pixels, w, h, 1).unwrap();

        Sobel::new().execute(&mut image).unwrap();

        for y in 0..h {
            for x in 0..w {
                let value = image.data()[y * w + x];
                let border = x == 0 || x == w - 1 || y == 0 || y == h - 1;
                if border {
                    // destination was freshly allocated, borders stay zero
                    assert_eq!(value, 0, "border ({x},{y})");
                } else if y == 49 || y == 50 {
                    assert_eq!(value, 255, "step row ({x},{y})");
                } else {
                    assert_eq!(value, 0, "flat region ({x},{y})");
                }
            }
        }
    }

    #[test]
    fn vertical_step_produces_two_bright_columns() {
        // left half white, right half black
        let (w, h) = (100, 100);
        let mut pixels = vec![0_u8; w * h];
        for row in pixels.chunks_exact_mut(w) {
            row[..50].fill(255);
        }
        let mut image = PixelBuffer::from_vec(pixels, w, h, 1).unwrap();

        Sobel::new().execute(&mut image).unwrap();

        for y in 0..h {
            for x in 0..w {
                let value = image.data()[y * w + x];
                let border = x == 0 || x == w - 1 || y == 0 || y == h - 1;
                if border {
                    assert_eq!(value, 0, "border ({x},{y})");
                } else if x == 49 || x == 50 {
                    assert_eq!(value, 255, "step column ({x},{y})");
                } else {
                    assert_eq!(value, 0, "flat region ({x},{y})");
                }
            }
        }
    }

    #[test]
    fn flat_image_has_no_edges() {
        let mut image = PixelBuffer::fill(137, 40, 30, 1);

        Sobel::new().execute(&mut image).unwrap();

        assert!(image.data().iter().all(|v| *v == 0));
    }

    #[test]
    fn tiny_images_are_all_border() {
        // no interior pixels to compute, output is all zero
        for (w, h) in [(1, 1), (2, 2), (2, 5), (5, 2)] {
            let mut image = random_buffer(w, h, 1);
            Sobel::new().execute(&mut image).unwrap();

            assert_eq!(image.dimensions(), (w, h));
            assert!(image.data().iter().all(|v| *v == 0), "{w}x{h}");
        }
    }
}
