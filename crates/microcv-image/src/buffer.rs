//! This module represents a single image
//!
//! An image is represented as
//!
//! - one contiguous byte buffer
//!     - storing row-major rows
//!         - with channel samples interleaved per pixel
//!
//! The byte offset of pixel `(x, y)` channel `c` is
//! `(y * width + x) * channels + c`.
//!
//! The container enforces one invariant: the buffer length is always
//! `width * height * channels` whenever a method returns, including
//! error returns. Operations that change dimensions replace the whole
//! byte sequence, they never leave a partially resized buffer behind.
use std::fmt::{Debug, Formatter};

use crate::errors::ImageErrors;

/// A single owned image
///
/// Stores 8-bit samples, interleaved, together with the dimensions
/// needed to address them. One channel means grayscale, three mean
/// RGB; other channel counts are representable but most transforms
/// reject them.
///
/// Cloning performs a deep copy of the byte sequence, two buffers
/// never share backing memory.
#[derive(Clone, Eq, PartialEq)]
pub struct PixelBuffer {
    pixels:   Vec<u8>,
    width:    usize,
    height:   usize,
    channels: usize
}

impl PixelBuffer {
    /// Create an empty 0x0 buffer with no channels
    ///
    /// The empty buffer doubles as the sentinel value some transforms
    /// collapse to when handed an unsupported channel count, see
    /// [`is_empty`](Self::is_empty)
    #[must_use]
    pub const fn new() -> PixelBuffer {
        PixelBuffer {
            pixels:   Vec::new(),
            width:    0,
            height:   0,
            channels: 0
        }
    }

    /// Create a freshly sized buffer filled with zeroes
    #[must_use]
    pub fn allocate(width: usize, height: usize, channels: usize) -> PixelBuffer {
        PixelBuffer {
            pixels: vec![0; width * height * channels],
            width,
            height,
            channels
        }
    }

    /// Create a buffer with every sample set to `pixel`
    #[must_use]
    pub fn fill(pixel: u8, width: usize, height: usize, channels: usize) -> PixelBuffer {
        PixelBuffer {
            pixels: vec![pixel; width * height * channels],
            width,
            height,
            channels
        }
    }

    /// Create a buffer taking ownership of `pixels`
    ///
    /// # Errors
    /// Returns [`ImageErrors::DimensionsMismatch`] if the vector
    /// length is not `width * height * channels`
    pub fn from_vec(
        pixels: Vec<u8>, width: usize, height: usize, channels: usize
    ) -> Result<PixelBuffer, ImageErrors> {
        let expected = width * height * channels;
        if pixels.len() != expected {
            return Err(ImageErrors::DimensionsMismatch(expected, pixels.len()));
        }
        Ok(PixelBuffer {
            pixels,
            width,
            height,
            channels
        })
    }

    /// Replace the contents with a zero-filled byte sequence of the
    /// new size
    ///
    /// Old data is not preserved. Callers must not rely on the
    /// zero-fill, it is an implementation detail
    pub fn resize(&mut self, width: usize, height: usize, channels: usize) {
        self.width = width;
        self.height = height;
        self.channels = channels;
        self.pixels.clear();
        self.pixels.resize(width * height * channels, 0);
    }

    /// Image width in pixels
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Image height in pixels
    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Number of interleaved channels per pixel
    #[must_use]
    pub const fn channels(&self) -> usize {
        self.channels
    }

    /// Get image dimensions as a tuple of (width, height)
    #[must_use]
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Return true if the image stores one sample per pixel
    #[must_use]
    pub const fn is_grayscale(&self) -> bool {
        self.channels == 1
    }

    /// Return true if this is the zero-sized sentinel buffer
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Byte offset of the first channel of pixel `(x, y)`
    ///
    /// Callers are responsible for staying inside the image bounds,
    /// this is only debug-asserted
    #[must_use]
    pub fn offset_of(&self, x: usize, y: usize) -> usize {
        debug_assert!(x < self.width && y < self.height);
        (y * self.width + x) * self.channels
    }

    /// Immutable view of the backing byte sequence
    #[must_use]
    pub fn data(&self) -> &[u8] {
        &self.pixels
    }

    /// Mutable view of the backing byte sequence
    ///
    /// Writes through this view cannot change the buffer length
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.pixels
    }

    /// Consume the buffer and return the backing byte sequence
    #[must_use]
    pub fn into_vec(self) -> Vec<u8> {
        self.pixels
    }
}

impl Default for PixelBuffer {
    fn default() -> Self {
        PixelBuffer::new()
    }
}

impl Debug for PixelBuffer {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PixelBuffer")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("channels", &self.channels)
            .field("len", &self.pixels.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use nanorand::Rng;

    use crate::buffer::PixelBuffer;

    fn random_buffer(width: usize, height: usize, channels: usize) -> PixelBuffer {
        let mut pixels = vec![0_u8; width * height * channels];
        nanorand::WyRand::new().fill(&mut pixels);
        PixelBuffer::from_vec(pixels, width, height, channels).unwrap()
    }

    #[test]
    fn init_empty() {
        let buffer = PixelBuffer::new();
        assert_eq!(buffer.width(), 0);
        assert_eq!(buffer.height(), 0);
        assert_eq!(buffer.channels(), 0);
        assert!(buffer.is_empty());
    }

    #[test]
    fn resize_changes_length() {
        let mut buffer = PixelBuffer::new();
        buffer.resize(17, 4, 24);

        assert_eq!(buffer.width(), 17);
        assert_eq!(buffer.height(), 4);
        assert_eq!(buffer.channels(), 24);
        assert_eq!(buffer.data().len(), 17 * 4 * 24);
    }

    #[test]
    fn grayscale_is_one_channel() {
        let mut buffer = PixelBuffer::new();
        assert!(!buffer.is_grayscale());

        buffer.resize(17, 4, 3);
        assert!(!buffer.is_grayscale());

        buffer.resize(17, 4, 1);
        assert!(buffer.is_grayscale());
    }

    #[test]
    fn clone_is_deep_and_equal() {
        let buffer = random_buffer(107, 163, 3);
        let copy = buffer.clone();

        assert_eq!(copy.dimensions(), buffer.dimensions());
        assert_eq!(copy.channels(), buffer.channels());
        assert_eq!(copy.data(), buffer.data());
        assert_eq!(copy, buffer);
    }

    #[test]
    fn from_vec_rejects_wrong_length() {
        let result = PixelBuffer::from_vec(vec![0_u8; 10], 2, 2, 3);
        assert!(result.is_err());
    }

    #[test]
    fn offset_addresses_interleaved_pixels() {
        let buffer = random_buffer(31, 17, 3);
        // last channel of the last pixel is the last byte
        let offset = buffer.offset_of(30, 16) + 2;
        assert_eq!(offset, buffer.data().len() - 1);
    }
}
