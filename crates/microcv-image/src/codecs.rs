//! Boundary with the external codec layer
//!
//! The transforms in this workspace never touch the filesystem; every
//! decode and encode goes through here. The actual byte-level codecs
//! are delegated to the `image` crate, this module only classifies
//! filenames and moves sample data between [`PixelBuffer`] and the
//! codec's own types.
//!
//! Decoded images are normalised to either 1 channel (sources that
//! carry no color) or 3 channel RGB. Encoding supports exactly those
//! two channel counts, anything else is rejected before the codec is
//! invoked.
use std::path::Path;

use log::trace;

use crate::buffer::PixelBuffer;
use crate::errors::ImageErrors;

/// Possible JPEG extensions, from <https://en.wikipedia.org/wiki/JPEG>
const JPEG_EXTENSIONS: [&str; 6] = ["jpg", "jpeg", "jpe", "jif", "jfif", "jfi"];
const TIFF_EXTENSIONS: [&str; 2] = ["tif", "tiff"];
const PNG_EXTENSION: &str = "png";

/// All image formats the codec boundary understands
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ImageFormat {
    /// Joint Photographic Experts Group
    Jpeg,
    /// Portable Network Graphics
    Png,
    /// Tag Image File Format
    Tiff,
    /// Any unknown format
    Unknown
}

impl ImageFormat {
    /// Classify a filename by its extension
    ///
    /// This is a pure string lookup against the known extension
    /// lists, compared case-insensitively. Files without an extension,
    /// or with one we do not recognise, map to [`ImageFormat::Unknown`]
    pub fn from_path<P: AsRef<Path>>(path: P) -> ImageFormat {
        let Some(extension) = path.as_ref().extension().and_then(|e| e.to_str()) else {
            return ImageFormat::Unknown;
        };

        if JPEG_EXTENSIONS.iter().any(|e| extension.eq_ignore_ascii_case(e)) {
            return ImageFormat::Jpeg;
        }
        if extension.eq_ignore_ascii_case(PNG_EXTENSION) {
            return ImageFormat::Png;
        }
        if TIFF_EXTENSIONS.iter().any(|e| extension.eq_ignore_ascii_case(e)) {
            return ImageFormat::Tiff;
        }
        ImageFormat::Unknown
    }

    /// Return true if we can decode files of this format
    #[must_use]
    pub const fn has_decoder(self) -> bool {
        !matches!(self, ImageFormat::Unknown)
    }

    /// Return true if we can encode buffers into this format
    #[must_use]
    pub const fn has_encoder(self) -> bool {
        !matches!(self, ImageFormat::Unknown)
    }

    /// The codec crate's equivalent format, `None` for unknown
    fn to_codec_format(self) -> Option<image::ImageFormat> {
        match self {
            ImageFormat::Jpeg => Some(image::ImageFormat::Jpeg),
            ImageFormat::Png => Some(image::ImageFormat::Png),
            ImageFormat::Tiff => Some(image::ImageFormat::Tiff),
            ImageFormat::Unknown => None
        }
    }
}

impl PixelBuffer {
    /// Decode an image file into a pixel buffer
    ///
    /// Grayscale sources produce a 1 channel buffer, everything else
    /// is converted to 3 channel RGB, so the result always satisfies
    /// the channel counts the transforms expect.
    ///
    /// # Errors
    /// - [`ImageErrors::UnsupportedFormat`] if the extension is not a
    ///   format we decode, checked before the file is touched
    /// - [`ImageErrors::ImageDecodeErrors`] if the codec rejects the
    ///   file contents
    pub fn open<P: AsRef<Path>>(path: P) -> Result<PixelBuffer, ImageErrors> {
        let path = path.as_ref();
        let format = ImageFormat::from_path(path);

        if !format.has_decoder() {
            return Err(ImageErrors::UnsupportedFormat(format));
        }
        trace!("decoding {} as {:?}", path.display(), format);

        let decoded = image::open(path)
            .map_err(|e| ImageErrors::ImageDecodeErrors(e.to_string()))?;

        match decoded.color() {
            image::ColorType::L8
            | image::ColorType::L16
            | image::ColorType::La8
            | image::ColorType::La16 => {
                let gray = decoded.into_luma8();
                let (width, height) = gray.dimensions();
                PixelBuffer::from_vec(gray.into_raw(), width as usize, height as usize, 1)
            }
            _ => {
                let rgb = decoded.into_rgb8();
                let (width, height) = rgb.dimensions();
                PixelBuffer::from_vec(rgb.into_raw(), width as usize, height as usize, 3)
            }
        }
    }

    /// Encode this buffer into a file, format chosen by extension
    ///
    /// # Errors
    /// - [`ImageErrors::UnsupportedFormat`] if the extension is not a
    ///   format we encode
    /// - [`ImageErrors::UnsupportedChannels`] for channel counts other
    ///   than 1 and 3
    /// - [`ImageErrors::ImageEncodeErrors`] if the codec fails
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ImageErrors> {
        let path = path.as_ref();
        let format = ImageFormat::from_path(path);

        let Some(codec_format) = format.to_codec_format() else {
            return Err(ImageErrors::UnsupportedFormat(format));
        };
        let color = match self.channels() {
            1 => image::ExtendedColorType::L8,
            3 => image::ExtendedColorType::Rgb8,
            channels => return Err(ImageErrors::UnsupportedChannels("encode", channels))
        };
        trace!("encoding {} as {:?}", path.display(), format);

        image::save_buffer_with_format(
            path,
            self.data(),
            self.width() as u32,
            self.height() as u32,
            color,
            codec_format
        )
        .map_err(|e| ImageErrors::ImageEncodeErrors(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use crate::buffer::PixelBuffer;
    use crate::codecs::ImageFormat;
    use crate::errors::ImageErrors;

    #[test]
    fn classify_known_extensions() {
        for name in ["a.jpg", "a.jpeg", "a.jpe", "a.jif", "a.jfif", "a.jfi", "A.JPG"] {
            assert_eq!(ImageFormat::from_path(name), ImageFormat::Jpeg, "{name}");
        }
        assert_eq!(ImageFormat::from_path("a.png"), ImageFormat::Png);
        assert_eq!(ImageFormat::from_path("a.tif"), ImageFormat::Tiff);
        assert_eq!(ImageFormat::from_path("a.tiff"), ImageFormat::Tiff);
    }

    #[test]
    fn classify_unknown_extensions() {
        for name in ["a.gif", "a.webp", "a", "a.", "jpg"] {
            assert_eq!(ImageFormat::from_path(name), ImageFormat::Unknown, "{name}");
        }
    }

    #[test]
    fn unknown_formats_have_no_codec() {
        assert!(!ImageFormat::Unknown.has_decoder());
        assert!(!ImageFormat::Unknown.has_encoder());
        assert!(ImageFormat::Tiff.has_decoder());
        assert!(ImageFormat::Jpeg.has_encoder());
    }

    #[test]
    fn save_rejects_unsupported_channel_counts() {
        let buffer = PixelBuffer::allocate(4, 4, 2);
        let result = buffer.save("two_channels.png");

        assert!(matches!(
            result,
            Err(ImageErrors::UnsupportedChannels("encode", 2))
        ));
    }

    #[test]
    fn open_rejects_unknown_extension_before_io() {
        // the file does not exist, the extension check must fire first
        let result = PixelBuffer::open("missing.webp");
        assert!(matches!(result, Err(ImageErrors::UnsupportedFormat(_))));
    }
}
