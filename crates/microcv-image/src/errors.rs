//! Errors shared by the microcv crates
use std::fmt::{Debug, Display, Formatter};

use crate::codecs::ImageFormat;

/// All errors possible when working with pixel buffers,
/// transforms and the codec boundary
pub enum ImageErrors {
    /// A buffer was constructed with a byte length that does not
    /// match `width * height * channels`
    DimensionsMismatch(usize, usize),
    /// An operation received a channel count it cannot process.
    ///
    /// First field is the operation name, second is the offending
    /// channel count
    UnsupportedChannels(&'static str, usize),
    /// The file extension does not map to a format we have a
    /// codec for
    UnsupportedFormat(ImageFormat),
    /// The underlying codec failed to decode a file
    ImageDecodeErrors(String),
    /// The underlying codec failed to encode a buffer
    ImageEncodeErrors(String),
    /// Generic I/O errors, e.g. the file does not exist
    IoErrors(std::io::Error),
    /// Any other error, carrying its own message
    GenericString(String)
}

impl Debug for ImageErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DimensionsMismatch(expected, found) => {
                writeln!(
                    f,
                    "expected a buffer of length {expected} but found {found}"
                )
            }
            Self::UnsupportedChannels(operation, channels) => {
                writeln!(
                    f,
                    "operation {operation} cannot handle a {channels} channel buffer"
                )
            }
            Self::UnsupportedFormat(format) => {
                writeln!(f, "no codec for format {format:?}")
            }
            Self::ImageDecodeErrors(reason) => {
                writeln!(f, "decoding failed: {reason}")
            }
            Self::ImageEncodeErrors(reason) => {
                writeln!(f, "encoding failed: {reason}")
            }
            Self::IoErrors(reason) => {
                writeln!(f, "i/o error: {reason}")
            }
            Self::GenericString(message) => {
                writeln!(f, "{message}")
            }
        }
    }
}

impl Display for ImageErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}

impl std::error::Error for ImageErrors {}

impl From<std::io::Error> for ImageErrors {
    fn from(error: std::io::Error) -> Self {
        ImageErrors::IoErrors(error)
    }
}
