//! Core image representation for the microcv crates
//!
//! An image is a single [`PixelBuffer`](crate::buffer::PixelBuffer),
//! a contiguous byte buffer storing row-major, channel-interleaved
//! 8-bit samples together with its width, height and channel count.
//!
//! This crate also carries the boundary with the codec layer:
//! [`codecs`](crate::codecs) maps filename extensions to formats and
//! decodes/encodes files into and out of pixel buffers. Nothing else
//! in the workspace performs file I/O.
#![warn(
    clippy::correctness,
    clippy::perf,
    clippy::missing_errors_doc,
    clippy::panic
)]
#![allow(clippy::needless_return, clippy::module_name_repetitions)]

pub mod buffer;
pub mod codecs;
pub mod errors;
pub mod traits;
