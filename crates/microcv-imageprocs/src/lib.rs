//! Image processing routines for `microcv-image`
//!
//! Every transform comes in two shapes: a slice-level kernel that
//! works on raw interleaved samples, and a struct implementing the
//! `OperationsTrait` defined by microcv-image that applies the kernel
//! to a whole pixel buffer.
//!
//! The buffer-level operations never read a source byte after it has
//! been overwritten: each one computes its output into a fresh
//! allocation and assigns it in one step, so a buffer is never seen
//! in a partially transformed state.
//!
//! # Example
//! - Detect edges in a gray image
//! ```
//! use microcv_image::buffer::PixelBuffer;
//! use microcv_image::traits::OperationsTrait;
//! use microcv_imageprocs::sobel::Sobel;
//! let mut image = PixelBuffer::fill(128, 100, 100, 1);
//! // execute the filter
//! Sobel::new().execute(&mut image).unwrap();
//! ```
#![warn(
    clippy::correctness,
    clippy::perf,
    clippy::missing_errors_doc,
    clippy::panic
)]
#![allow(
    clippy::needless_return,
    clippy::similar_names,
    clippy::module_name_repetitions,
    clippy::missing_panics_doc
)]

pub mod crop;
pub mod grayscale;
pub mod mathops;
pub mod sobel;
