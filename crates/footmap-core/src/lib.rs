//! Core types and utilities for foot-pressure heatmap extraction.
//!
//! This crate is intentionally small and codec-free. It describes decoded
//! pixel buffers (borrowed input views and owned RGBA output), the `f32`
//! scalar fields the pipeline passes between stages, and the logger used by
//! the binaries. It does *not* depend on any concrete image library.

mod field;
mod image;
mod logger;

pub use field::ScalarField;
pub use image::{luminance, ColorImageView, ImageViewError, PixelFormat, RgbaImage};

#[cfg(feature = "tracing")]
pub use logger::init_tracing;

pub use logger::{init_with_level, verbosity_level};
