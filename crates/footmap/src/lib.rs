//! High-level facade crate for the `footmap-*` workspace.
//!
//! This crate provides:
//! - re-exports of the core types and the heatmap pipeline
//! - JSON loading for [`HeatmapParams`]
//! - (feature `image`) end-to-end helpers that decode a photo of a pressure
//!   sheet, run the pipeline and save the heatmap as an image file
//! - (feature `cli`) the `footmap` binary
//!
//! ## Quickstart
//!
//! ```no_run
//! use footmap::analysis::analyze_path;
//! use footmap::HeatmapParams;
//!
//! # fn main() -> Result<(), footmap::FootmapError> {
//! let foot = analyze_path("left.jpg", &HeatmapParams::default())?;
//! foot.save_heatmap("left-foot-pressure-map.png")?;
//! println!("average pressure: {:.2}", foot.stats.average_pressure);
//! # Ok(())
//! # }
//! ```
//!
//! ## API map
//! - `footmap::core`: pixel views, scalar fields, logger.
//! - `footmap::heatmap`: the pipeline stages and [`HeatmapAnalyzer`].
//! - `footmap::analysis` (feature `image`): helpers on `image` crate types.

pub use footmap_core as core;
pub use footmap_heatmap as heatmap;

pub use footmap_heatmap::{
    analyze, BoundingBox, FootStats, HeatmapAnalyzer, HeatmapError, HeatmapParams, HeatmapResult,
    Palette, PixelFormat, PressureRange,
};

mod config;
mod error;

pub use config::load_params;
pub use error::FootmapError;

#[cfg(feature = "image")]
pub mod analysis;
