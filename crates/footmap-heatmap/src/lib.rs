//! Foot-pressure heatmaps from photographed pressure-sensitive mats.
//!
//! The pipeline takes a decoded RGB(A) buffer of a gridded sensor sheet and
//! produces a color-coded RGBA heatmap of the same size plus [`FootStats`]:
//!
//! 1. [`edges::detect_edges`]: binary edge map from luminance gradients.
//! 2. [`grid::grid_confidence`]: per-pixel likelihood of lying on the mat grid.
//! 3. [`pressure::build_pressure_map`]: inverted luminance gated by confidence.
//! 4. [`PressureRange`] (2nd/98th percentile) and [`find_bounding_box`].
//! 5. [`smooth::smooth_positive`]: Gaussian blur over positive support only.
//! 6. [`cluster::cluster_pressure`]: radial averaging inside the bounding box.
//! 7. [`render::render_heatmap`]: faded disc stamps colored by [`Palette`].
//!
//! Every stage is a pure function from borrowed input to a freshly owned
//! field; nothing is shared between runs. Analyzing a left and a right foot
//! is simply two calls.
//!
//! ```
//! use footmap_heatmap::{analyze, HeatmapParams, PixelFormat};
//!
//! let white = vec![255u8; 64 * 64 * 4];
//! let res = analyze(&white, 64, 64, PixelFormat::Rgba, &HeatmapParams::default())?;
//! assert!(res.is_empty());
//! # Ok::<(), footmap_heatmap::HeatmapError>(())
//! ```

mod bbox;
pub mod cluster;
pub mod colormap;
pub mod edges;
mod error;
pub mod grid;
mod params;
pub mod percentile;
mod pipeline;
pub mod pressure;
pub mod render;
mod result;
mod rows;
pub mod smooth;

pub use footmap_core::{ColorImageView, ImageViewError, PixelFormat, RgbaImage, ScalarField};

pub use bbox::{find_bounding_box, BoundingBox};
pub use colormap::{ColorStop, Palette, PaletteError, DEFAULT_STOPS};
pub use error::HeatmapError;
pub use params::{HeatmapParams, MAX_PIXEL_PARAM};
pub use percentile::PressureRange;
pub use pipeline::{analyze, HeatmapAnalyzer};
pub use result::{FootStats, HeatmapResult};
