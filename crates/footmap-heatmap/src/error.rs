use crate::colormap::PaletteError;
use footmap_core::ImageViewError;

/// Errors returned by the heatmap pipeline.
///
/// An image without any detected pressure is *not* an error; it produces a
/// white heatmap and zero statistics.
#[derive(thiserror::Error, Debug)]
pub enum HeatmapError {
    #[error(transparent)]
    InvalidInput(#[from] ImageViewError),
    #[error("invalid heatmap parameters: {0}")]
    InvalidParams(String),
    #[error(transparent)]
    Palette(#[from] PaletteError),
}
