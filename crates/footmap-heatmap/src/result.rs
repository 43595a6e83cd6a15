use crate::bbox::BoundingBox;
use crate::percentile::PressureRange;
use footmap_core::RgbaImage;
use serde::{Deserialize, Serialize};

/// Summary statistics of one rendered foot.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FootStats {
    /// Mean raw (clustered) pressure over the rendered stamps.
    pub average_pressure: f64,
    /// Highest raw (clustered) pressure among the rendered stamps.
    pub max_pressure: f64,
    /// Number of rendered stamps, i.e. sampled grid points with pressure.
    ///
    /// This counts coarse sample points, not pixels.
    pub total_area: u64,
}

/// Output of a heatmap run.
#[derive(Clone, Debug)]
pub struct HeatmapResult {
    /// RGBA heatmap, same size as the input.
    pub image: RgbaImage,
    pub stats: FootStats,
    /// Padded pressure region, `None` when no pressure was detected.
    pub bbox: Option<BoundingBox>,
    /// Normalization bounds derived from the raw pressure samples.
    pub range: PressureRange,
}

impl HeatmapResult {
    /// `true` when nothing was rendered (white output, zero stats).
    pub fn is_empty(&self) -> bool {
        self.stats.total_area == 0
    }
}
