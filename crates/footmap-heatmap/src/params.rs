use serde::{Deserialize, Serialize};

/// Upper bound for every pixel-sized parameter (radii, grid pitch, padding).
///
/// Smoothing and clustering windows are `(2r + 1)^2`; beyond this size they
/// stop being meaningful for any photographed mat.
pub const MAX_PIXEL_PARAM: usize = 4096;

/// Tunable constants of the heatmap pipeline.
///
/// Every field has a documented default; partial JSON configs fill the rest
/// from `HeatmapParams::default()`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeatmapParams {
    /// Luminance gradient magnitude above which a pixel is an edge (default 30).
    pub edge_threshold: f64,
    /// Ray length, in pixels, of the grid-line search (default 3).
    ///
    /// Pixels closer than this to any border never get grid confidence.
    pub grid_search_radius: usize,
    /// Minimum number of ray hits (out of 8) for a pixel to count as
    /// lying on the mat grid (default 2).
    pub min_grid_lines: usize,
    /// Radius of the positive-support Gaussian blur (default 4, sigma = radius / 2).
    pub smoothing_radius: usize,
    /// Radius of the linear-falloff clustering average (default 16).
    pub cluster_radius: usize,
    /// Nominal sensor grid pitch in pixels (default 8).
    ///
    /// Drives the render stride and stamp radius (`grid_size / 2`) and the
    /// minimum bounding-box padding (`2 * grid_size`).
    pub grid_size: usize,
    /// Lower percentile used as the normalization floor (default 2).
    pub percentile_low: f64,
    /// Upper percentile used as the normalization ceiling (default 98).
    pub percentile_high: f64,
    /// Minimum bounding-box padding in pixels (default 30).
    pub bounding_box_min_padding: usize,
}

impl Default for HeatmapParams {
    fn default() -> Self {
        Self {
            edge_threshold: 30.0,
            grid_search_radius: 3,
            min_grid_lines: 2,
            smoothing_radius: 4,
            cluster_radius: 16,
            grid_size: 8,
            percentile_low: 2.0,
            percentile_high: 98.0,
            bounding_box_min_padding: 30,
        }
    }
}

impl HeatmapParams {
    /// Padding applied on each side of the pressure bounding box.
    pub fn bbox_padding(&self) -> usize {
        self.bounding_box_min_padding
            .max(self.grid_size.saturating_mul(2))
    }

    /// Step between sampled render points, in both axes.
    pub fn sample_stride(&self) -> usize {
        (self.grid_size / 2).max(1)
    }

    /// Radius of one rendered disc.
    pub fn stamp_radius(&self) -> usize {
        self.grid_size / 2
    }

    /// Reject configurations that would make normalization meaningless or
    /// the pixel windows unbounded.
    pub fn validate(&self) -> Result<(), String> {
        for (name, value) in [
            ("grid_search_radius", self.grid_search_radius),
            ("smoothing_radius", self.smoothing_radius),
            ("cluster_radius", self.cluster_radius),
            ("grid_size", self.grid_size),
            ("bounding_box_min_padding", self.bounding_box_min_padding),
        ] {
            if value > MAX_PIXEL_PARAM {
                return Err(format!(
                    "{name} must be at most {MAX_PIXEL_PARAM} pixels, got {value}"
                ));
            }
        }
        if !self.edge_threshold.is_finite() || self.edge_threshold < 0.0 {
            return Err(format!(
                "edge_threshold must be finite and non-negative, got {}",
                self.edge_threshold
            ));
        }
        for (name, p) in [
            ("percentile_low", self.percentile_low),
            ("percentile_high", self.percentile_high),
        ] {
            if !(0.0..=100.0).contains(&p) {
                return Err(format!("{name} must be within [0, 100], got {p}"));
            }
        }
        if self.percentile_low > self.percentile_high {
            return Err(format!(
                "percentile_low ({}) exceeds percentile_high ({})",
                self.percentile_low, self.percentile_high
            ));
        }
        Ok(())
    }
}
