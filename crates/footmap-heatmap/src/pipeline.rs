use footmap_core::{ColorImageView, PixelFormat};
use log::debug;

use crate::bbox::find_bounding_box;
use crate::cluster::cluster_pressure;
use crate::colormap::Palette;
use crate::edges::detect_edges;
use crate::error::HeatmapError;
use crate::grid::grid_confidence;
use crate::params::HeatmapParams;
use crate::percentile::PressureRange;
use crate::pressure::build_pressure_map;
use crate::render::render_heatmap;
use crate::result::HeatmapResult;
use crate::smooth::smooth_positive;

#[cfg(feature = "tracing")]
use tracing::instrument;

/// Foot-pressure heatmap extractor.
///
/// Stateless apart from its configuration: one analyzer can process any
/// number of images, from any number of threads.
#[derive(Clone, Debug)]
pub struct HeatmapAnalyzer {
    params: HeatmapParams,
    palette: Palette,
}

impl HeatmapAnalyzer {
    /// Analyzer with the default palette.
    pub fn new(params: HeatmapParams) -> Result<Self, HeatmapError> {
        Self::with_palette(params, Palette::default())
    }

    pub fn with_palette(params: HeatmapParams, palette: Palette) -> Result<Self, HeatmapError> {
        params.validate().map_err(HeatmapError::InvalidParams)?;
        Ok(Self { params, palette })
    }

    pub fn params(&self) -> &HeatmapParams {
        &self.params
    }

    /// Run the full pipeline on one decoded image.
    ///
    /// edges -> grid confidence -> raw pressure -> {percentile range, bbox}
    /// -> smoothing -> clustering -> rendering. An image without detectable
    /// pressure yields a white heatmap and zero stats, not an error.
    #[cfg_attr(
        feature = "tracing",
        instrument(level = "info", skip(self, img), fields(width = img.width, height = img.height))
    )]
    pub fn analyze(&self, img: &ColorImageView<'_>) -> Result<HeatmapResult, HeatmapError> {
        img.validate()?;
        let p = &self.params;

        let edges = detect_edges(img, p.edge_threshold);
        debug!("edge pixels: {}", edges.count_positive());

        let confidence = grid_confidence(&edges, p.grid_search_radius, p.min_grid_lines);
        debug!("grid-confident pixels: {}", confidence.count_positive());

        let pressure = build_pressure_map(img, &confidence);

        let range =
            PressureRange::from_samples(&pressure.samples, p.percentile_low, p.percentile_high);
        let bbox = find_bounding_box(&pressure.field, p.bbox_padding());
        debug!(
            "pressure samples: {}, range [{:.3}, {:.3}], bbox {:?}",
            pressure.samples.len(),
            range.min,
            range.max,
            bbox
        );

        let Some(bbox) = bbox else {
            debug!("no pressure detected; rendering blank heatmap");
            let (image, stats) = render_heatmap(
                &pressure.field,
                None,
                &range,
                &self.palette,
                p.sample_stride(),
                p.stamp_radius(),
            );
            return Ok(HeatmapResult {
                image,
                stats,
                bbox: None,
                range,
            });
        };

        let smoothed = smooth_positive(&pressure.field, p.smoothing_radius);
        let clustered = cluster_pressure(&smoothed, &bbox, p.cluster_radius);
        debug!("peak clustered pressure: {:.3}", clustered.max_value());

        let (image, stats) = render_heatmap(
            &clustered,
            Some(&bbox),
            &range,
            &self.palette,
            p.sample_stride(),
            p.stamp_radius(),
        );
        debug!(
            "rendered {} stamps, avg {:.3}, max {:.3}",
            stats.total_area, stats.average_pressure, stats.max_pressure
        );

        Ok(HeatmapResult {
            image,
            stats,
            bbox: Some(bbox),
            range,
        })
    }
}

/// One-shot entry point on a raw buffer.
///
/// Validates `width`, `height` and the buffer length against `format`
/// before any stage runs.
pub fn analyze(
    data: &[u8],
    width: u32,
    height: u32,
    format: PixelFormat,
    params: &HeatmapParams,
) -> Result<HeatmapResult, HeatmapError> {
    let view = ColorImageView::new(width as usize, height as usize, format, data)?;
    HeatmapAnalyzer::new(params.clone())?.analyze(&view)
}
