//! End-to-end helpers on top of the `image` crate.

use std::path::Path;

use ::image::{DynamicImage, ImageReader, RgbaImage};
use serde::{Deserialize, Serialize};

use crate::core::{ColorImageView, PixelFormat};
use crate::heatmap::{
    BoundingBox, FootStats, HeatmapAnalyzer, HeatmapParams, HeatmapResult, PressureRange,
};
use crate::FootmapError;

#[cfg(feature = "tracing")]
use tracing::instrument;

/// Name of the JSON file written next to a pair of foot heatmaps.
pub const STATS_FILE_NAME: &str = "stats.json";

/// Convert an `image::RgbaImage` into the lightweight `footmap-core` view type.
pub fn rgba_view(img: &RgbaImage) -> ColorImageView<'_> {
    ColorImageView {
        width: img.width() as usize,
        height: img.height() as usize,
        format: PixelFormat::Rgba,
        data: img.as_raw(),
    }
}

/// Build an `image::RgbaImage` from a raw RGBA buffer.
pub fn rgba_image_from_slice(
    width: u32,
    height: u32,
    pixels: &[u8],
) -> Result<RgbaImage, FootmapError> {
    let w = usize::try_from(width).ok();
    let h = usize::try_from(height).ok();
    let Some((w, h)) = w.zip(h) else {
        return Err(FootmapError::InvalidDimensions { width, height });
    };
    let Some(expected) = w.checked_mul(h).and_then(|px| px.checked_mul(4)) else {
        return Err(FootmapError::InvalidDimensions { width, height });
    };
    if pixels.len() != expected {
        return Err(FootmapError::InvalidBuffer {
            expected,
            got: pixels.len(),
        });
    }
    RgbaImage::from_raw(width, height, pixels.to_vec())
        .ok_or(FootmapError::InvalidDimensions { width, height })
}

/// Heatmap of one foot, converted to `image` types.
#[derive(Clone, Debug)]
pub struct FootAnalysis {
    pub heatmap: RgbaImage,
    pub stats: FootStats,
    pub bbox: Option<BoundingBox>,
    pub range: PressureRange,
}

impl FootAnalysis {
    fn from_result(res: HeatmapResult) -> Result<Self, FootmapError> {
        let (width, height) = (res.image.width as u32, res.image.height as u32);
        let heatmap = RgbaImage::from_raw(width, height, res.image.into_raw())
            .ok_or(FootmapError::InvalidDimensions { width, height })?;
        Ok(Self {
            heatmap,
            stats: res.stats,
            bbox: res.bbox,
            range: res.range,
        })
    }

    /// Save the heatmap; the format follows the file extension.
    pub fn save_heatmap(&self, path: impl AsRef<Path>) -> Result<(), FootmapError> {
        self.heatmap.save(path.as_ref())?;
        log::info!("wrote heatmap {}", path.as_ref().display());
        Ok(())
    }
}

/// Analyze an already decoded RGBA image.
#[cfg_attr(
    feature = "tracing",
    instrument(level = "info", skip(img, analyzer), fields(width = img.width(), height = img.height()))
)]
pub fn analyze_rgba(
    img: &RgbaImage,
    analyzer: &HeatmapAnalyzer,
) -> Result<FootAnalysis, FootmapError> {
    log::debug!(
        "analyzing {}x{} sheet, grid pitch {} px",
        img.width(),
        img.height(),
        analyzer.params().grid_size
    );
    let res = analyzer.analyze(&rgba_view(img))?;
    FootAnalysis::from_result(res)
}

/// Analyze any decoded image; it is converted to RGBA first.
pub fn analyze_image(
    img: &DynamicImage,
    params: &HeatmapParams,
) -> Result<FootAnalysis, FootmapError> {
    let analyzer = HeatmapAnalyzer::new(params.clone())?;
    analyze_rgba(&img.to_rgba8(), &analyzer)
}

/// Decode an image file and analyze it.
pub fn analyze_path(
    path: impl AsRef<Path>,
    params: &HeatmapParams,
) -> Result<FootAnalysis, FootmapError> {
    let img = ImageReader::open(path.as_ref())?.decode()?;
    log::debug!(
        "decoded {} ({}x{})",
        path.as_ref().display(),
        img.width(),
        img.height()
    );
    analyze_image(&img, params)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FootSide {
    Left,
    Right,
}

impl FootSide {
    /// Output file name used for this side's heatmap.
    pub fn file_name(self) -> &'static str {
        match self {
            FootSide::Left => "left-foot-pressure-map.png",
            FootSide::Right => "right-foot-pressure-map.png",
        }
    }
}

/// Per-foot statistics as written to `stats.json`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FeetStats {
    pub left: FootStats,
    pub right: FootStats,
}

/// Left and right heatmaps of one session.
#[derive(Clone, Debug)]
pub struct FootPair {
    pub left: FootAnalysis,
    pub right: FootAnalysis,
}

impl FootPair {
    pub fn get(&self, side: FootSide) -> &FootAnalysis {
        match side {
            FootSide::Left => &self.left,
            FootSide::Right => &self.right,
        }
    }

    pub fn stats(&self) -> FeetStats {
        FeetStats {
            left: self.left.stats,
            right: self.right.stats,
        }
    }

    /// Write both heatmaps and `stats.json` into `dir`, creating it if needed.
    pub fn write_to_dir(&self, dir: impl AsRef<Path>) -> Result<FeetStats, FootmapError> {
        let dir = dir.as_ref();
        std::fs::create_dir_all(dir)?;
        for side in [FootSide::Left, FootSide::Right] {
            self.get(side).save_heatmap(dir.join(side.file_name()))?;
        }
        let stats = self.stats();
        std::fs::write(
            dir.join(STATS_FILE_NAME),
            serde_json::to_string_pretty(&stats)?,
        )?;
        Ok(stats)
    }
}

/// Analyze both feet with the same parameters.
///
/// The two images are independent; with the `rayon` feature they are
/// processed concurrently.
pub fn analyze_feet(
    left: &DynamicImage,
    right: &DynamicImage,
    params: &HeatmapParams,
) -> Result<FootPair, FootmapError> {
    let analyzer = HeatmapAnalyzer::new(params.clone())?;
    let run = |img: &DynamicImage| analyze_rgba(&img.to_rgba8(), &analyzer);

    #[cfg(feature = "rayon")]
    let (left, right) = rayon::join(|| run(left), || run(right));
    #[cfg(not(feature = "rayon"))]
    let (left, right) = (run(left), run(right));

    Ok(FootPair {
        left: left?,
        right: right?,
    })
}
