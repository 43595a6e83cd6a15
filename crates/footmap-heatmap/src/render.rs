//! Stamp-based heatmap rendering and statistics accumulation.

use crate::bbox::BoundingBox;
use crate::colormap::Palette;
use crate::percentile::PressureRange;
use crate::result::FootStats;
use footmap_core::{RgbaImage, ScalarField};

#[cfg(feature = "tracing")]
use tracing::instrument;

/// Alpha-blend a filled disc of `color` centred on `(cx, cy)`.
///
/// Each pixel within `radius` gets opacity `alpha * (1 - d / radius)`
/// (clamped to `[0, 1]`), so the disc fades out toward its rim. The alpha
/// channel of every touched pixel is forced opaque. A zero radius stamps the
/// centre pixel only, at full `alpha`.
pub fn stamp_disc(
    canvas: &mut RgbaImage,
    cx: usize,
    cy: usize,
    radius: usize,
    color: [u8; 3],
    alpha: f64,
) {
    let r = radius as isize;
    let radius_f = radius as f64;
    for dy in -r..=r {
        let ny = cy as isize + dy;
        if ny < 0 || ny >= canvas.height as isize {
            continue;
        }
        for dx in -r..=r {
            let nx = cx as isize + dx;
            if nx < 0 || nx >= canvas.width as isize {
                continue;
            }
            let distance = ((dx * dx + dy * dy) as f64).sqrt();
            if distance > radius_f {
                continue;
            }
            let fade = if radius == 0 {
                1.0
            } else {
                (1.0 - distance / radius_f).clamp(0.0, 1.0)
            };
            let a = alpha * fade;

            let px = canvas.pixel_mut(nx as usize, ny as usize);
            for (dst, &src) in px[..3].iter_mut().zip(color.iter()) {
                let blended = src as f64 * a + *dst as f64 * (1.0 - a);
                *dst = blended.round().clamp(0.0, 255.0) as u8;
            }
            px[3] = 255;
        }
    }
}

/// Render `pressure` onto a white canvas by stamping discs every `stride` pixels of `bbox`.
///
/// Only sample points with strictly positive pressure are stamped and
/// counted. Without a box the canvas stays white and the stats are zero.
#[cfg_attr(
    feature = "tracing",
    instrument(level = "debug", skip(pressure, range, palette), fields(width = pressure.width, height = pressure.height))
)]
pub fn render_heatmap(
    pressure: &ScalarField,
    bbox: Option<&BoundingBox>,
    range: &PressureRange,
    palette: &Palette,
    stride: usize,
    stamp_radius: usize,
) -> (RgbaImage, FootStats) {
    let mut canvas = RgbaImage::white(pressure.width, pressure.height);
    let Some(bbox) = bbox else {
        return (canvas, FootStats::default());
    };

    let stride = stride.max(1);
    let mut count = 0u64;
    let mut total = 0.0f64;
    let mut highest = 0.0f64;

    for y in (bbox.top..=bbox.bottom).step_by(stride) {
        for x in (bbox.left..=bbox.right).step_by(stride) {
            let p = pressure.get(x, y) as f64;
            if p <= 0.0 {
                continue;
            }
            let v = range.normalize(p);
            let color = palette.color_for(v);
            stamp_disc(&mut canvas, x, y, stamp_radius, color, v);

            count += 1;
            total += p;
            highest = highest.max(p);
        }
    }

    let stats = FootStats {
        average_pressure: if count > 0 { total / count as f64 } else { 0.0 },
        max_pressure: highest,
        total_area: count,
    };
    (canvas, stats)
}
