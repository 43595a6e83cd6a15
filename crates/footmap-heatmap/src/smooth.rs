//! Positive-support Gaussian smoothing.
//!
//! Unlike a plain convolution, zero-pressure neighbours contribute neither
//! value nor weight, so the surrounding background never dilutes the signal
//! and isolated zeros inside a contact region are filled in.

use crate::rows::build_by_rows;
use footmap_core::ScalarField;

#[cfg(feature = "tracing")]
use tracing::instrument;

/// Gaussian weights for offsets `(-r..=r) x (-r..=r)`, row-major, sigma = r / 2.
fn gaussian_window(radius: usize) -> Vec<f64> {
    let r = radius as isize;
    let sigma = radius as f64 / 2.0;
    let denom = 2.0 * sigma * sigma;
    let mut weights = Vec::with_capacity((2 * radius + 1).pow(2));
    for dy in -r..=r {
        for dx in -r..=r {
            let distance = ((dx * dx + dy * dy) as f64).sqrt();
            weights.push((-(distance * distance) / denom).exp());
        }
    }
    weights
}

/// Blur `field` with a Gaussian of the given radius, sampling only positive neighbours.
///
/// A pixel with no positive neighbour inside the window becomes `0`. Runs
/// over the whole field. `radius == 0` returns the field unchanged. The
/// window holds `(2 * radius + 1)^2` weights, so keep `radius` within
/// [`crate::MAX_PIXEL_PARAM`] as `HeatmapParams::validate` does.
#[cfg_attr(
    feature = "tracing",
    instrument(level = "debug", skip(field), fields(width = field.width, height = field.height))
)]
pub fn smooth_positive(field: &ScalarField, radius: usize) -> ScalarField {
    if radius == 0 {
        return field.clone();
    }

    let (w, h) = (field.width, field.height);
    let r = radius as isize;
    let span = 2 * radius + 1;
    let window = gaussian_window(radius);

    build_by_rows(w, h, |y, row| {
        for (x, out) in row.iter_mut().enumerate() {
            let mut sum = 0.0f64;
            let mut weight_sum = 0.0f64;
            for dy in -r..=r {
                let ny = y as isize + dy;
                if ny < 0 || ny >= h as isize {
                    continue;
                }
                for dx in -r..=r {
                    let nx = x as isize + dx;
                    if nx < 0 || nx >= w as isize {
                        continue;
                    }
                    let value = field.get(nx as usize, ny as usize);
                    if value > 0.0 {
                        let weight = window[(dy + r) as usize * span + (dx + r) as usize];
                        sum += value as f64 * weight;
                        weight_sum += weight;
                    }
                }
            }
            *out = if weight_sum > 0.0 {
                (sum / weight_sum) as f32
            } else {
                0.0
            };
        }
    })
}
