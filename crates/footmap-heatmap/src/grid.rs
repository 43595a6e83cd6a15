//! Grid-line confidence from ray-cast edge sampling.
//!
//! A pixel of a photographed pressure mat sits on (or next to) the printed
//! sensor grid when short rays cast from it cross edges in several
//! directions. Only the half-circle `[0, π)` is probed; the opposite rays are
//! implied by the neighbouring pixels.

use footmap_core::ScalarField;
use std::f64::consts::PI;

#[cfg(feature = "tracing")]
use tracing::instrument;

/// Number of probe directions over `[0, π)`.
pub const RAY_COUNT: usize = 8;

/// Rounded `(dx, dy)` offsets for every ray, radii `1..=radius` in order.
fn ray_table(radius: usize) -> Vec<Vec<(isize, isize)>> {
    (0..RAY_COUNT)
        .map(|k| {
            let angle = k as f64 * PI / RAY_COUNT as f64;
            let (sin, cos) = angle.sin_cos();
            (1..=radius)
                .map(|r| {
                    let r = r as f64;
                    ((r * cos).round() as isize, (r * sin).round() as isize)
                })
                .collect()
        })
        .collect()
}

/// Score every pixel by how many of the 8 rays hit an edge within `search_radius`.
///
/// With `hits >= min_grid_lines` the confidence is
/// `min(1, hits / 8 * (1 + edge(x, y)))`, otherwise `0`. Pixels closer than
/// `search_radius` to a border are not evaluated and stay `0`.
#[cfg_attr(
    feature = "tracing",
    instrument(level = "debug", skip(edges), fields(width = edges.width, height = edges.height))
)]
pub fn grid_confidence(
    edges: &ScalarField,
    search_radius: usize,
    min_grid_lines: usize,
) -> ScalarField {
    let (w, h) = (edges.width, edges.height);
    let mut confidence = ScalarField::zeros(w, h);
    let r = search_radius;
    if w <= 2 * r || h <= 2 * r {
        return confidence;
    }

    let rays = ray_table(r);
    for y in r..h - r {
        for x in r..w - r {
            let hits = rays
                .iter()
                .filter(|ray| {
                    ray.iter().any(|&(dx, dy)| {
                        let nx = (x as isize + dx) as usize;
                        let ny = (y as isize + dy) as usize;
                        edges.get(nx, ny) > 0.0
                    })
                })
                .count();

            if hits >= min_grid_lines {
                let strength = edges.get(x, y);
                let score = hits as f32 / RAY_COUNT as f32 * (1.0 + strength);
                confidence.set(x, y, score.min(1.0));
            }
        }
    }

    confidence
}
