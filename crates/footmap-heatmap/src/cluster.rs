//! Radial clustering inside the pressure bounding box.
//!
//! Each positive pixel is replaced by a linear-falloff weighted average of
//! the positive pixels around it, which merges neighbouring sensor cells into
//! coherent contact regions. The neighbourhood is clipped to the box, not
//! just to the image.

use crate::bbox::BoundingBox;
use crate::rows::build_by_rows;
use footmap_core::ScalarField;

#[cfg(feature = "tracing")]
use tracing::instrument;

/// Cluster `field` inside `bbox` with a disc of `radius` pixels.
///
/// Pixels outside the box, and zero pixels inside it, are copied unchanged;
/// clustering never creates pressure from nothing. Neighbours are always
/// read from `field`, never from already clustered output. `radius == 0`
/// returns the field unchanged.
#[cfg_attr(
    feature = "tracing",
    instrument(level = "debug", skip(field), fields(width = field.width, height = field.height))
)]
pub fn cluster_pressure(field: &ScalarField, bbox: &BoundingBox, radius: usize) -> ScalarField {
    if radius == 0 {
        return field.clone();
    }

    let r = radius as isize;
    let radius_f = radius as f64;

    build_by_rows(field.width, field.height, |y, row| {
        let src = &field.data[y * field.width..(y + 1) * field.width];
        row.copy_from_slice(src);
        if y < bbox.top || y > bbox.bottom {
            return;
        }

        for x in bbox.left..=bbox.right {
            if src[x] == 0.0 {
                continue;
            }

            let mut sum = 0.0f64;
            let mut weight_sum = 0.0f64;
            for dy in -r..=r {
                let ny = y as isize + dy;
                if ny < bbox.top as isize || ny > bbox.bottom as isize {
                    continue;
                }
                for dx in -r..=r {
                    let nx = x as isize + dx;
                    if nx < bbox.left as isize || nx > bbox.right as isize {
                        continue;
                    }
                    let value = field.get(nx as usize, ny as usize);
                    if value > 0.0 {
                        let distance = ((dx * dx + dy * dy) as f64).sqrt();
                        if distance <= radius_f {
                            let weight = 1.0 - distance / radius_f;
                            sum += value as f64 * weight;
                            weight_sum += weight;
                        }
                    }
                }
            }

            if weight_sum > 0.0 {
                row[x] = (sum / weight_sum) as f32;
            }
        }
    })
}
