//! Row-wise field construction, parallel when the `rayon` feature is on.
//!
//! Each output row is a pure function of read-only inputs, so results are
//! identical regardless of thread count or scheduling.

use footmap_core::ScalarField;

/// Allocate a `width x height` field and fill it row by row with `fill(y, row)`.
pub(crate) fn build_by_rows<F>(width: usize, height: usize, fill: F) -> ScalarField
where
    F: Fn(usize, &mut [f32]) + Send + Sync,
{
    let mut out = ScalarField::zeros(width, height);
    if width == 0 || height == 0 {
        return out;
    }

    #[cfg(feature = "rayon")]
    {
        use rayon::prelude::*;
        out.data
            .par_chunks_mut(width)
            .enumerate()
            .for_each(|(y, row)| fill(y, row));
    }

    #[cfg(not(feature = "rayon"))]
    {
        out.data
            .chunks_mut(width)
            .enumerate()
            .for_each(|(y, row)| fill(y, row));
    }

    out
}

#[cfg(all(test, feature = "rayon"))]
mod tests {
    use super::*;
    use crate::cluster::cluster_pressure;
    use crate::smooth::smooth_positive;
    use crate::BoundingBox;

    fn sequential(width: usize, height: usize, fill: impl Fn(usize, &mut [f32])) -> ScalarField {
        let mut out = ScalarField::zeros(width, height);
        for (y, row) in out.data.chunks_mut(width).enumerate() {
            fill(y, row);
        }
        out
    }

    fn speckled(width: usize, height: usize) -> ScalarField {
        ScalarField::from_fn(width, height, |x, y| {
            let v = ((x * 7 + y * 13) % 11) as f32;
            if v > 4.0 {
                v * 10.3
            } else {
                0.0
            }
        })
    }

    #[test]
    fn parallel_rows_match_sequential() {
        let input = speckled(97, 61);
        let fill = |y: usize, row: &mut [f32]| {
            for (x, out) in row.iter_mut().enumerate() {
                let mut acc = 0.0f64;
                for dy in 0..3 {
                    let ny = (y + dy).min(input.height - 1);
                    acc += input.get(x, ny) as f64 * 0.3;
                }
                *out = acc as f32;
            }
        };
        assert_eq!(build_by_rows(97, 61, fill), sequential(97, 61, fill));
    }

    #[test]
    fn stages_match_single_threaded_run() {
        let input = speckled(80, 64);
        let bbox = BoundingBox {
            left: 5,
            right: 70,
            top: 3,
            bottom: 60,
        };
        let single = rayon::ThreadPoolBuilder::new()
            .num_threads(1)
            .build()
            .expect("pool");
        let (smoothed, clustered) = single.install(|| {
            let s = smooth_positive(&input, 4);
            let c = cluster_pressure(&s, &bbox, 16);
            (s, c)
        });

        let par_smoothed = smooth_positive(&input, 4);
        assert_eq!(par_smoothed, smoothed);
        assert_eq!(cluster_pressure(&par_smoothed, &bbox, 16), clustered);
    }
}
