//! Binary edge map from central-difference luminance gradients.

use footmap_core::{ColorImageView, ScalarField};

#[cfg(feature = "tracing")]
use tracing::instrument;

/// Mark interior pixels whose gradient magnitude exceeds `threshold`.
///
/// Uses the 4-connected neighbours: `dx = |L(x+1) - L(x-1)|`,
/// `dy = |L(y+1) - L(y-1)|`. The outer 1-pixel border is never evaluated
/// and stays `0.0`.
#[cfg_attr(
    feature = "tracing",
    instrument(level = "debug", skip(img), fields(width = img.width, height = img.height))
)]
pub fn detect_edges(img: &ColorImageView<'_>, threshold: f64) -> ScalarField {
    let (w, h) = (img.width, img.height);
    let mut edges = ScalarField::zeros(w, h);
    if w < 3 || h < 3 {
        return edges;
    }

    for y in 1..h - 1 {
        for x in 1..w - 1 {
            let dx = (img.luminance_at(x + 1, y) - img.luminance_at(x - 1, y)).abs();
            let dy = (img.luminance_at(x, y + 1) - img.luminance_at(x, y - 1)).abs();
            let magnitude = (dx * dx + dy * dy).sqrt();
            if magnitude > threshold {
                edges.set(x, y, 1.0);
            }
        }
    }

    edges
}

#[cfg(test)]
mod tests {
    use super::*;
    use footmap_core::PixelFormat;

    fn gray_rgb(w: usize, h: usize, f: impl Fn(usize, usize) -> u8) -> Vec<u8> {
        let mut data = Vec::with_capacity(w * h * 3);
        for y in 0..h {
            for x in 0..w {
                let v = f(x, y);
                data.extend_from_slice(&[v, v, v]);
            }
        }
        data
    }

    #[test]
    fn flat_image_has_no_edges() {
        let data = gray_rgb(8, 8, |_, _| 120);
        let img = ColorImageView::new(8, 8, PixelFormat::Rgb, &data).expect("view");
        let edges = detect_edges(&img, 30.0);
        assert_eq!(edges.count_positive(), 0);
    }

    #[test]
    fn vertical_step_marks_both_sides() {
        // Dark left half, bright right half: step between x=3 and x=4.
        let data = gray_rgb(8, 6, |x, _| if x < 4 { 0 } else { 200 });
        let img = ColorImageView::new(8, 6, PixelFormat::Rgb, &data).expect("view");
        let edges = detect_edges(&img, 30.0);

        for y in 1..5 {
            assert_eq!(edges.get(3, y), 1.0);
            assert_eq!(edges.get(4, y), 1.0);
            assert_eq!(edges.get(2, y), 0.0);
            assert_eq!(edges.get(5, y), 0.0);
        }
        // Border rows are never evaluated.
        assert_eq!(edges.get(3, 0), 0.0);
        assert_eq!(edges.get(4, 5), 0.0);
    }

    #[test]
    fn weak_gradient_stays_below_threshold() {
        // Central difference of 20 per step, below the default threshold.
        let data = gray_rgb(8, 8, |x, _| (x * 10) as u8);
        let img = ColorImageView::new(8, 8, PixelFormat::Rgb, &data).expect("view");
        assert_eq!(detect_edges(&img, 30.0).count_positive(), 0);
        assert_eq!(detect_edges(&img, 10.0).count_positive(), 6 * 6);
    }

    #[test]
    fn tiny_images_are_all_border() {
        let data = gray_rgb(2, 2, |x, _| if x == 0 { 0 } else { 255 });
        let img = ColorImageView::new(2, 2, PixelFormat::Rgb, &data).expect("view");
        assert_eq!(detect_edges(&img, 30.0).count_positive(), 0);
    }
}
