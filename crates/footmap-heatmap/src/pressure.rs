//! Raw pressure: inverted luminance gated by grid confidence.

use footmap_core::{ColorImageView, ScalarField};

#[cfg(feature = "tracing")]
use tracing::instrument;

/// Raw pressure field plus the multiset of its strictly positive values.
#[derive(Clone, Debug)]
pub struct PressureMap {
    pub field: ScalarField,
    /// Every strictly positive pressure, in row-major scan order, at full precision.
    pub samples: Vec<f64>,
}

/// `pressure = (255 - luminance) * confidence` for every pixel.
///
/// Confidence acts as a gate: dark pixels off the detected grid contribute
/// nothing, however dark they are.
#[cfg_attr(
    feature = "tracing",
    instrument(level = "debug", skip(img, confidence), fields(width = img.width, height = img.height))
)]
pub fn build_pressure_map(img: &ColorImageView<'_>, confidence: &ScalarField) -> PressureMap {
    debug_assert_eq!((img.width, img.height), (confidence.width, confidence.height));

    let mut samples = Vec::new();
    let field = ScalarField::from_fn(img.width, img.height, |x, y| {
        let intensity = 255.0 - img.luminance_at(x, y);
        let pressure = intensity * confidence.get(x, y) as f64;
        if pressure > 0.0 {
            samples.push(pressure);
        }
        pressure as f32
    });

    PressureMap { field, samples }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn confidence_gates_dark_pixels() {
        let data = [0u8, 0, 0, 255, 0, 0, 0, 255];
        let img = ColorImageView::rgba(2, 1, &data).expect("view");
        let mut conf = ScalarField::zeros(2, 1);
        conf.set(1, 0, 0.5);

        let map = build_pressure_map(&img, &conf);
        assert_eq!(map.field.get(0, 0), 0.0);
        assert_relative_eq!(map.field.get(1, 0), 127.5);
        assert_eq!(map.samples.len(), 1);
        assert_relative_eq!(map.samples[0], 127.5);
    }

    #[test]
    fn white_pixels_carry_no_pressure() {
        let data = [255u8; 3 * 4 * 4];
        let img = ColorImageView::new(3, 4, footmap_core::PixelFormat::Rgba, &data)
            .expect("view");
        let conf = ScalarField::from_fn(3, 4, |_, _| 1.0);
        let map = build_pressure_map(&img, &conf);
        assert!(map.samples.is_empty());
        assert_eq!(map.field.count_positive(), 0);
    }
}
