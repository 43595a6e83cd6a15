//! Piecewise-linear pressure palette.

use serde::{Deserialize, Serialize};

/// One palette entry: normalized pressures at or above `threshold` start here.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ColorStop {
    pub threshold: f64,
    pub color: [u8; 3],
}

impl ColorStop {
    pub const fn new(threshold: f64, color: [u8; 3]) -> Self {
        Self { threshold, color }
    }
}

/// Default pressure bands, highest first.
pub const DEFAULT_STOPS: [ColorStop; 5] = [
    ColorStop::new(0.65, [255, 0, 0]),
    ColorStop::new(0.45, [255, 140, 0]),
    ColorStop::new(0.35, [255, 255, 0]),
    ColorStop::new(0.20, [0, 255, 0]),
    ColorStop::new(0.0, [255, 255, 255]),
];

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum PaletteError {
    #[error("palette needs at least one color stop")]
    Empty,
    #[error("stop {index} has threshold {threshold} outside [0, 1]")]
    OutOfRange { index: usize, threshold: f64 },
    #[error("thresholds must strictly decrease (stop {index}: {threshold} >= {previous})")]
    NotDecreasing {
        index: usize,
        threshold: f64,
        previous: f64,
    },
    #[error("last stop must be the 0.0 catch-all, got {0}")]
    MissingCatchAll(f64),
}

/// Validated, descending list of color stops ending in a `0.0` catch-all.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<ColorStop>", into = "Vec<ColorStop>")]
pub struct Palette {
    stops: Vec<ColorStop>,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            stops: DEFAULT_STOPS.to_vec(),
        }
    }
}

impl TryFrom<Vec<ColorStop>> for Palette {
    type Error = PaletteError;

    fn try_from(stops: Vec<ColorStop>) -> Result<Self, Self::Error> {
        Self::new(stops)
    }
}

impl From<Palette> for Vec<ColorStop> {
    fn from(p: Palette) -> Self {
        p.stops
    }
}

impl Palette {
    pub fn new(stops: Vec<ColorStop>) -> Result<Self, PaletteError> {
        let last = stops.last().ok_or(PaletteError::Empty)?;
        if last.threshold != 0.0 {
            return Err(PaletteError::MissingCatchAll(last.threshold));
        }
        for (index, stop) in stops.iter().enumerate() {
            if !(0.0..=1.0).contains(&stop.threshold) {
                return Err(PaletteError::OutOfRange {
                    index,
                    threshold: stop.threshold,
                });
            }
            if index > 0 && stop.threshold >= stops[index - 1].threshold {
                return Err(PaletteError::NotDecreasing {
                    index,
                    threshold: stop.threshold,
                    previous: stops[index - 1].threshold,
                });
            }
        }
        Ok(Self { stops })
    }

    pub fn stops(&self) -> &[ColorStop] {
        &self.stops
    }

    /// Color for a normalized pressure `v` in `[0, 1]`.
    ///
    /// Picks the first stop whose threshold `v` reaches and blends its color
    /// with the next lower stop using
    /// `factor = (threshold - v) / (threshold - next.threshold)`. The factor
    /// is 0 at the threshold and goes negative above it, pushing the color
    /// away from the next stop; channels are rounded and clamped to `[0, 255]`.
    pub fn color_for(&self, v: f64) -> [u8; 3] {
        for pair in self.stops.windows(2) {
            let (upper, lower) = (&pair[0], &pair[1]);
            if v >= upper.threshold {
                let band = upper.threshold - lower.threshold;
                let factor = if band == 0.0 {
                    0.0
                } else {
                    (upper.threshold - v) / band
                };
                return lerp_rgb(upper.color, lower.color, factor);
            }
        }
        self.stops[self.stops.len() - 1].color
    }
}

fn lerp_rgb(a: [u8; 3], b: [u8; 3], factor: f64) -> [u8; 3] {
    let mut out = [0u8; 3];
    for (c, (&ca, &cb)) in out.iter_mut().zip(a.iter().zip(b.iter())) {
        let v = ca as f64 + (cb as f64 - ca as f64) * factor;
        *c = v.round().clamp(0.0, 255.0) as u8;
    }
    out
}
