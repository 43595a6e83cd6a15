/// Dense `f32` grid produced by one pipeline stage (edges, confidence, pressure, ...).
///
/// Row-major, origin top-left, `data.len() == width * height`.
#[derive(Clone, Debug, PartialEq)]
pub struct ScalarField {
    pub width: usize,
    pub height: usize,
    pub data: Vec<f32>,
}

impl ScalarField {
    pub fn zeros(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            data: vec![0.0; width * height],
        }
    }

    /// Build a field by evaluating `f(x, y)` for every pixel.
    pub fn from_fn(width: usize, height: usize, mut f: impl FnMut(usize, usize) -> f32) -> Self {
        let mut data = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                data.push(f(x, y));
            }
        }
        Self {
            width,
            height,
            data,
        }
    }

    #[inline]
    pub fn index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> f32 {
        self.data[y * self.width + x]
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, value: f32) {
        let i = self.index(x, y);
        self.data[i] = value;
    }

    /// Number of strictly positive cells.
    pub fn count_positive(&self) -> usize {
        self.data.iter().filter(|&&v| v > 0.0).count()
    }

    pub fn max_value(&self) -> f32 {
        self.data.iter().copied().fold(0.0f32, f32::max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_fn_is_row_major() {
        let f = ScalarField::from_fn(3, 2, |x, y| (y * 10 + x) as f32);
        assert_eq!(f.data, vec![0.0, 1.0, 2.0, 10.0, 11.0, 12.0]);
        assert_eq!(f.get(2, 1), 12.0);
        assert_eq!(f.index(1, 1), 4);
    }

    #[test]
    fn counts_only_strictly_positive() {
        let mut f = ScalarField::zeros(4, 4);
        f.set(0, 0, 1.5);
        f.set(3, 3, 0.25);
        f.set(1, 2, -2.0);
        assert_eq!(f.count_positive(), 2);
        assert_eq!(f.max_value(), 1.5);
    }
}
