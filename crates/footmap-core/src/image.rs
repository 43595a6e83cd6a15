use serde::{Deserialize, Serialize};

/// Channel layout of a decoded 8-bit input buffer.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PixelFormat {
    Rgb,
    #[default]
    Rgba,
}

impl PixelFormat {
    #[inline]
    pub const fn channels(self) -> usize {
        match self {
            PixelFormat::Rgb => 3,
            PixelFormat::Rgba => 4,
        }
    }
}

/// Structural problems with a caller-provided pixel buffer.
#[derive(thiserror::Error, Clone, Debug, Eq, PartialEq)]
pub enum ImageViewError {
    #[error("invalid image dimensions (width={width}, height={height})")]
    InvalidDimensions { width: usize, height: usize },

    #[error("invalid pixel buffer length (expected {expected} bytes, got {got})")]
    InvalidBufferLength { expected: usize, got: usize },
}

/// Perceptual luminance of an RGB triple.
#[inline]
pub fn luminance(r: u8, g: u8, b: u8) -> f64 {
    r as f64 * 0.3 + g as f64 * 0.59 + b as f64 * 0.11
}

/// Borrowed, decoded RGB or RGBA image. Row-major, origin top-left.
#[derive(Clone, Copy, Debug)]
pub struct ColorImageView<'a> {
    pub width: usize,
    pub height: usize,
    pub format: PixelFormat,
    pub data: &'a [u8], // len = w*h*channels
}

impl<'a> ColorImageView<'a> {
    /// Wrap a raw buffer, rejecting empty or mismatched dimensions.
    pub fn new(
        width: usize,
        height: usize,
        format: PixelFormat,
        data: &'a [u8],
    ) -> Result<Self, ImageViewError> {
        let view = Self {
            width,
            height,
            format,
            data,
        };
        view.validate()?;
        Ok(view)
    }

    /// Shorthand for an RGBA buffer.
    pub fn rgba(width: usize, height: usize, data: &'a [u8]) -> Result<Self, ImageViewError> {
        Self::new(width, height, PixelFormat::Rgba, data)
    }

    pub fn validate(&self) -> Result<(), ImageViewError> {
        let bad_dims = ImageViewError::InvalidDimensions {
            width: self.width,
            height: self.height,
        };
        if self.width == 0 || self.height == 0 {
            return Err(bad_dims);
        }
        let expected = self
            .width
            .checked_mul(self.height)
            .and_then(|px| px.checked_mul(self.format.channels()))
            .ok_or(bad_dims)?;
        if self.data.len() != expected {
            return Err(ImageViewError::InvalidBufferLength {
                expected,
                got: self.data.len(),
            });
        }
        Ok(())
    }

    #[inline]
    pub fn rgb_at(&self, x: usize, y: usize) -> [u8; 3] {
        let i = (y * self.width + x) * self.format.channels();
        [self.data[i], self.data[i + 1], self.data[i + 2]]
    }

    #[inline]
    pub fn luminance_at(&self, x: usize, y: usize) -> f64 {
        let [r, g, b] = self.rgb_at(x, y);
        luminance(r, g, b)
    }
}

/// Owned RGBA output image.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RgbaImage {
    pub width: usize,
    pub height: usize,
    pub data: Vec<u8>,
}

impl RgbaImage {
    pub fn filled(width: usize, height: usize, rgba: [u8; 4]) -> Self {
        let mut data = Vec::with_capacity(width * height * 4);
        for _ in 0..width * height {
            data.extend_from_slice(&rgba);
        }
        Self {
            width,
            height,
            data,
        }
    }

    /// Fully opaque white canvas.
    pub fn white(width: usize, height: usize) -> Self {
        Self::filled(width, height, [255, 255, 255, 255])
    }

    #[inline]
    pub fn pixel(&self, x: usize, y: usize) -> [u8; 4] {
        let i = (y * self.width + x) * 4;
        [
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ]
    }

    #[inline]
    pub fn pixel_mut(&mut self, x: usize, y: usize) -> &mut [u8] {
        let i = (y * self.width + x) * 4;
        &mut self.data[i..i + 4]
    }

    pub fn as_raw(&self) -> &[u8] {
        &self.data
    }

    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }
}
