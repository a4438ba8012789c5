//! Pixel buffer.
//!
//! A [`Frame`] owns `width * height` colors in row-major order; pixel
//! `(x, y)` lives at index `y * width + x`.

use crate::color::Color;
use crate::error::{Error, Result};

/// A row-major grid of colors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    width: usize,
    height: usize,
    pixels: Vec<Color>,
}

impl Frame {
    /// Create a black frame.
    pub fn new(width: usize, height: usize) -> Result<Self> {
        Self::filled(width, height, Color::BLACK)
    }

    /// Create a frame with every pixel set to `color`.
    pub fn filled(width: usize, height: usize, color: Color) -> Result<Self> {
        validate_dimensions(width, height)?;
        Ok(Self {
            width,
            height,
            pixels: vec![color; width * height],
        })
    }

    /// Wrap an existing row-major pixel vector.
    pub fn from_pixels(width: usize, height: usize, pixels: Vec<Color>) -> Result<Self> {
        validate_dimensions(width, height)?;
        let expected = width * height;
        if pixels.len() != expected {
            return Err(Error::PixelCountMismatch {
                width,
                height,
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Diagonal color gradient, the classic demo pattern.
    pub fn gradient(width: usize, height: usize) -> Result<Self> {
        let mut frame = Self::new(width, height)?;
        for y in 0..height {
            for x in 0..width {
                let color = Color::rgb(
                    (x * y % 256) as u8,
                    ((x + y) % 256) as u8,
                    (x as isize - y as isize).rem_euclid(256) as u8,
                );
                frame.pixels[y * width + x] = color;
            }
        }
        Ok(frame)
    }

    /// Alternating black and white pixels; `(0, 0)` is white.
    pub fn checkerboard(width: usize, height: usize) -> Result<Self> {
        let mut frame = Self::new(width, height)?;
        for y in 0..height {
            for x in 0..width {
                if (x + y) % 2 == 0 {
                    frame.pixels[y * width + x] = Color::WHITE;
                }
            }
        }
        Ok(frame)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    /// Pixels of row `y`.
    ///
    /// # Panics
    /// If `y >= height`.
    pub fn row(&self, y: usize) -> &[Color] {
        let start = y * self.width;
        &self.pixels[start..start + self.width]
    }

    pub fn get(&self, x: usize, y: usize) -> Option<Color> {
        self.contains(x, y).then(|| self.pixels[y * self.width + x])
    }

    /// Pixel at `(x, y)`.
    ///
    /// # Panics
    /// If `(x, y)` is outside the frame.
    pub fn pixel(&self, x: usize, y: usize) -> Color {
        assert!(
            self.contains(x, y),
            "pixel ({}, {}) out of bounds for {}x{} frame",
            x,
            y,
            self.width,
            self.height
        );
        self.pixels[y * self.width + x]
    }

    pub fn set(&mut self, x: usize, y: usize, color: Color) -> Result<()> {
        if !self.contains(x, y) {
            return Err(Error::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        self.pixels[y * self.width + x] = color;
        Ok(())
    }

    fn contains(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height
    }
}

fn validate_dimensions(width: usize, height: usize) -> Result<()> {
    if width == 0 || height == 0 {
        return Err(Error::InvalidDimensions { width, height });
    }
    Ok(())
}
