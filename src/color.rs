//! Color values.
//!
//! A [`Color`] is a 24-bit RGB triple with an optional alpha channel. The
//! alpha only matters when a color is laid over another one (text tag
//! foregrounds); colors without alpha composite with [`DEFAULT_ALPHA`].

use std::fmt;
use std::ops::{Add, Mul, Sub};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Alpha used when compositing a color that carries no alpha channel.
pub const DEFAULT_ALPHA: u8 = 255;

/// An RGB color with optional alpha.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    /// `None` means "no alpha channel", not "transparent"
    pub a: Option<u8>,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: None }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r,
            g,
            b,
            a: Some(a),
        }
    }

    /// Alpha used for compositing.
    pub fn alpha(&self) -> u8 {
        self.a.unwrap_or(DEFAULT_ALPHA)
    }

    /// Quantization table key: `R | G << 8 | B << 16`.
    pub fn key(&self) -> usize {
        self.r as usize | (self.g as usize) << 8 | (self.b as usize) << 16
    }

    /// Inverse of [`Color::key`]. Bits above 24 are ignored.
    pub fn from_key(key: usize) -> Self {
        Self::rgb(key as u8, (key >> 8) as u8, (key >> 16) as u8)
    }

    /// Lay `over` on top of `self`.
    ///
    /// Each channel becomes `self * (1 - a) + over * a` truncated, where
    /// `a = over.alpha() / 255`. The alpha of `self` is discarded.
    pub fn composite(self, over: Color) -> Color {
        let a = over.alpha() as f64 / 255.0;
        let inv = 1.0 - a;
        let mix = |old: u8, new: u8| (old as f64 * inv + new as f64 * a) as u8;
        Color::rgb(mix(self.r, over.r), mix(self.g, over.g), mix(self.b, over.b))
    }

    /// Rec. 601 luma in `0.0..=255.0`.
    pub fn luma(&self) -> f64 {
        0.299 * self.r as f64 + 0.587 * self.g as f64 + 0.114 * self.b as f64
    }

    /// Squared Euclidean distance over the RGB channels.
    pub fn distance_squared(&self, other: &Color) -> u32 {
        let dr = self.r as i32 - other.r as i32;
        let dg = self.g as i32 - other.g as i32;
        let db = self.b as i32 - other.b as i32;
        (dr * dr + dg * dg + db * db) as u32
    }
}

impl From<(u8, u8, u8)> for Color {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::rgb(r, g, b)
    }
}

impl From<(u8, u8, u8, u8)> for Color {
    fn from((r, g, b, a): (u8, u8, u8, u8)) -> Self {
        Self::rgba(r, g, b, a)
    }
}

impl Add for Color {
    type Output = Color;

    fn add(self, rhs: Color) -> Color {
        Color {
            r: self.r.saturating_add(rhs.r),
            g: self.g.saturating_add(rhs.g),
            b: self.b.saturating_add(rhs.b),
            a: self.a,
        }
    }
}

impl Sub for Color {
    type Output = Color;

    fn sub(self, rhs: Color) -> Color {
        Color {
            r: self.r.saturating_sub(rhs.r),
            g: self.g.saturating_sub(rhs.g),
            b: self.b.saturating_sub(rhs.b),
            a: self.a,
        }
    }
}

impl Mul<f32> for Color {
    type Output = Color;

    /// Scale every channel, clamping to `0..=255`.
    fn mul(self, rhs: f32) -> Color {
        let scale = |c: u8| (c as f32 * rhs).round().clamp(0.0, 255.0) as u8;
        Color {
            r: scale(self.r),
            g: scale(self.g),
            b: scale(self.b),
            a: self.a,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)?;
        if let Some(a) = self.a {
            write!(f, "{:02x}", a)?;
        }
        Ok(())
    }
}

/// Error parsing a hex color string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid color {0:?}: expected #rrggbb or #rrggbbaa")]
pub struct ParseColorError(String);

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        if !(hex.len() == 6 || hex.len() == 8) || !hex.is_ascii() {
            return Err(ParseColorError(s.to_string()));
        }
        let channel = |i: usize| {
            u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| ParseColorError(s.to_string()))
        };
        let (r, g, b) = (channel(0)?, channel(2)?, channel(4)?);
        if hex.len() == 8 {
            Ok(Color::rgba(r, g, b, channel(6)?))
        } else {
            Ok(Color::rgb(r, g, b))
        }
    }
}

impl TryFrom<String> for Color {
    type Error = ParseColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}
