//! Text overlays.
//!
//! A [`TextTag`] is a label drawn over a frame. Every pixel is one cell two
//! characters wide, so the text always has an even number of characters and
//! is consumed two at a time. Positions are measured in cells.
//!
//! The stored anchor is the left edge of the label. When a tag is centered
//! the anchor is moved left by a quarter of the text length (half the text's
//! width in cells), and every operation that changes `centered` or the text
//! re-derives it with the same integer arithmetic.

use std::borrow::Cow;
use std::fmt;

use crate::color::Color;
use crate::error::{Error, Result};

/// A cell coordinate. Anchors may go negative once centering shifts them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<(i32, i32)> for Position {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

/// A positioned label with optional color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextTag {
    text: String,
    /// Character count of `text`, always even
    len: usize,
    anchor: Position,
    color: Option<Color>,
    centered: bool,
    line_wrap: bool,
    disabled: bool,
}

/// Builder for [`TextTag`].
///
/// When `line_wrap` is not set it defaults to `!centered`.
#[derive(Debug, Clone)]
pub struct TextTagBuilder {
    text: String,
    position: Position,
    color: Option<Color>,
    centered: bool,
    disabled: bool,
    line_wrap: Option<bool>,
}

impl TextTagBuilder {
    pub fn position(mut self, x: i32, y: i32) -> Self {
        self.position = Position::new(x, y);
        self
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn centered(mut self, centered: bool) -> Self {
        self.centered = centered;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn line_wrap(mut self, line_wrap: bool) -> Self {
        self.line_wrap = Some(line_wrap);
        self
    }

    /// Validate everything, then build.
    ///
    /// A centered tag is built uncentered and then shifted exactly as
    /// [`TextTag::set_centered`] would shift it.
    pub fn build(self) -> Result<TextTag> {
        validate_text(&self.text)?;
        validate_position(self.position)?;
        let (text, len) = pad_even(&self.text);
        checked_anchor(self.position.x.into(), len, false)?;
        let line_wrap = self.line_wrap.unwrap_or(!self.centered);
        if self.centered && line_wrap {
            return Err(Error::ConflictingState);
        }

        let mut tag = TextTag {
            text,
            len,
            anchor: self.position,
            color: self.color,
            centered: false,
            line_wrap,
            disabled: self.disabled,
        };
        if self.centered {
            tag.set_centered(true)?;
        }
        Ok(tag)
    }
}

impl TextTag {
    pub fn builder(text: impl Into<String>) -> TextTagBuilder {
        TextTagBuilder {
            text: text.into(),
            position: Position::default(),
            color: None,
            centered: false,
            disabled: false,
            line_wrap: None,
        }
    }

    /// An uncolored, uncentered, line-wrapping tag at `(x, y)`.
    pub fn new(text: impl Into<String>, x: i32, y: i32) -> Result<Self> {
        Self::builder(text).position(x, y).build()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Character count of the (padded) text.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn color(&self) -> Option<Color> {
        self.color
    }

    pub fn is_centered(&self) -> bool {
        self.centered
    }

    pub fn line_wrap(&self) -> bool {
        self.line_wrap
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// The raw anchor (left edge).
    pub fn starting_position(&self) -> Position {
        self.anchor
    }

    /// Anchor shifted right by half the text length.
    pub fn display_position(&self) -> Position {
        let half = i32::try_from(self.len / 2).unwrap_or(i32::MAX);
        Position::new(self.anchor.x.saturating_add(half), self.anchor.y)
    }

    /// Replace the text.
    ///
    /// Odd-length text gets one trailing space. A centered tag keeps its
    /// visual center by moving the anchor `floor((old - new) / 4)` cells.
    pub fn set_text(&mut self, text: &str) -> Result<()> {
        validate_text(text)?;
        let (text, len) = pad_even(text);
        let mut x = i64::from(self.anchor.x);
        if self.centered {
            x += (self.len as i64 - len as i64).div_euclid(4);
        }
        self.anchor.x = checked_anchor(x, len, self.centered)?;
        self.text = text;
        self.len = len;
        Ok(())
    }

    pub fn set_position(&mut self, position: impl Into<Position>) -> Result<()> {
        let position = position.into();
        validate_position(position)?;
        checked_anchor(position.x.into(), self.len, self.centered)?;
        self.anchor = position;
        Ok(())
    }

    /// Toggle centering, shifting the anchor by `floor(len / 4)`.
    pub fn set_centered(&mut self, centered: bool) -> Result<()> {
        if centered && self.line_wrap {
            return Err(Error::ConflictingState);
        }
        if centered == self.centered {
            return Ok(());
        }
        let quarter = (self.len / 4) as i64;
        let x = if centered {
            i64::from(self.anchor.x) - quarter
        } else {
            i64::from(self.anchor.x) + quarter
        };
        self.anchor.x = checked_anchor(x, self.len, centered)?;
        self.centered = centered;
        Ok(())
    }

    pub fn set_line_wrap(&mut self, line_wrap: bool) -> Result<()> {
        if line_wrap && self.centered {
            return Err(Error::ConflictingState);
        }
        self.line_wrap = line_wrap;
        Ok(())
    }

    pub fn set_color(&mut self, color: Option<Color>) {
        self.color = color;
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    /// Clip a tag that starts left of column 0.
    ///
    /// When the anchor is negative but less than half the text lies
    /// off-screen, returns a new uncentered tag at column 0 holding only the
    /// visible characters. Otherwise returns `self` unchanged.
    pub fn fit_to_width(&self) -> Cow<'_, TextTag> {
        let overhang = -self.anchor.x;
        if overhang <= 0 || overhang as usize >= self.len / 2 {
            return Cow::Borrowed(self);
        }

        let text: String = self.text.chars().skip(overhang as usize * 2).collect();
        let len = self.len - overhang as usize * 2;
        Cow::Owned(TextTag {
            text,
            len,
            anchor: Position::new(0, self.anchor.y),
            color: self.color,
            centered: false,
            line_wrap: self.line_wrap,
            disabled: self.disabled,
        })
    }
}

impl fmt::Display for TextTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

fn validate_text(text: &str) -> Result<()> {
    if text.contains(|c: char| c == '\n' || c == '\r') {
        return Err(Error::InvalidText(text.to_string()));
    }
    Ok(())
}

fn validate_position(position: Position) -> Result<()> {
    if position.x < 0 || position.y < 0 {
        return Err(Error::InvalidPosition {
            x: position.x,
            y: position.y,
        });
    }
    Ok(())
}

/// `x` as an anchor for a tag of `len` characters. The anchor, the display
/// position and the anchor after uncentering must all fit in `i32`.
fn checked_anchor(x: i64, len: usize, centered: bool) -> Result<i32> {
    let half = len as i64 / 2;
    let uncentered = if centered { x + len as i64 / 4 } else { x };
    let reach = uncentered + half;
    if reach > i64::from(i32::MAX) {
        return Err(Error::PositionOverflow { x, len });
    }
    i32::try_from(x).map_err(|_| Error::PositionOverflow { x, len })
}

/// Append a space to odd-length text; returns the text and its char count.
fn pad_even(text: &str) -> (String, usize) {
    let len = text.chars().count();
    if len % 2 == 1 {
        (format!("{} ", text), len + 1)
    } else {
        (text.to_string(), len)
    }
}
