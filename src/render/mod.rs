//! Frame compositor.
//!
//! Turns a [`Frame`] plus a set of [`TextTag`] overlays into one string of
//! terminal escape sequences. Each pixel occupies a two-column cell; a tag
//! writes two characters of its text per cell, left to right, starting at
//! its anchor and continuing onto following rows when it line-wraps.

pub mod ansi;

use std::borrow::Cow;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::color::Color;
use crate::error::{Error, Result};
use crate::frame::Frame;
use crate::palette::PaletteKind;
use crate::quantize::TABLE_LEN;
use crate::tag::TextTag;

use ansi::Layer;

const NEEDS_RAMP: &str = "a non-empty character ramp";
const NEEDS_TABLE: &str = "a quantization table of exactly 16777216 bytes";

/// How pixel colors are expressed in the output.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    /// 24-bit SGR 38;2 / 48;2
    #[default]
    Truecolor,
    /// 256-color SGR 38;5 / 48;5 through a quantization table
    Indexed8,
    /// 16-color SGR 30-37 / 40-47 and bright variants through a table
    Indexed4,
    /// Characters from a luminance ramp, no color codes
    Grayscale,
}

impl DisplayMode {
    /// Palette whose quantization table this mode reads, if any.
    pub fn palette_kind(&self) -> Option<PaletteKind> {
        match self {
            DisplayMode::Indexed8 => Some(PaletteKind::Indexed8),
            DisplayMode::Indexed4 => Some(PaletteKind::Indexed4),
            DisplayMode::Truecolor | DisplayMode::Grayscale => None,
        }
    }
}

/// Per-call rendering parameters.
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderOptions<'a> {
    pub mode: DisplayMode,
    /// 2^24-byte quantization table, required by the indexed modes
    pub table: Option<&'a [u8]>,
    /// Characters ordered dark to light, required by grayscale
    pub ramp: Option<&'a str>,
    /// Append a space to odd rows so consecutive rows never print the same
    pub prevent_identical_lines: bool,
    /// Checked between rows; when set the render stops with `Cancelled`
    pub cancel: Option<&'a AtomicBool>,
}

impl<'a> RenderOptions<'a> {
    pub fn new(mode: DisplayMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    pub fn table(mut self, table: &'a [u8]) -> Self {
        self.table = Some(table);
        self
    }

    pub fn ramp(mut self, ramp: &'a str) -> Self {
        self.ramp = Some(ramp);
        self
    }

    pub fn prevent_identical_lines(mut self, enabled: bool) -> Self {
        self.prevent_identical_lines = enabled;
        self
    }

    pub fn cancel(mut self, flag: &'a AtomicBool) -> Self {
        self.cancel = Some(flag);
        self
    }
}

/// Mode-specific cell writer, built once the options have been validated.
enum Encoder<'a> {
    Truecolor,
    Indexed8(&'a [u8]),
    Indexed4(&'a [u8]),
    Grayscale(Vec<char>),
}

impl<'a> Encoder<'a> {
    fn new(options: &RenderOptions<'a>) -> Result<Self> {
        let mode = options.mode;
        let table = || match options.table {
            Some(table) if table.len() == TABLE_LEN => Ok(table),
            _ => Err(Error::Configuration {
                mode,
                requirement: NEEDS_TABLE,
            }),
        };

        Ok(match mode {
            DisplayMode::Truecolor => Encoder::Truecolor,
            DisplayMode::Indexed8 => Encoder::Indexed8(table()?),
            DisplayMode::Indexed4 => Encoder::Indexed4(table()?),
            DisplayMode::Grayscale => {
                let ramp: Vec<char> = options.ramp.unwrap_or_default().chars().collect();
                if ramp.is_empty() {
                    return Err(Error::Configuration {
                        mode,
                        requirement: NEEDS_RAMP,
                    });
                }
                Encoder::Grayscale(ramp)
            }
        })
    }

    fn push_cell(&self, background: Color, foreground: Option<Color>, glyph: [char; 2], out: &mut String) {
        match self {
            Encoder::Truecolor => {
                ansi::push_rgb(Layer::Background, background, out);
                if let Some(fg) = foreground {
                    ansi::push_rgb(Layer::Foreground, fg, out);
                }
            }
            Encoder::Indexed8(table) => {
                ansi::push_indexed8(Layer::Background, table[background.key()], out);
                if let Some(fg) = foreground {
                    ansi::push_indexed8(Layer::Foreground, table[fg.key()], out);
                }
            }
            Encoder::Indexed4(table) => {
                ansi::push_indexed4(Layer::Background, table[background.key()], out);
                if let Some(fg) = foreground {
                    ansi::push_indexed4(Layer::Foreground, table[fg.key()], out);
                }
            }
            Encoder::Grayscale(ramp) => {
                let c = ramp_char(ramp, background);
                out.push(c);
                out.push(c);
                return;
            }
        }
        out.extend(glyph);
    }
}

/// Ramp character for a pixel's luma.
fn ramp_char(ramp: &[char], color: Color) -> char {
    let index = (color.luma() * ramp.len() as f64 / 255.0) as usize;
    ramp[index.min(ramp.len() - 1)]
}

/// A tag ready for compositing, with its text split into characters.
struct Placed<'t> {
    tag: Cow<'t, TextTag>,
    chars: Vec<char>,
}

/// The tag currently being written and how many characters it has used.
struct Active<'m, 't> {
    placed: &'m Placed<'t>,
    consumed: usize,
}

impl Active<'_, '_> {
    fn next_glyph(&mut self) -> [char; 2] {
        let chars = &self.placed.chars;
        let at = |i: usize| chars.get(i).copied().unwrap_or(' ');
        let glyph = [at(self.consumed), at(self.consumed + 1)];
        self.consumed += 2;
        glyph
    }

    fn exhausted(&self) -> bool {
        self.consumed >= self.placed.chars.len()
    }
}

/// Build the anchor map. Disabled tags are skipped, the rest are fitted and
/// inserted in order, so a later tag replaces an earlier one on the same
/// anchor.
fn place_tags(tags: &[TextTag]) -> HashMap<(usize, usize), Placed<'_>> {
    let mut anchors = HashMap::with_capacity(tags.len());
    for tag in tags.iter().filter(|tag| !tag.is_disabled()) {
        let tag = tag.fit_to_width();
        let anchor = tag.starting_position();
        // Still left of column 0 after fitting: nothing of it is visible
        let (Ok(x), Ok(y)) = (usize::try_from(anchor.x), usize::try_from(anchor.y)) else {
            trace!(x = anchor.x, y = anchor.y, "Skipping off-screen tag");
            continue;
        };
        let chars = tag.text().chars().collect();
        if anchors.insert((x, y), Placed { tag, chars }).is_some() {
            trace!(x, y, "Tag replaced an earlier tag on the same anchor");
        }
    }
    anchors
}

/// Render `frame` with `tags` overlaid.
///
/// Options are validated before any output is produced. The result holds
/// one line per pixel row, each ending in a reset, followed by a final
/// reset line.
pub fn render(frame: &Frame, tags: &[TextTag], options: &RenderOptions<'_>) -> Result<String> {
    let encoder = Encoder::new(options)?;
    let anchors = place_tags(tags);

    debug!(
        width = frame.width(),
        height = frame.height(),
        mode = ?options.mode,
        tags = anchors.len(),
        "Rendering frame"
    );

    let mut out = String::with_capacity(frame.width() * frame.height() * 24 + 16);
    let mut active: Option<Active> = None;

    for y in 0..frame.height() {
        if options
            .cancel
            .is_some_and(|flag| flag.load(Ordering::Relaxed))
        {
            debug!(row = y, "Render cancelled");
            return Err(Error::Cancelled);
        }
        if active.as_ref().is_some_and(|a| !a.placed.tag.line_wrap()) {
            active = None;
        }

        for (x, &pixel) in frame.row(y).iter().enumerate() {
            if let Some(placed) = anchors.get(&(x, y)) {
                active = Some(Active {
                    placed,
                    consumed: 0,
                });
            }

            let mut foreground = None;
            let mut glyph = [' ', ' '];
            if let Some(current) = active.as_mut() {
                foreground = current.placed.tag.color().map(|c| pixel.composite(c));
                glyph = current.next_glyph();
                if current.exhausted() {
                    active = None;
                }
            }

            encoder.push_cell(pixel, foreground, glyph, &mut out);
        }

        if options.prevent_identical_lines && y & 1 == 1 {
            out.push(' ');
        }
        out.push_str(ansi::RESET);
        out.push('\n');
    }

    out.push_str(ansi::RESET);
    out.push('\n');
    Ok(out)
}
