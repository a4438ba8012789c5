//! ANSI escape code conversion utilities.
//!
//! Appends SGR color sequences for one cell to an output buffer.

use crate::color::Color;

/// ANSI reset sequence
pub const RESET: &str = "\x1b[0m";

/// Which half of a cell a color applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layer {
    Foreground,
    Background,
}

/// Append a 24-bit color sequence, `ESC[38;2;R;G;Bm` or `ESC[48;2;R;G;Bm`.
pub fn push_rgb(layer: Layer, color: Color, buf: &mut String) {
    buf.push_str(match layer {
        Layer::Foreground => "\x1b[38;2;",
        Layer::Background => "\x1b[48;2;",
    });
    buf.push_str(&color.r.to_string());
    buf.push(';');
    buf.push_str(&color.g.to_string());
    buf.push(';');
    buf.push_str(&color.b.to_string());
    buf.push('m');
}

/// Append a 256-color sequence, `ESC[38;5;Im` or `ESC[48;5;Im`.
pub fn push_indexed8(layer: Layer, index: u8, buf: &mut String) {
    buf.push_str(match layer {
        Layer::Foreground => "\x1b[38;5;",
        Layer::Background => "\x1b[48;5;",
    });
    buf.push_str(&index.to_string());
    buf.push('m');
}

/// Append a 16-color sequence.
///
/// Indices 0-7 use SGR 30-37 / 40-47. Plain `30 + I` / `40 + I` breaks down
/// past 7: 38 and 48 introduce extended colors and 39 and 49 reset to the
/// default, so indices 8-15 use the bright forms 90-97 / 100-107. Anything
/// above 15 has no basic code and is written as a 256-color sequence.
pub fn push_indexed4(layer: Layer, index: u8, buf: &mut String) {
    let code = match (layer, index) {
        (Layer::Foreground, 0..=7) => 30 + index,
        (Layer::Background, 0..=7) => 40 + index,
        (Layer::Foreground, 8..=15) => 90 + index - 8,
        (Layer::Background, 8..=15) => 100 + index - 8,
        _ => return push_indexed8(layer, index, buf),
    };
    buf.push_str("\x1b[");
    buf.push_str(&code.to_string());
    buf.push('m');
}
