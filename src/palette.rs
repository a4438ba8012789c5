//! Built-in terminal palettes.
//!
//! Index order matches the SGR color numbers the compositor emits: entry `i`
//! of [`ansi16`] is SGR `30 + i` / `40 + i` (bright half `90 + i - 8` /
//! `100 + i - 8`), entry `i` of [`xterm256`] is `38;5;i` / `48;5;i`.

use serde::{Deserialize, Serialize};

use crate::color::Color;

/// Largest palette a one-byte quantization table can index.
pub const MAX_PALETTE_LEN: usize = 256;

/// Default xterm values for the 16 basic colors.
pub const ANSI_16: [Color; 16] = [
    Color::rgb(0, 0, 0),
    Color::rgb(205, 0, 0),
    Color::rgb(0, 205, 0),
    Color::rgb(205, 205, 0),
    Color::rgb(0, 0, 238),
    Color::rgb(205, 0, 205),
    Color::rgb(0, 205, 205),
    Color::rgb(229, 229, 229),
    Color::rgb(127, 127, 127),
    Color::rgb(255, 0, 0),
    Color::rgb(0, 255, 0),
    Color::rgb(255, 255, 0),
    Color::rgb(92, 92, 255),
    Color::rgb(255, 0, 255),
    Color::rgb(0, 255, 255),
    Color::rgb(255, 255, 255),
];

const CUBE_LEVELS: [u8; 6] = [0, 95, 135, 175, 215, 255];

/// The 16 basic colors.
pub fn ansi16() -> Vec<Color> {
    ANSI_16.to_vec()
}

/// The xterm 256-color palette: 16 basic colors, the 6x6x6 cube, 24 grays.
pub fn xterm256() -> Vec<Color> {
    let mut colors = Vec::with_capacity(MAX_PALETTE_LEN);
    colors.extend_from_slice(&ANSI_16);
    for r in CUBE_LEVELS {
        for g in CUBE_LEVELS {
            for b in CUBE_LEVELS {
                colors.push(Color::rgb(r, g, b));
            }
        }
    }
    for i in 0..24u8 {
        let level = 8 + i * 10;
        colors.push(Color::rgb(level, level, level));
    }
    colors
}

/// Palettes that back the indexed display modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum PaletteKind {
    /// 16 colors, SGR 30-37/90-97
    Indexed4,
    /// 256 colors, SGR 38;5
    Indexed8,
}

impl PaletteKind {
    pub fn colors(&self) -> Vec<Color> {
        match self {
            PaletteKind::Indexed4 => ansi16(),
            PaletteKind::Indexed8 => xterm256(),
        }
    }

    /// File name the table for this palette is cached under.
    pub fn table_file_name(&self) -> &'static str {
        match self {
            PaletteKind::Indexed4 => "ansi_4bit_lookup",
            PaletteKind::Indexed8 => "ansi_8bit_lookup",
        }
    }
}
