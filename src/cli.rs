//! CLI definitions for termpix
//!
//! This module contains the clap CLI structure definitions, separated from main.rs
//! so they can be parsed in tests without spawning the binary.

use std::path::PathBuf;
use std::str::FromStr;

use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::{Parser, Subcommand, ValueEnum};

use crate::color::Color;
use crate::palette::PaletteKind;
use crate::render::DisplayMode;

/// Build clap styles.
///
/// - Green: headers, usage, command names
/// - White: descriptions, placeholders (renders as light gray on dark terminals)
pub fn build_cli_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Green.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::White.on_default())
        .valid(AnsiColor::White.on_default())
        .invalid(AnsiColor::Red.on_default())
        .error(AnsiColor::Red.on_default() | Effects::BOLD)
}

#[derive(Parser)]
#[command(name = "termpix")]
#[command(about = "Render pixel grids in the terminal with text overlays and palette fallbacks")]
#[command(
    long_about = "termpix - Render true-color pixel grids as terminal escape sequences.

Each pixel is drawn as a two-column cell. Text tags can be laid over the
frame, and terminals without 24-bit color are served through precomputed
256-color and 16-color quantization tables or a grayscale character ramp.

QUICK START:
    termpix demo                         Draw a gradient in true color
    termpix build-table indexed8         Precompute the 256-color table
    termpix demo --mode indexed8         Draw using the 256-color palette
    termpix demo --tag hello@2,1         Overlay text at cell (2, 1)

Config file: ~/.config/termpix/config.toml"
)]
#[command(version)]
#[command(styles = build_cli_styles())]
pub struct Cli {
    /// Config file to use instead of ~/.config/termpix/config.toml
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build and cache a quantization table
    #[command(long_about = "Build the nearest-color lookup table for a palette.

The table maps every 24-bit color to a palette index and is 16 MiB on
disk. It is written to the configured tables directory unless --output
is given.

EXAMPLES:
    termpix build-table indexed4
    termpix build-table indexed8 --cell-size 16 --workers 4
    termpix build-table indexed8 --output ./ansi_8bit_lookup")]
    BuildTable {
        /// Palette to build the table for
        #[arg(value_enum)]
        palette: PaletteKind,
        /// Side of a spatial search cell (1-256)
        #[arg(long)]
        cell_size: Option<u16>,
        /// Worker threads
        #[arg(long)]
        workers: Option<usize>,
        /// Write the table here instead of the tables directory
        #[arg(long, short)]
        output: Option<PathBuf>,
        /// Do not draw a progress bar
        #[arg(long, short)]
        quiet: bool,
    },

    /// Render a test pattern
    #[command(long_about = "Render a test pattern with optional text tags.

Indexed modes load the cached table for their palette, building it first
if it does not exist yet.

EXAMPLES:
    termpix demo --pattern checkerboard --width 16 --height 8
    termpix demo --mode grayscale
    termpix demo --tag 'hello world@0,2' --tag-color '#ffffff80'
    termpix demo --interactive")]
    Demo(DemoArgs),

    /// Configuration management
    #[command(subcommand)]
    Config(ConfigCommands),
}

#[derive(clap::Args, Debug, Clone)]
pub struct DemoArgs {
    /// Display mode (defaults to the configured mode)
    #[arg(long, value_enum)]
    pub mode: Option<DisplayMode>,
    #[arg(long, value_enum, default_value_t = Pattern::Gradient)]
    pub pattern: Pattern,
    /// Frame width in pixels (defaults to half the terminal width)
    #[arg(long)]
    pub width: Option<usize>,
    /// Frame height in pixels (defaults to the terminal height)
    #[arg(long)]
    pub height: Option<usize>,
    /// Text overlay as TEXT@X,Y; repeatable
    #[arg(long = "tag", value_name = "TEXT@X,Y")]
    pub tags: Vec<TagSpec>,
    /// Overlay color for all tags, e.g. '#ff0000' or '#ff000080'
    #[arg(long, value_name = "HEX")]
    pub tag_color: Option<Color>,
    /// Center tags on their position
    #[arg(long)]
    pub centered: bool,
    /// Add a space to odd rows
    #[arg(long)]
    pub prevent_identical_lines: bool,
    /// Move the first tag with the arrow keys until q is pressed
    #[arg(long, short)]
    pub interactive: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern {
    Gradient,
    Checkerboard,
    Solid,
}

/// A tag given on the command line as `TEXT@X,Y`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagSpec {
    pub text: String,
    pub x: i32,
    pub y: i32,
}

impl FromStr for TagSpec {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (text, position) = s
            .rsplit_once('@')
            .ok_or_else(|| format!("expected TEXT@X,Y, got {:?}", s))?;
        let (x, y) = position
            .split_once(',')
            .ok_or_else(|| format!("expected X,Y after '@', got {:?}", position))?;
        let parse = |v: &str| {
            v.trim()
                .parse::<i32>()
                .map_err(|e| format!("invalid coordinate {:?}: {}", v, e))
        };
        Ok(Self {
            text: text.to_string(),
            x: parse(x)?,
            y: parse(y)?,
        })
    }
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show current configuration as TOML
    Show,
    /// Print the config file path
    Path,
    /// Write a default config file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}
