//! termpix Library
//!
//! Renders true-color pixel grids as terminal escape sequences, with text
//! overlays and palette-quantized fallbacks for terminals without 24-bit
//! color.

pub mod cli;
pub mod color;
pub mod config;
pub mod error;
pub mod frame;
pub mod input;
pub mod palette;
pub mod progress;
pub mod quantize;
pub mod render;
pub mod storage;
pub mod tag;

pub use color::Color;
pub use config::Config;
pub use error::{Error, Result};
pub use frame::Frame;
pub use quantize::{BuildOptions, QuantizationTable};
pub use render::{render, DisplayMode, RenderOptions};
pub use storage::TableStore;
pub use tag::{Position, TextTag};
