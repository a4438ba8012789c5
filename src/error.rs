//! Library error type.
//!
//! Every fallible operation in the core (quantizer, text tags, frames and the
//! compositor) reports one of these variants. All validation happens before
//! any state is touched, so an `Err` never leaves a half-updated value behind.

use crate::render::DisplayMode;

/// Errors produced by the rendering core.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("Frame dimensions must be positive, got {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    #[error("Frame of {width}x{height} needs {expected} pixels, got {actual}")]
    PixelCountMismatch {
        width: usize,
        height: usize,
        expected: usize,
        actual: usize,
    },

    #[error("Position ({x}, {y}) is outside the {width}x{height} frame")]
    OutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },

    #[error("Palette must hold between 1 and 256 colors, got {len}")]
    InvalidPalette { len: usize },

    #[error("Cell size must be in 1..=256, got {0}")]
    InvalidCellSize(u16),

    #[error("Quantization table must be exactly {expected} bytes, got {actual}")]
    InvalidTableLength { expected: usize, actual: usize },

    #[error("A text tag cannot be centered and line-wrapped at the same time")]
    ConflictingState,

    #[error("Text tag text must not contain line breaks: {0:?}")]
    InvalidText(String),

    #[error("Coordinates must not be negative, got ({x}, {y})")]
    InvalidPosition { x: i32, y: i32 },

    #[error("A tag of {len} characters at x = {x} does not fit in the coordinate range")]
    PositionOverflow { x: i64, len: usize },

    #[error("Display mode {mode:?} requires {requirement}")]
    Configuration {
        mode: DisplayMode,
        requirement: &'static str,
    },

    #[error("Rendering was cancelled")]
    Cancelled,
}

/// Result alias used across the library.
pub type Result<T> = std::result::Result<T, Error>;
