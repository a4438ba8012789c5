//! Configuration type definitions and defaults

use serde::{Deserialize, Serialize};

use crate::quantize::DEFAULT_CELL_SIZE;
use crate::render::DisplayMode;

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub quantize: QuantizeConfig,
    #[serde(default)]
    pub tables: TablesConfig,
}

impl Config {
    /// Check values serde cannot express as types.
    pub fn validate(&self) -> Result<(), String> {
        if self.display.ramp.is_empty() {
            return Err("display.ramp must not be empty".to_string());
        }
        if !(1..=256).contains(&self.quantize.cell_size) {
            return Err(format!(
                "quantize.cell_size must be in 1..=256, got {}",
                self.quantize.cell_size
            ));
        }
        if self.quantize.workers == Some(0) {
            return Err("quantize.workers must be at least 1".to_string());
        }
        Ok(())
    }
}

/// Output configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    #[serde(default)]
    pub mode: DisplayMode,
    /// Grayscale characters, darkest first
    #[serde(default = "default_ramp")]
    pub ramp: String,
    #[serde(default)]
    pub prevent_identical_lines: bool,
}

pub fn default_ramp() -> String {
    " .:-=+*#%@".to_string()
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            mode: DisplayMode::default(),
            ramp: default_ramp(),
            prevent_identical_lines: false,
        }
    }
}

/// Table build configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuantizeConfig {
    #[serde(default = "default_cell_size")]
    pub cell_size: u16,
    /// Worker threads; unset lets the thread pool decide
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workers: Option<usize>,
}

pub fn default_cell_size() -> u16 {
    DEFAULT_CELL_SIZE
}

impl Default for QuantizeConfig {
    fn default() -> Self {
        Self {
            cell_size: default_cell_size(),
            workers: None,
        }
    }
}

/// Where cached quantization tables live
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TablesConfig {
    #[serde(default = "default_directory")]
    pub directory: String,
}

pub fn default_directory() -> String {
    "~/.config/termpix/tables".to_string()
}

impl Default for TablesConfig {
    fn default() -> Self {
        Self {
            directory: default_directory(),
        }
    }
}
