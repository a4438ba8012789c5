//! Configuration management for termpix

mod io;
mod types;

pub use types::*;

use anyhow::Result;
use std::path::{Path, PathBuf};

use crate::quantize::BuildOptions;
use crate::render::RenderOptions;

impl Config {
    /// Get the config file path (~/.config/termpix/config.toml)
    pub fn config_path() -> Result<PathBuf> {
        io::default_path()
    }

    /// Load from `path`, or return defaults if it does not exist
    pub fn load_from(path: &Path) -> Result<Self> {
        io::read(path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        io::write(self, path)
    }

    /// Expand ~ in tables directory path
    pub fn tables_directory(&self) -> PathBuf {
        let dir = &self.tables.directory;
        if let Some(stripped) = dir.strip_prefix("~/") {
            if let Some(home) = dirs::home_dir() {
                return home.join(stripped);
            }
        }
        PathBuf::from(dir)
    }

    pub fn build_options(&self) -> BuildOptions {
        BuildOptions {
            cell_size: self.quantize.cell_size,
            workers: self.quantize.workers,
        }
    }

    /// Render options for the configured display mode. The caller supplies
    /// the table when the mode needs one.
    pub fn render_options<'a>(&'a self, table: Option<&'a [u8]>) -> RenderOptions<'a> {
        RenderOptions {
            mode: self.display.mode,
            table,
            ramp: Some(self.display.ramp.as_str()),
            prevent_identical_lines: self.display.prevent_identical_lines,
            cancel: None,
        }
    }
}
