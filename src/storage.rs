//! Storage for quantization tables
//!
//! A table is persisted as its raw bytes: exactly 2^24 of them, entry
//! `R + G*256 + B*65536` holding the palette index for that color.

use anyhow::{bail, Context, Result};
use humansize::{format_size, BINARY};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::config::Config;
use crate::palette::PaletteKind;
use crate::progress::ProgressReporter;
use crate::quantize::{BuildOptions, QuantizationTable, TABLE_LEN};

/// Read a table file, checking its length.
pub fn read_table(path: &Path) -> Result<QuantizationTable> {
    let bytes =
        fs::read(path).with_context(|| format!("Failed to read table file: {:?}", path))?;
    if bytes.len() != TABLE_LEN {
        bail!(
            "Table file {:?} is {} long, expected {}",
            path,
            format_size(bytes.len() as u64, BINARY),
            format_size(TABLE_LEN as u64, BINARY)
        );
    }
    debug!(path = %path.display(), "Loaded quantization table");
    QuantizationTable::from_bytes(bytes)
        .with_context(|| format!("Invalid table file: {:?}", path))
}

/// Write a table file, creating parent directories as needed.
pub fn write_table(path: &Path, table: &QuantizationTable) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create table directory: {:?}", parent))?;
    }
    fs::write(path, table.as_bytes())
        .with_context(|| format!("Failed to write table file: {:?}", path))?;
    debug!(path = %path.display(), "Saved quantization table");
    Ok(())
}

/// Where a cached table came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableSource {
    Cached,
    Built,
}

/// Cache of per-palette tables in one directory
pub struct TableStore {
    directory: PathBuf,
}

impl TableStore {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    /// Store rooted at the configured tables directory
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.tables_directory())
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// File the table for `kind` is cached in
    pub fn table_path(&self, kind: PaletteKind) -> PathBuf {
        self.directory.join(kind.table_file_name())
    }

    /// Read the cached table for `kind`, or build and cache it.
    ///
    /// A cached file with the wrong length is treated as stale and rebuilt.
    pub fn load_or_build(
        &self,
        kind: PaletteKind,
        options: &BuildOptions,
        progress: &ProgressReporter,
    ) -> Result<(QuantizationTable, TableSource)> {
        let path = self.table_path(kind);
        if path.exists() {
            match read_table(&path) {
                Ok(table) => return Ok((table, TableSource::Cached)),
                Err(e) => debug!(error = %e, "Cached table unusable, rebuilding"),
            }
        }

        let table = self.build(kind, options, progress)?;
        Ok((table, TableSource::Built))
    }

    /// Build the table for `kind` and overwrite the cached copy.
    pub fn build(
        &self,
        kind: PaletteKind,
        options: &BuildOptions,
        progress: &ProgressReporter,
    ) -> Result<QuantizationTable> {
        let table = QuantizationTable::build_with(&kind.colors(), options, progress)
            .with_context(|| format!("Failed to build {:?} table", kind))?;
        write_table(&self.table_path(kind), &table)?;
        Ok(table)
    }
}
