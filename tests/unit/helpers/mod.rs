//! Test helper utilities

#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

use termpix::{BuildOptions, Config};

/// Make escape sequences and newlines visible on one line
pub fn escaped(s: &str) -> String {
    s.replace('\x1b', "^[").replace('\n', "\\n")
}

/// Strip SGR sequences, leaving glyphs and newlines
pub fn glyphs(s: &str) -> String {
    let mut out = String::new();
    let mut in_escape = false;
    for c in s.chars() {
        match (in_escape, c) {
            (false, '\x1b') => in_escape = true,
            (false, c) => out.push(c),
            (true, 'm') => in_escape = false,
            (true, _) => {}
        }
    }
    out
}

/// Coarse cells so full table builds stay quick in debug builds
pub fn fast_build_options() -> BuildOptions {
    BuildOptions {
        cell_size: 64,
        workers: Some(2),
    }
}

/// Config whose tables directory lives inside `temp_dir`
pub fn config_in(temp_dir: &TempDir) -> Config {
    let mut config = Config::default();
    config.tables.directory = tables_dir(temp_dir).to_string_lossy().to_string();
    config.quantize.cell_size = 64;
    config
}

pub fn tables_dir(temp_dir: &TempDir) -> PathBuf {
    temp_dir.path().join("tables")
}

/// Write `contents` to `name` inside `temp_dir`
pub fn write_file(temp_dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = temp_dir.path().join(name);
    fs::write(&path, contents).expect("Failed to write test file");
    path
}
