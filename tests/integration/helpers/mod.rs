//! Test helper utilities

#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;
use std::process::Command;
use tempfile::TempDir;

/// Isolated home with a config file pointing the tables directory inside it
pub struct TestEnv {
    pub home: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        Self::with_config("")
    }

    /// `extra` is appended to a config that already sets `[tables]` and a
    /// coarse `[quantize]` cell size
    pub fn with_config(extra: &str) -> Self {
        let home = TempDir::new().expect("Failed to create temp dir");
        let env = Self { home };
        let contents = format!(
            "[tables]\ndirectory = {:?}\n\n[quantize]\ncell_size = 64\n\n{}",
            env.tables_dir().to_string_lossy(),
            extra
        );
        fs::write(env.config_path(), contents).expect("Failed to write config");
        env
    }

    pub fn config_path(&self) -> PathBuf {
        self.home.path().join("config.toml")
    }

    pub fn tables_dir(&self) -> PathBuf {
        self.home.path().join("tables")
    }

    /// Run termpix with this environment's config and home
    pub fn run(&self, args: &[&str]) -> (String, String, i32) {
        let output = Command::new(env!("CARGO_BIN_EXE_termpix"))
            .args(args)
            .arg("--config")
            .arg(self.config_path())
            .env("HOME", self.home.path())
            .output()
            .expect("Failed to execute termpix");

        let stdout = String::from_utf8_lossy(&output.stdout).to_string();
        let stderr = String::from_utf8_lossy(&output.stderr).to_string();
        let exit_code = output.status.code().unwrap_or(-1);

        (stdout, stderr, exit_code)
    }
}

/// Make escape sequences and newlines visible on one line
pub fn escaped(s: &str) -> String {
    s.replace('\x1b', "^[").replace('\n', "\\n")
}
