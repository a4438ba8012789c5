//! Config subcommands handler

use anyhow::{bail, Result};
use std::path::Path;

use termpix::Config;

/// Show the effective configuration as TOML.
#[cfg(not(tarpaulin_include))]
pub fn handle_show(config: &Config) -> Result<()> {
    print!("{}", render_config(config)?);
    Ok(())
}

pub fn render_config(config: &Config) -> Result<String> {
    Ok(toml::to_string_pretty(config)?)
}

#[cfg(not(tarpaulin_include))]
pub fn handle_path(config_path: &Path) -> Result<()> {
    println!("{}", config_path.display());
    Ok(())
}

/// Write the default configuration to `config_path`.
///
/// Refuses to replace an existing file unless `force` is set.
pub fn handle_init(config_path: &Path, force: bool) -> Result<()> {
    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {} (use --force to overwrite)",
            config_path.display()
        );
    }
    Config::default().save_to(config_path)?;
    println!("Wrote {}", config_path.display());
    Ok(())
}
