//! termpix - CLI entry point

mod commands;

use anyhow::Result;
use clap::Parser;

use termpix::cli::{Cli, Commands, ConfigCommands};
use termpix::Config;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_path = match cli.config {
        Some(path) => path,
        None => Config::config_path()?,
    };
    let load = || Config::load_from(&config_path);

    match cli.command {
        Commands::BuildTable {
            palette,
            cell_size,
            workers,
            output,
            quiet,
        } => commands::build_table::handle(&load()?, palette, cell_size, workers, output, quiet),
        Commands::Demo(args) => commands::demo::handle(&load()?, &args),
        Commands::Config(cmd) => match cmd {
            ConfigCommands::Show => commands::config::handle_show(&load()?),
            ConfigCommands::Path => commands::config::handle_path(&config_path),
            ConfigCommands::Init { force } => commands::config::handle_init(&config_path, force),
        },
    }
}
