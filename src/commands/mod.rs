//! Command handlers for the termpix CLI.
//!
//! Each submodule handles a specific CLI command or command group.
//! The main dispatch logic remains in main.rs.

pub mod build_table;
pub mod config;
pub mod demo;
