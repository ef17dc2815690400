//! Command-line interface

pub mod commands;

use clap::{Parser, Subcommand};

use commands::config::ConfigCommands;
use commands::preview::PreviewCommands;

#[derive(Parser)]
#[command(name = "history-import")]
#[command(about = "Preview historical record imports with injected system timestamps")]
#[command(version)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Transform a CSV export and print the resulting drafts
    Preview(PreviewCommands),
    /// Print the effective configuration
    Config(ConfigCommands),
}
