//! Config command

mod handler;

use clap::Args;
use std::path::PathBuf;

pub use handler::handle_config_command;

#[derive(Args)]
pub struct ConfigCommands {
    /// Import config file (defaults to ~/.config/history-import/config.toml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Show the migration preset instead of loading a file
    #[arg(long, conflicts_with = "config")]
    pub migration: bool,
}
