//! Preview command

mod handler;

use clap::Args;
use std::path::PathBuf;

pub use handler::handle_preview_command;

#[derive(Args)]
pub struct PreviewCommands {
    /// CSV export of legacy records (first row is the header)
    #[arg(short, long)]
    pub input: PathBuf,

    /// Import config file (defaults to ~/.config/history-import/config.toml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Disable write automation regardless of the config file
    #[arg(long)]
    pub suppress_automation: bool,

    /// Stop after this many records
    #[arg(short, long)]
    pub limit: Option<usize>,

    /// Pretty-print each draft
    #[arg(long)]
    pub pretty: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}
