use anyhow::Result;
use clap::Parser;

mod cli;

use cli::{Cli, Commands};
pub(crate) use history_import::{config, transfer};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    match cli.command {
        Commands::Preview(args) => cli::commands::preview::handle_preview_command(args),
        Commands::Config(args) => cli::commands::config::handle_config_command(args),
    }
}
