//! Config command handler

use anyhow::Result;

use super::ConfigCommands;
use crate::config::ImportConfig;

/// Print the effective configuration as TOML
pub fn handle_config_command(args: ConfigCommands) -> Result<()> {
    let config = if args.migration {
        ImportConfig::migration()
    } else {
        ImportConfig::load_or_default(args.config.as_deref())?
    };

    print!("{}", config.to_toml()?);
    Ok(())
}
