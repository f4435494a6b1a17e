//! Configuration file commands

use anyhow::Result;
use tracing::debug;
use vjoy_plugins::PluginConfig;

use crate::commands::{ConfigCommands, config_path};
use crate::error::CliError;
use crate::output;
use std::path::Path;

pub fn execute(cmd: &ConfigCommands, explicit: Option<&Path>, json: bool) -> Result<()> {
    let path = config_path(explicit)?;
    debug!("Using config file {:?}", path);

    match cmd {
        ConfigCommands::Init { force } => {
            let existed = path.exists();
            if existed && !force {
                return Err(CliError::ConfigExists(path.display().to_string()).into());
            }
            if existed {
                output::print_warning(&format!("Overwriting {}", path.display()), json);
            }
            PluginConfig::default().save_to_path(&path)?;
            output::print_success(&format!("Wrote default config to {}", path.display()), json);
        }
        ConfigCommands::Show => {
            let config = PluginConfig::load_from_path(&path)?;
            output::print_config(&config, &path.display().to_string(), json);
        }
        ConfigCommands::Validate => {
            let config = PluginConfig::load_from_path(&path)?;
            config
                .validate()
                .map_err(|e| CliError::ValidationError(e.to_string()))?;
            output::print_success(&format!("{} is valid", path.display()), json);
        }
    }
    Ok(())
}
