//! Command implementations for vjoyctl CLI

pub mod caps;
pub mod config;
pub mod probe;
pub mod run;

use anyhow::Result;
use clap::{Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use vjoy_plugins::PluginConfig;

use crate::error::CliError;

/// Plugin to instantiate
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PluginKind {
    /// Serial DualShock adapter
    Psx,
    /// Hardware-free circle generator
    Circle,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Write a default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },

    /// Show the effective configuration
    Show,

    /// Check the configuration file for errors
    Validate,
}

/// Path given on the command line, else the per-user default.
pub fn config_path(explicit: Option<&Path>) -> Result<PathBuf> {
    match explicit {
        Some(path) => Ok(path.to_path_buf()),
        None => PluginConfig::default_config_path(),
    }
}

/// Load and validate the configuration.
pub fn load_config(explicit: Option<&Path>) -> Result<PluginConfig> {
    let path = config_path(explicit)?;
    let config = PluginConfig::load_from_path(&path)?;
    config
        .validate()
        .map_err(|e| CliError::ValidationError(format!("{}: {e}", path.display())))?;
    Ok(config)
}
