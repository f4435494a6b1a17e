//! Error types for vjoyctl CLI

use thiserror::Error;
use vjoy_plugin_abi::ConfigurationError;
use vjoy_plugins::TransportError;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    #[error("Malformed frame: {0}")]
    Frame(#[from] psx_serial_protocol::FormatError),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Invalid plugin configuration: {0}")]
    InvalidConfiguration(#[from] ConfigurationError),

    #[error("Config file already exists: {0} (use --force to overwrite)")]
    ConfigExists(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl CliError {
    pub fn kind(&self) -> &'static str {
        match self {
            CliError::Transport(_) => "Transport",
            CliError::Frame(_) => "Frame",
            CliError::ValidationError(_) => "ValidationError",
            CliError::InvalidConfiguration(_) => "InvalidConfiguration",
            CliError::ConfigExists(_) => "ConfigExists",
            CliError::IoError(_) => "IoError",
            CliError::JsonError(_) => "JsonError",
        }
    }

    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::Transport(_) | CliError::Frame(_) => 2,
            CliError::ValidationError(_)
            | CliError::InvalidConfiguration(_)
            | CliError::JsonError(_) => 4,
            CliError::ConfigExists(_) | CliError::IoError(_) => 1,
        }
    }
}

/// Exit code for any error reaching `main`.
///
/// Looks through the whole cause chain, so a parse failure wrapped in
/// context by the config loader still reports as a validation error.
pub fn exit_code(error: &anyhow::Error) -> u8 {
    for cause in error.chain() {
        if let Some(cli) = cause.downcast_ref::<CliError>() {
            return cli.exit_code();
        }
        if cause.is::<TransportError>() {
            return 2;
        }
        if cause.is::<serde_json::Error>() || cause.is::<ConfigurationError>() {
            return 4;
        }
    }
    1
}
