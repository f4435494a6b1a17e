//! Single poll of the serial adapter

use anyhow::Result;
use psx_serial_protocol::decode;
use tracing::info;
use vjoy_plugins::{PluginConfig, PsxPadOptions, PsxPadPlugin, open_serial};

use crate::error::CliError;
use crate::output;

/// Open the configured port, poll once and print what the sampler would
/// report for that frame.
pub fn execute(config: &PluginConfig, json: bool) -> Result<()> {
    let mut transport = open_serial(&config.serial).map_err(CliError::from)?;
    let frame = transport.poll().map_err(CliError::from)?;
    let sample = decode(&frame).map_err(CliError::from)?;
    info!(button_mask = sample.button_mask, "Frame decoded");

    let pad = PsxPadPlugin::new(transport, PsxPadOptions::from_config(config))
        .map_err(CliError::from)?;
    output::print_probe(&sample, &pad.events_for(&sample), json);
    Ok(())
}
