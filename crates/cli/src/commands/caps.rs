//! Capability descriptor inspection

use anyhow::Result;
use vjoy_plugin_abi::VirtualJoystickPlugin;
use vjoy_plugins::psx::dualshock_descriptor;
use vjoy_plugins::{ButtonMap, CirclePlugin};

use crate::commands::PluginKind;
use crate::error::CliError;
use crate::output;

/// Print the descriptor a plugin would register with the host.
pub fn execute(plugin: PluginKind, json: bool) -> Result<()> {
    match plugin {
        PluginKind::Psx => {
            let caps = dualshock_descriptor().map_err(CliError::from)?;
            let bits = ButtonMap::dualshock(caps.buttons()).map_err(CliError::from)?;
            output::print_capabilities(&caps, Some(&bits), json);
        }
        PluginKind::Circle => {
            let circle = CirclePlugin::new().map_err(CliError::from)?;
            output::print_capabilities(circle.capabilities(), None, json);
        }
    }
    Ok(())
}
