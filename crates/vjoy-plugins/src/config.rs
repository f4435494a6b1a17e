//! Plugin configuration file
//!
//! JSON document holding the adapter's serial parameters, the stick
//! calibration, an optional button table and the host loop rate. Missing
//! files are created with defaults on first load.

use crate::buttons::ButtonMap;
use crate::psx::BUTTONS;
use anyhow::{Context, Result};
use psx_serial_protocol::AxisCalibration;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use vjoy_plugin_abi::ButtonId;

pub const SCHEMA_VERSION: &str = "vjoy.config/1";

/// Default line speed of the adapter.
pub const DEFAULT_BAUD_RATE: u32 = 115_200;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginConfig {
    /// Configuration schema version
    pub schema_version: String,
    pub serial: SerialConfig,
    pub calibration: CalibrationConfig,
    /// Button to mask-bit table; the standard DualShock layout when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub buttons: Option<Vec<ButtonBinding>>,
    pub host: HostConfig,
}

/// One virtual button and the adapter mask bit it reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ButtonBinding {
    pub button: ButtonId,
    pub bit: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerialConfig {
    pub device_path: String,
    pub baud_rate: u32,
    /// Read timeout; bounds how long one tick can block.
    pub timeout_ms: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalibrationConfig {
    /// Raw reading of a stick at rest
    pub center: u16,
    pub scale: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostConfig {
    pub tick_rate_hz: u32,
}

impl Default for PluginConfig {
    fn default() -> Self {
        Self {
            schema_version: SCHEMA_VERSION.to_string(),
            serial: SerialConfig::default(),
            calibration: CalibrationConfig::default(),
            buttons: None,
            host: HostConfig::default(),
        }
    }
}

impl Default for SerialConfig {
    fn default() -> Self {
        Self {
            device_path: "/dev/ttyUSB0".to_string(),
            baud_rate: DEFAULT_BAUD_RATE,
            timeout_ms: 50,
        }
    }
}

impl Default for CalibrationConfig {
    fn default() -> Self {
        let cal = AxisCalibration::DUALSHOCK_ADAPTER;
        Self {
            center: cal.center,
            scale: cal.scale,
        }
    }
}

impl Default for HostConfig {
    fn default() -> Self {
        Self { tick_rate_hz: 60 }
    }
}

impl CalibrationConfig {
    pub fn to_calibration(self) -> AxisCalibration {
        AxisCalibration::new(self.center, self.scale)
    }
}

impl PluginConfig {
    /// Button table as `(button, bit)` pairs, if the file overrides it.
    pub fn button_table(&self) -> Option<Vec<(ButtonId, u8)>> {
        self.buttons
            .as_ref()
            .map(|bindings| bindings.iter().map(|b| (b.button, b.bit)).collect())
    }

    /// Load configuration from default location
    pub fn load() -> Result<Self> {
        let config_path = Self::default_config_path()?;
        Self::load_from_path(&config_path)
    }

    /// Load configuration from specific path, writing defaults there if the
    /// file does not exist yet.
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            info!("Config file not found at {:?}, creating default", path);
            let config = Self::default();
            config.save_to_path(path)?;
            return Ok(config);
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        let config: PluginConfig = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;

        debug!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Save configuration to specific path
    pub fn save_to_path<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let content = serde_json::to_string_pretty(self).context("Failed to serialize config")?;

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {:?}", path))?;

        debug!("Saved config to {:?}", path);
        Ok(())
    }

    /// `$HOME/.config/vjoy/plugin.json`
    pub fn default_config_path() -> Result<PathBuf> {
        let home = std::env::var("HOME").context("HOME environment variable not set")?;
        Ok(PathBuf::from(home)
            .join(".config")
            .join("vjoy")
            .join("plugin.json"))
    }

    pub fn validate(&self) -> Result<()> {
        if !self.schema_version.starts_with("vjoy.config/") {
            anyhow::bail!("Invalid schema version: {}", self.schema_version);
        }

        if self.serial.device_path.is_empty() {
            anyhow::bail!("Serial device path is empty");
        }

        if self.serial.baud_rate == 0 {
            anyhow::bail!("Invalid baud rate: {}", self.serial.baud_rate);
        }

        if self.serial.timeout_ms == 0 || self.serial.timeout_ms > 1000 {
            anyhow::bail!("Invalid serial timeout: {} ms", self.serial.timeout_ms);
        }

        if self.calibration.scale < 1 {
            anyhow::bail!("Invalid calibration scale: {}", self.calibration.scale);
        }

        if let Some(table) = self.button_table() {
            ButtonMap::new(&BUTTONS, &table).context("Invalid button table")?;
        }

        if self.host.tick_rate_hz == 0 || self.host.tick_rate_hz > 1000 {
            anyhow::bail!("Invalid tick rate: {} Hz", self.host.tick_rate_hz);
        }

        Ok(())
    }
}
