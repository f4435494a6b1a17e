//! Virtual joystick plugins
//!
//! Two implementations of [`VirtualJoystickPlugin`]:
//!
//! - [`PsxPadPlugin`] samples a PlayStation DualShock through a serial
//!   adapter once per tick and translates the frame into axis and button
//!   events.
//! - [`CirclePlugin`] needs no hardware; it sweeps the X/Y axes around a
//!   circle and is useful for checking a host end to end.
//!
//! [`VirtualJoystickPlugin`]: vjoy_plugin_abi::VirtualJoystickPlugin

#![deny(unsafe_op_in_unsafe_fn)]
#![deny(clippy::unwrap_used)]

pub mod buttons;
pub mod config;
pub mod demo;
pub mod feedback;
pub mod psx;
pub mod transport;

pub use buttons::{ButtonMap, DEFAULT_BUTTON_MAP};
pub use config::{
    ButtonBinding, CalibrationConfig, DEFAULT_BAUD_RATE, HostConfig, PluginConfig, SerialConfig,
};
pub use demo::CirclePlugin;
pub use feedback::FeedbackLog;
pub use psx::{PsxPadOptions, PsxPadPlugin, SamplerStats};
pub use transport::{
    DEFAULT_POLL_TIMEOUT, FrameSource, PollTransport, SerialLink, TransportError, open_serial,
};
