//! Plugin contract for the virtual joystick host.
//!
//! A plugin describes the virtual device it wants (axes, buttons,
//! force-feedback kinds) and supplies a periodic think routine that samples
//! a physical device and returns a batch of typed events. This crate holds
//! the shared vocabulary:
//!
//! - [`types`]: axis, button and feedback identifiers with their Linux
//!   input-event codes
//! - [`descriptor`]: [`CapabilityDescriptor`], validated at construction
//! - [`event`]: the [`Event`] tagged union and its raw wire form
//! - [`effect`]: force-feedback effects delivered on upload
//! - [`plugin`]: the [`VirtualJoystickPlugin`] lifecycle trait
//!
//! # Example
//!
//! ```
//! use vjoy_plugin_abi::prelude::*;
//!
//! let caps = CapabilityDescriptor::builder("Example")
//!     .absolute_axes([AxisId::X, AxisId::Y])
//!     .buttons([ButtonId::BtnA])
//!     .build()?;
//!
//! assert_eq!(caps.axis_index(AxisId::Y), Some(1));
//! assert_eq!(Event::button(ButtonId::BtnA, true).to_raw().value, 1);
//! # Ok::<(), ConfigurationError>(())
//! ```

#![deny(unsafe_op_in_unsafe_fn, clippy::unwrap_used)]
#![warn(rust_2018_idioms)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod codes;
pub mod descriptor;
pub mod effect;
pub mod event;
pub mod plugin;
pub mod prelude;
pub mod types;

pub use descriptor::{CapabilityDescriptor, CapabilityDescriptorBuilder, ConfigurationError};
pub use effect::{
    ConditionAxis, EffectPayload, Envelope, FeedbackEffect, PeriodicEffect, Replay,
    RumbleMagnitudes, Trigger,
};
pub use event::{Event, RawEvent};
pub use plugin::VirtualJoystickPlugin;
pub use types::{AxisId, ButtonId, FeedbackKind, FeedbackKinds, RelAxisId};
