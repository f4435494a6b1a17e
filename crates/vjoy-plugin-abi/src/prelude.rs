//! Common imports for plugin implementations.

pub use crate::descriptor::{CapabilityDescriptor, CapabilityDescriptorBuilder, ConfigurationError};
pub use crate::effect::{
    ConditionAxis, EffectPayload, Envelope, FeedbackEffect, PeriodicEffect, Replay,
    RumbleMagnitudes, Trigger,
};
pub use crate::event::{Event, RawEvent};
pub use crate::plugin::VirtualJoystickPlugin;
pub use crate::types::{AxisId, ButtonId, FeedbackKind, FeedbackKinds, RelAxisId};
