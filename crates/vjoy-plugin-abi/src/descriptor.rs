//! Capability descriptor handed to the host at registration.
//!
//! The descriptor is immutable once built. Axis and button order is the
//! index assignment the host uses for its virtual device, so it is fixed for
//! the lifetime of a plugin.

use crate::codes::MAX_NAME_SIZE;
use crate::types::{AxisId, ButtonId, FeedbackKind, FeedbackKinds, RelAxisId};
use serde::Serialize;
use thiserror::Error;

/// A descriptor (or a table derived from it) is malformed.
///
/// Raised at construction time only; a plugin that fails here must not be
/// registered.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    #[error("Device name is {len} bytes, at most {max} allowed")]
    NameTooLong { len: usize, max: usize },

    #[error("Device name contains a NUL byte")]
    InvalidName,

    #[error("Absolute axis {0:?} listed more than once")]
    DuplicateAbsoluteAxis(AxisId),

    #[error("Relative axis {0:?} listed more than once")]
    DuplicateRelativeAxis(RelAxisId),

    #[error("Button {0:?} listed more than once")]
    DuplicateButton(ButtonId),

    #[error("Feedback kinds declared but no effect slots available")]
    FeedbackWithoutEffectSlots,

    #[error("Button {0:?} has no bit assigned")]
    UnmappedButton(ButtonId),

    #[error("Button {button:?} mapped to bit {bit}, frame has {width} bits")]
    BitOutOfRange { button: ButtonId, bit: u8, width: u8 },

    #[error("Bit {bit} assigned to both {first:?} and {second:?}")]
    DuplicateBit {
        bit: u8,
        first: ButtonId,
        second: ButtonId,
    },

    #[error("Button {button:?} mapped to both bit {first_bit} and bit {second_bit}")]
    DuplicateButtonMapping {
        button: ButtonId,
        first_bit: u8,
        second_bit: u8,
    },

    #[error("Invalid calibration: {0}")]
    InvalidCalibration(String),
}

/// Static description of a virtual joystick.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CapabilityDescriptor {
    name: String,
    relative_axes: Vec<RelAxisId>,
    absolute_axes: Vec<AxisId>,
    feedback: FeedbackKinds,
    max_effects: u32,
    buttons: Vec<ButtonId>,
}

impl CapabilityDescriptor {
    /// Start building a descriptor for a device called `name`.
    pub fn builder(name: impl Into<String>) -> CapabilityDescriptorBuilder {
        CapabilityDescriptorBuilder {
            name: name.into(),
            relative_axes: Vec::new(),
            absolute_axes: Vec::new(),
            feedback: FeedbackKinds::empty(),
            max_effects: 0,
            buttons: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn relative_axes(&self) -> &[RelAxisId] {
        &self.relative_axes
    }

    pub fn absolute_axes(&self) -> &[AxisId] {
        &self.absolute_axes
    }

    pub fn feedback(&self) -> FeedbackKinds {
        self.feedback
    }

    /// Advisory upper bound on concurrently uploaded effects.
    ///
    /// The host sizes its effect table from this; plugins never enforce it.
    pub fn max_effects(&self) -> u32 {
        self.max_effects
    }

    pub fn buttons(&self) -> &[ButtonId] {
        &self.buttons
    }

    /// Host-side index of an absolute axis.
    pub fn axis_index(&self, axis: AxisId) -> Option<usize> {
        self.absolute_axes.iter().position(|a| *a == axis)
    }

    /// Host-side index of a button.
    pub fn button_index(&self, button: ButtonId) -> Option<usize> {
        self.buttons.iter().position(|b| *b == button)
    }

    pub fn has_force_feedback(&self) -> bool {
        !self.feedback.is_empty()
    }
}

/// Builder for [`CapabilityDescriptor`]; validation happens in [`build`].
///
/// [`build`]: CapabilityDescriptorBuilder::build
#[derive(Debug, Clone)]
pub struct CapabilityDescriptorBuilder {
    name: String,
    relative_axes: Vec<RelAxisId>,
    absolute_axes: Vec<AxisId>,
    feedback: FeedbackKinds,
    max_effects: u32,
    buttons: Vec<ButtonId>,
}

impl CapabilityDescriptorBuilder {
    pub fn relative_axes(mut self, axes: impl IntoIterator<Item = RelAxisId>) -> Self {
        self.relative_axes.extend(axes);
        self
    }

    pub fn absolute_axes(mut self, axes: impl IntoIterator<Item = AxisId>) -> Self {
        self.absolute_axes.extend(axes);
        self
    }

    pub fn feedback(mut self, kind: FeedbackKind) -> Self {
        self.feedback |= kind.flag();
        self
    }

    pub fn max_effects(mut self, max_effects: u32) -> Self {
        self.max_effects = max_effects;
        self
    }

    pub fn buttons(mut self, buttons: impl IntoIterator<Item = ButtonId>) -> Self {
        self.buttons.extend(buttons);
        self
    }

    /// Validate and freeze the descriptor.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError`] when the name does not fit the host's
    /// name buffer, an axis or button is listed twice, or feedback kinds are
    /// declared without any effect slots.
    pub fn build(self) -> Result<CapabilityDescriptor, ConfigurationError> {
        // Room for the terminator.
        let max = MAX_NAME_SIZE - 1;
        if self.name.len() > max {
            return Err(ConfigurationError::NameTooLong {
                len: self.name.len(),
                max,
            });
        }
        if self.name.contains('\0') {
            return Err(ConfigurationError::InvalidName);
        }

        if let Some(axis) = first_duplicate(&self.absolute_axes) {
            return Err(ConfigurationError::DuplicateAbsoluteAxis(axis));
        }
        if let Some(axis) = first_duplicate(&self.relative_axes) {
            return Err(ConfigurationError::DuplicateRelativeAxis(axis));
        }
        if let Some(button) = first_duplicate(&self.buttons) {
            return Err(ConfigurationError::DuplicateButton(button));
        }

        if !self.feedback.is_empty() && self.max_effects == 0 {
            return Err(ConfigurationError::FeedbackWithoutEffectSlots);
        }

        Ok(CapabilityDescriptor {
            name: self.name,
            relative_axes: self.relative_axes,
            absolute_axes: self.absolute_axes,
            feedback: self.feedback,
            max_effects: self.max_effects,
            buttons: self.buttons,
        })
    }
}

fn first_duplicate<T: Copy + PartialEq>(items: &[T]) -> Option<T> {
    items
        .iter()
        .enumerate()
        .find(|(i, item)| items.iter().skip(i + 1).any(|other| other == *item))
        .map(|(_, item)| *item)
}
