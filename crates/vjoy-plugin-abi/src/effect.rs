//! Force-feedback effect as delivered by the host on upload.
//!
//! Mirrors the kernel's `ff_effect`: a common header (id, direction,
//! trigger, replay) plus a payload whose shape depends on the effect kind.

use crate::types::FeedbackKind;
use serde::{Deserialize, Serialize};

/// Playback timing of an effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Replay {
    pub length_ms: u16,
    pub delay_ms: u16,
}

/// Button that starts the effect, and the minimum time between retriggers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Trigger {
    pub button: u16,
    pub interval_ms: u16,
}

/// Attack and fade shaping of constant, periodic and ramp effects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Envelope {
    pub attack_length_ms: u16,
    pub attack_level: u16,
    pub fade_length_ms: u16,
    pub fade_level: u16,
}

/// Strong (low-frequency) and weak (high-frequency) motor magnitudes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RumbleMagnitudes {
    pub strong: u16,
    pub weak: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PeriodicEffect {
    /// `FF_SQUARE`..`FF_CUSTOM` waveform code.
    pub waveform: u16,
    pub period_ms: u16,
    pub magnitude: i16,
    pub offset: i16,
    pub phase: u16,
    pub envelope: Envelope,
}

/// One axis of a spring or friction effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ConditionAxis {
    pub right_saturation: u16,
    pub left_saturation: u16,
    pub right_coeff: i16,
    pub left_coeff: i16,
    pub deadband: u16,
    pub center: i16,
}

/// Kind-specific part of an effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EffectPayload {
    Rumble(RumbleMagnitudes),
    Constant {
        level: i16,
        envelope: Envelope,
    },
    Periodic(PeriodicEffect),
    Ramp {
        start_level: i16,
        end_level: i16,
        envelope: Envelope,
    },
    /// Spring and friction; one entry per axis.
    Condition([ConditionAxis; 2]),
    /// Kinds the host forwards without a payload.
    Other,
}

/// Effect uploaded by the host.
///
/// Owned by the host; plugins read it during the upload callback and do not
/// keep it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackEffect {
    /// Host-assigned effect slot.
    pub id: i16,
    pub kind: FeedbackKind,
    /// Direction in the host's 0..=0xFFFF angle units.
    pub direction: u16,
    pub trigger: Trigger,
    pub replay: Replay,
    pub payload: EffectPayload,
}

impl FeedbackEffect {
    fn with_payload(id: i16, kind: FeedbackKind, payload: EffectPayload) -> Self {
        Self {
            id,
            kind,
            direction: 0,
            trigger: Trigger::default(),
            replay: Replay::default(),
            payload,
        }
    }

    /// A rumble effect with the given motor magnitudes.
    ///
    /// ```
    /// use vjoy_plugin_abi::{FeedbackEffect, FeedbackKind};
    ///
    /// let effect = FeedbackEffect::rumble(0, 0x8000, 0x4000);
    /// assert_eq!(effect.kind, FeedbackKind::Rumble);
    /// assert_eq!(effect.strong_magnitude(), 0x8000);
    /// assert_eq!(effect.weak_magnitude(), 0x4000);
    /// ```
    pub fn rumble(id: i16, strong: u16, weak: u16) -> Self {
        Self::with_payload(
            id,
            FeedbackKind::Rumble,
            EffectPayload::Rumble(RumbleMagnitudes { strong, weak }),
        )
    }

    pub fn constant(id: i16, level: i16, envelope: Envelope) -> Self {
        Self::with_payload(
            id,
            FeedbackKind::Constant,
            EffectPayload::Constant { level, envelope },
        )
    }

    pub fn periodic(id: i16, periodic: PeriodicEffect) -> Self {
        Self::with_payload(id, FeedbackKind::Periodic, EffectPayload::Periodic(periodic))
    }

    pub fn ramp(id: i16, start_level: i16, end_level: i16, envelope: Envelope) -> Self {
        Self::with_payload(
            id,
            FeedbackKind::Ramp,
            EffectPayload::Ramp {
                start_level,
                end_level,
                envelope,
            },
        )
    }

    /// Spring or friction effect. Any other `kind` gets an empty payload.
    pub fn condition(id: i16, kind: FeedbackKind, axes: [ConditionAxis; 2]) -> Self {
        let payload = match kind {
            FeedbackKind::Spring | FeedbackKind::Friction => EffectPayload::Condition(axes),
            _ => EffectPayload::Other,
        };
        Self::with_payload(id, kind, payload)
    }

    /// Effect of a kind that carries no payload (damper, inertia, ...).
    pub fn other(id: i16, kind: FeedbackKind) -> Self {
        Self::with_payload(id, kind, EffectPayload::Other)
    }

    pub fn with_replay(mut self, length_ms: u16, delay_ms: u16) -> Self {
        self.replay = Replay {
            length_ms,
            delay_ms,
        };
        self
    }

    pub fn with_trigger(mut self, button: u16, interval_ms: u16) -> Self {
        self.trigger = Trigger {
            button,
            interval_ms,
        };
        self
    }

    pub fn with_direction(mut self, direction: u16) -> Self {
        self.direction = direction;
        self
    }

    /// Motor magnitudes of a rumble effect.
    pub fn rumble_magnitudes(&self) -> Option<RumbleMagnitudes> {
        match self.payload {
            EffectPayload::Rumble(magnitudes) => Some(magnitudes),
            _ => None,
        }
    }

    /// Strong motor magnitude; 0 for anything but rumble.
    pub fn strong_magnitude(&self) -> u16 {
        self.rumble_magnitudes().map_or(0, |m| m.strong)
    }

    /// Weak motor magnitude; 0 for anything but rumble.
    pub fn weak_magnitude(&self) -> u16 {
        self.rumble_magnitudes().map_or(0, |m| m.weak)
    }
}
