//! Force-feedback bookkeeping
//!
//! None of the plugins drive actuators. Uploads and erasures are logged and
//! counted; the effect itself is not kept.

use serde::Serialize;
use tracing::info;
use vjoy_plugin_abi::{EffectPayload, FeedbackEffect, FeedbackKind};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FeedbackLog {
    uploads: u64,
    erasures: u64,
    last_effect_id: Option<i16>,
    last_upload_kind: Option<FeedbackKind>,
}

impl FeedbackLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_upload(&mut self, effect: &FeedbackEffect) {
        self.uploads += 1;
        self.last_effect_id = Some(effect.id);
        self.last_upload_kind = Some(effect.kind);

        let effect_id = effect.id;
        let kind = effect.kind;
        match &effect.payload {
            EffectPayload::Rumble(rumble) => info!(
                effect_id,
                ?kind,
                strong_magnitude = rumble.strong,
                weak_magnitude = rumble.weak,
                "Feedback upload"
            ),
            EffectPayload::Constant { level, envelope } => info!(
                effect_id,
                ?kind,
                constant_level = *level,
                ?envelope,
                "Feedback upload"
            ),
            EffectPayload::Periodic(periodic) => info!(
                effect_id,
                ?kind,
                waveform = periodic.waveform,
                period_ms = periodic.period_ms,
                magnitude = periodic.magnitude,
                offset = periodic.offset,
                phase = periodic.phase,
                envelope = ?periodic.envelope,
                "Feedback upload"
            ),
            EffectPayload::Ramp {
                start_level,
                end_level,
                envelope,
            } => info!(
                effect_id,
                ?kind,
                start_level = *start_level,
                end_level = *end_level,
                ?envelope,
                "Feedback upload"
            ),
            EffectPayload::Condition([x, y]) => info!(
                effect_id,
                ?kind,
                x = ?x,
                y = ?y,
                "Feedback upload"
            ),
            EffectPayload::Other => info!(effect_id, ?kind, "Feedback upload"),
        }
    }

    pub fn record_erase(&mut self, effect_id: i16) {
        self.erasures += 1;
        self.last_effect_id = Some(effect_id);
        info!(effect_id, "Feedback erase");
    }

    pub fn uploads(&self) -> u64 {
        self.uploads
    }

    pub fn erasures(&self) -> u64 {
        self.erasures
    }

    pub fn last_upload_kind(&self) -> Option<FeedbackKind> {
        self.last_upload_kind
    }

    /// Id of the most recent upload or erase.
    pub fn last_effect_id(&self) -> Option<i16> {
        self.last_effect_id
    }
}
