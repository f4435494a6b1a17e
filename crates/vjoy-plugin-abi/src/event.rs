//! Events produced by a plugin's think routine.

use crate::codes::{ev, syn};
use crate::types::{AxisId, ButtonId};
use serde::{Deserialize, Serialize};

/// One input change on the virtual device.
///
/// Within a batch, axis events come before button events. The host applies
/// each event independently, so repeating an unchanged value is harmless.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Event {
    /// Absolute axis moved to `value`.
    Axis { axis: AxisId, value: i16 },
    /// Button state.
    Button { button: ButtonId, pressed: bool },
}

impl Event {
    pub fn axis(axis: AxisId, value: i16) -> Self {
        Event::Axis { axis, value }
    }

    pub fn button(button: ButtonId, pressed: bool) -> Self {
        Event::Button { button, pressed }
    }

    pub fn is_axis(&self) -> bool {
        matches!(self, Event::Axis { .. })
    }

    pub fn is_button(&self) -> bool {
        matches!(self, Event::Button { .. })
    }

    /// Wire form written to the host's virtual device.
    #[must_use]
    pub fn to_raw(&self) -> RawEvent {
        match *self {
            Event::Axis { axis, value } => RawEvent {
                ev_type: ev::ABS,
                code: axis.code(),
                value: i32::from(value),
            },
            Event::Button { button, pressed } => RawEvent {
                ev_type: ev::KEY,
                code: button.code(),
                value: i32::from(pressed),
            },
        }
    }
}

/// `(type, code, value)` triple as seen by the kernel input layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RawEvent {
    pub ev_type: u16,
    pub code: u16,
    pub value: i32,
}

impl RawEvent {
    /// Batch terminator the host appends after every non-empty batch.
    #[must_use]
    pub const fn sync_report() -> Self {
        Self {
            ev_type: ev::SYN,
            code: syn::REPORT,
            value: 0,
        }
    }

    /// Convert a batch into wire form, terminated by a sync report.
    ///
    /// An empty batch produces nothing, not even the terminator.
    #[must_use]
    pub fn batch(events: &[Event]) -> Vec<RawEvent> {
        if events.is_empty() {
            return Vec::new();
        }
        let mut raw: Vec<RawEvent> = events.iter().map(Event::to_raw).collect();
        raw.push(RawEvent::sync_report());
        raw
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_to_raw() {
        let raw = Event::axis(AxisId::Rx, -32768).to_raw();
        assert_eq!(raw.ev_type, ev::ABS);
        assert_eq!(raw.code, 0x03);
        assert_eq!(raw.value, -32768);
    }

    #[test]
    fn test_button_to_raw() {
        let pressed = Event::button(ButtonId::BtnX, true).to_raw();
        assert_eq!(pressed.ev_type, ev::KEY);
        assert_eq!(pressed.code, 0x133);
        assert_eq!(pressed.value, 1);

        let released = Event::button(ButtonId::BtnX, false).to_raw();
        assert_eq!(released.value, 0);
    }

    #[test]
    fn test_batch_appends_sync() {
        let raw = RawEvent::batch(&[
            Event::axis(AxisId::X, 0),
            Event::button(ButtonId::BtnA, true),
        ]);
        assert_eq!(raw.len(), 3);
        assert_eq!(raw.last(), Some(&RawEvent::sync_report()));
    }

    #[test]
    fn test_empty_batch_has_no_sync() {
        assert!(RawEvent::batch(&[]).is_empty());
    }
}
