//! Identifier enums for axes, buttons and force-feedback kinds.
//!
//! Every identifier maps to exactly one Linux input-event code. The host
//! assigns virtual-device indices from the order identifiers appear in a
//! [`CapabilityDescriptor`](crate::CapabilityDescriptor); the codes are what
//! travels on the wire.

use crate::codes::{abs, ff, key, rel};
use bitflags::bitflags;
use serde::{Deserialize, Serialize};

/// Absolute axis identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AxisId {
    X,
    Y,
    Z,
    Rx,
    Ry,
    Rz,
    Throttle,
    Rudder,
    Wheel,
    Gas,
    Brake,
    Hat0X,
    Hat0Y,
}

impl AxisId {
    /// All absolute axes, in code order.
    pub const ALL: [AxisId; 13] = [
        AxisId::X,
        AxisId::Y,
        AxisId::Z,
        AxisId::Rx,
        AxisId::Ry,
        AxisId::Rz,
        AxisId::Throttle,
        AxisId::Rudder,
        AxisId::Wheel,
        AxisId::Gas,
        AxisId::Brake,
        AxisId::Hat0X,
        AxisId::Hat0Y,
    ];

    /// `ABS_*` code of this axis.
    #[must_use]
    pub const fn code(self) -> u16 {
        match self {
            AxisId::X => abs::X,
            AxisId::Y => abs::Y,
            AxisId::Z => abs::Z,
            AxisId::Rx => abs::RX,
            AxisId::Ry => abs::RY,
            AxisId::Rz => abs::RZ,
            AxisId::Throttle => abs::THROTTLE,
            AxisId::Rudder => abs::RUDDER,
            AxisId::Wheel => abs::WHEEL,
            AxisId::Gas => abs::GAS,
            AxisId::Brake => abs::BRAKE,
            AxisId::Hat0X => abs::HAT0X,
            AxisId::Hat0Y => abs::HAT0Y,
        }
    }

    /// Reverse lookup of [`AxisId::code`].
    #[must_use]
    pub fn from_code(code: u16) -> Option<Self> {
        Self::ALL.into_iter().find(|axis| axis.code() == code)
    }
}

/// Relative axis identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RelAxisId {
    X,
    Y,
    Z,
    Rx,
    Ry,
    Rz,
    HWheel,
    Dial,
    Wheel,
}

impl RelAxisId {
    /// All relative axes, in code order.
    pub const ALL: [RelAxisId; 9] = [
        RelAxisId::X,
        RelAxisId::Y,
        RelAxisId::Z,
        RelAxisId::Rx,
        RelAxisId::Ry,
        RelAxisId::Rz,
        RelAxisId::HWheel,
        RelAxisId::Dial,
        RelAxisId::Wheel,
    ];

    /// `REL_*` code of this axis.
    #[must_use]
    pub const fn code(self) -> u16 {
        match self {
            RelAxisId::X => rel::X,
            RelAxisId::Y => rel::Y,
            RelAxisId::Z => rel::Z,
            RelAxisId::Rx => rel::RX,
            RelAxisId::Ry => rel::RY,
            RelAxisId::Rz => rel::RZ,
            RelAxisId::HWheel => rel::HWHEEL,
            RelAxisId::Dial => rel::DIAL,
            RelAxisId::Wheel => rel::WHEEL,
        }
    }

    /// Reverse lookup of [`RelAxisId::code`].
    #[must_use]
    pub fn from_code(code: u16) -> Option<Self> {
        Self::ALL.into_iter().find(|axis| axis.code() == code)
    }
}

/// Key or button identifier.
///
/// Covers the gamepad layout: directional pad (as arrow keys or as
/// dedicated d-pad buttons), four face buttons, shoulders and triggers,
/// thumb-stick clicks, start/select and the mode button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ButtonId {
    KeyUp,
    KeyLeft,
    KeyRight,
    KeyDown,
    BtnA,
    BtnB,
    BtnC,
    BtnX,
    BtnY,
    BtnZ,
    BtnTl,
    BtnTr,
    BtnTl2,
    BtnTr2,
    BtnSelect,
    BtnStart,
    BtnMode,
    BtnThumbL,
    BtnThumbR,
    BtnDpadUp,
    BtnDpadDown,
    BtnDpadLeft,
    BtnDpadRight,
}

impl ButtonId {
    /// All buttons, in code order.
    pub const ALL: [ButtonId; 23] = [
        ButtonId::KeyUp,
        ButtonId::KeyLeft,
        ButtonId::KeyRight,
        ButtonId::KeyDown,
        ButtonId::BtnA,
        ButtonId::BtnB,
        ButtonId::BtnC,
        ButtonId::BtnX,
        ButtonId::BtnY,
        ButtonId::BtnZ,
        ButtonId::BtnTl,
        ButtonId::BtnTr,
        ButtonId::BtnTl2,
        ButtonId::BtnTr2,
        ButtonId::BtnSelect,
        ButtonId::BtnStart,
        ButtonId::BtnMode,
        ButtonId::BtnThumbL,
        ButtonId::BtnThumbR,
        ButtonId::BtnDpadUp,
        ButtonId::BtnDpadDown,
        ButtonId::BtnDpadLeft,
        ButtonId::BtnDpadRight,
    ];

    /// `KEY_*` / `BTN_*` code of this button.
    #[must_use]
    pub const fn code(self) -> u16 {
        match self {
            ButtonId::KeyUp => key::UP,
            ButtonId::KeyLeft => key::LEFT,
            ButtonId::KeyRight => key::RIGHT,
            ButtonId::KeyDown => key::DOWN,
            ButtonId::BtnA => key::BTN_A,
            ButtonId::BtnB => key::BTN_B,
            ButtonId::BtnC => key::BTN_C,
            ButtonId::BtnX => key::BTN_X,
            ButtonId::BtnY => key::BTN_Y,
            ButtonId::BtnZ => key::BTN_Z,
            ButtonId::BtnTl => key::BTN_TL,
            ButtonId::BtnTr => key::BTN_TR,
            ButtonId::BtnTl2 => key::BTN_TL2,
            ButtonId::BtnTr2 => key::BTN_TR2,
            ButtonId::BtnSelect => key::BTN_SELECT,
            ButtonId::BtnStart => key::BTN_START,
            ButtonId::BtnMode => key::BTN_MODE,
            ButtonId::BtnThumbL => key::BTN_THUMBL,
            ButtonId::BtnThumbR => key::BTN_THUMBR,
            ButtonId::BtnDpadUp => key::BTN_DPAD_UP,
            ButtonId::BtnDpadDown => key::BTN_DPAD_DOWN,
            ButtonId::BtnDpadLeft => key::BTN_DPAD_LEFT,
            ButtonId::BtnDpadRight => key::BTN_DPAD_RIGHT,
        }
    }

    /// Reverse lookup of [`ButtonId::code`].
    #[must_use]
    pub fn from_code(code: u16) -> Option<Self> {
        Self::ALL.into_iter().find(|button| button.code() == code)
    }
}

/// Force-feedback effect kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FeedbackKind {
    Rumble,
    Periodic,
    Constant,
    Spring,
    Friction,
    Damper,
    Inertia,
    Ramp,
    Gain,
    Autocenter,
}

impl FeedbackKind {
    /// All feedback kinds, in code order.
    pub const ALL: [FeedbackKind; 10] = [
        FeedbackKind::Rumble,
        FeedbackKind::Periodic,
        FeedbackKind::Constant,
        FeedbackKind::Spring,
        FeedbackKind::Friction,
        FeedbackKind::Damper,
        FeedbackKind::Inertia,
        FeedbackKind::Ramp,
        FeedbackKind::Gain,
        FeedbackKind::Autocenter,
    ];

    /// `FF_*` code of this kind.
    #[must_use]
    pub const fn code(self) -> u16 {
        match self {
            FeedbackKind::Rumble => ff::RUMBLE,
            FeedbackKind::Periodic => ff::PERIODIC,
            FeedbackKind::Constant => ff::CONSTANT,
            FeedbackKind::Spring => ff::SPRING,
            FeedbackKind::Friction => ff::FRICTION,
            FeedbackKind::Damper => ff::DAMPER,
            FeedbackKind::Inertia => ff::INERTIA,
            FeedbackKind::Ramp => ff::RAMP,
            FeedbackKind::Gain => ff::GAIN,
            FeedbackKind::Autocenter => ff::AUTOCENTER,
        }
    }

    /// Reverse lookup of [`FeedbackKind::code`].
    #[must_use]
    pub fn from_code(code: u16) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.code() == code)
    }

    /// The single-bit [`FeedbackKinds`] value for this kind.
    #[must_use]
    pub const fn flag(self) -> FeedbackKinds {
        match self {
            FeedbackKind::Rumble => FeedbackKinds::RUMBLE,
            FeedbackKind::Periodic => FeedbackKinds::PERIODIC,
            FeedbackKind::Constant => FeedbackKinds::CONSTANT,
            FeedbackKind::Spring => FeedbackKinds::SPRING,
            FeedbackKind::Friction => FeedbackKinds::FRICTION,
            FeedbackKind::Damper => FeedbackKinds::DAMPER,
            FeedbackKind::Inertia => FeedbackKinds::INERTIA,
            FeedbackKind::Ramp => FeedbackKinds::RAMP,
            FeedbackKind::Gain => FeedbackKinds::GAIN,
            FeedbackKind::Autocenter => FeedbackKinds::AUTOCENTER,
        }
    }
}

bitflags! {
    /// Set of force-feedback kinds a virtual device supports.
    ///
    /// Bit positions are local to this crate; use [`FeedbackKinds::kinds`]
    /// and [`FeedbackKind::code`] to reach the host codes.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct FeedbackKinds: u16 {
        const RUMBLE     = 1 << 0;
        const PERIODIC   = 1 << 1;
        const CONSTANT   = 1 << 2;
        const SPRING     = 1 << 3;
        const FRICTION   = 1 << 4;
        const DAMPER     = 1 << 5;
        const INERTIA    = 1 << 6;
        const RAMP       = 1 << 7;
        const GAIN       = 1 << 8;
        const AUTOCENTER = 1 << 9;
    }
}

impl FeedbackKinds {
    /// Kinds contained in this set, in code order.
    #[must_use]
    pub fn kinds(self) -> Vec<FeedbackKind> {
        FeedbackKind::ALL
            .into_iter()
            .filter(|kind| self.contains(kind.flag()))
            .collect()
    }

    /// Whether `kind` is part of this set.
    #[must_use]
    pub fn supports(self, kind: FeedbackKind) -> bool {
        self.contains(kind.flag())
    }
}

impl FromIterator<FeedbackKind> for FeedbackKinds {
    fn from_iter<I: IntoIterator<Item = FeedbackKind>>(iter: I) -> Self {
        iter.into_iter()
            .fold(FeedbackKinds::empty(), |set, kind| set | kind.flag())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_codes_match_linux_values() {
        assert_eq!(AxisId::X.code(), 0x00);
        assert_eq!(AxisId::Y.code(), 0x01);
        assert_eq!(AxisId::Rx.code(), 0x03);
        assert_eq!(AxisId::Ry.code(), 0x04);
        assert_eq!(AxisId::Hat0Y.code(), 0x11);
    }

    #[test]
    fn test_button_codes_match_linux_values() {
        assert_eq!(ButtonId::KeyUp.code(), 103);
        assert_eq!(ButtonId::KeyDown.code(), 108);
        assert_eq!(ButtonId::BtnA.code(), 0x130);
        assert_eq!(ButtonId::BtnX.code(), 0x133);
        assert_eq!(ButtonId::BtnThumbR.code(), 0x13e);
    }

    #[test]
    fn test_from_code_roundtrip() {
        for axis in AxisId::ALL {
            assert_eq!(AxisId::from_code(axis.code()), Some(axis));
        }
        for axis in RelAxisId::ALL {
            assert_eq!(RelAxisId::from_code(axis.code()), Some(axis));
        }
        for button in ButtonId::ALL {
            assert_eq!(ButtonId::from_code(button.code()), Some(button));
        }
        for kind in FeedbackKind::ALL {
            assert_eq!(FeedbackKind::from_code(kind.code()), Some(kind));
        }
    }

    #[test]
    fn test_unknown_codes() {
        assert_eq!(AxisId::from_code(0x3f), None);
        assert_eq!(ButtonId::from_code(0), None);
        assert_eq!(FeedbackKind::from_code(0x40), None);
    }

    #[test]
    fn test_feedback_kinds_collect() {
        let set: FeedbackKinds = [FeedbackKind::Rumble, FeedbackKind::Spring]
            .into_iter()
            .collect();
        assert!(set.supports(FeedbackKind::Rumble));
        assert!(set.supports(FeedbackKind::Spring));
        assert!(!set.supports(FeedbackKind::Damper));
        assert_eq!(set.kinds(), vec![FeedbackKind::Rumble, FeedbackKind::Spring]);
    }

    #[test]
    fn test_feedback_flags_are_distinct() {
        let all: FeedbackKinds = FeedbackKind::ALL.into_iter().collect();
        assert_eq!(all.bits().count_ones() as usize, FeedbackKind::ALL.len());
    }
}
