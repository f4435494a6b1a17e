//! Linux input-event codes used on the host boundary.
//!
//! The host forwards every plugin event to its virtual device as a
//! `(type, code, value)` triple. Only the subset of codes reachable from the
//! enums in [`crate::types`] is listed here.

/// Event type codes (`EV_*`).
pub mod ev {
    /// Synchronization marker.
    pub const SYN: u16 = 0x00;
    /// Keys and buttons.
    pub const KEY: u16 = 0x01;
    /// Relative axes.
    pub const REL: u16 = 0x02;
    /// Absolute axes.
    pub const ABS: u16 = 0x03;
    /// Force feedback.
    pub const FF: u16 = 0x15;
}

/// Synchronization codes (`SYN_*`).
pub mod syn {
    /// Terminates one batch of events.
    pub const REPORT: u16 = 0x00;
}

/// Absolute axis codes (`ABS_*`).
pub mod abs {
    pub const X: u16 = 0x00;
    pub const Y: u16 = 0x01;
    pub const Z: u16 = 0x02;
    pub const RX: u16 = 0x03;
    pub const RY: u16 = 0x04;
    pub const RZ: u16 = 0x05;
    pub const THROTTLE: u16 = 0x06;
    pub const RUDDER: u16 = 0x07;
    pub const WHEEL: u16 = 0x08;
    pub const GAS: u16 = 0x09;
    pub const BRAKE: u16 = 0x0a;
    pub const HAT0X: u16 = 0x10;
    pub const HAT0Y: u16 = 0x11;
}

/// Relative axis codes (`REL_*`).
pub mod rel {
    pub const X: u16 = 0x00;
    pub const Y: u16 = 0x01;
    pub const Z: u16 = 0x02;
    pub const RX: u16 = 0x03;
    pub const RY: u16 = 0x04;
    pub const RZ: u16 = 0x05;
    pub const HWHEEL: u16 = 0x06;
    pub const DIAL: u16 = 0x07;
    pub const WHEEL: u16 = 0x08;
}

/// Key and button codes (`KEY_*` / `BTN_*`).
pub mod key {
    pub const UP: u16 = 103;
    pub const LEFT: u16 = 105;
    pub const RIGHT: u16 = 106;
    pub const DOWN: u16 = 108;

    pub const BTN_A: u16 = 0x130;
    pub const BTN_B: u16 = 0x131;
    pub const BTN_C: u16 = 0x132;
    pub const BTN_X: u16 = 0x133;
    pub const BTN_Y: u16 = 0x134;
    pub const BTN_Z: u16 = 0x135;
    pub const BTN_TL: u16 = 0x136;
    pub const BTN_TR: u16 = 0x137;
    pub const BTN_TL2: u16 = 0x138;
    pub const BTN_TR2: u16 = 0x139;
    pub const BTN_SELECT: u16 = 0x13a;
    pub const BTN_START: u16 = 0x13b;
    pub const BTN_MODE: u16 = 0x13c;
    pub const BTN_THUMBL: u16 = 0x13d;
    pub const BTN_THUMBR: u16 = 0x13e;

    pub const BTN_DPAD_UP: u16 = 0x220;
    pub const BTN_DPAD_DOWN: u16 = 0x221;
    pub const BTN_DPAD_LEFT: u16 = 0x222;
    pub const BTN_DPAD_RIGHT: u16 = 0x223;
}

/// Force-feedback effect codes (`FF_*`).
pub mod ff {
    pub const RUMBLE: u16 = 0x50;
    pub const PERIODIC: u16 = 0x51;
    pub const CONSTANT: u16 = 0x52;
    pub const SPRING: u16 = 0x53;
    pub const FRICTION: u16 = 0x54;
    pub const DAMPER: u16 = 0x55;
    pub const INERTIA: u16 = 0x56;
    pub const RAMP: u16 = 0x57;
    pub const GAIN: u16 = 0x60;
    pub const AUTOCENTER: u16 = 0x61;
}

/// Size of the host's device-name buffer, terminator included.
pub const MAX_NAME_SIZE: usize = 80;

/// Lowest and highest value the host accepts on an absolute axis.
pub const ABS_MIN: i32 = i16::MIN as i32;
pub const ABS_MAX: i32 = i16::MAX as i32;
