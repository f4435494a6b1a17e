//! Button bit positions in the adapter's mask

use serde::{Deserialize, Serialize};

/// Physical DualShock button, identified by its bit in the frame's mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum PsxButton {
    Square = 0x00,
    Cross = 0x01,
    Circle = 0x02,
    Triangle = 0x03,
    R2 = 0x04,
    R3 = 0x05,
    L3 = 0x06,
    R1 = 0x07,
    L2 = 0x08,
    L1 = 0x09,
    Start = 0x0A,
    Down = 0x0B,
    Select = 0x0C,
    Up = 0x0D,
    Left = 0x0E,
    Right = 0x0F,
}

impl PsxButton {
    /// All buttons in bit order.
    pub const ALL: [PsxButton; 16] = [
        PsxButton::Square,
        PsxButton::Cross,
        PsxButton::Circle,
        PsxButton::Triangle,
        PsxButton::R2,
        PsxButton::R3,
        PsxButton::L3,
        PsxButton::R1,
        PsxButton::L2,
        PsxButton::L1,
        PsxButton::Start,
        PsxButton::Down,
        PsxButton::Select,
        PsxButton::Up,
        PsxButton::Left,
        PsxButton::Right,
    ];

    pub const fn bit(self) -> u8 {
        self as u8
    }

    pub const fn mask(self) -> u16 {
        1 << (self as u8)
    }

    pub fn from_bit(bit: u8) -> Option<Self> {
        Self::ALL.get(usize::from(bit)).copied()
    }
}
