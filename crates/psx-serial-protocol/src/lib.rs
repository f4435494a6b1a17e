//! Protocol implementation for the serial DualShock adapter
//!
//! The adapter is a microcontroller bridging a PlayStation controller to a
//! serial link. The host polls it with a one-byte request and reads back a
//! fixed 10-byte frame.
//!
//! ## Wire format
//! - Request: single byte [`POLL_REQUEST`] (`0x01`)
//! - Response: five little-endian `u16` fields, [`FRAME_LEN`] bytes total
//!
//! | Offset | Size | Field        |
//! |--------|------|--------------|
//! | 0      | 2    | button mask  |
//! | 2      | 2    | left stick Y |
//! | 4      | 2    | left stick X |
//! | 6      | 2    | right stick Y|
//! | 8      | 2    | right stick X|
//!
//! Stick readings are raw ADC counts centred on 512; see
//! [`AxisCalibration`] for the mapping into the signed 16-bit axis range.

#![deny(unsafe_op_in_unsafe_fn)]
#![deny(clippy::unwrap_used)]

pub mod buttons;
pub mod calibration;
pub mod frame;

pub use buttons::*;
pub use calibration::*;
pub use frame::*;

use thiserror::Error;

/// Frame could not be interpreted.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    #[error("Invalid frame size: expected {expected}, got {actual}")]
    InvalidFrameSize { expected: usize, actual: usize },

    #[error("Unexpected end of frame at offset {offset}")]
    UnexpectedEnd { offset: usize },
}

pub type FormatResult<T> = Result<T, FormatError>;

/// Opcode asking the adapter for one frame.
pub const POLL_REQUEST: u8 = 0x01;

/// Length of one response frame.
pub const FRAME_LEN: usize = 10;

/// Width of the button mask in bits.
pub const BUTTON_BITS: u8 = 16;
