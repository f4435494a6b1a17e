//! Response frame parsing

use super::{FRAME_LEN, FormatError, FormatResult, PsxButton};
use serde::{Deserialize, Serialize};

/// Little-endian cursor over a borrowed frame.
pub struct FrameParser<'a> {
    buffer: &'a [u8],
    position: usize,
}

impl<'a> FrameParser<'a> {
    pub fn new(buffer: &'a [u8]) -> Self {
        Self {
            buffer,
            position: 0,
        }
    }

    pub fn remaining(&self) -> usize {
        self.buffer.len().saturating_sub(self.position)
    }

    pub fn read_u8(&mut self) -> FormatResult<u8> {
        let value = *self
            .buffer
            .get(self.position)
            .ok_or(FormatError::UnexpectedEnd {
                offset: self.position,
            })?;
        self.position += 1;
        Ok(value)
    }

    pub fn read_u16_le(&mut self) -> FormatResult<u16> {
        let lo = self.read_u8()?;
        let hi = self.read_u8()?;
        Ok(u16::from_le_bytes([lo, hi]))
    }
}

/// Builds frames in the adapter's layout. Used by tests and simulators.
#[derive(Debug, Default)]
pub struct FrameBuilder {
    buffer: Vec<u8>,
}

impl FrameBuilder {
    pub fn new() -> Self {
        Self {
            buffer: Vec::with_capacity(FRAME_LEN),
        }
    }

    pub fn write_u16_le(&mut self, value: u16) -> &mut Self {
        self.buffer.extend_from_slice(&value.to_le_bytes());
        self
    }

    pub fn into_inner(self) -> Vec<u8> {
        self.buffer
    }
}

/// One decoded frame: button mask plus four raw stick readings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DecodedSample {
    pub button_mask: u16,
    pub left_y: u16,
    pub left_x: u16,
    pub right_y: u16,
    pub right_x: u16,
}

impl DecodedSample {
    /// Sample with every stick at `value` and no buttons held.
    pub fn centered(value: u16) -> Self {
        Self {
            button_mask: 0,
            left_y: value,
            left_x: value,
            right_y: value,
            right_x: value,
        }
    }

    /// Whether bit `bit` of the button mask is set. Bits past the mask width
    /// read as released.
    pub fn bit(&self, bit: u8) -> bool {
        bit < 16 && (self.button_mask >> bit) & 1 == 1
    }

    pub fn is_pressed(&self, button: PsxButton) -> bool {
        self.bit(button.bit())
    }

    pub fn pressed_count(&self) -> u32 {
        self.button_mask.count_ones()
    }

    /// Serialize back into wire layout.
    pub fn encode(&self) -> Vec<u8> {
        let mut builder = FrameBuilder::new();
        builder
            .write_u16_le(self.button_mask)
            .write_u16_le(self.left_y)
            .write_u16_le(self.left_x)
            .write_u16_le(self.right_y)
            .write_u16_le(self.right_x);
        builder.into_inner()
    }
}

/// Decode one response frame.
///
/// # Errors
///
/// Returns [`FormatError::InvalidFrameSize`] unless `frame` is exactly
/// [`FRAME_LEN`] bytes. Longer input is rejected too: a frame with trailing
/// bytes means the link is out of step with the adapter.
pub fn decode(frame: &[u8]) -> FormatResult<DecodedSample> {
    if frame.len() != FRAME_LEN {
        return Err(FormatError::InvalidFrameSize {
            expected: FRAME_LEN,
            actual: frame.len(),
        });
    }

    let mut parser = FrameParser::new(frame);
    Ok(DecodedSample {
        button_mask: parser.read_u16_le()?,
        left_y: parser.read_u16_le()?,
        left_x: parser.read_u16_le()?,
        right_y: parser.read_u16_le()?,
        right_x: parser.read_u16_le()?,
    })
}
