//! Button to mask-bit lookup, validated once at construction

use psx_serial_protocol::{BUTTON_BITS, PsxButton};
use vjoy_plugin_abi::{ButtonId, ConfigurationError, Event};

/// Standard DualShock layout: virtual button and the adapter bit it reads.
pub const DEFAULT_BUTTON_MAP: [(ButtonId, u8); 16] = [
    (ButtonId::BtnX, PsxButton::Square.bit()),
    (ButtonId::BtnA, PsxButton::Cross.bit()),
    (ButtonId::BtnB, PsxButton::Circle.bit()),
    (ButtonId::BtnY, PsxButton::Triangle.bit()),
    (ButtonId::BtnTr2, PsxButton::R2.bit()),
    (ButtonId::BtnThumbR, PsxButton::R3.bit()),
    (ButtonId::BtnThumbL, PsxButton::L3.bit()),
    (ButtonId::BtnTr, PsxButton::R1.bit()),
    (ButtonId::BtnTl2, PsxButton::L2.bit()),
    (ButtonId::BtnTl, PsxButton::L1.bit()),
    (ButtonId::BtnStart, PsxButton::Start.bit()),
    (ButtonId::KeyDown, PsxButton::Down.bit()),
    (ButtonId::BtnSelect, PsxButton::Select.bit()),
    (ButtonId::KeyUp, PsxButton::Up.bit()),
    (ButtonId::KeyLeft, PsxButton::Left.bit()),
    (ButtonId::KeyRight, PsxButton::Right.bit()),
];

/// Bit index for every button of a descriptor, in descriptor order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonMap {
    entries: Vec<(ButtonId, u8)>,
}

impl ButtonMap {
    /// Resolve `buttons` against `table`.
    ///
    /// Table entries for buttons the descriptor does not list are ignored,
    /// but they still take part in the range and duplicate-bit checks.
    ///
    /// # Errors
    ///
    /// - [`ConfigurationError::BitOutOfRange`] for a bit past the mask width
    /// - [`ConfigurationError::DuplicateBit`] when two buttons share a bit
    /// - [`ConfigurationError::DuplicateButtonMapping`] when one button is
    ///   listed with more than one bit
    /// - [`ConfigurationError::UnmappedButton`] for a descriptor button with
    ///   no table entry
    pub fn new(buttons: &[ButtonId], table: &[(ButtonId, u8)]) -> Result<Self, ConfigurationError> {
        for (index, &(button, bit)) in table.iter().enumerate() {
            if bit >= BUTTON_BITS {
                return Err(ConfigurationError::BitOutOfRange {
                    button,
                    bit,
                    width: BUTTON_BITS,
                });
            }
            let earlier = table.iter().take(index);
            if let Some(&(first, _)) = earlier.clone().find(|(_, b)| *b == bit) {
                return Err(ConfigurationError::DuplicateBit {
                    bit,
                    first,
                    second: button,
                });
            }
            if let Some(&(_, first_bit)) = earlier.clone().find(|(b, _)| *b == button) {
                return Err(ConfigurationError::DuplicateButtonMapping {
                    button,
                    first_bit,
                    second_bit: bit,
                });
            }
        }

        let entries = buttons
            .iter()
            .map(|&button| {
                table
                    .iter()
                    .find(|(b, _)| *b == button)
                    .map(|&(_, bit)| (button, bit))
                    .ok_or(ConfigurationError::UnmappedButton(button))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { entries })
    }

    /// Map `buttons` with [`DEFAULT_BUTTON_MAP`].
    pub fn dualshock(buttons: &[ButtonId]) -> Result<Self, ConfigurationError> {
        Self::new(buttons, &DEFAULT_BUTTON_MAP)
    }

    pub fn bit(&self, button: ButtonId) -> Option<u8> {
        self.entries
            .iter()
            .find(|(b, _)| *b == button)
            .map(|&(_, bit)| bit)
    }

    pub fn iter(&self) -> impl Iterator<Item = (ButtonId, u8)> + '_ {
        self.entries.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// One button event per mapped button, pressed when its bit is set.
    pub fn events(&self, mask: u16) -> impl Iterator<Item = Event> + '_ {
        self.entries
            .iter()
            .map(move |&(button, bit)| Event::button(button, (mask >> bit) & 1 == 1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type TestResult = Result<(), Box<dyn std::error::Error>>;

    #[test]
    fn test_default_map_covers_every_bit_once() {
        let mut seen = 0u16;
        for (_, bit) in DEFAULT_BUTTON_MAP {
            assert_eq!(seen & (1 << bit), 0, "bit {bit} mapped twice");
            seen |= 1 << bit;
        }
        assert_eq!(seen, 0xFFFF);
    }

    #[test]
    fn test_map_follows_descriptor_order() -> TestResult {
        let map = ButtonMap::dualshock(&[ButtonId::BtnStart, ButtonId::BtnX])?;
        let entries: Vec<_> = map.iter().collect();
        assert_eq!(entries, vec![(ButtonId::BtnStart, 10), (ButtonId::BtnX, 0)]);
        assert_eq!(map.bit(ButtonId::BtnX), Some(0));
        assert_eq!(map.bit(ButtonId::BtnA), None);
        Ok(())
    }

    #[test]
    fn test_unmapped_button_rejected() {
        let result = ButtonMap::dualshock(&[ButtonId::BtnA, ButtonId::BtnMode]);
        assert_eq!(
            result,
            Err(ConfigurationError::UnmappedButton(ButtonId::BtnMode))
        );
    }

    #[test]
    fn test_bit_out_of_range_rejected() {
        let result = ButtonMap::new(&[ButtonId::BtnA], &[(ButtonId::BtnA, 16)]);
        assert_eq!(
            result,
            Err(ConfigurationError::BitOutOfRange {
                button: ButtonId::BtnA,
                bit: 16,
                width: 16
            })
        );
    }

    #[test]
    fn test_duplicate_bit_rejected() {
        let result = ButtonMap::new(
            &[ButtonId::BtnA, ButtonId::BtnB],
            &[(ButtonId::BtnA, 3), (ButtonId::BtnB, 3)],
        );
        assert_eq!(
            result,
            Err(ConfigurationError::DuplicateBit {
                bit: 3,
                first: ButtonId::BtnA,
                second: ButtonId::BtnB
            })
        );
    }

    #[test]
    fn test_button_with_two_bits_rejected() {
        let result = ButtonMap::new(&[ButtonId::BtnA], &[(ButtonId::BtnA, 0), (ButtonId::BtnA, 1)]);
        assert_eq!(
            result,
            Err(ConfigurationError::DuplicateButtonMapping {
                button: ButtonId::BtnA,
                first_bit: 0,
                second_bit: 1
            })
        );
    }

    #[test]
    fn test_unlisted_button_with_two_bits_rejected() {
        let result = ButtonMap::new(
            &[ButtonId::BtnA],
            &[(ButtonId::BtnA, 0), (ButtonId::BtnB, 4), (ButtonId::BtnB, 5)],
        );
        assert!(matches!(
            result,
            Err(ConfigurationError::DuplicateButtonMapping {
                button: ButtonId::BtnB,
                ..
            })
        ));
    }

    #[test]
    fn test_events_from_mask() -> TestResult {
        let map = ButtonMap::dualshock(&[ButtonId::BtnX, ButtonId::BtnA, ButtonId::KeyRight])?;
        let events: Vec<_> = map.events(0x8001).collect();
        assert_eq!(
            events,
            vec![
                Event::button(ButtonId::BtnX, true),
                Event::button(ButtonId::BtnA, false),
                Event::button(ButtonId::KeyRight, true),
            ]
        );
        Ok(())
    }

    #[test]
    fn test_empty_descriptor() -> TestResult {
        let map = ButtonMap::dualshock(&[])?;
        assert!(map.is_empty());
        assert_eq!(map.events(0xFFFF).count(), 0);
        Ok(())
    }
}
