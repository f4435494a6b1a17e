//! Property-based tests for the DualShock adapter protocol.
//!
//! Uses proptest with 500 cases to verify decode, remap and bit-access
//! invariants over the whole input domain.

use proptest::prelude::*;
use psx_serial_protocol::{
    AxisCalibration, DecodedSample, FRAME_LEN, FormatError, PsxButton, decode, remap,
};

proptest! {
    #![proptest_config(proptest::test_runner::Config::with_cases(500))]

    /// remap is total and stays inside the signed 16-bit range.
    #[test]
    fn prop_remap_in_range(raw: u16) {
        let value = i32::from(remap(raw));
        prop_assert!((-32768..=32767).contains(&value));
    }

    /// Inside the unsaturated window remap is exactly (raw - 512) * 64.
    #[test]
    fn prop_remap_linear_window(raw in 1u16..1024) {
        let expected = (i32::from(raw) - 512) * 64;
        prop_assert_eq!(i32::from(remap(raw)), expected);
    }

    /// remap never decreases as the raw reading grows.
    #[test]
    fn prop_remap_monotonic(a: u16, b: u16) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(remap(lo) <= remap(hi));
    }

    /// Any positive calibration stays in range.
    #[test]
    fn prop_custom_calibration_in_range(center: u16, scale in 1i32..=i32::MAX, raw: u16) {
        let cal = AxisCalibration::new(center, scale);
        let value = i32::from(cal.remap(raw));
        prop_assert!((-32768..=32767).contains(&value));
        if raw == center {
            prop_assert_eq!(value, 0);
        }
    }

    /// Five packed u16 values decode back to themselves.
    #[test]
    fn prop_decode_recovers_packed_fields(
        button_mask: u16,
        left_y: u16,
        left_x: u16,
        right_y: u16,
        right_x: u16,
    ) {
        let mut frame = Vec::with_capacity(FRAME_LEN);
        for field in [button_mask, left_y, left_x, right_y, right_x] {
            frame.extend_from_slice(&field.to_le_bytes());
        }
        let sample = decode(&frame).map_err(|e| TestCaseError::fail(e.to_string()))?;
        prop_assert_eq!(
            sample,
            DecodedSample { button_mask, left_y, left_x, right_y, right_x }
        );
    }

    /// Every length other than 10 is a format error.
    #[test]
    fn prop_decode_rejects_wrong_length(
        data in proptest::collection::vec(any::<u8>(), 0..64usize)
            .prop_filter("not a full frame", |d| d.len() != FRAME_LEN),
    ) {
        let result = decode(&data);
        prop_assert_eq!(
            result,
            Err(FormatError::InvalidFrameSize { expected: FRAME_LEN, actual: data.len() })
        );
    }

    /// A single-bit mask reports exactly that button pressed.
    #[test]
    fn prop_single_bit_mask(bit in 0u8..16) {
        let sample = DecodedSample { button_mask: 1 << bit, ..DecodedSample::default() };
        for button in PsxButton::ALL {
            prop_assert_eq!(sample.is_pressed(button), button.bit() == bit);
        }
    }
}
