//! Raw stick reading to signed axis value

use serde::{Deserialize, Serialize};

/// Affine map from the adapter's unsigned ADC reading to the host's signed
/// axis range, saturating at both ends.
///
/// `value = clamp((raw - center) * scale, i16::MIN, i16::MAX)`
///
/// The constants belong to one physical adapter: recompute `center` from the
/// idle reading of a different device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AxisCalibration {
    pub center: u16,
    pub scale: i32,
}

impl AxisCalibration {
    /// 10-bit ADC centred on 512, widened by 64 to fill 16 bits.
    pub const DUALSHOCK_ADAPTER: AxisCalibration = AxisCalibration {
        center: 512,
        scale: 64,
    };

    pub const fn new(center: u16, scale: i32) -> Self {
        Self { center, scale }
    }

    /// Map one raw reading. Total over the whole `u16` domain.
    ///
    /// ```
    /// use psx_serial_protocol::AxisCalibration;
    ///
    /// let cal = AxisCalibration::DUALSHOCK_ADAPTER;
    /// assert_eq!(cal.remap(512), 0);
    /// assert_eq!(cal.remap(1023), 32704);
    /// assert_eq!(cal.remap(0), i16::MIN);
    /// assert_eq!(cal.remap(u16::MAX), i16::MAX);
    /// ```
    pub fn remap(&self, raw: u16) -> i16 {
        let scaled = (i64::from(raw) - i64::from(self.center)) * i64::from(self.scale);
        scaled.clamp(i64::from(i16::MIN), i64::from(i16::MAX)) as i16
    }
}

impl Default for AxisCalibration {
    fn default() -> Self {
        Self::DUALSHOCK_ADAPTER
    }
}

/// [`AxisCalibration::remap`] with the reference adapter's constants.
pub fn remap(raw: u16) -> i16 {
    AxisCalibration::DUALSHOCK_ADAPTER.remap(raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_is_zero() {
        assert_eq!(remap(512), 0);
    }

    #[test]
    fn test_saturation() {
        assert_eq!(remap(0), -32768);
        assert_eq!(remap(65535), 32767);
        // (1024 - 512) * 64 = 32768, one past the top
        assert_eq!(remap(1024), 32767);
    }

    #[test]
    fn test_linear_region() {
        assert_eq!(remap(1023), 32704);
        assert_eq!(remap(513), 64);
        assert_eq!(remap(511), -64);
        assert_eq!(remap(1), -32704);
    }

    #[test]
    fn test_custom_calibration() {
        let cal = AxisCalibration::new(2048, 16);
        assert_eq!(cal.remap(2048), 0);
        assert_eq!(cal.remap(2049), 16);
        assert_eq!(cal.remap(4095), 32752);
        assert_eq!(cal.remap(u16::MAX), 32767);
    }

    #[test]
    fn test_large_scale_does_not_overflow() {
        let cal = AxisCalibration::new(0, i32::MAX);
        assert_eq!(cal.remap(u16::MAX), i16::MAX);
        assert_eq!(cal.remap(0), 0);
    }
}
