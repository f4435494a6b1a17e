//! DualShock sampler
//!
//! Each tick polls the serial adapter for one frame, decodes it, remaps the
//! four sticks into the signed axis range and reports every button's state.
//! A tick that cannot get a well-formed frame produces no events; the next
//! tick is the retry.

use crate::buttons::{ButtonMap, DEFAULT_BUTTON_MAP};
use crate::config::PluginConfig;
use crate::feedback::FeedbackLog;
use crate::transport::FrameSource;
use psx_serial_protocol::{AxisCalibration, DecodedSample, decode};
use serde::Serialize;
use tracing::{debug, warn};
use vjoy_plugin_abi::{
    AxisId, ButtonId, CapabilityDescriptor, ConfigurationError, Event, FeedbackEffect,
    VirtualJoystickPlugin,
};

pub const DEVICE_NAME: &str = "PSX DualShock";

pub const ABSOLUTE_AXES: [AxisId; 4] = [AxisId::X, AxisId::Y, AxisId::Rx, AxisId::Ry];

/// Buttons in host index order.
pub const BUTTONS: [ButtonId; 16] = [
    ButtonId::KeyLeft,
    ButtonId::KeyRight,
    ButtonId::KeyUp,
    ButtonId::KeyDown,
    ButtonId::BtnA,
    ButtonId::BtnB,
    ButtonId::BtnX,
    ButtonId::BtnY,
    ButtonId::BtnTl,
    ButtonId::BtnTr,
    ButtonId::BtnTl2,
    ButtonId::BtnTr2,
    ButtonId::BtnSelect,
    ButtonId::BtnStart,
    ButtonId::BtnThumbL,
    ButtonId::BtnThumbR,
];

/// Descriptor of the DualShock virtual device. No force feedback.
pub fn dualshock_descriptor() -> Result<CapabilityDescriptor, ConfigurationError> {
    CapabilityDescriptor::builder(DEVICE_NAME)
        .absolute_axes(ABSOLUTE_AXES)
        .buttons(BUTTONS)
        .build()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PsxPadOptions {
    pub calibration: AxisCalibration,
    /// Button to mask-bit table; must cover every button in [`BUTTONS`].
    pub button_table: Vec<(ButtonId, u8)>,
}

impl Default for PsxPadOptions {
    fn default() -> Self {
        Self {
            calibration: AxisCalibration::DUALSHOCK_ADAPTER,
            button_table: DEFAULT_BUTTON_MAP.to_vec(),
        }
    }
}

impl PsxPadOptions {
    /// Calibration and, when the file sets one, the button table.
    pub fn from_config(config: &PluginConfig) -> Self {
        Self {
            calibration: config.calibration.to_calibration(),
            button_table: config
                .button_table()
                .unwrap_or_else(|| DEFAULT_BUTTON_MAP.to_vec()),
        }
    }
}

/// Per-instance tick counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SamplerStats {
    pub ticks: u64,
    /// Ticks that produced a batch.
    pub frames: u64,
    pub transport_failures: u64,
    pub format_failures: u64,
}

impl SamplerStats {
    pub fn skipped(&self) -> u64 {
        self.transport_failures + self.format_failures
    }
}

pub struct PsxPadPlugin<T> {
    transport: T,
    capabilities: CapabilityDescriptor,
    buttons: ButtonMap,
    calibration: AxisCalibration,
    stats: SamplerStats,
    feedback: FeedbackLog,
}

impl<T: FrameSource> PsxPadPlugin<T> {
    /// Build the sampler around an open transport.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError`] when the button table does not cover
    /// the descriptor or the calibration scale is below 1. A plugin that
    /// fails here must not be registered.
    pub fn new(transport: T, options: PsxPadOptions) -> Result<Self, ConfigurationError> {
        if options.calibration.scale < 1 {
            return Err(ConfigurationError::InvalidCalibration(format!(
                "scale must be at least 1, got {}",
                options.calibration.scale
            )));
        }

        let capabilities = dualshock_descriptor()?;
        let buttons = ButtonMap::new(capabilities.buttons(), &options.button_table)?;

        Ok(Self {
            transport,
            capabilities,
            buttons,
            calibration: options.calibration,
            stats: SamplerStats::default(),
            feedback: FeedbackLog::new(),
        })
    }

    pub fn stats(&self) -> SamplerStats {
        self.stats
    }

    pub fn calibration(&self) -> AxisCalibration {
        self.calibration
    }

    pub fn button_map(&self) -> &ButtonMap {
        &self.buttons
    }

    pub fn feedback(&self) -> &FeedbackLog {
        &self.feedback
    }

    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    pub fn into_transport(self) -> T {
        self.transport
    }

    /// Events for one decoded sample: the four axes, then every button.
    pub fn events_for(&self, sample: &DecodedSample) -> Vec<Event> {
        let cal = &self.calibration;
        let mut events = Vec::with_capacity(ABSOLUTE_AXES.len() + self.buttons.len());
        events.push(Event::axis(AxisId::Rx, cal.remap(sample.right_x)));
        events.push(Event::axis(AxisId::Ry, cal.remap(sample.right_y)));
        events.push(Event::axis(AxisId::X, cal.remap(sample.left_x)));
        events.push(Event::axis(AxisId::Y, cal.remap(sample.left_y)));
        events.extend(self.buttons.events(sample.button_mask));
        events
    }
}

impl<T: FrameSource> VirtualJoystickPlugin for PsxPadPlugin<T> {
    fn capabilities(&self) -> &CapabilityDescriptor {
        &self.capabilities
    }

    fn think(&mut self) -> Vec<Event> {
        self.stats.ticks += 1;

        let frame = match self.transport.poll() {
            Ok(frame) => frame,
            Err(e) => {
                self.stats.transport_failures += 1;
                debug!(error = %e, tick = self.stats.ticks, "Poll failed, skipping tick");
                return Vec::new();
            }
        };

        let sample = match decode(&frame) {
            Ok(sample) => sample,
            Err(e) => {
                self.stats.format_failures += 1;
                warn!(error = %e, tick = self.stats.ticks, "Discarding malformed frame");
                return Vec::new();
            }
        };

        self.stats.frames += 1;
        self.events_for(&sample)
    }

    fn upload_effect(&mut self, effect: &FeedbackEffect) {
        self.feedback.record_upload(effect);
    }

    fn erase_effect(&mut self, effect_id: i16) {
        self.feedback.record_erase(effect_id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::{PollTransport, mock::MockSerialLink};
    use psx_serial_protocol::PsxButton;

    type TestResult = Result<(), Box<dyn std::error::Error>>;

    fn plugin(link: &MockSerialLink) -> Result<PsxPadPlugin<PollTransport<MockSerialLink>>, ConfigurationError> {
        PsxPadPlugin::new(PollTransport::new(link.clone()), PsxPadOptions::default())
    }

    #[test]
    fn test_descriptor() -> TestResult {
        let caps = dualshock_descriptor()?;
        assert_eq!(caps.name(), "PSX DualShock");
        assert_eq!(caps.absolute_axes(), &ABSOLUTE_AXES);
        assert_eq!(caps.buttons().len(), 16);
        assert!(caps.relative_axes().is_empty());
        assert!(!caps.has_force_feedback());
        assert_eq!(caps.max_effects(), 0);
        Ok(())
    }

    #[test]
    fn test_capabilities_are_stable() -> TestResult {
        let link = MockSerialLink::new();
        let mut pad = plugin(&link)?;
        let before = pad.capabilities().clone();
        link.queue_response(DecodedSample::centered(512).encode());
        pad.think();
        assert_eq!(pad.capabilities(), &before);
        Ok(())
    }

    #[test]
    fn test_axis_order_and_values() -> TestResult {
        let link = MockSerialLink::new();
        let mut pad = plugin(&link)?;
        let sample = DecodedSample {
            button_mask: 0,
            left_y: 511,
            left_x: 513,
            right_y: 0,
            right_x: 1023,
        };
        link.queue_response(sample.encode());

        let events = pad.think();
        assert_eq!(
            &events[..4],
            &[
                Event::axis(AxisId::Rx, 32704),
                Event::axis(AxisId::Ry, -32768),
                Event::axis(AxisId::X, 64),
                Event::axis(AxisId::Y, -64),
            ]
        );
        assert!(events[4..].iter().all(Event::is_button));
        assert_eq!(events.len(), 20);
        Ok(())
    }

    #[test]
    fn test_buttons_follow_descriptor_order() -> TestResult {
        let link = MockSerialLink::new();
        let mut pad = plugin(&link)?;
        link.queue_response(
            DecodedSample {
                button_mask: PsxButton::Left.mask(),
                ..DecodedSample::centered(512)
            }
            .encode(),
        );

        let events = pad.think();
        let buttons: Vec<_> = events
            .iter()
            .filter_map(|e| match e {
                Event::Button { button, pressed } => Some((*button, *pressed)),
                Event::Axis { .. } => None,
            })
            .collect();
        let order: Vec<_> = buttons.iter().map(|(b, _)| *b).collect();
        assert_eq!(order, BUTTONS.to_vec());
        assert_eq!(buttons[0], (ButtonId::KeyLeft, true));
        assert!(buttons[1..].iter().all(|(_, pressed)| !pressed));
        Ok(())
    }

    #[test]
    fn test_transport_failure_skips_tick() -> TestResult {
        let link = MockSerialLink::new();
        let mut pad = plugin(&link)?;

        assert!(pad.think().is_empty());
        let stats = pad.stats();
        assert_eq!(stats.ticks, 1);
        assert_eq!(stats.transport_failures, 1);
        assert_eq!(stats.frames, 0);
        Ok(())
    }

    #[test]
    fn test_format_failure_skips_tick() -> TestResult {
        let link = MockSerialLink::new();
        let transport = PollTransport::with_frame_len(link.clone(), 8);
        let mut pad = PsxPadPlugin::new(transport, PsxPadOptions::default())?;
        link.queue_response(vec![0u8; 8]);

        assert!(pad.think().is_empty());
        assert_eq!(pad.stats().format_failures, 1);
        assert_eq!(pad.stats().skipped(), 1);
        Ok(())
    }

    #[test]
    fn test_recovers_after_failure() -> TestResult {
        let link = MockSerialLink::new();
        let mut pad = plugin(&link)?;
        assert!(pad.think().is_empty());

        link.queue_response(DecodedSample::centered(512).encode());
        assert_eq!(pad.think().len(), 20);
        assert_eq!(pad.stats().frames, 1);
        assert_eq!(pad.stats().ticks, 2);
        Ok(())
    }

    #[test]
    fn test_custom_calibration() -> TestResult {
        let link = MockSerialLink::new();
        let options = PsxPadOptions {
            calibration: AxisCalibration::new(2048, 16),
            ..PsxPadOptions::default()
        };
        let mut pad = PsxPadPlugin::new(PollTransport::new(link.clone()), options)?;
        link.queue_response(DecodedSample::centered(2048).encode());

        let events = pad.think();
        assert!(events[..4]
            .iter()
            .all(|e| matches!(e, Event::Axis { value: 0, .. })));
        Ok(())
    }

    #[test]
    fn test_invalid_calibration_rejected() {
        let options = PsxPadOptions {
            calibration: AxisCalibration::new(512, 0),
            ..PsxPadOptions::default()
        };
        let result = PsxPadPlugin::new(PollTransport::new(MockSerialLink::new()), options);
        assert!(matches!(
            result,
            Err(ConfigurationError::InvalidCalibration(_))
        ));
    }

    #[test]
    fn test_incomplete_table_rejected() {
        let options = PsxPadOptions {
            button_table: DEFAULT_BUTTON_MAP[..15].to_vec(),
            ..PsxPadOptions::default()
        };
        let result = PsxPadPlugin::new(PollTransport::new(MockSerialLink::new()), options);
        assert!(matches!(
            result,
            Err(ConfigurationError::UnmappedButton(ButtonId::KeyRight))
        ));
    }

    #[test]
    fn test_feedback_is_logged_only() -> TestResult {
        let link = MockSerialLink::new();
        let mut pad = plugin(&link)?;
        pad.upload_effect(&FeedbackEffect::rumble(0, 0x8000, 0x4000));
        pad.erase_effect(0);
        pad.on_misc_event(0x04, 0x04, 7);

        assert_eq!(pad.feedback().uploads(), 1);
        assert_eq!(pad.feedback().erasures(), 1);
        assert!(link.get_write_history().is_empty());
        Ok(())
    }
}
