//! Hardware-free demo plugin

use crate::feedback::FeedbackLog;
use vjoy_plugin_abi::{
    AxisId, CapabilityDescriptor, ConfigurationError, Event, FeedbackEffect, FeedbackKind,
    VirtualJoystickPlugin,
};

const STEP: f64 = 0.05;
const RADIUS: f64 = 32500.0;

/// Moves the X/Y axes around a circle, one step per tick.
///
/// Declares rumble support with four effect slots so a host's feedback path
/// can be exercised; uploads are only logged.
pub struct CirclePlugin {
    capabilities: CapabilityDescriptor,
    theta: f64,
    feedback: FeedbackLog,
}

impl CirclePlugin {
    pub fn new() -> Result<Self, ConfigurationError> {
        let capabilities = CapabilityDescriptor::builder("")
            .absolute_axes([AxisId::X, AxisId::Y])
            .feedback(FeedbackKind::Rumble)
            .max_effects(4)
            .build()?;
        Ok(Self {
            capabilities,
            theta: 0.0,
            feedback: FeedbackLog::new(),
        })
    }

    /// Current angle in radians.
    pub fn theta(&self) -> f64 {
        self.theta
    }

    pub fn feedback(&self) -> &FeedbackLog {
        &self.feedback
    }
}

impl VirtualJoystickPlugin for CirclePlugin {
    fn capabilities(&self) -> &CapabilityDescriptor {
        &self.capabilities
    }

    fn think(&mut self) -> Vec<Event> {
        self.theta += STEP;
        // |cos|, |sin| <= 1 keeps both casts inside i16
        let x = (self.theta.cos() * RADIUS) as i16;
        let y = (self.theta.sin() * RADIUS) as i16;
        vec![Event::axis(AxisId::X, x), Event::axis(AxisId::Y, y)]
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

    type TestResult = Result<(), Box<dyn std::error::Error>>;

    #[test]
    fn test_descriptor() -> TestResult {
        let plugin = CirclePlugin::new()?;
        let caps = plugin.capabilities();
        assert_eq!(caps.name(), "");
        assert_eq!(caps.absolute_axes(), &[AxisId::X, AxisId::Y]);
        assert!(caps.feedback().supports(FeedbackKind::Rumble));
        assert_eq!(caps.max_effects(), 4);
        assert!(caps.buttons().is_empty());
        Ok(())
    }

    #[test]
    fn test_first_tick() -> TestResult {
        let mut plugin = CirclePlugin::new()?;
        let events = plugin.think();
        // cos(0.05) * 32500 = 32459.38..., sin(0.05) * 32500 = 1624.32...
        assert_eq!(
            events,
            vec![Event::axis(AxisId::X, 32459), Event::axis(AxisId::Y, 1624)]
        );
        Ok(())
    }

    #[test]
    fn test_instances_are_independent() -> TestResult {
        let mut a = CirclePlugin::new()?;
        let b = CirclePlugin::new()?;
        for _ in 0..10 {
            a.think();
        }
        assert!((a.theta() - 0.5).abs() < 1e-9);
        assert!(b.theta().abs() < f64::EPSILON);
        Ok(())
    }

    #[test]
    fn test_stays_on_circle() -> TestResult {
        let mut plugin = CirclePlugin::new()?;
        for _ in 0..200 {
            for event in plugin.think() {
                if let Event::Axis { value, .. } = event {
                    assert!(i32::from(value).abs() <= 32500);
                }
            }
        }
        Ok(())
    }
}
