//! Contract tests for the plugin ABI.
//!
//! These pin the wire codes the host relies on and exercise a plugin
//! through the trait object the host holds.

use vjoy_plugin_abi::codes::{ev, syn};
use vjoy_plugin_abi::prelude::*;

type TestResult = Result<(), Box<dyn std::error::Error>>;

mod wire_codes {
    use super::*;

    #[test]
    fn test_event_type_codes() {
        assert_eq!(ev::SYN, 0x00);
        assert_eq!(ev::KEY, 0x01);
        assert_eq!(ev::REL, 0x02);
        assert_eq!(ev::ABS, 0x03);
        assert_eq!(ev::FF, 0x15);
        assert_eq!(syn::REPORT, 0x00);
    }

    #[test]
    fn test_gamepad_button_codes() {
        let expected = [
            (ButtonId::KeyUp, 103),
            (ButtonId::KeyLeft, 105),
            (ButtonId::KeyRight, 106),
            (ButtonId::KeyDown, 108),
            (ButtonId::BtnA, 0x130),
            (ButtonId::BtnB, 0x131),
            (ButtonId::BtnX, 0x133),
            (ButtonId::BtnY, 0x134),
            (ButtonId::BtnTl, 0x136),
            (ButtonId::BtnTr, 0x137),
            (ButtonId::BtnTl2, 0x138),
            (ButtonId::BtnTr2, 0x139),
            (ButtonId::BtnSelect, 0x13a),
            (ButtonId::BtnStart, 0x13b),
            (ButtonId::BtnThumbL, 0x13d),
            (ButtonId::BtnThumbR, 0x13e),
        ];
        for (button, code) in expected {
            assert_eq!(button.code(), code, "{button:?}");
        }
    }

    #[test]
    fn test_feedback_codes() {
        assert_eq!(FeedbackKind::Rumble.code(), 0x50);
        assert_eq!(FeedbackKind::Periodic.code(), 0x51);
        assert_eq!(FeedbackKind::Autocenter.code(), 0x61);
    }
}

mod descriptor {
    use super::*;

    #[test]
    fn test_descriptor_is_stable_across_clones() -> TestResult {
        let desc = CapabilityDescriptor::builder("PSX DualShock")
            .absolute_axes([AxisId::X, AxisId::Y, AxisId::Rx, AxisId::Ry])
            .buttons([ButtonId::KeyLeft, ButtonId::BtnA])
            .build()?;
        let copy = desc.clone();
        assert_eq!(desc, copy);
        assert_eq!(copy.absolute_axes(), &[AxisId::X, AxisId::Y, AxisId::Rx, AxisId::Ry]);
        Ok(())
    }

    #[test]
    fn test_descriptor_serializes() -> TestResult {
        let desc = CapabilityDescriptor::builder("pad")
            .absolute_axes([AxisId::X])
            .feedback(FeedbackKind::Rumble)
            .max_effects(4)
            .buttons([ButtonId::BtnStart])
            .build()?;
        let json = serde_json::to_value(&desc)?;
        assert_eq!(json["name"], "pad");
        assert_eq!(json["absolute_axes"][0], "X");
        assert_eq!(json["max_effects"], 4);
        assert_eq!(json["buttons"][0], "BtnStart");
        Ok(())
    }

    #[test]
    fn test_configuration_error_messages() {
        let err = ConfigurationError::UnmappedButton(ButtonId::BtnMode);
        assert_eq!(err.to_string(), "Button BtnMode has no bit assigned");

        let err = ConfigurationError::FeedbackWithoutEffectSlots;
        assert_eq!(
            err.to_string(),
            "Feedback kinds declared but no effect slots available"
        );
    }
}

mod lifecycle {
    use super::*;

    struct Toggle {
        caps: CapabilityDescriptor,
        pressed: bool,
        uploads: Vec<i16>,
        erases: Vec<i16>,
    }

    impl VirtualJoystickPlugin for Toggle {
        fn capabilities(&self) -> &CapabilityDescriptor {
            &self.caps
        }

        fn think(&mut self) -> Vec<Event> {
            self.pressed = !self.pressed;
            vec![Event::button(ButtonId::BtnA, self.pressed)]
        }

        fn upload_effect(&mut self, effect: &FeedbackEffect) {
            self.uploads.push(effect.id);
        }

        fn erase_effect(&mut self, effect_id: i16) {
            self.erases.push(effect_id);
        }
    }

    #[test]
    fn test_plugin_through_trait_object() -> TestResult {
        let caps = CapabilityDescriptor::builder("toggle")
            .buttons([ButtonId::BtnA])
            .build()?;
        let mut plugin: Box<dyn VirtualJoystickPlugin> = Box::new(Toggle {
            caps,
            pressed: false,
            uploads: Vec::new(),
            erases: Vec::new(),
        });

        assert_eq!(plugin.capabilities().buttons(), &[ButtonId::BtnA]);
        assert_eq!(plugin.think(), vec![Event::button(ButtonId::BtnA, true)]);
        assert_eq!(plugin.think(), vec![Event::button(ButtonId::BtnA, false)]);

        plugin.upload_effect(&FeedbackEffect::rumble(1, 10, 20));
        plugin.erase_effect(1);
        plugin.on_misc_event(ev::FF, 1, 1);
        Ok(())
    }
}
