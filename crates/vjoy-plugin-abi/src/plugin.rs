//! Lifecycle contract implemented by every plugin.

use crate::descriptor::CapabilityDescriptor;
use crate::effect::FeedbackEffect;
use crate::event::Event;

/// A virtual joystick plugin as driven by the host.
///
/// The host calls [`capabilities`](Self::capabilities) once at
/// registration, then [`think`](Self::think) on a fixed schedule from a
/// single thread. Feedback callbacks may arrive between two ticks but never
/// during one. None of the callbacks can fail: a tick that cannot sample the
/// device returns an empty batch.
pub trait VirtualJoystickPlugin {
    /// Descriptor used to build the virtual device. Must not change between
    /// calls.
    fn capabilities(&self) -> &CapabilityDescriptor;

    /// Sample the device and return this tick's events, axes first.
    ///
    /// Must not block longer than the underlying transport's read timeout.
    fn think(&mut self) -> Vec<Event>;

    /// The host uploaded a force-feedback effect.
    fn upload_effect(&mut self, effect: &FeedbackEffect);

    /// The host erased the effect in slot `effect_id`.
    fn erase_effect(&mut self, effect_id: i16);

    /// Device-originated event outside axes, buttons and feedback.
    fn on_misc_event(&mut self, _ev_type: u16, _code: u16, _value: i32) {}
}

impl<P: VirtualJoystickPlugin + ?Sized> VirtualJoystickPlugin for Box<P> {
    fn capabilities(&self) -> &CapabilityDescriptor {
        (**self).capabilities()
    }

    fn think(&mut self) -> Vec<Event> {
        (**self).think()
    }

    fn upload_effect(&mut self, effect: &FeedbackEffect) {
        (**self).upload_effect(effect)
    }

    fn erase_effect(&mut self, effect_id: i16) {
        (**self).erase_effect(effect_id)
    }

    fn on_misc_event(&mut self, ev_type: u16, code: u16, value: i32) {
        (**self).on_misc_event(ev_type, code, value)
    }
}
