//! Physical buttons and their face events.
//!
//! Three buttons (watch layout):
//!   - ALARM - dot
//!   - LIGHT - dash
//!   - MODE  - finish the current Morse character
//!
//! Long presses re-show the stack (ALARM, LIGHT) or leave the face (MODE).

use crate::session::Event;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Button {
    Alarm,
    Light,
    Mode,
}

/// Debounced button activity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonEvent {
    /// Short press, reported on release.
    Release(Button),
    /// Held past the long-press threshold.
    LongPress(Button),
}

/// Face event for a button event.
pub fn to_face_event(event: ButtonEvent) -> Event {
    match event {
        ButtonEvent::Release(Button::Alarm) => Event::Dot,
        ButtonEvent::Release(Button::Light) => Event::Dash,
        ButtonEvent::Release(Button::Mode) => Event::Submit,
        ButtonEvent::LongPress(Button::Light) => Event::LongPressPrimary,
        ButtonEvent::LongPress(Button::Alarm) => Event::LongPressSecondary,
        ButtonEvent::LongPress(Button::Mode) => Event::LongPressNavigate,
    }
}
