//! Watch-face lifecycle around a [`Session`].
//!
//! The host calls the four hooks in the usual order:
//! `setup` once, then `activate` / `loop_event`* / `resign` each time
//! the face comes to the foreground.  Session state survives while the
//! face is in the background.

use crate::calc::Calculator;
use crate::morse::{MorseTable, StandardTable, Symbol};
use crate::segment::Frame;
use crate::session::{Event, Session};

/// What the face needs from whoever runs it.
pub trait Host {
    /// Show a frame on the display.
    fn draw(&mut self, frame: &Frame);

    /// Ask to move away from this face.
    fn leave(&mut self);
}

/// The Morse calculator face.
#[derive(Debug, Default)]
pub struct Face<C, T = StandardTable> {
    session: Option<Session<C, T>>,
}

impl<C, T> Face<C, T>
where
    C: Calculator + Default,
    T: MorseTable + Default,
{
    pub const fn new() -> Self {
        Self { session: None }
    }

    /// Create the session if it does not exist yet.
    pub fn setup(&mut self) {
        self.session_mut();
    }

    /// Bring the face to the foreground: fresh input, stack view.
    pub fn activate(&mut self, host: &mut impl Host) {
        let session = self.session_mut();
        session.reset_input();
        info!("face activated, depth {}", session.calculator().depth());
        host.draw(&session.render_stack());
    }

    /// Handle one event. Always returns `true`; the face never ends
    /// itself, it only asks the host to leave.
    pub fn loop_event(&mut self, event: Event, host: &mut impl Host) -> bool {
        let session = self.session_mut();
        match event {
            Event::Dot => host.draw(&session.key(Symbol::Dot)),
            Event::Dash => host.draw(&session.key(Symbol::Dash)),
            Event::Submit => host.draw(&session.complete_character().frame),
            Event::LongPressPrimary | Event::LongPressSecondary => {
                host.draw(&session.render_stack())
            }
            Event::Timeout | Event::LongPressNavigate => {
                info!("leaving face: {}", event);
                host.leave();
            }
        }
        true
    }

    /// Nothing to release.
    pub fn resign(&mut self) {}

    pub fn session(&self) -> Option<&Session<C, T>> {
        self.session.as_ref()
    }

    fn session_mut(&mut self) -> &mut Session<C, T> {
        self.session
            .get_or_insert_with(|| Session::new(C::default(), T::default()))
    }
}
