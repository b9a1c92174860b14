//! Integration tests for the calculator face, driven through the public
//! lifecycle hooks the way a watch host would.

use morsecalc::input::{to_face_event, Button, ButtonEvent};
use morsecalc::{Event, Face, Frame, Host, RpnCalculator};

#[derive(Default)]
struct Screen {
    frames: Vec<Frame>,
    left: bool,
}

impl Screen {
    fn last(&self) -> &str {
        self.frames.last().expect("nothing drawn").as_str()
    }
}

impl Host for Screen {
    fn draw(&mut self, frame: &Frame) {
        self.frames.push(*frame);
    }

    fn leave(&mut self) {
        self.left = true;
    }
}

/// Key space-separated Morse characters, finishing each with MODE.
fn key(face: &mut Face<RpnCalculator>, screen: &mut Screen, codes: &str) {
    for code in codes.split(' ') {
        for c in code.chars() {
            let button = if c == '.' { Button::Alarm } else { Button::Light };
            assert!(face.loop_event(to_face_event(ButtonEvent::Release(button)), screen));
        }
        assert!(face.loop_event(to_face_event(ButtonEvent::Release(Button::Mode)), screen));
    }
}

fn active_face() -> (Face<RpnCalculator>, Screen) {
    let mut face = Face::new();
    let mut screen = Screen::default();
    face.setup();
    face.activate(&mut screen);
    (face, screen)
}

#[test]
fn activation_shows_empty_stack() {
    let (_face, screen) = active_face();
    assert_eq!(screen.last(), "0  0 empty");
}

#[test]
fn typing_pi_digits_and_submitting() {
    let (mut face, mut screen) = active_face();

    // 3.14159
    key(&mut face, &mut screen, "...-- .-.-.- .---- ....- .---- ..... ----.");
    assert_eq!(screen.last(), "   0.14159");

    key(&mut face, &mut screen, "..--");
    assert_eq!(screen.last(), "0  1314200");
}

#[test]
fn live_symbols_show_while_keying() {
    let (mut face, mut screen) = active_face();
    face.loop_event(Event::Dash, &mut screen);
    assert_eq!(screen.last(), "t  1      ");
    face.loop_event(Event::Dash, &mut screen);
    assert_eq!(screen.last(), "m  2      ");
    face.loop_event(Event::Dash, &mut screen);
    assert_eq!(screen.last(), "o  3      ");
}

#[test]
fn unknown_word_shows_cmderr_once() {
    let (mut face, mut screen) = active_face();
    key(&mut face, &mut screen, ".... --- ..--");
    assert_eq!(screen.last(), "0  0cmderr");

    face.loop_event(Event::LongPressPrimary, &mut screen);
    assert_eq!(screen.last(), "0  0 empty");
}

#[test]
fn stack_survives_reactivation_but_input_does_not() {
    let (mut face, mut screen) = active_face();
    key(&mut face, &mut screen, "--... ..--");
    key(&mut face, &mut screen, ".----");
    face.loop_event(Event::Dot, &mut screen);

    face.loop_event(
        to_face_event(ButtonEvent::LongPress(Button::Mode)),
        &mut screen,
    );
    assert!(screen.left);
    face.resign();

    face.activate(&mut screen);
    assert_eq!(screen.last(), "0  1700000");
    let session = face.session().expect("session exists");
    assert!(session.token().is_empty());
    assert!(session.symbols().is_empty());
}

#[test]
fn timeout_requests_leave_without_drawing() {
    let (mut face, mut screen) = active_face();
    let drawn = screen.frames.len();
    assert!(face.loop_event(Event::Timeout, &mut screen));
    assert!(screen.left);
    assert_eq!(screen.frames.len(), drawn);
}

#[test]
fn long_press_alarm_browses_stack() {
    let (mut face, mut screen) = active_face();
    key(&mut face, &mut screen, "..--- ..--");
    key(&mut face, &mut screen, "....- ..--");

    // Key "1" and look one below the top.
    face.loop_event(Event::Dot, &mut screen);
    for _ in 0..4 {
        face.loop_event(Event::Dash, &mut screen);
    }
    face.loop_event(
        to_face_event(ButtonEvent::LongPress(Button::Alarm)),
        &mut screen,
    );
    assert_eq!(screen.last(), "1  2200000");
}

#[test]
fn division_by_zero_is_generic_error() {
    let (mut face, mut screen) = active_face();
    key(&mut face, &mut screen, ".---- ..--");
    key(&mut face, &mut screen, "----- ..--");
    key(&mut face, &mut screen, "-..-. ..--");
    assert_eq!(screen.last(), "0  2   err");
}
