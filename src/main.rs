//! morsecalc firmware - Morse-code RPN calculator on an nRF52840.
//!
//! Tasks:
//!   - three button tasks (ALARM / LIGHT / MODE) → `BUTTON_EVENTS`
//!   - the UI loop below, which owns the calculator face and the OLED
//!
//! The face leaves on MODE long-press or after `FACE_TIMEOUT_SECS`
//! without input; the panel then goes dark until the next press.

#![no_std]
#![no_main]

mod board;

use defmt::{info, unwrap};
use embassy_executor::Spawner;
use embassy_nrf::gpio::Pin;
use embassy_nrf::twim::{self, Twim};
use embassy_nrf::{bind_interrupts, peripherals};
use embassy_time::{with_timeout, Duration};
use morsecalc::config::FACE_TIMEOUT_SECS;
use morsecalc::input::{to_face_event, Button};
use morsecalc::{Event, Face, Frame, Host, RpnCalculator};
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use board::buttons::button_task;
use board::display::{self, Display};
use board::BUTTON_EVENTS;

bind_interrupts!(struct Irqs {
    TWISPI0 => twim::InterruptHandler<peripherals::TWISPI0>;
});

static FACE: StaticCell<Face<RpnCalculator>> = StaticCell::new();

/// Draws face frames on the OLED and remembers a leave request.
struct OledHost<'a, I2C> {
    display: &'a mut Display<I2C>,
    left: bool,
}

impl<I2C> Host for OledHost<'_, I2C>
where
    I2C: embedded_hal::i2c::I2c,
{
    fn draw(&mut self, frame: &Frame) {
        display::draw_frame(self.display, frame);
    }

    fn leave(&mut self) {
        self.left = true;
    }
}

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let p = embassy_nrf::init(Default::default());
    info!("morsecalc starting");

    let i2c = Twim::new(p.TWISPI0, Irqs, p.P0_26, p.P0_27, twim::Config::default());
    let mut oled = display::init(i2c);

    unwrap!(spawner.spawn(button_task(p.P0_11.degrade(), Button::Alarm)));
    unwrap!(spawner.spawn(button_task(p.P0_12.degrade(), Button::Light)));
    unwrap!(spawner.spawn(button_task(p.P0_24.degrade(), Button::Mode)));

    let face = FACE.init(Face::new());
    face.setup();

    let mut host = OledHost {
        display: &mut oled,
        left: false,
    };
    face.activate(&mut host);

    let timeout = Duration::from_secs(FACE_TIMEOUT_SECS);
    loop {
        let received = with_timeout(timeout, BUTTON_EVENTS.receive()).await;

        if host.left {
            // Dark: the next press brings the face back.
            if received.is_ok() {
                host.left = false;
                face.activate(&mut host);
            }
            continue;
        }

        let event = match received {
            Ok(button) => to_face_event(button),
            Err(_) => Event::Timeout,
        };
        face.loop_event(event, &mut host);

        if host.left {
            face.resign();
            display::draw_blank(host.display);
            info!("face inactive");
        }
    }
}
