//! GPIO button input with async debouncing.
//!
//! Three physical buttons (active-low with internal pull-up):
//!   - ALARM - dot
//!   - LIGHT - dash
//!   - MODE  - finish character
//!
//! Each button is handled by an async task that waits for a GPIO edge,
//! debounces it, times the hold and sends a `ButtonEvent` to the UI
//! channel.

use defmt::info;
use embassy_futures::select::{select, Either};
use embassy_nrf::gpio::{AnyPin, Input, Pull};
use embassy_time::{Duration, Timer};
use morsecalc::config::{BUTTON_DEBOUNCE_MS, LONG_PRESS_MS};
use morsecalc::input::{Button, ButtonEvent};

use super::BUTTON_EVENTS;

/// Run a single button polling loop.
///
/// Waits for the pin to go low (pressed), debounces, then races the
/// release against the long-press timer.  A long press is reported as
/// soon as the threshold passes; the release that follows is swallowed.
#[embassy_executor::task(pool_size = 3)]
pub async fn button_task(pin: AnyPin, button: Button) -> ! {
    let mut btn = Input::new(pin, Pull::Up);

    loop {
        // Wait for falling edge (button press, active-low).
        btn.wait_for_falling_edge().await;

        // Debounce: wait and re-check.
        Timer::after(Duration::from_millis(BUTTON_DEBOUNCE_MS)).await;
        if !btn.is_low() {
            continue;
        }

        let event = match select(
            btn.wait_for_rising_edge(),
            Timer::after(Duration::from_millis(LONG_PRESS_MS)),
        )
        .await
        {
            Either::First(()) => ButtonEvent::Release(button),
            Either::Second(()) => ButtonEvent::LongPress(button),
        };

        info!("Button: {}", event);
        BUTTON_EVENTS.send(event).await;

        // Wait for release to avoid repeat triggers.
        if btn.is_low() {
            btn.wait_for_rising_edge().await;
        }
        Timer::after(Duration::from_millis(BUTTON_DEBOUNCE_MS)).await;
    }
}
