//! Board glue - SSD1306 OLED + three physical buttons.
//!
//! The UI task in `main.rs` owns the [`Face`](morsecalc::Face); the
//! button tasks only feed it debounced [`ButtonEvent`]s through
//! [`BUTTON_EVENTS`].
//!
//! ## Components
//!
//! - **Display**: SSD1306 128×64 OLED via I²C, drawn as the 10-position
//!   segmented layout
//! - **Buttons**: 3 tactile switches with debouncing and long-press
//!   detection (ALARM, LIGHT, MODE)

pub mod buttons;
pub mod display;

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use morsecalc::input::ButtonEvent;

/// Queue depth between the button tasks and the UI task.
pub const BUTTON_QUEUE_DEPTH: usize = 4;

/// Button tasks → UI task.
pub static BUTTON_EVENTS: Channel<CriticalSectionRawMutex, ButtonEvent, BUTTON_QUEUE_DEPTH> =
    Channel::new();
