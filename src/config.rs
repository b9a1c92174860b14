//! Application-wide constants and compile-time configuration.
//!
//! Display geometry, buffer capacities, timing parameters and board
//! wiring live here so they can be tuned in one place.

// Display

/// Number of character positions on the segmented display.
pub const DISPLAY_WIDTH: usize = 10;

/// First position of the main (6-character) field.
pub const MAIN_FIELD_START: usize = 4;

/// Width of the main field (positions 4..=9).
pub const MAIN_FIELD_WIDTH: usize = DISPLAY_WIDTH - MAIN_FIELD_START;

// Input buffers

/// Maximum dots/dashes held for one in-progress Morse character.
///
/// The corner position shows the fill level as a single digit, so this
/// must stay below 10.
pub const SYMBOL_CAPACITY: usize = 9;

/// Token storage size, including room for a terminator.
/// A token therefore holds at most `TOKEN_CAPACITY - 1` characters.
pub const TOKEN_CAPACITY: usize = 32;

// Calculator

/// Depth of the built-in RPN stack. Shown as one digit in the corner.
pub const STACK_CAPACITY: usize = 9;

// Timing (firmware)

/// Button debounce time (ms).
pub const BUTTON_DEBOUNCE_MS: u64 = 50;

/// Hold time after which a press counts as a long press (ms).
pub const LONG_PRESS_MS: u64 = 600;

/// Inactivity before the face raises `Event::Timeout` (seconds).
pub const FACE_TIMEOUT_SECS: u64 = 60;

// GPIO pin assignments (nRF52840-DK defaults)
//
// These are logical names; the concrete `embassy_nrf::peripherals::*`
// are picked in `main.rs`.  Adjust for your custom PCB.
//
//   Button ALARM (dot)    → P0.11
//   Button LIGHT (dash)   → P0.12
//   Button MODE (commit)  → P0.24
//   I²C SDA               → P0.26
//   I²C SCL               → P0.27

/// 7-bit I²C address of the SSD1306 module.
pub const DISPLAY_I2C_ADDRESS: u8 = 0x3C;
