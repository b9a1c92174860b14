//! Morse-code calculator face for a 10-character segmented display.
//!
//! Everything here is pure logic that runs on the host as well as on
//! the target: the Morse symbol state machine, the token dispatcher, the
//! float formatter and the frame renderer.
//!
//! Usage: `cargo test --lib`
//!
//! Note: The embedded binary (main.rs, `embedded` feature) only adds the
//! board glue - buttons, OLED and the embassy executor - on top of this
//! library.

#![cfg_attr(not(test), no_std)]

#[macro_use]
mod fmt;

// ═══════════════════════════════════════════════════════════════════════════
// Modules
// ═══════════════════════════════════════════════════════════════════════════

pub mod calc;
pub mod config;
pub mod error;
pub mod face;
pub mod format;
pub mod input;
pub mod morse;
pub mod render;
pub mod segment;
pub mod session;
pub mod token;

pub use calc::{Calculator, RpnCalculator};
pub use error::{CalcError, ErrorKind};
pub use face::{Face, Host};
pub use format::format;
pub use morse::{MorseTable, StandardTable, Symbol, SymbolBuffer};
pub use render::{Base, DisplayState};
pub use segment::Frame;
pub use session::{classify, Command, Event, Session};
pub use token::TokenBuffer;

// ═══════════════════════════════════════════════════════════════════════════
// Scenario Tests - whole keying sequences through the session
// ═══════════════════════════════════════════════════════════════════════════
