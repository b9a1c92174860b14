//! Calculator session: input buffers, engine and the dispatcher.
//!
//! Each button event is handled to completion before the next one:
//!
//! ```text
//! Idle ──dot/dash──▶ accumulating ──commit──▶ decode ──▶ Command ──▶ Idle
//! ```
//!
//! The symbol buffer is reset after every decode, whatever the result.

use crate::calc::Calculator;
use crate::error::ErrorKind;
use crate::morse::{self, MorseTable, StandardTable, Symbol, SymbolBuffer};
use crate::render::{Base, DisplayState, Renderer};
use crate::segment::Frame;
use crate::token::TokenBuffer;

/// Host events the face reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    /// Dot keyed.
    Dot,
    /// Dash keyed.
    Dash,
    /// Current Morse character is complete.
    Submit,
    /// Re-render the stack view.
    LongPressPrimary,
    /// Re-render the stack view.
    LongPressSecondary,
    /// Inactivity timeout: leave the face.
    Timeout,
    /// Navigate away from the face.
    LongPressNavigate,
}

/// What a completed Morse character asks for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Command {
    /// Sequence did not decode.
    Ignore,
    /// Send the token to the calculator.
    Submit,
    /// Erase the last token character.
    DeleteLast,
    /// Drop the token without submitting.
    Clear,
    /// Add a character to the token.
    Append(char),
}

/// Route a decoded character to exactly one command.
///
/// Characters outside ASCII cannot be shown on the display and are
/// treated like an unknown sequence.
pub fn classify(decoded: Option<char>) -> Command {
    match decoded {
        None => Command::Ignore,
        Some(c) if !c.is_ascii() => Command::Ignore,
        Some(morse::SUBMIT) => Command::Submit,
        Some(morse::ERASE) => Command::DeleteLast,
        Some(morse::CLEAR) => Command::Clear,
        Some(c) => Command::Append(c),
    }
}

/// Result of handling one completed character.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Dispatch {
    pub command: Command,
    pub state: DisplayState,
    pub frame: Frame,
}

/// All state owned by one calculator face.
#[derive(Clone, Debug, Default)]
pub struct Session<C, T = StandardTable> {
    symbols: SymbolBuffer,
    token: TokenBuffer,
    calc: C,
    table: T,
}

impl<C: Calculator, T: MorseTable> Session<C, T> {
    pub fn new(calc: C, table: T) -> Self {
        Self {
            symbols: SymbolBuffer::new(),
            token: TokenBuffer::new(),
            calc,
            table,
        }
    }

    pub fn symbols(&self) -> &SymbolBuffer {
        &self.symbols
    }

    pub fn token(&self) -> &TokenBuffer {
        &self.token
    }

    pub fn calculator(&self) -> &C {
        &self.calc
    }

    /// Clear both input buffers. The calculator stack is kept.
    pub fn reset_input(&mut self) {
        self.symbols.reset();
        self.token.clear();
    }

    /// Record a dot or dash and show the live token view.
    pub fn key(&mut self, symbol: Symbol) -> Frame {
        if !self.symbols.push(symbol) {
            trace!("symbol buffer saturated");
        }
        self.renderer().token_view()
    }

    /// Decode the keyed character and act on it.
    pub fn complete_character(&mut self) -> Dispatch {
        let decoded = self.symbols.decode(&self.table);
        self.symbols.reset();

        let command = classify(decoded);
        trace!("character complete: {}", command);

        let state = match command {
            Command::Ignore => {
                debug!("morse sequence not recognised");
                DisplayState::TokenEntry
            }
            Command::Submit => {
                let result = self.calc.submit(self.token.as_str());
                self.token.clear();
                match result {
                    Ok(()) => {
                        info!("token accepted, depth {}", self.calc.depth());
                        self.stack_state()
                    }
                    Err(e) => {
                        warn!("token rejected: {}", e);
                        DisplayState::Error {
                            kind: ErrorKind::from(e),
                            over: Base::StackItem(self.renderer().stack_index()),
                        }
                    }
                }
            }
            Command::DeleteLast => {
                self.token.delete_last();
                DisplayState::TokenEntry
            }
            Command::Clear => {
                self.token.clear();
                self.stack_state()
            }
            Command::Append(c) => {
                if self.token.append(c) {
                    DisplayState::TokenEntry
                } else {
                    warn!("token full, dropped input");
                    DisplayState::Error {
                        kind: ErrorKind::TokenFull,
                        over: Base::TokenEntry,
                    }
                }
            }
        };

        Dispatch {
            command,
            state,
            frame: self.render(state),
        }
    }

    /// Current stack view (used on activation and long presses).
    pub fn render_stack(&self) -> Frame {
        self.renderer().stack_view()
    }

    /// Frame for `state` from the current buffers and stack.
    pub fn render(&self, state: DisplayState) -> Frame {
        self.renderer().render(state)
    }

    fn stack_state(&self) -> DisplayState {
        DisplayState::StackItem(self.renderer().stack_index())
    }

    fn renderer(&self) -> Renderer<'_, C, T> {
        Renderer {
            symbols: &self.symbols,
            token: &self.token,
            calc: &self.calc,
            table: &self.table,
        }
    }
}
