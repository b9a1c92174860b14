//! Frame composition for the three views.
//!
//! Nothing here is cached: every frame is built from the current
//! buffers and stack.

use crate::calc::Calculator;
use crate::error::ErrorKind;
use crate::format::format;
use crate::morse::{MorseTable, SymbolBuffer};
use crate::segment::{digit_glyph, Frame};
use crate::token::TokenBuffer;

/// A view an error message can be laid over.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Base {
    TokenEntry,
    StackItem(usize),
}

/// What the display is showing, derived per render.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayState {
    /// Token being typed plus live Morse state.
    TokenEntry,
    /// Stack value at this offset from the top.
    StackItem(usize),
    /// One-render error message over the `over` view.
    Error { kind: ErrorKind, over: Base },
}

impl DisplayState {
    /// The error shown, if any.
    pub fn error(self) -> Option<ErrorKind> {
        match self {
            DisplayState::Error { kind, .. } => Some(kind),
            _ => None,
        }
    }
}

/// Borrowed view of everything a frame depends on.
pub struct Renderer<'a, C, T> {
    pub symbols: &'a SymbolBuffer,
    pub token: &'a TokenBuffer,
    pub calc: &'a C,
    pub table: &'a T,
}

impl<C: Calculator, T: MorseTable> Renderer<'_, C, T> {
    /// Live decode in the mode position, symbol count in the corner,
    /// the token's tail right-aligned in the main field.
    pub fn token_view(&self) -> Frame {
        let mut frame = Frame::blank();
        frame.set_mode(self.symbols.decode(self.table).unwrap_or(' '));
        frame.set_corner_digit(self.symbols.len());
        frame.set_main_right_aligned(self.token.as_str());
        frame
    }

    /// Stack offset selected by a digit in the symbol buffer, else 0.
    pub fn stack_index(&self) -> usize {
        self.symbols
            .decode(self.table)
            .and_then(|c| c.to_digit(10))
            .map_or(0, |d| d as usize)
    }

    /// Stack view at the offset picked by [`stack_index`](Self::stack_index).
    pub fn stack_view(&self) -> Frame {
        self.stack_view_at(self.stack_index())
    }

    /// Stack value at `index` (or `empty`), index in the mode position
    /// and depth in the corner.
    pub fn stack_view_at(&self, index: usize) -> Frame {
        let depth = self.calc.depth();

        let mut frame = if index < depth {
            format(self.calc.item(index))
        } else {
            let mut empty = Frame::blank();
            empty.set_main(" empty");
            empty
        };
        frame.set_mode(char::from(digit_glyph(index)));
        frame.set_corner_digit(depth);
        frame
    }

    /// The frame for `state`.
    pub fn render(&self, state: DisplayState) -> Frame {
        match state {
            DisplayState::TokenEntry => self.token_view(),
            DisplayState::StackItem(index) => self.stack_view_at(index),
            DisplayState::Error { kind, over } => {
                let base = match over {
                    Base::TokenEntry => self.token_view(),
                    Base::StackItem(index) => self.stack_view_at(index),
                };
                error_view(base, kind)
            }
        }
    }
}

/// Lay the error literal over the main field of `base`.
pub fn error_view(mut base: Frame, kind: ErrorKind) -> Frame {
    base.overlay_error(kind);
    base
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calc::RpnCalculator;
    use crate::morse::{StandardTable, Symbol};

    fn key(buf: &mut SymbolBuffer, code: &str) {
        for c in code.chars() {
            buf.push(Symbol::from_char(c).unwrap());
        }
    }

    fn renderer<'a>(
        symbols: &'a SymbolBuffer,
        token: &'a TokenBuffer,
        calc: &'a RpnCalculator,
    ) -> Renderer<'a, RpnCalculator, StandardTable> {
        Renderer {
            symbols,
            token,
            calc,
            table: &StandardTable,
        }
    }

    #[test]
    fn token_view_shows_live_decode_and_count() {
        let mut symbols = SymbolBuffer::new();
        key(&mut symbols, "..");
        let mut token = TokenBuffer::new();
        token.append('1');
        token.append('2');
        let calc = RpnCalculator::new();

        let r = renderer(&symbols, &token, &calc);
        assert_eq!(r.token_view().as_str(), "i  2    12");
    }

    #[test]
    fn token_view_blank_mode_when_undecodable() {
        let mut symbols = SymbolBuffer::new();
        key(&mut symbols, "........");
        let token = TokenBuffer::new();
        let calc = RpnCalculator::new();

        let r = renderer(&symbols, &token, &calc);
        assert_eq!(r.token_view().as_str(), "   8      ");
    }

    #[test]
    fn token_view_keeps_last_six_characters() {
        let symbols = SymbolBuffer::new();
        let mut token = TokenBuffer::new();
        for c in "123456789".chars() {
            token.append(c);
        }
        let calc = RpnCalculator::new();

        let r = renderer(&symbols, &token, &calc);
        assert_eq!(r.token_view().as_str(), "   0456789");
    }

    #[test]
    fn stack_view_empty_stack() {
        let symbols = SymbolBuffer::new();
        let token = TokenBuffer::new();
        let calc = RpnCalculator::new();

        let r = renderer(&symbols, &token, &calc);
        assert_eq!(r.stack_view().as_str(), "0  0 empty");
    }

    #[test]
    fn stack_view_shows_top_by_default() {
        let symbols = SymbolBuffer::new();
        let token = TokenBuffer::new();
        let mut calc = RpnCalculator::new();
        calc.submit("2").unwrap();
        calc.submit("3.14159").unwrap();

        let r = renderer(&symbols, &token, &calc);
        assert_eq!(r.stack_index(), 0);
        assert_eq!(r.stack_view().as_str(), "0  2314200");
    }

    #[test]
    fn digit_in_symbol_buffer_selects_stack_item() {
        let mut symbols = SymbolBuffer::new();
        key(&mut symbols, ".----"); // 1
        let token = TokenBuffer::new();
        let mut calc = RpnCalculator::new();
        calc.submit("-0.00271").unwrap();
        calc.submit("5").unwrap();

        let r = renderer(&symbols, &token, &calc);
        assert_eq!(r.stack_index(), 1);
        assert_eq!(r.stack_view().as_str(), "1--2271003");
    }

    #[test]
    fn index_beyond_depth_is_empty() {
        let mut symbols = SymbolBuffer::new();
        key(&mut symbols, "...--"); // 3
        let token = TokenBuffer::new();
        let mut calc = RpnCalculator::new();
        calc.submit("1").unwrap();

        let r = renderer(&symbols, &token, &calc);
        assert_eq!(r.stack_view().as_str(), "3  1 empty");
    }

    #[test]
    fn render_stack_item_uses_given_index() {
        let symbols = SymbolBuffer::new();
        let token = TokenBuffer::new();
        let mut calc = RpnCalculator::new();
        calc.submit("7").unwrap();
        calc.submit("8").unwrap();

        let r = renderer(&symbols, &token, &calc);
        let frame = r.render(DisplayState::StackItem(1));
        assert_eq!(frame.mode(), '1');
        assert_eq!(frame.digits(), "7000");
        assert_eq!(frame.as_str(), "1  2700000");
    }

    #[test]
    fn render_error_uses_its_base_view() {
        let symbols = SymbolBuffer::new();
        let token = TokenBuffer::new();
        let calc = RpnCalculator::new();

        let r = renderer(&symbols, &token, &calc);
        let over_stack = DisplayState::Error {
            kind: ErrorKind::CommandRejected,
            over: Base::StackItem(0),
        };
        assert_eq!(r.render(over_stack).as_str(), "0  0cmderr");

        let over_token = DisplayState::Error {
            kind: ErrorKind::TokenFull,
            over: Base::TokenEntry,
        };
        assert_eq!(r.render(over_token).as_str(), "   0  full");
        assert_eq!(over_token.error(), Some(ErrorKind::TokenFull));
        assert_eq!(DisplayState::TokenEntry.error(), None);
    }

    #[test]
    fn error_view_replaces_main_field_only() {
        let symbols = SymbolBuffer::new();
        let token = TokenBuffer::new();
        let calc = RpnCalculator::new();

        let r = renderer(&symbols, &token, &calc);
        let frame = error_view(r.stack_view(), ErrorKind::StackSize);
        assert_eq!(frame.as_str(), "0  0stkerr");
    }
}
