//! Morse symbol accumulation and lookup.
//!
//! A [`SymbolBuffer`] collects the dots and dashes of one character
//! while it is being keyed.  Turning a finished sequence into a
//! character is the job of a [`MorseTable`]; [`StandardTable`] is the
//! table the calculator ships with.

use heapless::Vec;

use crate::config::SYMBOL_CAPACITY;

/// One keyed element.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Symbol {
    Dot,
    Dash,
}

impl Symbol {
    /// Parse `'.'` / `'-'` notation.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '.' => Some(Symbol::Dot),
            '-' => Some(Symbol::Dash),
            _ => None,
        }
    }
}

/// Maps a completed symbol sequence to a character.
pub trait MorseTable {
    /// `None` when the sequence is not a known character.
    fn decode(&self, symbols: &[Symbol]) -> Option<char>;
}

/// Bounded buffer for the character currently being keyed.
#[derive(Clone, Debug, Default)]
pub struct SymbolBuffer {
    symbols: Vec<Symbol, SYMBOL_CAPACITY>,
}

impl SymbolBuffer {
    pub const fn new() -> Self {
        Self {
            symbols: Vec::new(),
        }
    }

    /// Append a symbol. Returns `false` (and does nothing) when full.
    pub fn push(&mut self, symbol: Symbol) -> bool {
        self.symbols.push(symbol).is_ok()
    }

    pub fn reset(&mut self) {
        self.symbols.clear();
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn as_slice(&self) -> &[Symbol] {
        &self.symbols
    }

    /// Decode the current contents with `table`.
    pub fn decode(&self, table: &impl MorseTable) -> Option<char> {
        if self.symbols.is_empty() {
            return None;
        }
        table.decode(&self.symbols)
    }
}

// Control glyphs produced by the standard table

/// Decode of `..--`: submit the token.
pub const SUBMIT: char = ' ';
/// Decode of `-.--.`: erase the last token character.
pub const ERASE: char = '(';
/// Decode of `-.-.-`: clear the token without submitting.
pub const CLEAR: char = 'S';

/// International Morse letters and digits, calculator punctuation and
/// the three control glyphs.
#[derive(Clone, Copy, Debug, Default)]
pub struct StandardTable;

const CODES: &[(&str, char)] = &[
    // Letters (decoded lowercase, matching calculator command words)
    (".-", 'a'),
    ("-...", 'b'),
    ("-.-.", 'c'),
    ("-..", 'd'),
    (".", 'e'),
    ("..-.", 'f'),
    ("--.", 'g'),
    ("....", 'h'),
    ("..", 'i'),
    (".---", 'j'),
    ("-.-", 'k'),
    (".-..", 'l'),
    ("--", 'm'),
    ("-.", 'n'),
    ("---", 'o'),
    (".--.", 'p'),
    ("--.-", 'q'),
    (".-.", 'r'),
    ("...", 's'),
    ("-", 't'),
    ("..-", 'u'),
    ("...-", 'v'),
    (".--", 'w'),
    ("-..-", 'x'),
    ("-.--", 'y'),
    ("--..", 'z'),
    // Digits
    ("-----", '0'),
    (".----", '1'),
    ("..---", '2'),
    ("...--", '3'),
    ("....-", '4'),
    (".....", '5'),
    ("-....", '6'),
    ("--...", '7'),
    ("---..", '8'),
    ("----.", '9'),
    // Punctuation
    (".-.-.-", '.'),
    ("-....-", '-'),
    (".-.-.", '+'),
    ("-..-.", '/'),
    ("-...-", '='),
    ("--..--", ','),
    ("..--..", '?'),
    // Controls
    ("..--", SUBMIT),
    ("-.--.", ERASE),
    ("-.-.-", CLEAR),
];

impl MorseTable for StandardTable {
    fn decode(&self, symbols: &[Symbol]) -> Option<char> {
        CODES
            .iter()
            .find(|(code, _)| matches_code(code, symbols))
            .map(|&(_, c)| c)
    }
}

fn matches_code(code: &str, symbols: &[Symbol]) -> bool {
    code.len() == symbols.len()
        && code
            .chars()
            .zip(symbols)
            .all(|(c, &s)| Symbol::from_char(c) == Some(s))
}
