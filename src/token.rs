//! The token being typed: a number literal or a command word.

use heapless::String;

use crate::config::TOKEN_CAPACITY;

/// Bounded text buffer for the current input token.
///
/// One slot of `TOKEN_CAPACITY` is kept free, mirroring a
/// NUL-terminated buffer of that size.
#[derive(Clone, Debug, Default)]
pub struct TokenBuffer {
    text: String<TOKEN_CAPACITY>,
}

impl TokenBuffer {
    /// Maximum number of characters a token can hold.
    pub const MAX_LEN: usize = TOKEN_CAPACITY - 1;

    pub const fn new() -> Self {
        Self {
            text: String::new(),
        }
    }

    /// Append `c`. Returns `false` and leaves the token unchanged when
    /// it is already `MAX_LEN` characters long or `c` is not ASCII.
    pub fn append(&mut self, c: char) -> bool {
        if self.text.len() >= Self::MAX_LEN || !c.is_ascii() {
            return false;
        }
        self.text.push(c).is_ok()
    }

    /// Drop the last character, if any.
    pub fn delete_last(&mut self) {
        self.text.pop();
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }

    pub fn as_str(&self) -> &str {
        self.text.as_str()
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.text.len() >= Self::MAX_LEN
    }
}
