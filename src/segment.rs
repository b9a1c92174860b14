//! Typed 10-position display frame.
//!
//! Layout of the segmented display (0-indexed):
//! ```text
//! Pos 0:    Mode character (live Morse decode / stack index)
//! Pos 1:    Sign of the value
//! Pos 2:    Sign of the exponent
//! Pos 3:    Corner digit (symbol count / stack depth)
//! Pos 4-7:  Four significant digits
//! Pos 8-9:  Two-digit absolute exponent
//! Pos 4-9:  Main field (token text, status words)
//! ```
//!
//! Positions hold single ASCII bytes; the physical driver maps each to
//! its segments.

use core::fmt;

use crate::config::{DISPLAY_WIDTH, MAIN_FIELD_START, MAIN_FIELD_WIDTH};
use crate::error::ErrorKind;

const MODE: usize = 0;
const SIGN: usize = 1;
const EXPONENT_SIGN: usize = 2;
const CORNER: usize = 3;
const DIGITS: usize = 4;
const EXPONENT: usize = 8;

/// One complete display image.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Frame {
    cells: [u8; DISPLAY_WIDTH],
}

impl Default for Frame {
    fn default() -> Self {
        Self::blank()
    }
}

impl Frame {
    /// All positions blank.
    pub const fn blank() -> Self {
        Self {
            cells: [b' '; DISPLAY_WIDTH],
        }
    }

    /// The frame as text (always exactly 10 characters).
    pub fn as_str(&self) -> &str {
        // Only ASCII is ever stored.
        core::str::from_utf8(&self.cells).unwrap_or("")
    }

    pub fn as_bytes(&self) -> &[u8; DISPLAY_WIDTH] {
        &self.cells
    }

    pub fn mode(&self) -> char {
        self.cells[MODE] as char
    }

    pub fn set_mode(&mut self, c: char) {
        self.cells[MODE] = ascii_or_blank(c);
    }

    pub fn sign(&self) -> char {
        self.cells[SIGN] as char
    }

    pub fn set_negative(&mut self, negative: bool) {
        self.cells[SIGN] = if negative { b'-' } else { b' ' };
    }

    pub fn exponent_sign(&self) -> char {
        self.cells[EXPONENT_SIGN] as char
    }

    pub fn set_exponent_negative(&mut self, negative: bool) {
        self.cells[EXPONENT_SIGN] = if negative { b'-' } else { b' ' };
    }

    pub fn corner(&self) -> char {
        self.cells[CORNER] as char
    }

    /// Show `n` in the corner. Values above 9 saturate at `9`.
    pub fn set_corner_digit(&mut self, n: usize) {
        self.cells[CORNER] = digit_glyph(n.min(9));
    }

    /// The four significant-digit positions.
    pub fn digits(&self) -> &str {
        self.slice(DIGITS, 4)
    }

    /// Write `value` as four digits (modulo 10000).
    pub fn set_digits(&mut self, value: u32) {
        write_digits(&mut self.cells[DIGITS..DIGITS + 4], value);
    }

    /// The two exponent positions.
    pub fn exponent(&self) -> &str {
        self.slice(EXPONENT, 2)
    }

    /// Write `value` as two digits (modulo 100).
    pub fn set_exponent(&mut self, value: u32) {
        write_digits(&mut self.cells[EXPONENT..EXPONENT + 2], value);
    }

    /// The 6-character main field.
    pub fn main(&self) -> &str {
        self.slice(MAIN_FIELD_START, MAIN_FIELD_WIDTH)
    }

    /// Write `text` starting at the first main-field position.
    ///
    /// Characters beyond the right edge are dropped; positions past the
    /// end of `text` are left untouched.
    pub fn set_main(&mut self, text: &str) {
        for (cell, c) in self.cells[MAIN_FIELD_START..].iter_mut().zip(text.chars()) {
            *cell = ascii_or_blank(c);
        }
    }

    /// Right-align `text` in the main field, blank-padding on the left.
    /// Only the last six characters are kept.
    pub fn set_main_right_aligned(&mut self, text: &str) {
        let field = &mut self.cells[MAIN_FIELD_START..];
        field.fill(b' ');
        let count = text.chars().count();
        let shown = count.min(MAIN_FIELD_WIDTH);
        let offset = MAIN_FIELD_WIDTH - shown;
        for (i, c) in text.chars().skip(count - shown).enumerate() {
            field[offset + i] = ascii_or_blank(c);
        }
    }

    /// Replace the main field with the error's literal.
    pub fn overlay_error(&mut self, kind: ErrorKind) {
        self.set_main(kind.message());
    }

    fn slice(&self, start: usize, len: usize) -> &str {
        core::str::from_utf8(&self.cells[start..start + len]).unwrap_or("")
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Frame({:?})", self.as_str())
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Frame {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "Frame({=str})", self.as_str())
    }
}

/// ASCII glyph for a single decimal digit.
pub fn digit_glyph(n: usize) -> u8 {
    b'0' + (n % 10) as u8
}

fn write_digits(cells: &mut [u8], mut value: u32) {
    for cell in cells.iter_mut().rev() {
        *cell = b'0' + (value % 10) as u8;
        value /= 10;
    }
}

fn ascii_or_blank(c: char) -> u8 {
    if c.is_ascii() && !c.is_ascii_control() {
        c as u8
    } else {
        b' '
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_frame_is_ten_spaces() {
        assert_eq!(Frame::blank().as_str(), "          ");
        assert_eq!(Frame::default(), Frame::blank());
    }

    #[test]
    fn named_fields_land_in_their_positions() {
        let mut frame = Frame::blank();
        frame.set_mode('e');
        frame.set_negative(true);
        frame.set_exponent_negative(true);
        frame.set_corner_digit(3);
        frame.set_digits(2710);
        frame.set_exponent(3);
        assert_eq!(frame.as_str(), "e--3271003");
        assert_eq!(frame.digits(), "2710");
        assert_eq!(frame.exponent(), "03");
        assert_eq!(frame.main(), "271003");
    }

    #[test]
    fn corner_saturates_at_nine() {
        let mut frame = Frame::blank();
        frame.set_corner_digit(42);
        assert_eq!(frame.corner(), '9');
    }

    #[test]
    fn set_main_clips_at_right_edge() {
        let mut frame = Frame::blank();
        frame.set_main("abcdefgh");
        assert_eq!(frame.as_str(), "    abcdef");
    }

    #[test]
    fn right_aligned_main_keeps_last_six() {
        let mut frame = Frame::blank();
        frame.set_main_right_aligned("12");
        assert_eq!(frame.main(), "    12");

        frame.set_main_right_aligned("123456789");
        assert_eq!(frame.main(), "456789");

        frame.set_main_right_aligned("");
        assert_eq!(frame.main(), "      ");
    }

    #[test]
    fn error_overlay_leaves_top_row() {
        let mut frame = Frame::blank();
        frame.set_mode('0');
        frame.set_corner_digit(2);
        frame.set_main("  3142");
        frame.overlay_error(ErrorKind::StackSize);
        assert_eq!(frame.as_str(), "0  2stkerr");
    }

    #[test]
    fn non_ascii_is_blanked() {
        let mut frame = Frame::blank();
        frame.set_mode('é');
        assert_eq!(frame.mode(), ' ');
    }
}
