//! Floating-point rendering for the segmented display.
//!
//! The display has no exponent glyph, so a value is shown as four
//! significant digits plus a signed two-digit power of ten:
//! ```text
//!  3.14159   →  " " " " "3142" "00"
//! -0.00271   →  "-" "-" "2710" "03"
//! ```
//! Exponents beyond ±99 fall back to showing the exponent itself in the
//! digit positions, followed by `uf`/`of`.

use crate::segment::Frame;

/// Largest exponent magnitude that fits the two exponent positions.
const MAX_SHOWN_EXPONENT: u32 = 99;

/// Render `d` into a fresh frame. Mode and corner positions stay blank.
pub fn format(d: f64) -> Frame {
    let mut frame = Frame::blank();

    if d == 0.0 {
        frame.set_main("     0");
        return frame;
    }
    if d.is_nan() {
        frame.set_main("   nan");
        return frame;
    }
    if d.is_infinite() {
        frame.set_negative(d < 0.0);
        frame.set_main("   inf");
        return frame;
    }

    let negative = d < 0.0;
    let magnitude = libm::fabs(d);

    let mut om = libm::floor(libm::log10(magnitude)) as i32;
    let mut digits = four_significant_digits(magnitude, om);
    if digits > 9999 {
        // Rounded up into the next power of ten.
        digits = 1000;
        om += 1;
    }

    frame.set_negative(negative);
    frame.set_exponent_negative(om < 0);

    let exponent = om.unsigned_abs();
    if exponent <= MAX_SHOWN_EXPONENT {
        frame.set_digits(digits);
        frame.set_exponent(exponent);
    } else {
        frame.set_main(if om < 0 { "    uf" } else { "    of" });
        if exponent < 10_000 {
            frame.set_digits(exponent);
        }
    }
    frame
}

/// `round(magnitude * 10^(3 - om))`, saturating into `u32`.
fn four_significant_digits(magnitude: f64, om: i32) -> u32 {
    // Split the scale so subnormals don't overflow 10^n to infinity.
    let shift = 3 - om;
    let half = shift / 2;
    let scaled = magnitude * libm::pow(10.0, half as f64) * libm::pow(10.0, (shift - half) as f64);
    libm::round(scaled) as u32
}
