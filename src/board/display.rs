//! SSD1306 OLED display wrapper.
//!
//! The OLED stands in for the watch's segment LCD:
//! ```text
//! ┌────────────────────────────┐
//! │ M  S E  C      (small)     │  pos 0..3
//! │  D D D D  X X  (large)     │  pos 4..9
//! └────────────────────────────┘
//! ```

use embedded_graphics::mono_font::ascii::{FONT_10X20, FONT_6X10};
use embedded_graphics::mono_font::{MonoFont, MonoTextStyle, MonoTextStyleBuilder};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::text::Text;
use morsecalc::config::{DISPLAY_I2C_ADDRESS, MAIN_FIELD_START};
use morsecalc::Frame;
use ssd1306::mode::BufferedGraphicsMode;
use ssd1306::prelude::*;
use ssd1306::I2CDisplayInterface;
use ssd1306::Ssd1306;

/// Type alias for the concrete display driver.
///
/// Generic over the I²C implementation so callers pass in their HAL's
/// I²C peripheral.
pub type Display<I2C> =
    Ssd1306<I2CInterface<I2C>, DisplaySize128x64, BufferedGraphicsMode<DisplaySize128x64>>;

/// Initialise the SSD1306 display and clear the screen.
pub fn init<I2C>(i2c: I2C) -> Display<I2C>
where
    I2C: embedded_hal::i2c::I2c,
{
    let interface = I2CDisplayInterface::new_custom_address(i2c, DISPLAY_I2C_ADDRESS);
    let mut display = Ssd1306::new(interface, DisplaySize128x64, DisplayRotation::Rotate0)
        .into_buffered_graphics_mode();
    let _ = display.init();
    display.clear_buffer();
    let _ = display.flush();
    display
}

fn text_style(font: &'static MonoFont<'static>) -> MonoTextStyle<'static, BinaryColor> {
    MonoTextStyleBuilder::new()
        .font(font)
        .text_color(BinaryColor::On)
        .build()
}

/// Render one 10-position frame.
pub fn draw_frame<I2C>(display: &mut Display<I2C>, frame: &Frame)
where
    I2C: embedded_hal::i2c::I2c,
{
    display.clear_buffer();

    let (top, main) = frame.as_str().split_at(MAIN_FIELD_START);

    // Top row: one cell per position, spaced like the LCD's small digits.
    let mut cell = [0u8; 4];
    for (i, c) in top.chars().enumerate() {
        let s = c.encode_utf8(&mut cell);
        let x = 4 + i as i32 * 14;
        let _ = Text::new(s, Point::new(x, 12), text_style(&FONT_6X10)).draw(display);
    }

    let _ = Text::new(main, Point::new(4, 44), text_style(&FONT_10X20)).draw(display);

    let _ = display.flush();
}

/// Blank the panel while the face is not active.
pub fn draw_blank<I2C>(display: &mut Display<I2C>)
where
    I2C: embedded_hal::i2c::I2c,
{
    display.clear_buffer();
    let _ = display.flush();
}
