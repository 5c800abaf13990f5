//! Contracts the front panel needs from its hardware.
//!
//! Every operation is synchronous and assumed to succeed: a driver that can
//! fail logs the failure and carries on, so navigation never has to
//! recover from a half-drawn frame.

use embedded_graphics::pixelcolor::{BinaryColor, Rgb565};
use embedded_graphics::prelude::Point;

/// Bounding box of a string measured at the current text size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TextBounds {
    /// Left edge relative to the measured origin.
    pub x: i32,
    /// Top edge relative to the measured origin.
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

/// One of the small monochrome parameter displays.
///
/// All four physical displays share a single logical instance; the
/// [`Multiplexer`] decides which one receives the next frame.
pub trait SmallDisplay {
    /// Clear the frame buffer.
    fn clear_display(&mut self);
    /// Text scale for following `measure_text`/`print` calls (1 = smallest).
    fn set_text_size(&mut self, scale: u8);
    fn set_text_color(&mut self, color: BinaryColor);
    /// Measure `text` at the current text size.
    fn measure_text(&self, text: &str) -> TextBounds;
    /// Top-left corner of the next `print`.
    fn set_cursor(&mut self, x: i32, y: i32);
    fn print(&mut self, text: &str);
    fn draw_line(&mut self, start: Point, end: Point, color: BinaryColor);
    /// Send the frame buffer to the selected display.
    fn present(&mut self);
    /// Display width in pixels.
    fn width(&self) -> u32;
}

/// The larger colour status display showing section and subsection titles.
pub trait StatusDisplay {
    fn fill_screen(&mut self, color: Rgb565);
    /// Move the text cursor used by [`println`](Self::println).
    fn set_cursor(&mut self, x: i32, y: i32, font: u8);
    fn set_text_color(&mut self, foreground: Rgb565, background: Rgb565);
    fn set_text_size(&mut self, scale: u8);
    /// Print at the cursor and move it to the start of the next line.
    fn println(&mut self, text: &str);
    /// Draw `text` with its top-left corner at `(x, y)`.
    fn draw_string(&mut self, text: &str, x: i32, y: i32, font: u8);
}

/// Routes display traffic to one of the small displays.
pub trait Multiplexer {
    /// Select `channel`; must take effect before the next draw call.
    fn select_channel(&mut self, channel: usize);
}

/// A push button with an indicator LED (the page up/down buttons).
pub trait LedButton {
    fn set_led(&mut self, on: bool);
}
