//! Status display adapter for colour `embedded-graphics` targets.
//!
//! [`GraphicsStatusDisplay`] gives any `DrawTarget<Color = Rgb565>` (a TFT
//! driver, a simulator window, a test canvas) the text-console behaviour
//! the panel expects: a cursor, a text size and foreground/background
//! colours.

use embedded_graphics::mono_font::MonoTextStyleBuilder;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::text::{Baseline, Text};

use crate::font::font_for_scale;
use crate::hal::StatusDisplay;

/// Text-console wrapper around a colour draw target.
///
/// Only one mono font family is available, so the `font` arguments of
/// [`StatusDisplay`] are accepted and ignored; [`set_text_size`](StatusDisplay::set_text_size)
/// picks the glyph size.
pub struct GraphicsStatusDisplay<D> {
    target: D,
    cursor: Point,
    foreground: Rgb565,
    background: Rgb565,
    text_size: u8,
}

impl<D> GraphicsStatusDisplay<D> {
    pub fn new(target: D) -> Self {
        Self {
            target,
            cursor: Point::zero(),
            foreground: Rgb565::WHITE,
            background: Rgb565::BLACK,
            text_size: 1,
        }
    }

    pub fn target(&self) -> &D {
        &self.target
    }

    /// Release the wrapped draw target.
    pub fn into_inner(self) -> D {
        self.target
    }
}

impl<D> GraphicsStatusDisplay<D>
where
    D: DrawTarget<Color = Rgb565>,
{
    /// Draw `text` at `position`, returning the position after the last glyph.
    fn draw_text(&mut self, text: &str, position: Point) -> Point {
        let style = MonoTextStyleBuilder::new()
            .font(font_for_scale(self.text_size))
            .text_color(self.foreground)
            .background_color(self.background)
            .build();

        match Text::with_baseline(text, position, style, Baseline::Top).draw(&mut self.target) {
            Ok(next) => next,
            Err(_) => {
                #[cfg(feature = "defmt")]
                defmt::warn!("Status display draw failed");
                position
            }
        }
    }
}

impl<D> StatusDisplay for GraphicsStatusDisplay<D>
where
    D: DrawTarget<Color = Rgb565>,
{
    fn fill_screen(&mut self, color: Rgb565) {
        if self.target.clear(color).is_err() {
            #[cfg(feature = "defmt")]
            defmt::warn!("Status display clear failed");
        }
    }

    fn set_cursor(&mut self, x: i32, y: i32, _font: u8) {
        self.cursor = Point::new(x, y);
    }

    fn set_text_color(&mut self, foreground: Rgb565, background: Rgb565) {
        self.foreground = foreground;
        self.background = background;
    }

    fn set_text_size(&mut self, scale: u8) {
        self.text_size = scale;
    }

    fn println(&mut self, text: &str) {
        self.draw_text(text, self.cursor);
        let line_height = font_for_scale(self.text_size).character_size.height as i32;
        self.cursor = Point::new(0, self.cursor.y + line_height);
    }

    fn draw_string(&mut self, text: &str, x: i32, y: i32, _font: u8) {
        self.draw_text(text, Point::new(x, y));
    }
}
