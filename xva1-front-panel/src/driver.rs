//! SSD1306 parameter display driven through the `ssd1306` crate in
//! buffered graphics mode.
//!
//! [`OledDriver`] manages the SSD1306 lifecycle (construction without I2C
//! traffic, explicit initialisation, frame buffer flush) and implements
//! [`SmallDisplay`] on top of `embedded-graphics` so the panel can draw
//! centred text and rules into the frame buffer.

use display_interface_i2c::I2CInterface;
use embedded_graphics::geometry::OriginDimensions;
use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Line, PrimitiveStyle};
use embedded_graphics::text::renderer::TextRenderer;
use embedded_graphics::text::{Baseline, Text};
use embedded_hal::i2c::I2c;
use ssd1306::{mode::BufferedGraphicsMode, prelude::*, I2CDisplayInterface, Ssd1306};

use crate::error::OledError;
use crate::font::font_for_scale;
use crate::hal::{SmallDisplay, TextBounds};

/// Concrete display type used internally by [`OledDriver`].
type Display<I2C> =
    Ssd1306<I2CInterface<I2C>, DisplaySize128x64, BufferedGraphicsMode<DisplaySize128x64>>;

/// Blocking driver for an SSD1306 128×64 OLED display over I2C.
///
/// One driver serves the whole multiplexed display bank: the panel selects
/// a multiplexer channel, redraws the frame buffer and flushes it to
/// whichever physical display is routed at that moment.
///
/// # Lifecycle
///
/// 1. [`OledDriver::new()`]: constructs the driver without any I2C traffic.
/// 2. [`OledDriver::init()`]: sends the SSD1306 initialisation sequence
///    (once per multiplexer channel, see
///    [`FrontPanel::init_displays`](crate::FrontPanel::init_displays)).
/// 3. Draw through the [`SmallDisplay`] methods.
/// 4. [`SmallDisplay::present()`]: transfers the frame buffer to hardware.
pub struct OledDriver<I2C> {
    display: Display<I2C>,
    /// Set to `true` after a successful `init()` call.
    initialized: bool,
    text_size: u8,
    text_color: BinaryColor,
    cursor: Point,
}

impl<I2C> OledDriver<I2C>
where
    I2C: I2c,
{
    /// Construct an uninitialised driver.
    ///
    /// No I2C traffic is generated. You **must** call [`init()`](Self::init)
    /// before the first [`present()`](SmallDisplay::present).
    ///
    /// # Arguments
    /// * `i2c`: I2C bus handle, typically shared with the multiplexer.
    /// * `address`: 7-bit I2C device address (typically `0x3C` or `0x3D`).
    pub fn new(i2c: I2C, address: u8) -> Self {
        let interface = I2CDisplayInterface::new_custom_address(i2c, address);
        let display = Ssd1306::new(interface, DisplaySize128x64, DisplayRotation::Rotate0)
            .into_buffered_graphics_mode();

        Self {
            display,
            initialized: false,
            text_size: 1,
            text_color: BinaryColor::On,
            cursor: Point::zero(),
        }
    }

    /// Initialise the SSD1306 currently routed by the multiplexer.
    ///
    /// # Errors
    ///
    /// Returns [`OledError::InitializationFailed`] if the display does not
    /// respond.
    pub fn init(&mut self) -> Result<(), OledError> {
        self.display
            .init()
            .map_err(|_| OledError::InitializationFailed)?;
        self.initialized = true;
        Ok(())
    }

    /// Transfer the frame buffer to the display via I2C.
    ///
    /// # Errors
    ///
    /// Returns [`OledError::NotInitialized`] if [`init()`](Self::init) has
    /// not been called, or [`OledError::Display`] on a bus-level failure.
    pub fn flush(&mut self) -> Result<(), OledError> {
        if !self.initialized {
            return Err(OledError::NotInitialized);
        }
        self.display.flush()?;
        Ok(())
    }

    /// Check whether the display has been successfully initialised.
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    fn text_style(&self) -> MonoTextStyle<'static, BinaryColor> {
        MonoTextStyle::new(font_for_scale(self.text_size), self.text_color)
    }
}

impl<I2C> SmallDisplay for OledDriver<I2C>
where
    I2C: I2c,
{
    fn clear_display(&mut self) {
        self.display.clear_buffer();
    }

    fn set_text_size(&mut self, scale: u8) {
        self.text_size = scale;
    }

    fn set_text_color(&mut self, color: BinaryColor) {
        self.text_color = color;
    }

    fn measure_text(&self, text: &str) -> TextBounds {
        let metrics = self
            .text_style()
            .measure_string(text, Point::zero(), Baseline::Top);
        let bounds = metrics.bounding_box;
        TextBounds {
            x: bounds.top_left.x,
            y: bounds.top_left.y,
            width: bounds.size.width,
            height: bounds.size.height,
        }
    }

    fn set_cursor(&mut self, x: i32, y: i32) {
        self.cursor = Point::new(x, y);
    }

    fn print(&mut self, text: &str) {
        // Drawing into the frame buffer cannot fail.
        if let Ok(next) =
            Text::with_baseline(text, self.cursor, self.text_style(), Baseline::Top).draw(&mut self.display)
        {
            self.cursor = next;
        }
    }

    fn draw_line(&mut self, start: Point, end: Point, color: BinaryColor) {
        Line::new(start, end)
            .into_styled(PrimitiveStyle::with_stroke(color, 1))
            .draw(&mut self.display)
            .ok();
    }

    fn present(&mut self) {
        if let Err(_e) = self.flush() {
            #[cfg(feature = "defmt")]
            defmt::warn!("OLED flush failed: {}", _e);
        }
    }

    fn width(&self) -> u32 {
        OriginDimensions::size(&self.display).width
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeI2c;

    #[test]
    fn new_generates_no_traffic() {
        let i2c = FakeI2c::new();
        let driver = OledDriver::new(i2c.clone(), 0x3C);
        assert!(!driver.is_initialized());
        assert!(i2c.writes().is_empty());
    }

    #[test]
    fn flush_before_init_is_rejected() {
        let mut driver = OledDriver::new(FakeI2c::new(), 0x3C);
        let err = driver.flush().unwrap_err();
        assert!(matches!(err, OledError::NotInitialized));
        assert_eq!(err.to_string(), "display bank not initialised");
    }

    #[test]
    fn init_on_a_silent_channel_fails() {
        let i2c = FakeI2c::new();
        i2c.fail_writes(true);
        let mut driver = OledDriver::new(i2c, 0x3C);

        let err = driver.init().unwrap_err();
        assert!(matches!(err, OledError::InitializationFailed));
        assert!(!driver.is_initialized());
    }

    #[test]
    fn init_then_present_writes_to_the_display_address() {
        let i2c = FakeI2c::new();
        let mut driver = OledDriver::new(i2c.clone(), 0x3C);
        driver.init().unwrap();
        assert!(driver.is_initialized());

        let before = i2c.writes().len();
        driver.clear_display();
        driver.print("Cutoff");
        driver.present();

        let writes = i2c.writes();
        assert!(writes.len() > before);
        assert!(writes.iter().all(|(address, _)| *address == 0x3C));
    }

    #[test]
    fn measure_text_scales_with_text_size() {
        let mut driver = OledDriver::new(FakeI2c::new(), 0x3C);

        driver.set_text_size(1);
        let small = driver.measure_text("ABC");
        assert_eq!((small.width, small.height), (18, 10));

        driver.set_text_size(2);
        let large = driver.measure_text("ABC");
        assert_eq!((large.width, large.height), (30, 20));

        assert_eq!(driver.measure_text("").width, 0);
    }

    #[test]
    fn width_is_128() {
        let driver = OledDriver::new(FakeI2c::new(), 0x3C);
        assert_eq!(driver.width(), 128);
    }
}
