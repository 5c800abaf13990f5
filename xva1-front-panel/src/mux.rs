//! TCA9548A I2C switch routing the shared OLED address to one display.
//!
//! The switch has a single control register: writing a byte with bit `n`
//! set connects downstream channel `n` to the bus.

use embedded_hal::i2c::I2c;

use crate::error::MuxError;
use crate::hal::Multiplexer;

/// Default I2C address of the TCA9548A (A0–A2 tied low).
pub const DEFAULT_ADDRESS: u8 = 0x70;

/// Number of downstream channels on the switch.
pub const CHANNEL_COUNT: usize = 8;

/// Driver for the TCA9548A 8-channel I2C switch.
pub struct Tca9548a<I2C> {
    i2c: I2C,
    address: u8,
    selected: Option<usize>,
}

impl<I2C> Tca9548a<I2C>
where
    I2C: I2c,
{
    /// # Arguments
    /// * `i2c`: I2C bus handle, typically shared with the displays.
    /// * `address`: 7-bit I2C device address (typically [`DEFAULT_ADDRESS`]).
    pub fn new(i2c: I2C, address: u8) -> Self {
        Self {
            i2c,
            address,
            selected: None,
        }
    }

    /// Connect `channel` to the bus.
    ///
    /// # Errors
    /// * [`MuxError::InvalidChannel`] if `channel >= 8`
    /// * [`MuxError::I2c`] on communication failure
    pub fn try_select_channel(&mut self, channel: usize) -> Result<(), MuxError<I2C::Error>> {
        if channel >= CHANNEL_COUNT {
            return Err(MuxError::InvalidChannel);
        }

        self.i2c.write(self.address, &[1u8 << channel])?;
        self.selected = Some(channel);
        Ok(())
    }

    /// Last channel selected successfully.
    pub fn selected_channel(&self) -> Option<usize> {
        self.selected
    }

    /// Give back the I2C bus handle.
    pub fn release(self) -> I2C {
        self.i2c
    }
}

impl<I2C> Multiplexer for Tca9548a<I2C>
where
    I2C: I2c,
{
    fn select_channel(&mut self, channel: usize) {
        if self.try_select_channel(channel).is_err() {
            #[cfg(feature = "defmt")]
            defmt::warn!("Multiplexer channel {} select failed", channel);
        }
    }
}
