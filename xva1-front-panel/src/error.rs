//! Error types for the panel drivers.

use core::fmt;

use display_interface::DisplayError;

/// Failures of the parameter display currently routed by the multiplexer.
///
/// Only [`OledDriver::init`](crate::OledDriver::init) and
/// [`OledDriver::flush`](crate::OledDriver::flush) return these; the
/// [`SmallDisplay`](crate::SmallDisplay) impl logs them instead.
#[derive(Debug)]
pub enum OledError {
    /// Frame buffer transfer failed on the selected channel.
    Display(DisplayError),
    /// The selected display did not accept its start-up sequence.
    InitializationFailed,
    /// Frame buffer flushed before the bank was brought up with
    /// [`FrontPanel::init_displays`](crate::FrontPanel::init_displays).
    NotInitialized,
}

impl From<DisplayError> for OledError {
    fn from(e: DisplayError) -> Self {
        OledError::Display(e)
    }
}

impl fmt::Display for OledError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            OledError::Display(e) => write!(f, "flush to selected display failed: {:?}", e),
            OledError::InitializationFailed => write!(f, "display did not accept init sequence"),
            OledError::NotInitialized => write!(f, "display bank not initialised"),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for OledError {
    fn format(&self, f: defmt::Formatter) {
        match self {
            OledError::Display(_) => defmt::write!(f, "Flush to selected display failed"),
            OledError::InitializationFailed => defmt::write!(f, "Display rejected init sequence"),
            OledError::NotInitialized => defmt::write!(f, "Display bank not initialised"),
        }
    }
}

/// Errors from the display multiplexer.
#[derive(Debug, PartialEq, Eq)]
pub enum MuxError<E> {
    /// Underlying I2C bus error.
    I2c(E),
    /// Channel index out of range (must be 0–7).
    InvalidChannel,
}

// Allow ergonomic `?` propagation from raw I2C errors.
impl<E> From<E> for MuxError<E> {
    fn from(error: E) -> Self {
        MuxError::I2c(error)
    }
}

impl<E: fmt::Debug> fmt::Display for MuxError<E> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            MuxError::I2c(e) => write!(f, "I2C error: {:?}", e),
            MuxError::InvalidChannel => write!(f, "Invalid multiplexer channel (must be 0-7)"),
        }
    }
}

#[cfg(feature = "defmt")]
impl<E: defmt::Format> defmt::Format for MuxError<E> {
    fn format(&self, f: defmt::Formatter) {
        match self {
            MuxError::I2c(e) => defmt::write!(f, "I2C error: {}", e),
            MuxError::InvalidChannel => defmt::write!(f, "Invalid multiplexer channel"),
        }
    }
}
