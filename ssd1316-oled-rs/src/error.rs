//! Error types for the SSD1316 driver.

use core::fmt;

use embedded_hal_async::i2c::ErrorKind;

/// Errors that can occur during OLED display operations.
///
/// Bus errors are reduced to their [`ErrorKind`] so the enum stays
/// non-generic and can be logged from generic tasks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OledError {
    /// An I2C write to the controller failed.
    I2c(ErrorKind),
    /// An operation was attempted before [`Ssd1316::init()`](crate::Ssd1316::init)
    /// succeeded.
    NotInitialized,
    /// The requested area is empty or extends past the 128×32 panel.
    AreaOutOfBounds,
    /// The pixel buffer is shorter than the addressed window.
    BufferTooSmall,
}

impl OledError {
    pub(crate) fn bus<E: embedded_hal_async::i2c::Error>(error: E) -> Self {
        OledError::I2c(error.kind())
    }
}

impl fmt::Display for OledError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            OledError::I2c(kind) => write!(f, "I2C error: {}", kind),
            OledError::NotInitialized => write!(f, "Not initialized"),
            OledError::AreaOutOfBounds => write!(f, "Area outside the 128x32 panel"),
            OledError::BufferTooSmall => write!(f, "Pixel buffer smaller than the window"),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for OledError {
    fn format(&self, f: defmt::Formatter) {
        match self {
            OledError::I2c(kind) => defmt::write!(f, "I2C error: {}", defmt::Debug2Format(kind)),
            OledError::NotInitialized => defmt::write!(f, "Not initialized"),
            OledError::AreaOutOfBounds => defmt::write!(f, "Area out of bounds"),
            OledError::BufferTooSmall => defmt::write!(f, "Buffer too small"),
        }
    }
}
