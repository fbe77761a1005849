//! Core SSD1316 driver speaking the controller's I2C command protocol.
//!
//! [`Ssd1316`] owns the bus handle and manages the controller lifecycle:
//! construction without I2C traffic, explicit async bring-up, and windowed
//! GDDRAM writes.

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_hal_async::i2c::{I2c, Operation};

use crate::area::{round_to_panel, AddressWindow, Area};
use crate::canvas::set_px;
use crate::commands::{
    ADDR_MODE_HORIZONTAL, CONTROL_CMD_SINGLE, CONTROL_CMD_STREAM, CONTROL_DATA_STREAM,
    DISPLAY_INVERTED, DISPLAY_NORMAL, DISPLAY_OFF, DISPLAY_ON, HEIGHT, INIT_SEQUENCE,
    SET_COLUMN_RANGE, SET_CONTRAST, SET_MEMORY_ADDR_MODE, SET_PAGE_RANGE, WIDTH,
};
use crate::display_driver::{DisplayDriver, Opa};
use crate::error::OledError;

/// Longest command run written in one transaction (the bring-up sequence).
const MAX_COMMAND_LEN: usize = INIT_SEQUENCE.len();

/// Async driver for an SSD1316 128×32 OLED display over I2C.
///
/// # Lifecycle
///
/// 1. [`Ssd1316::new()`] — constructs the driver without any I2C traffic.
/// 2. [`Ssd1316::init()`] — sends the bring-up sequence (panel stays off).
/// 3. [`Ssd1316::sleep_out()`] — switches the panel on.
/// 4. [`Ssd1316::flush()`] — programs the address window and streams pixels.
///
/// # Example
///
/// ```no_run
/// use ssd1316_oled_rs::{Area, Ssd1316, FRAME_BYTES};
///
/// # async fn example(i2c: impl embedded_hal_async::i2c::I2c) {
/// let mut oled = Ssd1316::new(i2c, 0x3C);
/// oled.init().await.unwrap();
/// oled.sleep_out().await.unwrap();
/// let frame = [0xFFu8; FRAME_BYTES];
/// oled.flush(&Area::full_screen(), &frame).await.unwrap();
/// # }
/// ```
pub struct Ssd1316<I2C> {
    i2c: I2C,
    address: u8,
    /// Set to `true` after a successful `init()` call.
    initialized: bool,
}

impl<I2C> Ssd1316<I2C>
where
    I2C: I2c,
{
    /// Construct an uninitialised driver.
    ///
    /// # Arguments
    /// * `i2c` — I2C bus handle (takes ownership; share it through a bus
    ///   device wrapper if other peripherals sit on the same bus).
    /// * `address` — 7-bit I2C device address (typically `0x3C`).
    pub fn new(i2c: I2C, address: u8) -> Self {
        Self {
            i2c,
            address,
            initialized: false,
        }
    }

    /// Send the controller bring-up sequence in a single command stream.
    ///
    /// Configures clocking, multiplexing, remap, charge pump and contrast.
    /// The panel is left switched off.
    ///
    /// # Errors
    ///
    /// Returns [`OledError::I2c`] if the write is not acknowledged.
    pub async fn init(&mut self) -> Result<(), OledError> {
        self.write_commands(CONTROL_CMD_STREAM, &INIT_SEQUENCE).await?;
        self.initialized = true;

        #[cfg(feature = "defmt")]
        defmt::debug!("SSD1316 at {=u8:#x} configured", self.address);

        Ok(())
    }

    /// Program the address window for `area` and stream its pixels.
    ///
    /// `buf` holds the area's pages in page-major order, one byte per
    /// column per page. Only the bytes covered by the window are sent.
    ///
    /// # Errors
    ///
    /// * [`OledError::NotInitialized`] before [`init()`](Self::init).
    /// * [`OledError::AreaOutOfBounds`] if `area` leaves the panel.
    /// * [`OledError::BufferTooSmall`] if `buf` is shorter than the window.
    /// * [`OledError::I2c`] on a bus failure.
    pub async fn flush(&mut self, area: &Area, buf: &[u8]) -> Result<(), OledError> {
        if !self.initialized {
            return Err(OledError::NotInitialized);
        }
        if !area.is_within_panel() {
            return Err(OledError::AreaOutOfBounds);
        }

        let window = AddressWindow::from_area(area);
        let len = window.data_len();
        if buf.len() < len {
            return Err(OledError::BufferTooSmall);
        }

        self.set_window(&window).await?;
        self.write_data(&buf[..len]).await
    }

    /// Switch the panel off. GDDRAM content is retained.
    pub async fn sleep_in(&mut self) -> Result<(), OledError> {
        self.write_commands(CONTROL_CMD_SINGLE, &[DISPLAY_OFF]).await
    }

    /// Switch the panel on.
    pub async fn sleep_out(&mut self) -> Result<(), OledError> {
        self.write_commands(CONTROL_CMD_SINGLE, &[DISPLAY_ON]).await
    }

    pub async fn set_contrast(&mut self, level: u8) -> Result<(), OledError> {
        self.write_commands(CONTROL_CMD_STREAM, &[SET_CONTRAST, level])
            .await
    }

    /// Invert every pixel in hardware without touching GDDRAM.
    pub async fn set_inverted(&mut self, inverted: bool) -> Result<(), OledError> {
        let cmd = if inverted {
            DISPLAY_INVERTED
        } else {
            DISPLAY_NORMAL
        };
        self.write_commands(CONTROL_CMD_SINGLE, &[cmd]).await
    }

    /// Check whether the bring-up sequence has been sent.
    ///
    /// No I2C traffic is generated.
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Consume the driver and hand back the bus handle.
    pub fn release(self) -> I2C {
        self.i2c
    }

    // -----------------------------------------------------------------------
    // Protocol primitives
    // -----------------------------------------------------------------------

    async fn set_window(&mut self, window: &AddressWindow) -> Result<(), OledError> {
        self.write_commands(
            CONTROL_CMD_STREAM,
            &[
                SET_MEMORY_ADDR_MODE,
                ADDR_MODE_HORIZONTAL,
                SET_COLUMN_RANGE,
                window.col_start,
                window.col_end,
                SET_PAGE_RANGE,
                window.page_start,
                window.page_end,
            ],
        )
        .await
    }

    /// Write `[control, commands...]` as one I2C write.
    async fn write_commands(&mut self, control: u8, commands: &[u8]) -> Result<(), OledError> {
        let mut buf = [0u8; MAX_COMMAND_LEN + 1];
        buf[0] = control;
        buf[1..=commands.len()].copy_from_slice(commands);

        self.i2c
            .write(self.address, &buf[..=commands.len()])
            .await
            .map_err(OledError::bus)
    }

    /// Stream GDDRAM bytes after the data control byte.
    ///
    /// Both writes go out in one transaction, so the controller sees a
    /// single START with no repeated start between control byte and data.
    async fn write_data(&mut self, data: &[u8]) -> Result<(), OledError> {
        self.i2c
            .transaction(
                self.address,
                &mut [
                    Operation::Write(&[CONTROL_DATA_STREAM]),
                    Operation::Write(data),
                ],
            )
            .await
            .map_err(OledError::bus)
    }
}

impl<I2C> DisplayDriver for Ssd1316<I2C>
where
    I2C: I2c,
{
    type Error = OledError;

    fn resolution(&self) -> (u16, u16) {
        (WIDTH, HEIGHT)
    }

    fn rounder(&self, area: Area) -> Area {
        round_to_panel(area)
    }

    fn set_px(&self, buf: &mut [u8], buf_w: u16, x: u16, y: u16, color: BinaryColor, opa: Opa) {
        set_px(buf, buf_w, x, y, color, opa);
    }

    async fn flush(&mut self, area: &Area, buf: &[u8]) -> Result<(), OledError> {
        Ssd1316::flush(self, area, buf).await
    }
}
