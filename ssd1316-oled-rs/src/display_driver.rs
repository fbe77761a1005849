//! The GUI toolkit's display-driver contract.
//!
//! A toolkit renders into a page buffer one pixel at a time through
//! [`DisplayDriver::set_px`], asks the driver to widen the dirty region
//! through [`DisplayDriver::rounder`], and finally hands the buffer over with
//! [`DisplayDriver::flush`].

use embedded_graphics::pixelcolor::BinaryColor;

use crate::area::Area;

/// Pixel opacity, `0` (transparent) to `255` (opaque).
pub type Opa = u8;

/// Fully transparent: the pixel is treated as background.
pub const OPA_TRANSP: Opa = 0;

/// Fully opaque.
pub const OPA_COVER: Opa = 255;

#[allow(async_fn_in_trait)]
pub trait DisplayDriver {
    type Error;

    /// Horizontal and vertical resolution in pixels.
    fn resolution(&self) -> (u16, u16);

    /// Widen `area` to the region the controller can actually be written in.
    fn rounder(&self, area: Area) -> Area;

    /// Encode one pixel into `buf`, a page-organised buffer `buf_w` pixels wide.
    fn set_px(&self, buf: &mut [u8], buf_w: u16, x: u16, y: u16, color: BinaryColor, opa: Opa);

    /// Write the pixels of `area`, page-major, from `buf` to the panel.
    async fn flush(&mut self, area: &Area, buf: &[u8]) -> Result<(), Self::Error>;
}
