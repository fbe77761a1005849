//! Page-buffer pixel encoding and an `embedded-graphics` canvas on top of it.
//!
//! The SSD1316 GDDRAM is organised in pages: each byte holds 8 vertically
//! stacked pixels of one column, least significant bit on top.
//!
//! ```text
//! byte index = x + (y / 8) * buf_w
//! bit index  = y % 8
//! ```

use core::convert::Infallible;

use embedded_graphics::{pixelcolor::BinaryColor, prelude::*};

use crate::area::Area;
use crate::display_driver::{DisplayDriver, Opa, OPA_COVER, OPA_TRANSP};

/// Set or clear the bit for pixel `(x, y)` in a page-organised buffer.
///
/// The bit is set for an opaque foreground pixel (`BinaryColor::On` with
/// `opa != OPA_TRANSP`) and cleared otherwise. Coordinates that fall past
/// the end of `buf` are ignored.
pub fn set_px(buf: &mut [u8], buf_w: u16, x: u16, y: u16, color: BinaryColor, opa: Opa) {
    let byte_index = x as usize + (y as usize >> 3) * buf_w as usize;
    let mask = 1u8 << (y & 0x7);

    let Some(byte) = buf.get_mut(byte_index) else {
        return;
    };

    if color.is_on() && opa != OPA_TRANSP {
        *byte |= mask;
    } else {
        *byte &= !mask;
    }
}

/// [`DrawTarget`] that encodes pixels through a driver's `set_px` callback.
///
/// Tracks the bounding [`Area`] of everything drawn since the last
/// [`take_dirty()`](Self::take_dirty), for callers that want to hand a
/// smaller region to the driver's rounder before a flush.
pub struct Canvas<'a, D> {
    driver: &'a D,
    buf: &'a mut [u8],
    width: u16,
    height: u16,
    dirty: Option<Area>,
}

impl<'a, D> Canvas<'a, D>
where
    D: DisplayDriver,
{
    /// Wrap `buf`, which must cover the driver's full resolution.
    pub fn new(driver: &'a D, buf: &'a mut [u8]) -> Self {
        let (width, height) = driver.resolution();
        Self {
            driver,
            buf,
            width,
            height,
            dirty: None,
        }
    }

    /// Region touched since the last call, if any.
    pub fn take_dirty(&mut self) -> Option<Area> {
        self.dirty.take()
    }

    fn mark(&mut self, area: Area) {
        self.dirty = Some(match self.dirty {
            Some(d) => d.union(&area),
            None => area,
        });
    }

    fn full_area(&self) -> Area {
        Area::new(0, 0, self.width - 1, self.height - 1)
    }
}

impl<D> OriginDimensions for Canvas<'_, D>
where
    D: DisplayDriver,
{
    fn size(&self) -> Size {
        Size::new(self.width as u32, self.height as u32)
    }
}

impl<D> DrawTarget for Canvas<'_, D>
where
    D: DisplayDriver,
{
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if point.x < 0
                || point.y < 0
                || point.x >= self.width as i32
                || point.y >= self.height as i32
            {
                continue;
            }
            let (x, y) = (point.x as u16, point.y as u16);
            self.driver
                .set_px(self.buf, self.width, x, y, color, OPA_COVER);
            self.mark(Area::point(x, y));
        }
        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        let fill = if color.is_on() { 0xFF } else { 0x00 };
        self.buf.fill(fill);
        self.mark(self.full_area());
        Ok(())
    }
}
