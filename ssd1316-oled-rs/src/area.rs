//! Pixel rectangles and the controller address window derived from them.

use crate::commands::{HEIGHT, PIXELS_PER_PAGE, WIDTH};

/// Inclusive pixel rectangle `(x1, y1)..=(x2, y2)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Area {
    pub x1: u16,
    pub y1: u16,
    pub x2: u16,
    pub y2: u16,
}

impl Area {
    pub const fn new(x1: u16, y1: u16, x2: u16, y2: u16) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// The whole 128×32 panel.
    pub const fn full_screen() -> Self {
        Self::new(0, 0, WIDTH - 1, HEIGHT - 1)
    }

    /// A single pixel.
    pub const fn point(x: u16, y: u16) -> Self {
        Self::new(x, y, x, y)
    }

    pub fn width(&self) -> u16 {
        self.x2.saturating_sub(self.x1) + 1
    }

    pub fn height(&self) -> u16 {
        self.y2.saturating_sub(self.y1) + 1
    }

    /// `true` if the rectangle is well-formed and lies inside the panel.
    pub fn is_within_panel(&self) -> bool {
        self.x1 <= self.x2 && self.y1 <= self.y2 && self.x2 < WIDTH && self.y2 < HEIGHT
    }

    /// Smallest rectangle covering both `self` and `other`.
    pub fn union(&self, other: &Area) -> Area {
        Area::new(
            self.x1.min(other.x1),
            self.y1.min(other.y1),
            self.x2.max(other.x2),
            self.y2.max(other.y2),
        )
    }
}

/// Rounding callback semantics: every redraw covers the full panel.
///
/// The controller is written in whole pages and the frame is small, so any
/// requested area is widened to `(0, 0)..=(127, 31)`.
pub fn round_to_panel(_area: Area) -> Area {
    Area::full_screen()
}

/// Column and page range programmed before a GDDRAM data stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AddressWindow {
    pub col_start: u8,
    pub col_end: u8,
    pub page_start: u8,
    pub page_end: u8,
}

impl AddressWindow {
    /// Columns follow `x1..=x2`; pages are the rows divided by 8.
    ///
    /// The caller must have checked [`Area::is_within_panel()`].
    pub fn from_area(area: &Area) -> Self {
        Self {
            col_start: area.x1 as u8,
            col_end: area.x2 as u8,
            page_start: (area.y1 / PIXELS_PER_PAGE) as u8,
            page_end: (area.y2 / PIXELS_PER_PAGE) as u8,
        }
    }

    pub fn column_count(&self) -> usize {
        (self.col_end - self.col_start) as usize + 1
    }

    pub fn page_count(&self) -> usize {
        (self.page_end - self.page_start) as usize + 1
    }

    /// Data bytes the controller expects for this window.
    pub fn data_len(&self) -> usize {
        self.column_count() * self.page_count()
    }
}
