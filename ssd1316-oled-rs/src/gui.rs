//! The GUI side of the render loop: tick counter, handler trait, and the
//! status screen that drives a [`DisplayDriver`].

use core::sync::atomic::{AtomicU32, Ordering};

use embedded_graphics::{pixelcolor::BinaryColor, prelude::*};

use crate::area::Area;
use crate::canvas::Canvas;
use crate::display_driver::DisplayDriver;
use crate::layout::{render_screen, ScreenConfig, ScreenState};

// ── Tick ─────────────────────────────────────────────────────────────────

/// Millisecond tick advanced by a periodic timer and read by the GUI.
///
/// Lock-free so the timer side never contends with the GUI mutex.
pub struct Tick {
    ms: AtomicU32,
}

impl Tick {
    pub const fn new() -> Self {
        Self {
            ms: AtomicU32::new(0),
        }
    }

    /// Advance by `ms` milliseconds (wraps at `u32::MAX`).
    pub fn inc(&self, ms: u32) {
        self.ms.fetch_add(ms, Ordering::Relaxed);
    }

    pub fn now_ms(&self) -> u32 {
        self.ms.load(Ordering::Relaxed)
    }
}

impl Default for Tick {
    fn default() -> Self {
        Self::new()
    }
}

// ── GuiConfig ────────────────────────────────────────────────────────────

/// Timing of the GUI task and its tick timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuiConfig {
    /// Delay between handler runs. Default: 10 ms.
    pub handler_period_ms: u64,
    /// Tick timer period, also the tick increment. Default: 1 ms.
    pub tick_period_ms: u32,
}

impl Default for GuiConfig {
    fn default() -> Self {
        Self {
            handler_period_ms: 10,
            tick_period_ms: 1,
        }
    }
}

impl GuiConfig {
    /// Periods clamped to at least 1 ms so neither loop can spin.
    pub fn sanitized(self) -> Self {
        Self {
            handler_period_ms: self.handler_period_ms.max(1),
            tick_period_ms: self.tick_period_ms.max(1),
        }
    }
}

// ── Gui ──────────────────────────────────────────────────────────────────

/// Periodic GUI handler, run with the GUI mutex held.
///
/// Implementations render into their own buffer through the driver's
/// `set_px`/`rounder` callbacks and hand finished frames to `flush`.
#[allow(async_fn_in_trait)]
pub trait Gui {
    async fn task_handler<D>(&mut self, display: &mut D, now_ms: u32) -> Result<(), D::Error>
    where
        D: DisplayDriver;
}

// ── StatusScreen ─────────────────────────────────────────────────────────

/// A title and an uptime clock, redrawn only when the text changes.
///
/// Every redraw clears and re-renders the full frame and flushes the full
/// panel; no partial updates are attempted.
///
/// `buf` is the draw buffer and must cover the full panel
/// ([`FRAME_BYTES`](crate::FRAME_BYTES) for the SSD1316).
pub struct StatusScreen<'b> {
    buf: &'b mut [u8],
    title: &'static str,
    config: ScreenConfig,
    last_flushed: Option<ScreenState>,
}

impl<'b> StatusScreen<'b> {
    pub fn new(buf: &'b mut [u8], title: &'static str, config: ScreenConfig) -> Self {
        Self {
            buf,
            title,
            config,
            last_flushed: None,
        }
    }

    /// State of the frame currently on the panel, if any.
    pub fn last_flushed(&self) -> Option<&ScreenState> {
        self.last_flushed.as_ref()
    }
}

impl Gui for StatusScreen<'_> {
    async fn task_handler<D>(&mut self, display: &mut D, now_ms: u32) -> Result<(), D::Error>
    where
        D: DisplayDriver,
    {
        let state = ScreenState::new(self.title, now_ms / 1000);
        if self.last_flushed.as_ref() == Some(&state) {
            return Ok(());
        }

        {
            let mut canvas = Canvas::new(&*display, &mut *self.buf);
            canvas
                .clear(BinaryColor::Off)
                .and_then(|()| render_screen(&mut canvas, &state, &self.config))
                .unwrap_or_else(|e| match e {});
        }

        // `buf` is laid out for the whole panel, so the whole panel is sent.
        let area = display.rounder(Area::full_screen());
        display.flush(&area, &*self.buf).await?;

        #[cfg(feature = "defmt")]
        defmt::trace!("Flushed status screen at {} s", state.uptime_secs);

        self.last_flushed = Some(state);
        Ok(())
    }
}
