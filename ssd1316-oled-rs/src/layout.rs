//! Status screen layout types and rendering logic.
//!
//! This module defines the [`ScreenConfig`] geometry, the [`ScreenState`]
//! snapshot, and the [`render_screen`] function that draws a frame using
//! `embedded-graphics`.

use core::fmt::Write;

use embedded_graphics::{
    mono_font::{ascii::FONT_6X10, MonoTextStyle},
    pixelcolor::BinaryColor,
    prelude::*,
    text::{Alignment, Text},
};
use heapless::String;

/// Longest title kept by [`ScreenState`], in bytes.
pub const TITLE_CAPACITY: usize = 16;

// ── ScreenConfig ─────────────────────────────────────────────────────────

/// Geometry of the status screen.
///
/// [`ScreenConfig::default()`] fits two rows of `FONT_6X10` text on the
/// 128×32 panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenConfig {
    /// Total display width in pixels. Default: 128.
    pub display_width: u32,
    /// Total display height in pixels. Default: 32.
    pub display_height: u32,
    /// Baseline of the title row. Default: 10.
    pub title_y: i32,
    /// Baseline of the uptime row. Default: 26.
    pub uptime_y: i32,
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self {
            display_width: 128,
            display_height: 32,
            title_y: 10,
            uptime_y: 26,
        }
    }
}

impl ScreenConfig {
    /// Whether a row with its baseline at `y` lands on the panel.
    pub fn row_visible(&self, y: i32) -> bool {
        y >= 0 && (y as u32) < self.display_height
    }
}

// ── ScreenState ──────────────────────────────────────────────────────────

/// Everything the status screen needs to render one frame.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScreenState {
    /// Title, truncated to [`TITLE_CAPACITY`] bytes on a char boundary.
    pub title: String<TITLE_CAPACITY>,
    /// Whole seconds since the GUI tick started.
    pub uptime_secs: u32,
}

impl ScreenState {
    pub fn new(title: &str, uptime_secs: u32) -> Self {
        let mut truncated = String::new();
        for c in title.chars() {
            if truncated.push(c).is_err() {
                break;
            }
        }
        Self {
            title: truncated,
            uptime_secs,
        }
    }

    /// Uptime as `HH:MM:SS`, hours wrapping at 100.
    pub fn uptime_text(&self) -> String<8> {
        let s = self.uptime_secs;
        let mut buf = String::new();
        let _ = write!(buf, "{:02}:{:02}:{:02}", (s / 3600) % 100, (s / 60) % 60, s % 60);
        buf
    }
}

// ── Rendering ────────────────────────────────────────────────────────────

/// Render a [`ScreenState`] using `embedded-graphics`.
///
/// Rows whose baseline falls outside `0..display_height` are skipped.
///
/// # Layout
///
/// ```text
/// ┌────────────────────────────────┐
/// │          TITLE (centred)       │  ← title_y
/// │           HH:MM:SS             │  ← uptime_y
/// └────────────────────────────────┘
/// ```
pub fn render_screen<D>(
    display: &mut D,
    state: &ScreenState,
    config: &ScreenConfig,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    let text_style = MonoTextStyle::new(&FONT_6X10, BinaryColor::On);
    let centre_x = config.display_width as i32 / 2;

    if !state.title.is_empty() && config.row_visible(config.title_y) {
        Text::with_alignment(
            state.title.as_str(),
            Point::new(centre_x, config.title_y),
            text_style,
            Alignment::Center,
        )
        .draw(display)?;
    }

    if config.row_visible(config.uptime_y) {
        let uptime = state.uptime_text();
        Text::with_alignment(
            uptime.as_str(),
            Point::new(centre_x, config.uptime_y),
            text_style,
            Alignment::Center,
        )
        .draw(display)?;
    }

    Ok(())
}

// ── Tests ────────────────────────────────────────────────────────────────
