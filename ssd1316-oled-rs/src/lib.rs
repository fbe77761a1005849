//! Async I2C driver for the SSD1316 (128×32) OLED, with a GUI render loop
//! for Embassy.
//!
//! This crate provides [`Ssd1316`], which speaks the controller's command
//! protocol over any `embedded-hal-async` I2C bus and implements the
//! [`DisplayDriver`] callback contract (flush, rounder, set_px) a GUI renders
//! through, plus [`gui_task`] and [`tick_task`], the periodic loops that run
//! a [`Gui`] behind a mutex.
//!
//! # Quick Start
//!
//! ```ignore
//! use ssd1316_oled_rs::{gui_task, tick_task, GuiConfig, Ssd1316, StatusScreen, Tick};
//!
//! // In your Embassy main:
//! let oled = Ssd1316::new(i2c_oled, 0x3C);
//! let screen = SCREEN.init(Mutex::new(StatusScreen::new(buf, "SSD1316", Default::default())));
//! spawner.spawn(tick(&TICK, GuiConfig::default())).unwrap();
//! spawner.spawn(gui(oled, screen, &TICK, GuiConfig::default())).unwrap();
//!
//! // Thin task wrapper (Embassy tasks cannot be generic):
//! #[embassy_executor::task]
//! async fn gui(
//!     driver: Ssd1316<MyI2cType>,
//!     screen: &'static Mutex<CriticalSectionRawMutex, StatusScreen<'static>>,
//!     tick: &'static Tick,
//!     config: GuiConfig,
//! ) {
//!     gui_task(driver, screen, tick, config).await;
//! }
//! ```
//!
//! # Crate Features
//!
//! - **`defmt`** — structured logging via [`defmt`]; enabled by the firmware crates.
//! - **`task`** — [`gui_task`] and [`tick_task`] (pulls in `embassy-sync`
//!   and `embassy-time`).

#![no_std]

pub mod area;
pub mod canvas;
pub mod commands;
pub mod display_driver;
pub mod driver;
pub mod error;
pub mod gui;
#[cfg(feature = "task")]
pub mod gui_task;
pub mod layout;

// ── Re-exports for convenience ───────────────────────────────────────────

pub use area::{round_to_panel, AddressWindow, Area};
pub use canvas::{set_px, Canvas};
pub use commands::{DEFAULT_ADDRESS, FRAME_BYTES, HEIGHT, WIDTH};
pub use display_driver::{DisplayDriver, Opa, OPA_COVER, OPA_TRANSP};
pub use driver::Ssd1316;
pub use error::OledError;
pub use gui::{Gui, GuiConfig, StatusScreen, Tick};
#[cfg(feature = "task")]
pub use gui_task::{gui_task, tick_task};
pub use layout::{render_screen, ScreenConfig, ScreenState};
