//! ssd1316-hw-interface
//!
//! Status display firmware for the Raspberry Pi Pico 2 with an SSD1316
//! 128×32 OLED. Wires the driver crate into a live render loop:
//!
//! 1. The tick task advances the shared millisecond [`Tick`] every 1 ms.
//! 2. The GUI task brings up the controller, switches the panel on, and
//!    every 10 ms locks the shared [`StatusScreen`] and runs its handler.
//! 3. The handler renders the title and uptime through the driver's
//!    `set_px` callback and, when the text changed, flushes the frame.

#![no_std]
#![no_main]

use defmt::*;
use embassy_embedded_hal::shared_bus::asynch::i2c::I2cDevice;
use embassy_executor::Spawner;
use embassy_rp::bind_interrupts;
use embassy_rp::block::ImageDef;
use embassy_rp::i2c::{self, I2c};
use embassy_rp::peripherals::I2C0;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::mutex::Mutex;
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use ssd1316_oled_rs::{
    gui_task, tick_task, GuiConfig, ScreenConfig, Ssd1316, StatusScreen, Tick, DEFAULT_ADDRESS,
    FRAME_BYTES,
};

// ---------------------------------------------------------------------------
// Boot block and interrupt binding
// ---------------------------------------------------------------------------

/// Tell the RP2350 Boot ROM about our application.
#[link_section = ".start_block"]
#[used]
pub static IMAGE_DEF: ImageDef = embassy_rp::block::ImageDef::secure_exe();

// Wire the I2C0 peripheral interrupt to Embassy's async handler.
bind_interrupts!(struct Irqs {
    I2C0_IRQ => i2c::InterruptHandler<I2C0>;
});

// ---------------------------------------------------------------------------
// Static storage
// ---------------------------------------------------------------------------

/// Shared I2C0 bus — the OLED reaches it through an I2cDevice wrapper that
/// locks the bus for each transaction, so further devices can be added.
static I2C_BUS: StaticCell<
    Mutex<CriticalSectionRawMutex, I2c<'static, I2C0, i2c::Async>>,
> = StaticCell::new();

/// Draw buffer for one full frame. Static RAM is DMA-reachable on the RP2350.
static DRAW_BUF: StaticCell<[u8; FRAME_BYTES]> = StaticCell::new();

/// GUI state, locked by the GUI task for every handler run.
static SCREEN: StaticCell<
    Mutex<CriticalSectionRawMutex, StatusScreen<'static>>,
> = StaticCell::new();

/// Millisecond tick shared by the tick and GUI tasks.
static TICK: Tick = Tick::new();

// ---------------------------------------------------------------------------
// Type aliases
// ---------------------------------------------------------------------------

/// Concrete I2C type for the OLED display, sharing I2C_BUS.
type OledI2c = I2cDevice<
    'static,
    CriticalSectionRawMutex,
    I2c<'static, I2C0, i2c::Async>,
>;

// ---------------------------------------------------------------------------
// Tasks
// ---------------------------------------------------------------------------

/// Thin wrapper that monomorphises the generic `gui_task` so it can be
/// spawned as a concrete Embassy task.
#[embassy_executor::task]
async fn oled_task(
    driver: Ssd1316<OledI2c>,
    screen: &'static Mutex<CriticalSectionRawMutex, StatusScreen<'static>>,
    tick: &'static Tick,
    config: GuiConfig,
) {
    gui_task(driver, screen, tick, config).await;
}

/// Periodic 1 ms timer feeding the GUI tick. Runs without the GUI mutex.
#[embassy_executor::task]
async fn tick_timer_task(tick: &'static Tick, config: GuiConfig) {
    tick_task(tick, config).await;
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let p = embassy_rp::init(Default::default());
    info!("ssd1316-hw-interface starting");

    // —— Pin assignments ————————————————————————————————————————————————————
    // I2C_SDA → GP20  (p.PIN_20)
    // I2C_SCL → GP21  (p.PIN_21)
    // ———————————————————————————————————————————————————————————————————————

    let i2c = I2c::new_async(
        p.I2C0,
        p.PIN_21, // SCL
        p.PIN_20, // SDA
        Irqs,
        i2c::Config::default(),
    );
    let i2c_bus = I2C_BUS.init(Mutex::new(i2c));

    let oled_driver = Ssd1316::new(I2cDevice::new(i2c_bus), DEFAULT_ADDRESS);

    let draw_buf = DRAW_BUF.init([0u8; FRAME_BYTES]);
    let screen = SCREEN.init(Mutex::new(StatusScreen::new(
        draw_buf,
        "SSD1316",
        ScreenConfig::default(),
    )));

    // —— Spawn tasks ————————————————————————————————————————————————————————

    let gui_config = GuiConfig::default(); // 10 ms handler, 1 ms tick

    spawner.spawn(tick_timer_task(&TICK, gui_config)).unwrap();
    spawner.spawn(oled_task(oled_driver, screen, &TICK, gui_config)).unwrap();

    info!("All tasks spawned");
}
