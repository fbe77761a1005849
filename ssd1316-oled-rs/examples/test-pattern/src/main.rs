//! Test pattern example
//!
//! Standalone hardware demonstration that exercises [`Ssd1316`] directly
//! — no GUI task, no tick timer. Draws a sweeping bar per page and a frame
//! border through the driver's `set_px` callback, then flushes the full
//! panel, verifying bring-up, page mapping and the address window on real
//! hardware.
//!
//! # Wiring
//!
//! | Signal    | Pico 2 Pin | Notes           |
//! |-----------|------------|-----------------|
//! | I2C0 SDA  | GP20       |                 |
//! | I2C0 SCL  | GP21       |                 |
//! | OLED VCC  | 3V3        |                 |
//! | OLED GND  | GND        |                 |
//!
//! # Pattern Geometry
//!
//! | Property        | Value                                        |
//! |-----------------|----------------------------------------------|
//! | Bar row height  | 8 px (one GDDRAM page per bar)               |
//! | Bar fill height | 6 px (1 px margin top and bottom per row)    |
//! | Bar y origin    | `page * 8 + 1`                               |
//! | Bar pixel width | `(step + page * 32) % 128`                   |

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp as hal;
use embassy_rp::bind_interrupts;
use embassy_rp::block::ImageDef;
use embassy_rp::i2c::{self, I2c};
use embassy_rp::peripherals::I2C0;
use embassy_time::{Duration, Timer};
use {defmt_rtt as _, panic_probe as _};

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};

use ssd1316_oled_rs::{Area, Canvas, Ssd1316, DEFAULT_ADDRESS, FRAME_BYTES};

/// Tell the Boot ROM about our application.
#[link_section = ".start_block"]
#[used]
pub static IMAGE_DEF: ImageDef = hal::block::ImageDef::secure_exe();

// Wire the I2C0 interrupt to Embassy's handler.
bind_interrupts!(struct Irqs {
    I2C0_IRQ => i2c::InterruptHandler<I2C0>;
});

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    let p = embassy_rp::init(Default::default());
    info!("Test pattern example starting");

    let i2c = I2c::new_async(
        p.I2C0,
        p.PIN_21, // SCL
        p.PIN_20, // SDA
        Irqs,
        i2c::Config::default(),
    );

    let mut oled = Ssd1316::new(i2c, DEFAULT_ADDRESS);

    oled.init().await.expect("SSD1316 init failed");
    oled.sleep_out().await.expect("SSD1316 display-on failed");
    info!("SSD1316 initialised");

    let mut frame = [0u8; FRAME_BYTES];
    let mut step: u32 = 0;

    loop {
        {
            let mut canvas = Canvas::new(&oled, &mut frame);
            canvas.clear(BinaryColor::Off).ok();

            Rectangle::new(Point::zero(), Size::new(128, 32))
                .into_styled(PrimitiveStyle::with_stroke(BinaryColor::On, 1))
                .draw(&mut canvas)
                .ok();

            for page in 0..4u32 {
                let width = (step + page * 32) % 128;
                Rectangle::new(Point::new(0, (page * 8 + 1) as i32), Size::new(width, 6))
                    .into_styled(PrimitiveStyle::with_fill(BinaryColor::On))
                    .draw(&mut canvas)
                    .ok();
            }
        }

        if let Err(e) = oled.flush(&Area::full_screen(), &frame).await {
            error!("Flush failed: {}", e);
        }

        step = (step + 1) % 128;

        Timer::after(Duration::from_millis(33)).await; // ~30 Hz
    }
}
