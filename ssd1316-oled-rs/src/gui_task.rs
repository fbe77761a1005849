//! GUI render loop and tick timer tasks.
//!
//! Both are regular `async fn`s — **not** Embassy `#[task]`s. Callers create
//! thin, concrete task wrappers, since Embassy tasks cannot be generic:
//!
//! ```ignore
//! #[embassy_executor::task]
//! async fn gui(
//!     driver: Ssd1316<MyConcreteI2cType>,
//!     screen: &'static Mutex<CriticalSectionRawMutex, StatusScreen<'static>>,
//!     tick: &'static Tick,
//!     config: GuiConfig,
//! ) {
//!     gui_task(driver, screen, tick, config).await;
//! }
//! ```

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::mutex::Mutex;
use embassy_time::{Duration, Ticker, Timer};
use embedded_hal_async::i2c::I2c;

use crate::driver::Ssd1316;
use crate::error::OledError;
use crate::gui::{Gui, GuiConfig, Tick};

/// Periodic tick timer: advances `tick` by `tick_period_ms` every period.
///
/// Never touches the GUI mutex.
pub async fn tick_task(tick: &'static Tick, config: GuiConfig) {
    let config = config.sanitized();
    let mut ticker = Ticker::every(Duration::from_millis(config.tick_period_ms as u64));

    loop {
        ticker.next().await;
        tick.inc(config.tick_period_ms);
    }
}

/// Bring up the panel, then run the GUI handler periodically.
///
/// # Control flow
///
/// 1. Send the controller bring-up sequence and switch the panel on.
/// 2. Loop every `config.handler_period_ms`:
///    - Lock `gui`.
///    - Run [`Gui::task_handler`] with the current tick; this renders and,
///      when the frame changed, flushes it over I2C.
///    - Release the mutex.
///
/// # Errors
///
/// * Bring-up failure: logs the error and **returns** (task exits).
/// * Handler / flush failure: logs the error and continues to the next cycle.
pub async fn gui_task<I2C, G>(
    mut driver: Ssd1316<I2C>,
    gui: &'static Mutex<CriticalSectionRawMutex, G>,
    tick: &'static Tick,
    config: GuiConfig,
) where
    I2C: I2c,
    G: Gui,
{
    if let Err(_e) = bring_up(&mut driver).await {
        #[cfg(feature = "defmt")]
        defmt::error!("SSD1316 bring-up failed: {}", _e);
        return;
    }

    #[cfg(feature = "defmt")]
    defmt::info!("SSD1316 initialised");

    let period = Duration::from_millis(config.sanitized().handler_period_ms);

    loop {
        Timer::after(period).await;

        if let Err(_e) = run_cycle(gui, &mut driver, tick).await {
            #[cfg(feature = "defmt")]
            defmt::error!("GUI handler failed: {}", _e);
        }
    }
}

/// Controller init followed by display-on. Stops at the first failure.
pub(crate) async fn bring_up<I2C: I2c>(driver: &mut Ssd1316<I2C>) -> Result<(), OledError> {
    driver.init().await?;
    driver.sleep_out().await
}

/// One handler run with the GUI mutex held for its duration.
pub(crate) async fn run_cycle<I2C, G>(
    gui: &Mutex<CriticalSectionRawMutex, G>,
    driver: &mut Ssd1316<I2C>,
    tick: &Tick,
) -> Result<(), OledError>
where
    I2C: I2c,
    G: Gui,
{
    let mut handler = gui.lock().await;
    handler.task_handler(driver, tick.now_ms()).await
}

#[cfg(all(test, feature = "task"))]
mod tests {
    extern crate std;

    use super::*;
    use crate::commands::{DEFAULT_ADDRESS as ADDR, FRAME_BYTES, INIT_SEQUENCE};
    use crate::gui::StatusScreen;
    use crate::layout::ScreenConfig;
    use embedded_hal_async::i2c::{ErrorKind, NoAcknowledgeSource};
    use embedded_hal_mock::eh1::i2c::{Mock as I2cMock, Transaction as I2cTransaction};
    use std::vec;

    fn block_on<F: core::future::Future>(f: F) -> F::Output {
        tokio::runtime::Builder::new_current_thread()
            .build()
            .unwrap()
            .block_on(f)
    }

    fn init_write() -> I2cTransaction {
        let mut bytes = vec![0x00];
        bytes.extend_from_slice(&INIT_SEQUENCE);
        I2cTransaction::write(ADDR, bytes)
    }

    fn display_on() -> I2cTransaction {
        I2cTransaction::write(ADDR, vec![0x80, 0xAF])
    }

    fn full_window() -> I2cTransaction {
        I2cTransaction::write(ADDR, vec![0x00, 0x20, 0x00, 0x21, 0, 127, 0x22, 0, 3])
    }

    #[test]
    fn bring_up_switches_panel_on_after_init() {
        let mut i2c = I2cMock::new(&[init_write(), display_on()]);
        let mut driver = Ssd1316::new(i2c.clone(), ADDR);

        block_on(bring_up(&mut driver)).unwrap();
        assert!(driver.is_initialized());
        i2c.done();
    }

    #[test]
    fn failed_init_skips_display_on() {
        let nack = ErrorKind::NoAcknowledge(NoAcknowledgeSource::Address);
        let mut i2c = I2cMock::new(&[init_write().with_error(nack)]);
        let mut driver = Ssd1316::new(i2c.clone(), ADDR);

        assert_eq!(block_on(bring_up(&mut driver)), Err(OledError::I2c(nack)));
        assert!(!driver.is_initialized());
        i2c.done();
    }

    #[test]
    fn handler_error_is_retried_next_cycle_and_releases_mutex() {
        let frame_data = I2cTransaction::write(ADDR, vec![0u8; FRAME_BYTES]);
        let mut i2c = I2cMock::new(&[
            init_write(),
            display_on(),
            // first cycle: window write is NACKed
            full_window().with_error(ErrorKind::NoAcknowledge(NoAcknowledgeSource::Data)),
            // second cycle: the same frame goes out in full
            full_window(),
            I2cTransaction::transaction_start(ADDR),
            I2cTransaction::write(ADDR, vec![0x40]),
            frame_data,
            I2cTransaction::transaction_end(ADDR),
        ]);
        let mut driver = Ssd1316::new(i2c.clone(), ADDR);
        block_on(bring_up(&mut driver)).unwrap();

        let mut buf = [0u8; FRAME_BYTES];
        let gui = Mutex::<CriticalSectionRawMutex, _>::new(StatusScreen::new(
            &mut buf,
            "",
            ScreenConfig {
                // rows moved off-panel so the frame stays blank
                title_y: -20,
                uptime_y: -20,
                ..ScreenConfig::default()
            },
        ));
        let tick = Tick::new();

        assert!(matches!(
            block_on(run_cycle(&gui, &mut driver, &tick)),
            Err(OledError::I2c(ErrorKind::NoAcknowledge(_)))
        ));
        assert!(gui.try_lock().is_ok());

        tick.inc(10);
        block_on(run_cycle(&gui, &mut driver, &tick)).unwrap();
        assert!(gui.try_lock().is_ok());
        assert!(gui.try_lock().unwrap().last_flushed().is_some());
        i2c.done();
    }
}
