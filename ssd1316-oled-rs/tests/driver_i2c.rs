//! Bus-level tests for the SSD1316 driver.
//!
//! Each test scripts the exact I2C traffic the controller should see and
//! checks the driver produces it, byte for byte.
//!
//! Run with: cargo test --test driver_i2c

use embedded_hal_async::i2c::{ErrorKind, NoAcknowledgeSource};
use embedded_hal_mock::eh1::i2c::{Mock as I2cMock, Transaction as I2cTransaction};
use ssd1316_oled_rs::{Area, DisplayDriver, OledError, Ssd1316, FRAME_BYTES};

const ADDR: u8 = 0x3C;

/// Control byte + bring-up sequence, as written out in the datasheet order.
const INIT_BYTES: [u8; 22] = [
    0x00, // command stream
    0xAE, // display off
    0xD5, 0x80, // clock divide
    0xDB, 0x40, // VCOMH deselect
    0xA8, 0x1F, // 32 MUX
    0xD3, 0x00, // no offset
    0x40, // start line 0
    0xA1, // segment remap
    0xC8, // COM scan remapped
    0xDA, 0x12, // COM pins
    0xD9, 0x22, // pre-charge
    0x8D, 0x15, // charge pump
    0x81, 0x45, // contrast
    0xA4, // display from RAM
];

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// The two writes of one GDDRAM data stream inside a single transaction.
fn data_stream(data: &[u8]) -> [I2cTransaction; 4] {
    [
        I2cTransaction::transaction_start(ADDR),
        I2cTransaction::write(ADDR, vec![0x40]),
        I2cTransaction::write(ADDR, data.to_vec()),
        I2cTransaction::transaction_end(ADDR),
    ]
}

fn window(x1: u8, x2: u8, p1: u8, p2: u8) -> I2cTransaction {
    I2cTransaction::write(ADDR, vec![0x00, 0x20, 0x00, 0x21, x1, x2, 0x22, p1, p2])
}

/// Driver that has already been through `init()`.
async fn initialised(expectations: &[I2cTransaction]) -> (Ssd1316<I2cMock>, I2cMock) {
    let mut all = vec![I2cTransaction::write(ADDR, INIT_BYTES.to_vec())];
    all.extend_from_slice(expectations);

    let i2c = I2cMock::new(&all);
    let mut oled = Ssd1316::new(i2c.clone(), ADDR);
    oled.init().await.unwrap();
    (oled, i2c)
}

// ---------------------------------------------------------------------------
// Bring-up
// ---------------------------------------------------------------------------

#[tokio::test]
async fn new_generates_no_traffic() {
    let mut i2c = I2cMock::new(&[]);
    let oled = Ssd1316::new(i2c.clone(), ADDR);
    assert!(!oled.is_initialized());
    i2c.done();
}

#[tokio::test]
async fn init_sends_sequence_in_one_write() {
    let mut i2c = I2cMock::new(&[I2cTransaction::write(ADDR, INIT_BYTES.to_vec())]);
    let mut oled = Ssd1316::new(i2c.clone(), ADDR);

    oled.init().await.unwrap();
    assert!(oled.is_initialized());
    i2c.done();
}

#[tokio::test]
async fn init_propagates_bus_error() {
    let mut i2c = I2cMock::new(&[
        I2cTransaction::write(ADDR, INIT_BYTES.to_vec()).with_error(ErrorKind::Other)
    ]);
    let mut oled = Ssd1316::new(i2c.clone(), ADDR);

    assert_eq!(oled.init().await, Err(OledError::I2c(ErrorKind::Other)));
    assert!(!oled.is_initialized());
    i2c.done();
}

#[tokio::test]
async fn custom_address_is_used() {
    let mut i2c = I2cMock::new(&[I2cTransaction::write(0x3D, vec![0x80, 0xAF])]);
    let mut oled = Ssd1316::new(i2c.clone(), 0x3D);
    oled.sleep_out().await.unwrap();
    i2c.done();
}

// ---------------------------------------------------------------------------
// Flush
// ---------------------------------------------------------------------------

#[tokio::test]
async fn flush_full_screen_streams_whole_frame() {
    let frame: Vec<u8> = (0..FRAME_BYTES).map(|i| i as u8).collect();

    let mut expected = vec![window(0, 127, 0, 3)];
    expected.extend(data_stream(&frame));
    let (mut oled, mut i2c) = initialised(&expected).await;

    oled.flush(&Area::full_screen(), &frame).await.unwrap();
    i2c.done();
}

#[tokio::test]
async fn flush_single_page_sends_one_page_of_data() {
    let frame = [0xA5u8; FRAME_BYTES];

    let mut expected = vec![window(0, 127, 1, 1)];
    expected.extend(data_stream(&frame[..128]));
    let (mut oled, mut i2c) = initialised(&expected).await;

    oled.flush(&Area::new(0, 8, 127, 15), &frame).await.unwrap();
    i2c.done();
}

#[tokio::test]
async fn flush_narrow_window_sizes_data_to_columns() {
    let buf = [0x0Fu8; 32];

    // 16 columns × pages 0..=1
    let mut expected = vec![window(16, 31, 0, 1)];
    expected.extend(data_stream(&buf));
    let (mut oled, mut i2c) = initialised(&expected).await;

    oled.flush(&Area::new(16, 7, 31, 8), &buf).await.unwrap();
    i2c.done();
}

#[tokio::test]
async fn flush_before_init_is_rejected() {
    let mut i2c = I2cMock::new(&[]);
    let mut oled = Ssd1316::new(i2c.clone(), ADDR);

    let frame = [0u8; FRAME_BYTES];
    assert_eq!(
        oled.flush(&Area::full_screen(), &frame).await,
        Err(OledError::NotInitialized)
    );
    i2c.done();
}

#[tokio::test]
async fn flush_outside_panel_is_rejected() {
    let (mut oled, mut i2c) = initialised(&[]).await;
    let frame = [0u8; FRAME_BYTES];

    assert_eq!(
        oled.flush(&Area::new(0, 0, 127, 32), &frame).await,
        Err(OledError::AreaOutOfBounds)
    );
    assert_eq!(
        oled.flush(&Area::new(64, 0, 10, 31), &frame).await,
        Err(OledError::AreaOutOfBounds)
    );
    i2c.done();
}

#[tokio::test]
async fn flush_short_buffer_is_rejected() {
    let (mut oled, mut i2c) = initialised(&[]).await;
    let short = [0u8; FRAME_BYTES - 1];

    assert_eq!(
        oled.flush(&Area::full_screen(), &short).await,
        Err(OledError::BufferTooSmall)
    );
    i2c.done();
}

#[tokio::test]
async fn flush_window_error_stops_before_data() {
    let frame = [0u8; FRAME_BYTES];
    let (mut oled, mut i2c) = initialised(&[window(0, 127, 0, 3).with_error(
        ErrorKind::NoAcknowledge(NoAcknowledgeSource::Address),
    )])
    .await;

    let result = oled.flush(&Area::full_screen(), &frame).await;
    assert!(matches!(
        result,
        Err(OledError::I2c(ErrorKind::NoAcknowledge(_)))
    ));
    i2c.done();
}

// ---------------------------------------------------------------------------
// Display control
// ---------------------------------------------------------------------------

#[tokio::test]
async fn sleep_in_and_out_use_single_command_control_byte() {
    let mut i2c = I2cMock::new(&[
        I2cTransaction::write(ADDR, vec![0x80, 0xAE]),
        I2cTransaction::write(ADDR, vec![0x80, 0xAF]),
    ]);
    let mut oled = Ssd1316::new(i2c.clone(), ADDR);

    oled.sleep_in().await.unwrap();
    oled.sleep_out().await.unwrap();
    i2c.done();
}

#[tokio::test]
async fn contrast_and_inversion() {
    let mut i2c = I2cMock::new(&[
        I2cTransaction::write(ADDR, vec![0x00, 0x81, 0xCF]),
        I2cTransaction::write(ADDR, vec![0x80, 0xA7]),
        I2cTransaction::write(ADDR, vec![0x80, 0xA6]),
    ]);
    let mut oled = Ssd1316::new(i2c.clone(), ADDR);

    oled.set_contrast(0xCF).await.unwrap();
    oled.set_inverted(true).await.unwrap();
    oled.set_inverted(false).await.unwrap();
    i2c.done();
}

// ---------------------------------------------------------------------------
// Callback contract
// ---------------------------------------------------------------------------

#[tokio::test]
async fn rounder_widens_to_panel_and_flush_goes_through_trait() {
    let frame = [0xFFu8; FRAME_BYTES];
    let mut expected = vec![window(0, 127, 0, 3)];
    expected.extend(data_stream(&frame));
    let (mut oled, mut i2c) = initialised(&expected).await;

    assert_eq!(oled.resolution(), (128, 32));
    let area = oled.rounder(Area::new(40, 9, 41, 10));
    assert_eq!(area, Area::full_screen());

    DisplayDriver::flush(&mut oled, &area, &frame).await.unwrap();
    i2c.done();
}

#[tokio::test]
async fn release_returns_bus() {
    let i2c = I2cMock::new(&[]);
    let oled = Ssd1316::new(i2c, ADDR);
    let mut i2c = oled.release();
    i2c.done();
}
