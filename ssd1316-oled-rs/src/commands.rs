//! SSD1316 command set and panel geometry constants.
//!
//! Every I2C write to the controller starts with a control byte that tells
//! it how to interpret the bytes that follow:
//! - [`CONTROL_CMD_SINGLE`]: exactly one command byte follows.
//! - [`CONTROL_CMD_STREAM`]: a run of command (and argument) bytes follows.
//! - [`CONTROL_DATA_STREAM`]: GDDRAM data bytes follow.

// ---------------------------------------------------------------------------
// Bus and panel geometry
// ---------------------------------------------------------------------------

/// Default 7-bit I2C address of the SSD1316 module.
pub const DEFAULT_ADDRESS: u8 = 0x3C;

/// Panel width in pixels.
pub const WIDTH: u16 = 128;

/// Panel height in pixels.
pub const HEIGHT: u16 = 32;

/// Number of GDDRAM columns (one byte per column per page).
pub const COLUMNS: u16 = 128;

/// Number of GDDRAM pages.
pub const PAGES: u16 = 4;

/// Vertical pixels packed into one page byte (LSB = top row).
pub const PIXELS_PER_PAGE: u16 = 8;

/// Bytes in a full frame: `COLUMNS * PAGES`.
pub const FRAME_BYTES: usize = (COLUMNS * PAGES) as usize;

// ---------------------------------------------------------------------------
// Control bytes
// ---------------------------------------------------------------------------

pub const CONTROL_CMD_SINGLE: u8 = 0x80;
pub const CONTROL_CMD_STREAM: u8 = 0x00;
pub const CONTROL_DATA_STREAM: u8 = 0x40;

// ---------------------------------------------------------------------------
// Fundamental commands
// ---------------------------------------------------------------------------

/// Followed by the contrast level.
pub const SET_CONTRAST: u8 = 0x81;
/// Output follows GDDRAM content.
pub const DISPLAY_RAM: u8 = 0xA4;
/// Every pixel lit regardless of GDDRAM.
pub const DISPLAY_ALL_ON: u8 = 0xA5;
pub const DISPLAY_NORMAL: u8 = 0xA6;
pub const DISPLAY_INVERTED: u8 = 0xA7;
pub const DISPLAY_OFF: u8 = 0xAE;
pub const DISPLAY_ON: u8 = 0xAF;

// ---------------------------------------------------------------------------
// Addressing
// ---------------------------------------------------------------------------

/// Followed by the addressing mode.
pub const SET_MEMORY_ADDR_MODE: u8 = 0x20;
/// Column pointer wraps to the next page at the end of the column range.
pub const ADDR_MODE_HORIZONTAL: u8 = 0x00;
/// Followed by start and end column.
pub const SET_COLUMN_RANGE: u8 = 0x21;
/// Followed by start and end page.
pub const SET_PAGE_RANGE: u8 = 0x22;

// ---------------------------------------------------------------------------
// Hardware configuration
// ---------------------------------------------------------------------------

pub const SET_DISPLAY_START_LINE: u8 = 0x40;
/// Column address 127 is mapped to SEG0.
pub const SET_SEGMENT_REMAP: u8 = 0xA1;
pub const SET_MUX_RATIO: u8 = 0xA8;
pub const SET_COM_SCAN_NORMAL: u8 = 0xC0;
/// Scan from COM[N-1] to COM0.
pub const SET_COM_SCAN_REMAP: u8 = 0xC8;
pub const SET_DISPLAY_OFFSET: u8 = 0xD3;
pub const SET_COM_PIN_MAP: u8 = 0xDA;
pub const NOP: u8 = 0xE3;

// ---------------------------------------------------------------------------
// Timing, driving scheme, charge pump
// ---------------------------------------------------------------------------

pub const SET_DISPLAY_CLK_DIV: u8 = 0xD5;
pub const SET_PRECHARGE: u8 = 0xD9;
pub const SET_VCOMH_DESELECT: u8 = 0xDB;
pub const SET_CHARGE_PUMP: u8 = 0x8D;

/// Contrast level written by [`INIT_SEQUENCE`].
pub const DEFAULT_CONTRAST: u8 = 0x45;

/// Controller bring-up, sent once after [`CONTROL_CMD_STREAM`].
///
/// Leaves the panel off; it is switched on with
/// [`Ssd1316::sleep_out()`](crate::Ssd1316::sleep_out).
pub const INIT_SEQUENCE: [u8; 21] = [
    DISPLAY_OFF,
    // clock: divide ratio 1, oscillator frequency 8
    SET_DISPLAY_CLK_DIV,
    0x80,
    SET_VCOMH_DESELECT,
    0x40,
    // GDDRAM mapping: 32 MUX, no shift
    SET_MUX_RATIO,
    (HEIGHT - 1) as u8,
    SET_DISPLAY_OFFSET,
    0x00,
    SET_DISPLAY_START_LINE,
    SET_SEGMENT_REMAP,
    SET_COM_SCAN_REMAP,
    // alternative COM pin configuration, no left/right remap
    SET_COM_PIN_MAP,
    0x12,
    // pre-charge phase 1 and 2: 2 DCLK each
    SET_PRECHARGE,
    0x22,
    // charge pump enabled, 7.5 V
    SET_CHARGE_PUMP,
    0x15,
    SET_CONTRAST,
    DEFAULT_CONTRAST,
    DISPLAY_RAM,
];
