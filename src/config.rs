//! Compile-time configuration: matrix size, timing, and pin assignments.
//!
//! Everything the firmware tunes lives here so it can be changed in one place.
//! Pin numbers are documentation for the wiring; the firmware in `demos/` takes the
//! matching `embassy_rp` peripherals.
//!
//! ```text
//!   LED matrix data  → GPIO 7
//!   Button A (+1)    → GPIO 5   (to GND, internal pull-up)
//!   Button B (-1)    → GPIO 6   (to GND, internal pull-up)
//!   Indicator red    → GPIO 13
//!   Indicator green  → GPIO 12
//!   Indicator blue   → GPIO 11
//! ```

use embassy_time::Duration;

// ============================================================================
// Matrix geometry
// ============================================================================

/// Columns in the LED matrix.
pub const MATRIX_WIDTH: usize = 5;

/// Rows in the LED matrix.
pub const MATRIX_HEIGHT: usize = 5;

/// LEDs on the strip behind the matrix.
pub const LED_COUNT: usize = MATRIX_WIDTH * MATRIX_HEIGHT;

/// Number of displayable states (digits `0..=9`).
pub const TOTAL_STATES: u8 = 10;

// ============================================================================
// Timing
// ============================================================================

/// Minimum time between two accepted presses of the same button.
pub const DEBOUNCE_INTERVAL: Duration = Duration::from_millis(100);

/// Idle-low time after a frame so the WS2812 LEDs latch the new colors.
pub const LATCH_DELAY: Duration = Duration::from_micros(100);

/// Indicator on-time at the start of each loop iteration.
pub const BLINK_ON: Duration = Duration::from_millis(180);

/// Indicator off-time that follows [`BLINK_ON`].
pub const BLINK_OFF: Duration = Duration::from_millis(20);

/// Pause after sampling the buttons.
pub const POLL_INTERVAL: Duration = Duration::from_millis(10);

// ============================================================================
// Pins
// ============================================================================

/// GPIO carrying the WS2812 data signal.
pub const MATRIX_DATA_PIN: u8 = 7;

/// GPIO of button A, which steps the digit up.
pub const INCREMENT_BUTTON_PIN: u8 = 5;

/// GPIO of button B, which steps the digit down.
pub const DECREMENT_BUTTON_PIN: u8 = 6;

/// GPIO of the indicator's red channel.
pub const INDICATOR_RED_PIN: u8 = 13;

/// GPIO of the indicator's green channel.
pub const INDICATOR_GREEN_PIN: u8 = 12;

/// GPIO of the indicator's blue channel.
pub const INDICATOR_BLUE_PIN: u8 = 11;
