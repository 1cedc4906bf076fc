//! The 5×5 digit matrix: coordinate mapping, frame buffer, and flushing.
//!
//! The LED strip snakes across the rows starting at the bottom-right corner, so LED 0 is
//! `(row 4, col 4)` and LED 24 is `(row 0, col 0)`.
//!
//! ```text
//!   LED24 LED23 LED22 LED21 LED20
//!   LED15 LED16 LED17 LED18 LED19
//!   LED14 LED13 LED12 LED11 LED10
//!   LED5  LED6  LED7  LED8  LED9
//!   LED4  LED3  LED2  LED1  LED0
//! ```
//!
//! # Example
//!
//! ```rust
//! use digit_matrix::glyph::Digit;
//! use digit_matrix::led_strip_host::RecordingStrip;
//! use digit_matrix::matrix::{DigitMatrix, led_index};
//!
//! assert_eq!(led_index(0, 0)?, 24);
//! assert_eq!(led_index(1, 0)?, 15);
//!
//! let mut matrix = DigitMatrix::new(RecordingStrip::<25>::new());
//! embassy_futures::block_on(matrix.show(Digit::new(7)?));
//! assert_eq!(matrix.sink().bytes().len(), 75);
//! # Ok::<(), digit_matrix::Error>(())
//! ```

use crate::config::{LED_COUNT, MATRIX_HEIGHT, MATRIX_WIDTH};
use crate::glyph::{Digit, glyph_for};
use crate::led2d::layout::LedLayout;
use crate::led_strip::{Frame1d, Rgb, StripSink};
use crate::{Error, Result};

/// Physical wiring of the matrix, in `(col, row)` cells per LED.
pub const DIGIT_LAYOUT: LedLayout<LED_COUNT, MATRIX_WIDTH, MATRIX_HEIGHT> =
    LedLayout::serpentine_row_major().rotate_180();

const INDEX_BY_CELL: [u16; LED_COUNT] = DIGIT_LAYOUT.xy_to_index();

/// The strip index of the LED at `(row, col)`.
///
/// # Errors
///
/// Returns [`Error::CoordinateOutOfRange`] unless both `row` and `col` are below 5.
pub fn led_index(row: usize, col: usize) -> Result<usize> {
    if row >= MATRIX_HEIGHT || col >= MATRIX_WIDTH {
        return Err(Error::CoordinateOutOfRange { row, col });
    }
    Ok(usize::from(INDEX_BY_CELL[row * MATRIX_WIDTH + col]))
}

/// Frame buffer for the digit matrix plus the strip it is flushed to.
///
/// The buffer is kept in strip order, so [`flush`](Self::flush) sends it unchanged.
pub struct DigitMatrix<S> {
    frame: Frame1d<LED_COUNT>,
    sink: S,
}

impl<S: StripSink<LED_COUNT>> DigitMatrix<S> {
    /// Create a matrix with a dark buffer. Nothing is sent until the first flush.
    pub const fn new(sink: S) -> Self {
        Self {
            frame: Frame1d::new(),
            sink,
        }
    }

    /// Write the glyph for `digit` into the buffer, every cell through [`led_index`].
    pub fn render_digit(&mut self, digit: Digit) {
        let glyph = glyph_for(digit);
        for (row, cells) in glyph.rows().iter().enumerate() {
            for (col, color) in cells.iter().enumerate() {
                self.set_cell(row, col, *color);
            }
        }
    }

    /// Send the whole buffer to the strip and wait for the LEDs to latch it.
    pub async fn flush(&mut self) {
        self.sink.write_frame(&self.frame).await;
        self.sink.latch().await;
    }

    /// Render `digit` and flush it.
    pub async fn show(&mut self, digit: Digit) {
        self.render_digit(digit);
        self.flush().await;
    }

    /// Turn every LED off.
    pub async fn clear(&mut self) {
        self.frame = Frame1d::new();
        self.flush().await;
    }

    /// The buffer as it will be (or was last) sent.
    #[must_use]
    pub const fn frame(&self) -> &Frame1d<LED_COUNT> {
        &self.frame
    }

    /// The strip this matrix flushes to.
    #[must_use]
    pub const fn sink(&self) -> &S {
        &self.sink
    }

    /// Give back the strip.
    pub fn into_sink(self) -> S {
        self.sink
    }

    fn set_cell(&mut self, row: usize, col: usize, color: Rgb) {
        // Glyph rows and columns come from fixed 5×5 arrays.
        if let Ok(index) = led_index(row, col) {
            self.frame[index] = color;
        }
    }
}
