//! The ten digit glyphs shown on the 5×5 matrix.
//!
//! Every glyph is a fixed table of colors, row 0 on top. "On" pixels use
//! [`BRIGHTNESS`] in a per-digit channel pattern; "off" pixels are black. Columns 0 and
//! 4 are always dark.
//!
//! # Example
//!
//! ```rust
//! use digit_matrix::glyph::{BRIGHTNESS, Digit, glyph_for};
//! use smart_leds::RGB8;
//!
//! let zero = glyph_for(Digit::ZERO);
//! assert_eq!(zero.lit_count(), 12);
//! assert_eq!(zero.pixel(0, 1)?, RGB8::new(BRIGHTNESS, 0, 0));
//! # Ok::<(), digit_matrix::Error>(())
//! ```

use core::fmt;

use embedded_graphics::prelude::*;
use smart_leds::RGB8;

use crate::config::{MATRIX_HEIGHT, MATRIX_WIDTH, TOTAL_STATES};
use crate::led2d::{Frame2d, rgb8_to_rgb888};
use crate::{Error, Result};

// ============================================================================
// Digit
// ============================================================================

/// A displayable digit, always in `0..TOTAL_STATES`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(not(feature = "host"), derive(defmt::Format))]
pub struct Digit(u8);

impl Digit {
    /// The digit shown at power-up.
    pub const ZERO: Self = Self(0);

    /// Wrap `value` as a digit.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DigitOutOfRange`] when `value` is 10 or more.
    pub const fn new(value: u8) -> Result<Self> {
        if value < TOTAL_STATES {
            Ok(Self(value))
        } else {
            Err(Error::DigitOutOfRange(value))
        }
    }

    /// The digit as a number.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Move one step up (`direction > 0`) or down (`direction < 0`), wrapping around
    /// `0..TOTAL_STATES`. A zero direction leaves the digit unchanged.
    #[must_use]
    pub const fn step(self, direction: i8) -> Self {
        let total = TOTAL_STATES as i16;
        let stepped = (self.0 as i16 + direction as i16).rem_euclid(total);
        #[expect(
            clippy::cast_possible_truncation,
            clippy::cast_sign_loss,
            reason = "rem_euclid keeps the value in 0..TOTAL_STATES"
        )]
        let value = stepped as u8;
        Self(value)
    }

    /// The next digit, wrapping 9 to 0.
    #[must_use]
    pub const fn next(self) -> Self {
        self.step(1)
    }

    /// The previous digit, wrapping 0 to 9.
    #[must_use]
    pub const fn prev(self) -> Self {
        self.step(-1)
    }

    /// Every digit in ascending order.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..TOTAL_STATES).map(Self)
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u8> for Digit {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Digit> for u8 {
    fn from(digit: Digit) -> Self {
        digit.0
    }
}

// ============================================================================
// Colors
// ============================================================================

/// Channel intensity of an "on" pixel (about 5% of full scale).
pub const BRIGHTNESS: u8 = 13;

const B: u8 = BRIGHTNESS;
const OFF: RGB8 = RGB8::new(0, 0, 0);

/// Color of the lit pixels of digit 0.
pub const ZERO_COLOR: RGB8 = RGB8::new(B, 0, 0);
/// Color of the lit pixels of digit 1.
pub const ONE_COLOR: RGB8 = RGB8::new(0, B, 0);
/// Color of the lit pixels of digit 2.
pub const TWO_COLOR: RGB8 = RGB8::new(0, 0, B);
/// Color of the lit pixels of digit 3. The red channel is a fixed 100, not [`BRIGHTNESS`].
pub const THREE_COLOR: RGB8 = RGB8::new(100, B, 0);
/// Color of the lit pixels of digit 4.
pub const FOUR_COLOR: RGB8 = RGB8::new(0, 0, B);
/// Color of the lit pixels of digit 5.
pub const FIVE_COLOR: RGB8 = RGB8::new(0, B, 0);
/// Color of the lit pixels of digit 6.
pub const SIX_COLOR: RGB8 = RGB8::new(0, 0, B);
/// Color of the lit pixels of digit 7.
pub const SEVEN_COLOR: RGB8 = RGB8::new(0, B, B);
/// Color of the lit pixels of digit 8.
pub const EIGHT_COLOR: RGB8 = RGB8::new(B, 0, B);
/// Color of the lit pixels of digit 9.
pub const NINE_COLOR: RGB8 = RGB8::new(B, B, B);

// ============================================================================
// Glyph
// ============================================================================

/// A 5×5 color pattern, stored row-major: `glyph.rows()[row][col]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Glyph([[RGB8; MATRIX_WIDTH]; MATRIX_HEIGHT]);

impl Glyph {
    /// Build a glyph from a `#`/`.` stencil, painting `#` cells with `color`.
    const fn from_stencil(stencil: [&[u8; MATRIX_WIDTH]; MATRIX_HEIGHT], color: RGB8) -> Self {
        let mut rows = [[OFF; MATRIX_WIDTH]; MATRIX_HEIGHT];
        let mut row = 0;
        while row < MATRIX_HEIGHT {
            let mut col = 0;
            while col < MATRIX_WIDTH {
                if stencil[row][col] == b'#' {
                    rows[row][col] = color;
                }
                col += 1;
            }
            row += 1;
        }
        Self(rows)
    }

    /// The color at `(row, col)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CoordinateOutOfRange`] outside the 5×5 grid.
    pub fn pixel(&self, row: usize, col: usize) -> Result<RGB8> {
        self.0
            .get(row)
            .and_then(|cells| cells.get(col))
            .copied()
            .ok_or(Error::CoordinateOutOfRange { row, col })
    }

    /// All rows, top to bottom.
    #[must_use]
    pub const fn rows(&self) -> &[[RGB8; MATRIX_WIDTH]; MATRIX_HEIGHT] {
        &self.0
    }

    /// Number of pixels that are not black.
    #[must_use]
    pub fn lit_count(&self) -> usize {
        self.0.iter().flatten().filter(|color| **color != OFF).count()
    }

    /// Draw the glyph into a fresh panel frame, `(x, y) = (col, row)`.
    #[must_use]
    pub fn to_frame2d(&self) -> Frame2d<MATRIX_WIDTH, MATRIX_HEIGHT> {
        let mut frame = Frame2d::new();
        let pixels = self.0.iter().enumerate().flat_map(|(row, cells)| {
            cells.iter().enumerate().map(move |(col, color)| {
                #[expect(
                    clippy::cast_possible_truncation,
                    clippy::cast_possible_wrap,
                    reason = "glyph coordinates are below 5"
                )]
                let point = Point::new(col as i32, row as i32);
                Pixel(point, rgb8_to_rgb888(*color))
            })
        });
        let Ok(()) = frame.draw_iter(pixels);
        frame
    }
}

impl Default for Glyph {
    fn default() -> Self {
        Self([[OFF; MATRIX_WIDTH]; MATRIX_HEIGHT])
    }
}

/// Glyphs for digits 0 through 9, in order.
pub static GLYPHS: [Glyph; TOTAL_STATES as usize] = [
    Glyph::from_stencil(
        [b".###.", b".#.#.", b".#.#.", b".#.#.", b".###."],
        ZERO_COLOR,
    ),
    Glyph::from_stencil(
        [b"..#..", b"..#..", b"..#..", b"..#..", b"..#.."],
        ONE_COLOR,
    ),
    Glyph::from_stencil(
        [b".###.", b"...#.", b".###.", b".#...", b".###."],
        TWO_COLOR,
    ),
    Glyph::from_stencil(
        [b".###.", b"...#.", b".###.", b"...#.", b".###."],
        THREE_COLOR,
    ),
    Glyph::from_stencil(
        [b".#.#.", b".#.#.", b".###.", b"...#.", b"...#."],
        FOUR_COLOR,
    ),
    Glyph::from_stencil(
        [b".###.", b".#...", b".###.", b"...#.", b".###."],
        FIVE_COLOR,
    ),
    Glyph::from_stencil(
        [b".###.", b".#...", b".###.", b".#.#.", b".###."],
        SIX_COLOR,
    ),
    Glyph::from_stencil(
        [b".###.", b"...#.", b"...#.", b"...#.", b"...#."],
        SEVEN_COLOR,
    ),
    Glyph::from_stencil(
        [b".###.", b".#.#.", b".###.", b".#.#.", b".###."],
        EIGHT_COLOR,
    ),
    Glyph::from_stencil(
        [b".###.", b".#.#.", b".###.", b"...#.", b".###."],
        NINE_COLOR,
    ),
];

/// The glyph for `digit`.
#[must_use]
pub fn glyph_for(digit: Digit) -> &'static Glyph {
    &GLYPHS[usize::from(digit.0)]
}

/// The glyph for a raw digit value.
///
/// # Errors
///
/// Returns [`Error::DigitOutOfRange`] when `value` is 10 or more.
pub fn glyph_for_value(value: u8) -> Result<&'static Glyph> {
    Digit::new(value).map(glyph_for)
}
