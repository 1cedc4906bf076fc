//! Row-major frames for rectangular NeoPixel-style (WS2812) LED panels.
//!
//! A [`Frame2d`] stores colors by `(x, y)` position. [`Frame2d::to_strip_frame`] uses an
//! [`LedLayout`] to reorder it into the physical strip order expected by
//! [`led_strip`](mod@crate::led_strip).
//!
//! For custom graphics, draw into a [`Frame2d`] with the
//! [`embedded-graphics`](https://docs.rs/embedded-graphics) API.
//!
//! # Example
//!
//! ```rust
//! use digit_matrix::led2d::{Frame2d, layout::LedLayout};
//! use digit_matrix::led_strip::colors;
//! use embedded_graphics::{pixelcolor::Rgb888, prelude::*};
//!
//! const LAYOUT: LedLayout<25, 5, 5> = LedLayout::serpentine_row_major().rotate_180();
//!
//! let mut frame = Frame2d::<5, 5>::new();
//! Pixel(Point::new(0, 0), Rgb888::RED)
//!     .draw(&mut frame)
//!     .expect("drawing into a frame cannot fail");
//! assert_eq!(frame[(0, 0)], colors::RED);
//!
//! // The top-left cell is the last LED on the strip.
//! let strip_frame = frame.to_strip_frame(&LAYOUT);
//! assert_eq!(strip_frame[24], colors::RED);
//! ```

pub mod layout;

use core::{
    convert::Infallible,
    ops::{Deref, DerefMut, Index, IndexMut},
};
use embedded_graphics::{draw_target::DrawTarget, pixelcolor::Rgb888, prelude::*};
use smart_leds::RGB8;

use crate::led_strip::Frame1d;
use layout::LedLayout;

/// Convert RGB8 (smart-leds) to Rgb888 (embedded-graphics).
#[must_use]
pub const fn rgb8_to_rgb888(color: RGB8) -> Rgb888 {
    Rgb888::new(color.r, color.g, color.b)
}

/// Convert Rgb888 (embedded-graphics) to RGB8 (smart-leds).
#[must_use]
pub fn rgb888_to_rgb8(color: Rgb888) -> RGB8 {
    RGB8::new(color.r(), color.g(), color.b())
}

/// 2D pixel array used for panel graphics.
///
/// Stored in row-major order: `frame.0[row][col]`, also reachable as `frame[(col, row)]`.
/// Implements [`DrawTarget`] so `embedded-graphics` primitives and text can be drawn into it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Frame2d<const W: usize, const H: usize>(pub [[RGB8; W]; H]);

impl<const W: usize, const H: usize> Frame2d<W, H> {
    /// Frame2d width in pixels (columns).
    pub const WIDTH: usize = W;
    /// Frame2d height in pixels (rows).
    pub const HEIGHT: usize = H;
    /// Total number of pixels (WIDTH × HEIGHT).
    pub const LEN: usize = W * H;

    /// Create a new blank (all black) frame.
    #[must_use]
    pub const fn new() -> Self {
        Self([[RGB8::new(0, 0, 0); W]; H])
    }

    /// Reorder this frame into strip order using `led_layout`.
    ///
    /// LED `i` of the result takes the color of the cell listed at entry `i` of the layout.
    #[must_use]
    pub fn to_strip_frame<const N: usize>(&self, led_layout: &LedLayout<N, W, H>) -> Frame1d<N> {
        let mut strip_frame = Frame1d::new();
        for (led, &(col, row)) in strip_frame.iter_mut().zip(led_layout.index_to_xy()) {
            *led = self[(usize::from(col), usize::from(row))];
        }
        strip_frame
    }

    /// Inverse of [`to_strip_frame`](Self::to_strip_frame): place each LED's color at its
    /// panel cell.
    #[must_use]
    pub fn from_strip_frame<const N: usize>(
        strip_frame: &Frame1d<N>,
        led_layout: &LedLayout<N, W, H>,
    ) -> Self {
        let mut frame = Self::new();
        for (led, &(col, row)) in strip_frame.iter().zip(led_layout.index_to_xy()) {
            frame[(usize::from(col), usize::from(row))] = *led;
        }
        frame
    }
}

impl<const W: usize, const H: usize> Deref for Frame2d<W, H> {
    type Target = [[RGB8; W]; H];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<const W: usize, const H: usize> DerefMut for Frame2d<W, H> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<const W: usize, const H: usize> Index<(usize, usize)> for Frame2d<W, H> {
    type Output = RGB8;

    fn index(&self, (x_index, y_index): (usize, usize)) -> &Self::Output {
        assert!(x_index < W, "x_index must be within width");
        assert!(y_index < H, "y_index must be within height");
        &self.0[y_index][x_index]
    }
}

impl<const W: usize, const H: usize> IndexMut<(usize, usize)> for Frame2d<W, H> {
    fn index_mut(&mut self, (x_index, y_index): (usize, usize)) -> &mut Self::Output {
        assert!(x_index < W, "x_index must be within width");
        assert!(y_index < H, "y_index must be within height");
        &mut self.0[y_index][x_index]
    }
}

impl<const W: usize, const H: usize> From<[[RGB8; W]; H]> for Frame2d<W, H> {
    fn from(array: [[RGB8; W]; H]) -> Self {
        Self(array)
    }
}

impl<const W: usize, const H: usize> Default for Frame2d<W, H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const W: usize, const H: usize> OriginDimensions for Frame2d<W, H> {
    fn size(&self) -> Size {
        Size::new(W as u32, H as u32)
    }
}

impl<const W: usize, const H: usize> DrawTarget for Frame2d<W, H> {
    type Color = Rgb888;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> core::result::Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(coord, color) in pixels {
            let (Ok(x_index), Ok(y_index)) = (usize::try_from(coord.x), usize::try_from(coord.y))
            else {
                continue;
            };
            if x_index < W && y_index < H {
                self.0[y_index][x_index] = rgb888_to_rgb8(color);
            }
        }
        Ok(())
    }
}
