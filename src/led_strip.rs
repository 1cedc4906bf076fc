//! Frames and output sinks for NeoPixel-style (WS2812) LED strips.
//!
//! A [`Frame1d`] holds one color per LED in strip order. A [`StripSink`] transmits a frame
//! and then holds the line idle for the latch period so the LEDs show it.
//!
//! On the wire every pixel is sent as three channel bytes, red then green then blue,
//! in strip order (see [`Frame1d::channel_bytes`]).
//!
//! Sinks:
//! - [`PioStrip`](pio_strip::PioStrip) drives real LEDs through an RP2040/RP2350 PIO state
//!   machine (target builds).
//! - [`RecordingStrip`](crate::led_strip_host::RecordingStrip) captures the byte stream
//!   for host tests (`host` feature).
//!
//! # Example: Write a Single Frame1d
//!
//! ```rust
//! use digit_matrix::led_strip::{Frame1d, StripSink, colors};
//! use digit_matrix::led_strip_host::RecordingStrip;
//!
//! let mut strip = RecordingStrip::<4>::new();
//! let mut frame = Frame1d::new();
//! for pixel_index in 0..Frame1d::<4>::LEN {
//!     frame[pixel_index] = [colors::BLUE, colors::GRAY][pixel_index % 2];
//! }
//! embassy_futures::block_on(async {
//!     strip.write_frame(&frame).await;
//!     strip.latch().await;
//! });
//! assert_eq!(strip.bytes()[..3], [0, 0, 255]);
//! assert_eq!(strip.latch_count(), 1);
//! ```

/// Predefined RGB color constants from the `smart_leds` crate.
///
/// Common colors include `RED`, `GREEN`, `BLUE`, `YELLOW`, `WHITE`, `BLACK`, `CYAN`, `MAGENTA`, `ORANGE`, `PURPLE`.
#[doc(inline)]
pub use smart_leds::colors;

use core::ops::{Deref, DerefMut};
use smart_leds::RGB8;

// ============================================================================
// Submodules
// ============================================================================

#[cfg(not(feature = "host"))]
pub mod pio_strip;

/// RGB color representation re-exported from the `smart_leds` crate.
pub type Rgb = RGB8;

/// Bytes sent per pixel (red, green, blue).
pub const CHANNELS_PER_PIXEL: usize = 3;

/// [`Rgb`] pixel data for an LED strip, in strip order.
///
/// Frames deref to `[Rgb; N]`, so you can mutate pixels directly before passing them to a
/// [`StripSink`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Frame1d<const N: usize>(pub [Rgb; N]);

impl<const N: usize> Frame1d<N> {
    /// Number of LEDs in this frame.
    pub const LEN: usize = N;

    /// Create a new blank (all black) frame.
    #[must_use]
    pub const fn new() -> Self {
        Self([Rgb::new(0, 0, 0); N])
    }

    /// The channel bytes of this frame in transmission order: for LED 0, 1, ... the red,
    /// green, and blue intensities.
    pub fn channel_bytes(&self) -> impl Iterator<Item = u8> + '_ {
        self.0.iter().flat_map(|color| [color.r, color.g, color.b])
    }

    /// Number of LEDs that are not fully off.
    #[must_use]
    pub fn lit_count(&self) -> usize {
        self.0
            .iter()
            .filter(|color| **color != Rgb::new(0, 0, 0))
            .count()
    }
}

impl<const N: usize> Deref for Frame1d<N> {
    type Target = [Rgb; N];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<const N: usize> DerefMut for Frame1d<N> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<const N: usize> From<[Rgb; N]> for Frame1d<N> {
    fn from(array: [Rgb; N]) -> Self {
        Self(array)
    }
}

impl<const N: usize> From<Frame1d<N>> for [Rgb; N] {
    fn from(frame: Frame1d<N>) -> Self {
        frame.0
    }
}

impl<const N: usize> Default for Frame1d<N> {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// StripSink - where frames go
// ============================================================================

/// Destination for finished frames.
///
/// A sink transmits frames without verification; there is no acknowledgement from the
/// LEDs. Callers send a frame with [`write_frame`](Self::write_frame) and then call
/// [`latch`](Self::latch) before the next frame.
pub trait StripSink<const N: usize> {
    /// Transmit every pixel of `frame` in index order, red, green, blue per pixel.
    async fn write_frame(&mut self, frame: &Frame1d<N>);

    /// Hold the data line idle for the protocol's reset period so the LEDs latch the
    /// frame just written.
    async fn latch(&mut self);
}

impl<const N: usize, S: StripSink<N>> StripSink<N> for &mut S {
    async fn write_frame(&mut self, frame: &Frame1d<N>) {
        (**self).write_frame(frame).await;
    }

    async fn latch(&mut self) {
        (**self).latch().await;
    }
}
