//! A debounced two-button digit counter shown on a 5×5 WS2812 matrix, for Pico 1 and 2.
//!
//! Button A steps the digit up, button B steps it down, both wrapping around `0..=9`.
//! Each accepted press renders the digit's [glyph](glyph) into the matrix frame buffer
//! and flushes it to the LED strip.
//!
//! Layers, bottom up:
//!
//! - [`led2d::layout`]: compile-time panel wiring ([`LedLayout`](led2d::layout::LedLayout)).
//! - [`led_strip`]: strip frames and the [`StripSink`](led_strip::StripSink) output seam.
//! - [`glyph`]: the ten digit patterns and the [`Digit`](glyph::Digit) type.
//! - [`matrix`]: coordinate mapping, frame buffer, and flushing.
//! - [`counter`]: per-button time-based debouncing.
//! - [`app`]: the state owned by the control loop.
//! - [`digit_log`]: the text line reported for every digit shown.
//! - [`button`], [`indicator`]: GPIO inputs and the status LED.
//!
//! The firmware in `demos/digit_counter.rs` wires these to the board.
//!
//! # Glossary
//!
//! - **PIO ([Programmable I/O](https://medium.com/data-science/nine-pico-pio-wats-with-rust-part-1-9d062067dc25)):** generates the WS2812 bitstream. Pico 1 has 2. Pico 2 has 3.
//! - **DMA ([Direct Memory Access](https://en.wikipedia.org/wiki/Direct_memory_access)):** feeds the PIO without the CPU. Both Pico 1 and 2 have 12 channels.
//! - **Latch:** the idle-low period after a frame that makes the LEDs show it.
#![cfg_attr(not(feature = "host"), no_std)]
#![cfg_attr(not(feature = "host"), no_main)]
#![allow(async_fn_in_trait, reason = "single-threaded embedded")]

// Compile-time checks: exactly one board must be selected (unless testing with host feature)
#[cfg(all(not(any(feature = "pico1", feature = "pico2")), not(feature = "host")))]
compile_error!("Must enable exactly one board feature: 'pico1' or 'pico2'");

#[cfg(all(feature = "pico1", feature = "pico2"))]
compile_error!("Cannot enable both 'pico1' and 'pico2' features simultaneously");

#[cfg(all(not(feature = "arm"), not(feature = "host")))]
compile_error!("Target builds need the 'arm' feature");

pub mod app;
pub mod button;
pub mod config;
pub mod counter;
pub mod digit_log;
mod error;
pub mod glyph;
pub mod indicator;
pub mod led2d;
pub mod led_strip;
#[cfg(feature = "host")]
pub mod led_strip_host;
pub mod matrix;
#[cfg(feature = "host")]
pub mod to_png;

// Re-export error types and result (used throughout)
pub use crate::error::{Error, Result};
