#![cfg(feature = "host")]
//! Host stand-in for the LED strip: records what would have been transmitted.

use std::vec::Vec;

use crate::led_strip::{CHANNELS_PER_PIXEL, Frame1d, StripSink};

/// A [`StripSink`] that records every channel byte and latch instead of driving LEDs.
#[derive(Clone, Debug, Default)]
pub struct RecordingStrip<const N: usize> {
    bytes: Vec<u8>,
    frames: Vec<Frame1d<N>>,
    latch_count: usize,
}

impl<const N: usize> RecordingStrip<N> {
    /// Create an empty recorder.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            bytes: Vec::new(),
            frames: Vec::new(),
            latch_count: 0,
        }
    }

    /// Every channel byte written so far, in transmission order.
    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Every frame written so far.
    #[must_use]
    pub fn frames(&self) -> &[Frame1d<N>] {
        &self.frames
    }

    /// The most recently written frame, if any.
    #[must_use]
    pub fn last_frame(&self) -> Option<&Frame1d<N>> {
        self.frames.last()
    }

    /// Number of latch periods observed.
    #[must_use]
    pub const fn latch_count(&self) -> usize {
        self.latch_count
    }
}

impl<const N: usize> StripSink<N> for RecordingStrip<N> {
    async fn write_frame(&mut self, frame: &Frame1d<N>) {
        self.bytes.reserve(N * CHANNELS_PER_PIXEL);
        self.bytes.extend(frame.channel_bytes());
        self.frames.push(*frame);
    }

    async fn latch(&mut self) {
        self.latch_count += 1;
    }
}
