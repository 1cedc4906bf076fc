//! The control-loop state: the debounced counter and the matrix that shows it.
//!
//! [`DigitApp`] owns everything the loop mutates, so there are no globals. The firmware
//! samples the buttons and hands the levels to [`DigitApp::poll`]. Every digit shown is
//! also written to a [`DigitLog`].
//!
//! ```rust
//! use digit_matrix::app::DigitApp;
//! use digit_matrix::digit_log::RecordingLog;
//! use digit_matrix::led_strip_host::RecordingStrip;
//! use digit_matrix::matrix::DigitMatrix;
//! use embassy_time::Instant;
//!
//! let matrix = DigitMatrix::new(RecordingStrip::<25>::new());
//! let mut app = DigitApp::new(matrix, RecordingLog::new());
//! embassy_futures::block_on(async {
//!     app.start().await;
//!     let shown = app.poll(false, true, Instant::from_millis(500)).await;
//!     assert_eq!(shown.map(|digit| digit.value()), Some(1));
//! });
//! assert_eq!(app.log().lines(), ["0", "1"]);
//! ```

use embassy_time::Instant;

use crate::config::LED_COUNT;
use crate::counter::{ButtonId, DigitCounter};
use crate::digit_log::DigitLog;
use crate::glyph::Digit;
use crate::led_strip::StripSink;
use crate::matrix::DigitMatrix;

/// Counter plus display, driven one sample at a time.
pub struct DigitApp<S, L> {
    counter: DigitCounter,
    matrix: DigitMatrix<S>,
    log: L,
}

impl<S: StripSink<LED_COUNT>, L: DigitLog> DigitApp<S, L> {
    /// Start at digit 0. Call [`start`](Self::start) to put it on the matrix.
    pub const fn new(matrix: DigitMatrix<S>, log: L) -> Self {
        Self {
            counter: DigitCounter::new(),
            matrix,
            log,
        }
    }

    /// Log and show the initial digit.
    pub async fn start(&mut self) {
        let digit = self.counter.current();
        self.log.log_digit(digit);
        self.matrix.show(digit).await;
    }

    /// Feed one sample of both buttons taken at `now`.
    ///
    /// The decrement button is handled before the increment button. Returns the digit
    /// shown after this sample if any press was accepted.
    pub async fn poll(
        &mut self,
        decrement_pressed: bool,
        increment_pressed: bool,
        now: Instant,
    ) -> Option<Digit> {
        let mut shown = None;
        if decrement_pressed {
            shown = self.on_button_active(ButtonId::Decrement, now).await.or(shown);
        }
        if increment_pressed {
            shown = self.on_button_active(ButtonId::Increment, now).await.or(shown);
        }
        shown
    }

    /// Report one pressed button. An accepted press is rendered, flushed, and logged.
    pub async fn on_button_active(&mut self, button: ButtonId, now: Instant) -> Option<Digit> {
        let digit = self.counter.on_button_active(button, now)?;
        self.matrix.show(digit).await;
        self.log.log_digit(digit);
        Some(digit)
    }

    /// The digit currently shown.
    #[must_use]
    pub const fn current(&self) -> Digit {
        self.counter.current()
    }

    /// The matrix, for inspecting its buffer or sink.
    #[must_use]
    pub const fn matrix(&self) -> &DigitMatrix<S> {
        &self.matrix
    }

    /// The log every shown digit is written to.
    #[must_use]
    pub const fn log(&self) -> &L {
        &self.log
    }
}
