//! Debounced digit counter driven by two buttons.
//!
//! Each button has its own debounce timestamp. A press is accepted only when more than
//! [`DEBOUNCE_INTERVAL`] has passed since that button's last accepted press, so a held
//! button steps at most once per interval no matter how often it is sampled.
//!
//! ```rust
//! use digit_matrix::counter::{ButtonId, DigitCounter};
//! use embassy_time::{Duration, Instant};
//!
//! let mut counter = DigitCounter::new();
//! let t0 = Instant::from_millis(1_000);
//!
//! let accepted = counter.on_button_active(ButtonId::Decrement, t0);
//! assert_eq!(accepted.map(|digit| digit.value()), Some(9));
//!
//! // Bounce 50 ms later is ignored.
//! let bounce = counter.on_button_active(ButtonId::Decrement, t0 + Duration::from_millis(50));
//! assert_eq!(bounce, None);
//! assert_eq!(counter.current().value(), 9);
//! ```

use embassy_time::Instant;

use crate::config::DEBOUNCE_INTERVAL;
use crate::glyph::Digit;

/// Which button was seen pressed.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[cfg_attr(not(feature = "host"), derive(defmt::Format))]
pub enum ButtonId {
    /// Button A: steps the digit up.
    Increment,
    /// Button B: steps the digit down.
    Decrement,
}

impl ButtonId {
    /// `+1` for [`Increment`](Self::Increment), `-1` for [`Decrement`](Self::Decrement).
    #[must_use]
    pub const fn direction(self) -> i8 {
        match self {
            Self::Increment => 1,
            Self::Decrement => -1,
        }
    }

    const fn slot(self) -> usize {
        match self {
            Self::Increment => 0,
            Self::Decrement => 1,
        }
    }
}

/// The current digit plus one debounce timestamp per button.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DigitCounter {
    current: Digit,
    last_accepted: [Option<Instant>; 2],
}

impl DigitCounter {
    /// Start at 0 with no press accepted yet.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            current: Digit::ZERO,
            last_accepted: [None; 2],
        }
    }

    /// The digit currently selected.
    #[must_use]
    pub const fn current(&self) -> Digit {
        self.current
    }

    /// Report that `button` reads pressed at `now`.
    ///
    /// Returns the new digit when the press is accepted, `None` when it falls inside the
    /// button's debounce window. A `now` earlier than the last accepted press counts as
    /// no time elapsed.
    pub fn on_button_active(&mut self, button: ButtonId, now: Instant) -> Option<Digit> {
        let last_accepted = &mut self.last_accepted[button.slot()];
        if let Some(last) = *last_accepted
            && now.saturating_duration_since(last) <= DEBOUNCE_INTERVAL
        {
            return None;
        }
        *last_accepted = Some(now);
        self.current = self.current.step(button.direction());
        Some(self.current)
    }
}
