//! Where the control loop reports each digit it shows.
//!
//! Every shown digit is reported as one line of text holding just the number. On the
//! board that line goes out over defmt/RTT; host builds record it.

use crate::glyph::Digit;

/// Destination for the text line written each time a digit is shown.
pub trait DigitLog {
    /// Report that `digit` is now on the matrix.
    fn log_digit(&mut self, digit: Digit);
}

impl<L: DigitLog> DigitLog for &mut L {
    fn log_digit(&mut self, digit: Digit) {
        (**self).log_digit(digit);
    }
}

/// Logs each digit with `defmt::info!`.
#[cfg(not(feature = "host"))]
#[derive(Clone, Copy, Debug, Default)]
pub struct DefmtLog;

#[cfg(not(feature = "host"))]
impl DigitLog for DefmtLog {
    fn log_digit(&mut self, digit: Digit) {
        defmt::info!("{}", digit.value());
    }
}

#[cfg(feature = "host")]
pub use host::RecordingLog;

#[cfg(feature = "host")]
mod host {
    use std::string::{String, ToString};
    use std::vec::Vec;

    use super::DigitLog;
    use crate::glyph::Digit;

    /// Keeps every logged line and echoes it to stdout.
    #[derive(Clone, Debug, Default, PartialEq, Eq)]
    pub struct RecordingLog {
        lines: Vec<String>,
    }

    impl RecordingLog {
        /// Create an empty log.
        #[must_use]
        pub const fn new() -> Self {
            Self { lines: Vec::new() }
        }

        /// Every line logged so far, oldest first.
        #[must_use]
        pub fn lines(&self) -> &[String] {
            &self.lines
        }
    }

    impl DigitLog for RecordingLog {
        fn log_digit(&mut self, digit: Digit) {
            let line = digit.to_string();
            println!("{line}");
            self.lines.push(line);
        }
    }
}
