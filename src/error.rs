use derive_more::derive::{Display, Error};

/// A specialized `Result` where the error is this crate's `Error` type.
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Define a unified error type for this crate.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(not(feature = "host"), derive(defmt::Format))]
pub enum Error {
    // `#[error(not(source))]` keeps `derive_more` from treating the lone field as a source.
    /// A digit outside `0..=9` was asked for. There is no glyph for it.
    #[display("Digit {_0} is outside 0..=9")]
    DigitOutOfRange(#[error(not(source))] u8),

    /// A matrix coordinate outside the 5x5 grid was asked for.
    #[display("Coordinate (row {row}, col {col}) is outside the matrix")]
    CoordinateOutOfRange {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// Reading a button input line failed.
    #[display("Error reading input pin")]
    PinRead,

    /// Driving an indicator output line failed.
    #[display("Error setting output state")]
    PinWrite,
}
