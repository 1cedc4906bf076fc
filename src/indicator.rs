//! A three-pin RGB status LED, each channel fully on or off.
//!
//! The firmware blinks it red once per loop to show the control loop is alive.

use embedded_hal::digital::{OutputPin, PinState};

use crate::{Error, Result};

/// Channel combination shown on the indicator.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
#[cfg_attr(not(feature = "host"), derive(defmt::Format))]
pub enum IndicatorColor {
    /// All channels off.
    #[default]
    Off,
    /// Red only.
    Red,
    /// Green only.
    Green,
    /// Blue only.
    Blue,
    /// Red and green.
    Yellow,
    /// Green and blue.
    Cyan,
    /// Red and blue.
    Magenta,
    /// All channels on.
    White,
}

impl IndicatorColor {
    /// The `(red, green, blue)` channel states for this color.
    #[must_use]
    pub const fn channels(self) -> (bool, bool, bool) {
        match self {
            Self::Off => (false, false, false),
            Self::Red => (true, false, false),
            Self::Green => (false, true, false),
            Self::Blue => (false, false, true),
            Self::Yellow => (true, true, false),
            Self::Cyan => (false, true, true),
            Self::Magenta => (true, false, true),
            Self::White => (true, true, true),
        }
    }
}

/// An RGB LED wired to three output pins, active high.
pub struct RgbIndicator<R, G, B> {
    red: R,
    green: G,
    blue: B,
    color: IndicatorColor,
}

impl<R: OutputPin, G: OutputPin, B: OutputPin> RgbIndicator<R, G, B> {
    /// Take the three pins and switch the LED off.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PinWrite`] if any pin cannot be driven.
    pub fn new(red: R, green: G, blue: B) -> Result<Self> {
        let mut indicator = Self {
            red,
            green,
            blue,
            color: IndicatorColor::Off,
        };
        indicator.set(IndicatorColor::Off)?;
        Ok(indicator)
    }

    /// Drive all three pins to show `color`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PinWrite`] if any pin cannot be driven.
    pub fn set(&mut self, color: IndicatorColor) -> Result<()> {
        let (red, green, blue) = color.channels();
        self.red
            .set_state(PinState::from(red))
            .map_err(|_| Error::PinWrite)?;
        self.green
            .set_state(PinState::from(green))
            .map_err(|_| Error::PinWrite)?;
        self.blue
            .set_state(PinState::from(blue))
            .map_err(|_| Error::PinWrite)?;
        self.color = color;
        Ok(())
    }

    /// The color last set successfully.
    #[must_use]
    pub const fn color(&self) -> IndicatorColor {
        self.color
    }
}
