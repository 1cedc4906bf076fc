//! A device abstraction for level-sampled push buttons.
//!
//! See [`Button`] for usage example.

use embedded_hal::digital::InputPin;

use crate::{Error, Result};

// ============================================================================
// PressedTo - How the button is wired
// ============================================================================

/// Describes how the button is physically wired.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[cfg_attr(not(feature = "host"), derive(defmt::Format))]
pub enum PressedTo {
    /// Button connects pin to voltage (3.3V) when pressed.
    /// Uses internal pull-down resistor. Pin reads HIGH when pressed.
    ///
    /// Note: The original Pico 2 (RP2350) has a known silicon bug with pull-down resistors
    /// that can leave the pin HIGH after release. Prefer [`PressedTo::Ground`] there.
    Voltage,

    /// Button connects pin to ground (GND) when pressed.
    /// Uses internal pull-up resistor. Pin reads LOW when pressed.
    /// Recommended for Pico 2 due to pull-down resistor bug.
    Ground,
}

// ============================================================================
// Button Virtual Device
// ============================================================================

/// A push button sampled by level.
///
/// `Button` does not debounce; a sample only says whether the line is asserted right
/// now. Debouncing happens in [`DigitCounter`](crate::counter::DigitCounter), keyed on
/// time.
///
/// # Hardware Requirements
///
/// The button can be wired in two ways:
/// - [`PressedTo::Voltage`]: Button connects pin to 3.3V when pressed (uses pull-down)
/// - [`PressedTo::Ground`]: Button connects pin to GND when pressed (uses pull-up)
///
/// **Important**: Pico 2 (RP2350) has a known silicon bug (erratum E9) with pull-down
/// resistors that can leave the pin reading HIGH after release. Wire buttons to GND and
/// use [`PressedTo::Ground`] on Pico 2.
///
/// # Example
///
/// Any [`embedded_hal`] input pin works. On the board, [`Button::new`] configures an
/// `embassy_rp` pin with the matching pull resistor.
///
/// ```rust,ignore
/// use digit_matrix::button::{Button, PressedTo};
///
/// let mut button_a = Button::new(p.PIN_5, PressedTo::Ground);
/// if button_a.is_pressed()? {
///     // line is low: button A is down
/// }
/// ```
pub struct Button<P> {
    input: P,
    pressed_to: PressedTo,
}

impl<P: InputPin> Button<P> {
    /// Wrap an input pin that is already configured with the right pull resistor.
    #[must_use]
    pub const fn from_input(input: P, pressed_to: PressedTo) -> Self {
        Self { input, pressed_to }
    }

    /// Returns whether the button is currently pressed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PinRead`] if the pin cannot be read.
    pub fn is_pressed(&mut self) -> Result<bool> {
        match self.pressed_to {
            PressedTo::Voltage => self.input.is_high(),
            PressedTo::Ground => self.input.is_low(),
        }
        .map_err(|_| Error::PinRead)
    }

    /// How the button is wired.
    #[must_use]
    pub const fn pressed_to(&self) -> PressedTo {
        self.pressed_to
    }
}

#[cfg(not(feature = "host"))]
mod rp {
    use embassy_rp::Peri;
    use embassy_rp::gpio::{Input, Pin, Pull};

    use super::{Button, PressedTo};

    impl<'a> Button<Input<'a>> {
        /// Creates a new `Button` instance from a pin.
        ///
        /// The pin is configured based on the connection type:
        /// - [`PressedTo::Voltage`]: Uses internal pull-down (button to 3.3V)
        /// - [`PressedTo::Ground`]: Uses internal pull-up (button to GND)
        #[must_use]
        pub fn new<P: Pin>(pin: Peri<'a, P>, pressed_to: PressedTo) -> Self {
            let pull = match pressed_to {
                PressedTo::Voltage => Pull::Down,
                PressedTo::Ground => Pull::Up,
            };
            Self::from_input(Input::new(pin, pull), pressed_to)
        }
    }
}
