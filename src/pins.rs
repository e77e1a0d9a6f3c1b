//! Pin assignments for the pad.
//!
//! The five keys read active low. Key F is the select/confirm key and the
//! only one wired without an external resistor, so it gets the internal
//! pull-up; the rest are left floating. The joystick axes are analog inputs
//! and receive no pull configuration.

/// One physical I/O line on the pad connector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Pin {
    /// Joystick X axis (analog).
    P1,
    /// Joystick Y axis (analog).
    P2,
    P8,
    /// Vibration motor (PWM).
    P12,
    P13,
    P14,
    P15,
    P16,
}

/// Internal resistor setting for an input pin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Pull {
    None,
    Up,
    Down,
}

/// Motor output pin.
pub const MOTOR_PIN: Pin = Pin::P12;

/// The five user keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Button {
    Z,
    C,
    D,
    E,
    /// Select/confirm.
    F,
}

impl Button {
    pub const ALL: [Self; 5] = [Self::Z, Self::C, Self::D, Self::E, Self::F];

    pub const fn pin(self) -> Pin {
        match self {
            Self::Z => Pin::P8,
            Self::C => Pin::P13,
            Self::D => Pin::P14,
            Self::E => Pin::P15,
            Self::F => Pin::P16,
        }
    }

    /// Pull mode the key needs to idle high.
    pub const fn pull(self) -> Pull {
        match self {
            Self::F => Pull::Up,
            _ => Pull::None,
        }
    }

    /// The key wired to `pin`, if any.
    pub fn from_pin(pin: Pin) -> Option<Self> {
        Self::ALL.into_iter().find(|button| button.pin() == pin)
    }

    /// Position in [`Button::ALL`].
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Joystick axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    pub const fn pin(self) -> Pin {
        match self {
            Self::X => Pin::P1,
            Self::Y => Pin::P2,
        }
    }
}
