//! Vibration motor control for haptic feedback.
//!
//! The motor runs at one of a few named intensities unless an override
//! speed has been set, which then wins over every requested level. Once set
//! the override cannot be cleared, only changed.

use crate::{
    Board,
    GamePad,
    MOTOR_PIN,
};

/// Named motor intensities on a 0–255 scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Intensity {
    Stop = 0,
    Weak = 100,
    Medium = 180,
    Strong = 225,
    Full = 255,
}

impl Intensity {
    pub const fn level(self) -> u8 {
        self as u8
    }
}

/// Plain on/off motor switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Vibrator {
    Off,
    On,
}

impl From<Vibrator> for Intensity {
    fn from(state: Vibrator) -> Self {
        match state {
            Vibrator::Off => Self::Stop,
            Vibrator::On => Self::Full,
        }
    }
}

impl<B: Board> GamePad<B> {
    /// Run the motor at `speed` (0–255) on every later [`drive`](Self::drive),
    /// whatever level it asks for.
    pub fn set_override_speed(&mut self, speed: u8) {
        debug!("vibration override speed {}", speed);
        self.override_speed = Some(speed);
    }

    pub const fn override_speed(&self) -> Option<u8> {
        self.override_speed
    }

    /// PWM duty [`drive`](Self::drive) would write for `level`.
    pub fn duty_for(&self, level: Intensity) -> u16 {
        let value = self.override_speed.unwrap_or(level.level());
        u16::from(value).saturating_mul(self.config().duty_scale())
    }

    pub fn drive(&mut self, level: Intensity) {
        self.ensure_initialized();
        let duty = self.duty_for(level);
        trace!("motor duty {}", duty);
        self.board_mut().write_analog(MOTOR_PIN, duty);
    }

    pub fn switch_motor(&mut self, state: Vibrator) {
        self.drive(state.into());
    }
}
