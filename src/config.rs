//! Driver tuning knobs.

use crate::error::{
    Error,
    Result,
};

/// Samples at or below this read as [`SwitchState::Low`](crate::SwitchState::Low).
pub const DEFAULT_SWITCH_LOW: u16 = 300;

/// Samples at or above this read as [`SwitchState::High`](crate::SwitchState::High).
pub const DEFAULT_SWITCH_HIGH: u16 = 700;

/// Factor between the 0–255 intensity scale and the native PWM duty range.
pub const DEFAULT_DUTY_SCALE: u16 = 4;

/// Runtime configuration for a [`GamePad`](crate::GamePad).
///
/// ```rust
/// let config = gamerpad::GamepadConfig::default()
///     .with_switch_thresholds(250, 750)
///     .unwrap()
///     .with_duty_scale(2);
/// assert_eq!(config.switch_low(), 250);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GamepadConfig {
    switch_low: u16,
    switch_high: u16,
    duty_scale: u16,
}

impl Default for GamepadConfig {
    fn default() -> Self {
        Self {
            switch_low: DEFAULT_SWITCH_LOW,
            switch_high: DEFAULT_SWITCH_HIGH,
            duty_scale: DEFAULT_DUTY_SCALE,
        }
    }
}

impl GamepadConfig {
    /// Replace the joystick switch-mode band. Both bounds are inclusive.
    pub const fn with_switch_thresholds(mut self, low: u16, high: u16) -> Result<Self> {
        if low >= high {
            return Err(Error::InvalidThresholds { low, high });
        }
        self.switch_low = low;
        self.switch_high = high;
        Ok(self)
    }

    #[must_use]
    pub const fn with_duty_scale(mut self, scale: u16) -> Self {
        self.duty_scale = scale;
        self
    }

    pub const fn switch_low(&self) -> u16 {
        self.switch_low
    }

    pub const fn switch_high(&self) -> u16 {
        self.switch_high
    }

    pub const fn duty_scale(&self) -> u16 {
        self.duty_scale
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_pad_wiring() {
        let config = GamepadConfig::default();
        assert_eq!(config.switch_low(), 300);
        assert_eq!(config.switch_high(), 700);
        assert_eq!(config.duty_scale(), 4);
    }

    #[test]
    fn thresholds_must_be_ordered() {
        assert_eq!(
            GamepadConfig::default().with_switch_thresholds(700, 300),
            Err(Error::InvalidThresholds { low: 700, high: 300 })
        );
        assert_eq!(
            GamepadConfig::default().with_switch_thresholds(512, 512),
            Err(Error::InvalidThresholds { low: 512, high: 512 })
        );
        let config = GamepadConfig::default().with_switch_thresholds(100, 900).unwrap();
        assert_eq!((config.switch_low(), config.switch_high()), (100, 900));
    }
}
