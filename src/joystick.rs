//! Joystick axes, read raw or quantised into a two-position switch.
//!
//! In switch mode a sample at or above the high threshold is `High`, at or
//! below the low threshold is `Low`, and anything strictly between is the
//! spring-centred dead zone. With the default 300/700 thresholds the dead
//! zone is 301..=699.

use crate::{
    Axis,
    Board,
    GamePad,
    error::Error,
};

/// How an axis sample is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AxisMode {
    /// Raw sample.
    Analog,
    /// Quantised to [`SwitchState`].
    Switch,
}

impl TryFrom<u8> for AxisMode {
    type Error = Error;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Self::Analog),
            1 => Ok(Self::Switch),
            other => Err(Error::InvalidAxisMode(other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SwitchState {
    Low,
    High,
}

/// Result of [`GamePad::read_axis`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AxisReading {
    Analog(u16),
    Switch(SwitchState),
    /// Switch mode, stick inside the dead zone.
    Centered,
}

impl AxisReading {
    /// Numeric form: the raw sample, `1` for high, `0` for low, `-1` when
    /// centred.
    pub const fn code(self) -> i32 {
        match self {
            Self::Analog(sample) => sample as i32,
            Self::Switch(SwitchState::High) => 1,
            Self::Switch(SwitchState::Low) => 0,
            Self::Centered => -1,
        }
    }
}

impl<B: Board> GamePad<B> {
    pub fn read_axis(&mut self, axis: Axis, mode: AxisMode) -> AxisReading {
        self.ensure_initialized();
        let sample = self.board_mut().read_analog(axis.pin());
        match mode {
            AxisMode::Analog => AxisReading::Analog(sample),
            AxisMode::Switch => self.quantise(sample),
        }
    }

    /// [`read_axis`](Self::read_axis) with a numeric mode (0 analog,
    /// 1 switch). Unknown modes read as `-1`, the same as a centred stick.
    pub fn read_axis_code(&mut self, axis: Axis, mode: u8) -> i32 {
        self.ensure_initialized();
        match AxisMode::try_from(mode) {
            Ok(mode) => self.read_axis(axis, mode).code(),
            Err(err) => {
                warn!("axis read rejected: {:?}", err);
                -1
            }
        }
    }

    pub fn read_x(&mut self, mode: AxisMode) -> AxisReading {
        self.read_axis(Axis::X, mode)
    }

    pub fn read_y(&mut self, mode: AxisMode) -> AxisReading {
        self.read_axis(Axis::Y, mode)
    }

    fn quantise(&self, sample: u16) -> AxisReading {
        let config = self.config();
        if sample >= config.switch_high() {
            AxisReading::Switch(SwitchState::High)
        } else if sample <= config.switch_low() {
            AxisReading::Switch(SwitchState::Low)
        } else {
            AxisReading::Centered
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        GamepadConfig,
        Pin,
        testing::MockBoard,
    };

    fn pad_with(pin: Pin, sample: u16) -> GamePad<MockBoard> {
        let mut board = MockBoard::new();
        board.set_analog(pin, sample);
        GamePad::new(board)
    }

    fn switch_x(sample: u16) -> AxisReading {
        pad_with(Pin::P1, sample).read_axis(Axis::X, AxisMode::Switch)
    }

    #[test]
    fn switch_boundaries_are_inclusive() {
        assert_eq!(switch_x(300), AxisReading::Switch(SwitchState::Low));
        assert_eq!(switch_x(700), AxisReading::Switch(SwitchState::High));
        assert_eq!(switch_x(301), AxisReading::Centered);
        assert_eq!(switch_x(699), AxisReading::Centered);
    }

    #[test]
    fn switch_extremes() {
        assert_eq!(switch_x(0), AxisReading::Switch(SwitchState::Low));
        assert_eq!(switch_x(1023), AxisReading::Switch(SwitchState::High));
        assert_eq!(switch_x(512), AxisReading::Centered);
    }

    #[test]
    fn analog_mode_passes_the_sample_through() {
        for sample in [0, 1, 300, 512, 700, 1023, u16::MAX] {
            let mut pad = pad_with(Pin::P2, sample);
            assert_eq!(pad.read_y(AxisMode::Analog), AxisReading::Analog(sample));
        }
    }

    #[test]
    fn axes_read_their_own_pins() {
        let mut board = MockBoard::new();
        board.set_analog(Pin::P1, 900);
        board.set_analog(Pin::P2, 100);
        let mut pad = GamePad::new(board);
        assert_eq!(pad.read_x(AxisMode::Switch), AxisReading::Switch(SwitchState::High));
        assert_eq!(pad.read_y(AxisMode::Switch), AxisReading::Switch(SwitchState::Low));
    }

    #[test]
    fn numeric_codes() {
        assert_eq!(pad_with(Pin::P1, 812).read_axis_code(Axis::X, 0), 812);
        assert_eq!(pad_with(Pin::P1, 812).read_axis_code(Axis::X, 1), 1);
        assert_eq!(pad_with(Pin::P1, 12).read_axis_code(Axis::X, 1), 0);
        assert_eq!(pad_with(Pin::P1, 500).read_axis_code(Axis::X, 1), -1);
    }

    #[test]
    fn unknown_mode_reads_as_indeterminate() {
        for mode in [2, 7, u8::MAX] {
            let mut pad = pad_with(Pin::P1, 1000);
            assert_eq!(pad.read_axis_code(Axis::X, mode), -1);
            assert_eq!(pad.board().analog_reads, 0);
            assert!(pad.is_initialized());
            assert_eq!(pad.board().pulls.len(), 5);
        }
        assert_eq!(AxisMode::try_from(2), Err(Error::InvalidAxisMode(2)));
    }

    #[test]
    fn custom_thresholds() {
        let config = GamepadConfig::default()
            .with_switch_thresholds(100, 900)
            .unwrap();
        let mut board = MockBoard::new();
        board.set_analog(Pin::P1, 800);
        let mut pad = GamePad::with_config(board, config);
        assert_eq!(pad.read_x(AxisMode::Switch), AxisReading::Centered);
    }
}
