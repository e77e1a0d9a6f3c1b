//! Key sampling and event registration.
//!
//! Keys pull their line low while held.

use embedded_hal::digital::PinState;

use crate::{
    Board,
    Button,
    GamePad,
    Handler,
};

/// Key transitions reported by the board's event source.
///
/// The discriminants are the platform's button event ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum ButtonEvent {
    Pressed = 1,
    Released = 2,
    /// A press followed by its release.
    Clicked = 3,
}

impl ButtonEvent {
    pub const fn code(self) -> u8 {
        self as u8
    }
}

impl<B: Board> GamePad<B> {
    /// Whether `button` is held right now.
    pub fn is_pressed(&mut self, button: Button) -> bool {
        self.ensure_initialized();
        self.board_mut().read_digital(button.pin()) == PinState::Low
    }

    /// Sample every key, in [`Button::ALL`] order.
    pub fn pressed_buttons(&mut self) -> [bool; 5] {
        Button::ALL.map(|button| self.is_pressed(button))
    }

    /// Call `handler` each time `button` reports `event`.
    ///
    /// Handlers accumulate; there is no way to remove one. Invocation order
    /// and context are up to the board's dispatcher.
    pub fn on_event(&mut self, button: Button, event: ButtonEvent, handler: Handler) {
        self.ensure_initialized();
        trace!("registering handler for {:?} {:?}", button, event);
        self.board_mut().register_handler(button, event, handler);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        Pin,
        testing::MockBoard,
    };

    fn noop() {}

    #[test]
    fn low_line_reads_as_pressed() {
        let mut board = MockBoard::new();
        board.set_digital(Pin::P13, PinState::Low);
        let mut pad = GamePad::new(board);
        assert!(pad.is_pressed(Button::C));
        assert!(!pad.is_pressed(Button::Z));
    }

    #[test]
    fn high_line_reads_as_released() {
        let mut board = MockBoard::new();
        for button in Button::ALL {
            board.set_digital(button.pin(), PinState::High);
        }
        let mut pad = GamePad::new(board);
        for button in Button::ALL {
            assert!(!pad.is_pressed(button));
        }
    }

    #[test]
    fn sampling_configures_pins_first() {
        let mut pad = GamePad::new(MockBoard::new());
        assert!(!pad.is_pressed(Button::F));
        assert!(pad.is_initialized());
        assert_eq!(pad.board().digital_reads, 1);
    }

    #[test]
    fn snapshot_reports_each_key() {
        let mut board = MockBoard::new();
        board.set_digital(Pin::P8, PinState::Low);
        board.set_digital(Pin::P16, PinState::Low);
        let mut pad = GamePad::new(board);
        assert_eq!(pad.pressed_buttons(), [true, false, false, false, true]);
    }

    #[test]
    fn registrations_are_additive() {
        let mut pad = GamePad::new(MockBoard::new());
        pad.on_event(Button::D, ButtonEvent::Pressed, noop);
        pad.on_event(Button::D, ButtonEvent::Pressed, noop);
        pad.on_event(Button::E, ButtonEvent::Clicked, noop);

        let registered: std::vec::Vec<_> = pad
            .board()
            .handlers
            .iter()
            .map(|(button, event, _)| (*button, *event))
            .collect();
        assert_eq!(
            registered,
            [
                (Button::D, ButtonEvent::Pressed),
                (Button::D, ButtonEvent::Pressed),
                (Button::E, ButtonEvent::Clicked),
            ]
        );
        assert!(pad.is_initialized());
    }

    #[test]
    fn event_codes_match_platform_ids() {
        assert_eq!(ButtonEvent::Pressed.code(), 1);
        assert_eq!(ButtonEvent::Released.code(), 2);
        assert_eq!(ButtonEvent::Clicked.code(), 3);
    }
}
