//! The board primitives the driver is built on.

use embedded_hal::digital::PinState;

use crate::{
    Button,
    ButtonEvent,
    Pin,
    Pull,
};

/// Callback invoked by the board's event dispatcher.
pub type Handler = fn();

/// Digital, analog and event primitives of the target board.
///
/// Implementations own the underlying peripherals. None of the methods
/// report errors: faults such as a disconnected line or an out-of-range duty
/// are absorbed (and logged) by the board.
pub trait Board {
    /// Configure the internal resistor on an input pin.
    fn set_pull(&mut self, pin: Pin, pull: Pull);

    /// Sample a digital input.
    fn read_digital(&mut self, pin: Pin) -> PinState;

    /// Sample an analog input in the board's native range (0–1023).
    fn read_analog(&mut self, pin: Pin) -> u16;

    /// Set the PWM duty of an output pin.
    fn write_analog(&mut self, pin: Pin, duty: u16);

    /// Have `handler` called whenever `button` reports `event`.
    ///
    /// Registrations are additive and last for the life of the board.
    fn register_handler(&mut self, button: Button, event: ButtonEvent, handler: Handler);
}

impl<B: Board + ?Sized> Board for &mut B {
    fn set_pull(&mut self, pin: Pin, pull: Pull) {
        (**self).set_pull(pin, pull);
    }

    fn read_digital(&mut self, pin: Pin) -> PinState {
        (**self).read_digital(pin)
    }

    fn read_analog(&mut self, pin: Pin) -> u16 {
        (**self).read_analog(pin)
    }

    fn write_analog(&mut self, pin: Pin, duty: u16) {
        (**self).write_analog(pin, duty);
    }

    fn register_handler(&mut self, button: Button, event: ButtonEvent, handler: Handler) {
        (**self).register_handler(button, event, handler);
    }
}
