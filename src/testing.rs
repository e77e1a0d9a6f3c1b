//! Recording board double for unit tests.

use std::{
    collections::HashMap,
    vec::Vec,
};

use embedded_hal::digital::PinState;

use crate::{
    Board,
    Button,
    ButtonEvent,
    Handler,
    Pin,
    Pull,
};

/// Serves scripted samples and records every configuration, write and
/// registration made through it.
#[derive(Default)]
pub struct MockBoard {
    digital: HashMap<Pin, PinState>,
    analog: HashMap<Pin, u16>,
    pub pulls: Vec<(Pin, Pull)>,
    pub writes: Vec<(Pin, u16)>,
    pub handlers: Vec<(Button, ButtonEvent, Handler)>,
    pub digital_reads: usize,
    pub analog_reads: usize,
}

impl MockBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_digital(&mut self, pin: Pin, state: PinState) {
        self.digital.insert(pin, state);
    }

    pub fn set_analog(&mut self, pin: Pin, sample: u16) {
        self.analog.insert(pin, sample);
    }

    pub fn last_write(&self) -> Option<(Pin, u16)> {
        self.writes.last().copied()
    }
}

impl Board for MockBoard {
    fn set_pull(&mut self, pin: Pin, pull: Pull) {
        self.pulls.push((pin, pull));
    }

    // Unscripted keys idle high (released).
    fn read_digital(&mut self, pin: Pin) -> PinState {
        self.digital_reads += 1;
        self.digital.get(&pin).copied().unwrap_or(PinState::High)
    }

    // Unscripted axes rest at the centre of the range.
    fn read_analog(&mut self, pin: Pin) -> u16 {
        self.analog_reads += 1;
        self.analog.get(&pin).copied().unwrap_or(512)
    }

    fn write_analog(&mut self, pin: Pin, duty: u16) {
        self.writes.push((pin, duty));
    }

    fn register_handler(&mut self, button: Button, event: ButtonEvent, handler: Handler) {
        self.handlers.push((button, event, handler));
    }
}
