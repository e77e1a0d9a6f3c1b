//! # gamerpad
//!
//! Driver for a handheld gamepad with five keys, a two-axis joystick and a
//! vibration motor.
//!
//! - **Buttons**: active-low key sampling and event handlers for press,
//!   release and click
//! - **Joystick**: raw analog samples or a quantised low/centred/high switch
//!   reading per axis
//! - **Vibration motor**: named intensities, or a fixed override speed that
//!   takes precedence once set
//!
//! The driver is generic over a [`Board`] that provides the pin primitives.
//! Board support for the ESP32-S3 handheld is behind the `esp32s3` feature.
//!
//! ## Quick start
//!
//! ```rust,ignore
//! let peripherals = gamerpad::init();
//! let resources = gamerpad::split_resources!(peripherals);
//!
//! let mut pad = gamerpad::GamePad::new(gamerpad::EspBoard::new(resources));
//! if pad.is_pressed(gamerpad::Button::F) {
//!     pad.drive(gamerpad::Intensity::Medium);
//! }
//! ```

#![cfg_attr(not(test), no_std)]

// Must come first so the logging macros are visible to the other modules.
mod fmt;

mod buttons;
mod config;
pub mod error;
pub mod events;
mod gamepad;
mod hal;
mod joystick;
mod pins;
mod vibration;

#[cfg(feature = "esp32s3")]
mod esp32s3;
#[cfg(test)]
mod testing;

pub use buttons::ButtonEvent;
pub use config::{
    DEFAULT_DUTY_SCALE,
    DEFAULT_SWITCH_HIGH,
    DEFAULT_SWITCH_LOW,
    GamepadConfig,
};
pub use error::Error;
#[cfg(feature = "esp32s3")]
pub use esp32s3::*;
pub use events::{
    ButtonTracker,
    EventBus,
    Subscription,
};
pub use gamepad::GamePad;
pub use hal::{
    Board,
    Handler,
};
pub use joystick::{
    AxisMode,
    AxisReading,
    SwitchState,
};
pub use pins::{
    Axis,
    Button,
    MOTOR_PIN,
    Pin,
    Pull,
};
pub use vibration::{
    Intensity,
    Vibrator,
};

/// StaticCell helper: allocates a value into a `static` exactly once.
#[cfg(feature = "esp32s3")]
#[macro_export]
macro_rules! mk_static {
    ($t:ty, $val:expr) => {{
        static STATIC_CELL: static_cell::StaticCell<$t> = static_cell::StaticCell::new();
        #[deny(unused_attributes)]
        let x = STATIC_CELL.uninit().write($val);
        x
    }};
}

#[cfg(test)]
mod tests {
    use embedded_hal::digital::PinState;

    use super::*;
    use crate::testing::MockBoard;

    #[test]
    fn medium_then_override() {
        let mut pad = GamePad::new(MockBoard::new());
        pad.drive(Intensity::Medium);
        pad.set_override_speed(50);
        pad.drive(Intensity::Stop);
        assert_eq!(pad.board().writes, [(MOTOR_PIN, 720), (MOTOR_PIN, 200)]);
    }

    #[test]
    fn one_configuration_pass_across_all_operations() {
        let mut board = MockBoard::new();
        board.set_digital(Pin::P14, PinState::Low);
        board.set_analog(Pin::P2, 710);
        let mut pad = GamePad::new(board);

        assert_eq!(pad.read_axis(Axis::Y, AxisMode::Switch).code(), 1);
        assert!(pad.is_pressed(Button::D));
        pad.drive(Intensity::Weak);
        assert!(pad.is_pressed(Button::D));
        assert_eq!(pad.read_axis_code(Axis::Y, 0), 710);

        let pulls = &pad.board().pulls;
        assert_eq!(pulls.len(), 5);
        assert_eq!(pulls.iter().filter(|(_, pull)| *pull == Pull::Up).count(), 1);
    }
}
