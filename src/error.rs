//! Errors raised by the configurable and event-dispatch surfaces.
//!
//! The sampling and drive operations themselves never fail; hardware faults
//! are absorbed by the board.

use crate::{
    Button,
    ButtonEvent,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// A numeric axis mode other than 0 (analog) or 1 (switch).
    #[error("unrecognised axis mode {0}")]
    InvalidAxisMode(u8),

    /// Switch thresholds must satisfy `low < high`.
    #[error("switch thresholds out of order: low {low} >= high {high}")]
    InvalidThresholds { low: u16, high: u16 },

    /// Every slot in the subscription table is taken.
    #[error("subscription table is full")]
    SubscriptionsFull,

    /// The event queue is full; the record was dropped.
    #[error("event queue full, dropped {event:?} on {button:?}")]
    QueueFull { button: Button, event: ButtonEvent },
}

pub type Result<T> = core::result::Result<T, Error>;
