//! Button event dispatch.
//!
//! The board's key watcher turns sampled levels into [`ButtonEvent`]s with a
//! [`ButtonTracker`] and posts them to an [`EventBus`]. The bus queues them
//! and calls every matching subscriber, in subscription order, from
//! whichever task runs [`EventBus::run`] (or calls
//! [`EventBus::dispatch_pending`]). Handlers therefore never run inside the
//! watcher.

use core::cell::RefCell;

use embassy_sync::{
    blocking_mutex::{
        Mutex,
        raw::RawMutex,
    },
    channel::Channel,
};

use crate::{
    Button,
    ButtonEvent,
    Handler,
    error::{
        Error,
        Result,
    },
};

/// Records the queue holds before [`EventBus::post`] starts dropping them.
pub const EVENT_QUEUE_DEPTH: usize = 8;

/// One key transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EventRecord {
    pub button: Button,
    pub event: ButtonEvent,
}

/// Handle for a registered handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Subscription {
    slot: usize,
    button: Button,
    event: ButtonEvent,
}

impl Subscription {
    pub const fn slot(&self) -> usize {
        self.slot
    }

    pub const fn button(&self) -> Button {
        self.button
    }

    pub const fn event(&self) -> ButtonEvent {
        self.event
    }
}

#[derive(Clone, Copy)]
struct Entry {
    button: Button,
    event: ButtonEvent,
    handler: Handler,
}

/// Queue of key events plus a fixed table of up to `N` handlers.
pub struct EventBus<M: RawMutex, const N: usize> {
    entries: Mutex<M, RefCell<[Option<Entry>; N]>>,
    queue: Channel<M, EventRecord, EVENT_QUEUE_DEPTH>,
}

impl<M: RawMutex, const N: usize> Default for EventBus<M, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: RawMutex, const N: usize> EventBus<M, N> {
    pub const fn new() -> Self {
        Self {
            entries: Mutex::new(RefCell::new([None; N])),
            queue: Channel::new(),
        }
    }

    /// Add `handler` for `event` on `button`. Several handlers may share a
    /// key and event.
    pub fn subscribe(
        &self,
        button: Button,
        event: ButtonEvent,
        handler: Handler,
    ) -> Result<Subscription> {
        self.entries.lock(|entries| -> Result<Subscription> {
            let mut entries = entries.borrow_mut();
            let slot = entries
                .iter()
                .position(Option::is_none)
                .ok_or(Error::SubscriptionsFull)?;
            entries[slot] = Some(Entry {
                button,
                event,
                handler,
            });
            Ok(Subscription {
                slot,
                button,
                event,
            })
        })
    }

    pub fn subscriptions(&self) -> usize {
        self.entries
            .lock(|entries| entries.borrow().iter().flatten().count())
    }

    /// Queue an event without waiting. A full queue drops it.
    pub fn post(&self, button: Button, event: ButtonEvent) -> Result<()> {
        self.queue
            .try_send(EventRecord { button, event })
            .map_err(|_| {
                warn!("event queue full, dropping {:?} on {:?}", event, button);
                Error::QueueFull { button, event }
            })
    }

    /// Call every handler subscribed to `record`. Returns how many ran.
    pub fn dispatch(&self, record: EventRecord) -> usize {
        // Copy the handlers out so they may subscribe while running.
        let entries = self.entries.lock(|entries| *entries.borrow());
        let matching = entries.map(|entry| {
            entry
                .filter(|e| e.button == record.button && e.event == record.event)
                .map(|e| e.handler)
        });

        let mut called = 0;
        for handler in matching.into_iter().flatten() {
            handler();
            called += 1;
        }
        called
    }

    /// Dispatch everything queued so far. Returns how many handlers ran.
    pub fn dispatch_pending(&self) -> usize {
        let mut called = 0;
        while let Ok(record) = self.queue.try_receive() {
            called += self.dispatch(record);
        }
        called
    }

    /// Dispatch events as they arrive, forever.
    pub async fn run(&self) -> ! {
        loop {
            let record = self.queue.receive().await;
            trace!("dispatching {:?}", record);
            self.dispatch(record);
        }
    }
}

/// What changed since the previous sample of a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Transition {
    None,
    Pressed,
    Released,
}

impl Transition {
    /// Events to report. A release also completes a click.
    pub const fn events(self) -> &'static [ButtonEvent] {
        match self {
            Self::None => &[],
            Self::Pressed => &[ButtonEvent::Pressed],
            Self::Released => &[ButtonEvent::Released, ButtonEvent::Clicked],
        }
    }
}

/// Last known level of every key.
#[derive(Debug, Default, Clone, Copy)]
pub struct ButtonTracker {
    held: [bool; 5],
}

impl ButtonTracker {
    pub const fn new() -> Self {
        Self { held: [false; 5] }
    }

    pub fn update(&mut self, button: Button, pressed: bool) -> Transition {
        let held = &mut self.held[button.index()];
        let transition = match (*held, pressed) {
            (false, true) => Transition::Pressed,
            (true, false) => Transition::Released,
            _ => Transition::None,
        };
        *held = pressed;
        transition
    }

    /// Feed a sample and post whatever it produced to `bus`.
    pub fn feed<M: RawMutex, const N: usize>(
        &mut self,
        bus: &EventBus<M, N>,
        button: Button,
        pressed: bool,
    ) {
        for &event in self.update(button, pressed).events() {
            // Already logged by the bus.
            let _ = bus.post(button, event);
        }
    }
}
