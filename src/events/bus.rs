//! # Event bus for broadcasting audit events.
//!
//! [`Bus`] is a thin wrapper around [`tokio::sync::broadcast`] that provides
//! non-blocking event publishing from multiple sources (the controller and
//! any number of resource-side guards).
//!
//! ## Architecture
//! ```text
//! Publishers (many):                  Receivers (many):
//!   Controller ──┐
//!   Guard A    ──┼──────► Bus ───────► subscriber listener ──► SubscriberSet
//!   Guard B    ──┤  (broadcast chan)
//!   Guard N    ──┘                   └► ad-hoc audit taps (Controller::subscribe)
//! ```
//!
//! ## Rules
//! - **Non-blocking publish**: `publish()` never blocks; it calls `broadcast::Sender::send`.
//! - **Bounded capacity**: a single ring buffer stores recent events for all receivers.
//! - **Lag handling**: slow receivers get `RecvError::Lagged(n)` and skip `n` oldest items.
//! - **No persistence**: events are lost if there are no active receivers at send time.

use tokio::sync::broadcast;

use super::event::Event;

/// Broadcast channel for audit events.
///
/// Thin wrapper over [`tokio::sync::broadcast`] that provides a
/// `publish`/`subscribe` API. Multiple publishers can publish concurrently;
/// receivers get clones of each event.
///
/// ### Properties
/// - **Non-blocking**: `publish()` returns immediately.
/// - **Fire-and-forget**: no delivery or durability guarantees.
/// - **Cloneable**: cheap to clone (internally holds an `Arc`-backed sender).
#[derive(Clone, Debug)]
pub struct Bus {
    tx: broadcast::Sender<Event>,
}

impl Bus {
    /// Creates a new bus with the given channel capacity.
    ///
    /// ### Notes
    /// - Capacity is **shared** across all receivers (not per-subscriber).
    /// - When receivers lag, they will observe `RecvError::Lagged`.
    /// - The minimum capacity is 1 (clamped).
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        let (tx, _rx) = broadcast::channel::<Event>(capacity);
        Self { tx }
    }

    /// Publishes an event to all active receivers.
    ///
    /// - Takes ownership of the event; the broadcast channel clones it for each receiver.
    /// - If there are no receivers, the event is dropped (this function still returns immediately).
    pub fn publish(&self, ev: Event) {
        let _ = self.tx.send(ev);
    }

    /// Creates a new receiver that will observe subsequent events.
    ///
    /// - Each call creates an **independent** receiver.
    /// - A receiver only gets events **sent after** it subscribes.
    /// - Slow receivers get `RecvError::Lagged(n)` and skip over missed items.
    pub fn subscribe(&self) -> broadcast::Receiver<Event> {
        self.tx.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::EventKind;

    #[tokio::test]
    async fn receivers_observe_published_events() {
        let bus = Bus::new(8);
        let mut rx = bus.subscribe();

        bus.publish(Event::new(EventKind::PauseTriggered));
        bus.publish(Event::new(EventKind::UnpauseTriggered));

        assert_eq!(rx.recv().await.unwrap().kind, EventKind::PauseTriggered);
        assert_eq!(rx.recv().await.unwrap().kind, EventKind::UnpauseTriggered);
    }

    #[tokio::test]
    async fn late_subscribers_miss_earlier_events() {
        let bus = Bus::new(8);
        bus.publish(Event::new(EventKind::TargetAdded).with_target("db"));

        let mut rx = bus.subscribe();
        bus.publish(Event::new(EventKind::TargetRemoved).with_target("db"));
        assert_eq!(rx.recv().await.unwrap().kind, EventKind::TargetRemoved);
    }
}
