//! Audit events: types and broadcast bus.
//!
//! This module groups the event **data model** and the **bus** used to
//! publish/subscribe to audit events emitted by the controller and by
//! resource-side guards.
//!
//! ## Contents
//! - [`EventKind`], [`Event`] — event classification and payload metadata
//! - [`Bus`] — thin wrapper over `tokio::sync::broadcast`
//!
//! ## Quick reference
//! - **Publishers**: `Controller` (broadcast and administration events),
//!   `PauseGuard` (controller-change events, when a bus is attached).
//! - **Consumers**: the controller's subscriber listener (fans out to
//!   `SubscriberSet`) and ad-hoc receivers from `Controller::subscribe()`.

mod bus;
mod event;

pub use bus::Bus;
pub use event::{Event, EventKind};
