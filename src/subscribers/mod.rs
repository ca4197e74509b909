//! # Audit event subscribers.
//!
//! This module provides the [`Subscribe`] trait and built-in implementations
//! for handling events broadcast through the [`Bus`](crate::events::Bus).
//!
//! ## Architecture
//! ```text
//! Event flow:
//!   Controller/Guards ── publish(Event) ──► Bus ──► subscriber listener
//!                                                        │
//!                                                  SubscriberSet
//!                                              ┌────────┼─────────┐
//!                                              ▼        ▼         ▼
//!                                         AuditTrail LogWriter  Custom
//! ```
//!
//! ## Subscriber types
//! - **Passive subscribers** — observe and react to events (logging, paging,
//!   metrics).
//! - **Stateful subscribers** — retain state derived from events
//!   ([`AuditTrail`]).

mod audit;
mod set;
mod subscribe;

#[cfg(feature = "logging")]
mod log;

pub use audit::AuditTrail;
pub use set::SubscriberSet;
pub use subscribe::Subscribe;

#[cfg(feature = "logging")]
pub use log::LogWriter;
