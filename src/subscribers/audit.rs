//! # Stateful subscriber that records the audit trail.
//!
//! [`AuditTrail`] keeps an in-memory log of every event it observes. Since
//! events are the control plane's only externally observable record, this is
//! the simplest way to retain them for later inspection (post-incident
//! review, assertions in tests).
//!
//! ## Architecture
//! ```text
//!  Controller/Guards ── publish(Event) ──► Bus ──► SubscriberSet
//!                                                      │
//!                                                      ▼
//!                                        AuditTrail (Vec<Event> behind Mutex)
//!                                                      │
//!                                         snapshot() ──► Vec<Event> (by seq)
//! ```

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::events::{Event, EventKind};
use crate::subscribers::Subscribe;

/// Records every observed event, in arrival order.
///
/// Thread-safe and cloneable — clones share the same underlying log, so the
/// handle registered with the controller and the handle kept for inspection
/// see the same records.
#[derive(Clone, Default)]
pub struct AuditTrail {
    inner: Arc<Mutex<Vec<Event>>>,
}

impl AuditTrail {
    /// Creates a new, empty trail.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of all recorded events.
    pub async fn snapshot(&self) -> Vec<Event> {
        self.inner.lock().await.clone()
    }

    /// Number of events recorded for the given kind.
    pub async fn count(&self, kind: EventKind) -> usize {
        self.inner
            .lock()
            .await
            .iter()
            .filter(|e| e.kind == kind)
            .count()
    }

    /// Number of recorded events.
    pub async fn len(&self) -> usize {
        self.inner.lock().await.len()
    }

    /// True if nothing has been recorded yet.
    pub async fn is_empty(&self) -> bool {
        self.inner.lock().await.is_empty()
    }
}

#[async_trait]
impl Subscribe for AuditTrail {
    async fn on_event(&self, event: &Event) {
        self.inner.lock().await.push(event.clone());
    }

    fn name(&self) -> &'static str {
        "audit-trail"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ident::Principal;

    #[tokio::test]
    async fn records_events_in_order() {
        let trail = AuditTrail::new();
        trail
            .on_event(&Event::new(EventKind::PauseTriggered).with_caller(Principal::new("oncall")))
            .await;
        trail.on_event(&Event::new(EventKind::UnpauseTriggered)).await;

        let events = trail.snapshot().await;
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].kind, EventKind::PauseTriggered);
        assert_eq!(events[1].kind, EventKind::UnpauseTriggered);
        assert_eq!(trail.count(EventKind::PauseTriggered).await, 1);
    }

    #[tokio::test]
    async fn clones_share_the_same_log() {
        let trail = AuditTrail::new();
        let handle = trail.clone();

        trail.on_event(&Event::new(EventKind::TargetAdded).with_target("db")).await;
        assert_eq!(handle.len().await, 1);
        assert!(!handle.is_empty().await);
    }
}
