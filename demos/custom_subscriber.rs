//! # Demo: custom_subscriber
//!
//! Plug a custom [`Subscribe`] implementation into the controller next to
//! the built-in [`AuditTrail`], and inspect both after an incident.
//!
//! ## Run
//! ```bash
//! cargo run --example custom_subscriber
//! ```

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use breakglass::{
    AuditTrail, Controller, ControllerId, Event, EventKind, Gate, Principal, Subscribe,
};

/// Counts panic-button presses; a real implementation would page someone.
struct Pager {
    pauses: AtomicUsize,
}

#[async_trait]
impl Subscribe for Pager {
    async fn on_event(&self, event: &Event) {
        if event.kind == EventKind::PauseTriggered {
            let n = self.pauses.fetch_add(1, Ordering::Relaxed) + 1;
            let caller = event.caller.as_ref().map(Principal::as_str).unwrap_or("?");
            println!("[pager] pause #{n} triggered by {caller}");
        }
    }

    fn name(&self) -> &'static str {
        "pager"
    }

    fn queue_capacity(&self) -> usize {
        64
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let root = Principal::new("root");
    let trail = AuditTrail::new();
    let pager = Arc::new(Pager {
        pauses: AtomicUsize::new(0),
    });

    let ctrl = Controller::builder(ControllerId::new("panic-1"), root.clone())
        .with_subscribers(vec![pager.clone() as _, Arc::new(trail.clone()) as _])
        .build()?;

    ctrl.add_targets(&root, vec![Gate::arc("db", ctrl.id().clone())])
        .await?;
    ctrl.set_pauser(&root, Principal::new("oncall"), true).await?;

    ctrl.pause_all(&Principal::new("oncall")).await?;
    ctrl.unpause_all(&root).await?;
    ctrl.pause_all(&root).await?;
    ctrl.unpause_all(&root).await?;

    // Give the workers a moment to drain their queues
    tokio::time::sleep(Duration::from_millis(50)).await;

    println!(
        "audit trail: {} events, {} pauses, {} unpauses",
        trail.len().await,
        trail.count(EventKind::PauseTriggered).await,
        trail.count(EventKind::UnpauseTriggered).await,
    );
    for ev in trail.snapshot().await {
        println!("  seq={} kind={:?}", ev.seq, ev.kind);
    }
    Ok(())
}
