//! # Simple logging subscriber for debugging and demos.
//!
//! [`LogWriter`] prints events to stdout in a human-readable format.
//! This is primarily useful for development, debugging, and examples.
//!
//! ## Output format
//! ```text
//! [pause-all] caller=oncall
//! [unpause-all] caller=root
//! [migrate-all] caller=root controller=panic-2
//! [pauser-set] principal=oncall enabled=true
//! [owner-changed] from=root to=root-2
//! [target-added] target=db
//! [target-removed] target=db
//! [controller-changed] target=db controller=<burn>
//! ```

use async_trait::async_trait;

use crate::events::{Event, EventKind};
use crate::subscribers::Subscribe;

/// Simple stdout logging subscriber.
///
/// Enabled via the `logging` feature. Prints human-readable event
/// descriptions to stdout for debugging and demonstration purposes.
///
/// Not intended for production use — implement a custom [`Subscribe`] for
/// structured logging or metrics collection.
#[derive(Default)]
pub struct LogWriter;

#[async_trait]
impl Subscribe for LogWriter {
    async fn on_event(&self, e: &Event) {
        match e.kind {
            EventKind::PauseTriggered => {
                if let Some(caller) = &e.caller {
                    println!("[pause-all] caller={caller}");
                }
            }
            EventKind::UnpauseTriggered => {
                if let Some(caller) = &e.caller {
                    println!("[unpause-all] caller={caller}");
                }
            }
            EventKind::MigrationTriggered => {
                if let (Some(caller), Some(ctrl)) = (&e.caller, &e.controller) {
                    println!("[migrate-all] caller={caller} controller={ctrl}");
                }
            }
            EventKind::PauserSet => {
                if let (Some(principal), Some(enabled)) = (&e.principal, e.enabled) {
                    println!("[pauser-set] principal={principal} enabled={enabled}");
                }
            }
            EventKind::OwnershipTransferred => {
                if let (Some(from), Some(to)) = (&e.caller, &e.principal) {
                    println!("[owner-changed] from={from} to={to}");
                }
            }
            EventKind::TargetAdded => {
                if let Some(target) = &e.target {
                    println!("[target-added] target={target}");
                }
            }
            EventKind::TargetRemoved => {
                if let Some(target) = &e.target {
                    println!("[target-removed] target={target}");
                }
            }
            EventKind::ControllerChanged => {
                if let (Some(target), Some(ctrl)) = (&e.target, &e.controller) {
                    println!("[controller-changed] target={target} controller={ctrl}");
                }
            }
        }
    }

    fn name(&self) -> &'static str {
        "log-writer"
    }
}
