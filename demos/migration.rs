//! # Demo: migration
//!
//! Atomically re-point every registered resource at a replacement
//! controller, then permanently retire a registry by migrating it to the
//! burn identity.
//!
//! ## Flow
//! ```text
//! panic-1 controls {db, api}
//!   ├─► migrate_all(panic-2)   all targets now answer to panic-2 only
//!   │     └─► panic-1 broadcasts no longer land
//!   └─► (as panic-2's owner) migrate_all(burn)
//!         └─► nobody can pause these resources ever again
//! ```
//!
//! ## Run
//! ```bash
//! cargo run --example migration
//! ```

use std::sync::Arc;

use breakglass::{Controller, ControllerId, EventKind, Gate, Principal, Target};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let root = Principal::new("root");
    let old_id = ControllerId::new("panic-1");
    let new_id = ControllerId::new("panic-2");

    // The retiring controller and its registry
    let old = Controller::builder(old_id.clone(), root.clone()).build()?;
    let db = Arc::new(Gate::new("db", old_id.clone()));
    let api = Arc::new(Gate::new("api", old_id.clone()));
    old.add_targets(&root, vec![db.clone() as _, api.clone() as _])
        .await?;

    // Watch the audit trail through a bus tap
    let mut audit = old.subscribe();

    // 1) Re-point everything at the replacement controller, atomically
    old.migrate_all(&root, new_id.clone()).await?;
    println!("db now answers to {}", db.controller().await);

    while let Ok(ev) = audit.try_recv() {
        if ev.kind == EventKind::MigrationTriggered {
            println!("migration recorded (seq={})", ev.seq);
        }
    }

    // The old controller lost its authority: the broadcast still runs, but
    // every per-target refusal is discarded and nothing suspends.
    old.pause_all(&root).await?;
    println!("db paused after stale broadcast: {}", db.guard().is_paused().await);

    // 2) The replacement takes over the same registry
    let new = Controller::builder(new_id, root.clone()).build()?;
    new.add_targets(&root, vec![db.clone() as _, api.clone() as _])
        .await?;
    new.pause_all(&root).await?;
    println!("db paused by replacement: {}", db.guard().is_paused().await);
    new.unpause_all(&root).await?;

    // 3) Retire the registry for good: migrate to the burn identity
    new.migrate_all(&root, ControllerId::burn()).await?;
    println!("db now answers to {}", db.controller().await);

    new.pause_all(&root).await?;
    println!("db paused after burn: {}", db.guard().is_paused().await);
    Ok(())
}
