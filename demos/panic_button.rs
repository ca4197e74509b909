//! # Demo: panic_button
//!
//! The full incident flow: register resources, grant the on-call engineer
//! the pauser role, hit the panic button, then recover as the owner.
//!
//! ## Flow
//! ```text
//! main()
//!   ├─► Controller::builder(id, root).with_subscribers([LogWriter]).build()
//!   ├─► add_targets(db, api, worker)
//!   ├─► set_pauser(oncall, true)
//!   │
//!   ├─► oncall: pause_all()          ← the panic button
//!   │     └─► every target suspends; business ops now fail fast
//!   │
//!   └─► root: unpause_all()          ← recovery is owner-only
//! ```
//!
//! ## Run
//! ```bash
//! cargo run --example panic_button --features logging
//! ```

use std::sync::Arc;
use std::time::Duration;

use breakglass::{Controller, ControllerId, Gate, LogWriter, Principal, Subscribe};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let root = Principal::new("root");
    let oncall = Principal::new("oncall");

    // 1) Build the controller with a logging subscriber
    let subs: Vec<Arc<dyn Subscribe>> = vec![Arc::new(LogWriter)];
    let ctrl = Controller::builder(ControllerId::new("panic-1"), root.clone())
        .with_subscribers(subs)
        .build()?;

    // 2) Register the resources this controller may suspend
    let db = Arc::new(Gate::new("db", ctrl.id().clone()).with_bus(ctrl.bus()));
    let api = Arc::new(Gate::new("api", ctrl.id().clone()).with_bus(ctrl.bus()));
    ctrl.add_targets(&root, vec![db.clone() as _, api.clone() as _])
        .await?;

    // 3) Grant the on-call engineer pause-only rights
    ctrl.set_pauser(&root, oncall.clone(), true).await?;

    // 4) Incident: on-call hits the panic button
    ctrl.pause_all(&oncall).await?;
    println!(
        "db paused={} api paused={}",
        db.guard().is_paused().await,
        api.guard().is_paused().await
    );

    // Business operations are gated while suspended
    if let Err(err) = db.guard().ensure_active().await {
        println!("db rejects writes: {err}");
    }

    // 5) Recovery: only the owner may resume (oncall would get Unauthorized)
    assert!(ctrl.unpause_all(&oncall).await.is_err());
    ctrl.unpause_all(&root).await?;
    println!("db paused={}", db.guard().is_paused().await);

    // Let the subscriber worker drain its queue before exiting
    tokio::time::sleep(Duration::from_millis(50)).await;
    Ok(())
}
