//! # breakglass
//!
//! **Breakglass** is an emergency "panic button" control plane for Rust
//! services.
//!
//! It lets a small set of trusted principals instantly suspend a registered
//! group of managed resources, while a single higher-trust owner retains
//! exclusive rights to resume operation, reconfigure the registry, or
//! atomically re-point every resource at a replacement controller. The crate
//! is designed as a building block: resources embed a [`PauseGuard`] (or
//! implement [`Target`] directly) and the [`Controller`] drives them.
//!
//! ## Architecture
//! ### Overview
//! ```text
//!      Owner ───────────────► set_pauser / transfer_ownership
//!      Owner ───────────────► add_targets / remove_targets
//!      Owner ───────────────► unpause_all / migrate_all(new)
//!      Pauser (or Owner) ───► pause_all
//!                                  │
//! ┌────────────────────────────────▼──────────────────────────────────┐
//! │  Controller (orchestrator)                                        │
//! │  - Roles (owner + pauser membership)                              │
//! │  - TargetRegistry (duplicate-free, name-keyed)                    │
//! │  - Bus (broadcast audit events)                                   │
//! │  - SubscriberSet (fans out to user subscribers)                   │
//! └──────┬──────────────────┬──────────────────┬───────────────┬──────┘
//!        ▼                  ▼                  ▼               │
//!     ┌──────────────┐   ┌──────────────┐   ┌──────────────┐   │
//!     │   Target A   │   │   Target B   │   │   Target N   │   │
//!     │ (PauseGuard) │   │ (PauseGuard) │   │ (PauseGuard) │   │
//!     └┬─────────────┘   └┬─────────────┘   └┬─────────────┘   │
//!      │ Publishes        │                  │                 │
//!      │ ControllerChanged│ (when a bus      │                 │
//!      │                  │  is attached)    │                 │
//!      ▼                  ▼                  ▼                 ▼
//! ┌───────────────────────────────────────────────────────────────────┐
//! │                        Bus (broadcast channel)                    │
//! │               (capacity: ControlConfig::bus_capacity)             │
//! └─────────────────────────────────┬─────────────────────────────────┘
//!                                   ▼
//!                       ┌────────────────────────┐
//!                       │  subscriber listener   │
//!                       └───┬────────────────┬───┘
//!                           ▼                ▼
//!                    audit taps        SubscriberSet
//!               (Controller::subscribe) (per-sub queues)
//!                                  ┌─────────┼─────────┐
//!                                  ▼         ▼         ▼
//!                                  worker1  worker2  workerN
//!                                  ▼         ▼         ▼
//!                             sub1.on   sub2.on   subN.on
//!                              _event()  _event()  _event()
//! ```
//!
//! ### Broadcast semantics
//! ```text
//! pause_all(caller)        best effort: per-target failures are discarded,
//! unpause_all(caller)      the pass continues, one audit event either way
//!
//! migrate_all(caller, new) all-or-nothing: validate every target first,
//!                          then apply; a refusal rolls the batch back and
//!                          no audit event is emitted
//! ```
//! Pause and unpause are incident-response primitives — availability of
//! effect matters more than uniformity. Migration changes a trust
//! relationship and must never leave some targets under old control and
//! others under new control.
//!
//! ## Features
//! | Area              | Description                                                           | Key types / traits                       |
//! |-------------------|-----------------------------------------------------------------------|------------------------------------------|
//! | **Roles**         | One transferable owner, many pausers; owner is implicitly a pauser.   | [`Principal`], [`Role`]                  |
//! | **Registry**      | Duplicate-free set of managed resources, owner-mutated.               | [`TargetRef`]                            |
//! | **Broadcasts**    | Best-effort pause/unpause, atomic migration.                          | [`Controller`]                           |
//! | **Resource side** | Embeddable guard gating on caller identity and paused flag.           | [`PauseGuard`], [`Gate`], [`Target`]     |
//! | **Audit**         | Every operation effect emits exactly one observable event.            | [`Event`], [`EventKind`], [`AuditTrail`] |
//! | **Errors**        | Typed errors for controller and resource-side failures.               | [`ControlError`], [`GuardError`]         |
//! | **Configuration** | Centralized construction-time settings.                               | [`ControlConfig`]                        |
//!
//! ## Optional features
//! - `logging`: exports a simple built-in [`LogWriter`] _(demo/reference only)_.
//!
//! ## Example
//! ```rust
//! use breakglass::{Controller, ControllerId, Gate, Principal};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let root = Principal::new("root");
//!     let ctrl = Controller::builder(ControllerId::new("panic-1"), root.clone()).build()?;
//!
//!     // Register resources and grant the on-call engineer the pauser role.
//!     let db = Gate::arc("db", ctrl.id().clone());
//!     let api = Gate::arc("api", ctrl.id().clone());
//!     ctrl.add_targets(&root, vec![db.clone(), api.clone()]).await?;
//!     ctrl.set_pauser(&root, Principal::new("oncall"), true).await?;
//!
//!     // Incident: the on-call engineer hits the panic button.
//!     ctrl.pause_all(&Principal::new("oncall")).await?;
//!
//!     // Only the owner may resume.
//!     ctrl.unpause_all(&root).await?;
//!     Ok(())
//! }
//! ```

mod core;
mod error;
mod events;
mod ident;
mod subscribers;
mod targets;

// ---- Public re-exports ----

pub use crate::core::{ControlConfig, Controller, ControllerBuilder, Role};
pub use error::{ControlError, GuardError};
pub use events::{Bus, Event, EventKind};
pub use ident::{ControllerId, Principal};
pub use subscribers::{AuditTrail, Subscribe, SubscriberSet};
pub use targets::{Gate, PauseGuard, Target, TargetRef};

// Optional: expose a simple built-in logger subscriber (demo/reference).
// Enable with: `--features logging`
#[cfg(feature = "logging")]
pub use subscribers::LogWriter;
