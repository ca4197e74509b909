//! # Audit events emitted by the controller and by resource guards.
//!
//! The [`EventKind`] enum classifies event types across three categories:
//! - **Broadcast events**: one per broadcast invocation (pause, unpause,
//!   migration), emitted regardless of how many per-target calls failed.
//! - **Administration events**: role and registry mutations performed by the
//!   owner (pauser grants, ownership transfer, target add/remove).
//! - **Resource events**: emitted by a guard when its controller reference
//!   changes.
//!
//! Events are the only externally observable audit trail of the control
//! plane. The [`Event`] struct carries optional metadata (caller, affected
//! principal, target name, controller identity) set per kind.
//!
//! ## Ordering guarantees
//! Each event has a globally unique sequence number (`seq`) that increases
//! monotonically. Use `seq` to restore the exact order when events are
//! delivered out of order.
//!
//! ## Example
//! ```rust
//! use breakglass::{Event, EventKind, Principal};
//!
//! let ev = Event::new(EventKind::PauseTriggered).with_caller(Principal::new("oncall"));
//!
//! assert_eq!(ev.kind, EventKind::PauseTriggered);
//! assert_eq!(ev.caller.as_ref().map(|p| p.as_str()), Some("oncall"));
//! ```

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};
use std::time::SystemTime;

use crate::ident::{ControllerId, Principal};

/// Global sequence counter for event ordering.
static EVENT_SEQ: AtomicU64 = AtomicU64::new(0);

/// Classification of audit events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    // === Broadcast events ===
    /// A pause broadcast ran over the registry.
    ///
    /// Emitted exactly once per `pause_all` invocation, after the pass,
    /// regardless of per-target failures.
    ///
    /// Sets:
    /// - `caller`: the pauser (or owner) that triggered the broadcast
    /// - `at`: wall-clock timestamp
    /// - `seq`: global sequence
    PauseTriggered,

    /// An unpause broadcast ran over the registry.
    ///
    /// Emitted exactly once per `unpause_all` invocation; carries no
    /// per-target detail.
    ///
    /// Sets:
    /// - `caller`: the owner that triggered the broadcast
    /// - `at`: wall-clock timestamp
    /// - `seq`: global sequence
    UnpauseTriggered,

    /// Every registered target was re-pointed at a new controller.
    ///
    /// Emitted only when the whole batch succeeded; an aborted migration
    /// emits nothing.
    ///
    /// Sets:
    /// - `caller`: the owner that triggered the migration
    /// - `controller`: the new controller identity (may be the burn value)
    /// - `at`: wall-clock timestamp
    /// - `seq`: global sequence
    MigrationTriggered,

    // === Administration events ===
    /// A pauser membership flag was written.
    ///
    /// Emitted on every `set_pauser` call, including same-value re-sets.
    ///
    /// Sets:
    /// - `principal`: the principal whose flag was written
    /// - `enabled`: the written flag value
    /// - `at`: wall-clock timestamp
    /// - `seq`: global sequence
    PauserSet,

    /// Ownership moved to a new principal (single-step, immediate).
    ///
    /// Sets:
    /// - `caller`: the previous owner
    /// - `principal`: the new owner
    /// - `at`: wall-clock timestamp
    /// - `seq`: global sequence
    OwnershipTransferred,

    /// A target was inserted into the registry.
    ///
    /// Emitted only for actual insertions; re-adding a present target is a
    /// silent no-op and produces no event.
    ///
    /// Sets:
    /// - `target`: target name
    /// - `at`: wall-clock timestamp
    /// - `seq`: global sequence
    TargetAdded,

    /// A target was removed from the registry.
    ///
    /// Emitted only for actual removals; removing an absent target is a
    /// silent no-op.
    ///
    /// Sets:
    /// - `target`: target name
    /// - `at`: wall-clock timestamp
    /// - `seq`: global sequence
    TargetRemoved,

    // === Resource events ===
    /// A guard's recorded controller reference was overwritten.
    ///
    /// Emitted by [`PauseGuard`](crate::PauseGuard) when a bus is attached.
    ///
    /// Sets:
    /// - `target`: the guarded resource's name
    /// - `controller`: the new controller identity (may be the burn value)
    /// - `at`: wall-clock timestamp
    /// - `seq`: global sequence
    ControllerChanged,
}

/// Audit event with optional metadata.
///
/// - `seq`: monotonic global sequence for ordering
/// - `at`: wall-clock timestamp (for logs)
/// - other optional fields are set depending on the [`EventKind`]
#[derive(Clone, Debug)]
pub struct Event {
    /// Globally unique, monotonically increasing sequence number.
    pub seq: u64,
    /// Wall-clock timestamp.
    pub at: SystemTime,
    /// Event classification.
    pub kind: EventKind,

    /// Principal that triggered the operation, if applicable.
    pub caller: Option<Principal>,
    /// Principal affected by a role mutation, if applicable.
    pub principal: Option<Principal>,
    /// Written membership flag (for [`EventKind::PauserSet`]).
    pub enabled: Option<bool>,
    /// Name of the affected target, if applicable.
    pub target: Option<Arc<str>>,
    /// Controller identity carried by migration/controller-change events.
    pub controller: Option<ControllerId>,
}

impl Event {
    /// Creates a new event of the given kind with current timestamp and next
    /// sequence number.
    pub fn new(kind: EventKind) -> Self {
        Self {
            seq: EVENT_SEQ.fetch_add(1, AtomicOrdering::Relaxed),
            at: SystemTime::now(),
            kind,
            caller: None,
            principal: None,
            enabled: None,
            target: None,
            controller: None,
        }
    }

    /// Attaches the triggering principal.
    #[inline]
    pub fn with_caller(mut self, caller: Principal) -> Self {
        self.caller = Some(caller);
        self
    }

    /// Attaches the affected principal.
    #[inline]
    pub fn with_principal(mut self, principal: Principal) -> Self {
        self.principal = Some(principal);
        self
    }

    /// Attaches a membership flag value.
    #[inline]
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = Some(enabled);
        self
    }

    /// Attaches a target name.
    #[inline]
    pub fn with_target(mut self, target: impl Into<Arc<str>>) -> Self {
        self.target = Some(target.into());
        self
    }

    /// Attaches a controller identity.
    #[inline]
    pub fn with_controller(mut self, controller: ControllerId) -> Self {
        self.controller = Some(controller);
        self
    }
}
