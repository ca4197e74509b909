//! # Controller: roles + registry + broadcast orchestration.
//!
//! The [`Controller`] owns the role state, the target registry, the audit
//! event bus, and the subscriber fan-out. It exposes the three broadcast
//! operations and the owner-gated mutations.
//!
//! ## Key responsibilities
//! - gate every operation with the role guard functions (owner / pauser)
//! - run best-effort pause/unpause passes that contain per-target failures
//! - run all-or-nothing migration (validate, then apply with rollback)
//! - publish exactly one audit event per successful operation effect
//!
//! ## High-level architecture
//! ```text
//! Owner ──► add_targets / remove_targets / set_pauser / transfer_ownership
//! Owner ──► unpause_all / migrate_all(new)          Pauser|Owner ──► pause_all
//!                     │
//!                     ▼
//!        ┌───────────────────────────┐
//!        │ Controller                │
//!        │  RwLock<ControlState>     │   write-locked for the whole call,
//!        │   ├─ Roles               │   so no two invocations interleave
//!        │   └─ TargetRegistry      │   and a pass sees a frozen registry
//!        └──────┬────────────┬──────┘
//!               │ pause()    │ update_controller()
//!               ▼            ▼
//!        ┌──────────┐ ┌──────────┐ ┌──────────┐
//!        │ Target A │ │ Target B │ │ Target N │   (capability contract)
//!        └──────────┘ └──────────┘ └──────────┘
//!
//! Audit flow:
//!   Controller/Guards ── publish(Event) ──► Bus ──► listener ──► SubscriberSet
//!                                            └──► Controller::subscribe() taps
//! ```
//!
//! ## Serialization
//! Every mutating or broadcasting operation holds the state write lock for
//! its entire duration, including the per-target calls. This realizes the
//! one-canonical-order execution model: registry mutations can never
//! interleave with a broadcast pass, and no reader observes a half-updated
//! registry. Targets must not call back into the controller.
//!
//! ## Failure containment
//! `pause_all`/`unpause_all` discard each per-target failure and continue;
//! one resource already being paused never prevents pausing the rest. The
//! broadcast itself still succeeds and still emits its single audit event.
//! `migrate_all` is the opposite: the first per-target failure aborts the
//! whole batch with no observable partial migration.

use tokio::sync::{RwLock, broadcast};

use crate::core::builder::ControllerBuilder;
use crate::core::registry::TargetRegistry;
use crate::core::roles::Roles;
use crate::error::ControlError;
use crate::events::{Bus, Event, EventKind};
use crate::ident::{ControllerId, Principal};
use crate::targets::TargetRef;

/// Role and registry state, guarded by one lock for whole-operation
/// exclusivity.
pub(crate) struct ControlState {
    pub(crate) roles: Roles,
    pub(crate) registry: TargetRegistry,
}

/// Emergency pause control plane over a registry of managed resources.
///
/// Built via [`Controller::builder`]. All operations take the caller
/// explicitly; there is no ambient identity.
///
/// # Example
/// ```
/// use breakglass::{Controller, ControllerId, Gate, Principal};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() -> Result<(), breakglass::ControlError> {
/// let root = Principal::new("root");
/// let ctrl = Controller::builder(ControllerId::new("panic-1"), root.clone()).build()?;
///
/// ctrl.add_targets(&root, vec![Gate::arc("db", ctrl.id().clone())]).await?;
/// ctrl.set_pauser(&root, Principal::new("oncall"), true).await?;
///
/// ctrl.pause_all(&Principal::new("oncall")).await?;
/// ctrl.unpause_all(&root).await?;
/// # Ok(())
/// # }
/// ```
pub struct Controller {
    id: ControllerId,
    bus: Bus,
    state: RwLock<ControlState>,
}

impl std::fmt::Debug for Controller {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Controller")
            .field("id", &self.id)
            .field("bus", &self.bus)
            .finish_non_exhaustive()
    }
}

impl Controller {
    /// Starts building a controller with the given identity and owner.
    pub fn builder(id: ControllerId, owner: Principal) -> ControllerBuilder {
        ControllerBuilder::new(id, owner)
    }

    pub(crate) fn new_internal(id: ControllerId, bus: Bus, state: ControlState) -> Self {
        Self {
            id,
            bus,
            state: RwLock::new(state),
        }
    }

    /// The identity this controller presents to its targets.
    pub fn id(&self) -> &ControllerId {
        &self.id
    }

    /// Returns a clone of the audit event bus (e.g. to attach to guards).
    pub fn bus(&self) -> Bus {
        self.bus.clone()
    }

    /// Creates an audit tap observing all subsequent events.
    pub fn subscribe(&self) -> broadcast::Receiver<Event> {
        self.bus.subscribe()
    }

    // ---------------------------
    // Broadcast operations
    // ---------------------------

    /// Suspends every registered target, best effort.
    ///
    /// Caller must be a pauser (the owner qualifies). Each target's failure —
    /// typically [`AlreadyPaused`](crate::GuardError::AlreadyPaused) — is
    /// discarded and the pass continues; availability of effect beats
    /// uniformity during an incident. Emits exactly one
    /// [`EventKind::PauseTriggered`] naming the caller, regardless of how
    /// many per-target calls failed.
    pub async fn pause_all(&self, caller: &Principal) -> Result<(), ControlError> {
        let state = self.state.write().await;
        state.roles.ensure_pauser(caller)?;

        for target in state.registry.snapshot() {
            // Per-target containment: one refusal never stops the pass.
            let _ = target.pause(&self.id).await;
        }

        self.bus
            .publish(Event::new(EventKind::PauseTriggered).with_caller(caller.clone()));
        Ok(())
    }

    /// Resumes every registered target, best effort. Owner-only.
    ///
    /// Same pass and same per-target containment as [`Controller::pause_all`].
    /// Emits exactly one [`EventKind::UnpauseTriggered`] with no per-target
    /// detail.
    pub async fn unpause_all(&self, caller: &Principal) -> Result<(), ControlError> {
        let state = self.state.write().await;
        state.roles.ensure_owner(caller)?;

        for target in state.registry.snapshot() {
            let _ = target.unpause(&self.id).await;
        }

        self.bus
            .publish(Event::new(EventKind::UnpauseTriggered).with_caller(caller.clone()));
        Ok(())
    }

    /// Re-points every registered target at `new_controller`, all-or-nothing.
    /// Owner-only.
    ///
    /// `new_controller` is deliberately not validated: migrating to
    /// [`ControllerId::burn`] is the documented way to permanently revoke
    /// pausability for the whole registry in one call.
    ///
    /// Two phases under the exclusive lock:
    /// 1. every target must currently report this controller; the first
    ///    mismatch aborts with [`ControlError::MigrationFailed`] before any
    ///    change;
    /// 2. apply; if a target still refuses, the already-migrated prefix is
    ///    re-pointed back (this controller is authorized to do so through
    ///    `new_controller`, which those targets now record) and the batch
    ///    fails.
    ///
    /// Emits exactly one [`EventKind::MigrationTriggered`] on success,
    /// nothing on failure.
    pub async fn migrate_all(
        &self,
        caller: &Principal,
        new_controller: ControllerId,
    ) -> Result<(), ControlError> {
        let state = self.state.write().await;
        state.roles.ensure_owner(caller)?;

        let targets = state.registry.snapshot();

        for target in &targets {
            let recorded = target.controller().await;
            if recorded != self.id {
                return Err(ControlError::MigrationFailed {
                    target: target.name().into(),
                    source: crate::error::GuardError::Unauthorized {
                        caller: self.id.clone(),
                    },
                });
            }
        }

        let mut migrated: Vec<&TargetRef> = Vec::with_capacity(targets.len());
        for target in &targets {
            match target
                .update_controller(&self.id, new_controller.clone())
                .await
            {
                Ok(()) => migrated.push(target),
                Err(source) => {
                    for done in migrated {
                        let _ = done
                            .update_controller(&new_controller, self.id.clone())
                            .await;
                    }
                    return Err(ControlError::MigrationFailed {
                        target: target.name().into(),
                        source,
                    });
                }
            }
        }

        self.bus.publish(
            Event::new(EventKind::MigrationTriggered)
                .with_caller(caller.clone())
                .with_controller(new_controller),
        );
        Ok(())
    }

    // ---------------------------
    // Registry mutation (owner-only)
    // ---------------------------

    /// Registers targets. Owner-only.
    ///
    /// The whole batch is validated first: a null target (empty name) aborts
    /// with [`ControlError::InvalidTarget`] and nothing is inserted. Present
    /// names are silent no-ops; each actual insertion emits
    /// [`EventKind::TargetAdded`].
    pub async fn add_targets(
        &self,
        caller: &Principal,
        targets: Vec<TargetRef>,
    ) -> Result<(), ControlError> {
        let mut state = self.state.write().await;
        state.roles.ensure_owner(caller)?;

        if targets.iter().any(|t| t.name().is_empty()) {
            return Err(ControlError::InvalidTarget);
        }

        for target in targets {
            let name: std::sync::Arc<str> = target.name().into();
            if state.registry.insert(target) {
                self.bus
                    .publish(Event::new(EventKind::TargetAdded).with_target(name));
            }
        }
        Ok(())
    }

    /// Unregisters targets by name. Owner-only.
    ///
    /// Absent names are silent no-ops; each actual removal emits
    /// [`EventKind::TargetRemoved`].
    pub async fn remove_targets(
        &self,
        caller: &Principal,
        names: &[&str],
    ) -> Result<(), ControlError> {
        let mut state = self.state.write().await;
        state.roles.ensure_owner(caller)?;

        for name in names {
            if state.registry.remove(name).is_some() {
                self.bus
                    .publish(Event::new(EventKind::TargetRemoved).with_target(*name));
            }
        }
        Ok(())
    }

    // ---------------------------
    // Role mutation (owner-only)
    // ---------------------------

    /// Writes a pauser membership flag. Owner-only.
    ///
    /// Rejects the null principal. Idempotent in state, but emits
    /// [`EventKind::PauserSet`] on every call, including same-value re-sets.
    pub async fn set_pauser(
        &self,
        caller: &Principal,
        principal: Principal,
        can_pause: bool,
    ) -> Result<(), ControlError> {
        let mut state = self.state.write().await;
        state.roles.ensure_owner(caller)?;
        state.roles.set_pauser(principal.clone(), can_pause)?;

        self.bus.publish(
            Event::new(EventKind::PauserSet)
                .with_principal(principal)
                .with_enabled(can_pause),
        );
        Ok(())
    }

    /// Replaces the owner immediately. Owner-only; no two-step acceptance.
    ///
    /// Rejects the null principal (the owner slot is never empty). Emits
    /// [`EventKind::OwnershipTransferred`].
    pub async fn transfer_ownership(
        &self,
        caller: &Principal,
        new_owner: Principal,
    ) -> Result<(), ControlError> {
        let mut state = self.state.write().await;
        state.roles.ensure_owner(caller)?;
        let previous = state.roles.transfer(new_owner.clone())?;

        self.bus.publish(
            Event::new(EventKind::OwnershipTransferred)
                .with_caller(previous)
                .with_principal(new_owner),
        );
        Ok(())
    }

    // ---------------------------
    // Public reads
    // ---------------------------

    /// True if `principal` may trigger a pause broadcast.
    pub async fn is_pauser(&self, principal: &Principal) -> bool {
        self.state.read().await.roles.is_pauser(principal)
    }

    /// The current owner.
    pub async fn owner(&self) -> Principal {
        self.state.read().await.roles.owner().clone()
    }

    /// Snapshot of the registered targets, sorted by name.
    pub async fn list_targets(&self) -> Vec<TargetRef> {
        self.state.read().await.registry.snapshot()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;

    use super::*;
    use crate::error::GuardError;
    use crate::targets::{Gate, Target};

    fn root() -> Principal {
        Principal::new("root")
    }

    fn oncall() -> Principal {
        Principal::new("oncall")
    }

    fn panic_1() -> ControllerId {
        ControllerId::new("panic-1")
    }

    async fn controller() -> Arc<Controller> {
        Controller::builder(panic_1(), root()).build().unwrap()
    }

    /// Drains everything already published on the bus.
    fn drain(rx: &mut broadcast::Receiver<Event>) -> Vec<Event> {
        let mut events = Vec::new();
        while let Ok(ev) = rx.try_recv() {
            events.push(ev);
        }
        events
    }

    fn count_kind(events: &[Event], kind: EventKind) -> usize {
        events.iter().filter(|e| e.kind == kind).count()
    }

    /// Passes migration validation but refuses the actual re-pointing.
    struct Refuser {
        controller: ControllerId,
    }

    #[async_trait]
    impl Target for Refuser {
        fn name(&self) -> &str {
            "z-refuser"
        }

        async fn pause(&self, _caller: &ControllerId) -> Result<(), GuardError> {
            Ok(())
        }

        async fn unpause(&self, _caller: &ControllerId) -> Result<(), GuardError> {
            Ok(())
        }

        async fn update_controller(
            &self,
            caller: &ControllerId,
            _new: ControllerId,
        ) -> Result<(), GuardError> {
            Err(GuardError::Unauthorized {
                caller: caller.clone(),
            })
        }

        async fn controller(&self) -> ControllerId {
            self.controller.clone()
        }
    }

    #[tokio::test]
    async fn pauser_broadcast_pauses_every_target() {
        let ctrl = controller().await;
        let a = Arc::new(Gate::new("a", panic_1()));
        let b = Arc::new(Gate::new("b", panic_1()));
        ctrl.add_targets(&root(), vec![a.clone() as TargetRef, b.clone()])
            .await
            .unwrap();
        ctrl.set_pauser(&root(), oncall(), true).await.unwrap();

        let mut rx = ctrl.subscribe();
        ctrl.pause_all(&oncall()).await.unwrap();

        assert!(a.guard().is_paused().await);
        assert!(b.guard().is_paused().await);

        let events = drain(&mut rx);
        assert_eq!(count_kind(&events, EventKind::PauseTriggered), 1);
        let ev = events
            .iter()
            .find(|e| e.kind == EventKind::PauseTriggered)
            .unwrap();
        assert_eq!(ev.caller, Some(oncall()));
    }

    #[tokio::test]
    async fn pause_all_requires_the_pauser_role() {
        let ctrl = controller().await;
        let a = Arc::new(Gate::new("a", panic_1()));
        ctrl.add_targets(&root(), vec![a.clone() as TargetRef]).await.unwrap();

        let mut rx = ctrl.subscribe();
        let err = ctrl.pause_all(&Principal::new("mallory")).await.unwrap_err();
        assert!(matches!(err, ControlError::Unauthorized { .. }));

        assert!(!a.guard().is_paused().await);
        assert!(drain(&mut rx).is_empty());
    }

    #[tokio::test]
    async fn owner_is_an_implicit_pauser() {
        let ctrl = controller().await;
        let a = Arc::new(Gate::new("a", panic_1()));
        ctrl.add_targets(&root(), vec![a.clone() as TargetRef]).await.unwrap();

        assert!(ctrl.is_pauser(&root()).await);
        ctrl.pause_all(&root()).await.unwrap();
        assert!(a.guard().is_paused().await);
    }

    #[tokio::test]
    async fn unpause_all_is_owner_only() {
        let ctrl = controller().await;
        let a = Arc::new(Gate::new("a", panic_1()));
        ctrl.add_targets(&root(), vec![a.clone() as TargetRef]).await.unwrap();
        ctrl.set_pauser(&root(), oncall(), true).await.unwrap();
        ctrl.pause_all(&oncall()).await.unwrap();

        // A pauser may suspend but never resume.
        let err = ctrl.unpause_all(&oncall()).await.unwrap_err();
        assert!(matches!(err, ControlError::Unauthorized { .. }));
        assert!(a.guard().is_paused().await);

        ctrl.unpause_all(&root()).await.unwrap();
        assert!(!a.guard().is_paused().await);
    }

    #[tokio::test]
    async fn pause_all_tolerates_an_already_paused_target() {
        let ctrl = controller().await;
        let a = Arc::new(Gate::new("a", panic_1()));
        let b = Arc::new(Gate::new("b", panic_1()));
        let c = Arc::new(Gate::new("c", panic_1()));
        ctrl.add_targets(&root(), vec![a.clone() as TargetRef, b.clone(), c.clone()])
            .await
            .unwrap();
        ctrl.set_pauser(&root(), oncall(), true).await.unwrap();

        // B is already paused before the broadcast.
        b.pause(ctrl.id()).await.unwrap();

        let mut rx = ctrl.subscribe();
        ctrl.pause_all(&oncall()).await.unwrap();

        assert!(a.guard().is_paused().await);
        assert!(b.guard().is_paused().await);
        assert!(c.guard().is_paused().await);

        let events = drain(&mut rx);
        assert_eq!(count_kind(&events, EventKind::PauseTriggered), 1);
    }

    #[tokio::test]
    async fn migration_moves_every_target() {
        let ctrl = controller().await;
        let a = Arc::new(Gate::new("a", panic_1()));
        let b = Arc::new(Gate::new("b", panic_1()));
        ctrl.add_targets(&root(), vec![a.clone() as TargetRef, b.clone()])
            .await
            .unwrap();

        let standby = ControllerId::new("panic-2");
        let mut rx = ctrl.subscribe();
        ctrl.migrate_all(&root(), standby.clone()).await.unwrap();

        assert_eq!(a.controller().await, standby);
        assert_eq!(b.controller().await, standby);

        let events = drain(&mut rx);
        assert_eq!(count_kind(&events, EventKind::MigrationTriggered), 1);
        let ev = events
            .iter()
            .find(|e| e.kind == EventKind::MigrationTriggered)
            .unwrap();
        assert_eq!(ev.controller, Some(standby));
    }

    #[tokio::test]
    async fn migration_is_owner_only() {
        let ctrl = controller().await;
        ctrl.set_pauser(&root(), oncall(), true).await.unwrap();

        let err = ctrl
            .migrate_all(&oncall(), ControllerId::new("panic-2"))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            ControlError::Unauthorized { required: crate::core::Role::Owner, .. }
        ));
    }

    #[tokio::test]
    async fn migration_is_all_or_nothing_on_apply_failure() {
        let ctrl = controller().await;
        let a = Arc::new(Gate::new("a", panic_1()));
        let refuser = Arc::new(Refuser {
            controller: panic_1(),
        });
        ctrl.add_targets(&root(), vec![a.clone() as TargetRef, refuser])
            .await
            .unwrap();

        let mut rx = ctrl.subscribe();
        let err = ctrl
            .migrate_all(&root(), ControllerId::new("panic-2"))
            .await
            .unwrap_err();

        match err {
            ControlError::MigrationFailed { target, .. } => {
                assert_eq!(&*target, "z-refuser");
            }
            other => panic!("unexpected error: {other:?}"),
        }

        // "a" was migrated before the refusal and must be rolled back.
        assert_eq!(a.controller().await, panic_1());
        assert_eq!(count_kind(&drain(&mut rx), EventKind::MigrationTriggered), 0);

        // The registry is still fully controlled: a retry without the refuser
        // succeeds.
        ctrl.remove_targets(&root(), &["z-refuser"]).await.unwrap();
        ctrl.migrate_all(&root(), ControllerId::new("panic-2"))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn migration_validates_before_touching_anything() {
        let ctrl = controller().await;
        let a = Arc::new(Gate::new("a", panic_1()).with_bus(ctrl.bus()));
        // "b" answers to a different controller, so validation must fail.
        let b = Arc::new(Gate::new("b", ControllerId::new("foreign")));
        ctrl.add_targets(&root(), vec![a.clone() as TargetRef, b]).await.unwrap();

        let mut rx = ctrl.subscribe();
        let err = ctrl
            .migrate_all(&root(), ControllerId::new("panic-2"))
            .await
            .unwrap_err();
        assert!(matches!(err, ControlError::MigrationFailed { .. }));

        assert_eq!(a.controller().await, panic_1());
        let events = drain(&mut rx);
        assert_eq!(count_kind(&events, EventKind::ControllerChanged), 0);
        assert_eq!(count_kind(&events, EventKind::MigrationTriggered), 0);
    }

    #[tokio::test]
    async fn burn_migration_revokes_pausability() {
        let ctrl = controller().await;
        let a = Arc::new(Gate::new("a", panic_1()));
        ctrl.add_targets(&root(), vec![a.clone() as TargetRef]).await.unwrap();

        ctrl.migrate_all(&root(), ControllerId::burn()).await.unwrap();
        assert!(a.controller().await.is_burn());

        // The broadcast still succeeds (failures are contained per target),
        // but no target obeys this controller any more.
        ctrl.pause_all(&root()).await.unwrap();
        assert!(!a.guard().is_paused().await);
    }

    #[tokio::test]
    async fn add_targets_deduplicates_silently() {
        let ctrl = controller().await;
        ctrl.add_targets(&root(), vec![Gate::arc("db", panic_1())])
            .await
            .unwrap();

        let mut rx = ctrl.subscribe();
        ctrl.add_targets(&root(), vec![Gate::arc("db", panic_1())])
            .await
            .unwrap();

        assert_eq!(ctrl.list_targets().await.len(), 1);
        assert_eq!(count_kind(&drain(&mut rx), EventKind::TargetAdded), 0);
    }

    #[tokio::test]
    async fn null_target_aborts_the_whole_batch() {
        let ctrl = controller().await;
        let mut rx = ctrl.subscribe();

        let err = ctrl
            .add_targets(&root(), vec![Gate::arc("db", panic_1()), Gate::arc("", panic_1())])
            .await
            .unwrap_err();
        assert!(matches!(err, ControlError::InvalidTarget));

        // Nothing was inserted, not even the valid entry before the null one.
        assert!(ctrl.list_targets().await.is_empty());
        assert!(drain(&mut rx).is_empty());
    }

    #[tokio::test]
    async fn removing_an_absent_target_is_a_silent_no_op() {
        let ctrl = controller().await;
        let mut rx = ctrl.subscribe();

        ctrl.remove_targets(&root(), &["ghost"]).await.unwrap();
        assert!(drain(&mut rx).is_empty());
    }

    #[tokio::test]
    async fn registry_mutation_is_owner_only() {
        let ctrl = controller().await;
        ctrl.set_pauser(&root(), oncall(), true).await.unwrap();

        let err = ctrl
            .add_targets(&oncall(), vec![Gate::arc("db", panic_1())])
            .await
            .unwrap_err();
        assert!(matches!(err, ControlError::Unauthorized { .. }));

        let err = ctrl.remove_targets(&oncall(), &["db"]).await.unwrap_err();
        assert!(matches!(err, ControlError::Unauthorized { .. }));
    }

    #[tokio::test]
    async fn set_pauser_notifies_every_call() {
        let ctrl = controller().await;
        let mut rx = ctrl.subscribe();

        ctrl.set_pauser(&root(), oncall(), true).await.unwrap();
        ctrl.set_pauser(&root(), oncall(), true).await.unwrap();
        ctrl.set_pauser(&root(), oncall(), false).await.unwrap();

        assert!(!ctrl.is_pauser(&oncall()).await);
        let events = drain(&mut rx);
        assert_eq!(count_kind(&events, EventKind::PauserSet), 3);
        assert_eq!(events[0].enabled, Some(true));
        assert_eq!(events[2].enabled, Some(false));
    }

    #[tokio::test]
    async fn transfer_ownership_moves_all_authority() {
        let ctrl = controller().await;
        let a = Arc::new(Gate::new("a", panic_1()));
        ctrl.add_targets(&root(), vec![a.clone() as TargetRef]).await.unwrap();
        ctrl.pause_all(&root()).await.unwrap();

        let next = Principal::new("root-2");
        let mut rx = ctrl.subscribe();
        ctrl.transfer_ownership(&root(), next.clone()).await.unwrap();

        let events = drain(&mut rx);
        assert_eq!(count_kind(&events, EventKind::OwnershipTransferred), 1);
        assert_eq!(ctrl.owner().await, next);

        // The previous owner lost every right, including pausing.
        assert!(matches!(
            ctrl.unpause_all(&root()).await,
            Err(ControlError::Unauthorized { .. })
        ));
        assert!(matches!(
            ctrl.pause_all(&root()).await,
            Err(ControlError::Unauthorized { .. })
        ));

        ctrl.unpause_all(&next).await.unwrap();
        assert!(!a.guard().is_paused().await);
    }

    #[tokio::test]
    async fn broadcast_on_an_empty_registry_still_notifies() {
        let ctrl = controller().await;
        let mut rx = ctrl.subscribe();

        ctrl.pause_all(&root()).await.unwrap();
        assert_eq!(count_kind(&drain(&mut rx), EventKind::PauseTriggered), 1);
    }
}
