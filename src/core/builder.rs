//! # Controller construction.
//!
//! [`ControllerBuilder`] assembles a [`Controller`]: identity, owner, initial
//! pausers and targets, configuration, and subscribers. Construction-time
//! seeding goes through the same validation as the owner-gated operations
//! (null principals and null targets are rejected) but emits no audit events
//! — the trail starts once the controller exists.

use std::sync::Arc;

use crate::core::config::ControlConfig;
use crate::core::controller::{ControlState, Controller};
use crate::core::registry::TargetRegistry;
use crate::core::roles::Roles;
use crate::error::ControlError;
use crate::events::Bus;
use crate::ident::{ControllerId, Principal};
use crate::subscribers::{Subscribe, SubscriberSet};
use crate::targets::TargetRef;

/// Builder for constructing a [`Controller`].
///
/// # Example
/// ```
/// use breakglass::{ControlConfig, Controller, ControllerId, Gate, Principal};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() -> Result<(), breakglass::ControlError> {
/// let id = ControllerId::new("panic-1");
/// let ctrl = Controller::builder(id.clone(), Principal::new("root"))
///     .with_config(ControlConfig { bus_capacity: 256 })
///     .with_pausers(vec![Principal::new("oncall")])
///     .with_targets(vec![Gate::arc("db", id)])
///     .build()?;
///
/// assert!(ctrl.is_pauser(&Principal::new("oncall")).await);
/// assert_eq!(ctrl.list_targets().await.len(), 1);
/// # Ok(())
/// # }
/// ```
pub struct ControllerBuilder {
    id: ControllerId,
    owner: Principal,
    cfg: ControlConfig,
    pausers: Vec<Principal>,
    targets: Vec<TargetRef>,
    subscribers: Vec<Arc<dyn Subscribe>>,
}

impl ControllerBuilder {
    /// Creates a new builder with the given controller identity and owner.
    pub fn new(id: ControllerId, owner: Principal) -> Self {
        Self {
            id,
            owner,
            cfg: ControlConfig::default(),
            pausers: Vec::new(),
            targets: Vec::new(),
            subscribers: Vec::new(),
        }
    }

    /// Replaces the default configuration.
    #[must_use]
    pub fn with_config(mut self, cfg: ControlConfig) -> Self {
        self.cfg = cfg;
        self
    }

    /// Seeds the pauser set (all entries get the can-pause flag).
    #[must_use]
    pub fn with_pausers(mut self, pausers: Vec<Principal>) -> Self {
        self.pausers = pausers;
        self
    }

    /// Seeds the target registry.
    #[must_use]
    pub fn with_targets(mut self, targets: Vec<TargetRef>) -> Self {
        self.targets = targets;
        self
    }

    /// Sets audit event subscribers.
    ///
    /// Subscribers receive every event through dedicated workers with
    /// bounded queues; a Tokio runtime must be current when `build` runs if
    /// any subscriber is set.
    #[must_use]
    pub fn with_subscribers(mut self, subscribers: Vec<Arc<dyn Subscribe>>) -> Self {
        self.subscribers = subscribers;
        self
    }

    /// Builds the controller.
    ///
    /// Fails with [`ControlError::InvalidPrincipal`] for a null owner or
    /// null seeded pauser, and [`ControlError::InvalidTarget`] for a null
    /// seeded target.
    pub fn build(self) -> Result<Arc<Controller>, ControlError> {
        let mut roles = Roles::new(self.owner)?;
        for pauser in self.pausers {
            roles.set_pauser(pauser, true)?;
        }

        let mut registry = TargetRegistry::new();
        if self.targets.iter().any(|t| t.name().is_empty()) {
            return Err(ControlError::InvalidTarget);
        }
        for target in self.targets {
            registry.insert(target);
        }

        let bus = Bus::new(self.cfg.bus_capacity_clamped());
        let ctrl = Arc::new(Controller::new_internal(
            self.id,
            bus.clone(),
            ControlState { roles, registry },
        ));

        if !self.subscribers.is_empty() {
            let subs = Arc::new(SubscriberSet::new(self.subscribers));
            spawn_subscriber_listener(bus, subs);
        }
        Ok(ctrl)
    }
}

/// Subscribes to the bus and forwards events to the subscriber set
/// (fire-and-forget). The task ends when the bus closes.
fn spawn_subscriber_listener(bus: Bus, subs: Arc<SubscriberSet>) {
    let mut rx = bus.subscribe();
    tokio::spawn(async move {
        loop {
            match rx.recv().await {
                Ok(ev) => subs.emit(&ev),
                Err(tokio::sync::broadcast::error::RecvError::Closed) => break,
                Err(tokio::sync::broadcast::error::RecvError::Lagged(_)) => continue,
            }
        }
    });
}
