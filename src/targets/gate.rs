//! # Minimal guard-backed target (`Gate`)
//!
//! [`Gate`] is a managed resource that consists of nothing but a named
//! [`PauseGuard`]: the smallest possible [`Target`] implementation. Demos and
//! tests use it directly; real resources embed a guard next to their own
//! state and delegate the same way `Gate` does.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::GuardError;
use crate::events::Bus;
use crate::ident::ControllerId;
use crate::targets::guard::PauseGuard;
use crate::targets::target::{Target, TargetRef};

/// Guard-only target implementation.
///
/// # Example
/// ```
/// use breakglass::{ControllerId, Gate, Target, TargetRef};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let panic_1 = ControllerId::new("panic-1");
/// let gate: TargetRef = Gate::arc("db", panic_1.clone());
///
/// assert_eq!(gate.name(), "db");
/// gate.pause(&panic_1).await.unwrap();
/// # }
/// ```
pub struct Gate {
    guard: PauseGuard,
}

impl Gate {
    /// Creates a gate recording `controller` as its initial authority.
    pub fn new(name: impl Into<Arc<str>>, controller: ControllerId) -> Self {
        Self {
            guard: PauseGuard::new(name, controller),
        }
    }

    /// Attaches an event bus to the underlying guard.
    #[must_use]
    pub fn with_bus(mut self, bus: Bus) -> Self {
        self.guard = self.guard.with_bus(bus);
        self
    }

    /// Creates the gate and returns it as a shared handle (`Arc<dyn Target>`).
    pub fn arc(name: impl Into<Arc<str>>, controller: ControllerId) -> TargetRef {
        Arc::new(Self::new(name, controller))
    }

    /// Borrows the underlying guard (e.g. to check `is_paused`).
    pub fn guard(&self) -> &PauseGuard {
        &self.guard
    }
}

#[async_trait]
impl Target for Gate {
    fn name(&self) -> &str {
        self.guard.name()
    }

    async fn pause(&self, caller: &ControllerId) -> Result<(), GuardError> {
        self.guard.pause(caller).await
    }

    async fn unpause(&self, caller: &ControllerId) -> Result<(), GuardError> {
        self.guard.unpause(caller).await
    }

    async fn update_controller(
        &self,
        caller: &ControllerId,
        new: ControllerId,
    ) -> Result<(), GuardError> {
        self.guard.update_controller(caller, new).await
    }

    async fn controller(&self) -> ControllerId {
        self.guard.controller().await
    }
}
