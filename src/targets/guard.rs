//! # Resource-side guard: the embeddable half of the capability contract.
//!
//! [`PauseGuard`] is the state machine a managed resource embeds to become
//! controllable: it tracks exactly one authorized controller identity and a
//! paused flag, gating controller-triggered operations on caller identity and
//! (via [`PauseGuard::ensure_active`]) gating the resource's own
//! state-changing operations on the flag.
//!
//! ## State machine
//! ```text
//!                 pause(controller)
//!   ┌────────┐ ─────────────────────► ┌────────┐
//!   │ Active │                        │ Paused │     × controller axis
//!   └────────┘ ◄───────────────────── └────────┘
//!                unpause(controller)
//!
//!   update_controller(controller, new) overwrites the controller axis in
//!   either state; update_controller(controller, burn) ends the game.
//! ```
//!
//! ## Rules
//! - Caller gating is a single equality check against the recorded
//!   controller; there is no inheritance hook and no middleware chain.
//! - `pause` on a paused guard and `unpause` on an active guard are state
//!   conflicts, not authorization failures; broadcasts discard them.
//! - Attaching a [`Bus`] (via [`PauseGuard::with_bus`]) makes the guard emit
//!   [`EventKind::ControllerChanged`](crate::EventKind::ControllerChanged)
//!   when its controller reference is overwritten.

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::error::GuardError;
use crate::events::{Bus, Event, EventKind};
use crate::ident::ControllerId;

/// The two independent state axes: recorded controller and paused flag.
struct GuardState {
    controller: ControllerId,
    paused: bool,
}

/// Embeddable pause/controller state machine for one managed resource.
///
/// # Example
/// ```
/// use breakglass::{ControllerId, GuardError, PauseGuard};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let panic_1 = ControllerId::new("panic-1");
/// let guard = PauseGuard::new("vault", panic_1.clone());
///
/// guard.pause(&panic_1).await.unwrap();
/// assert!(guard.is_paused().await);
/// assert_eq!(guard.ensure_active().await, Err(GuardError::Paused));
///
/// guard.unpause(&panic_1).await.unwrap();
/// assert!(guard.ensure_active().await.is_ok());
/// # }
/// ```
pub struct PauseGuard {
    name: Arc<str>,
    state: Mutex<GuardState>,
    bus: Option<Bus>,
}

impl PauseGuard {
    /// Creates a guard recording `controller` as its initial authority,
    /// unpaused.
    pub fn new(name: impl Into<Arc<str>>, controller: ControllerId) -> Self {
        Self {
            name: name.into(),
            state: Mutex::new(GuardState {
                controller,
                paused: false,
            }),
            bus: None,
        }
    }

    /// Attaches an event bus; controller changes will be published to it.
    #[must_use]
    pub fn with_bus(mut self, bus: Bus) -> Self {
        self.bus = Some(bus);
        self
    }

    /// Returns the guarded resource's name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the currently recorded controller identity. Public read.
    pub async fn controller(&self) -> ControllerId {
        self.state.lock().await.controller.clone()
    }

    /// True while the resource is suspended.
    pub async fn is_paused(&self) -> bool {
        self.state.lock().await.paused
    }

    /// Suspends the resource. Controller-only; fails if already paused.
    pub async fn pause(&self, caller: &ControllerId) -> Result<(), GuardError> {
        let mut state = self.state.lock().await;
        ensure_controller(&state, caller)?;
        if state.paused {
            return Err(GuardError::AlreadyPaused);
        }
        state.paused = true;
        Ok(())
    }

    /// Resumes the resource. Controller-only; fails if not paused.
    pub async fn unpause(&self, caller: &ControllerId) -> Result<(), GuardError> {
        let mut state = self.state.lock().await;
        ensure_controller(&state, caller)?;
        if !state.paused {
            return Err(GuardError::AlreadyActive);
        }
        state.paused = false;
        Ok(())
    }

    /// Overwrites the recorded controller. Controller-only.
    ///
    /// The new identity is accepted unconditionally: no handshake, no
    /// validation. Recording [`ControllerId::burn`] permanently revokes
    /// pausability for this resource.
    pub async fn update_controller(
        &self,
        caller: &ControllerId,
        new: ControllerId,
    ) -> Result<(), GuardError> {
        let mut state = self.state.lock().await;
        ensure_controller(&state, caller)?;
        state.controller = new.clone();
        drop(state);

        if let Some(bus) = &self.bus {
            bus.publish(
                Event::new(EventKind::ControllerChanged)
                    .with_target(self.name.clone())
                    .with_controller(new),
            );
        }
        Ok(())
    }

    /// Gate for the embedding resource's own state-changing operations.
    ///
    /// Call this at the top of every business operation; it fails with
    /// [`GuardError::Paused`] while the resource is suspended.
    pub async fn ensure_active(&self) -> Result<(), GuardError> {
        if self.state.lock().await.paused {
            return Err(GuardError::Paused);
        }
        Ok(())
    }
}

/// Single equality check gating all controller-triggered operations.
fn ensure_controller(state: &GuardState, caller: &ControllerId) -> Result<(), GuardError> {
    if state.controller != *caller {
        return Err(GuardError::Unauthorized {
            caller: caller.clone(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn panic_1() -> ControllerId {
        ControllerId::new("panic-1")
    }

    #[tokio::test]
    async fn pause_unpause_round_trip() {
        let guard = PauseGuard::new("db", panic_1());
        assert!(!guard.is_paused().await);

        guard.pause(&panic_1()).await.unwrap();
        assert!(guard.is_paused().await);

        guard.unpause(&panic_1()).await.unwrap();
        assert!(!guard.is_paused().await);
    }

    #[tokio::test]
    async fn state_conflicts_are_reported() {
        let guard = PauseGuard::new("db", panic_1());
        assert_eq!(
            guard.unpause(&panic_1()).await,
            Err(GuardError::AlreadyActive)
        );

        guard.pause(&panic_1()).await.unwrap();
        assert_eq!(guard.pause(&panic_1()).await, Err(GuardError::AlreadyPaused));
    }

    #[tokio::test]
    async fn foreign_controller_is_rejected() {
        let guard = PauseGuard::new("db", panic_1());
        let stranger = ControllerId::new("other");

        let err = guard.pause(&stranger).await.unwrap_err();
        assert!(matches!(err, GuardError::Unauthorized { .. }));
        assert!(!guard.is_paused().await);
        assert_eq!(guard.controller().await, panic_1());
    }

    #[tokio::test]
    async fn update_controller_moves_authority() {
        let guard = PauseGuard::new("db", panic_1());
        let next = ControllerId::new("panic-2");

        guard
            .update_controller(&panic_1(), next.clone())
            .await
            .unwrap();
        assert_eq!(guard.controller().await, next);

        // The previous controller no longer has any authority.
        assert!(matches!(
            guard.pause(&panic_1()).await,
            Err(GuardError::Unauthorized { .. })
        ));
        guard.pause(&next).await.unwrap();
    }

    #[tokio::test]
    async fn burn_revokes_pausability_permanently() {
        let guard = PauseGuard::new("db", panic_1());
        guard
            .update_controller(&panic_1(), ControllerId::burn())
            .await
            .unwrap();

        // Nobody presents the burn identity, so no further command lands.
        assert!(matches!(
            guard.pause(&panic_1()).await,
            Err(GuardError::Unauthorized { .. })
        ));
    }

    #[tokio::test]
    async fn ensure_active_gates_business_operations() {
        let guard = PauseGuard::new("db", panic_1());
        assert!(guard.ensure_active().await.is_ok());

        guard.pause(&panic_1()).await.unwrap();
        assert_eq!(guard.ensure_active().await, Err(GuardError::Paused));
    }

    #[tokio::test]
    async fn controller_change_is_published_when_bus_attached() {
        let bus = Bus::new(8);
        let mut rx = bus.subscribe();
        let guard = PauseGuard::new("db", panic_1()).with_bus(bus);

        let next = ControllerId::new("panic-2");
        guard
            .update_controller(&panic_1(), next.clone())
            .await
            .unwrap();

        let ev = rx.recv().await.unwrap();
        assert_eq!(ev.kind, EventKind::ControllerChanged);
        assert_eq!(ev.target.as_deref(), Some("db"));
        assert_eq!(ev.controller, Some(next));
    }
}
