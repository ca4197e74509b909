//! # Target abstraction: the capability contract for managed resources.
//!
//! This module defines the [`Target`] trait — the fixed operation set every
//! managed resource must expose to be driven by a
//! [`Controller`](crate::Controller) — and the shared handle type
//! [`TargetRef`], an `Arc<dyn Target>` suitable for registry storage.
//!
//! Resources are treated uniformly through this trait; there is no concrete
//! type hierarchy. Most implementations embed a
//! [`PauseGuard`](crate::PauseGuard) and delegate all four operations to it.

use async_trait::async_trait;
use std::sync::Arc;

use crate::error::GuardError;
use crate::ident::ControllerId;

/// Shared handle to a managed resource.
pub type TargetRef = Arc<dyn Target>;

/// # The capability contract every managed resource satisfies.
///
/// A `Target` has a stable [`name`](Target::name) (its registry identity; the
/// empty name is the null target and is never admitted) and the four
/// controller-facing operations. The three mutating operations are gated on
/// caller identity: only the controller a resource currently records may
/// invoke them.
///
/// # Example
/// ```
/// use async_trait::async_trait;
/// use breakglass::{ControllerId, GuardError, PauseGuard, Target};
///
/// struct Vault {
///     guard: PauseGuard,
/// }
///
/// #[async_trait]
/// impl Target for Vault {
///     fn name(&self) -> &str {
///         self.guard.name()
///     }
///
///     async fn pause(&self, caller: &ControllerId) -> Result<(), GuardError> {
///         self.guard.pause(caller).await
///     }
///
///     async fn unpause(&self, caller: &ControllerId) -> Result<(), GuardError> {
///         self.guard.unpause(caller).await
///     }
///
///     async fn update_controller(
///         &self,
///         caller: &ControllerId,
///         new: ControllerId,
///     ) -> Result<(), GuardError> {
///         self.guard.update_controller(caller, new).await
///     }
///
///     async fn controller(&self) -> ControllerId {
///         self.guard.controller().await
///     }
/// }
/// ```
#[async_trait]
pub trait Target: Send + Sync + 'static {
    /// Returns the stable, unique resource name (registry identity).
    fn name(&self) -> &str;

    /// Suspends the resource.
    ///
    /// Fails with [`GuardError::Unauthorized`] unless `caller` is the
    /// recorded controller, and with [`GuardError::AlreadyPaused`] if the
    /// resource is already suspended.
    async fn pause(&self, caller: &ControllerId) -> Result<(), GuardError>;

    /// Resumes the resource.
    ///
    /// Fails with [`GuardError::Unauthorized`] unless `caller` is the
    /// recorded controller, and with [`GuardError::AlreadyActive`] if the
    /// resource is not suspended.
    async fn unpause(&self, caller: &ControllerId) -> Result<(), GuardError>;

    /// Re-points the resource at a new controller.
    ///
    /// Only the recorded controller may call this. The new identity is
    /// accepted unconditionally — there is no handshake and no validation, so
    /// passing [`ControllerId::burn`] permanently disables pausability for
    /// this resource.
    async fn update_controller(
        &self,
        caller: &ControllerId,
        new: ControllerId,
    ) -> Result<(), GuardError>;

    /// Returns the currently recorded controller identity. Public read.
    async fn controller(&self) -> ControllerId;
}
