//! Error types used by the controller and by resource-side guards.
//!
//! This module defines two main error enums:
//!
//! - [`ControlError`] — errors raised by controller operations (role checks,
//!   registry mutations, batch migration).
//! - [`GuardError`] — errors raised by a single resource's guard.
//!
//! Both types provide `as_label` for stable snake_case labels in logs.
//!
//! Propagation rules differ by operation class: a direct call into one
//! resource always surfaces its [`GuardError`]; the broadcast pause/unpause
//! loops swallow per-target failures; batch migration converts the first
//! per-target failure into [`ControlError::MigrationFailed`] and aborts with
//! no observable partial effect.

use std::sync::Arc;

use thiserror::Error;

use crate::core::Role;
use crate::ident::{ControllerId, Principal};

/// # Errors produced by controller operations.
///
/// Authorization failures name the caller and the role that was required.
/// Input validation failures (`InvalidPrincipal`, `InvalidTarget`) abort the
/// whole operation before any state change.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum ControlError {
    /// Caller does not hold the role the operation requires.
    #[error("caller '{caller}' lacks the {required} role")]
    Unauthorized {
        /// The rejected caller.
        caller: Principal,
        /// The role the operation requires.
        required: Role,
    },

    /// A null principal was passed to a role mutation.
    #[error("the null principal cannot hold a role")]
    InvalidPrincipal,

    /// A null target was passed to a registry mutation.
    #[error("a null target cannot be registered")]
    InvalidTarget,

    /// Batch migration aborted; no target kept the new controller.
    #[error("migration aborted at target '{target}': {source}")]
    MigrationFailed {
        /// Name of the target that rejected the migration.
        target: Arc<str>,
        /// The underlying guard failure.
        #[source]
        source: GuardError,
    },
}

impl ControlError {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use breakglass::ControlError;
    ///
    /// assert_eq!(ControlError::InvalidTarget.as_label(), "invalid_target");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            ControlError::Unauthorized { .. } => "unauthorized",
            ControlError::InvalidPrincipal => "invalid_principal",
            ControlError::InvalidTarget => "invalid_target",
            ControlError::MigrationFailed { .. } => "migration_failed",
        }
    }
}

/// # Errors produced by a resource-side guard.
///
/// `AlreadyPaused` and `AlreadyActive` are state conflicts: expected during
/// broadcasts (and discarded there), surfaced to direct callers.
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GuardError {
    /// Caller is not the controller this guard records.
    #[error("caller '{caller}' is not the recorded controller")]
    Unauthorized {
        /// The rejected caller identity.
        caller: ControllerId,
    },

    /// `pause` on a guard that is already paused.
    #[error("already paused")]
    AlreadyPaused,

    /// `unpause` on a guard that is not paused.
    #[error("already active")]
    AlreadyActive,

    /// A state-changing business operation was attempted while paused.
    #[error("operations are suspended while paused")]
    Paused,
}

impl GuardError {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    pub fn as_label(&self) -> &'static str {
        match self {
            GuardError::Unauthorized { .. } => "guard_unauthorized",
            GuardError::AlreadyPaused => "already_paused",
            GuardError::AlreadyActive => "already_active",
            GuardError::Paused => "paused",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_are_stable() {
        let err = ControlError::Unauthorized {
            caller: Principal::new("mallory"),
            required: Role::Owner,
        };
        assert_eq!(err.as_label(), "unauthorized");
        assert_eq!(GuardError::AlreadyPaused.as_label(), "already_paused");
    }

    #[test]
    fn migration_failure_carries_source() {
        let err = ControlError::MigrationFailed {
            target: "db".into(),
            source: GuardError::Unauthorized {
                caller: ControllerId::new("panic-1"),
            },
        };
        assert!(err.to_string().contains("db"));
        assert_eq!(err.as_label(), "migration_failed");
    }
}
