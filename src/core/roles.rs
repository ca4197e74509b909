//! # Access roles: one transferable owner, many pausers.
//!
//! [`Roles`] holds the two-tier trust model of the control plane:
//!
//! - the **owner** — exactly one principal, never null, replaced atomically
//!   by a single-step transfer;
//! - the **pauser set** — a membership map from principal to a can-pause
//!   flag; absence means `false`, and the owner counts as a pauser without an
//!   entry.
//!
//! Authorization checks are plain guard functions ([`Roles::ensure_owner`],
//! [`Roles::ensure_pauser`]) returning [`ControlError::Unauthorized`]; the
//! controller calls them at the top of every gated operation.

use std::collections::HashMap;
use std::fmt;

use crate::error::ControlError;
use crate::ident::Principal;

/// Role a controller operation requires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// Full authority: registry/role mutation, unpause, migration.
    Owner,
    /// Pause-only authority.
    Pauser,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Owner => f.write_str("owner"),
            Role::Pauser => f.write_str("pauser"),
        }
    }
}

/// Owner principal plus pauser membership map.
pub struct Roles {
    owner: Principal,
    pausers: HashMap<Principal, bool>,
}

impl Roles {
    /// Creates the role state with the given owner.
    ///
    /// Rejects the null principal: the owner slot is never empty once the
    /// controller exists.
    pub fn new(owner: Principal) -> Result<Self, ControlError> {
        if owner.is_null() {
            return Err(ControlError::InvalidPrincipal);
        }
        Ok(Self {
            owner,
            pausers: HashMap::new(),
        })
    }

    /// Returns the current owner.
    pub fn owner(&self) -> &Principal {
        &self.owner
    }

    /// True if `principal` may trigger a pause broadcast.
    ///
    /// The owner is a pauser unconditionally; everyone else needs an explicit
    /// `true` entry in the membership map.
    pub fn is_pauser(&self, principal: &Principal) -> bool {
        *principal == self.owner || self.pausers.get(principal).copied().unwrap_or(false)
    }

    /// Writes a pauser membership flag. Rejects the null principal.
    ///
    /// Idempotent in state; the controller still notifies on every call.
    pub fn set_pauser(&mut self, principal: Principal, can_pause: bool) -> Result<(), ControlError> {
        if principal.is_null() {
            return Err(ControlError::InvalidPrincipal);
        }
        self.pausers.insert(principal, can_pause);
        Ok(())
    }

    /// Replaces the owner immediately (no two-step acceptance) and returns
    /// the previous owner. Rejects the null principal.
    pub fn transfer(&mut self, new_owner: Principal) -> Result<Principal, ControlError> {
        if new_owner.is_null() {
            return Err(ControlError::InvalidPrincipal);
        }
        Ok(std::mem::replace(&mut self.owner, new_owner))
    }

    /// Guard function: the caller must be the owner.
    pub fn ensure_owner(&self, caller: &Principal) -> Result<(), ControlError> {
        if *caller != self.owner {
            return Err(ControlError::Unauthorized {
                caller: caller.clone(),
                required: Role::Owner,
            });
        }
        Ok(())
    }

    /// Guard function: the caller must satisfy [`Roles::is_pauser`].
    pub fn ensure_pauser(&self, caller: &Principal) -> Result<(), ControlError> {
        if !self.is_pauser(caller) {
            return Err(ControlError::Unauthorized {
                caller: caller.clone(),
                required: Role::Pauser,
            });
        }
        Ok(())
    }
}
