//! Opaque identities used across the control plane.
//!
//! Two identifier kinds exist and are deliberately not interchangeable:
//!
//! - [`Principal`] — an account that holds roles (owner, pauser).
//! - [`ControllerId`] — the identity a controller presents to its targets and
//!   the identity every resource-side guard records.
//!
//! Both are cheap-to-clone `Arc<str>` newtypes with equality/hash semantics
//! only. The empty string is the reserved *null* value: a null [`Principal`]
//! is rejected by every role mutation, while the null [`ControllerId`]
//! ([`ControllerId::burn`]) is the documented way to permanently revoke
//! pausability during a migration.

use std::fmt;
use std::sync::Arc;

/// An account identity. Opaque; only equality matters.
///
/// # Example
/// ```
/// use breakglass::Principal;
///
/// let a = Principal::new("alice");
/// assert_eq!(a, Principal::new("alice"));
/// assert!(!a.is_null());
/// assert!(Principal::null().is_null());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Principal(Arc<str>);

impl Principal {
    /// Creates a principal from any string-like identifier.
    pub fn new(id: impl Into<Arc<str>>) -> Self {
        Self(id.into())
    }

    /// The reserved null principal. Never a valid role holder.
    pub fn null() -> Self {
        Self(Arc::from(""))
    }

    /// True for the reserved null value.
    #[inline]
    pub fn is_null(&self) -> bool {
        self.0.is_empty()
    }

    /// Borrows the underlying identifier.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Principal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_null() {
            f.write_str("<null>")
        } else {
            f.write_str(&self.0)
        }
    }
}

impl From<&str> for Principal {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// A controller identity, as recorded by resource-side guards.
///
/// [`ControllerId::burn`] is the null value. Migrating a registry to the burn
/// id re-points every guard at an identity nobody presents, which disables
/// pause/unpause/migrate for those resources permanently.
///
/// # Example
/// ```
/// use breakglass::ControllerId;
///
/// let c = ControllerId::new("panic-1");
/// assert!(!c.is_burn());
/// assert!(ControllerId::burn().is_burn());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ControllerId(Arc<str>);

impl ControllerId {
    /// Creates a controller identity from any string-like identifier.
    pub fn new(id: impl Into<Arc<str>>) -> Self {
        Self(id.into())
    }

    /// The null ("burn") identity.
    pub fn burn() -> Self {
        Self(Arc::from(""))
    }

    /// True for the burn value.
    #[inline]
    pub fn is_burn(&self) -> bool {
        self.0.is_empty()
    }

    /// Borrows the underlying identifier.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ControllerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_burn() {
            f.write_str("<burn>")
        } else {
            f.write_str(&self.0)
        }
    }
}

impl From<&str> for ControllerId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_principal_is_reserved() {
        assert!(Principal::null().is_null());
        assert!(Principal::new("").is_null());
        assert!(!Principal::new("root").is_null());
    }

    #[test]
    fn burn_id_displays_as_sentinel() {
        assert_eq!(ControllerId::burn().to_string(), "<burn>");
        assert_eq!(ControllerId::new("panic-1").to_string(), "panic-1");
    }

    #[test]
    fn equality_is_by_identifier() {
        assert_eq!(ControllerId::new("a"), ControllerId::from("a"));
        assert_ne!(ControllerId::new("a"), ControllerId::new("b"));
    }
}
