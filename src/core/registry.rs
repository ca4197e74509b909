//! # Target registry: duplicate-free, name-keyed set of managed resources.
//!
//! [`TargetRegistry`] owns the references a broadcast operates on. It is a
//! plain collection; the exclusive lock that serializes registry mutations
//! against broadcast passes lives in the
//! [`Controller`](crate::Controller), which wraps this registry together
//! with the role state.
//!
//! ## Rules
//! - Targets are keyed by [`Target::name`](crate::Target::name); inserting a
//!   present name is a no-op (the insert reports whether it took effect so
//!   the controller can notify only on actual changes).
//! - Removal of an absent name is a no-op.
//! - Iteration order is not significant; snapshots are sorted by name only so
//!   listings are deterministic.

use std::collections::HashMap;
use std::sync::Arc;

use crate::targets::TargetRef;

/// Name-keyed set of [`TargetRef`]s.
#[derive(Default)]
pub struct TargetRegistry {
    targets: HashMap<Arc<str>, TargetRef>,
}

impl TargetRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a target; returns `true` if it was actually added.
    ///
    /// A present name keeps its existing reference (de-duplicating variant:
    /// no replacement, no duplicate notification).
    pub fn insert(&mut self, target: TargetRef) -> bool {
        let name: Arc<str> = Arc::from(target.name());
        if self.targets.contains_key(&name) {
            return false;
        }
        self.targets.insert(name, target);
        true
    }

    /// Removes a target by name; returns it if it was present.
    pub fn remove(&mut self, name: &str) -> Option<TargetRef> {
        self.targets.remove(name)
    }

    /// Snapshot of all targets, sorted by name.
    pub fn snapshot(&self) -> Vec<TargetRef> {
        let mut targets: Vec<TargetRef> = self.targets.values().cloned().collect();
        targets.sort_unstable_by(|a, b| a.name().cmp(b.name()));
        targets
    }
}
