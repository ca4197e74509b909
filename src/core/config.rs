//! # Control-plane configuration.
//!
//! Provides [`ControlConfig`], the centralized settings for a
//! [`Controller`](crate::Controller) instance.
//!
//! The config is consumed once at construction time
//! (`Controller::builder(..).with_config(cfg)`); there is no runtime
//! reconfiguration — the control plane's own state changes only through the
//! owner-gated operations.

/// Configuration for a controller instance.
///
/// ## Field semantics
/// - `bus_capacity`: audit event ring buffer size (min 1; clamped by the bus)
#[derive(Clone, Debug)]
pub struct ControlConfig {
    /// Capacity of the audit event broadcast channel ring buffer.
    ///
    /// Slow receivers that lag behind more than `bus_capacity` events will
    /// observe `Lagged` and skip older items. Minimum value is 1.
    pub bus_capacity: usize,
}

impl ControlConfig {
    /// Returns a bus capacity clamped to a minimum of 1.
    #[inline]
    pub fn bus_capacity_clamped(&self) -> usize {
        self.bus_capacity.max(1)
    }
}

impl Default for ControlConfig {
    /// Default configuration:
    ///
    /// - `bus_capacity = 1024` (good baseline for an audit trail)
    fn default() -> Self {
        Self { bus_capacity: 1024 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_capacity_is_clamped() {
        let cfg = ControlConfig { bus_capacity: 0 };
        assert_eq!(cfg.bus_capacity_clamped(), 1);
    }
}
