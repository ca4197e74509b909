//! Control-plane core: roles, registry, configuration, and the controller.
//!
//! ## Contents
//! - [`Controller`], [`ControllerBuilder`] — the orchestrator and its
//!   construction path
//! - [`ControlConfig`] — construction-time settings
//! - [`Roles`], [`Role`] — owner/pauser trust model
//! - [`TargetRegistry`] — duplicate-free set of managed resources
//!
//! Only the controller, builder, config and [`Role`] are re-exported at the
//! crate root; role and registry state are reachable exclusively through the
//! controller's gated operations.

mod builder;
mod config;
mod controller;
mod registry;
mod roles;

pub use builder::ControllerBuilder;
pub use config::ControlConfig;
pub use controller::Controller;
pub use registry::TargetRegistry;
pub use roles::{Role, Roles};
