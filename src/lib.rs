//! Billing Team Members
//!
//! Logic behind a billing team's members panel: viewer permissions, role
//! badges, per-member action menus, and the remove / change-role workflow
//! against the billing service.

pub mod auth;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod members;
pub mod setup;
pub mod telemetry;
