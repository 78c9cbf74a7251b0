// Billing team domain module
// Contains the roster snapshot, member entries, roles and analytics events

#![allow(clippy::module_inception)]

pub mod billing_team;
pub mod events;
pub mod member;
pub mod value_objects;

// Re-export main types for convenience
pub use billing_team::BillingTeam;
pub use events::BillingTeamEvent;
pub use member::Member;
pub use value_objects::{BillingAction, BillingTeamRole};
