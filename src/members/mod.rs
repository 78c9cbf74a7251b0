// Billing team members panel logic
//
// Permission evaluation, action validity, row view models and the
// mutation dispatcher that talks to the billing service.

pub mod controller;
pub mod errors;
pub mod messages;
pub mod permissions;
pub mod view;

// Re-export main types
pub use controller::{DuplicateActionPolicy, MembershipController, MembershipPorts};
pub use errors::{MembershipError, MembershipResult};
pub use view::{MemberBadge, MemberRow, MembersTable, MenuItem};
