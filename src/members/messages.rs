// User-facing notification texts

use crate::domain::billing_team::BillingTeamRole;

pub const MEMBER_REMOVED: &str = "User removed from the billing team";
pub const REMOVE_FAILED: &str = "Error while removing user";
pub const ROLE_CHANGE_FAILED: &str = "Error while changing user role";
pub const REMOVE_CONFIRMATION: &str = "Are you sure you want to remove this member?";

pub fn role_changed(role: BillingTeamRole) -> String {
    format!("User role changed to {}", role)
}
