// Viewer permission rules
// Pure functions of the current roster snapshot, recomputed on every call

use crate::domain::billing_team::{BillingTeam, Member};

/// Returns true if the viewer may manage other members of `team`
///
/// The viewer must have their own entry in the roster and hold a role other
/// than Member. A signed-out viewer is never admin.
///
/// # Example
/// ```
/// use billing_team_members::domain::billing_team::{BillingTeam, BillingTeamRole, Member};
/// use billing_team_members::members::permissions::is_admin;
///
/// let team = BillingTeam::new("t1")
///     .with_member(Member::new("b", "b@example.com", BillingTeamRole::Admin));
///
/// assert!(is_admin(Some("b"), &team));
/// assert!(!is_admin(Some("stranger"), &team));
/// assert!(!is_admin(None, &team));
/// ```
pub fn is_admin(viewer_id: Option<&str>, team: &BillingTeam) -> bool {
    viewer_id
        .and_then(|id| team.member(id))
        .map(|entry| entry.role.can_manage_members())
        .unwrap_or(false)
}

/// Returns true if the management menu is shown for `target`
///
/// Hidden when the viewer is not admin, on the viewer's own row, and on any
/// Manager row.
pub fn can_manage(viewer_id: Option<&str>, viewer_is_admin: bool, target: &Member) -> bool {
    if !viewer_is_admin {
        return false;
    }
    if viewer_id == Some(target.id.as_str()) {
        return false;
    }
    target.role.is_manageable()
}
