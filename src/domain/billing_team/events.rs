use serde::Serialize;

use super::value_objects::BillingTeamRole;

/// Analytics events emitted by the members panel
///
/// Events are fire-and-forget: they are handed to an
/// [`AnalyticsSink`](crate::domain::ports::AnalyticsSink) and never affect
/// control flow.
///
/// # Example
/// ```
/// use billing_team_members::domain::billing_team::events::BillingTeamEvent;
///
/// let event = BillingTeamEvent::MemberRemoved {
///     email: "ada@example.com".to_string(),
///     team_id: "t1".to_string(),
/// };
/// assert_eq!(event.name(), "billing_team_member_removed");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum BillingTeamEvent {
    /// A management menu entry was clicked
    ActionClicked {
        /// One of `make_admin`, `remove_as_admin`, `remove_member`
        action: String,
    },
    /// A member was removed successfully
    MemberRemoved { email: String, team_id: String },
    /// A member's role was changed successfully
    RoleChanged {
        email: String,
        role: BillingTeamRole,
        team_id: String,
    },
}

impl BillingTeamEvent {
    /// Event name as recorded by analytics backends
    pub fn name(&self) -> &'static str {
        match self {
            BillingTeamEvent::ActionClicked { .. } => "billing_team_action_clicked",
            BillingTeamEvent::MemberRemoved { .. } => "billing_team_member_removed",
            BillingTeamEvent::RoleChanged { .. } => "billing_team_role_changed",
        }
    }

    /// Team the event relates to, if any
    pub fn team_id(&self) -> Option<&str> {
        match self {
            BillingTeamEvent::ActionClicked { .. } => None,
            BillingTeamEvent::MemberRemoved { team_id, .. } => Some(team_id),
            BillingTeamEvent::RoleChanged { team_id, .. } => Some(team_id),
        }
    }
}
