// Members table view models
// Plain data handed to whatever renders the panel

use serde::Serialize;
use std::collections::HashSet;

use super::messages::REMOVE_CONFIRMATION;
use super::permissions::{can_manage, is_admin};
use crate::domain::billing_team::{BillingAction, BillingTeam, BillingTeamRole, Member};

/// Badge shown next to a member's name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MemberBadge {
    BillingManager,
    Admin,
    /// Member is excluded from billing
    Free,
}

impl MemberBadge {
    pub fn label(&self) -> &'static str {
        match self {
            MemberBadge::BillingManager => "Billing manager",
            MemberBadge::Admin => "Admin",
            MemberBadge::Free => "Free",
        }
    }

    /// Role badge for `role`, if that role has one
    pub fn for_role(role: BillingTeamRole) -> Option<Self> {
        match role {
            BillingTeamRole::Manager => Some(MemberBadge::BillingManager),
            BillingTeamRole::Admin => Some(MemberBadge::Admin),
            BillingTeamRole::Member => None,
        }
    }
}

/// One entry of a member's management menu
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuItem {
    pub action: BillingAction,
    pub label: &'static str,
    pub disabled: bool,
    /// Prompt the user must accept before the action is dispatched
    pub confirmation: Option<&'static str>,
}

impl MenuItem {
    fn new(action: BillingAction, target_role: BillingTeamRole) -> Self {
        Self {
            action,
            label: action.label(),
            disabled: action.is_disabled_for(target_role),
            confirmation: matches!(action, BillingAction::Remove).then_some(REMOVE_CONFIRMATION),
        }
    }
}

/// Menu items for a target the viewer is allowed to manage
pub fn menu_items(target_role: BillingTeamRole) -> Vec<MenuItem> {
    BillingAction::ALL
        .iter()
        .map(|action| MenuItem::new(*action, target_role))
        .collect()
}

/// A single row of the members table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MemberRow {
    pub id: String,
    pub display_name: String,
    pub email: String,
    pub photo_url: Option<String>,
    pub role: BillingTeamRole,
    pub badges: Vec<MemberBadge>,
    /// Long-format joining date, `"-"` when unknown
    pub added_on: String,
    /// An action against this member is in flight
    pub loading: bool,
    /// `None` when the menu and its trigger are hidden
    pub menu: Option<Vec<MenuItem>>,
}

/// The whole members table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MembersTable {
    pub heading: String,
    pub viewer_is_admin: bool,
    /// Whether the "Add members" control is enabled
    pub can_add_members: bool,
    pub rows: Vec<MemberRow>,
}

impl MembersTable {
    /// Builds the table for `viewer_id` from a roster snapshot
    ///
    /// Rows follow [`BillingTeam::members_by_joining_date`]. Menus are only
    /// computed for rows passing [`can_manage`].
    pub fn build(team: &BillingTeam, viewer_id: Option<&str>, in_flight: &HashSet<String>) -> Self {
        let viewer_is_admin = is_admin(viewer_id, team);

        let rows = team
            .members_by_joining_date()
            .into_iter()
            .map(|member| build_row(team, member, viewer_id, viewer_is_admin, in_flight))
            .collect();

        Self {
            heading: format!("Member ({})", team.member_count()),
            viewer_is_admin,
            can_add_members: viewer_is_admin,
            rows,
        }
    }

    pub fn row(&self, member_id: &str) -> Option<&MemberRow> {
        self.rows.iter().find(|row| row.id == member_id)
    }
}

fn build_row(
    team: &BillingTeam,
    member: &Member,
    viewer_id: Option<&str>,
    viewer_is_admin: bool,
    in_flight: &HashSet<String>,
) -> MemberRow {
    let mut badges: Vec<MemberBadge> = MemberBadge::for_role(member.role).into_iter().collect();
    if team.is_billing_excluded(&member.id) {
        badges.push(MemberBadge::Free);
    }

    let menu = can_manage(viewer_id, viewer_is_admin, member).then(|| menu_items(member.role));

    MemberRow {
        id: member.id.clone(),
        display_name: member.display_name().to_string(),
        email: member.email.clone(),
        photo_url: member.photo_url.clone(),
        role: member.role,
        badges,
        added_on: member
            .joining_date
            .map(|date| date.format("%B %-d, %Y").to_string())
            .unwrap_or_else(|| "-".to_string()),
        loading: in_flight.contains(&member.id),
        menu,
    }
}
