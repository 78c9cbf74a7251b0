use serde::{Deserialize, Serialize};
use std::fmt;

/// Role a member holds inside a billing team
///
/// # Privilege Order
/// ```text
/// Member < Admin < Manager
/// ```
/// Managers own the billing relationship and cannot be managed from the
/// members panel at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BillingTeamRole {
    /// Regular member with no management rights
    Member,
    /// May change roles of and remove other members
    Admin,
    /// Billing manager, immune to management actions
    Manager,
}

impl BillingTeamRole {
    /// Returns true if a viewer holding this role may manage other members
    ///
    /// # Example
    /// ```
    /// use billing_team_members::domain::billing_team::BillingTeamRole;
    ///
    /// assert!(BillingTeamRole::Admin.can_manage_members());
    /// assert!(!BillingTeamRole::Member.can_manage_members());
    /// ```
    pub fn can_manage_members(&self) -> bool {
        !matches!(self, BillingTeamRole::Member)
    }

    /// Returns true if members holding this role may be targeted by actions
    pub fn is_manageable(&self) -> bool {
        !matches!(self, BillingTeamRole::Manager)
    }

    /// Lowercase wire name of the role
    pub fn as_str(&self) -> &'static str {
        match self {
            BillingTeamRole::Member => "member",
            BillingTeamRole::Admin => "admin",
            BillingTeamRole::Manager => "manager",
        }
    }
}

impl fmt::Display for BillingTeamRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Management action offered in a member's row menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BillingAction {
    /// Change the target's role to Admin
    #[serde(rename = "make_admin")]
    PromoteToAdmin,
    /// Change the target's role to Member
    #[serde(rename = "make_member")]
    DemoteToMember,
    /// Remove the target from the team
    Remove,
}

impl BillingAction {
    /// Every action in menu order
    pub const ALL: [BillingAction; 3] = [
        BillingAction::PromoteToAdmin,
        BillingAction::DemoteToMember,
        BillingAction::Remove,
    ];

    /// Checks whether this action is disabled for a target holding `role`
    ///
    /// # Rules
    /// - PromoteToAdmin: disabled for Admin and Manager
    /// - DemoteToMember: disabled for Member and Manager
    /// - Remove: disabled only for Manager
    ///
    /// # Example
    /// ```
    /// use billing_team_members::domain::billing_team::{BillingAction, BillingTeamRole};
    ///
    /// assert!(BillingAction::PromoteToAdmin.is_disabled_for(BillingTeamRole::Admin));
    /// assert!(!BillingAction::PromoteToAdmin.is_disabled_for(BillingTeamRole::Member));
    /// ```
    pub fn is_disabled_for(&self, role: BillingTeamRole) -> bool {
        use BillingTeamRole::*;
        match self {
            BillingAction::PromoteToAdmin => matches!(role, Admin | Manager),
            BillingAction::DemoteToMember => matches!(role, Member | Manager),
            BillingAction::Remove => matches!(role, Manager),
        }
    }

    /// Role the target ends up with, for role-changing actions
    pub fn target_role(&self) -> Option<BillingTeamRole> {
        match self {
            BillingAction::PromoteToAdmin => Some(BillingTeamRole::Admin),
            BillingAction::DemoteToMember => Some(BillingTeamRole::Member),
            BillingAction::Remove => None,
        }
    }

    /// Menu label shown for this action
    pub fn label(&self) -> &'static str {
        match self {
            BillingAction::PromoteToAdmin => "Make Admin",
            BillingAction::DemoteToMember => "Change role to member",
            BillingAction::Remove => "Remove",
        }
    }

    /// Name recorded in the "action clicked" analytics event
    pub fn click_event_name(&self) -> &'static str {
        match self {
            BillingAction::PromoteToAdmin => "make_admin",
            BillingAction::DemoteToMember => "remove_as_admin",
            BillingAction::Remove => "remove_member",
        }
    }
}
