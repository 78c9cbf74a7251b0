use thiserror::Error;

use crate::domain::billing_team::BillingAction;

/// Errors produced by the members controller
#[derive(Debug, Error)]
pub enum MembershipError {
    /// The billing service refused or never answered; the user has already
    /// been notified
    #[error("Action failed for member {member_id}")]
    ActionFailed { member_id: String },

    #[error("Action {action:?} not permitted on member {member_id}")]
    NotPermitted {
        action: BillingAction,
        member_id: String,
    },

    #[error("An action is already in flight for member {0}")]
    ActionInFlight(String),

    #[error("Billing team not loaded: {0}")]
    TeamNotLoaded(String),
}

pub type MembershipResult<T> = Result<T, MembershipError>;
