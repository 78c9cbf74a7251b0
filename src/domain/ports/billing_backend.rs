use async_trait::async_trait;
use thiserror::Error;

use crate::domain::billing_team::BillingTeamRole;

/// Failure reported by the billing service
///
/// The members controller does not discriminate between variants; they are
/// kept apart for logging only.
#[derive(Debug, Error)]
pub enum BackendError {
    #[error("Billing service rejected the request ({status}): {message}")]
    Rejected { status: u16, message: String },

    #[error("Billing service unreachable: {0}")]
    Transport(String),
}

/// Mutating calls against the remote billing service
#[async_trait]
pub trait BillingBackend: Send + Sync {
    /// Remove a member from a billing team
    async fn remove_member(&self, team_id: &str, member_id: &str) -> Result<(), BackendError>;

    /// Change a member's role inside a billing team
    async fn update_member_role(
        &self,
        team_id: &str,
        member_id: &str,
        role: BillingTeamRole,
    ) -> Result<(), BackendError>;
}
