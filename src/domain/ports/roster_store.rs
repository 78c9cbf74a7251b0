use crate::domain::billing_team::BillingTeam;

/// Read-only access to the client-side roster store
///
/// The store owns roster data and keeps it in sync with the billing service.
/// Implementations must return a consistent snapshot per call.
pub trait RosterStore: Send + Sync {
    /// Snapshot of a billing team, `None` while it has not been loaded
    fn billing_team(&self, team_id: &str) -> Option<BillingTeam>;

    /// Ask the store to re-fetch a team after a successful mutation
    ///
    /// Fire-and-forget; the store decides when the refresh happens.
    fn request_refresh(&self, team_id: &str);
}
