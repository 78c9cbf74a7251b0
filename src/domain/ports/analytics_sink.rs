use crate::domain::billing_team::BillingTeamEvent;

/// Analytics event emission
///
/// Fire-and-forget; implementations must not block and must not fail.
pub trait AnalyticsSink: Send + Sync {
    fn track(&self, event: BillingTeamEvent);
}
