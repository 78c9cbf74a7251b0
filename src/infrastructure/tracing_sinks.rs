// Notification and analytics sinks that write to the tracing pipeline
// Useful for headless hosts and for auditing what a UI would have shown

use crate::domain::billing_team::BillingTeamEvent;
use crate::domain::ports::{AnalyticsSink, NotificationSink};

#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotificationSink;

impl NotificationSink for TracingNotificationSink {
    fn success(&self, message: &str) {
        tracing::info!(target: "billing_team::notification", kind = "success", "{}", message);
    }

    fn error(&self, message: &str) {
        tracing::error!(target: "billing_team::notification", kind = "error", "{}", message);
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TracingAnalyticsSink;

impl AnalyticsSink for TracingAnalyticsSink {
    fn track(&self, event: BillingTeamEvent) {
        match serde_json::to_string(&event) {
            Ok(payload) => {
                tracing::info!(target: "billing_team::analytics", event = event.name(), %payload, "Analytics event");
            }
            Err(e) => {
                tracing::warn!(target: "billing_team::analytics", event = event.name(), error = %e, "Failed to serialize analytics event");
            }
        }
    }
}
