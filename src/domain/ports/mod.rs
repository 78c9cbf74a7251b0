// Ports consumed by the members controller
// Adapters live in the infrastructure layer

pub mod analytics_sink;
pub mod billing_backend;
pub mod identity_provider;
pub mod notification_sink;
pub mod roster_store;

pub use analytics_sink::AnalyticsSink;
pub use billing_backend::{BackendError, BillingBackend};
pub use identity_provider::IdentityProvider;
pub use notification_sink::NotificationSink;
pub use roster_store::RosterStore;
