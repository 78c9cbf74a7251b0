// Infrastructure layer module
// Adapters that implement the domain ports
// Follows Hexagonal Architecture

pub mod http_billing_backend;
pub mod in_memory_roster_store;
pub mod jwt_identity_provider;
pub mod tracing_sinks;

pub use http_billing_backend::HttpBillingBackend;
pub use in_memory_roster_store::InMemoryRosterStore;
pub use jwt_identity_provider::{AnonymousIdentity, IdentityError, JwtIdentityProvider};
pub use tracing_sinks::{TracingAnalyticsSink, TracingNotificationSink};
