// Wiring of a members controller from configuration

use std::sync::Arc;
use thiserror::Error;

use crate::config::MembersConfig;
use crate::domain::ports::{BackendError, IdentityProvider, RosterStore};
use crate::infrastructure::{
    AnonymousIdentity, HttpBillingBackend, IdentityError, JwtIdentityProvider,
    TracingAnalyticsSink, TracingNotificationSink,
};
use crate::members::{MembershipController, MembershipPorts};

#[derive(Debug, Error)]
pub enum SetupError {
    #[error("Billing backend setup failed: {0}")]
    Backend(#[from] BackendError),

    #[error(transparent)]
    Identity(#[from] IdentityError),
}

/// Builds a controller for `team_id` using the HTTP billing backend and the
/// tracing sinks
///
/// Without a session token the viewer is treated as signed out.
pub fn build_controller(
    config: &MembersConfig,
    team_id: &str,
    session_token: Option<&str>,
    roster: Arc<dyn RosterStore>,
) -> Result<MembershipController, SetupError> {
    let backend = HttpBillingBackend::new(
        &config.billing_api_url,
        config.billing_api_token.as_deref(),
    )?;

    let identity: Arc<dyn IdentityProvider> = match session_token {
        Some(token) => Arc::new(JwtIdentityProvider::from_token(token, &config.jwt_secret)?),
        None => Arc::new(AnonymousIdentity),
    };

    tracing::info!(team_id, billing_api = %config.billing_api_url, "Members controller ready");

    let ports = MembershipPorts {
        roster,
        identity,
        backend: Arc::new(backend),
        notifications: Arc::new(TracingNotificationSink),
        analytics: Arc::new(TracingAnalyticsSink),
    };

    Ok(MembershipController::new(team_id, ports).with_policy(config.duplicate_action_policy))
}
