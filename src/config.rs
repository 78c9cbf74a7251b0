// Runtime configuration
// Read from the environment, with a `.env` file loaded first when present

use thiserror::Error;

use crate::members::DuplicateActionPolicy;

pub const DEFAULT_BILLING_API_URL: &str = "http://localhost:3000/api";
pub const DEFAULT_JWT_SECRET: &str = "dev-secret-key";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {message}")]
    InvalidValue { key: &'static str, message: String },
}

/// Settings for wiring a members controller to real adapters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MembersConfig {
    pub billing_api_url: String,
    pub billing_api_token: Option<String>,
    pub jwt_secret: String,
    pub duplicate_action_policy: DuplicateActionPolicy,
}

impl Default for MembersConfig {
    fn default() -> Self {
        Self {
            billing_api_url: DEFAULT_BILLING_API_URL.to_string(),
            billing_api_token: None,
            jwt_secret: DEFAULT_JWT_SECRET.to_string(),
            duplicate_action_policy: DuplicateActionPolicy::default(),
        }
    }
}

impl MembersConfig {
    /// Loads `.env` (if any) and reads the configuration from the environment
    ///
    /// # Variables
    /// * `BILLING_API_URL` - billing service root
    /// * `BILLING_API_TOKEN` - optional bearer token
    /// * `JWT_SECRET` - session token secret
    /// * `DUPLICATE_ACTION_POLICY` - `allow` or `reject`
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let billing_api_url = lookup("BILLING_API_URL").unwrap_or_else(|| {
            tracing::warn!("BILLING_API_URL not set, using default");
            defaults.billing_api_url.clone()
        });

        let billing_api_token = lookup("BILLING_API_TOKEN").filter(|t| !t.is_empty());

        let jwt_secret = lookup("JWT_SECRET").unwrap_or_else(|| {
            tracing::warn!("JWT_SECRET not set, using development secret");
            defaults.jwt_secret.clone()
        });

        let duplicate_action_policy = match lookup("DUPLICATE_ACTION_POLICY") {
            Some(raw) => raw.parse().map_err(|message| ConfigError::InvalidValue {
                key: "DUPLICATE_ACTION_POLICY",
                message,
            })?,
            None => defaults.duplicate_action_policy,
        };

        Ok(Self {
            billing_api_url,
            billing_api_token,
            jwt_secret,
            duplicate_action_policy,
        })
    }
}
