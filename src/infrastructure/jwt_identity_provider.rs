use thiserror::Error;

use crate::auth::jwt::verify_token;
use crate::domain::ports::IdentityProvider;

#[derive(Debug, Error)]
pub enum IdentityError {
    #[error("Invalid session token: {0}")]
    InvalidToken(String),
}

/// IdentityProvider backed by a verified session token
///
/// The token is verified once at construction; the viewer id is its `sub`
/// claim.
#[derive(Debug, Clone)]
pub struct JwtIdentityProvider {
    viewer_id: String,
}

impl JwtIdentityProvider {
    /// Verifies `token` with `secret` and captures the viewer id
    pub fn from_token(token: &str, secret: &str) -> Result<Self, IdentityError> {
        let claims = verify_token(token, secret).map_err(IdentityError::InvalidToken)?;
        Ok(Self {
            viewer_id: claims.sub,
        })
    }
}

impl IdentityProvider for JwtIdentityProvider {
    fn viewer_id(&self) -> Option<String> {
        Some(self.viewer_id.clone())
    }
}

/// IdentityProvider for a signed-out viewer
#[derive(Debug, Clone, Copy, Default)]
pub struct AnonymousIdentity;

impl IdentityProvider for AnonymousIdentity {
    fn viewer_id(&self) -> Option<String> {
        None
    }
}
