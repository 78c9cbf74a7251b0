// Session token verification
// Tokens carry the viewer's profile id; they are issued by the host session

use jsonwebtoken::{decode, DecodingKey, Validation};
use serde::{Deserialize, Serialize};

/// JWT claims structure
///
/// # Fields
/// * `sub` - Subject (viewer profile id)
/// * `exp` - Expiry time (seconds since epoch)
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Viewer profile id (subject)
    pub sub: String,
    /// Expiry timestamp (seconds since epoch)
    pub exp: usize,
}

/// Verifies and decodes a session token
///
/// # Returns
/// * `Ok(Claims)` - The decoded claims if the token is valid
/// * `Err(String)` - If the token is malformed, badly signed or expired
///
/// # Example
/// ```
/// use billing_team_members::auth::jwt::verify_token;
///
/// assert!(verify_token("not.a.token", "your-secret-key").is_err());
/// ```
pub fn verify_token(token: &str, secret: &str) -> Result<Claims, String> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_ref()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|e| e.to_string())
}

/// Signs a session token for `viewer_id`, valid for 8 hours
#[cfg(test)]
pub(crate) fn create_token(viewer_id: &str, secret: &str) -> Result<String, String> {
    use chrono::{Duration, Utc};
    use jsonwebtoken::{encode, EncodingKey, Header};

    let expiry = Utc::now() + Duration::hours(8);
    let claims = Claims {
        sub: viewer_id.to_string(),
        exp: expiry.timestamp() as usize,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_ref()),
    )
    .map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    const TEST_SECRET: &str = "test-secret-key-for-unit-tests";

    #[test]
    fn create_and_verify_token() {
        let token = create_token("uid-1", TEST_SECRET).expect("valid token");

        let claims = verify_token(&token, TEST_SECRET).expect("valid verification");
        assert_eq!(claims.sub, "uid-1");
    }

    #[test]
    fn wrong_secret_fails() {
        let token = create_token("uid-1", TEST_SECRET).expect("valid token");

        assert!(verify_token(&token, "wrong-secret").is_err());
    }

    #[test]
    fn invalid_token_fails() {
        assert!(verify_token("invalid.token.string", TEST_SECRET).is_err());
    }

    #[test]
    fn token_expiry_set() {
        let token = create_token("uid-1", TEST_SECRET).expect("valid token");

        let claims = verify_token(&token, TEST_SECRET).expect("valid verification");
        let expiry_time = claims.exp as i64;
        let now = Utc::now().timestamp();
        let in_8_hours = (Utc::now() + Duration::hours(8)).timestamp();

        assert!(expiry_time > now);
        assert!(expiry_time <= in_8_hours + 10);
    }
}
