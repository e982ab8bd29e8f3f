//! HS256 session tokens carrying the user id.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use super::errors::AuthError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// User id.
    pub sub: String,
    pub username: String,
    pub iat: usize,
    pub exp: usize,
}

impl Claims {
    pub fn user_id(&self) -> Result<i32, AuthError> {
        self.sub.parse().map_err(|_| AuthError::Unauthorized)
    }
}

pub fn issue(secret: &str, user_id: i32, username: &str, hours: i64) -> Result<String, AuthError> {
    let now = Utc::now();
    let claims = Claims {
        sub: user_id.to_string(),
        username: username.to_string(),
        iat: now.timestamp() as usize,
        exp: (now + Duration::hours(hours)).timestamp() as usize,
    };
    encode(&Header::new(Algorithm::HS256), &claims, &EncodingKey::from_secret(secret.as_bytes()))
        .map_err(|e| AuthError::TokenError(e.to_string()))
}

/// Expired, tampered or malformed tokens are all `Unauthorized`.
pub fn verify(secret: &str, token: &str) -> Result<Claims, AuthError> {
    decode::<Claims>(token, &DecodingKey::from_secret(secret.as_bytes()), &Validation::new(Algorithm::HS256))
        .map(|data| data.claims)
        .map_err(|_| AuthError::Unauthorized)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn issue_then_verify() {
        let token = issue("secret", 7, "rider", 12).unwrap();
        let claims = verify("secret", &token).unwrap();
        assert_eq!(claims.user_id().unwrap(), 7);
        assert_eq!(claims.username, "rider");
    }

    #[test]
    fn wrong_secret_rejected() {
        let token = issue("secret", 7, "rider", 12).unwrap();
        assert!(matches!(verify("other", &token), Err(AuthError::Unauthorized)));
    }

    #[test]
    fn expired_rejected() {
        let token = issue("secret", 7, "rider", -2).unwrap();
        assert!(verify("secret", &token).is_err());
    }
}
