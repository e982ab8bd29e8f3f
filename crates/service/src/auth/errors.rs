use thiserror::Error;

use crate::errors::FieldErrors;

pub const DUPLICATE_USERNAME: &str = "A user with that username already exists.";
pub const INVALID_CREDENTIALS: &str = "Invalid credentials";

/// Business errors for auth workflows
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("validation failed: {0}")]
    Validation(FieldErrors),
    #[error("user already exists")]
    Conflict,
    #[error("invalid credentials")]
    InvalidCredentials,
    #[error("session missing or expired")]
    Unauthorized,
    #[error("hashing error: {0}")]
    HashError(String),
    #[error("token error: {0}")]
    TokenError(String),
    #[error("repository error: {0}")]
    Repository(String),
}

impl AuthError {
    /// Stable numeric code for external mapping/logging
    pub fn code(&self) -> u16 {
        match self {
            AuthError::Validation(_) => 1001,
            AuthError::Conflict => 1002,
            AuthError::InvalidCredentials => 1003,
            AuthError::Unauthorized => 1004,
            AuthError::HashError(_) => 1101,
            AuthError::TokenError(_) => 1102,
            AuthError::Repository(_) => 1200,
        }
    }

    /// Client-facing field map for the 400 family.
    pub fn field_errors(&self) -> Option<FieldErrors> {
        match self {
            AuthError::Validation(f) => Some(f.clone()),
            AuthError::Conflict => Some(FieldErrors::single("username", DUPLICATE_USERNAME)),
            AuthError::InvalidCredentials => Some(FieldErrors::single("non_field_errors", INVALID_CREDENTIALS)),
            _ => None,
        }
    }
}

impl From<FieldErrors> for AuthError {
    fn from(e: FieldErrors) -> Self {
        AuthError::Validation(e)
    }
}

impl From<models::errors::ModelError> for AuthError {
    fn from(e: models::errors::ModelError) -> Self {
        use models::errors::ModelError;
        match e {
            ModelError::Conflict(_) => AuthError::Conflict,
            ModelError::Db(msg) => AuthError::Repository(msg),
            other => AuthError::Validation(other.into()),
        }
    }
}
