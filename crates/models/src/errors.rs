use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("validation error: {0}")]
    Validation(String),
    /// Validation failure attributable to a single input field.
    #[error("{field}: {message}")]
    Field { field: &'static str, message: String },
    /// Unique constraint violation.
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("database error: {0}")]
    Db(String),
}

impl ModelError {
    pub fn field(field: &'static str, message: impl Into<String>) -> Self {
        ModelError::Field { field, message: message.into() }
    }
}

impl From<DbErr> for ModelError {
    fn from(e: DbErr) -> Self {
        match e.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(msg)) => ModelError::Conflict(msg),
            _ => ModelError::Db(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_db_errors_stay_db() {
        let err: ModelError = DbErr::Custom("boom".into()).into();
        assert!(matches!(err, ModelError::Db(_)));
    }

    #[test]
    fn field_display() {
        assert_eq!(ModelError::field("email", "Enter a valid email address.").to_string(), "email: Enter a valid email address.");
    }
}
