use std::collections::BTreeMap;
use std::fmt;

use models::errors::ModelError;
use serde::Serialize;
use thiserror::Error;

pub const REQUIRED: &str = "This field is required.";

/// Per-field validation messages, serialized as `{"field": ["message", ...]}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn single(field: impl Into<String>, message: impl Into<String>) -> Self {
        let mut errors = Self::new();
        errors.add(field, message);
        errors
    }

    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_default().push(message.into());
    }

    pub fn merge(&mut self, other: FieldErrors) {
        for (field, messages) in other.0 {
            self.0.entry(field).or_default().extend(messages);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

    /// `Ok(())` when nothing was recorded.
    pub fn into_result(self) -> Result<(), FieldErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl From<ModelError> for FieldErrors {
    fn from(e: ModelError) -> Self {
        match e {
            ModelError::Field { field, message } => FieldErrors::single(field, message),
            other => FieldErrors::single("non_field_errors", other.to_string()),
        }
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, messages) in &self.0 {
            if !first {
                f.write_str("; ")?;
            }
            first = false;
            write!(f, "{}: {}", field, messages.join(" "))?;
        }
        Ok(())
    }
}

#[derive(Debug, Error)]
pub enum ServiceError {
    /// Request-level rejection rendered as `{"detail": ...}`.
    #[error("{0}")]
    Validation(String),
    #[error("invalid input: {0}")]
    Fields(FieldErrors),
    /// Carries the public detail message, e.g. `Not found.`
    #[error("{0}")]
    NotFound(String),
    #[error("database error: {0}")]
    Db(String),
    #[error("model error: {0}")]
    Model(ModelError),
}

impl ServiceError {
    pub fn not_found() -> Self {
        Self::NotFound("Not found.".into())
    }
}

impl From<FieldErrors> for ServiceError {
    fn from(e: FieldErrors) -> Self {
        ServiceError::Fields(e)
    }
}

impl From<ModelError> for ServiceError {
    fn from(e: ModelError) -> Self {
        match e {
            ModelError::Field { .. } => ServiceError::Fields(e.into()),
            ModelError::Db(msg) => ServiceError::Db(msg),
            other => ServiceError::Model(other),
        }
    }
}

impl From<sea_orm::DbErr> for ServiceError {
    fn from(e: sea_orm::DbErr) -> Self {
        ServiceError::Db(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_errors_serialize_as_lists() {
        let mut errs = FieldErrors::new();
        errs.add("password", "Too short.");
        errs.add("password", "Too common.");
        errs.add("email", "Enter a valid email address.");
        let json = serde_json::to_value(&errs).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"email": ["Enter a valid email address."], "password": ["Too short.", "Too common."]})
        );
    }

    #[test]
    fn model_field_error_becomes_field_errors() {
        let err: ServiceError = ModelError::field("owners", "bad").into();
        match err {
            ServiceError::Fields(f) => assert_eq!(f.get("owners"), Some(&["bad".to_string()][..])),
            other => panic!("unexpected {other:?}"),
        }
    }
}
