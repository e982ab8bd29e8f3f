use axum::async_trait;
use axum::extract::{rejection::JsonRejection, FromRequest, Request};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use common::types::Detail;
use serde::de::DeserializeOwned;
use service::auth::AuthError;
use service::{FieldErrors, ServiceError};
use thiserror::Error;
use tracing::error;

/// Errors rendered as `{"detail": ...}` or as a field map.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}: {1}")]
    Detail(StatusCode, String),
    #[error("invalid fields: {0}")]
    Fields(FieldErrors),
    #[error("internal: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn not_found() -> Self {
        ApiError::Detail(StatusCode::NOT_FOUND, "Not found.".into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Detail(status, msg) => (status, Json(Detail::new(msg))).into_response(),
            ApiError::Fields(fields) => (StatusCode::BAD_REQUEST, Json(fields)).into_response(),
            ApiError::Internal(msg) => {
                error!(error = %msg, "request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, Json(Detail::new("A server error occurred."))).into_response()
            }
        }
    }
}

impl From<ServiceError> for ApiError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::Validation(msg) => ApiError::Detail(StatusCode::BAD_REQUEST, msg),
            ServiceError::Fields(fields) => ApiError::Fields(fields),
            ServiceError::NotFound(msg) => ApiError::Detail(StatusCode::NOT_FOUND, msg),
            ServiceError::Model(e) => ApiError::Detail(StatusCode::BAD_REQUEST, e.to_string()),
            ServiceError::Db(msg) => ApiError::Internal(msg),
        }
    }
}

impl From<AuthError> for ApiError {
    fn from(e: AuthError) -> Self {
        if let Some(fields) = e.field_errors() {
            return ApiError::Fields(fields);
        }
        match e {
            AuthError::Unauthorized => {
                ApiError::Detail(StatusCode::UNAUTHORIZED, "Authentication credentials were not provided.".into())
            }
            other => ApiError::Internal(format!("{} (code {})", other, other.code())),
        }
    }
}

/// `axum::Json` with malformed bodies reported as `400 {"detail": ...}`.
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(JsonBody(value)),
            Err(rejection) => Err(json_rejection(rejection)),
        }
    }
}

fn json_rejection(rejection: JsonRejection) -> ApiError {
    ApiError::Detail(StatusCode::BAD_REQUEST, format!("JSON parse error - {}", rejection.body_text()))
}

/// Path ids that are not integers resolve to no route, i.e. 404.
pub fn parse_id(raw: &str) -> Result<i32, ApiError> {
    raw.parse::<i32>().map_err(|_| ApiError::not_found())
}
