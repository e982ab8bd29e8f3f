use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use models::contact_submission;
use service::contact::ContactRequest;

use crate::errors::{ApiError, JsonBody};
use crate::state::ServerState;

#[utoipa::path(
    post,
    path = "/api/contact-submit/",
    tag = "contact",
    request_body = crate::openapi::ContactRequestDoc,
    responses((status = 201, description = "Stored; sent_email reports delivery"), (status = 400, description = "Validation error"))
)]
pub async fn submit(
    State(state): State<ServerState>,
    JsonBody(req): JsonBody<ContactRequest>,
) -> Result<(StatusCode, Json<contact_submission::Model>), ApiError> {
    let saved = state.contact.submit(&req).await?;
    Ok((StatusCode::CREATED, Json(saved)))
}
