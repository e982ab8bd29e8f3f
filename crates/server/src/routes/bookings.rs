use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use common::types::Detail;
use service::booking::domain::{BookingDetail, BookingRequest};

use crate::errors::{parse_id, ApiError, JsonBody};
use crate::extract::MaybeUser;
use crate::state::ServerState;

#[utoipa::path(
    post,
    path = "/api/bookings/",
    tag = "bookings",
    request_body = crate::openapi::BookingRequestDoc,
    responses((status = 201, description = "Booking created"), (status = 400, description = "Validation error"))
)]
pub async fn create(
    State(state): State<ServerState>,
    MaybeUser(user_id): MaybeUser,
    JsonBody(req): JsonBody<BookingRequest>,
) -> Result<(StatusCode, Json<BookingDetail>), ApiError> {
    let detail = state.bookings.create(&req, user_id).await?;
    Ok((StatusCode::CREATED, Json(detail)))
}

#[utoipa::path(get, path = "/api/bookings/{id}/", tag = "bookings", params(("id" = i32, Path, description = "Booking id")), responses((status = 200, description = "Booking detail"), (status = 404, description = "Not found")))]
pub async fn detail(State(state): State<ServerState>, Path(id): Path<String>) -> Result<Json<BookingDetail>, ApiError> {
    let id = parse_id(&id)?;
    Ok(Json(state.bookings.get(id).await?))
}

#[utoipa::path(
    post,
    path = "/api/bookings/{id}/confirm-payment/",
    tag = "bookings",
    params(("id" = i32, Path, description = "Booking id")),
    responses((status = 200, description = "Booking marked as paid"), (status = 400, description = "Already paid"), (status = 404, description = "Not found"))
)]
pub async fn confirm_payment(State(state): State<ServerState>, Path(id): Path<String>) -> Result<Json<Detail>, ApiError> {
    let id = parse_id(&id)?;
    state.bookings.confirm_payment(id).await?;
    Ok(Json(Detail::new("Booking marked as paid")))
}
