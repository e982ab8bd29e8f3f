use axum::extract::{Path, Query, State};
use axum::Json;
use service::catalog::{BuyBike, RawBikeQuery};
use service::pagination::Page;

use crate::errors::{parse_id, ApiError};
use crate::state::ServerState;

#[utoipa::path(
    get,
    path = "/api/buybikes/",
    tag = "catalog",
    params(crate::openapi::BikeListParams),
    responses((status = 200, description = "Paginated bikes"), (status = 400, description = "Invalid filter value"), (status = 404, description = "Invalid page"))
)]
pub async fn list(State(state): State<ServerState>, Query(query): Query<RawBikeQuery>) -> Result<Json<Page<BuyBike>>, ApiError> {
    Ok(Json(state.catalog.list_bikes(&query).await?))
}

#[utoipa::path(get, path = "/api/buybikes/{id}/", tag = "catalog", params(("id" = i32, Path, description = "Bike id")), responses((status = 200, description = "Bike detail"), (status = 404, description = "Not found")))]
pub async fn detail(State(state): State<ServerState>, Path(id): Path<String>) -> Result<Json<BuyBike>, ApiError> {
    let id = parse_id(&id)?;
    Ok(Json(state.catalog.get_bike(id).await?))
}
