//! Page content endpoints. Read-only.

use axum::extract::State;
use axum::Json;
use service::content::dto::*;

use crate::errors::ApiError;
use crate::state::ServerState;

#[utoipa::path(get, path = "/api/hero/", tag = "content", responses((status = 200, description = "Published hero sections with bike images")))]
pub async fn hero(State(state): State<ServerState>) -> Result<Json<Vec<HeroSection>>, ApiError> {
    Ok(Json(state.content.hero_sections().await?))
}

#[utoipa::path(get, path = "/api/info/", tag = "content", responses((status = 200, description = "Published info sections")))]
pub async fn info(State(state): State<ServerState>) -> Result<Json<Vec<InfoSection>>, ApiError> {
    Ok(Json(state.content.info_sections().await?))
}

#[utoipa::path(get, path = "/api/support/", tag = "content", responses((status = 200, description = "Published support features")))]
pub async fn support(State(state): State<ServerState>) -> Result<Json<Vec<SupportFeature>>, ApiError> {
    Ok(Json(state.content.support_features().await?))
}

#[utoipa::path(get, path = "/api/homepage-banner/", tag = "content", responses((status = 200, description = "Active banner with visible stats"), (status = 404, description = "No banner configured")))]
pub async fn homepage_banner(State(state): State<ServerState>) -> Result<Json<HomepageBanner>, ApiError> {
    Ok(Json(state.content.homepage_banner().await?))
}

#[utoipa::path(get, path = "/api/testimonials/", tag = "content", responses((status = 200, description = "Section header (or null) and visible testimonials")))]
pub async fn testimonials(State(state): State<ServerState>) -> Result<Json<Testimonials>, ApiError> {
    Ok(Json(state.content.testimonials().await?))
}

#[utoipa::path(get, path = "/api/trusted-section/", tag = "content", responses((status = 200, description = "Active trusted section"), (status = 404, description = "Not configured")))]
pub async fn trusted_section(State(state): State<ServerState>) -> Result<Json<TrustedSection>, ApiError> {
    Ok(Json(state.content.trusted_section().await?))
}

#[utoipa::path(get, path = "/api/faqs/", tag = "content", responses((status = 200, description = "Active FAQs")))]
pub async fn faqs(State(state): State<ServerState>) -> Result<Json<Vec<Faq>>, ApiError> {
    Ok(Json(state.content.faqs().await?))
}

#[utoipa::path(get, path = "/api/contact-config/", tag = "content", responses((status = 200, description = "Active contact page settings"), (status = 404, description = "Not configured")))]
pub async fn contact_config(State(state): State<ServerState>) -> Result<Json<ContactConfig>, ApiError> {
    Ok(Json(state.content.contact_config().await?))
}

#[utoipa::path(get, path = "/api/auth/image/", tag = "content", responses((status = 200, description = "Side image for auth pages; image_url may be null")))]
pub async fn auth_image(State(state): State<ServerState>) -> Json<AuthImage> {
    Json(state.content.auth_image().await)
}

#[utoipa::path(get, path = "/api/about/section1/", tag = "content", responses((status = 200, description = "Active about section"), (status = 404, description = "Not configured")))]
pub async fn about_section_one(State(state): State<ServerState>) -> Result<Json<AboutSectionOne>, ApiError> {
    Ok(Json(state.content.about_section_one().await?))
}

#[utoipa::path(get, path = "/api/about/", tag = "content", responses((status = 200, description = "About page sections; missing ones are {}")))]
pub async fn about(State(state): State<ServerState>) -> Result<Json<AboutPage>, ApiError> {
    Ok(Json(state.content.about_page().await?))
}

#[utoipa::path(get, path = "/api/last-section/", tag = "content", responses((status = 200, description = "Latest closing section with images"), (status = 404, description = "No sections found")))]
pub async fn last_section(State(state): State<ServerState>) -> Result<Json<LastSection>, ApiError> {
    Ok(Json(state.content.last_section().await?))
}

#[utoipa::path(get, path = "/api/sellbike/", tag = "content", responses((status = 200, description = "Sell-your-bike page"), (status = 404, description = "Not found")))]
pub async fn sell_bike(State(state): State<ServerState>) -> Result<Json<SellBikePage>, ApiError> {
    Ok(Json(state.content.sell_bike_page().await?))
}
