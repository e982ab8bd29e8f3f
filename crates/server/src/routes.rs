pub mod auth;
pub mod bookings;
pub mod catalog;
pub mod contact;
pub mod content;

use axum::{
    routing::{get, post},
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    services::ServeDir,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use common::types::Health;

use crate::metrics;
use crate::openapi::ApiDoc;
use crate::state::ServerState;

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "Service is up", body = crate::openapi::HealthResponse)))]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Public site API, mounted under `/api`. Every path ends with a slash.
fn api_routes() -> Router<ServerState> {
    Router::new()
        .route("/hero/", get(content::hero))
        .route("/info/", get(content::info))
        .route("/support/", get(content::support))
        .route("/homepage-banner/", get(content::homepage_banner))
        .route("/testimonials/", get(content::testimonials))
        .route("/trusted-section/", get(content::trusted_section))
        .route("/faqs/", get(content::faqs))
        .route("/contact-config/", get(content::contact_config))
        .route("/about/", get(content::about))
        .route("/about/section1/", get(content::about_section_one))
        .route("/last-section/", get(content::last_section))
        .route("/sellbike/", get(content::sell_bike))
        .route("/buybikes/", get(catalog::list))
        .route("/buybikes/:id/", get(catalog::detail))
        .route("/bookings/", post(bookings::create))
        .route("/bookings/:id/", get(bookings::detail))
        .route("/bookings/:id/confirm-payment/", post(bookings::confirm_payment))
        .route("/contact-submit/", post(contact::submit))
        .route("/auth/register/", post(auth::register))
        .route("/auth/login/", post(auth::login))
        .route("/auth/logout/", post(auth::logout))
        .route("/auth/image/", get(content::auth_image))
}

/// Build the full application router: API, health, metrics, docs and media.
pub fn build_router(state: ServerState, cors: CorsLayer, media_dir: &str) -> Router {
    Router::new()
        .nest("/api", api_routes())
        .route("/health", get(health))
        .route("/metrics", get(metrics::metrics))
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .nest_service("/media", ServeDir::new(media_dir))
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                // one INFO span per request with method and path
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                // status code and latency
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                // 5xx and the like at ERROR
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
