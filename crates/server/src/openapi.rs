use utoipa::{IntoParams, OpenApi, ToSchema};

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct DetailResponse { pub detail: String }

#[derive(ToSchema)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

#[derive(ToSchema)]
pub struct LoginRequest { pub username: String, pub password: String }

#[derive(ToSchema)]
pub struct BookingRequestDoc {
    /// Bike id.
    pub buybike: i32,
    /// Non-negative, at most two decimal places. Defaults to 0.
    pub test_drive_fee: Option<String>,
}

#[derive(ToSchema)]
pub struct ContactRequestDoc {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub reason: Option<String>,
    pub found_us: Option<String>,
    pub message: Option<String>,
}

#[derive(IntoParams)]
#[into_params(parameter_in = Query)]
pub struct BikeListParams {
    pub brand: Option<String>,
    pub category: Option<String>,
    pub fuel_type: Option<String>,
    pub color: Option<String>,
    pub price_min: Option<f64>,
    pub price_max: Option<f64>,
    pub year_min: Option<f64>,
    pub year_max: Option<f64>,
    pub km_max: Option<f64>,
    pub engine_cc_min: Option<f64>,
    pub engine_cc_max: Option<f64>,
    /// Matches title, description, brand or location name.
    pub search: Option<String>,
    /// Comma separated; any of created_at, price, kilometers, year with optional `-`.
    pub ordering: Option<String>,
    pub page: Option<u64>,
    pub page_size: Option<u64>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::content::hero,
        crate::routes::content::info,
        crate::routes::content::support,
        crate::routes::content::homepage_banner,
        crate::routes::content::testimonials,
        crate::routes::content::trusted_section,
        crate::routes::content::faqs,
        crate::routes::content::contact_config,
        crate::routes::content::auth_image,
        crate::routes::content::about_section_one,
        crate::routes::content::about,
        crate::routes::content::last_section,
        crate::routes::content::sell_bike,
        crate::routes::catalog::list,
        crate::routes::catalog::detail,
        crate::routes::bookings::create,
        crate::routes::bookings::detail,
        crate::routes::bookings::confirm_payment,
        crate::routes::contact::submit,
        crate::routes::auth::register,
        crate::routes::auth::login,
        crate::routes::auth::logout,
    ),
    components(
        schemas(
            HealthResponse,
            DetailResponse,
            RegisterRequest,
            LoginRequest,
            BookingRequestDoc,
            ContactRequestDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "content"),
        (name = "catalog"),
        (name = "bookings"),
        (name = "contact"),
        (name = "auth")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_api_path_is_documented() {
        let doc = ApiDoc::openapi();
        for path in ["/api/buybikes/", "/api/bookings/{id}/confirm-payment/", "/api/auth/login/", "/health"] {
            assert!(doc.paths.paths.contains_key(path), "{path} missing");
        }
    }
}
