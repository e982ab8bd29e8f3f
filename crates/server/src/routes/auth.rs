use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use common::types::Detail;
use serde::Serialize;
use service::auth::domain::{LoginInput, RegisterInput};

use crate::errors::{ApiError, JsonBody};
use crate::extract::AUTH_COOKIE;
use crate::state::ServerState;

#[derive(Serialize)]
pub struct LoginOutput {
    pub detail: &'static str,
    pub username: String,
}

#[utoipa::path(post, path = "/api/auth/register/", tag = "auth", request_body = crate::openapi::RegisterRequest, responses((status = 201, description = "Registered"), (status = 400, description = "Validation error or duplicate username")))]
pub async fn register(
    State(state): State<ServerState>,
    JsonBody(input): JsonBody<RegisterInput>,
) -> Result<(StatusCode, Json<Detail>), ApiError> {
    state.auth.register(input).await?;
    Ok((StatusCode::CREATED, Json(Detail::new("registered"))))
}

#[utoipa::path(post, path = "/api/auth/login/", tag = "auth", request_body = crate::openapi::LoginRequest, responses((status = 200, description = "Logged in; sets auth_token cookie"), (status = 400, description = "Invalid credentials")))]
pub async fn login(
    State(state): State<ServerState>,
    jar: CookieJar,
    JsonBody(input): JsonBody<LoginInput>,
) -> Result<(CookieJar, Json<LoginOutput>), ApiError> {
    let session = state.auth.login(input).await?;
    let mut cookie = Cookie::new(AUTH_COOKIE, session.token);
    cookie.set_path("/");
    cookie.set_http_only(true);
    cookie.set_secure(state.cookie_secure);
    cookie.set_same_site(SameSite::Lax);
    let jar = jar.add(cookie);
    Ok((jar, Json(LoginOutput { detail: "logged-in", username: session.user.username })))
}

#[utoipa::path(post, path = "/api/auth/logout/", tag = "auth", responses((status = 200, description = "Logged out; cookie removed")))]
pub async fn logout(jar: CookieJar) -> (CookieJar, Json<Detail>) {
    let jar = jar.remove(Cookie::build(AUTH_COOKIE).path("/"));
    (jar, Json(Detail::new("logged-out")))
}
