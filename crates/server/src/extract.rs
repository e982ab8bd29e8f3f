use std::convert::Infallible;

use axum::async_trait;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum_extra::extract::cookie::CookieJar;
use service::auth::token;

use crate::state::ServerState;

pub const AUTH_COOKIE: &str = "auth_token";

/// Session user id, if a valid `auth_token` cookie came with the request.
#[derive(Debug, Clone, Copy)]
pub struct MaybeUser(pub Option<i32>);

#[async_trait]
impl FromRequestParts<ServerState> for MaybeUser {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &ServerState) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let user_id = jar
            .get(AUTH_COOKIE)
            .and_then(|c| token::verify(state.jwt_secret(), c.value()).ok())
            .and_then(|claims| claims.user_id().ok());
        Ok(MaybeUser(user_id))
    }
}
