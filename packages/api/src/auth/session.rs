//! The `auth-token` cookie and the authenticated-session extractor.

use axum::extract::FromRequestParts;
use axum::http::{header, request::Parts, HeaderMap};
use cookie::time::Duration;
use cookie::{Cookie, SameSite};

use super::token::SESSION_LIFETIME_DAYS;
use crate::error::ApiError;
use crate::state::AppState;

/// Name of the cookie carrying the session token.
pub const SESSION_COOKIE: &str = "auth-token";

/// Cookie set after a successful login.
pub fn session_cookie(token: String, secure: bool) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, token))
        .http_only(true)
        .same_site(SameSite::Lax)
        .path("/")
        .max_age(Duration::days(SESSION_LIFETIME_DAYS))
        .secure(secure)
        .build()
}

/// Cookie that makes the browser drop the session.
pub fn removal_cookie(secure: bool) -> Cookie<'static> {
    let mut cookie = session_cookie(String::new(), secure);
    cookie.make_removal();
    cookie
}

/// Session token from the request's `Cookie` headers, if any.
pub fn session_token(headers: &HeaderMap) -> Option<String> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(Cookie::split_parse)
        .filter_map(Result::ok)
        .find(|cookie| cookie.name() == SESSION_COOKIE && !cookie.value().is_empty())
        .map(|cookie| cookie.value().to_string())
}

/// Proof that the request carried a valid session token.
#[derive(Debug, Clone)]
pub struct AdminSession {
    pub subject: String,
}

impl FromRequestParts<AppState> for AdminSession {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let token = session_token(&parts.headers).ok_or(ApiError::Unauthorized)?;
        let subject = state
            .codec
            .verify(&token)
            .map_err(|_| ApiError::Unauthorized)?;
        Ok(AdminSession { subject })
    }
}
