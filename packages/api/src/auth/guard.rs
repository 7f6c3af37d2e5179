use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};

use super::session::session_token;
use crate::error::ApiError;
use crate::state::AppState;

/// Paths reachable without a session.
pub fn is_public_path(path: &str) -> bool {
    matches!(path, "/login" | "/api/auth" | "/api/geocode") || path.starts_with("/assets/")
}

/// Middleware gating every non-public path on a valid session cookie.
///
/// API requests without one get a 401 JSON body; page requests are sent to `/login`.
pub async fn require_session(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let path = request.uri().path().to_owned();
    if is_public_path(&path) {
        return next.run(request).await;
    }

    let authenticated = session_token(request.headers())
        .is_some_and(|token| state.codec.verify(&token).is_ok());
    if authenticated {
        return next.run(request).await;
    }

    if path.starts_with("/api/") {
        tracing::debug!(%path, "rejected unauthenticated api request");
        ApiError::Unauthorized.into_response()
    } else {
        tracing::debug!(%path, "redirecting unauthenticated page request");
        Redirect::to("/login").into_response()
    }
}
