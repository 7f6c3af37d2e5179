use axum::extract::State;
use axum::http::HeaderMap;
use axum::response::{Html, IntoResponse, Redirect, Response};

use api::auth::session_token;
use api::AppState;

/// Login page. Someone already signed in goes straight to the home page.
pub async fn login(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let signed_in = session_token(&headers).is_some_and(|token| state.codec.verify(&token).is_ok());
    if signed_in {
        return Redirect::to("/").into_response();
    }
    Html(ui::render_login()).into_response()
}
