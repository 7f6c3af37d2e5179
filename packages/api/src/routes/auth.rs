use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use super::MALFORMED_BODY;
use crate::auth::{removal_cookie, session_cookie, ADMIN_SUBJECT};
use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AuthResponse {
    pub success: bool,
    pub message: String,
}

impl AuthResponse {
    fn new(success: bool, message: &str) -> Json<Self> {
        Json(Self {
            success,
            message: message.to_string(),
        })
    }
}

/// `POST /api/auth`
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(request) = payload.map_err(|_| ApiError::validation(MALFORMED_BODY))?;
    let username = request.username.unwrap_or_default();
    let password = request.password.unwrap_or_default();

    if !state.config.admin.matches(&username, &password) {
        tracing::warn!(%username, "login rejected");
        return Ok((
            StatusCode::UNAUTHORIZED,
            AuthResponse::new(false, "Credenciais inválidas"),
        )
            .into_response());
    }

    let token = state
        .codec
        .issue(ADMIN_SUBJECT)
        .map_err(|e| ApiError::Internal(e.to_string()))?;
    let cookie = session_cookie(token, state.config.environment.is_production());

    tracing::info!("admin logged in");
    Ok((
        [(header::SET_COOKIE, cookie.to_string())],
        AuthResponse::new(true, "Login realizado com sucesso!"),
    )
        .into_response())
}

/// `DELETE /api/auth`
pub async fn logout(State(state): State<AppState>) -> Response {
    let cookie = removal_cookie(state.config.environment.is_production());
    (
        [(header::SET_COOKIE, cookie.to_string())],
        AuthResponse::new(true, "Logout realizado com sucesso!"),
    )
        .into_response()
}
