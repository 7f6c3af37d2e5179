use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::geocode::GeocodeError;
use crate::media::MediaError;
use store::StoreError;

/// Message sent for every 401, whatever the cause.
pub const UNAUTHORIZED_MESSAGE: &str = "Não autorizado";

/// Every failure an API handler can answer with.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Bad input. The message is sent to the client verbatim.
    #[error("{0}")]
    Validation(String),

    #[error("Unauthorized")]
    Unauthorized,

    #[error("store: {0}")]
    Store(#[from] StoreError),

    #[error("media host: {0}")]
    Media(#[from] MediaError),

    #[error("geocoder: {0}")]
    Geocode(#[from] GeocodeError),

    #[error("internal: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::Validation(message.into())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
            ApiError::Store(_) | ApiError::Media(_) | ApiError::Geocode(_) | ApiError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self {
            ApiError::Validation(message) => message.clone(),
            ApiError::Unauthorized => UNAUTHORIZED_MESSAGE.to_string(),
            upstream => {
                tracing::error!(error = %upstream, "request failed upstream");
                "Internal server error".to_string()
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
