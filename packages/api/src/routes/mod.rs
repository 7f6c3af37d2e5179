//! HTTP routes of the JSON API.
//!
//! | Method | Path | Session |
//! |--------|------|---------|
//! | `POST`, `DELETE` | `/api/auth` | no |
//! | `GET`, `POST` | `/api/memories` | yes |
//! | `GET`, `POST` | `/api/travels` | yes |
//! | `POST` | `/api/upload` | yes |
//! | `GET` | `/api/geocode` | no |

use axum::extract::DefaultBodyLimit;
use axum::middleware;
use axum::routing::{get, post};
use axum::Router;

use crate::auth::require_session;
use crate::media::UPLOAD_BODY_LIMIT;
use crate::state::AppState;

mod auth;
mod geocode;
mod memories;
mod travels;
mod upload;

pub use auth::{AuthResponse, LoginRequest};
pub use geocode::GeocodeQuery;
pub use memories::{CreateMemoryRequest, MemoryQuery};
pub use travels::{parse_date_visited, CreateTravelRequest, LocationInput};
pub use upload::UploadResponse;

/// Every `/api` route, still waiting for its state.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/auth", post(auth::login).delete(auth::logout))
        .route("/api/memories", get(memories::list).post(memories::create))
        .route("/api/travels", get(travels::list).post(travels::create))
        .route(
            "/api/upload",
            post(upload::upload).layer(DefaultBodyLimit::max(UPLOAD_BODY_LIMIT)),
        )
        .route("/api/geocode", get(geocode::search))
}

/// Put `routes` behind the session guard and bind the state.
pub fn with_guard(routes: Router<AppState>, state: AppState) -> Router {
    routes
        .layer(middleware::from_fn_with_state(state.clone(), require_session))
        .with_state(state)
}

/// Message for a body that is not the expected JSON.
const MALFORMED_BODY: &str = "Corpo da requisição inválido";
