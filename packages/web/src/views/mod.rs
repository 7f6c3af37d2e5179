//! Server-rendered pages. Each handler loads what the page shows and hands it
//! to the matching `ui::render_*` function.

use axum::http::header;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::Router;

use api::AppState;

mod albums;
mod home;
mod login;
mod upload;

/// Page routes plus the client script.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/login", get(login::login))
        .route("/", get(home::home))
        .route("/memorias", get(albums::memories))
        .route("/viagens", get(albums::travels))
        .route("/upload", get(upload::upload))
        .route("/assets/app.js", get(app_js))
}

async fn app_js() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/javascript; charset=utf-8")],
        ui::APP_JS,
    )
}
