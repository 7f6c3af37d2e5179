use axum::extract::State;
use axum::response::Html;

use api::auth::AdminSession;
use api::{ApiError, AppState};

pub async fn home(_session: AdminSession, State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    let memories = state.store.count_memories().await?;
    let travels = state.store.count_travels().await?;
    Ok(Html(ui::render_home(memories, travels)))
}
