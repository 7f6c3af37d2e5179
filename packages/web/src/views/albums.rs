use axum::extract::{Query, State};
use axum::response::Html;
use serde::Deserialize;

use api::auth::AdminSession;
use api::{ApiError, AppState};
use store::{AgeCategory, MemoryFilter, MemoryType};

/// Sidebar selection. Missing or unknown values fall back to `memory` / `1ano`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlbumQuery {
    age_category: Option<String>,
    r#type: Option<String>,
}

impl AlbumQuery {
    fn selection(&self) -> (MemoryType, AgeCategory) {
        let kind = self
            .r#type
            .as_deref()
            .and_then(|t| t.parse().ok())
            .unwrap_or_default();
        let age = self
            .age_category
            .as_deref()
            .and_then(|a| a.parse().ok())
            .unwrap_or_default();
        (kind, age)
    }
}

pub async fn memories(
    _session: AdminSession,
    State(state): State<AppState>,
    Query(query): Query<AlbumQuery>,
) -> Result<Html<String>, ApiError> {
    let (kind, age) = query.selection();
    let memories = state
        .store
        .list_memories(MemoryFilter {
            age_category: Some(age),
            r#type: Some(kind),
        })
        .await?;
    Ok(Html(ui::render_memories(memories, kind, age)))
}

pub async fn travels(_session: AdminSession, State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    let travels = state.store.list_travels().await?;
    Ok(Html(ui::render_travels(travels)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_defaults() {
        assert_eq!(
            AlbumQuery::default().selection(),
            (MemoryType::Memory, AgeCategory::Year1)
        );
    }

    #[test]
    fn test_selection_parses_and_ignores_garbage() {
        let query = AlbumQuery {
            age_category: Some("3anos".into()),
            r#type: Some("escola".into()),
        };
        assert_eq!(query.selection(), (MemoryType::Memory, AgeCategory::Years3));
    }
}
