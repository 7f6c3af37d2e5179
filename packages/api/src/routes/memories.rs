use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::{DateTime, Utc};
use serde::Deserialize;

use store::{AgeCategory, Memory, MemoryFilter, MemoryType, NewMemory};

use super::MALFORMED_BODY;
use crate::auth::AdminSession;
use crate::error::ApiError;
use crate::state::AppState;

/// `?ageCategory=&type=`; an empty value is the same as no value.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemoryQuery {
    pub age_category: Option<String>,
    pub r#type: Option<String>,
}

impl MemoryQuery {
    pub fn into_filter(self) -> Result<MemoryFilter, ApiError> {
        Ok(MemoryFilter {
            age_category: parse_optional::<AgeCategory>(self.age_category)?,
            r#type: parse_optional::<MemoryType>(self.r#type)?,
        })
    }
}

fn parse_optional<T>(value: Option<String>) -> Result<Option<T>, ApiError>
where
    T: std::str::FromStr<Err = store::UnknownVariant>,
{
    match value.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(raw) => raw
            .parse()
            .map(Some)
            .map_err(|e: store::UnknownVariant| ApiError::validation(e.to_string())),
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMemoryRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub images: Option<Vec<String>>,
    pub age_category: Option<String>,
    pub r#type: Option<String>,
}

impl CreateMemoryRequest {
    /// Check required fields and stamp the creation time.
    pub fn validate(self, now: DateTime<Utc>) -> Result<NewMemory, ApiError> {
        let title = self
            .title
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .ok_or_else(|| ApiError::validation("O campo title é obrigatório"))?;
        let age_category = parse_optional::<AgeCategory>(self.age_category)?
            .ok_or_else(|| ApiError::validation("O campo ageCategory é obrigatório"))?;
        let kind = parse_optional::<MemoryType>(self.r#type)?
            .ok_or_else(|| ApiError::validation("O campo type é obrigatório"))?;

        Ok(NewMemory {
            title,
            description: self.description.unwrap_or_default(),
            images: self.images.unwrap_or_default(),
            age_category,
            r#type: kind,
            created_at: now,
        })
    }
}

/// `GET /api/memories`
pub async fn list(
    _session: AdminSession,
    State(state): State<AppState>,
    query: Result<Query<MemoryQuery>, QueryRejection>,
) -> Result<Json<Vec<Memory>>, ApiError> {
    let Query(query) = query.map_err(|e| ApiError::validation(e.body_text()))?;
    let filter = query.into_filter()?;

    let memories = state.store.list_memories(filter).await?;
    tracing::debug!(count = memories.len(), ?filter, "listed memories");
    Ok(Json(memories))
}

/// `POST /api/memories`
pub async fn create(
    _session: AdminSession,
    State(state): State<AppState>,
    payload: Result<Json<CreateMemoryRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Memory>), ApiError> {
    let Json(request) = payload.map_err(|_| ApiError::validation(MALFORMED_BODY))?;
    let memory = request.validate(Utc::now())?;

    let stored = state.store.insert_memory(memory).await?;
    tracing::info!(id = %stored.id, age = %stored.age_category, "memory created");
    Ok((StatusCode::CREATED, Json(stored)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> CreateMemoryRequest {
        CreateMemoryRequest {
            title: Some("Primeiro dente".into()),
            description: None,
            images: None,
            age_category: Some("1ano".into()),
            r#type: Some("memory".into()),
        }
    }

    #[test]
    fn test_defaults_optional_fields() {
        let now = Utc::now();
        let memory = request().validate(now).unwrap();
        assert_eq!(memory.description, "");
        assert!(memory.images.is_empty());
        assert_eq!(memory.age_category, AgeCategory::Year1);
        assert_eq!(memory.created_at, now);
    }

    #[test]
    fn test_title_required() {
        for title in [None, Some(String::new()), Some("   ".into())] {
            let err = CreateMemoryRequest { title, ..request() }
                .validate(Utc::now())
                .unwrap_err();
            assert!(matches!(err, ApiError::Validation(ref m) if m.contains("title")));
        }
    }

    #[test]
    fn test_age_category_and_type_required() {
        let err = CreateMemoryRequest {
            age_category: None,
            ..request()
        }
        .validate(Utc::now())
        .unwrap_err();
        assert!(matches!(err, ApiError::Validation(ref m) if m.contains("ageCategory")));

        let err = CreateMemoryRequest {
            r#type: Some(String::new()),
            ..request()
        }
        .validate(Utc::now())
        .unwrap_err();
        assert!(matches!(err, ApiError::Validation(ref m) if m.contains("type")));
    }

    #[test]
    fn test_unknown_values_rejected() {
        let err = CreateMemoryRequest {
            age_category: Some("11anos".into()),
            ..request()
        }
        .validate(Utc::now())
        .unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));

        let err = CreateMemoryRequest {
            r#type: Some("photo".into()),
            ..request()
        }
        .validate(Utc::now())
        .unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));
    }

    #[test]
    fn test_query_filter() {
        let filter = MemoryQuery {
            age_category: Some("1ano".into()),
            r#type: Some(String::new()),
        }
        .into_filter()
        .unwrap();
        assert_eq!(filter.age_category, Some(AgeCategory::Year1));
        assert_eq!(filter.r#type, None);

        assert!(MemoryQuery {
            age_category: None,
            r#type: Some("video".into()),
        }
        .into_filter()
        .is_err());
    }
}
