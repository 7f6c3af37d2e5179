use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::{DateTime, NaiveDate, Utc};
use serde::Deserialize;

use store::{Location, NewTravel, Travel};

use super::MALFORMED_BODY;
use crate::auth::AdminSession;
use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Default, Clone, Deserialize)]
pub struct LocationInput {
    pub name: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub country: Option<String>,
}

impl LocationInput {
    fn validate(self) -> Result<Location, ApiError> {
        let name = self
            .name
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty())
            .ok_or_else(|| ApiError::validation("O campo location.name é obrigatório"))?;
        let latitude = self
            .latitude
            .ok_or_else(|| ApiError::validation("O campo location.latitude é obrigatório"))?;
        let longitude = self
            .longitude
            .ok_or_else(|| ApiError::validation("O campo location.longitude é obrigatório"))?;

        if !latitude.is_finite() || !(-90.0..=90.0).contains(&latitude) {
            return Err(ApiError::validation("location.latitude deve estar entre -90 e 90"));
        }
        if !longitude.is_finite() || !(-180.0..=180.0).contains(&longitude) {
            return Err(ApiError::validation("location.longitude deve estar entre -180 e 180"));
        }

        Ok(Location {
            name,
            latitude,
            longitude,
            country: self.country.filter(|c| !c.trim().is_empty()),
        })
    }
}

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTravelRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub location: Option<LocationInput>,
    pub images: Option<Vec<String>>,
    pub date_visited: Option<String>,
}

impl CreateTravelRequest {
    /// Check required fields; a missing visit date becomes `now`.
    pub fn validate(self, now: DateTime<Utc>) -> Result<NewTravel, ApiError> {
        let title = self
            .title
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .ok_or_else(|| ApiError::validation("O campo title é obrigatório"))?;
        let location = self
            .location
            .ok_or_else(|| ApiError::validation("O campo location é obrigatório"))?
            .validate()?;
        let date_visited = match self.date_visited.as_deref().map(str::trim) {
            None | Some("") => now,
            Some(raw) => parse_date_visited(raw)
                .ok_or_else(|| ApiError::validation(format!("dateVisited inválido: `{raw}`")))?,
        };

        Ok(NewTravel {
            title,
            description: self.description.unwrap_or_default(),
            location,
            images: self.images.unwrap_or_default(),
            date_visited,
            created_at: now,
        })
    }
}

/// RFC 3339 timestamp, or a bare `YYYY-MM-DD` taken as midnight UTC.
pub fn parse_date_visited(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(raw) {
        return Some(timestamp.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|midnight| midnight.and_utc())
}

/// `GET /api/travels`
pub async fn list(_session: AdminSession, State(state): State<AppState>) -> Result<Json<Vec<Travel>>, ApiError> {
    let travels = state.store.list_travels().await?;
    tracing::debug!(count = travels.len(), "listed travels");
    Ok(Json(travels))
}

/// `POST /api/travels`
pub async fn create(
    _session: AdminSession,
    State(state): State<AppState>,
    payload: Result<Json<CreateTravelRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Travel>), ApiError> {
    let Json(request) = payload.map_err(|_| ApiError::validation(MALFORMED_BODY))?;
    let travel = request.validate(Utc::now())?;

    let stored = state.store.insert_travel(travel).await?;
    tracing::info!(id = %stored.id, place = %stored.location.name, "travel created");
    Ok((StatusCode::CREATED, Json(stored)))
}
