use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;

use crate::error::ApiError;
use crate::geocode::GeocodeCandidate;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct GeocodeQuery {
    pub address: Option<String>,
}

/// `GET /api/geocode?address=`
pub async fn search(
    State(state): State<AppState>,
    query: Result<Query<GeocodeQuery>, QueryRejection>,
) -> Result<Json<Vec<GeocodeCandidate>>, ApiError> {
    let Query(query) = query.map_err(|e| ApiError::validation(e.body_text()))?;
    let address = query
        .address
        .map(|a| a.trim().to_string())
        .filter(|a| !a.is_empty())
        .ok_or_else(|| ApiError::validation("Endereço é obrigatório"))?;

    let candidates = state.geocoder.search(&address).await?;
    Ok(Json(candidates))
}
