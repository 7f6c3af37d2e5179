//! Address search through a Nominatim-compatible geocoder.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::GeocoderConfig;

#[derive(Debug, Error)]
pub enum GeocodeError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("geocoder answered with status {0}")]
    Status(u16),
}

/// One candidate location for a free-text address.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeocodeCandidate {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub country: String,
    pub state: String,
    pub city: String,
}

/// Raw search result, as Nominatim sends it.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawPlace {
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub lat: String,
    #[serde(default)]
    pub lon: String,
    #[serde(default)]
    pub address: Option<RawAddress>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawAddress {
    pub country: Option<String>,
    pub state: Option<String>,
    pub city: Option<String>,
    pub town: Option<String>,
    pub village: Option<String>,
}

impl RawPlace {
    /// `None` when the coordinates do not parse to finite numbers.
    pub fn into_candidate(self) -> Option<GeocodeCandidate> {
        let latitude = self.lat.trim().parse::<f64>().ok().filter(|v| v.is_finite())?;
        let longitude = self.lon.trim().parse::<f64>().ok().filter(|v| v.is_finite())?;
        let address = self.address.unwrap_or_default();

        Some(GeocodeCandidate {
            name: self.display_name,
            latitude,
            longitude,
            country: address.country.unwrap_or_default(),
            state: address.state.unwrap_or_default(),
            city: address
                .city
                .or(address.town)
                .or(address.village)
                .unwrap_or_default(),
        })
    }
}

#[async_trait]
pub trait Geocoder: Send + Sync {
    async fn search(&self, address: &str) -> Result<Vec<GeocodeCandidate>, GeocodeError>;
}

pub struct NominatimGeocoder {
    client: reqwest::Client,
    config: GeocoderConfig,
}

impl NominatimGeocoder {
    pub fn new(config: GeocoderConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }
}

#[async_trait]
impl Geocoder for NominatimGeocoder {
    async fn search(&self, address: &str) -> Result<Vec<GeocodeCandidate>, GeocodeError> {
        let limit = self.config.limit.to_string();
        let response = self
            .client
            .get(format!("{}/search", self.config.base_url))
            .query(&[
                ("format", "json"),
                ("q", address),
                ("limit", limit.as_str()),
                ("addressdetails", "1"),
            ])
            .header(reqwest::header::USER_AGENT, &self.config.user_agent)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(GeocodeError::Status(response.status().as_u16()));
        }

        let places: Vec<RawPlace> = response.json().await?;
        let candidates: Vec<_> = places
            .into_iter()
            .filter_map(RawPlace::into_candidate)
            .take(self.config.limit)
            .collect();
        tracing::debug!(count = candidates.len(), "geocoded address");
        Ok(candidates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> Vec<GeocodeCandidate> {
        let places: Vec<RawPlace> = serde_json::from_str(json).unwrap();
        places.into_iter().filter_map(RawPlace::into_candidate).collect()
    }

    #[test]
    fn test_maps_full_result() {
        let candidates = parse(
            r#"[{"display_name":"Lisboa, Portugal","lat":"38.7077507","lon":"-9.1365919",
                 "address":{"city":"Lisboa","state":"Lisboa","country":"Portugal"}}]"#,
        );
        assert_eq!(
            candidates,
            vec![GeocodeCandidate {
                name: "Lisboa, Portugal".into(),
                latitude: 38.7077507,
                longitude: -9.1365919,
                country: "Portugal".into(),
                state: "Lisboa".into(),
                city: "Lisboa".into(),
            }]
        );
    }

    #[test]
    fn test_city_falls_back_to_town_then_village() {
        let candidates = parse(
            r#"[{"display_name":"a","lat":"1","lon":"2","address":{"town":"Sintra","village":"Other"}},
                {"display_name":"b","lat":"1","lon":"2","address":{"village":"Monsaraz"}}]"#,
        );
        assert_eq!(candidates[0].city, "Sintra");
        assert_eq!(candidates[1].city, "Monsaraz");
    }

    #[test]
    fn test_missing_address_parts_are_empty() {
        let candidates = parse(r#"[{"display_name":"Somewhere","lat":"0","lon":"0"}]"#);
        assert_eq!(candidates[0].country, "");
        assert_eq!(candidates[0].state, "");
        assert_eq!(candidates[0].city, "");
        assert_eq!(candidates[0].latitude, 0.0);
    }

    #[test]
    fn test_unparsable_coordinates_dropped() {
        let candidates = parse(
            r#"[{"display_name":"bad","lat":"north","lon":"2"},
                {"display_name":"good","lat":"-22.9","lon":"-43.2"}]"#,
        );
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].name, "good");
    }
}
