use dioxus::prelude::*;
use serde::Serialize;
use store::Travel;

use crate::components::{Footer, NavPage, Navbar, TravelCard};

/// What the map widget needs for one pin.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MapMarker {
    pub id: String,
    pub title: String,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub date_visited: String,
}

impl From<&Travel> for MapMarker {
    fn from(travel: &Travel) -> Self {
        Self {
            id: travel.id.to_string(),
            title: travel.title.clone(),
            name: travel.location.name.clone(),
            latitude: travel.location.latitude,
            longitude: travel.location.longitude,
            date_visited: travel.date_visited.to_rfc3339(),
        }
    }
}

/// JSON array of markers for the `data-markers` attribute.
pub fn markers_json(travels: &[Travel]) -> String {
    let markers: Vec<MapMarker> = travels.iter().map(MapMarker::from).collect();
    serde_json::to_string(&markers).unwrap_or_else(|_| "[]".to_string())
}

/// Travel album: map container first, then one card per trip.
#[component]
pub fn TravelsPage(travels: Vec<Travel>) -> Element {
    let markers = markers_json(&travels);
    let count = travels.len();

    rsx! {
        Navbar { current: NavPage::Travels }
        main {
            h1 { "Álbum de Viagens" }
            p { style: "color: #4b5563;", "{count} lugares visitados" }
            div { id: "travel-map", "data-markers": "{markers}" }
            if travels.is_empty() {
                p { class: "empty", "Nenhuma viagem cadastrada ainda." }
            } else {
                div {
                    class: "grid",
                    for travel in travels.iter() {
                        TravelCard { travel: travel.clone() }
                    }
                }
            }
        }
        Footer {}
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use store::Location;
    use uuid::Uuid;

    use super::*;

    #[test]
    fn test_markers_json_fields() {
        let visited = Utc.with_ymd_and_hms(2024, 3, 5, 0, 0, 0).unwrap();
        let travel = Travel {
            id: Uuid::nil(),
            title: "Praia".into(),
            description: String::new(),
            location: Location {
                name: "Ubatuba".into(),
                latitude: -23.43,
                longitude: -45.07,
                country: None,
            },
            images: Vec::new(),
            date_visited: visited,
            created_at: visited,
            updated_at: visited,
        };

        let json: serde_json::Value = serde_json::from_str(&markers_json(&[travel])).unwrap();
        assert_eq!(json[0]["id"], Uuid::nil().to_string());
        assert_eq!(json[0]["title"], "Praia");
        assert_eq!(json[0]["name"], "Ubatuba");
        assert_eq!(json[0]["latitude"], -23.43);
        assert_eq!(json[0]["dateVisited"], "2024-03-05T00:00:00+00:00");
    }

    #[test]
    fn test_empty_markers() {
        assert_eq!(markers_json(&[]), "[]");
    }
}
