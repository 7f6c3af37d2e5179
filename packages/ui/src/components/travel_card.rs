use dioxus::prelude::*;
use store::Travel;

use crate::format::format_date;

#[component]
pub fn TravelCard(travel: Travel) -> Element {
    let cover = travel.images.first().cloned();
    let extra = travel.images.len().saturating_sub(1);
    let title = travel.title.clone();
    let description = travel.description.clone();
    let place = match &travel.location.country {
        Some(country) if !travel.location.name.contains(country.as_str()) => {
            format!("{}, {}", travel.location.name, country)
        }
        _ => travel.location.name.clone(),
    };
    let date = format_date(travel.date_visited);

    rsx! {
        article {
            class: "card",
            if let Some(src) = cover {
                div {
                    class: "card-image",
                    img { src: "{src}", alt: "{title}", loading: "lazy" }
                    if extra > 0 {
                        span { class: "card-extra", "+{extra}" }
                    }
                }
            }
            div {
                class: "card-body",
                h3 { "{title}" }
                div { class: "badges", span { class: "badge", "{place}" } }
                if !description.is_empty() {
                    p { "{description}" }
                }
                span { class: "card-date", "{date}" }
            }
        }
    }
}
