use dioxus::prelude::*;
use store::{Memory, MemoryType};

use crate::format::format_date;

/// Card with the first image, a `+N` badge for the rest, type and age badges and the date.
#[component]
pub fn MemoryCard(memory: Memory) -> Element {
    let cover = memory.images.first().cloned();
    let extra = memory.images.len().saturating_sub(1);
    let type_class = match memory.r#type {
        MemoryType::Memory => "badge",
        MemoryType::Schoolwork => "badge badge-schoolwork",
    };
    let type_label = memory.r#type.label();
    let age_label = memory.age_category.label();
    let date = format_date(memory.created_at);
    let title = memory.title.clone();
    let description = memory.description.clone();

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
                div {
                    class: "badges",
                    span { class: "{type_class}", "{type_label}" }
                    span { class: "badge", "{age_label}" }
                }
                h3 { "{title}" }
                if !description.is_empty() {
                    p { "{description}" }
                }
                span { class: "card-date", "{date}" }
            }
        }
    }
}
