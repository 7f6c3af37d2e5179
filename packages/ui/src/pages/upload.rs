use dioxus::prelude::*;
use store::{AgeCategory, MemoryType};

use crate::components::{Footer, NavPage, Navbar};

/// Forms for new memories and travels. `app.js` uploads the images one by one,
/// geocodes the place for travels and then creates the record.
#[component]
pub fn UploadPage(today: String) -> Element {
    let default_age = AgeCategory::default().as_str();

    rsx! {
        Navbar { current: NavPage::Upload }
        main {
            h1 { "Adicionar" }
            div {
                class: "tabs",
                button { class: "tab active", r#type: "button", "data-target": "memory-form", "Memória" }
                button { class: "tab", r#type: "button", "data-target": "travel-form", "Viagem" }
            }

            form {
                id: "memory-form",
                class: "form upload-form",
                label {
                    "Título"
                    input { name: "title", r#type: "text", required: true }
                }
                label {
                    "Descrição"
                    textarea { name: "description", rows: "3" }
                }
                label {
                    "Tipo"
                    select {
                        name: "type",
                        for (value, label) in MemoryType::ALL.map(|t| (t.as_str(), t.label())) {
                            option { value: "{value}", "{label}" }
                        }
                    }
                }
                label {
                    "Idade"
                    select {
                        name: "ageCategory",
                        "data-default": "{default_age}",
                        for (value, label) in AgeCategory::ALL.map(|c| (c.as_str(), c.label())) {
                            option { value: "{value}", "{label}" }
                        }
                    }
                }
                label {
                    "Fotos (até 5)"
                    input { name: "images", r#type: "file", accept: "image/jpeg,image/png,image/webp", multiple: true }
                }
                div { class: "form-status" }
                div { class: "form-error" }
                button { class: "btn", r#type: "submit", "Salvar memória" }
            }

            form {
                id: "travel-form",
                class: "form upload-form",
                hidden: true,
                label {
                    "Título"
                    input { name: "title", r#type: "text", required: true }
                }
                label {
                    "Descrição"
                    textarea { name: "description", rows: "3" }
                }
                label {
                    "Lugar"
                    input { name: "place", r#type: "text", placeholder: "Cidade, país", required: true }
                }
                label {
                    "Data da viagem"
                    input { name: "dateVisited", r#type: "date", value: "{today}" }
                }
                label {
                    "Fotos (até 5)"
                    input { name: "images", r#type: "file", accept: "image/jpeg,image/png,image/webp", multiple: true }
                }
                div { class: "form-status" }
                div { class: "form-error" }
                button { class: "btn", r#type: "submit", "Salvar viagem" }
            }
        }
        Footer {}
    }
}
