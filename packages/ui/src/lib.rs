//! This crate contains all server-rendered UI for the workspace.
//!
//! Pages are Dioxus components rendered to strings with `dioxus-ssr`; the
//! `render_*` functions wrap them in the HTML shell so the server binary only
//! deals in `String`s. Interactivity lives in [`APP_JS`], served as `/assets/app.js`.

use dioxus::prelude::*;
use store::{AgeCategory, Memory, MemoryType, Travel};

pub mod components;
mod document;
mod format;
pub mod pages;

pub use document::{render_document, Head, APP_CSS, APP_JS};
pub use format::{format_date, input_date};
pub use pages::MapMarker;

use pages::{HomePage, LoginPage, MemoriesPage, TravelsPage, UploadPage};

pub fn render_login() -> String {
    render_document("Entrar", Head::Plain, rsx! { LoginPage {} })
}

pub fn render_home(memory_count: usize, travel_count: usize) -> String {
    render_document(
        "Início",
        Head::Plain,
        rsx! { HomePage { memory_count, travel_count } },
    )
}

pub fn render_memories(memories: Vec<Memory>, selected_type: MemoryType, selected_age: AgeCategory) -> String {
    render_document(
        "Álbum de Memórias",
        Head::Plain,
        rsx! { MemoriesPage { memories, selected_type, selected_age } },
    )
}

pub fn render_travels(travels: Vec<Travel>) -> String {
    render_document("Álbum de Viagens", Head::Map, rsx! { TravelsPage { travels } })
}

pub fn render_upload(today: String) -> String {
    render_document("Adicionar", Head::Plain, rsx! { UploadPage { today } })
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use uuid::Uuid;

    use super::*;

    fn memory(title: &str, images: usize) -> Memory {
        let created = Utc.with_ymd_and_hms(2024, 3, 5, 12, 0, 0).unwrap();
        Memory {
            id: Uuid::new_v4(),
            title: title.to_string(),
            description: "Um dia especial".into(),
            images: (0..images).map(|i| format!("https://media.test/{i}.jpg")).collect(),
            age_category: AgeCategory::Year1,
            r#type: MemoryType::Schoolwork,
            created_at: created,
            updated_at: created,
        }
    }

    #[test]
    fn test_login_page_has_form() {
        let html = render_login();
        assert!(html.contains("id=\"login-form\""));
        assert!(html.contains("name=\"password\""));
        assert!(!html.contains("logout-button"));
    }

    #[test]
    fn test_home_shows_counts() {
        let html = render_home(12, 3);
        assert!(html.contains("12 memórias"));
        assert!(html.contains("3 viagens"));
        assert!(html.contains("href=\"/memorias\""));
        assert!(html.contains("href=\"/viagens\""));
        assert!(html.contains("logout-button"));
    }

    #[test]
    fn test_memory_card_badges() {
        let html = render_memories(vec![memory("Desenho", 3)], MemoryType::Schoolwork, AgeCategory::Year1);
        assert!(html.contains("Desenho"));
        assert!(html.contains("+2"));
        assert!(html.contains("Trabalho Escolar"));
        assert!(html.contains("1 ano"));
        assert!(html.contains("5 de março de 2024"));
        assert!(html.contains("https://media.test/0.jpg"));
        assert!(!html.contains("https://media.test/1.jpg"));
    }

    #[test]
    fn test_single_image_has_no_extra_badge() {
        let html = render_memories(vec![memory("Passeio", 1)], MemoryType::Memory, AgeCategory::Year1);
        assert!(!html.contains("class=\"card-extra\""));
        assert!(!html.contains("+0"));
    }

    #[test]
    fn test_empty_memories() {
        let html = render_memories(Vec::new(), MemoryType::Memory, AgeCategory::Years2);
        assert!(html.contains("Nenhuma memória encontrada"));
        assert!(html.contains("Memória · 2 anos"));
    }

    #[test]
    fn test_travels_page_has_map_container() {
        let html = render_travels(Vec::new());
        assert!(html.contains("id=\"travel-map\""));
        assert!(html.contains("data-markers"));
        assert!(html.contains("leaflet"));
    }

    #[test]
    fn test_upload_page_has_both_forms() {
        let html = render_upload("2024-03-05".into());
        assert!(html.contains("id=\"memory-form\""));
        assert!(html.contains("id=\"travel-form\""));
        assert!(html.contains("value=\"2024-03-05\""));
        assert!(html.contains("value=\"0-12meses\""));
    }
}
