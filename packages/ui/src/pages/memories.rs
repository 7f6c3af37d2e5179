use dioxus::prelude::*;
use store::{AgeCategory, Memory, MemoryType};

use crate::components::{Footer, MemoryCard, NavPage, Navbar};

/// Memory album with the type/age filter sidebar.
#[component]
pub fn MemoriesPage(memories: Vec<Memory>, selected_type: MemoryType, selected_age: AgeCategory) -> Element {
    let heading = format!("{} · {}", selected_type.label(), selected_age.label());
    let age = selected_age.as_str();
    let kind = selected_type.as_str();

    rsx! {
        Navbar { current: NavPage::Memories }
        main {
            div {
                class: "layout",
                aside {
                    class: "sidebar",
                    h3 { "Tipo" }
                    for (option, label) in MemoryType::ALL.map(|t| (t, t.label())) {
                        a {
                            class: if option == selected_type { "active" } else { "" },
                            href: "/memorias?type={option}&ageCategory={age}",
                            "{label}"
                        }
                    }
                    h3 { "Idade" }
                    for (option, label) in AgeCategory::ALL.map(|c| (c, c.label())) {
                        a {
                            class: if option == selected_age { "active" } else { "" },
                            href: "/memorias?type={kind}&ageCategory={option}",
                            "{label}"
                        }
                    }
                }
                section {
                    h1 { "{heading}" }
                    if memories.is_empty() {
                        p { class: "empty", "Nenhuma memória encontrada para este filtro." }
                    } else {
                        div {
                            class: "grid",
                            for memory in memories.iter() {
                                MemoryCard { memory: memory.clone() }
                            }
                        }
                    }
                }
            }
        }
        Footer {}
    }
}
