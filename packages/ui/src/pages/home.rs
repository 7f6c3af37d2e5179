use dioxus::prelude::*;

use crate::components::{Footer, NavPage, Navbar};

/// Entry point with the two albums and how many records each holds.
#[component]
pub fn HomePage(memory_count: usize, travel_count: usize) -> Element {
    rsx! {
        Navbar { current: NavPage::Home }
        main {
            h1 { "Bem-vindo!" }
            p { style: "color: #4b5563;", "Escolha um álbum para relembrar os melhores momentos." }
            div {
                class: "albums",
                a {
                    class: "album-card",
                    href: "/memorias",
                    h2 { "Álbum de Memórias" }
                    p { "Momentos especiais e trabalhos escolares, organizados por idade." }
                    span { class: "album-count", "{memory_count} memórias" }
                }
                a {
                    class: "album-card",
                    href: "/viagens",
                    h2 { "Álbum de Viagens" }
                    p { "Os lugares que visitamos juntos, no mapa." }
                    span { class: "album-count", "{travel_count} viagens" }
                }
            }
        }
        Footer {}
    }
}
