use dioxus::prelude::*;

/// Top-level sections reachable from the navbar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavPage {
    Home,
    Memories,
    Travels,
    Upload,
}

const LINKS: [(NavPage, &str, &str); 3] = [
    (NavPage::Memories, "/memorias", "Álbum de Memórias"),
    (NavPage::Travels, "/viagens", "Álbum de Viagens"),
    (NavPage::Upload, "/upload", "Upload"),
];

#[component]
pub fn Navbar(current: NavPage) -> Element {
    rsx! {
        nav {
            class: "navbar",
            div {
                class: "navbar-inner",
                a { class: "navbar-brand", href: "/", "Memórias da Família" }
                div {
                    class: "navbar-links",
                    for (page, href, label) in LINKS {
                        a {
                            class: if page == current { "active" } else { "" },
                            href: "{href}",
                            "{label}"
                        }
                    }
                }
                button { id: "logout-button", class: "btn", r#type: "button", "Sair" }
            }
        }
    }
}
