use dioxus::prelude::*;

#[component]
pub fn Footer() -> Element {
    rsx! {
        footer {
            class: "footer",
            "Feito com carinho para guardar as memórias da família."
        }
    }
}
