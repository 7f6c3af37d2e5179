use dioxus::prelude::*;

/// Login form. Submission is handled by `app.js`, which posts JSON to `/api/auth`.
#[component]
pub fn LoginPage() -> Element {
    rsx! {
        div {
            class: "login-container",
            div {
                class: "login-card",
                h1 { "Memórias da Família" }
                p { style: "color: #6b7280; margin: 0 0 1.5rem;", "Entre para ver e guardar as memórias." }
                form {
                    id: "login-form",
                    class: "form",
                    label {
                        "Usuário"
                        input { name: "username", r#type: "text", autocomplete: "username", required: true }
                    }
                    label {
                        "Senha"
                        input { name: "password", r#type: "password", autocomplete: "current-password", required: true }
                    }
                    div { id: "login-error", class: "form-error" }
                    button { class: "btn", r#type: "submit", "Entrar" }
                }
            }
        }
    }
}
