//! HTML shell, the single embedded stylesheet and the browser script.

use dioxus::prelude::*;

/// Stylesheet inlined into every page.
pub const APP_CSS: &str = r#"
*, *::before, *::after { box-sizing: border-box; }
body {
    margin: 0;
    font-family: -apple-system, BlinkMacSystemFont, Segoe UI, Helvetica, Arial, sans-serif;
    color: #1f2937;
    background: #f9fafb;
    min-height: 100vh;
    display: flex;
    flex-direction: column;
}
a { color: inherit; text-decoration: none; }
main { flex: 1; width: 100%; max-width: 1200px; margin: 0 auto; padding: 2rem 1rem; }
h1 { font-size: 1.75rem; margin: 0 0 0.5rem; }

.navbar { background: #ffffff; border-bottom: 1px solid #e5e7eb; position: sticky; top: 0; z-index: 50; }
.navbar-inner { max-width: 1200px; margin: 0 auto; padding: 0 1rem; height: 4rem; display: flex; align-items: center; justify-content: space-between; }
.navbar-brand { font-size: 1.4rem; font-weight: 700; }
.navbar-links { display: flex; gap: 1.5rem; }
.navbar-links a { color: #374151; font-weight: 500; }
.navbar-links a.active { color: #0f172a; border-bottom: 2px solid #0f172a; }

.btn { background: #1e293b; color: #ffffff; border: none; border-radius: 0.5rem; padding: 0.55rem 1.1rem; font-size: 0.95rem; cursor: pointer; }
.btn:hover { background: #0f172a; }
.btn:disabled { background: #94a3b8; cursor: not-allowed; }

.footer { text-align: center; color: #6b7280; font-size: 0.85rem; padding: 1.5rem 1rem; border-top: 1px solid #e5e7eb; background: #ffffff; }

.login-container { min-height: 100vh; display: flex; align-items: center; justify-content: center; padding: 2rem; }
.login-card { background: #ffffff; border-radius: 1rem; box-shadow: 0 10px 30px rgba(15, 23, 42, 0.08); padding: 2rem; width: 100%; max-width: 360px; }

.form { display: flex; flex-direction: column; gap: 0.9rem; }
.form label { display: flex; flex-direction: column; gap: 0.3rem; font-size: 0.9rem; font-weight: 500; }
.form input, .form select, .form textarea { border: 1px solid #d1d5db; border-radius: 0.5rem; padding: 0.55rem 0.7rem; font-size: 0.95rem; font-family: inherit; }
.form-error { color: #b91c1c; font-size: 0.9rem; min-height: 1.2rem; }
.form-status { color: #047857; font-size: 0.9rem; min-height: 1.2rem; }

.albums { display: grid; grid-template-columns: repeat(auto-fit, minmax(260px, 1fr)); gap: 1.5rem; margin-top: 2rem; }
.album-card { background: #ffffff; border-radius: 1rem; padding: 2rem; box-shadow: 0 4px 14px rgba(15, 23, 42, 0.06); }
.album-card h2 { margin: 0 0 0.5rem; }
.album-count { color: #6b7280; }

.layout { display: grid; grid-template-columns: 220px 1fr; gap: 2rem; }
.sidebar { background: #ffffff; border-radius: 1rem; padding: 1rem; height: fit-content; }
.sidebar h3 { font-size: 0.8rem; text-transform: uppercase; color: #6b7280; margin: 1rem 0 0.5rem; }
.sidebar a { display: block; padding: 0.35rem 0.6rem; border-radius: 0.4rem; color: #374151; }
.sidebar a.active { background: #1e293b; color: #ffffff; }

.grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(240px, 1fr)); gap: 1.25rem; }
.card { background: #ffffff; border-radius: 1rem; overflow: hidden; box-shadow: 0 4px 14px rgba(15, 23, 42, 0.06); }
.card-image { position: relative; height: 12rem; background: #f3f4f6; }
.card-image img { width: 100%; height: 100%; object-fit: cover; }
.card-extra { position: absolute; top: 0.5rem; right: 0.5rem; background: rgba(15, 23, 42, 0.75); color: #ffffff; border-radius: 999px; padding: 0.1rem 0.55rem; font-size: 0.8rem; }
.card-body { padding: 1rem; }
.card-body h3 { margin: 0 0 0.4rem; font-size: 1.05rem; }
.card-body p { margin: 0 0 0.6rem; color: #4b5563; font-size: 0.9rem; }
.badges { display: flex; gap: 0.4rem; flex-wrap: wrap; margin-bottom: 0.5rem; }
.badge { background: #e2e8f0; color: #1e293b; border-radius: 999px; padding: 0.1rem 0.6rem; font-size: 0.75rem; }
.badge-schoolwork { background: #dbeafe; color: #1e3a8a; }
.card-date { color: #6b7280; font-size: 0.8rem; }

.empty { text-align: center; color: #6b7280; padding: 3rem 1rem; }

#travel-map { height: 360px; border-radius: 1rem; background: #e5e7eb; margin-bottom: 2rem; }

.tabs { display: flex; gap: 0.5rem; margin-bottom: 1.5rem; }
.tab { background: #e2e8f0; color: #1e293b; border: none; border-radius: 0.5rem; padding: 0.5rem 1rem; cursor: pointer; }
.tab.active { background: #1e293b; color: #ffffff; }
.upload-form { background: #ffffff; border-radius: 1rem; padding: 1.5rem; max-width: 640px; }
.upload-form[hidden] { display: none; }

@media (max-width: 760px) {
    .layout { grid-template-columns: 1fr; }
    .navbar-links { gap: 0.8rem; font-size: 0.9rem; }
}
"#;

/// Browser script served at `/assets/app.js`.
pub const APP_JS: &str = include_str!("app.js");

/// Leaflet assets loaded only by pages that show the travel map.
const MAP_HEAD: &str = concat!(
    r#"<link rel="stylesheet" href="https://unpkg.com/leaflet@1.9.4/dist/leaflet.css">"#,
    r#"<script defer src="https://unpkg.com/leaflet@1.9.4/dist/leaflet.js"></script>"#,
);

/// Extra `<head>` content a page needs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Head {
    Plain,
    Map,
}

/// Render `body` inside the full HTML document.
pub fn render_document(title: &str, head: Head, body: Element) -> String {
    let body = dioxus_ssr::render_element(body);
    let extra = match head {
        Head::Plain => "",
        Head::Map => MAP_HEAD,
    };

    format!(
        "<!DOCTYPE html>\
<html lang=\"pt-BR\">\
<head>\
<meta charset=\"utf-8\">\
<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\
<title>{title} | Memórias da Família</title>\
<style>{APP_CSS}</style>\
{extra}\
<script defer src=\"/assets/app.js\"></script>\
</head>\
<body>{body}</body>\
</html>",
        title = escape(title),
    )
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_shell() {
        let html = render_document("Início", Head::Plain, rsx! { p { "olá" } });
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Início | Memórias da Família</title>"));
        assert!(html.contains("<p>olá</p>"));
        assert!(html.contains("/assets/app.js"));
        assert!(!html.contains("leaflet"));
    }

    #[test]
    fn test_map_head() {
        let html = render_document("Viagens", Head::Map, rsx! { div {} });
        assert!(html.contains("leaflet.js"));
    }

    #[test]
    fn test_title_escaped() {
        let html = render_document("<b>", Head::Plain, rsx! { div {} });
        assert!(html.contains("<title>&lt;b&gt; | "));
    }
}
