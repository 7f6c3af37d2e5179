use axum::response::Html;
use chrono::Utc;

use api::auth::AdminSession;

pub async fn upload(_session: AdminSession) -> Html<String> {
    Html(ui::render_upload(ui::input_date(Utc::now())))
}
