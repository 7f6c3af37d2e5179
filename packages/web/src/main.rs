use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context as _;
use api::db::{self, PgStore};
use api::geocode::NominatimGeocoder;
use api::media::{CloudinaryGateway, MediaGateway, UnconfiguredMedia};
use api::{routes, AppConfig, AppState};
use store::{MemoryStore, RecordStore};
use tokio::net::TcpListener;
use tokio::signal::ctrl_c;
#[cfg(unix)]
use tokio::signal::unix::{signal, SignalKind};
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};
use tracing_subscriber::{fmt, EnvFilter};

mod views;

#[tokio::main]
async fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("startup failed: {e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> anyhow::Result<()> {
    let config = AppConfig::load().context("invalid configuration")?;
    info!(environment = ?config.environment, "configuration loaded");

    let store = open_store(&config).await?;

    let media: Arc<dyn MediaGateway> = match &config.media {
        Some(cloudinary) => Arc::new(CloudinaryGateway::new(cloudinary.clone())),
        None => {
            warn!("Cloudinary credentials not set, uploads will fail");
            Arc::new(UnconfiguredMedia)
        }
    };
    let geocoder = Arc::new(NominatimGeocoder::new(config.geocoder.clone()));

    let address = config.bind_address.clone();
    let state = AppState::new(config, store, media, geocoder);
    let app = app(state);

    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("could not bind {address}"))?;
    info!("Server running on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("Server shut down");
    Ok(())
}

/// PostgreSQL when `DATABASE_URL` is set; in development an in-memory store otherwise.
async fn open_store(config: &AppConfig) -> anyhow::Result<Arc<dyn RecordStore>> {
    match &config.database_url {
        Some(url) => {
            let pool = db::connect(url)
                .await
                .context("could not connect to the database")?;
            info!("connected to PostgreSQL");
            Ok(Arc::new(PgStore::new(pool)))
        }
        None if !config.environment.is_production() => {
            warn!("DATABASE_URL not set, using in-memory store; records are lost on restart");
            Ok(Arc::new(MemoryStore::new()))
        }
        None => anyhow::bail!("DATABASE_URL must be set in production"),
    }
}

/// Pages and API behind the session guard, with request tracing.
fn app(state: AppState) -> axum::Router {
    let routes = routes::router().merge(views::router());
    routes::with_guard(routes, state).layer(TraceLayer::new_for_http())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {e}");
            std::future::pending::<()>().await;
        }
        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                error!("Failed to install signal handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

#[cfg(test)]
mod tests {
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use tower::ServiceExt;

    use super::*;

    fn test_app() -> (axum::Router, AppState) {
        let config = AppConfig::defaults()
            .unwrap()
            .set_override("admin_username", "familia")
            .unwrap()
            .set_override("admin_password", "s3nha")
            .unwrap()
            .set_override("session_secret", "web-test-secret")
            .unwrap()
            .build()
            .unwrap();
        let config = AppConfig::from_config(config).unwrap();
        let geocoder = Arc::new(NominatimGeocoder::new(config.geocoder.clone()));
        let state = AppState::new(
            config,
            Arc::new(MemoryStore::new()),
            Arc::new(UnconfiguredMedia),
            geocoder,
        );
        (app(state.clone()), state)
    }

    fn get(uri: &str, cookie: Option<&str>) -> Request<Body> {
        let mut builder = Request::builder().uri(uri);
        if let Some(cookie) = cookie {
            builder = builder.header(header::COOKIE, cookie);
        }
        builder.body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_pages_redirect_without_session() {
        let (app, _) = test_app();
        for uri in ["/", "/memorias", "/viagens", "/upload"] {
            let response = app.clone().oneshot(get(uri, None)).await.unwrap();
            assert_eq!(response.status(), StatusCode::SEE_OTHER, "{uri}");
            assert_eq!(response.headers()[header::LOCATION], "/login");
        }
    }

    #[tokio::test]
    async fn test_public_pages() {
        let (app, _) = test_app();
        let response = app.clone().oneshot(get("/login", None)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = app.oneshot(get("/assets/app.js", None)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers()[header::CONTENT_TYPE]
            .to_str()
            .unwrap()
            .starts_with("application/javascript"));
    }

    #[tokio::test]
    async fn test_pages_render_with_session() {
        let (app, state) = test_app();
        let token = state.codec.issue(api::auth::ADMIN_SUBJECT).unwrap();
        let cookie = format!("auth-token={token}");

        for uri in ["/", "/memorias?type=schoolwork&ageCategory=2anos", "/viagens", "/upload"] {
            let response = app.clone().oneshot(get(uri, Some(&cookie))).await.unwrap();
            assert_eq!(response.status(), StatusCode::OK, "{uri}");
            let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
            assert!(String::from_utf8_lossy(&body).starts_with("<!DOCTYPE html>"));
        }

        let response = app.oneshot(get("/login", Some(&cookie))).await.unwrap();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[header::LOCATION], "/");
    }

    #[tokio::test]
    async fn test_home_shows_record_counts() {
        let (app, state) = test_app();
        for title in ["Praia", "Aniversário"] {
            state
                .store
                .insert_memory(store::NewMemory {
                    title: title.to_string(),
                    description: String::new(),
                    images: vec!["https://media.test/a.jpg".into()],
                    age_category: store::AgeCategory::Year1,
                    r#type: store::MemoryType::Memory,
                    created_at: chrono::Utc::now(),
                })
                .await
                .unwrap();
        }
        let token = state.codec.issue(api::auth::ADMIN_SUBJECT).unwrap();
        let cookie = format!("auth-token={token}");

        let response = app.oneshot(get("/", Some(&cookie))).await.unwrap();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let html = String::from_utf8_lossy(&body);
        assert!(html.contains("2 memórias"));
        assert!(html.contains("0 viagens"));
    }
}
