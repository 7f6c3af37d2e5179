//! # API crate — JSON endpoints and server-side plumbing for Family Memories
//!
//! Everything the server binary needs below the page layer lives here: the
//! configuration loader, the admin session (token, cookie, guard), the HTTP
//! handlers, and the clients for the database, the media host and the geocoder.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`auth`] | HS256 session tokens, the `auth-token` cookie, the [`auth::AdminSession`] extractor and the route guard |
//! | [`config`] | [`AppConfig`] layered from defaults, `config.toml` and the environment |
//! | [`db`] | PostgreSQL pool, embedded migrations and the [`db::PgStore`] record store |
//! | [`error`] | [`ApiError`] and its mapping to HTTP status codes and JSON bodies |
//! | [`geocode`] | [`geocode::Geocoder`] seam and the Nominatim client |
//! | [`media`] | Upload validation, [`media::MediaGateway`] seam and the Cloudinary client |
//! | [`routes`] | The `/api/*` router |
//! | [`state`] | [`AppState`], cloned into every handler |
//!
//! Handlers never read the environment; everything they need arrives through
//! [`AppState`]. The store and both gateways are trait objects so tests can swap
//! in in-memory and counting fakes.

pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod geocode;
pub mod media;
pub mod routes;
pub mod state;

pub use config::AppConfig;
pub use error::ApiError;
pub use state::AppState;
