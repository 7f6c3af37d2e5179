//! # Application configuration
//!
//! [`AppConfig`] is built once at startup and shared read-only afterwards. Sources
//! are layered with the `config` crate: built-in defaults, then an optional
//! `config.toml`, then the process environment (after `.env` is loaded through
//! `dotenvy`). Every key is the lowercase form of its environment variable, so
//! `ADMIN_USERNAME` and `admin_username = "..."` in `config.toml` are the same key.
//!
//! | Key | Required | Default |
//! |-----|----------|---------|
//! | `ADMIN_USERNAME`, `ADMIN_PASSWORD` | yes | — |
//! | `SESSION_SECRET` | yes | — |
//! | `DATABASE_URL` | no (in-memory store in development) | — |
//! | `CLOUDINARY_CLOUD_NAME`, `CLOUDINARY_API_KEY`, `CLOUDINARY_API_SECRET` | all or none | — |
//! | `MEDIA_ROOT_FOLDER` | no | `family-memories` |
//! | `GEOCODER_URL` | no | `https://nominatim.openstreetmap.org` |
//! | `GEOCODER_USER_AGENT` | no | `Family-Memories-App/1.0` |
//! | `APP_ENV` | no | `development` |
//! | `BIND_ADDRESS` | no | `0.0.0.0:8080` |
//!
//! A missing or blank session secret is a startup error; there is no fallback key.

use std::fmt;

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File, FileFormat};
use serde::Deserialize;

/// Runtime environment flag. Production turns on the `Secure` cookie attribute.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RuntimeEnv {
    #[default]
    Development,
    Production,
}

impl RuntimeEnv {
    pub fn is_production(self) -> bool {
        self == RuntimeEnv::Production
    }
}

/// The single shared admin credential pair.
#[derive(Clone)]
pub struct AdminCredentials {
    pub username: String,
    pub password: String,
}

impl AdminCredentials {
    /// Byte-for-byte comparison of both fields.
    pub fn matches(&self, username: &str, password: &str) -> bool {
        let user_ok = self.username.as_bytes() == username.as_bytes();
        let pass_ok = self.password.as_bytes() == password.as_bytes();
        user_ok & pass_ok
    }
}

impl fmt::Debug for AdminCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdminCredentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Cloudinary account used as the media host.
#[derive(Clone)]
pub struct CloudinaryConfig {
    pub cloud_name: String,
    pub api_key: String,
    pub api_secret: String,
    /// Every upload lands under `<root_folder>/<folder label>`.
    pub root_folder: String,
}

impl fmt::Debug for CloudinaryConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CloudinaryConfig")
            .field("cloud_name", &self.cloud_name)
            .field("api_key", &self.api_key)
            .field("api_secret", &"<redacted>")
            .field("root_folder", &self.root_folder)
            .finish()
    }
}

/// Nominatim-compatible geocoding service.
#[derive(Debug, Clone)]
pub struct GeocoderConfig {
    pub base_url: String,
    pub user_agent: String,
    pub limit: usize,
}

/// Immutable process-wide configuration.
#[derive(Clone)]
pub struct AppConfig {
    pub admin: AdminCredentials,
    pub session_secret: String,
    pub database_url: Option<String>,
    pub media: Option<CloudinaryConfig>,
    pub geocoder: GeocoderConfig,
    pub environment: RuntimeEnv,
    pub bind_address: String,
}

impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field("admin", &self.admin)
            .field("session_secret", &"<redacted>")
            .field("database_url", &self.database_url.as_ref().map(|_| "<set>"))
            .field("media", &self.media)
            .field("geocoder", &self.geocoder)
            .field("environment", &self.environment)
            .field("bind_address", &self.bind_address)
            .finish()
    }
}

/// Flat view of the sources, one field per key.
#[derive(Debug, Deserialize)]
struct Settings {
    admin_username: Option<String>,
    admin_password: Option<String>,
    session_secret: Option<String>,
    database_url: Option<String>,
    cloudinary_cloud_name: Option<String>,
    cloudinary_api_key: Option<String>,
    cloudinary_api_secret: Option<String>,
    media_root_folder: String,
    geocoder_url: String,
    geocoder_user_agent: String,
    app_env: String,
    bind_address: String,
}

impl AppConfig {
    /// Builder pre-loaded with the defaults for every optional key.
    pub fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder()
            .set_default("media_root_folder", "family-memories")?
            .set_default("geocoder_url", "https://nominatim.openstreetmap.org")?
            .set_default("geocoder_user_agent", "Family-Memories-App/1.0")?
            .set_default("app_env", "development")?
            .set_default("bind_address", "0.0.0.0:8080")
    }

    /// Load from defaults, `config.toml` and the environment.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = Self::defaults()?
            .add_source(
                File::with_name("config.toml")
                    .format(FileFormat::Toml)
                    .required(false),
            )
            .add_source(Environment::default())
            .build()?;

        Self::from_config(config)
    }

    /// Validate an already-built configuration.
    pub fn from_config(config: Config) -> Result<Self, ConfigError> {
        let settings: Settings = config.try_deserialize()?;

        let admin = AdminCredentials {
            username: required(settings.admin_username, "ADMIN_USERNAME")?,
            password: required(settings.admin_password, "ADMIN_PASSWORD")?,
        };
        let session_secret = required(settings.session_secret, "SESSION_SECRET")?;

        let media = match (
            non_blank(settings.cloudinary_cloud_name),
            non_blank(settings.cloudinary_api_key),
            non_blank(settings.cloudinary_api_secret),
        ) {
            (Some(cloud_name), Some(api_key), Some(api_secret)) => Some(CloudinaryConfig {
                cloud_name,
                api_key,
                api_secret,
                root_folder: settings.media_root_folder.trim_matches('/').to_string(),
            }),
            (None, None, None) => None,
            _ => {
                return Err(ConfigError::Message(
                    "CLOUDINARY_CLOUD_NAME, CLOUDINARY_API_KEY and CLOUDINARY_API_SECRET must be set together".into(),
                ))
            }
        };

        let environment = match settings.app_env.trim().to_lowercase().as_str() {
            "" | "development" | "dev" => RuntimeEnv::Development,
            "production" | "prod" => RuntimeEnv::Production,
            other => {
                return Err(ConfigError::Message(format!(
                    "APP_ENV must be `development` or `production`, got `{other}`"
                )))
            }
        };

        Ok(Self {
            admin,
            session_secret,
            database_url: non_blank(settings.database_url),
            media,
            geocoder: GeocoderConfig {
                base_url: settings.geocoder_url.trim_end_matches('/').to_string(),
                user_agent: settings.geocoder_user_agent,
                limit: 5,
            },
            environment,
            bind_address: settings.bind_address,
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn required(value: Option<String>, key: &str) -> Result<String, ConfigError> {
    non_blank(value).ok_or_else(|| ConfigError::NotFound(key.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> ConfigBuilder<DefaultState> {
        AppConfig::defaults()
            .unwrap()
            .set_override("admin_username", "familia")
            .unwrap()
            .set_override("admin_password", "s3nha")
            .unwrap()
            .set_override("session_secret", "a-long-random-secret")
            .unwrap()
    }

    #[test]
    fn test_defaults_applied() {
        let config = AppConfig::from_config(base().build().unwrap()).unwrap();
        assert_eq!(config.admin.username, "familia");
        assert_eq!(config.environment, RuntimeEnv::Development);
        assert_eq!(config.bind_address, "0.0.0.0:8080");
        assert_eq!(config.geocoder.base_url, "https://nominatim.openstreetmap.org");
        assert_eq!(config.geocoder.limit, 5);
        assert!(config.media.is_none());
        assert!(config.database_url.is_none());
    }

    #[test]
    fn test_missing_secret_fails() {
        let config = AppConfig::defaults()
            .unwrap()
            .set_override("admin_username", "familia")
            .unwrap()
            .set_override("admin_password", "s3nha")
            .unwrap()
            .build()
            .unwrap();
        let err = AppConfig::from_config(config).unwrap_err();
        assert!(err.to_string().contains("SESSION_SECRET"));
    }

    #[test]
    fn test_blank_secret_fails() {
        let config = base().set_override("session_secret", "   ").unwrap().build().unwrap();
        assert!(AppConfig::from_config(config).is_err());
    }

    #[test]
    fn test_partial_cloudinary_fails() {
        let config = base()
            .set_override("cloudinary_cloud_name", "demo")
            .unwrap()
            .build()
            .unwrap();
        assert!(AppConfig::from_config(config).is_err());
    }

    #[test]
    fn test_full_cloudinary_and_production() {
        let config = base()
            .set_override("cloudinary_cloud_name", "demo")
            .unwrap()
            .set_override("cloudinary_api_key", "123")
            .unwrap()
            .set_override("cloudinary_api_secret", "shh")
            .unwrap()
            .set_override("media_root_folder", "/noah-memories/")
            .unwrap()
            .set_override("app_env", "production")
            .unwrap()
            .build()
            .unwrap();
        let config = AppConfig::from_config(config).unwrap();
        let media = config.media.unwrap();
        assert_eq!(media.cloud_name, "demo");
        assert_eq!(media.root_folder, "noah-memories");
        assert!(config.environment.is_production());
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let config = AppConfig::from_config(base().build().unwrap()).unwrap();
        let printed = format!("{config:?}");
        assert!(!printed.contains("s3nha"));
        assert!(!printed.contains("a-long-random-secret"));
    }

    #[test]
    fn test_credentials_match_exactly() {
        let admin = AdminCredentials {
            username: "familia".into(),
            password: "s3nha".into(),
        };
        assert!(admin.matches("familia", "s3nha"));
        assert!(!admin.matches("Familia", "s3nha"));
        assert!(!admin.matches("familia", "s3nha "));
        assert!(!admin.matches("", ""));
    }
}
