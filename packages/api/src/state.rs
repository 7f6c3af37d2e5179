use std::sync::Arc;

use store::RecordStore;

use crate::auth::SessionCodec;
use crate::config::AppConfig;
use crate::geocode::Geocoder;
use crate::media::MediaGateway;

/// Shared, read-only handles cloned into every handler.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub codec: Arc<SessionCodec>,
    pub store: Arc<dyn RecordStore>,
    pub media: Arc<dyn MediaGateway>,
    pub geocoder: Arc<dyn Geocoder>,
}

impl AppState {
    pub fn new(
        config: AppConfig,
        store: Arc<dyn RecordStore>,
        media: Arc<dyn MediaGateway>,
        geocoder: Arc<dyn Geocoder>,
    ) -> Self {
        let codec = SessionCodec::new(&config.session_secret);
        Self {
            config: Arc::new(config),
            codec: Arc::new(codec),
            store,
            media,
            geocoder,
        }
    }
}
