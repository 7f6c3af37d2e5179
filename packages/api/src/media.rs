//! # Media upload gateway
//!
//! Images are not stored by this service. After [`validate_upload`] accepts a file,
//! a [`MediaGateway`] forwards the bytes to the media host and returns the hosted
//! URL that ends up in a memory or travel record.
//!
//! [`CloudinaryGateway`] talks to Cloudinary's signed upload API. Every upload is
//! placed under `<root folder>/<folder label>` and carries the limit transformation
//! (at most 1200×1200, automatic quality and format).

use async_trait::async_trait;
use axum::body::Bytes;
use reqwest::multipart::{Form, Part};
use serde::Deserialize;
use thiserror::Error;

use crate::config::CloudinaryConfig;

/// Largest accepted image, in bytes.
pub const MAX_IMAGE_BYTES: usize = 10 * 1024 * 1024;

/// Body limit for the upload route. Larger than [`MAX_IMAGE_BYTES`] so oversize
/// files still reach the validator and get the size message.
pub const UPLOAD_BODY_LIMIT: usize = 25 * 1024 * 1024;

pub const ALLOWED_CONTENT_TYPES: [&str; 4] = ["image/jpeg", "image/jpg", "image/png", "image/webp"];

pub const DEFAULT_FOLDER: &str = "general";

const UPLOAD_TRANSFORMATION: &str = "c_limit,h_1200,w_1200/q_auto/f_auto";

/// Why an upload was refused before reaching the media host.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UploadRejection {
    #[error("Nenhum arquivo enviado")]
    NoFile,

    #[error("Tipo de arquivo não permitido. Use: JPG, PNG ou WebP")]
    UnsupportedType,

    #[error("Arquivo muito grande. Máximo 10MB")]
    TooLarge,

    #[error("Nome de pasta inválido. Use apenas letras, números, - ou _")]
    InvalidFolder,
}

/// Failure talking to the media host.
#[derive(Debug, Error)]
pub enum MediaError {
    #[error("media host is not configured")]
    NotConfigured,

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("upload rejected with status {status}: {body}")]
    Rejected { status: u16, body: String },

    #[error("response did not include a secure_url")]
    MissingUrl,
}

/// A validated image ready to be forwarded.
#[derive(Debug, Clone)]
pub struct ImageUpload {
    pub bytes: Bytes,
    pub content_type: String,
    pub file_name: String,
    /// Folder label, already checked by [`validate_upload`].
    pub folder: String,
}

/// Check content type, size and folder label. Returns the folder to use.
pub fn validate_upload(content_type: &str, size: usize, folder: Option<&str>) -> Result<String, UploadRejection> {
    if !ALLOWED_CONTENT_TYPES.contains(&content_type) {
        return Err(UploadRejection::UnsupportedType);
    }
    if size > MAX_IMAGE_BYTES {
        return Err(UploadRejection::TooLarge);
    }

    let folder = folder.map(str::trim).filter(|f| !f.is_empty()).unwrap_or(DEFAULT_FOLDER);
    let valid = folder
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if !valid {
        return Err(UploadRejection::InvalidFolder);
    }

    Ok(folder.to_string())
}

/// Somewhere images can be hosted.
#[async_trait]
pub trait MediaGateway: Send + Sync {
    /// Upload the image and return its public URL.
    async fn upload(&self, image: ImageUpload) -> Result<String, MediaError>;
}

/// Gateway used when no media host credentials are configured.
#[derive(Debug, Default)]
pub struct UnconfiguredMedia;

#[async_trait]
impl MediaGateway for UnconfiguredMedia {
    async fn upload(&self, _image: ImageUpload) -> Result<String, MediaError> {
        Err(MediaError::NotConfigured)
    }
}

#[derive(Deserialize)]
struct CloudinaryResponse {
    secure_url: Option<String>,
}

/// Signed uploads to Cloudinary.
pub struct CloudinaryGateway {
    client: reqwest::Client,
    config: CloudinaryConfig,
}

impl CloudinaryGateway {
    pub fn new(config: CloudinaryConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    fn endpoint(&self) -> String {
        format!(
            "https://api.cloudinary.com/v1_1/{}/image/upload",
            self.config.cloud_name
        )
    }

    fn target_folder(&self, label: &str) -> String {
        if self.config.root_folder.is_empty() {
            label.to_string()
        } else {
            format!("{}/{}", self.config.root_folder, label)
        }
    }
}

#[async_trait]
impl MediaGateway for CloudinaryGateway {
    async fn upload(&self, image: ImageUpload) -> Result<String, MediaError> {
        let folder = self.target_folder(&image.folder);
        let timestamp = chrono::Utc::now().timestamp().to_string();
        let signature = sign(
            &[
                ("folder", folder.as_str()),
                ("timestamp", timestamp.as_str()),
                ("transformation", UPLOAD_TRANSFORMATION),
            ],
            &self.config.api_secret,
        );

        let size = image.bytes.len();
        let file = Part::stream_with_length(image.bytes, size as u64)
            .file_name(image.file_name)
            .mime_str(&image.content_type)?;
        let form = Form::new()
            .part("file", file)
            .text("api_key", self.config.api_key.clone())
            .text("timestamp", timestamp)
            .text("folder", folder.clone())
            .text("transformation", UPLOAD_TRANSFORMATION)
            .text("signature", signature);

        tracing::debug!(%folder, size, "uploading image to cloudinary");
        let response = self.client.post(self.endpoint()).multipart(form).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(MediaError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        let body: CloudinaryResponse = response.json().await?;
        let url = body.secure_url.ok_or(MediaError::MissingUrl)?;
        tracing::info!(%folder, size, "image uploaded");
        Ok(url)
    }
}

/// Cloudinary request signature: SHA-1 hex of the parameters sorted by name,
/// joined as `k=v&k=v`, followed by the API secret.
fn sign(params: &[(&str, &str)], api_secret: &str) -> String {
    let mut params = params.to_vec();
    params.sort_by(|a, b| a.0.cmp(b.0));

    let mut payload = params
        .iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>()
        .join("&");
    payload.push_str(api_secret);

    sha1_smol::Sha1::from(payload).digest().to_string()
}
