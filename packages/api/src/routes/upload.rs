use axum::body::Bytes;
use axum::extract::multipart::MultipartRejection;
use axum::extract::{Multipart, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::auth::AdminSession;
use crate::error::ApiError;
use crate::media::{validate_upload, ImageUpload, UploadRejection};
use crate::state::AppState;

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    pub success: bool,
    pub image_url: String,
    pub message: String,
}

struct FilePart {
    bytes: Bytes,
    content_type: String,
    file_name: String,
}

/// `POST /api/upload`, multipart fields `file` and optional `folder`.
pub async fn upload(
    _session: AdminSession,
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<UploadResponse>, ApiError> {
    let mut multipart = multipart.map_err(|e| ApiError::validation(e.body_text()))?;

    let mut file: Option<FilePart> = None;
    let mut folder: Option<String> = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::validation(e.body_text()))?
    {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "file" => {
                let content_type = field.content_type().unwrap_or_default().to_string();
                let file_name = field.file_name().unwrap_or("upload").to_string();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| ApiError::validation(e.body_text()))?;
                file = Some(FilePart {
                    bytes,
                    content_type,
                    file_name,
                });
            }
            "folder" => {
                folder = Some(
                    field
                        .text()
                        .await
                        .map_err(|e| ApiError::validation(e.body_text()))?,
                );
            }
            _ => {}
        }
    }

    let file = file
        .filter(|f| !f.bytes.is_empty())
        .ok_or_else(|| ApiError::validation(UploadRejection::NoFile.to_string()))?;
    let folder = validate_upload(&file.content_type, file.bytes.len(), folder.as_deref())
        .map_err(|rejection| {
            tracing::info!(%rejection, content_type = %file.content_type, size = file.bytes.len(), "upload rejected");
            ApiError::validation(rejection.to_string())
        })?;

    let image_url = state
        .media
        .upload(ImageUpload {
            bytes: file.bytes,
            content_type: file.content_type,
            file_name: file.file_name,
            folder,
        })
        .await?;

    Ok(Json(UploadResponse {
        success: true,
        image_url,
        message: "Upload realizado com sucesso!".to_string(),
    }))
}
