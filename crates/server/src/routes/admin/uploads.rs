//! Admin image upload route handler.

use axum::{Json, extract::Multipart, extract::State};
use serde::Serialize;

use crate::error::{AppError, Result};
use crate::middleware::RequireAdminAuth;
use crate::services::uploads::{self, ImageUpload};
use crate::state::AppState;

/// Upload response body.
#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub success: bool,
    pub urls: Vec<String>,
}

/// Accept up to five product images from a multipart form.
///
/// The whole batch succeeds or fails together; see
/// [`uploads::store_images`] for the validation rules.
pub async fn upload(
    RequireAdminAuth(_admin): RequireAdminAuth,
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>> {
    let mut files = Vec::new();
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(e.to_string()))?
    {
        if field.name() != Some("images") {
            continue;
        }
        let file_name = field.file_name().unwrap_or_default().to_string();
        let content_type = field.content_type().unwrap_or_default().to_string();
        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(e.to_string()))?;

        files.push(ImageUpload {
            file_name,
            content_type,
            bytes: bytes.to_vec(),
        });
    }

    let urls = uploads::store_images(&state.config().upload_dir, files).await?;
    Ok(Json(UploadResponse {
        success: true,
        urls,
    }))
}
