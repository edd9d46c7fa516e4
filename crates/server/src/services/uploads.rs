//! Product image uploads.
//!
//! Validation is all-or-nothing: every file in a call is checked
//! before any file is written, so one oversized or non-image part
//! fails the whole batch with nothing persisted.

use std::path::Path;

use thiserror::Error;
use uuid::Uuid;

/// Maximum number of images accepted per upload call.
pub const MAX_FILES: usize = 5;

/// Maximum size of a single image (5 MiB).
pub const MAX_FILE_BYTES: usize = 5 * 1024 * 1024;

/// Accepted file extensions (lowercased before comparison).
const ALLOWED_EXTENSIONS: &[&str] = &["jpeg", "jpg", "png", "gif", "webp"];

/// Accepted declared content types.
const ALLOWED_CONTENT_TYPES: &[&str] = &[
    "image/jpeg",
    "image/jpg",
    "image/png",
    "image/gif",
    "image/webp",
];

/// Errors from image uploads. The messages are shown to the admin.
#[derive(Debug, Error)]
pub enum UploadError {
    #[error("No files uploaded")]
    NoFiles,
    #[error("At most {MAX_FILES} images per upload")]
    TooManyFiles,
    #[error("File too large: {0}")]
    TooLarge(String),
    #[error("Only image files are allowed")]
    NotAnImage(String),
    #[error("upload I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// One file received from the multipart form.
#[derive(Debug, Clone)]
pub struct ImageUpload {
    /// Original filename as sent by the browser. Used only to check the
    /// extension, never as the stored name.
    pub file_name: String,
    /// Declared content type.
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// Validate and store a batch of images, returning their public URLs.
///
/// Stored names are freshly generated (`product-<uuid>.<ext>`), so
/// nothing attacker-controlled reaches the filesystem and collisions
/// are not a practical concern.
///
/// # Errors
///
/// Returns `UploadError` if the batch is empty or oversized, if any
/// file fails validation, or if a file cannot be written. On a
/// validation error zero files are persisted.
pub async fn store_images(
    upload_dir: &Path,
    uploads: Vec<ImageUpload>,
) -> Result<Vec<String>, UploadError> {
    if uploads.is_empty() {
        return Err(UploadError::NoFiles);
    }
    if uploads.len() > MAX_FILES {
        return Err(UploadError::TooManyFiles);
    }

    let mut validated = Vec::with_capacity(uploads.len());
    for upload in uploads {
        let extension = validate_image(&upload)?;
        validated.push((upload, extension));
    }

    tokio::fs::create_dir_all(upload_dir).await?;

    let mut urls = Vec::with_capacity(validated.len());
    for (upload, extension) in validated {
        let stored_name = format!("product-{}.{extension}", Uuid::new_v4());
        tokio::fs::write(upload_dir.join(&stored_name), &upload.bytes).await?;
        urls.push(format!("/uploads/{stored_name}"));
    }

    tracing::info!(count = urls.len(), "stored uploaded images");
    Ok(urls)
}

/// Check one file's extension, content type, and size; returns the
/// lowercased extension to store it under.
fn validate_image(upload: &ImageUpload) -> Result<String, UploadError> {
    let extension = upload
        .file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .ok_or_else(|| UploadError::NotAnImage(upload.file_name.clone()))?;

    if !ALLOWED_EXTENSIONS.contains(&extension.as_str()) {
        return Err(UploadError::NotAnImage(upload.file_name.clone()));
    }
    if !ALLOWED_CONTENT_TYPES.contains(&upload.content_type.as_str()) {
        return Err(UploadError::NotAnImage(upload.file_name.clone()));
    }
    if upload.bytes.len() > MAX_FILE_BYTES {
        return Err(UploadError::TooLarge(upload.file_name.clone()));
    }
    Ok(extension)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn image(name: &str, content_type: &str, size: usize) -> ImageUpload {
        ImageUpload {
            file_name: name.to_string(),
            content_type: content_type.to_string(),
            bytes: vec![0; size],
        }
    }

    fn count_files(dir: &Path) -> usize {
        std::fs::read_dir(dir).map_or(0, Iterator::count)
    }

    #[tokio::test]
    async fn test_stores_valid_images_under_generated_names() {
        let dir = tempfile::tempdir().unwrap();
        let urls = store_images(
            dir.path(),
            vec![
                image("photo.JPG", "image/jpeg", 100),
                image("banner.webp", "image/webp", 100),
            ],
        )
        .await
        .unwrap();

        assert_eq!(urls.len(), 2);
        assert!(urls[0].starts_with("/uploads/product-"));
        assert!(urls[0].ends_with(".jpg"));
        assert!(urls[1].ends_with(".webp"));
        // Stored names are generated, not taken from the client.
        assert!(!urls.iter().any(|u| u.contains("photo") || u.contains("banner")));
        assert_eq!(count_files(dir.path()), 2);
    }

    #[tokio::test]
    async fn test_empty_batch_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let err = store_images(dir.path(), Vec::new()).await.unwrap_err();
        assert!(matches!(err, UploadError::NoFiles));
    }

    #[tokio::test]
    async fn test_sixth_file_fails_whole_batch() {
        let dir = tempfile::tempdir().unwrap();
        let uploads = (0..6)
            .map(|i| image(&format!("p{i}.png"), "image/png", 10))
            .collect();
        let err = store_images(dir.path(), uploads).await.unwrap_err();
        assert!(matches!(err, UploadError::TooManyFiles));
        assert_eq!(count_files(dir.path()), 0);
    }

    #[tokio::test]
    async fn test_one_bad_file_persists_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let uploads = vec![
            image("ok.png", "image/png", 10),
            image("evil.exe", "application/octet-stream", 10),
        ];
        let err = store_images(dir.path(), uploads).await.unwrap_err();
        assert!(matches!(err, UploadError::NotAnImage(_)));
        assert_eq!(count_files(dir.path()), 0);
    }

    #[tokio::test]
    async fn test_oversized_file_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let uploads = vec![image("big.png", "image/png", MAX_FILE_BYTES + 1)];
        let err = store_images(dir.path(), uploads).await.unwrap_err();
        assert!(matches!(err, UploadError::TooLarge(_)));
        assert_eq!(count_files(dir.path()), 0);
    }

    #[tokio::test]
    async fn test_unwritable_upload_dir_is_io_error() {
        // A plain file where the upload directory should be makes
        // create_dir_all fail.
        let dir = tempfile::tempdir().unwrap();
        let blocked = dir.path().join("uploads");
        tokio::fs::write(&blocked, b"not a directory").await.unwrap();

        let err = store_images(&blocked, vec![image("ok.png", "image/png", 10)])
            .await
            .unwrap_err();
        assert!(matches!(err, UploadError::Io(_)));
    }

    #[test]
    fn test_extension_and_content_type_must_both_match() {
        // Image extension with a non-image content type.
        let err = validate_image(&image("sneaky.png", "text/html", 10)).unwrap_err();
        assert!(matches!(err, UploadError::NotAnImage(_)));
        // No extension at all.
        let err = validate_image(&image("noext", "image/png", 10)).unwrap_err();
        assert!(matches!(err, UploadError::NotAnImage(_)));
    }
}
