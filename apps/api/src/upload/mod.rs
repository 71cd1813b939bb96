//! Multipart intake for `POST /api/analyze`.
//!
//! The `resume` field is validated (PDF only, size-limited) and streamed into
//! a named temporary file. The returned [`UploadedResume`] owns that file:
//! dropping it deletes the file, so every request exit path cleans up.

use std::path::{Path, PathBuf};

use anyhow::Context;
use axum::extract::multipart::{Field, Multipart, MultipartError};
use axum::http::StatusCode;
use chrono::Utc;
use tempfile::NamedTempFile;
use tokio::io::AsyncWriteExt;
use tracing::{info, warn};

use crate::errors::AppError;

pub const RESUME_FIELD: &str = "resume";
pub const PDF_CONTENT_TYPE: &str = "application/pdf";

/// Where uploads are staged and how large they may be.
#[derive(Debug, Clone)]
pub struct UploadSettings {
    pub max_bytes: u64,
    /// `None` stages files in the OS temp dir.
    pub dir: Option<PathBuf>,
}

/// A validated upload staged on disk.
#[derive(Debug)]
pub struct UploadedResume {
    pub filename: String,
    pub size: u64,
    file: NamedTempFile,
}

impl UploadedResume {
    pub fn path(&self) -> &Path {
        self.file.path()
    }

    /// Deletes the staged file now rather than at drop, logging failures.
    pub fn cleanup(self) {
        let path = self.file.path().to_path_buf();
        if let Err(e) = self.file.close() {
            warn!("Failed to remove temporary upload {}: {e}", path.display());
        }
    }
}

/// Pulls the `resume` field out of the request and stages it on disk.
///
/// Rejections: no `resume` file part → `MissingFile`; content type other than
/// `application/pdf` → `InvalidFileType` (checked before any bytes are read);
/// more than `max_bytes` → `FileTooLarge`.
pub async fn receive_resume(
    mut multipart: Multipart,
    settings: &UploadSettings,
) -> Result<UploadedResume, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| multipart_error(e, settings))?
    {
        // A `resume` part without a filename is a plain form value, not a file.
        if field.name() != Some(RESUME_FIELD) || field.file_name().is_none() {
            continue;
        }

        if field.content_type() != Some(PDF_CONTENT_TYPE) {
            return Err(AppError::InvalidFileType);
        }

        let filename = field.file_name().unwrap_or_default().to_string();
        let (file, size) = stage_field(field, settings).await?;

        info!(filename = %filename, size, "Resume upload received");
        return Ok(UploadedResume {
            filename,
            size,
            file,
        });
    }

    Err(AppError::MissingFile)
}

async fn stage_field(
    mut field: Field<'_>,
    settings: &UploadSettings,
) -> Result<(NamedTempFile, u64), AppError> {
    let temp = create_temp_file(settings).context("Failed to create temporary upload file")?;
    let std_file = temp
        .reopen()
        .context("Failed to open temporary upload file")?;
    let mut writer = tokio::fs::File::from_std(std_file);

    let mut size: u64 = 0;
    while let Some(chunk) = field
        .chunk()
        .await
        .map_err(|e| multipart_error(e, settings))?
    {
        size += chunk.len() as u64;
        if size > settings.max_bytes {
            // `temp` drops here and removes the partial file.
            return Err(AppError::FileTooLarge {
                limit_bytes: settings.max_bytes,
            });
        }
        writer
            .write_all(&chunk)
            .await
            .context("Failed to write upload to disk")?;
    }
    writer
        .flush()
        .await
        .context("Failed to flush upload to disk")?;

    Ok((temp, size))
}

fn create_temp_file(settings: &UploadSettings) -> std::io::Result<NamedTempFile> {
    let prefix = format!("{}-", Utc::now().timestamp_millis());
    let mut builder = tempfile::Builder::new();
    builder.prefix(&prefix).suffix(".pdf");
    match &settings.dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)?;
            builder.tempfile_in(dir)
        }
        None => builder.tempfile(),
    }
}

fn multipart_error(err: MultipartError, settings: &UploadSettings) -> AppError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::FileTooLarge {
            limit_bytes: settings.max_bytes,
        }
    } else {
        AppError::Multipart(err.body_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings_in(dir: &Path) -> UploadSettings {
        UploadSettings {
            max_bytes: 1024,
            dir: Some(dir.join("uploads")),
        }
    }

    #[test]
    fn test_temp_file_created_in_configured_dir() {
        let root = tempfile::tempdir().unwrap();
        let settings = settings_in(root.path());
        let file = create_temp_file(&settings).unwrap();

        assert!(file.path().starts_with(root.path().join("uploads")));
        assert_eq!(file.path().extension().and_then(|e| e.to_str()), Some("pdf"));
    }

    #[test]
    fn test_cleanup_removes_file() {
        let root = tempfile::tempdir().unwrap();
        let upload = UploadedResume {
            filename: "cv.pdf".to_string(),
            size: 0,
            file: create_temp_file(&settings_in(root.path())).unwrap(),
        };
        let path = upload.path().to_path_buf();
        assert!(path.exists());

        upload.cleanup();
        assert!(!path.exists());
    }

    #[test]
    fn test_drop_removes_file() {
        let root = tempfile::tempdir().unwrap();
        let upload = UploadedResume {
            filename: "cv.pdf".to_string(),
            size: 0,
            file: create_temp_file(&settings_in(root.path())).unwrap(),
        };
        let path = upload.path().to_path_buf();

        drop(upload);
        assert!(!path.exists());
    }
}
