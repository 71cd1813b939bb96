use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::extraction::ExtractionError;

const BYTES_PER_KB: u64 = 1024;
const BYTES_PER_MB: u64 = 1024 * 1024;

/// Upload limit for messages, rounded up: "10MB", or "489KB" below 1 MiB.
fn display_limit(bytes: &u64) -> String {
    if *bytes >= BYTES_PER_MB {
        format!("{}MB", bytes.div_ceil(BYTES_PER_MB))
    } else {
        format!("{}KB", bytes.div_ceil(BYTES_PER_KB))
    }
}

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Upload-stage variants map to 400 with `{"error": <message>}`; extraction and
/// internal failures map to 500 with `{"error", "message"}`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("No file uploaded")]
    MissingFile,

    #[error("Only PDF files are allowed")]
    InvalidFileType,

    #[error("File too large. Maximum size is {}.", display_limit(.limit_bytes))]
    FileTooLarge { limit_bytes: u64 },

    #[error("Malformed upload: {0}")]
    Multipart(String),

    #[error("Extraction failed: {0}")]
    Extraction(#[from] ExtractionError),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// Stable short label for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            AppError::MissingFile => "missing",
            AppError::InvalidFileType => "wrong-type",
            AppError::FileTooLarge { .. } => "too-large",
            AppError::Multipart(_) => "malformed",
            AppError::Extraction(_) => "extraction",
            AppError::Internal(_) => "internal",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::MissingFile
            | AppError::InvalidFileType
            | AppError::FileTooLarge { .. }
            | AppError::Multipart(_) => StatusCode::BAD_REQUEST,
            AppError::Extraction(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        let body = match &self {
            AppError::Extraction(e) => {
                tracing::error!(kind = self.kind(), "Resume extraction failed: {e}");
                json!({
                    "error": "Failed to analyze resume",
                    "message": e.to_string(),
                })
            }
            AppError::Internal(e) => {
                tracing::error!(kind = self.kind(), "Internal error: {e:?}");
                json!({
                    "error": "Failed to analyze resume",
                    "message": e.to_string(),
                })
            }
            _ => {
                tracing::warn!(kind = self.kind(), "Upload rejected: {self}");
                json!({ "error": self.to_string() })
            }
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use serde_json::Value;

    async fn body_json(err: AppError) -> (StatusCode, Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_missing_file_is_400() {
        let (status, body) = body_json(AppError::MissingFile).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "error": "No file uploaded" }));
    }

    #[tokio::test]
    async fn test_file_too_large_message_uses_megabytes() {
        let (status, body) = body_json(AppError::FileTooLarge {
            limit_bytes: 10 * BYTES_PER_MB,
        })
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "File too large. Maximum size is 10MB.");
    }

    #[test]
    fn test_limit_below_one_megabyte_shown_in_kilobytes() {
        let err = AppError::FileTooLarge {
            limit_bytes: 500_000,
        };
        assert_eq!(err.to_string(), "File too large. Maximum size is 489KB.");
    }

    #[test]
    fn test_partial_megabyte_limit_rounds_up() {
        assert_eq!(display_limit(&(BYTES_PER_MB + 1)), "2MB");
        assert_eq!(display_limit(&1024), "1KB");
        assert_eq!(display_limit(&1), "1KB");
    }

    #[tokio::test]
    async fn test_extraction_failure_is_500_with_message() {
        let err = AppError::Extraction(ExtractionError::Parse("bad xref table".to_string()));
        let (status, body) = body_json(err).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "Failed to analyze resume");
        assert!(body["message"].as_str().unwrap().contains("bad xref table"));
    }

    #[test]
    fn test_kinds() {
        assert_eq!(AppError::InvalidFileType.kind(), "wrong-type");
        assert_eq!(AppError::FileTooLarge { limit_bytes: 1 }.kind(), "too-large");
        assert_eq!(AppError::MissingFile.kind(), "missing");
    }
}
