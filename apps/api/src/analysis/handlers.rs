//! Axum route handlers for the analysis API.

use anyhow::Context;
use axum::{
    extract::{multipart::MultipartRejection, Multipart, State},
    Json,
};
use bytes::Bytes;
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::analysis::report::AnalysisReport;
use crate::analysis::sample::sample_report;
use crate::errors::AppError;
use crate::state::AppState;
use crate::upload::{receive_resume, UploadedResume};

// ────────────────────────────────────────────────────────────────────────────
// Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadMetadata {
    pub filename: String,
    pub file_size: u64,
    /// Extracted text length in characters.
    pub text_length: usize,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub success: bool,
    pub analysis: AnalysisReport,
    pub metadata: UploadMetadata,
}

#[derive(Debug, Serialize)]
pub struct SampleResponse {
    pub success: bool,
    pub analysis: AnalysisReport,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/analyze
///
/// Multipart upload with a `resume` PDF field. The staged file is removed
/// before the response is built, whether analysis succeeded or not.
/// A request that is not multipart at all carries no file.
pub async fn handle_analyze(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let request_id = Uuid::new_v4();
    let multipart = multipart.map_err(|rejection| {
        warn!(%request_id, "Not a multipart upload: {}", rejection.body_text());
        AppError::MissingFile
    })?;
    let upload = receive_resume(multipart, &state.upload_settings()).await?;

    let outcome = extract_and_analyze(&state, &upload).await;
    let filename = upload.filename.clone();
    let file_size = upload.size;
    upload.cleanup();

    let (analysis, text_length) = outcome?;
    info!(
        %request_id,
        filename = %filename,
        rating = analysis.overall_rating,
        text_length,
        "Resume analyzed"
    );

    Ok(Json(AnalyzeResponse {
        success: true,
        analysis,
        metadata: UploadMetadata {
            filename,
            file_size,
            text_length,
        },
    }))
}

/// GET /api/sample
///
/// Fixed demonstration report; never touches the analyzer.
pub async fn handle_sample() -> Json<SampleResponse> {
    Json(SampleResponse {
        success: true,
        analysis: sample_report(),
    })
}

async fn extract_and_analyze(
    state: &AppState,
    upload: &UploadedResume,
) -> Result<(AnalysisReport, usize), AppError> {
    let pdf = tokio::fs::read(upload.path())
        .await
        .context("Failed to read staged upload")?;
    let text = state.extractor.extract(Bytes::from(pdf)).await?;

    let report = state.analyzer.analyze(&text);
    Ok((report, text.chars().count()))
}
