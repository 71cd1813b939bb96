use std::sync::Arc;

use crate::analysis::Analyzer;
use crate::config::Config;
use crate::extraction::TextExtractor;
use crate::upload::UploadSettings;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Read-only after startup; shared by every request.
    pub analyzer: Arc<Analyzer>,
    /// Pluggable PDF text extractor. Default: PdfTextExtractor.
    pub extractor: Arc<dyn TextExtractor>,
}

impl AppState {
    pub fn upload_settings(&self) -> UploadSettings {
        UploadSettings {
            max_bytes: self.config.max_upload_bytes,
            dir: self.config.upload_dir.clone(),
        }
    }
}
