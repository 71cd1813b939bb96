mod analysis;
mod config;
mod errors;
mod extraction;
mod routes;
mod state;
mod upload;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::analysis::{Analyzer, Vocabulary};
use crate::config::Config;
use crate::extraction::PdfTextExtractor;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting C-VisioN API v{}", env!("CARGO_PKG_VERSION"));

    let vocabulary = match &config.vocabulary_path {
        Some(path) => {
            let vocabulary = Vocabulary::from_json_file(path)?;
            info!("Vocabulary loaded from {}", path.display());
            vocabulary
        }
        None => Vocabulary::default(),
    };
    info!(
        skills = vocabulary.skills.len(),
        project_terms = vocabulary.project_verbs.len(),
        industry_terms = vocabulary.industry_terms.len(),
        "Analyzer vocabulary ready"
    );

    let analyzer = Arc::new(Analyzer::new(vocabulary, config.summary_selection));
    info!(
        "Upload limit {} bytes, summary selection {:?}",
        config.max_upload_bytes, config.summary_selection
    );

    let state = AppState {
        config: config.clone(),
        analyzer,
        extractor: Arc::new(PdfTextExtractor),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");
    info!("Health check: http://{addr}/health");
    info!("Analysis endpoint: POST http://{addr}/api/analyze");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
