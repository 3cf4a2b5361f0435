//! Passage — citation-to-passage resolution server.

use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

mod routes;
mod state;

use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = passage_core::PassageConfig::from_env();
    let port = config.port;

    info!("Corpus directory: {}", config.corpus.root.display());

    let engine = passage_engine::ExtractionEngine::new(config);
    let state = Arc::new(AppState::new(engine));

    let app = routes::build_router(state);

    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Passage server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
