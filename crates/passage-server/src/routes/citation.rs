//! Citation lookup routes.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;

use crate::state::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/citation/lookup", post(lookup_citation))
        .route("/citation/health", get(health))
        .route("/citation/engine-info", get(engine_info))
}

#[derive(Debug, Deserialize)]
struct LookupRequest {
    #[serde(default)]
    citation: String,
}

/// POST /api/citation/lookup — resolve a citation to passage candidates.
async fn lookup_citation(
    State(state): State<Arc<AppState>>,
    Json(req): Json<LookupRequest>,
) -> (StatusCode, Json<serde_json::Value>) {
    let citation = req.citation.trim();

    if citation.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(serde_json::json!({
                "error": "Citation text is required",
                "candidates": [],
            })),
        );
    }

    let result = state.engine.extract_passage(citation);

    (
        StatusCode::OK,
        Json(serde_json::json!({
            "success": true,
            "original_citation": result.original_citation,
            "candidates": result.candidates,
            "best_match": result.best_match,
        })),
    )
}

/// GET /api/citation/health — service liveness.
async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "passage_extraction_api",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// GET /api/citation/engine-info — engine catalog summary.
async fn engine_info(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    let index = state.engine.work_index();

    let mut translations: Vec<&str> = passage_engine::bible::TRANSLATIONS.keys().copied().collect();
    translations.sort_unstable();

    Json(serde_json::json!({
        "literary_works": index.len(),
        "biblical_translations": translations,
        "corpus_path": state.engine.config().corpus.root.display().to_string(),
        "available_works": index.work_ids(),
    }))
}
