//! Shared application state.

use passage_engine::ExtractionEngine;

/// State accessible from all route handlers. The engine's work index is
/// read-only after construction, so no locking is needed.
pub struct AppState {
    pub engine: ExtractionEngine,
}

impl AppState {
    pub fn new(engine: ExtractionEngine) -> Self {
        Self { engine }
    }
}
