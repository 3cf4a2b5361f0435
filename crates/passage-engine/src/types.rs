//! Candidate passage types.

use serde::{Deserialize, Serialize};

/// One resolved text extract with provenance and confidence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PassageCandidate {
    /// Provenance tag, e.g. `bible:esv` or `gutenberg:<work_id>`.
    pub source: String,
    /// Heuristic confidence in [0, 1]; overwritten once during ranking.
    pub confidence: f64,
    /// Extracted passage text.
    pub text: String,
    /// Descriptive fields: title/author/lines or book/chapter/verses.
    pub metadata: serde_json::Value,
    /// Resolved start line or verse, when known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_position: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_position: Option<u32>,
}

/// End-to-end extraction result for one citation string.
#[derive(Debug, Clone, Serialize)]
pub struct ExtractionResult {
    pub original_citation: String,
    pub candidates: Vec<PassageCandidate>,
    /// Highest-ranked candidate, when any exist.
    pub best_match: Option<PassageCandidate>,
}
