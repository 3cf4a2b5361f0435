//! Confidence scoring and candidate ranking.
//!
//! The final confidence is the midpoint of a candidate's prior confidence
//! and a weighted sum of four sub-scores, clamped to [0, 1].

use once_cell::sync::Lazy;
use regex::Regex;

use crate::types::PassageCandidate;

static TERMINAL_PUNCT: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.!?]").unwrap());
static BRACKET_MARKER: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[.*?\]").unwrap());

const WEIGHT_TEXT_QUALITY: f64 = 0.3;
const WEIGHT_SOURCE_RELIABILITY: f64 = 0.2;
const WEIGHT_METADATA: f64 = 0.2;
const WEIGHT_CITATION_MATCH: f64 = 0.3;

/// Quality of extracted text: length adequacy, completeness, readability,
/// cleanliness. Each indicator is in [0, 1]; the score is their mean.
pub fn text_quality(text: &str) -> f64 {
    if text.is_empty() {
        return 0.0;
    }

    let length = (text.len() as f64 / 200.0).min(1.0);
    let completeness = if text.ends_with("...") { 0.8 } else { 1.0 };
    let readability = if TERMINAL_PUNCT.is_match(text) { 1.0 } else { 0.6 };
    let cleanliness = if BRACKET_MARKER.is_match(text) { 0.7 } else { 1.0 };

    (length + completeness + readability + cleanliness) / 4.0
}

/// Fixed reliability prior by provenance tag.
fn source_reliability(source: &str) -> f64 {
    if source.starts_with("bible:") {
        0.95
    } else if source.starts_with("gutenberg:") {
        0.85
    } else {
        0.7
    }
}

/// Fraction of required metadata fields present and non-empty. Biblical
/// candidates (carrying a `book` field) require book/chapter/verses;
/// literary candidates require title/author.
fn metadata_completeness(metadata: &serde_json::Value) -> f64 {
    let required: &[&str] = if metadata.get("book").is_some() {
        &["book", "chapter", "verses"]
    } else {
        &["title", "author"]
    };

    let present = required
        .iter()
        .filter(|field| match metadata.get(**field) {
            Some(serde_json::Value::String(s)) => !s.is_empty(),
            Some(serde_json::Value::Null) | None => false,
            Some(_) => true,
        })
        .count();

    present as f64 / required.len() as f64
}

/// How strongly the candidate's metadata echoes the citation text: 0.5 base,
/// +0.3 when the title substring appears, +0.2 for the author, capped at 1.0.
///
/// An absent title or author is treated as the empty string, which is
/// vacuously contained; biblical candidates therefore always score 1.0 here.
fn citation_match(candidate: &PassageCandidate, original_citation: &str) -> f64 {
    let citation_lower = original_citation.to_lowercase();
    let mut score = 0.5;

    let title = candidate
        .metadata
        .get("title")
        .and_then(|v| v.as_str())
        .unwrap_or("");
    if citation_lower.contains(&title.to_lowercase()) {
        score += 0.3;
    }

    let author = candidate
        .metadata
        .get("author")
        .and_then(|v| v.as_str())
        .unwrap_or("");
    if citation_lower.contains(&author.to_lowercase()) {
        score += 0.2;
    }

    f64::min(score, 1.0)
}

/// Confidence for a candidate against the cited text, clamped to [0, 1].
pub fn confidence_score(candidate: &PassageCandidate, original_citation: &str) -> f64 {
    let weighted = text_quality(&candidate.text) * WEIGHT_TEXT_QUALITY
        + source_reliability(&candidate.source) * WEIGHT_SOURCE_RELIABILITY
        + metadata_completeness(&candidate.metadata) * WEIGHT_METADATA
        + citation_match(candidate, original_citation) * WEIGHT_CITATION_MATCH;

    ((candidate.confidence + weighted) / 2.0).clamp(0.0, 1.0)
}

/// Rank candidates by recomputed confidence, highest first.
///
/// Confidence is recomputed exactly once here, against an empty comparator
/// string, overwriting each candidate's prior value. The sort is stable, so
/// ties keep their generation order.
pub fn rank_candidates(mut candidates: Vec<PassageCandidate>) -> Vec<PassageCandidate> {
    for candidate in &mut candidates {
        candidate.confidence = confidence_score(candidate, "");
    }

    candidates.sort_by(|a, b| {
        b.confidence
            .partial_cmp(&a.confidence)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    candidates
}
