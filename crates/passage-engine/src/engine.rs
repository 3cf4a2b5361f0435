//! End-to-end extraction: citation string → ranked passage candidates.

use tracing::{debug, info};

use passage_cite::{parse_citation, Citation};
use passage_core::PassageConfig;
use passage_corpus::WorkIndex;

use crate::bible::extract_biblical;
use crate::literary::find_literary_matches;
use crate::score::rank_candidates;
use crate::types::{ExtractionResult, PassageCandidate};

/// Citation extraction engine.
///
/// The work index is built once at construction and read-only afterwards;
/// the engine can be shared across requests without locking.
pub struct ExtractionEngine {
    config: PassageConfig,
    index: WorkIndex,
}

impl ExtractionEngine {
    pub fn new(config: PassageConfig) -> Self {
        let index = WorkIndex::build(&config.corpus);
        info!("Extraction engine ready: {} literary works", index.len());
        Self { config, index }
    }

    pub fn config(&self) -> &PassageConfig {
        &self.config
    }

    pub fn work_index(&self) -> &WorkIndex {
        &self.index
    }

    /// Generate ranked passage candidates for a citation string, truncated
    /// to `max_candidates`.
    pub fn generate_candidates(
        &self,
        citation: &str,
        max_candidates: usize,
    ) -> Vec<PassageCandidate> {
        let parsed = parse_citation(citation);
        debug!(
            "Parsed {} reference(s) from '{}' ({:?})",
            parsed.citations.len(),
            citation,
            parsed.source_type
        );

        let mut candidates = Vec::new();
        for reference in &parsed.citations {
            match reference {
                Citation::Bible {
                    book,
                    chapter,
                    start_verse,
                    end_verse,
                } => {
                    candidates.push(extract_biblical(
                        book,
                        *chapter,
                        *start_verse,
                        *end_verse,
                        &self.config.default_translation,
                    ));
                }
                Citation::Literature {
                    work,
                    start_line,
                    end_line,
                    ..
                } => {
                    candidates.extend(find_literary_matches(
                        &self.index,
                        work,
                        *start_line,
                        *end_line,
                    ));
                }
            }
        }

        let mut ranked = rank_candidates(candidates);
        ranked.truncate(max_candidates);
        ranked
    }

    /// Resolve a citation to its best passage candidates.
    pub fn extract_passage(&self, citation: &str) -> ExtractionResult {
        let candidates = self.generate_candidates(citation, self.config.max_candidates);
        let best_match = candidates.first().cloned();

        ExtractionResult {
            original_citation: citation.to_string(),
            candidates,
            best_match,
        }
    }
}
