//! Fuzzy title resolution against the work index.

use similar::TextDiff;

use crate::index::WorkIndex;
use crate::metadata::normalize_title;

/// Minimum similarity for a work to count as a match.
const SIMILARITY_THRESHOLD: f32 = 0.3;
/// Maximum works returned per query; bounds candidate fan-out.
const MAX_MATCHES: usize = 3;

/// A fuzzy-matched work with its similarity to the queried title.
#[derive(Debug, Clone)]
pub struct WorkMatch {
    pub work_id: String,
    pub similarity: f32,
}

/// Character-level Ratcliff/Obershelp ratio between two strings, in [0, 1].
/// Symmetric; identical strings score 1.0, disjoint strings near 0.
pub fn title_similarity(a: &str, b: &str) -> f32 {
    TextDiff::from_chars(a, b).ratio()
}

impl WorkIndex {
    /// Resolve a cited title to the closest indexed works, best first.
    pub fn resolve(&self, query_title: &str) -> Vec<WorkMatch> {
        let normalized = normalize_title(query_title);

        let mut matches: Vec<WorkMatch> = self
            .iter()
            .filter_map(|entry| {
                let similarity = title_similarity(&normalized, &entry.normalized_title);
                (similarity > SIMILARITY_THRESHOLD).then(|| WorkMatch {
                    work_id: entry.work_id.clone(),
                    similarity,
                })
            })
            .collect();

        matches.sort_by(|a, b| {
            b.similarity
                .partial_cmp(&a.similarity)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        matches.truncate(MAX_MATCHES);
        matches
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use passage_core::CorpusPaths;

    #[test]
    fn test_similarity_bounds() {
        assert_eq!(title_similarity("paradise lost", "paradise lost"), 1.0);
        assert!(title_similarity("paradise lost", "qqqq") < 0.2);
        // Symmetric
        let ab = title_similarity("hamlet", "macbeth");
        let ba = title_similarity("macbeth", "hamlet");
        assert!((ab - ba).abs() < f32::EPSILON);
    }

    fn corpus_with(works: &[(&str, &str)]) -> (tempfile::TempDir, WorkIndex) {
        let dir = tempfile::tempdir().unwrap();
        let corpus = CorpusPaths::new(dir.path());
        std::fs::create_dir_all(&corpus.cleaned).unwrap();
        for (name, content) in works {
            std::fs::write(corpus.cleaned.join(name), content).unwrap();
        }
        let index = WorkIndex::build(&corpus);
        (dir, index)
    }

    #[test]
    fn test_resolve_exact_match_first() {
        let (_dir, index) = corpus_with(&[
            ("paradise_lost.txt", "Paradise Lost\n"),
            ("paradise_regained.txt", "Paradise Regained\n"),
            ("hamlet.txt", "Hamlet\n"),
        ]);

        let matches = index.resolve("Paradise Lost");
        assert!(!matches.is_empty());
        assert_eq!(matches[0].work_id, "paradise_lost");
        assert_eq!(matches[0].similarity, 1.0);
        // Near-duplicate title still resolves, below the exact one
        assert!(matches.iter().any(|m| m.work_id == "paradise_regained"));
    }

    #[test]
    fn test_resolve_filters_dissimilar() {
        let (_dir, index) = corpus_with(&[("hamlet.txt", "Hamlet\n")]);
        assert!(index.resolve("zzzzzzzzzz").is_empty());
    }

    #[test]
    fn test_resolve_caps_at_three() {
        let (_dir, index) = corpus_with(&[
            ("sonnet_one.txt", "Sonnet One\n"),
            ("sonnet_two.txt", "Sonnet Two\n"),
            ("sonnet_three.txt", "Sonnet Three\n"),
            ("sonnet_four.txt", "Sonnet Four\n"),
        ]);

        let matches = index.resolve("Sonnet");
        assert!(matches.len() <= 3);
    }
}
