//! Configuration and corpus directory layout.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Paths into the text corpus used for literary passage extraction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorpusPaths {
    /// Corpus root directory (e.g. `test_corpus/`).
    pub root: PathBuf,
    /// Cleaned plain-text works (`test_corpus/cleaned/`).
    pub cleaned: PathBuf,
}

impl CorpusPaths {
    /// Lay out corpus paths under a root directory. The corpus is read-only
    /// input; nothing is created here.
    pub fn new(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref().to_path_buf();
        Self {
            cleaned: root.join("cleaned"),
            root,
        }
    }
}

/// Top-level Passage configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PassageConfig {
    /// HTTP server port.
    pub port: u16,
    /// Corpus directory paths.
    pub corpus: CorpusPaths,
    /// Translation used when a citation does not name one.
    pub default_translation: String,
    /// Maximum candidates returned per citation.
    pub max_candidates: usize,
}

/// Default cap on candidates returned per citation.
pub const DEFAULT_MAX_CANDIDATES: usize = 5;

impl PassageConfig {
    /// Create configuration from environment and defaults.
    pub fn from_env() -> Self {
        let port = std::env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(5000);

        let corpus_dir =
            std::env::var("PASSAGE_CORPUS_DIR").unwrap_or_else(|_| "test_corpus".to_string());

        Self {
            port,
            corpus: CorpusPaths::new(corpus_dir),
            default_translation: "ESV".to_string(),
            max_candidates: DEFAULT_MAX_CANDIDATES,
        }
    }

    /// Configuration rooted at an explicit corpus directory (used by tests).
    pub fn with_corpus(root: impl AsRef<Path>) -> Self {
        Self {
            port: 5000,
            corpus: CorpusPaths::new(root),
            default_translation: "ESV".to_string(),
            max_candidates: DEFAULT_MAX_CANDIDATES,
        }
    }
}
