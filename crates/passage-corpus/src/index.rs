//! Work index — scans the corpus once and caches per-work metadata.

use std::collections::HashMap;
use std::path::PathBuf;

use tracing::{debug, info, warn};

use passage_core::CorpusPaths;

use crate::metadata::{extract_work_metadata, normalize_title};

/// An indexed literary work.
#[derive(Debug, Clone)]
pub struct WorkEntry {
    /// Stable identifier derived from the corpus filename.
    pub work_id: String,
    pub title: String,
    pub author: String,
    /// Lowercased, articles and punctuation removed; similarity key only.
    pub normalized_title: String,
    pub line_count: usize,
    pub source_path: PathBuf,
}

/// Read-only catalog of literary works available for line extraction.
///
/// Built once at engine startup; never mutated afterwards, so it can be
/// shared across requests without locking.
#[derive(Debug, Default)]
pub struct WorkIndex {
    works: HashMap<String, WorkEntry>,
}

impl WorkIndex {
    /// Build the index by scanning `cleaned/*.txt` under the corpus root.
    /// A missing corpus yields an empty index rather than an error.
    pub fn build(corpus: &CorpusPaths) -> Self {
        let mut works = HashMap::new();

        if !corpus.root.exists() {
            warn!("Corpus path {} not found", corpus.root.display());
            return Self { works };
        }

        let entries = match std::fs::read_dir(&corpus.cleaned) {
            Ok(entries) => entries,
            Err(_) => {
                warn!("No cleaned texts under {}", corpus.cleaned.display());
                return Self { works };
            }
        };

        for entry in entries.filter_map(|e| e.ok()) {
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some("txt") {
                continue;
            }
            let Some(work_id) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };

            match extract_work_metadata(&path) {
                Ok(meta) => {
                    debug!("Indexed {}: {}", work_id, meta.title);
                    works.insert(
                        work_id.to_string(),
                        WorkEntry {
                            work_id: work_id.to_string(),
                            normalized_title: normalize_title(&meta.title),
                            title: meta.title,
                            author: meta.author,
                            line_count: meta.line_count,
                            source_path: path.clone(),
                        },
                    );
                }
                Err(e) => warn!("Skipping {}: {}", path.display(), e),
            }
        }

        info!("Work index built: {} works", works.len());
        Self { works }
    }

    pub fn len(&self) -> usize {
        self.works.len()
    }

    pub fn is_empty(&self) -> bool {
        self.works.is_empty()
    }

    pub fn get(&self, work_id: &str) -> Option<&WorkEntry> {
        self.works.get(work_id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &WorkEntry> {
        self.works.values()
    }

    /// Sorted work identifiers, for catalog listings.
    pub fn work_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.works.keys().map(|k| k.as_str()).collect();
        ids.sort_unstable();
        ids
    }
}
