//! Passage Corpus — the literary work index.
//!
//! Scans a corpus directory once at startup, extracts per-work metadata, and
//! answers fuzzy title lookups. The index is read-only after construction.

pub mod index;
pub mod metadata;
pub mod resolve;

pub use index::{WorkEntry, WorkIndex};
pub use metadata::normalize_title;
pub use resolve::{title_similarity, WorkMatch};
