//! Passage Engine — citation string → ranked passage candidates.
//!
//! Combines the citation parser, the work index, and the demo biblical verse
//! table into one extraction pipeline. Candidates carry a provenance tag and
//! a confidence score; ranking recomputes confidence once and sorts.

pub mod bible;
pub mod engine;
pub mod literary;
pub mod score;
pub mod types;

pub use engine::ExtractionEngine;
pub use types::{ExtractionResult, PassageCandidate};
