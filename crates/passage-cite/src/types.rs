//! Structured citation types.

use serde::{Deserialize, Serialize};

use crate::classify::SourceType;

/// A single structured reference extracted from a citation string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Citation {
    /// A biblical verse range, e.g. `Genesis 1:1-3`.
    Bible {
        /// Canonical book name.
        book: String,
        chapter: u32,
        start_verse: u32,
        end_verse: u32,
    },
    /// A literary line range, optionally within an act/scene or book/canto.
    Literature {
        /// Work title exactly as it appeared in the citation.
        work: String,
        start_line: u32,
        end_line: u32,
        #[serde(skip_serializing_if = "Option::is_none")]
        act: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        scene: Option<String>,
        /// Literal numeral token from the citation, Roman or Arabic.
        #[serde(skip_serializing_if = "Option::is_none")]
        book_number: Option<String>,
    },
}

/// Parser output for one input string. An empty `citations` list is a valid
/// result meaning nothing was recognized.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParsedCitation {
    pub citations: Vec<Citation>,
    pub source_type: SourceType,
    pub original_text: String,
}
