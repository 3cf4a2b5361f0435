//! Source type classification for citation strings.

use serde::{Deserialize, Serialize};

use crate::books::normalize_book_name;
use crate::patterns;

/// The kind of source a citation refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceType {
    Bible,
    Literature,
    Mixed,
}

/// Classify a citation as biblical, literary, or mixed.
///
/// Decision order matters: later parsing dispatches on the result.
/// The semicolon+colon rule catches chained verse lists the primary pattern
/// missed, and can misclassify literary text containing both characters.
pub fn classify(citation: &str) -> SourceType {
    if citation.to_lowercase().contains("cf.") && citation.contains(';') {
        return SourceType::Mixed;
    }

    if let Some(cap) = patterns::BIBLE_REF.captures(citation) {
        if normalize_book_name(&cap[1]).is_some() {
            return SourceType::Bible;
        }
    }

    if citation.contains(';') && citation.contains(':') {
        return SourceType::Bible;
    }

    SourceType::Literature
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_biblical() {
        assert_eq!(classify("Genesis 1:1-3"), SourceType::Bible);
        assert_eq!(classify("Matt 5:3-12"), SourceType::Bible);
        assert_eq!(classify("Romans 8:28; 1 Cor 13:4-7"), SourceType::Bible);
    }

    #[test]
    fn test_literary() {
        assert_eq!(classify("Hamlet Act 3 Scene 1, 56-88"), SourceType::Literature);
        assert_eq!(classify("Absalom and Achitophel 1-10"), SourceType::Literature);
        assert_eq!(classify("Not a citation at all"), SourceType::Literature);
    }

    #[test]
    fn test_mixed_requires_cf_and_semicolon() {
        assert_eq!(
            classify("cf. Genesis 3:15; Paradise Lost IX.1033-1045"),
            SourceType::Mixed
        );
        // "cf." alone is not enough
        assert_eq!(classify("cf. Genesis 3:15"), SourceType::Bible);
    }

    #[test]
    fn test_unknown_book_falls_through() {
        // "Invalid 99:99" matches the structural pattern but the book does
        // not normalize, and there is no semicolon to trigger the list rule.
        assert_eq!(classify("Invalid 99:99-100"), SourceType::Literature);
    }

    #[test]
    fn test_semicolon_colon_heuristic() {
        // Chained verse list whose abbreviations failed the primary pattern
        // still classifies as biblical via the semicolon+colon rule.
        assert_eq!(classify("Xyz 3:16; Abc 1:1"), SourceType::Bible);
    }
}
