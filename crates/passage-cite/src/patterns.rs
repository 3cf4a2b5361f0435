//! Compiled citation grammar patterns.
//!
//! One pattern per citation shape. The literary patterns are start-anchored
//! and tried most-specific-first by the parser; the biblical pattern comes in
//! an unanchored form for classification and an anchored form for parsing.

use once_cell::sync::Lazy;
use regex::Regex;

/// Biblical reference anywhere in a string: `<book> <chapter>:<verse>[-<verse>]`.
pub static BIBLE_REF: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)([1-3]?\s*[A-Za-z]+(?:\s+of\s+[A-Za-z]+)?(?:\s+[A-Za-z]+)*)\s+(\d+):(\d+)(?:-(\d+))?",
    )
    .unwrap()
});

/// Biblical reference at the start of a segment.
pub static BIBLE_REF_AT_START: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)^([1-3]?\s*[A-Za-z]+(?:\s+of\s+[A-Za-z]+)?(?:\s+[A-Za-z]+)*)\s+(\d+):(\d+)(?:-(\d+))?",
    )
    .unwrap()
});

/// Drama citation: `<work> Act <n> Scene <n>, <line>[-<line>]`.
pub static DRAMA: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^([A-Za-z\s]+?)\s+Act\s+(\d+)\s+Scene\s+(\d+),?\s+(\d+)(?:-(\d+))?").unwrap()
});

/// Book/canto citation: `<work> [Book ]<numeral>[.,] <line>[-<line>]`.
/// The numeral may be Roman or Arabic.
pub static BOOK_CANTO: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^([A-Za-z\s]+?)\s+(?:Book\s+)?([IVX]+|[0-9]+)[.,]\s*(\d+)(?:-(\d+))?").unwrap()
});

/// Simple line citation: `<work> <line>[-<line>]`. Least specific, tried last.
pub static SIMPLE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^([A-Za-z\s]+?)\.?\s+(\d+)(?:-(\d+))?\.?$").unwrap());

/// Mixed citation: `cf. <ref>; <ref>`.
pub static MIXED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^cf\.\s*([^;]+);\s*([^;]+)").unwrap());
