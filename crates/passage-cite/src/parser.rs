//! Citation parsing — classifier dispatch plus per-shape builders.
//!
//! The literary grammar is an ordered list of `(matcher, builder)` pairs,
//! most-specific-first. The first structural match wins; a builder that
//! rejects its numeric fields drops the reference silently rather than
//! falling through to a less specific pattern.

use regex::{Captures, Regex};
use tracing::debug;

use crate::books::normalize_book_name;
use crate::classify::{classify, SourceType};
use crate::patterns;
use crate::types::{Citation, ParsedCitation};

/// Parse a free-text citation into structured references.
///
/// Never fails: unrecognized input produces an empty citation list.
pub fn parse_citation(text: &str) -> ParsedCitation {
    let text = text.trim();
    let source_type = classify(text);

    let citations = match source_type {
        SourceType::Bible => parse_biblical(text),
        SourceType::Literature => parse_literary(text),
        SourceType::Mixed => parse_mixed(text),
    };

    ParsedCitation {
        citations,
        source_type,
        original_text: text.to_string(),
    }
}

/// Parse a biblical citation, recursing over semicolon-separated lists.
fn parse_biblical(citation: &str) -> Vec<Citation> {
    if citation.contains(';') {
        return citation
            .split(';')
            .flat_map(|part| parse_biblical(part.trim()))
            .collect();
    }

    let Some(cap) = patterns::BIBLE_REF_AT_START.captures(citation.trim()) else {
        return Vec::new();
    };

    build_bible(&cap).into_iter().collect()
}

fn build_bible(cap: &Captures) -> Option<Citation> {
    let book = match normalize_book_name(&cap[1]) {
        Some(book) => book,
        None => {
            debug!("Unknown biblical book: {}", &cap[1]);
            return None;
        }
    };

    let chapter = parse_num(&cap[2])?;
    let start_verse = parse_num(&cap[3])?;
    let end_verse = match cap.get(4) {
        Some(m) => parse_num(m.as_str())?,
        None => start_verse,
    };
    if chapter == 0 {
        return None;
    }
    valid_range(start_verse, end_verse)?;

    Some(Citation::Bible {
        book: book.to_string(),
        chapter,
        start_verse,
        end_verse,
    })
}

/// Parse a literary citation through the ordered grammar.
fn parse_literary(citation: &str) -> Vec<Citation> {
    let rules: [(&Regex, fn(&Captures) -> Option<Citation>); 3] = [
        (&patterns::DRAMA, build_drama),
        (&patterns::BOOK_CANTO, build_book_canto),
        (&patterns::SIMPLE, build_simple),
    ];

    for (pattern, build) in rules {
        if let Some(cap) = pattern.captures(citation) {
            // First structural match short-circuits; an invalid capture
            // yields nothing for this segment.
            return build(&cap).into_iter().collect();
        }
    }

    Vec::new()
}

/// Parse `cf. <ref>; <ref>` — each side independently classified and parsed.
fn parse_mixed(citation: &str) -> Vec<Citation> {
    let Some(cap) = patterns::MIXED.captures(citation) else {
        return Vec::new();
    };

    let mut results = Vec::new();
    for side in [cap[1].trim(), cap[2].trim()] {
        match classify(side) {
            SourceType::Bible => results.extend(parse_biblical(side)),
            _ => results.extend(parse_literary(side)),
        }
    }
    results
}

fn build_drama(cap: &Captures) -> Option<Citation> {
    let start_line = parse_num(&cap[4])?;
    let end_line = match cap.get(5) {
        Some(m) => parse_num(m.as_str())?,
        None => start_line,
    };
    valid_range(start_line, end_line)?;

    Some(Citation::Literature {
        work: cap[1].trim().to_string(),
        start_line,
        end_line,
        act: Some(cap[2].to_string()),
        scene: Some(cap[3].to_string()),
        book_number: None,
    })
}

fn build_book_canto(cap: &Captures) -> Option<Citation> {
    let start_line = parse_num(&cap[3])?;
    let end_line = match cap.get(4) {
        Some(m) => parse_num(m.as_str())?,
        None => start_line,
    };
    valid_range(start_line, end_line)?;

    Some(Citation::Literature {
        work: cap[1].trim().to_string(),
        start_line,
        end_line,
        act: None,
        scene: None,
        book_number: Some(cap[2].to_string()),
    })
}

fn build_simple(cap: &Captures) -> Option<Citation> {
    let start_line = parse_num(&cap[2])?;
    let end_line = match cap.get(3) {
        Some(m) => parse_num(m.as_str())?,
        None => start_line,
    };
    valid_range(start_line, end_line)?;

    Some(Citation::Literature {
        work: cap[1].trim().to_string(),
        start_line,
        end_line,
        act: None,
        scene: None,
        book_number: None,
    })
}

fn parse_num(s: &str) -> Option<u32> {
    s.parse().ok()
}

fn valid_range(start: u32, end: u32) -> Option<()> {
    (start > 0 && end >= start).then_some(())
}
