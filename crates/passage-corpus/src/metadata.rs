//! Work metadata extraction and title normalization.

use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;

use passage_core::Result;

/// Metadata pulled from a work's opening lines.
#[derive(Debug, Clone, Default)]
pub struct WorkMetadata {
    pub title: String,
    pub author: String,
    pub line_count: usize,
}

static AUTHOR_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)by\s+([A-Za-z\s.]+)").unwrap());
static STOP_WORDS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b(the|a|an)\b").unwrap());
static NON_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\w\s]").unwrap());
static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Boilerplate markers that disqualify a line as a title.
const HEADER_SKIP: &[&str] = &["project gutenberg", "ebook", "produced by"];

/// How many opening lines are inspected for title/author.
const HEADER_SCAN_LINES: usize = 10;

/// Extract title and author from the first lines of a cleaned text, falling
/// back to a title-cased filename when the header yields nothing.
pub fn extract_work_metadata(path: &Path) -> Result<WorkMetadata> {
    let content = std::fs::read_to_string(path)?;
    let lines: Vec<&str> = content.lines().collect();

    let mut meta = WorkMetadata {
        line_count: lines.len(),
        ..Default::default()
    };

    for line in lines.iter().take(HEADER_SCAN_LINES) {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let lower = line.to_lowercase();

        if meta.title.is_empty() && !HEADER_SKIP.iter().any(|skip| lower.contains(skip)) {
            meta.title = line.to_string();
        }

        if meta.author.is_empty() && lower.contains("by ") {
            if let Some(cap) = AUTHOR_LINE.captures(line) {
                meta.author = cap[1].trim().to_string();
            }
        }
    }

    if meta.title.is_empty() {
        if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
            meta.title = title_case(&stem.replace(['_', '-'], " "));
        }
    }

    Ok(meta)
}

/// Normalize a title for fuzzy comparison: lowercase, drop the articles
/// {the, a, an}, strip punctuation, collapse whitespace.
pub fn normalize_title(title: &str) -> String {
    let lower = title.to_lowercase();
    let no_stop = STOP_WORDS.replace_all(&lower, "");
    let no_punct = NON_WORD.replace_all(&no_stop, "");
    WHITESPACE.replace_all(&no_punct, " ").trim().to_string()
}

/// Title-case a phrase: first letter of each word uppercased.
fn title_case(s: &str) -> String {
    s.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_normalize_title_drops_articles_and_punctuation() {
        assert_eq!(normalize_title("The Waste Land"), "waste land");
        assert_eq!(normalize_title("A Tale of Two Cities"), "tale of two cities");
        assert_eq!(normalize_title("Absalom and Achitophel."), "absalom and achitophel");
    }

    #[test]
    fn test_normalize_title_collapses_whitespace() {
        assert_eq!(normalize_title("  Paradise   Lost  "), "paradise lost");
    }

    #[test]
    fn test_normalize_title_keeps_inner_articles_as_word_boundaries() {
        // "an" must not be stripped out of "and"
        assert_eq!(normalize_title("Pride and Prejudice"), "pride and prejudice");
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("paradise lost"), "Paradise Lost");
        assert_eq!(title_case("the waste land"), "The Waste Land");
    }

    #[test]
    fn test_extract_metadata_from_header() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absalom_and_achitophel.txt");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(f, "Absalom and Achitophel").unwrap();
        writeln!(f, "A Poem by John Dryden").unwrap();
        writeln!(f).unwrap();
        writeln!(f, "In pious times, ere priest-craft did begin,").unwrap();
        writeln!(f, "Before polygamy was made a sin;").unwrap();

        let meta = extract_work_metadata(&path).unwrap();
        assert_eq!(meta.title, "Absalom and Achitophel");
        assert_eq!(meta.author, "John Dryden");
        assert_eq!(meta.line_count, 5);
    }

    #[test]
    fn test_extract_metadata_skips_gutenberg_boilerplate() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("work.txt");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(f, "The Project Gutenberg eBook of Paradise Lost").unwrap();
        writeln!(f, "Paradise Lost").unwrap();
        writeln!(f, "by John Milton").unwrap();

        let meta = extract_work_metadata(&path).unwrap();
        assert_eq!(meta.title, "Paradise Lost");
        assert_eq!(meta.author, "John Milton");
    }

    #[test]
    fn test_extract_metadata_filename_fallback() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("the_waste-land.txt");
        std::fs::write(&path, "").unwrap();

        let meta = extract_work_metadata(&path).unwrap();
        assert_eq!(meta.title, "The Waste Land");
        assert_eq!(meta.line_count, 0);
    }
}
