//! Literary passage extraction — line-range slicing with fuzzy title dispatch.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::json;
use tracing::debug;

use passage_corpus::{WorkEntry, WorkIndex};

use crate::score::text_quality;
use crate::types::PassageCandidate;

/// Leading line-number tokens some corpus texts carry ("12. ", "340: ").
static LINE_NUMBER_PREFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*\d+\s*[.:]?\s*").unwrap());

/// Extract an inclusive 1-based line range from a work's source text.
///
/// Returns `None` when the range falls outside the work or the source cannot
/// be read; the caller drops the candidate rather than surfacing an error.
pub fn extract_literary(
    entry: &WorkEntry,
    start_line: u32,
    end_line: u32,
) -> Option<PassageCandidate> {
    let content = match std::fs::read_to_string(&entry.source_path) {
        Ok(content) => content,
        Err(e) => {
            debug!("Cannot read {}: {}", entry.source_path.display(), e);
            return None;
        }
    };
    let lines: Vec<&str> = content.lines().collect();

    if start_line == 0 || end_line as usize > lines.len() {
        return None;
    }

    let text = clean_passage_lines(&lines[start_line as usize - 1..end_line as usize]);
    let confidence = text_quality(&text);

    Some(PassageCandidate {
        source: format!("gutenberg:{}", entry.work_id),
        confidence,
        text,
        metadata: json!({
            "lines": format!("{}-{}", start_line, end_line),
            "author": entry.author,
            "title": entry.title,
            "source_file": entry.source_path.display().to_string(),
            "total_lines": lines.len(),
        }),
        start_position: Some(start_line),
        end_position: Some(end_line),
    })
}

/// Strip line-number prefixes and drop lines left empty.
fn clean_passage_lines(lines: &[&str]) -> String {
    lines
        .iter()
        .map(|line| LINE_NUMBER_PREFIX.replace(line, "").trim().to_string())
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Fuzzy-match a cited title and extract the line range from the best works.
/// Each candidate's prior confidence is scaled by its title similarity.
pub fn find_literary_matches(
    index: &WorkIndex,
    title: &str,
    start_line: u32,
    end_line: u32,
) -> Vec<PassageCandidate> {
    index
        .resolve(title)
        .into_iter()
        .filter_map(|work_match| {
            let entry = index.get(&work_match.work_id)?;
            let mut candidate = extract_literary(entry, start_line, end_line)?;
            candidate.confidence *= work_match.similarity as f64;
            Some(candidate)
        })
        .collect()
}
