//! Biblical book name normalization.
//!
//! Maps book names and standard abbreviations to canonical names. A failed
//! lookup is the validity gate for biblical references: a reference whose
//! book does not normalize is never emitted.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;

/// Book name / abbreviation → canonical name, all 66 books.
static BOOKS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        // Old Testament
        ("genesis", "Genesis"),
        ("gen", "Genesis"),
        ("ge", "Genesis"),
        ("exodus", "Exodus"),
        ("exod", "Exodus"),
        ("ex", "Exodus"),
        ("leviticus", "Leviticus"),
        ("lev", "Leviticus"),
        ("le", "Leviticus"),
        ("numbers", "Numbers"),
        ("num", "Numbers"),
        ("nu", "Numbers"),
        ("deuteronomy", "Deuteronomy"),
        ("deut", "Deuteronomy"),
        ("dt", "Deuteronomy"),
        ("joshua", "Joshua"),
        ("josh", "Joshua"),
        ("jos", "Joshua"),
        ("judges", "Judges"),
        ("judg", "Judges"),
        ("jdg", "Judges"),
        ("ruth", "Ruth"),
        ("ru", "Ruth"),
        ("1 samuel", "1 Samuel"),
        ("1sam", "1 Samuel"),
        ("1sa", "1 Samuel"),
        ("2 samuel", "2 Samuel"),
        ("2sam", "2 Samuel"),
        ("2sa", "2 Samuel"),
        ("1 kings", "1 Kings"),
        ("1kgs", "1 Kings"),
        ("1ki", "1 Kings"),
        ("2 kings", "2 Kings"),
        ("2kgs", "2 Kings"),
        ("2ki", "2 Kings"),
        ("1 chronicles", "1 Chronicles"),
        ("1chr", "1 Chronicles"),
        ("1ch", "1 Chronicles"),
        ("2 chronicles", "2 Chronicles"),
        ("2chr", "2 Chronicles"),
        ("2ch", "2 Chronicles"),
        ("ezra", "Ezra"),
        ("ezr", "Ezra"),
        ("nehemiah", "Nehemiah"),
        ("neh", "Nehemiah"),
        ("ne", "Nehemiah"),
        ("esther", "Esther"),
        ("est", "Esther"),
        ("es", "Esther"),
        ("job", "Job"),
        ("jb", "Job"),
        ("psalms", "Psalms"),
        ("psalm", "Psalms"),
        ("ps", "Psalms"),
        ("psa", "Psalms"),
        ("proverbs", "Proverbs"),
        ("prov", "Proverbs"),
        ("pr", "Proverbs"),
        ("ecclesiastes", "Ecclesiastes"),
        ("eccl", "Ecclesiastes"),
        ("ec", "Ecclesiastes"),
        ("song of solomon", "Song of Solomon"),
        ("song of songs", "Song of Solomon"),
        ("song", "Song of Solomon"),
        ("so", "Song of Solomon"),
        ("sos", "Song of Solomon"),
        ("isaiah", "Isaiah"),
        ("isa", "Isaiah"),
        ("is", "Isaiah"),
        ("jeremiah", "Jeremiah"),
        ("jer", "Jeremiah"),
        ("je", "Jeremiah"),
        ("lamentations", "Lamentations"),
        ("lam", "Lamentations"),
        ("la", "Lamentations"),
        ("ezekiel", "Ezekiel"),
        ("ezek", "Ezekiel"),
        ("eze", "Ezekiel"),
        ("daniel", "Daniel"),
        ("dan", "Daniel"),
        ("da", "Daniel"),
        ("hosea", "Hosea"),
        ("hos", "Hosea"),
        ("ho", "Hosea"),
        ("joel", "Joel"),
        ("joe", "Joel"),
        ("amos", "Amos"),
        ("am", "Amos"),
        ("obadiah", "Obadiah"),
        ("obad", "Obadiah"),
        ("ob", "Obadiah"),
        ("jonah", "Jonah"),
        ("jon", "Jonah"),
        ("micah", "Micah"),
        ("mic", "Micah"),
        ("mi", "Micah"),
        ("nahum", "Nahum"),
        ("nah", "Nahum"),
        ("na", "Nahum"),
        ("habakkuk", "Habakkuk"),
        ("hab", "Habakkuk"),
        ("hb", "Habakkuk"),
        ("zephaniah", "Zephaniah"),
        ("zeph", "Zephaniah"),
        ("zep", "Zephaniah"),
        ("haggai", "Haggai"),
        ("hag", "Haggai"),
        ("hg", "Haggai"),
        ("zechariah", "Zechariah"),
        ("zech", "Zechariah"),
        ("zec", "Zechariah"),
        ("malachi", "Malachi"),
        ("mal", "Malachi"),
        // New Testament
        ("matthew", "Matthew"),
        ("matt", "Matthew"),
        ("mt", "Matthew"),
        ("mark", "Mark"),
        ("mk", "Mark"),
        ("luke", "Luke"),
        ("lk", "Luke"),
        ("john", "John"),
        ("jn", "John"),
        ("acts", "Acts"),
        ("ac", "Acts"),
        ("romans", "Romans"),
        ("rom", "Romans"),
        ("ro", "Romans"),
        ("1 corinthians", "1 Corinthians"),
        ("1cor", "1 Corinthians"),
        ("1co", "1 Corinthians"),
        ("2 corinthians", "2 Corinthians"),
        ("2cor", "2 Corinthians"),
        ("2co", "2 Corinthians"),
        ("galatians", "Galatians"),
        ("gal", "Galatians"),
        ("ga", "Galatians"),
        ("ephesians", "Ephesians"),
        ("eph", "Ephesians"),
        ("ep", "Ephesians"),
        ("philippians", "Philippians"),
        ("phil", "Philippians"),
        ("php", "Philippians"),
        ("colossians", "Colossians"),
        ("col", "Colossians"),
        ("1 thessalonians", "1 Thessalonians"),
        ("1thess", "1 Thessalonians"),
        ("1th", "1 Thessalonians"),
        ("2 thessalonians", "2 Thessalonians"),
        ("2thess", "2 Thessalonians"),
        ("2th", "2 Thessalonians"),
        ("1 timothy", "1 Timothy"),
        ("1tim", "1 Timothy"),
        ("1ti", "1 Timothy"),
        ("2 timothy", "2 Timothy"),
        ("2tim", "2 Timothy"),
        ("2ti", "2 Timothy"),
        ("titus", "Titus"),
        ("tit", "Titus"),
        ("ti", "Titus"),
        ("philemon", "Philemon"),
        ("phlm", "Philemon"),
        ("phm", "Philemon"),
        ("hebrews", "Hebrews"),
        ("heb", "Hebrews"),
        ("james", "James"),
        ("jas", "James"),
        ("ja", "James"),
        ("1 peter", "1 Peter"),
        ("1pet", "1 Peter"),
        ("1pe", "1 Peter"),
        ("2 peter", "2 Peter"),
        ("2pet", "2 Peter"),
        ("2pe", "2 Peter"),
        ("1 john", "1 John"),
        ("1jn", "1 John"),
        ("2 john", "2 John"),
        ("2jn", "2 John"),
        ("3 john", "3 John"),
        ("3jn", "3 John"),
        ("jude", "Jude"),
        ("jd", "Jude"),
        ("revelation", "Revelation"),
        ("rev", "Revelation"),
        ("re", "Revelation"),
    ])
});

/// Numbered-book prefix without a space ("1cor", "2tim").
static NUMBERED_BOOK: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\d+)\s*([a-z]+)").unwrap());

/// Normalize a biblical book name or abbreviation to its canonical form.
///
/// Lowercases, collapses whitespace, inserts a space between a leading digit
/// and letters, then looks up the static table; retries with all spaces
/// removed for concatenated abbreviations. Returns `None` when the name is
/// not a recognized book.
pub fn normalize_book_name(raw: &str) -> Option<&'static str> {
    let clean = raw
        .trim()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");

    let clean = NUMBERED_BOOK.replace(&clean, "$1 $2").into_owned();

    if let Some(name) = BOOKS.get(clean.as_str()) {
        return Some(*name);
    }

    // Concatenated abbreviations ("1corinthians" → lookup without spaces)
    let no_space: String = clean.chars().filter(|c| !c.is_whitespace()).collect();
    BOOKS.get(no_space.as_str()).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_names_are_idempotent() {
        for canonical in ["Genesis", "Song of Solomon", "1 Corinthians", "Revelation"] {
            assert_eq!(normalize_book_name(canonical), Some(canonical));
        }
    }

    #[test]
    fn test_abbreviations() {
        assert_eq!(normalize_book_name("Gen"), Some("Genesis"));
        assert_eq!(normalize_book_name("matt"), Some("Matthew"));
        assert_eq!(normalize_book_name("Ps"), Some("Psalms"));
        assert_eq!(normalize_book_name("Rev"), Some("Revelation"));
    }

    #[test]
    fn test_numbered_books() {
        assert_eq!(normalize_book_name("1 Cor"), Some("1 Corinthians"));
        assert_eq!(normalize_book_name("1cor"), Some("1 Corinthians"));
        assert_eq!(normalize_book_name("2Tim"), Some("2 Timothy"));
        assert_eq!(normalize_book_name("3 John"), Some("3 John"));
    }

    #[test]
    fn test_concatenated_forms() {
        assert_eq!(normalize_book_name("1 corinthians"), Some("1 Corinthians"));
        assert_eq!(normalize_book_name("songofsolomon"), None);
        assert_eq!(normalize_book_name("Song of Songs"), Some("Song of Solomon"));
    }

    #[test]
    fn test_whitespace_collapse() {
        assert_eq!(normalize_book_name("  1   Kings "), Some("1 Kings"));
    }

    #[test]
    fn test_unknown_book() {
        assert_eq!(normalize_book_name("Invalid"), None);
        assert_eq!(normalize_book_name(""), None);
        assert_eq!(normalize_book_name("Paradise Lost"), None);
    }
}
