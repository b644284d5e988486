use thiserror::Error;

use crate::core::reference::{ReferenceQuery, VerseSpan};
use crate::core::types::Corpus;
use crate::parsing::abbrev::canonical_book_name;
use crate::store::directory::BookDirectory;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ParseError {
    #[error("Empty reference")]
    Empty,

    #[error("Unknown book name: {0}")]
    UnknownBook(String),

    #[error("Invalid chapter or verse number: {0}")]
    InvalidNumber(String),

    #[error("Invalid verse range: {0} (start must not exceed end)")]
    InvalidRange(String),
}

/// Parse a free-text scripture reference into a structured query.
///
/// Accepted forms, in order of granularity:
///
/// ```text
/// 1 Nephi              whole book
/// 1 Nephi 3            whole chapter
/// 1 Nephi 3:7          single verse
/// 1 Nephi 3:7-9        verse range (hyphen or en-dash)
/// ```
///
/// Book names are matched case-insensitively with whitespace collapsed,
/// after expanding common abbreviations ("1 ne", "D&C", "js-h", ...).
/// No fuzzy or typo correction is attempted.
///
/// # Errors
///
/// Returns `ParseError::Empty` for blank input, `ParseError::UnknownBook`
/// when the book matches neither an abbreviation nor the corpus's canonical
/// book list, `ParseError::InvalidNumber` for non-positive or non-numeric
/// chapter/verse parts, and `ParseError::InvalidRange` for a descending
/// verse range.
pub fn parse_reference(
    input: &str,
    corpus: Corpus,
    directory: &BookDirectory,
) -> Result<ReferenceQuery, ParseError> {
    let input = collapse_whitespace(input);
    if input.is_empty() {
        return Err(ParseError::Empty);
    }

    let (head, verses) = match input.rsplit_once(':') {
        Some((head, tail)) => (head.trim_end().to_string(), Some(parse_span(tail.trim())?)),
        None => (input.clone(), None),
    };

    let (book_part, chapter) = split_chapter(&head);
    if verses.is_some() && chapter.is_none() {
        // "Alma :7" and similar malformed shapes
        return Err(ParseError::InvalidNumber(head));
    }
    let chapter = match chapter {
        Some(text) => Some(parse_positive(&text)?),
        None => None,
    };

    let book_part = book_part.trim();
    if book_part.is_empty() {
        return Err(ParseError::Empty);
    }

    let book_name = canonical_book_name(book_part).unwrap_or(book_part);
    let entry = directory
        .resolve(corpus, book_name)
        .or_else(|| directory.resolve(corpus, book_part))
        .ok_or_else(|| ParseError::UnknownBook(book_part.to_string()))?;

    Ok(ReferenceQuery {
        corpus,
        book: entry.title.clone(),
        chapter,
        verses,
    })
}

/// Split a trailing chapter number off the book name, if present.
/// "1 Nephi 3" becomes ("1 Nephi", Some("3")); "1 Nephi" is book-only
/// because it does not end in a digit.
fn split_chapter(head: &str) -> (&str, Option<String>) {
    let trimmed = head.trim_end();
    let digits_at = trimmed
        .rfind(|c: char| !c.is_ascii_digit())
        .map_or(0, |i| i + c_len(trimmed, i));

    let (book, digits) = trimmed.split_at(digits_at);
    if digits.is_empty() || book.trim().is_empty() {
        return (trimmed, None);
    }
    (book.trim_end(), Some(digits.to_string()))
}

// Byte length of the char starting at index i
fn c_len(s: &str, i: usize) -> usize {
    s[i..].chars().next().map_or(0, char::len_utf8)
}

fn parse_span(text: &str) -> Result<VerseSpan, ParseError> {
    let parts: Vec<&str> = text
        .split(['-', '\u{2013}'])
        .map(str::trim)
        .collect();

    match parts.as_slice() {
        [single] => Ok(VerseSpan::single(parse_positive(single)?)),
        [start, end] => {
            let span = VerseSpan {
                start: parse_positive(start)?,
                end: parse_positive(end)?,
            };
            if span.start > span.end {
                return Err(ParseError::InvalidRange(text.to_string()));
            }
            Ok(span)
        }
        _ => Err(ParseError::InvalidNumber(text.to_string())),
    }
}

fn parse_positive(text: &str) -> Result<u32, ParseError> {
    match text.parse::<u32>() {
        Ok(n) if n >= 1 => Ok(n),
        _ => Err(ParseError::InvalidNumber(text.to_string())),
    }
}

fn collapse_whitespace(input: &str) -> String {
    input.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    // Directory-independent pieces are tested here; full parse paths that
    // need a loaded BookDirectory live in tests/resolver_tests.rs.

    #[test]
    fn test_split_chapter_forms() {
        assert_eq!(split_chapter("1 Nephi 3"), ("1 Nephi", Some("3".to_string())));
        assert_eq!(split_chapter("1 Nephi"), ("1 Nephi", None));
        assert_eq!(split_chapter("Alma 63"), ("Alma", Some("63".to_string())));
        assert_eq!(split_chapter("Alma"), ("Alma", None));
    }

    #[test]
    fn test_split_chapter_all_digits_is_book_only() {
        // "3" alone cannot be split into book + chapter
        assert_eq!(split_chapter("3"), ("3", None));
    }

    #[test]
    fn test_parse_span_single_and_range() {
        assert_eq!(parse_span("7"), Ok(VerseSpan::single(7)));
        assert_eq!(parse_span("7-9"), Ok(VerseSpan { start: 7, end: 9 }));
        assert_eq!(parse_span("7\u{2013}9"), Ok(VerseSpan { start: 7, end: 9 }));
        assert_eq!(parse_span("7 - 9"), Ok(VerseSpan { start: 7, end: 9 }));
    }

    #[test]
    fn test_parse_span_rejects_bad_shapes() {
        assert_eq!(
            parse_span("9-7"),
            Err(ParseError::InvalidRange("9-7".to_string()))
        );
        assert_eq!(
            parse_span("0"),
            Err(ParseError::InvalidNumber("0".to_string()))
        );
        assert_eq!(
            parse_span("seven"),
            Err(ParseError::InvalidNumber("seven".to_string()))
        );
        assert!(parse_span("1-2-3").is_err());
    }

    #[test]
    fn test_collapse_whitespace() {
        assert_eq!(collapse_whitespace("  1   Nephi  3:7 "), "1 Nephi 3:7");
    }
}
