use serde::{Deserialize, Serialize};

use crate::core::types::{Corpus, Granularity};

/// An inclusive range of verses within one chapter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerseSpan {
    pub start: u32,
    pub end: u32,
}

impl VerseSpan {
    #[must_use]
    pub fn single(verse: u32) -> Self {
        Self {
            start: verse,
            end: verse,
        }
    }

    #[must_use]
    pub fn is_single(&self) -> bool {
        self.start == self.end
    }

    /// Number of verse slots covered by the span
    #[must_use]
    pub fn len(&self) -> u32 {
        self.end - self.start + 1
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        false // start <= end is enforced at parse time
    }
}

impl std::fmt::Display for VerseSpan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_single() {
            write!(f, "{}", self.start)
        } else {
            write!(f, "{}-{}", self.start, self.end)
        }
    }
}

/// A structured scripture reference derived from user input.
///
/// Created per request by the parser and discarded after use. The book title
/// is canonical (resolved against the corpus's book directory), so downstream
/// lookups can match on it exactly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceQuery {
    /// Corpus whose naming conventions the reference uses
    pub corpus: Corpus,

    /// Canonical book title (e.g. "1 Nephi")
    pub book: String,

    /// Chapter number; `None` means a whole-book query
    pub chapter: Option<u32>,

    /// Verse or verse range; `None` means a whole-chapter (or book) query
    pub verses: Option<VerseSpan>,
}

impl ReferenceQuery {
    #[must_use]
    pub fn granularity(&self) -> Granularity {
        match (self.chapter, self.verses) {
            (Some(_), Some(_)) => Granularity::Verse,
            (Some(_), None) => Granularity::Chapter,
            _ => Granularity::Book,
        }
    }
}

impl std::fmt::Display for ReferenceQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self.chapter, self.verses) {
            (Some(chapter), Some(span)) => write!(f, "{} {}:{}", self.book, chapter, span),
            (Some(chapter), None) => write!(f, "{} {}", self.book, chapter),
            _ => write!(f, "{}", self.book),
        }
    }
}

/// A fully qualified verse locator used for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerseRef {
    pub book: String,
    pub chapter: u32,
    pub verse: u32,
}

impl VerseRef {
    #[must_use]
    pub fn new(book: impl Into<String>, chapter: u32, verse: u32) -> Self {
        Self {
            book: book.into(),
            chapter,
            verse,
        }
    }
}

impl std::fmt::Display for VerseRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}:{}", self.book, self.chapter, self.verse)
    }
}

/// Combine the first and last verse of a mapped passage into one display
/// string, collapsing whatever parts the endpoints share.
///
/// A chapter that maps to a single verse renders as "Genesis 1:1"; a range
/// within one chapter as "Genesis 1:1-5"; a range crossing chapters as
/// "Genesis 1:1-2:3"; and a range crossing books spells out both endpoints.
#[must_use]
pub fn format_ref_range(start: &VerseRef, end: &VerseRef) -> String {
    if start == end {
        return start.to_string();
    }
    if start.book == end.book && start.chapter == end.chapter {
        return format!("{} {}:{}-{}", start.book, start.chapter, start.verse, end.verse);
    }
    if start.book == end.book {
        return format!(
            "{} {}:{}-{}:{}",
            start.book, start.chapter, start.verse, end.chapter, end.verse
        );
    }
    format!("{start}-{end}")
}
