use serde::{Deserialize, Serialize};

use crate::core::reference::VerseRef;
use crate::core::types::Corpus;

/// A single verse as stored in the dataset.
///
/// Records are loaded read-only from the store and never mutated; each is
/// unique per (corpus, volume, book, chapter, verse).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerseRecord {
    pub corpus: Corpus,
    pub volume: String,
    pub book: String,
    pub chapter: u32,
    pub verse: u32,
    pub text: String,
}

impl VerseRecord {
    /// Display locator for this verse
    #[must_use]
    pub fn verse_ref(&self) -> VerseRef {
        VerseRef::new(self.book.clone(), self.chapter, self.verse)
    }
}

impl std::fmt::Display for VerseRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}:{}", self.book, self.chapter, self.verse)
    }
}

/// One source verse paired with its cross-referenced counterparts.
///
/// `targets` is empty when no cross-reference exists for the source verse;
/// that is a valid display state ("no direct counterpart"), not an error.
/// Target order is the cross-reference table's natural key order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VersePair {
    pub source: VerseRecord,
    pub targets: Vec<VerseRecord>,
}

impl VersePair {
    #[must_use]
    pub fn has_cross_reference(&self) -> bool {
        !self.targets.is_empty()
    }
}

/// An ordered chapter-level comparison: every verse of the source chapter
/// exactly once, in ascending verse order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChapterComparison {
    pub corpus: Corpus,
    pub volume: String,
    pub book: String,
    pub chapter: u32,
    pub pairs: Vec<VersePair>,
}

impl ChapterComparison {
    /// Number of source verses in the chapter
    #[must_use]
    pub fn verse_count(&self) -> usize {
        self.pairs.len()
    }
}
