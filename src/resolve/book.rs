use crate::core::types::Corpus;
use crate::core::verse::ChapterComparison;
use crate::resolve::engine::{group_rows, ResolveError};
use crate::store::db::{BookEntry, ChapterEntry, ScriptureStore};

/// A whole-book comparison, produced lazily one chapter per `next()` call.
///
/// Only the chapter list is held in memory; verse text is fetched when the
/// chapter is actually consumed, so rendering a large book stays bounded
/// and the first chapter is available immediately.
#[derive(Debug)]
pub struct BookComparison<'a> {
    store: &'a ScriptureStore,
    corpus: Corpus,
    entry: BookEntry,
    chapters: std::vec::IntoIter<ChapterEntry>,
    remaining: usize,
}

impl<'a> BookComparison<'a> {
    pub(crate) fn new(
        store: &'a ScriptureStore,
        corpus: Corpus,
        entry: BookEntry,
        chapters: Vec<ChapterEntry>,
    ) -> Self {
        let remaining = chapters.len();
        Self {
            store,
            corpus,
            entry,
            chapters: chapters.into_iter(),
            remaining,
        }
    }

    /// Canonical title of the book being compared
    #[must_use]
    pub fn book(&self) -> &str {
        &self.entry.title
    }

    /// Volume the book belongs to
    #[must_use]
    pub fn volume(&self) -> &str {
        &self.entry.volume_title
    }

    #[must_use]
    pub fn corpus(&self) -> Corpus {
        self.corpus
    }

    /// Chapters not yet produced
    #[must_use]
    pub fn chapters_remaining(&self) -> usize {
        self.remaining
    }
}

impl Iterator for BookComparison<'_> {
    type Item = Result<ChapterComparison, ResolveError>;

    fn next(&mut self) -> Option<Self::Item> {
        let chapter = self.chapters.next()?;
        self.remaining -= 1;

        let result = self
            .store
            .chapter_rows(chapter.id, self.corpus.other())
            .map(|rows| {
                let pairs = group_rows(self.corpus, &self.entry, chapter.number, rows);
                ChapterComparison {
                    corpus: self.corpus,
                    volume: self.entry.volume_title.clone(),
                    book: self.entry.title.clone(),
                    chapter: chapter.number,
                    pairs,
                }
            })
            .map_err(ResolveError::from);

        Some(result)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}
