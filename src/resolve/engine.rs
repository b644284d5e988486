use thiserror::Error;
use tracing::debug;

use crate::core::reference::{ReferenceQuery, VerseSpan};
use crate::core::types::Corpus;
use crate::core::verse::{ChapterComparison, VersePair};
use crate::resolve::book::BookComparison;
use crate::store::db::{BookEntry, ScriptureStore, StoreError};
use crate::store::directory::BookDirectory;

#[derive(Error, Debug)]
pub enum ResolveError {
    /// The reference has a valid shape but names a passage absent from the
    /// source corpus. Distinct from a passage with no cross-reference,
    /// which is a valid empty result.
    #[error("{reference} was not found in the {corpus} canon")]
    NotFound { reference: String, corpus: Corpus },

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// A resolved comparison at whichever granularity the query asked for
#[derive(Debug)]
pub enum Resolution<'a> {
    /// Single verse or contiguous verse range
    Verses(Vec<VersePair>),
    /// One full chapter
    Chapter(ChapterComparison),
    /// Whole book, produced one chapter at a time
    Book(BookComparison<'a>),
}

/// Follows cross-references from one corpus into the other.
///
/// Borrows the store and directory; construction is free and all state is
/// per-query, so a resolver can be created per request.
pub struct Resolver<'a> {
    store: &'a ScriptureStore,
    directory: &'a BookDirectory,
}

impl<'a> Resolver<'a> {
    #[must_use]
    pub fn new(store: &'a ScriptureStore, directory: &'a BookDirectory) -> Self {
        Self { store, directory }
    }

    /// Resolve a query at its natural granularity.
    ///
    /// # Errors
    ///
    /// Returns `ResolveError::NotFound` when the referenced passage does not
    /// exist in the source corpus, or a store error if a query fails.
    pub fn resolve(&self, query: &ReferenceQuery) -> Result<Resolution<'a>, ResolveError> {
        match (query.chapter, query.verses) {
            (Some(chapter), Some(span)) => self
                .resolve_verses(query.corpus, &query.book, chapter, span)
                .map(Resolution::Verses),
            (Some(chapter), None) => self
                .resolve_chapter(query.corpus, &query.book, chapter)
                .map(Resolution::Chapter),
            _ => self
                .resolve_book(query.corpus, &query.book)
                .map(Resolution::Book),
        }
    }

    /// Resolve a single verse or verse range.
    ///
    /// Returns one [`VersePair`] per source verse present in the span, in
    /// ascending verse order; each pair carries zero or more target verses
    /// in cross-reference order.
    ///
    /// # Errors
    ///
    /// `NotFound` when the span matches no verse in the source corpus.
    pub fn resolve_verses(
        &self,
        corpus: Corpus,
        book: &str,
        chapter: u32,
        span: VerseSpan,
    ) -> Result<Vec<VersePair>, ResolveError> {
        let entry = self.book_entry(corpus, book, chapter, Some(span))?;
        let sources = self
            .store
            .verses_in_span(entry, corpus, chapter, span.start, span.end)?;

        if sources.is_empty() {
            return Err(self.not_found(corpus, book, chapter, Some(span)));
        }

        let mut pairs = Vec::with_capacity(sources.len());
        for (verse_id, source) in sources {
            let targets = self.store.cross_refs(verse_id, corpus.other())?;
            pairs.push(VersePair { source, targets });
        }

        debug!(
            corpus = %corpus,
            book,
            chapter,
            pairs = pairs.len(),
            "resolved verse query"
        );
        Ok(pairs)
    }

    /// Resolve a whole chapter into an ordered pair sequence covering every
    /// source verse exactly once.
    ///
    /// # Errors
    ///
    /// `NotFound` when the book or chapter does not exist in the corpus.
    pub fn resolve_chapter(
        &self,
        corpus: Corpus,
        book: &str,
        chapter: u32,
    ) -> Result<ChapterComparison, ResolveError> {
        let entry = self.book_entry(corpus, book, chapter, None)?;
        let chapter_id = self
            .store
            .chapter_id(entry.id, chapter)?
            .ok_or_else(|| self.not_found(corpus, book, chapter, None))?;

        let rows = self.store.chapter_rows(chapter_id, corpus.other())?;
        let pairs = group_rows(corpus, entry, chapter, rows);

        Ok(ChapterComparison {
            corpus,
            volume: entry.volume_title.clone(),
            book: entry.title.clone(),
            chapter,
            pairs,
        })
    }

    /// Resolve a whole book as a lazy chapter-at-a-time sequence.
    ///
    /// The returned iterator issues one chapter query per `next()` call, so
    /// the first chapter can render before the rest of the book is read.
    ///
    /// # Errors
    ///
    /// `NotFound` when the book does not exist in the corpus or has no
    /// chapters.
    pub fn resolve_book(
        &self,
        corpus: Corpus,
        book: &str,
    ) -> Result<BookComparison<'a>, ResolveError> {
        let entry = self
            .directory
            .resolve(corpus, book)
            .ok_or_else(|| ResolveError::NotFound {
                reference: book.to_string(),
                corpus,
            })?;

        let chapters = self.store.chapters_for_book(entry.id)?;
        if chapters.is_empty() {
            return Err(ResolveError::NotFound {
                reference: book.to_string(),
                corpus,
            });
        }

        Ok(BookComparison::new(
            self.store,
            corpus,
            entry.clone(),
            chapters,
        ))
    }

    fn book_entry(
        &self,
        corpus: Corpus,
        book: &str,
        chapter: u32,
        span: Option<VerseSpan>,
    ) -> Result<&'a BookEntry, ResolveError> {
        self.directory
            .resolve(corpus, book)
            .ok_or_else(|| self.not_found(corpus, book, chapter, span))
    }

    fn not_found(
        &self,
        corpus: Corpus,
        book: &str,
        chapter: u32,
        span: Option<VerseSpan>,
    ) -> ResolveError {
        let reference = match span {
            Some(span) => format!("{book} {chapter}:{span}"),
            None => format!("{book} {chapter}"),
        };
        ResolveError::NotFound { reference, corpus }
    }
}

/// Fold the flat comparison join into one [`VersePair`] per source verse,
/// preserving source order and the cross-reference order of targets.
pub(crate) fn group_rows(
    corpus: Corpus,
    entry: &BookEntry,
    chapter: u32,
    rows: Vec<crate::store::db::ChapterRow>,
) -> Vec<VersePair> {
    let mut pairs: Vec<VersePair> = Vec::new();

    for row in rows {
        let same_source = pairs
            .last()
            .is_some_and(|pair: &VersePair| pair.source.verse == row.source_verse);

        if !same_source {
            pairs.push(VersePair {
                source: crate::core::verse::VerseRecord {
                    corpus,
                    volume: entry.volume_title.clone(),
                    book: entry.title.clone(),
                    chapter,
                    verse: row.source_verse,
                    text: row.source_text,
                },
                targets: Vec::new(),
            });
        }

        if let (Some(target), Some(pair)) = (row.target, pairs.last_mut()) {
            pair.targets.push(target);
        }
    }

    pairs
}
