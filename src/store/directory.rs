use std::collections::HashMap;

use crate::core::types::Corpus;
use crate::store::db::{BookEntry, ScriptureStore, StoreError};

/// The canonical book directory, loaded once from the dataset at startup.
///
/// The parser resolves normalized book names against this directory; the
/// navigation views use it to list books in canonical order. Lookup keys
/// are uppercased titles and short titles, so matching is case-insensitive.
#[derive(Debug)]
pub struct BookDirectory {
    books: HashMap<Corpus, Vec<BookEntry>>,
    by_name: HashMap<(Corpus, String), usize>,
}

impl BookDirectory {
    /// Load the directory for both corpora.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the book listing queries fail.
    pub fn load(store: &ScriptureStore) -> Result<Self, StoreError> {
        let mut books = HashMap::new();
        let mut by_name = HashMap::new();

        for corpus in [Corpus::Lds, Corpus::Rlds] {
            let entries = store.books_for_corpus(corpus)?;
            for (index, entry) in entries.iter().enumerate() {
                by_name.insert((corpus, entry.title.to_uppercase()), index);
                if let Some(short) = &entry.short_title {
                    // Titles win over short titles on collision
                    by_name
                        .entry((corpus, short.to_uppercase()))
                        .or_insert(index);
                }
            }
            books.insert(corpus, entries);
        }

        Ok(Self { books, by_name })
    }

    /// Resolve a book name (title or short title, case-insensitive) within
    /// a corpus.
    #[must_use]
    pub fn resolve(&self, corpus: Corpus, name: &str) -> Option<&BookEntry> {
        let index = *self.by_name.get(&(corpus, name.to_uppercase()))?;
        Some(&self.books[&corpus][index])
    }

    /// All books of a corpus in canonical order
    #[must_use]
    pub fn books(&self, corpus: Corpus) -> &[BookEntry] {
        // Both corpora are populated in load()
        &self.books[&corpus]
    }
}
