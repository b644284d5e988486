//! Read-only access to the scripture dataset.
//!
//! The dataset is a single SQLite file with five logical tables:
//!
//! | Table             | Contents                                        |
//! |-------------------|-------------------------------------------------|
//! | `corpus`          | The two canons (LDS, RLDS)                      |
//! | `volume`          | Volumes per corpus (Bible, Book of Mormon, ...) |
//! | `book`            | Books per volume, with optional short titles    |
//! | `chapter`         | Chapters per book                               |
//! | `verse`           | Verse text, keyed by chapter and verse number   |
//! | `cross_reference` | Verse-to-verse alignments between the corpora   |
//!
//! The store opens the file read-only; referential integrity of the
//! cross-reference table is a data-build-time guarantee, not something
//! checked at runtime.
//!
//! ## Example
//!
//! ```rust,no_run
//! use canon_xref::store::{BookDirectory, ScriptureStore};
//! use canon_xref::core::Corpus;
//! use std::path::Path;
//!
//! let store = ScriptureStore::open(Path::new("scriptures.db")).unwrap();
//! let directory = BookDirectory::load(&store).unwrap();
//!
//! for book in directory.books(Corpus::Lds) {
//!     println!("{}", book.title);
//! }
//! ```

pub mod db;
pub mod directory;

pub use db::{BookEntry, ChapterEntry, ChapterRow, ScriptureStore, StoreError, VolumeEntry};
pub use directory::BookDirectory;
