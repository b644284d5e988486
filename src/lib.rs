//! # canon-xref
//!
//! A library for cross-referencing scripture passages between the LDS and
//! RLDS (Community of Christ) canons.
//!
//! The two canons share most of their text, but chapter and verse divisions
//! differ throughout, so "the same verse" usually lives at a different
//! address in each. `canon-xref` resolves a reference in either canon to
//! its counterpart(s) in the other by following a precomputed
//! cross-reference table in a read-only SQLite dataset.
//!
//! ## Features
//!
//! - **Lenient reference parsing**: abbreviations, case, and spacing are
//!   normalized ("1 ne 3:7" works)
//! - **Three granularities**: single verse (or range), whole chapter, and
//!   whole book, the latter produced lazily chapter by chapter
//! - **Faithful alignment**: the cross-reference table is the single source
//!   of truth; one verse may map to zero, one, or several counterparts
//! - **Web and CLI front ends**: side-by-side browser views and a one-shot
//!   `convert` command
//!
//! ## Example
//!
//! ```rust,no_run
//! use canon_xref::core::Corpus;
//! use canon_xref::parsing::parse_reference;
//! use canon_xref::resolve::{Resolution, Resolver};
//! use canon_xref::store::{BookDirectory, ScriptureStore};
//! use std::path::Path;
//!
//! let store = ScriptureStore::open(Path::new("scriptures.db")).unwrap();
//! let directory = BookDirectory::load(&store).unwrap();
//!
//! let query = parse_reference("1 Nephi 3:7", Corpus::Lds, &directory).unwrap();
//! let resolver = Resolver::new(&store, &directory);
//!
//! if let Resolution::Verses(pairs) = resolver.resolve(&query).unwrap() {
//!     for pair in pairs {
//!         println!("{}: {}", pair.source, pair.source.text);
//!         for target in pair.targets {
//!             println!("  -> {}: {}", target, target.text);
//!         }
//!     }
//! }
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Fundamental types for verses, references, and comparisons
//! - [`store`]: Read-only SQLite dataset access and the book directory
//! - [`parsing`]: Free-text reference parsing and abbreviation handling
//! - [`resolve`]: The cross-reference resolver and lazy book iterator
//! - [`cli`]: Command-line interface implementation
//! - [`web`]: Web server with the side-by-side comparison views

pub mod cli;
pub mod core;
pub mod parsing;
pub mod resolve;
pub mod store;
pub mod web;

// Re-export commonly used types for convenience
pub use crate::core::reference::{ReferenceQuery, VerseSpan};
pub use crate::core::types::{Corpus, Granularity};
pub use crate::core::verse::{ChapterComparison, VersePair, VerseRecord};
pub use crate::parsing::reference::{parse_reference, ParseError};
pub use crate::resolve::engine::{Resolution, ResolveError, Resolver};
pub use crate::store::db::{ScriptureStore, StoreError};
pub use crate::store::directory::BookDirectory;
