//! Free-text scripture reference parsing.
//!
//! Converts strings like `"1 Nephi 3:7"` into a structured
//! [`ReferenceQuery`](crate::core::ReferenceQuery) for the resolver.
//! Parsing is case-insensitive and whitespace-tolerant, and expands the
//! common abbreviations for every book of the Standard Works before
//! matching against the corpus's canonical book directory.
//!
//! ## Example
//!
//! ```rust,no_run
//! use canon_xref::core::Corpus;
//! use canon_xref::parsing::parse_reference;
//! use canon_xref::store::{BookDirectory, ScriptureStore};
//! use std::path::Path;
//!
//! let store = ScriptureStore::open(Path::new("scriptures.db")).unwrap();
//! let directory = BookDirectory::load(&store).unwrap();
//!
//! let query = parse_reference("1 ne 3:7", Corpus::Lds, &directory).unwrap();
//! assert_eq!(query.book, "1 Nephi");
//! ```

pub mod abbrev;
pub mod reference;

pub use abbrev::canonical_book_name;
pub use reference::{parse_reference, ParseError};
