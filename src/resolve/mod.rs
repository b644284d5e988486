//! Cross-reference resolution between the two canons.
//!
//! This module turns a structured [`ReferenceQuery`](crate::core::ReferenceQuery)
//! into aligned source/target verse pairs:
//!
//! - [`Resolver`]: entry point, one method per granularity plus a dispatcher
//! - [`Resolution`]: the granularity-shaped result
//! - [`BookComparison`]: lazy chapter-at-a-time iterator for book queries
//!
//! ## Semantics
//!
//! Source verses always come back in natural ascending (chapter, verse)
//! order. Target verses keep the cross-reference table's key order, with no
//! deduplication or inferred alignment: the table is the single source of
//! truth. A source verse with no mapping yields an empty target list, which
//! is a valid display state, not an error; a reference that names a missing
//! passage yields [`ResolveError::NotFound`].
//!
//! ## Example
//!
//! ```rust,no_run
//! use canon_xref::core::{Corpus, VerseSpan};
//! use canon_xref::resolve::Resolver;
//! use canon_xref::store::{BookDirectory, ScriptureStore};
//! use std::path::Path;
//!
//! let store = ScriptureStore::open(Path::new("scriptures.db")).unwrap();
//! let directory = BookDirectory::load(&store).unwrap();
//! let resolver = Resolver::new(&store, &directory);
//!
//! let pairs = resolver
//!     .resolve_verses(Corpus::Lds, "1 Nephi", 3, VerseSpan::single(7))
//!     .unwrap();
//! for pair in &pairs {
//!     println!("{} -> {} target(s)", pair.source, pair.targets.len());
//! }
//! ```

pub mod book;
pub mod engine;

pub use book::BookComparison;
pub use engine::{Resolution, ResolveError, Resolver};
