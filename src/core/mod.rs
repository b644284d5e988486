//! Core data types for scripture cross-referencing.
//!
//! This module provides the fundamental types used throughout the library:
//!
//! - [`Corpus`]: which of the two canons a passage belongs to
//! - [`VerseRecord`]: a single verse loaded from the dataset
//! - [`ReferenceQuery`]: a parsed, structured scripture reference
//! - [`VersePair`], [`ChapterComparison`]: aligned comparison results
//! - [`VerseRef`], [`format_ref_range`]: display formatting for locators
//!
//! ## Reference Granularity
//!
//! A [`ReferenceQuery`] carries its own granularity, derived from which
//! parts the user supplied:
//!
//! | Input              | Granularity |
//! |--------------------|-------------|
//! | `Alma`             | Book        |
//! | `Alma 5`           | Chapter     |
//! | `Alma 5:14`        | Verse       |
//! | `Alma 5:14-16`     | Verse range |

pub mod reference;
pub mod types;
pub mod verse;

pub use reference::{format_ref_range, ReferenceQuery, VerseRef, VerseSpan};
pub use types::{Corpus, Granularity};
pub use verse::{ChapterComparison, VersePair, VerseRecord};
