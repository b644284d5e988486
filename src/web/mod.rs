//! Web server for browser-based scripture comparison.
//!
//! This module provides the four views of the application using Axum, all
//! server-rendered:
//!
//! - `GET /` and `GET /convert` - Verse Converter (free-text reference in,
//!   aligned comparison out)
//! - `GET /chapter` - Chapter Explorer (corpus -> volume -> book -> chapter
//!   picker, dual-pane chapter read)
//! - `GET /book` - Full Book Comparator (whole-book scrolling comparison)
//! - `GET /links` - static list of external study resources
//! - `GET /api/convert` - JSON conversion results for scripting
//!
//! Navigation state is carried entirely in query parameters; the server
//! holds no per-session state. The dataset is opened once at startup and
//! shared read-only across requests.
//!
//! ## Starting the Server
//!
//! ```text
//! # Start on default port 8080
//! canon-xref serve
//!
//! # Custom port and auto-open browser
//! canon-xref serve --port 3000 --open
//!
//! # Point at a dataset elsewhere
//! canon-xref serve --database /data/scriptures.db
//! ```

pub mod render;
pub mod server;
