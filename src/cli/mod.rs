//! Command-line interface for canon-xref.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **convert**: Resolve a scripture reference into the other canon
//! - **serve**: Start the interactive web interface
//!
//! ## Usage
//!
//! ```text
//! # Convert a single verse from the LDS canon
//! canon-xref convert "1 Nephi 3:7" --source lds
//!
//! # Whole-chapter and whole-book comparisons
//! canon-xref convert "Alma 5" --source lds
//! canon-xref convert "Alma" --source lds
//!
//! # JSON output for scripting
//! canon-xref convert "Genesis 1:1" --source rlds --format json
//!
//! # Start the web UI
//! canon-xref serve --port 8080 --open
//! ```

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod convert;

#[derive(Parser)]
#[command(name = "canon-xref")]
#[command(version)]
#[command(about = "Cross-reference scripture passages between the LDS and RLDS canons")]
#[command(
    long_about = "canon-xref looks up a verse, chapter, or book reference in one canon and finds the corresponding passage(s) in the other, using a precomputed cross-reference dataset.\n\nReferences are parsed leniently: \"1 Nephi 3:7\", \"1 ne 3:7\", and \"1  NEPHI  3:7\" are the same query. Chapter and verse divisions differ between the canons, so one verse may map to zero, one, or several counterparts."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Resolve a reference into the other canon
    Convert(convert::ConvertArgs),

    /// Start the web server
    Serve(ServeArgs),
}

#[derive(clap::Args)]
pub struct ServeArgs {
    /// Path to the scripture dataset
    #[arg(long, default_value = "scriptures.db")]
    pub database: PathBuf,

    /// Port to listen on
    #[arg(short, long, default_value = "8080")]
    pub port: u16,

    /// Address to bind to
    #[arg(short, long, default_value = "127.0.0.1")]
    pub address: String,

    /// Open browser automatically
    #[arg(long)]
    pub open: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
