use std::path::PathBuf;

use anyhow::Context;
use clap::Args;

use crate::cli::OutputFormat;
use crate::core::types::Corpus;
use crate::core::verse::{ChapterComparison, VersePair};
use crate::parsing::reference::parse_reference;
use crate::resolve::engine::{Resolution, Resolver};
use crate::store::db::ScriptureStore;
use crate::store::directory::BookDirectory;

#[derive(Args)]
pub struct ConvertArgs {
    /// Scripture reference, e.g. "1 Nephi 3:7", "Alma 5", or "Alma"
    #[arg(required = true)]
    pub reference: String,

    /// Canon the reference belongs to
    #[arg(short, long, value_enum, default_value = "lds")]
    pub source: Corpus,

    /// Path to the scripture dataset
    #[arg(long, default_value = "scriptures.db")]
    pub database: PathBuf,
}

/// Execute convert subcommand
///
/// # Errors
///
/// Returns an error if the dataset cannot be opened, the reference cannot
/// be parsed, or the passage is not found in the source canon.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: ConvertArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let store = ScriptureStore::open(&args.database)
        .with_context(|| format!("cannot open dataset {}", args.database.display()))?;
    let directory = BookDirectory::load(&store)?;

    let query = parse_reference(&args.reference, args.source, &directory)
        .with_context(|| format!("cannot parse reference '{}'", args.reference))?;

    if verbose {
        eprintln!("Parsed as {} ({} query)", query, query.granularity());
    }

    let resolver = Resolver::new(&store, &directory);
    match resolver.resolve(&query)? {
        Resolution::Verses(pairs) => match format {
            OutputFormat::Text => print_pairs(&pairs, args.source),
            OutputFormat::Json => print_json(&serde_json::json!({
                "query": query,
                "pairs": pairs,
            }))?,
        },
        Resolution::Chapter(chapter) => match format {
            OutputFormat::Text => print_chapter(&chapter, args.source),
            OutputFormat::Json => print_json(&serde_json::json!({
                "query": query,
                "chapter": chapter,
            }))?,
        },
        Resolution::Book(book) => match format {
            OutputFormat::Text => {
                // Chapters stream one at a time; nothing is buffered
                for chapter in book {
                    print_chapter(&chapter?, args.source);
                }
            }
            OutputFormat::Json => {
                let chapters: Result<Vec<ChapterComparison>, _> = book.collect();
                print_json(&serde_json::json!({
                    "query": query,
                    "chapters": chapters?,
                }))?;
            }
        },
    }

    Ok(())
}

fn print_chapter(chapter: &ChapterComparison, source: Corpus) {
    println!("=== {} {} ===", chapter.book, chapter.chapter);
    print_pairs(&chapter.pairs, source);
}

fn print_pairs(pairs: &[VersePair], source: Corpus) {
    let target = source.other();
    for pair in pairs {
        println!("{:<5}{}", source.short_name(), pair.source);
        println!("     {}", pair.source.text);
        if pair.targets.is_empty() {
            println!("{:<5}no direct counterpart", target.short_name());
        } else {
            for verse in &pair.targets {
                println!("{:<5}{}", target.short_name(), verse);
                println!("     {}", verse.text);
            }
        }
        println!();
    }
}

fn print_json(value: &serde_json::Value) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
