//! End-to-end resolution tests against a seeded dataset: parsing with a
//! loaded book directory, verse/chapter/book granularity dispatch, and the
//! alignment properties the comparison views depend on.

mod common;

use canon_xref::core::{Corpus, Granularity, VerseSpan};
use canon_xref::parsing::{parse_reference, ParseError};
use canon_xref::resolve::{Resolution, ResolveError, Resolver};
use canon_xref::store::{BookDirectory, ScriptureStore, StoreError};

fn open(fixture: &common::Fixture) -> (ScriptureStore, BookDirectory) {
    let store = ScriptureStore::open(&fixture.db_path).expect("open fixture");
    let directory = BookDirectory::load(&store).expect("load directory");
    (store, directory)
}

#[test]
fn test_missing_database_is_reported() {
    let err = ScriptureStore::open(std::path::Path::new("/no/such/scriptures.db"))
        .err()
        .expect("open should fail");
    assert!(matches!(err, StoreError::Missing(_)));
}

#[test]
fn test_parse_is_case_and_whitespace_insensitive() {
    let fixture = common::fixture();
    let (_store, directory) = open(&fixture);

    let canonical = parse_reference("1 Nephi 3:7", Corpus::Lds, &directory).unwrap();
    for variant in ["1 nephi 3:7", "1  Nephi  3:7", " 1 NEPHI 3:7 ", "1 ne. 3:7"] {
        let parsed = parse_reference(variant, Corpus::Lds, &directory).unwrap();
        assert_eq!(parsed, canonical, "variant {variant:?}");
    }

    assert_eq!(canonical.book, "1 Nephi");
    assert_eq!(canonical.chapter, Some(3));
    assert_eq!(canonical.verses, Some(VerseSpan::single(7)));
    assert_eq!(canonical.granularity(), Granularity::Verse);
}

#[test]
fn test_parse_granularity_shapes() {
    let fixture = common::fixture();
    let (_store, directory) = open(&fixture);

    let book = parse_reference("Alma", Corpus::Lds, &directory).unwrap();
    assert_eq!(book.granularity(), Granularity::Book);
    assert_eq!(book.chapter, None);

    let chapter = parse_reference("Alma 1", Corpus::Lds, &directory).unwrap();
    assert_eq!(chapter.granularity(), Granularity::Chapter);
    assert_eq!(chapter.chapter, Some(1));
    assert_eq!(chapter.verses, None);

    let span = parse_reference("Alma 1:1-3", Corpus::Lds, &directory).unwrap();
    assert_eq!(span.verses, Some(VerseSpan { start: 1, end: 3 }));
}

#[test]
fn test_parse_rejects_unknown_book() {
    let fixture = common::fixture();
    let (_store, directory) = open(&fixture);

    let err = parse_reference("Hezekiah 1:1", Corpus::Lds, &directory).unwrap_err();
    assert!(matches!(err, ParseError::UnknownBook(_)));
}

#[test]
fn test_parse_rejects_descending_range() {
    let fixture = common::fixture();
    let (_store, directory) = open(&fixture);

    let err = parse_reference("Alma 1:3-1", Corpus::Lds, &directory).unwrap_err();
    assert!(matches!(err, ParseError::InvalidRange(_)));
}

#[test]
fn test_verse_with_multiple_targets() {
    let fixture = common::fixture();
    let (store, directory) = open(&fixture);
    let resolver = Resolver::new(&store, &directory);

    let query = parse_reference("1 Nephi 3:7", Corpus::Lds, &directory).unwrap();
    let pairs = match resolver.resolve(&query).unwrap() {
        Resolution::Verses(pairs) => pairs,
        _ => panic!("expected verse resolution"),
    };

    assert_eq!(pairs.len(), 1);
    let pair = &pairs[0];
    assert_eq!(pair.source.book, "1 Nephi");
    assert_eq!(pair.source.chapter, 3);
    assert_eq!(pair.source.verse, 7);
    assert_eq!(pair.source.corpus, Corpus::Lds);

    // One LDS verse maps onto two consecutive RLDS verses, in stored order.
    let targets: Vec<(u32, u32)> = pair.targets.iter().map(|t| (t.chapter, t.verse)).collect();
    assert_eq!(targets, vec![(1, 65), (1, 66)]);
    assert!(pair.targets.iter().all(|t| t.corpus == Corpus::Rlds));
}

#[test]
fn test_round_trip_returns_to_source() {
    let fixture = common::fixture();
    let (store, directory) = open(&fixture);
    let resolver = Resolver::new(&store, &directory);

    let query = parse_reference("1 Nephi 3:7", Corpus::Lds, &directory).unwrap();
    let pairs = match resolver.resolve(&query).unwrap() {
        Resolution::Verses(pairs) => pairs,
        _ => panic!("expected verse resolution"),
    };

    for target in &pairs[0].targets {
        let back = parse_reference(
            &format!("{} {}:{}", target.book, target.chapter, target.verse),
            Corpus::Rlds,
            &directory,
        )
        .unwrap();
        let back_pairs = match resolver.resolve(&back).unwrap() {
            Resolution::Verses(pairs) => pairs,
            _ => panic!("expected verse resolution"),
        };
        assert!(
            back_pairs[0]
                .targets
                .iter()
                .any(|t| t.book == "1 Nephi" && t.chapter == 3 && t.verse == 7),
            "reverse lookup from {} {}:{} should reach the original verse",
            target.book,
            target.chapter,
            target.verse
        );
    }
}

#[test]
fn test_unmapped_verse_has_empty_targets() {
    let fixture = common::fixture();
    let (store, directory) = open(&fixture);
    let resolver = Resolver::new(&store, &directory);

    let query = parse_reference("1 Nephi 3:8", Corpus::Lds, &directory).unwrap();
    let pairs = match resolver.resolve(&query).unwrap() {
        Resolution::Verses(pairs) => pairs,
        _ => panic!("expected verse resolution"),
    };

    // An unmapped verse still resolves; its target list is just empty.
    assert_eq!(pairs.len(), 1);
    assert!(pairs[0].targets.is_empty());
    assert!(!pairs[0].has_cross_reference());
}

#[test]
fn test_nonexistent_verse_is_not_found() {
    let fixture = common::fixture();
    let (store, directory) = open(&fixture);
    let resolver = Resolver::new(&store, &directory);

    let query = parse_reference("1 Nephi 99:1", Corpus::Lds, &directory).unwrap();
    let err = resolver.resolve(&query).unwrap_err();
    assert!(matches!(err, ResolveError::NotFound { .. }));

    let query = parse_reference("1 Nephi 3:99", Corpus::Lds, &directory).unwrap();
    let err = resolver.resolve(&query).unwrap_err();
    assert!(matches!(err, ResolveError::NotFound { .. }));
}

#[test]
fn test_span_clips_to_existing_verses() {
    let fixture = common::fixture();
    let (store, directory) = open(&fixture);
    let resolver = Resolver::new(&store, &directory);

    // Alma 1 has verses 1-3; a span reaching past the end returns what exists.
    let query = parse_reference("Alma 1:2-9", Corpus::Lds, &directory).unwrap();
    let pairs = match resolver.resolve(&query).unwrap() {
        Resolution::Verses(pairs) => pairs,
        _ => panic!("expected verse resolution"),
    };

    let verses: Vec<u32> = pairs.iter().map(|p| p.source.verse).collect();
    assert_eq!(verses, vec![2, 3]);
}

#[test]
fn test_chapter_covers_every_verse_once_in_order() {
    let fixture = common::fixture();
    let (store, directory) = open(&fixture);
    let resolver = Resolver::new(&store, &directory);

    let query = parse_reference("Alma 1", Corpus::Lds, &directory).unwrap();
    let chapter = match resolver.resolve(&query).unwrap() {
        Resolution::Chapter(chapter) => chapter,
        _ => panic!("expected chapter resolution"),
    };

    assert_eq!(chapter.book, "Alma");
    assert_eq!(chapter.chapter, 1);
    let verses: Vec<u32> = chapter.pairs.iter().map(|p| p.source.verse).collect();
    assert_eq!(verses, vec![1, 2, 3]);
    assert!(chapter.pairs.iter().all(|p| p.targets.len() == 1));
}

#[test]
fn test_chapter_merges_multi_target_rows() {
    let fixture = common::fixture();
    let (store, directory) = open(&fixture);
    let resolver = Resolver::new(&store, &directory);

    let query = parse_reference("1 Nephi 3", Corpus::Lds, &directory).unwrap();
    let chapter = match resolver.resolve(&query).unwrap() {
        Resolution::Chapter(chapter) => chapter,
        _ => panic!("expected chapter resolution"),
    };

    // Two source verses: 3:7 with two targets, 3:8 with none. The join rows
    // for 3:7 must fold into a single pair.
    assert_eq!(chapter.verse_count(), 2);
    assert_eq!(chapter.pairs[0].source.verse, 7);
    assert_eq!(chapter.pairs[0].targets.len(), 2);
    assert_eq!(chapter.pairs[1].source.verse, 8);
    assert!(chapter.pairs[1].targets.is_empty());
}

#[test]
fn test_book_streams_chapters_in_order() {
    let fixture = common::fixture();
    let (store, directory) = open(&fixture);
    let resolver = Resolver::new(&store, &directory);

    let query = parse_reference("Alma", Corpus::Lds, &directory).unwrap();
    let mut book = match resolver.resolve(&query).unwrap() {
        Resolution::Book(book) => book,
        _ => panic!("expected book resolution"),
    };

    assert_eq!(book.book(), "Alma");
    assert_eq!(book.chapters_remaining(), 2);

    let first = book.next().expect("first chapter").unwrap();
    assert_eq!(first.chapter, 1);
    assert_eq!(first.pairs[0].source.verse, 1);
    assert_eq!(book.chapters_remaining(), 1);

    let second = book.next().expect("second chapter").unwrap();
    assert_eq!(second.chapter, 2);
    assert!(book.next().is_none());

    // The book total is exactly the sum of its chapter totals.
    assert_eq!(first.verse_count() + second.verse_count(), 5);
}

#[test]
fn test_book_resolution_works_in_both_directions() {
    let fixture = common::fixture();
    let (store, directory) = open(&fixture);
    let resolver = Resolver::new(&store, &directory);

    // RLDS Alma is one long chapter aligned against two LDS chapters.
    let query = parse_reference("Alma", Corpus::Rlds, &directory).unwrap();
    let book = match resolver.resolve(&query).unwrap() {
        Resolution::Book(book) => book,
        _ => panic!("expected book resolution"),
    };

    let chapters: Vec<_> = book.collect::<Result<_, _>>().unwrap();
    assert_eq!(chapters.len(), 1);
    assert_eq!(chapters[0].verse_count(), 5);

    let target_chapters: Vec<u32> = chapters[0]
        .pairs
        .iter()
        .flat_map(|p| p.targets.iter().map(|t| t.chapter))
        .collect();
    assert_eq!(target_chapters, vec![1, 1, 1, 2, 2]);
}

#[test]
fn test_unknown_chapter_number_is_not_found() {
    let fixture = common::fixture();
    let (store, directory) = open(&fixture);
    let resolver = Resolver::new(&store, &directory);

    let query = parse_reference("Alma 9", Corpus::Lds, &directory).unwrap();
    let err = resolver.resolve(&query).unwrap_err();
    assert!(matches!(err, ResolveError::NotFound { .. }));
}
