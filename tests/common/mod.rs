//! Shared test fixture: a small scripture dataset with both corpora,
//! misaligned chapter/verse divisions, and every cross-reference shape the
//! resolver has to handle (one-to-one, one-to-many, unmapped).

use rusqlite::Connection;
use std::path::PathBuf;
use tempfile::TempDir;

pub struct Fixture {
    // Held so the directory outlives the test
    _dir: TempDir,
    pub db_path: PathBuf,
}

const SCHEMA: &str = "
CREATE TABLE corpus (
    id INTEGER PRIMARY KEY,
    short_name TEXT NOT NULL,
    full_name TEXT
);
CREATE TABLE volume (
    id INTEGER PRIMARY KEY,
    corpus_id INTEGER NOT NULL REFERENCES corpus(id),
    title TEXT NOT NULL
);
CREATE TABLE book (
    id INTEGER PRIMARY KEY,
    volume_id INTEGER NOT NULL REFERENCES volume(id),
    title TEXT NOT NULL,
    short_title TEXT
);
CREATE TABLE chapter (
    id INTEGER PRIMARY KEY,
    book_id INTEGER NOT NULL REFERENCES book(id),
    chapter_number INTEGER NOT NULL
);
CREATE TABLE verse (
    id INTEGER PRIMARY KEY,
    chapter_id INTEGER NOT NULL REFERENCES chapter(id),
    verse_number INTEGER NOT NULL,
    text TEXT NOT NULL
);
CREATE TABLE cross_reference (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    verse_id INTEGER NOT NULL REFERENCES verse(id),
    cross_ref_verse_id INTEGER NOT NULL REFERENCES verse(id)
);
CREATE INDEX idx_verse_chapter ON verse(chapter_id, verse_number);
CREATE INDEX idx_cross_reference_verse ON cross_reference(verse_id);
";

const DATA: &str = "
INSERT INTO corpus (id, short_name, full_name) VALUES
    (1, 'LDS', 'LDS Standard Works'),
    (2, 'RLDS', 'RLDS Canon');

INSERT INTO volume (id, corpus_id, title) VALUES
    (1, 1, 'Book of Mormon'),
    (2, 2, 'Book of Mormon');

INSERT INTO book (id, volume_id, title, short_title) VALUES
    (1, 1, '1 Nephi', '1 Ne.'),
    (2, 1, 'Alma', NULL),
    (3, 2, '1 Nephi', '1 Ne.'),
    (4, 2, 'Alma', NULL);

INSERT INTO chapter (id, book_id, chapter_number) VALUES
    (1, 1, 1),
    (2, 1, 3),
    (3, 2, 1),
    (4, 2, 2),
    (5, 3, 1),
    (6, 4, 1);

-- LDS 1 Nephi 1:1-2, 3:7-8
INSERT INTO verse (id, chapter_id, verse_number, text) VALUES
    (1, 1, 1, 'I, Nephi, having been born of goodly parents'),
    (2, 1, 2, 'Yea, I make a record of my proceedings in my days'),
    (3, 2, 7, 'I will go and do the things which the Lord hath commanded'),
    (4, 2, 8, 'And it came to pass that when my father had heard these words');

-- LDS Alma 1:1-3, 2:1-2
INSERT INTO verse (id, chapter_id, verse_number, text) VALUES
    (5, 3, 1, 'Now it came to pass that in the first year'),
    (6, 3, 2, 'And it came to pass that in the first year of the reign'),
    (7, 3, 3, 'And he had gone about among the people'),
    (8, 4, 1, 'And it came to pass in the commencement of the fifth year'),
    (9, 4, 2, 'And it came to pass that the people assembled themselves');

-- RLDS 1 Nephi 1:1-2 and the long-chapter verses 65-66
INSERT INTO verse (id, chapter_id, verse_number, text) VALUES
    (10, 5, 1, 'I, Nephi, having been born of goodly parents'),
    (11, 5, 2, 'Yea, I make a record of my proceedings in my days'),
    (12, 5, 65, 'I will go and do the things which the Lord hath commanded'),
    (13, 5, 66, 'For I know the Lord giveth no commandments unto the children of men');

-- RLDS Alma 1:1-5 (LDS chapters 1 and 2 fold into one RLDS chapter)
INSERT INTO verse (id, chapter_id, verse_number, text) VALUES
    (14, 6, 1, 'Now it came to pass that in the first year'),
    (15, 6, 2, 'And it came to pass that in the first year of the reign'),
    (16, 6, 3, 'And he had gone about among the people'),
    (17, 6, 4, 'And it came to pass in the commencement of the fifth year'),
    (18, 6, 5, 'And it came to pass that the people assembled themselves');

-- Symmetric alignments; LDS 1 Nephi 3:7 spans two RLDS verses, and
-- LDS 1 Nephi 3:8 is deliberately unmapped.
INSERT INTO cross_reference (verse_id, cross_ref_verse_id) VALUES
    (1, 10), (2, 11),
    (3, 12), (3, 13),
    (10, 1), (11, 2),
    (12, 3), (13, 3),
    (5, 14), (6, 15), (7, 16), (8, 17), (9, 18),
    (14, 5), (15, 6), (16, 7), (17, 8), (18, 9);
";

/// Build the fixture dataset in a temporary directory and return its path.
pub fn fixture() -> Fixture {
    let dir = TempDir::new().expect("create temp dir");
    let db_path = dir.path().join("scriptures.db");

    let conn = Connection::open(&db_path).expect("create fixture db");
    conn.execute_batch(SCHEMA).expect("create schema");
    conn.execute_batch(DATA).expect("seed data");
    drop(conn);

    Fixture {
        _dir: dir,
        db_path,
    }
}
