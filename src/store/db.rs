use rusqlite::{params, Connection, OpenFlags, OptionalExtension};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};
use thiserror::Error;
use tracing::debug;

use crate::core::types::Corpus;
use crate::core::verse::VerseRecord;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Dataset file not found: {0}")]
    Missing(PathBuf),

    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("Dataset 'corpus' table is missing the {0} entry")]
    MissingCorpus(&'static str),
}

/// A volume within a corpus (e.g. "Book of Mormon")
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VolumeEntry {
    pub id: i64,
    pub title: String,
}

/// A book within a volume
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookEntry {
    pub id: i64,
    pub volume_id: i64,
    pub volume_title: String,
    pub title: String,
    pub short_title: Option<String>,
}

/// A chapter within a book
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChapterEntry {
    pub id: i64,
    pub number: u32,
}

/// One row of the chapter comparison join: a source verse and at most one
/// cross-referenced target verse. Source verses with several targets repeat
/// across consecutive rows; verses with none carry `target: None`.
#[derive(Debug, Clone)]
pub struct ChapterRow {
    pub source_verse: u32,
    pub source_text: String,
    pub target: Option<VerseRecord>,
}

const SQL_CORPUS_IDS: &str = "
SELECT id, short_name FROM corpus WHERE short_name IN ('LDS', 'RLDS')
";

const SQL_VOLUMES: &str = "
SELECT id, title FROM volume WHERE corpus_id = ?1 ORDER BY id
";

const SQL_BOOKS_FOR_CORPUS: &str = "
SELECT b.id, b.volume_id, v.title, b.title, b.short_title
FROM book b
JOIN volume v ON b.volume_id = v.id
WHERE v.corpus_id = ?1
ORDER BY b.id
";

const SQL_BOOKS_FOR_VOLUME: &str = "
SELECT b.id, b.volume_id, v.title, b.title, b.short_title
FROM book b
JOIN volume v ON b.volume_id = v.id
WHERE b.volume_id = ?1
ORDER BY b.id
";

const SQL_CHAPTERS_FOR_BOOK: &str = "
SELECT id, chapter_number FROM chapter WHERE book_id = ?1 ORDER BY chapter_number
";

const SQL_CHAPTER_ID: &str = "
SELECT id FROM chapter WHERE book_id = ?1 AND chapter_number = ?2
";

const SQL_VERSES_IN_SPAN: &str = "
SELECT v.id, c.chapter_number, v.verse_number, v.text
FROM verse v
JOIN chapter c ON v.chapter_id = c.id
WHERE c.book_id = ?1
  AND c.chapter_number = ?2
  AND v.verse_number BETWEEN ?3 AND ?4
ORDER BY v.verse_number
";

const SQL_CROSS_REFS: &str = "
SELECT vol_t.title, b_t.title, c_t.chapter_number, v_t.verse_number, v_t.text
FROM cross_reference cr
JOIN verse v_t ON cr.cross_ref_verse_id = v_t.id
JOIN chapter c_t ON v_t.chapter_id = c_t.id
JOIN book b_t ON c_t.book_id = b_t.id
JOIN volume vol_t ON b_t.volume_id = vol_t.id
WHERE cr.verse_id = ?1
  AND vol_t.corpus_id = ?2
ORDER BY cr.id
";

const SQL_CHAPTER_ROWS: &str = "
SELECT
    v_s.verse_number,
    v_s.text,
    vol_t.title,
    b_t.title,
    c_t.chapter_number,
    v_t.verse_number,
    v_t.text
FROM verse v_s
LEFT JOIN cross_reference cr ON v_s.id = cr.verse_id
LEFT JOIN verse v_t ON cr.cross_ref_verse_id = v_t.id
LEFT JOIN chapter c_t ON v_t.chapter_id = c_t.id
LEFT JOIN book b_t ON c_t.book_id = b_t.id
LEFT JOIN volume vol_t ON b_t.volume_id = vol_t.id
WHERE v_s.chapter_id = ?1
ORDER BY v_s.id, cr.id
";

/// Read-only access to the scripture dataset.
///
/// The connection is opened read-only once at startup; every query is a
/// short indexed lookup, so a single mutex-guarded connection is shared by
/// all sessions. No writes occur after the data build.
pub struct ScriptureStore {
    conn: Mutex<Connection>,
    corpus_ids: HashMap<Corpus, i64>,
}

impl ScriptureStore {
    /// Open the dataset file read-only and resolve the corpus ids.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Missing` if the file does not exist,
    /// `StoreError::Sqlite` if it cannot be opened or queried, and
    /// `StoreError::MissingCorpus` if the `corpus` table lacks the LDS or
    /// RLDS entry. All of these are fatal at startup.
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        if !path.exists() {
            return Err(StoreError::Missing(path.to_path_buf()));
        }

        let conn = Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )?;

        let corpus_ids = load_corpus_ids(&conn)?;
        debug!(path = %path.display(), "opened scripture dataset");

        Ok(Self {
            conn: Mutex::new(conn),
            corpus_ids,
        })
    }

    fn conn(&self) -> MutexGuard<'_, Connection> {
        // The connection is read-only; a poisoned lock cannot have left it
        // in a bad state, so recover instead of propagating the panic.
        self.conn.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Row id of a corpus in the `corpus` table
    #[must_use]
    pub fn corpus_id(&self, corpus: Corpus) -> i64 {
        // Populated for both corpora in open()
        self.corpus_ids[&corpus]
    }

    /// All volumes of a corpus, in canonical order
    pub fn volumes(&self, corpus: Corpus) -> Result<Vec<VolumeEntry>, StoreError> {
        let conn = self.conn();
        let mut stmt = conn.prepare_cached(SQL_VOLUMES)?;
        let rows = stmt.query_map(params![self.corpus_id(corpus)], |row| {
            Ok(VolumeEntry {
                id: row.get(0)?,
                title: row.get(1)?,
            })
        })?;
        Ok(rows.collect::<Result<_, _>>()?)
    }

    /// All books of a corpus across volumes, in canonical order
    pub fn books_for_corpus(&self, corpus: Corpus) -> Result<Vec<BookEntry>, StoreError> {
        let conn = self.conn();
        let mut stmt = conn.prepare_cached(SQL_BOOKS_FOR_CORPUS)?;
        let rows = stmt.query_map(params![self.corpus_id(corpus)], map_book_row)?;
        Ok(rows.collect::<Result<_, _>>()?)
    }

    /// All books of one volume, in canonical order
    pub fn books_for_volume(&self, volume_id: i64) -> Result<Vec<BookEntry>, StoreError> {
        let conn = self.conn();
        let mut stmt = conn.prepare_cached(SQL_BOOKS_FOR_VOLUME)?;
        let rows = stmt.query_map(params![volume_id], map_book_row)?;
        Ok(rows.collect::<Result<_, _>>()?)
    }

    /// All chapters of a book, ascending
    pub fn chapters_for_book(&self, book_id: i64) -> Result<Vec<ChapterEntry>, StoreError> {
        let conn = self.conn();
        let mut stmt = conn.prepare_cached(SQL_CHAPTERS_FOR_BOOK)?;
        let rows = stmt.query_map(params![book_id], |row| {
            Ok(ChapterEntry {
                id: row.get(0)?,
                number: row.get(1)?,
            })
        })?;
        Ok(rows.collect::<Result<_, _>>()?)
    }

    /// Look up a chapter's row id within a book
    pub fn chapter_id(&self, book_id: i64, chapter: u32) -> Result<Option<i64>, StoreError> {
        let conn = self.conn();
        let mut stmt = conn.prepare_cached(SQL_CHAPTER_ID)?;
        Ok(stmt
            .query_row(params![book_id, chapter], |row| row.get(0))
            .optional()?)
    }

    /// Source verses of a book's chapter within an inclusive verse range,
    /// with their dataset row ids, ascending by verse number.
    pub fn verses_in_span(
        &self,
        book: &BookEntry,
        corpus: Corpus,
        chapter: u32,
        first: u32,
        last: u32,
    ) -> Result<Vec<(i64, VerseRecord)>, StoreError> {
        let conn = self.conn();
        let mut stmt = conn.prepare_cached(SQL_VERSES_IN_SPAN)?;
        let rows = stmt.query_map(params![book.id, chapter, first, last], |row| {
            let id: i64 = row.get(0)?;
            let record = VerseRecord {
                corpus,
                volume: book.volume_title.clone(),
                book: book.title.clone(),
                chapter: row.get(1)?,
                verse: row.get(2)?,
                text: row.get(3)?,
            };
            Ok((id, record))
        })?;
        Ok(rows.collect::<Result<_, _>>()?)
    }

    /// Target verses cross-referenced from a source verse, in the
    /// cross-reference table's natural key order.
    pub fn cross_refs(
        &self,
        source_verse_id: i64,
        target_corpus: Corpus,
    ) -> Result<Vec<VerseRecord>, StoreError> {
        let conn = self.conn();
        let mut stmt = conn.prepare_cached(SQL_CROSS_REFS)?;
        let rows = stmt.query_map(
            params![source_verse_id, self.corpus_id(target_corpus)],
            |row| {
                Ok(VerseRecord {
                    corpus: target_corpus,
                    volume: row.get(0)?,
                    book: row.get(1)?,
                    chapter: row.get(2)?,
                    verse: row.get(3)?,
                    text: row.get(4)?,
                })
            },
        )?;
        Ok(rows.collect::<Result<_, _>>()?)
    }

    /// The full comparison join for one source chapter: every source verse
    /// in order, left-joined against its cross-referenced target verses.
    pub fn chapter_rows(
        &self,
        chapter_id: i64,
        target_corpus: Corpus,
    ) -> Result<Vec<ChapterRow>, StoreError> {
        let conn = self.conn();
        let mut stmt = conn.prepare_cached(SQL_CHAPTER_ROWS)?;
        let rows = stmt.query_map(params![chapter_id], |row| {
            let target_book: Option<String> = row.get(3)?;
            let target = match target_book {
                Some(book) => Some(VerseRecord {
                    corpus: target_corpus,
                    volume: row.get::<_, Option<String>>(2)?.unwrap_or_default(),
                    book,
                    chapter: row.get(4)?,
                    verse: row.get(5)?,
                    text: row.get(6)?,
                }),
                None => None,
            };
            Ok(ChapterRow {
                source_verse: row.get(0)?,
                source_text: row.get(1)?,
                target,
            })
        })?;
        Ok(rows.collect::<Result<_, _>>()?)
    }
}

impl std::fmt::Debug for ScriptureStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScriptureStore")
            .field("corpus_ids", &self.corpus_ids)
            .finish_non_exhaustive()
    }
}

fn map_book_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<BookEntry> {
    Ok(BookEntry {
        id: row.get(0)?,
        volume_id: row.get(1)?,
        volume_title: row.get(2)?,
        title: row.get(3)?,
        short_title: row.get(4)?,
    })
}

fn load_corpus_ids(conn: &Connection) -> Result<HashMap<Corpus, i64>, StoreError> {
    let mut stmt = conn.prepare(SQL_CORPUS_IDS)?;
    let rows = stmt.query_map([], |row| {
        let id: i64 = row.get(0)?;
        let short_name: String = row.get(1)?;
        Ok((id, short_name))
    })?;

    let mut ids = HashMap::new();
    for row in rows {
        let (id, short_name) = row?;
        if let Some(corpus) = Corpus::from_short_name(&short_name) {
            ids.insert(corpus, id);
        }
    }

    if !ids.contains_key(&Corpus::Lds) {
        return Err(StoreError::MissingCorpus("LDS"));
    }
    if !ids.contains_key(&Corpus::Rlds) {
        return Err(StoreError::MissingCorpus("RLDS"));
    }
    Ok(ids)
}
