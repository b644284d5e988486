//! Book name abbreviation handling.
//!
//! Maps common scripture book abbreviations to full, formal names across
//! the Standard Works (Old Testament, New Testament, Book of Mormon,
//! Doctrine and Covenants, Pearl of Great Price). Inputs are normalized to
//! lowercase with periods and spaces removed so one key matches many
//! variations ("1 Ne.", "1 ne", "1ne" all become "1ne"), with exceptions
//! for forms like "D&C" and "JS-H" that keep their punctuation.

/// Abbreviation table, normalized key to full book name.
///
/// The ambiguous bare "ne" deliberately maps to 1 Nephi.
static ABBREVIATIONS: &[(&str, &str)] = &[
    // Book of Mormon
    ("1ne", "1 Nephi"),
    ("1nephi", "1 Nephi"),
    ("nephi1", "1 Nephi"),
    ("2ne", "2 Nephi"),
    ("2nephi", "2 Nephi"),
    ("nephi2", "2 Nephi"),
    ("3ne", "3 Nephi"),
    ("3nephi", "3 Nephi"),
    ("nephi3", "3 Nephi"),
    ("4ne", "4 Nephi"),
    ("4nephi", "4 Nephi"),
    ("nephi4", "4 Nephi"),
    ("ne", "1 Nephi"),
    ("jac", "Jacob"),
    ("jacob", "Jacob"),
    ("enos", "Enos"),
    ("jar", "Jarom"),
    ("jarom", "Jarom"),
    ("omni", "Omni"),
    ("wofm", "Words of Mormon"),
    ("wordsofmormon", "Words of Mormon"),
    ("mos", "Mosiah"),
    ("mosiah", "Mosiah"),
    ("alma", "Alma"),
    ("hel", "Helaman"),
    ("helaman", "Helaman"),
    ("morm", "Mormon"),
    ("mormon", "Mormon"),
    ("eth", "Ether"),
    ("ether", "Ether"),
    ("moro", "Moroni"),
    ("mor", "Moroni"),
    ("mni", "Moroni"),
    ("moroni", "Moroni"),
    // Doctrine and Covenants
    ("d&c", "Doctrine and Covenants"),
    ("dc", "Doctrine and Covenants"),
    ("section", "Doctrine and Covenants"),
    ("od", "Official Declaration"),
    ("od1", "Official Declaration 1"),
    ("od2", "Official Declaration 2"),
    ("lof", "Lecture"),
    ("lecturesonfaith", "Lecture"),
    ("lecture", "Lecture"),
    ("lec", "Lecture"),
    // Pearl of Great Price
    ("moses", "Moses"),
    ("abr", "Abraham"),
    ("abraham", "Abraham"),
    ("js-m", "Joseph Smith--Matthew"),
    ("jsm", "Joseph Smith--Matthew"),
    ("js-h", "Joseph Smith--History"),
    ("jsh", "Joseph Smith--History"),
    ("josephsmithhistory", "Joseph Smith--History"),
    ("josephsmithhist", "Joseph Smith--History"),
    ("aoff", "Articles of Faith"),
    ("a of f", "Articles of Faith"),
    ("articlesoffaith", "Articles of Faith"),
    // Old Testament
    ("gen", "Genesis"),
    ("gn", "Genesis"),
    ("ex", "Exodus"),
    ("exod", "Exodus"),
    ("lev", "Leviticus"),
    ("lv", "Leviticus"),
    ("num", "Numbers"),
    ("nm", "Numbers"),
    ("deut", "Deuteronomy"),
    ("dt", "Deuteronomy"),
    ("josh", "Joshua"),
    ("judg", "Judges"),
    ("jg", "Judges"),
    ("ruth", "Ruth"),
    ("1sam", "1 Samuel"),
    ("1sm", "1 Samuel"),
    ("2sam", "2 Samuel"),
    ("2sm", "2 Samuel"),
    ("1kgs", "1 Kings"),
    ("1ki", "1 Kings"),
    ("2kgs", "2 Kings"),
    ("2ki", "2 Kings"),
    ("1chr", "1 Chronicles"),
    ("1ch", "1 Chronicles"),
    ("2chr", "2 Chronicles"),
    ("2ch", "2 Chronicles"),
    ("ezra", "Ezra"),
    ("neh", "Nehemiah"),
    ("est", "Esther"),
    ("esth", "Esther"),
    ("job", "Job"),
    ("ps", "Psalms"),
    ("psa", "Psalms"),
    ("pslm", "Psalms"),
    ("psalms", "Psalms"),
    ("prov", "Proverbs"),
    ("pr", "Proverbs"),
    ("eccl", "Ecclesiastes"),
    ("ecc", "Ecclesiastes"),
    ("song", "Song of Solomon"),
    ("songofsol", "Song of Solomon"),
    ("sos", "Song of Solomon"),
    ("isa", "Isaiah"),
    ("is", "Isaiah"),
    ("jer", "Jeremiah"),
    ("jr", "Jeremiah"),
    ("lam", "Lamentations"),
    ("ezek", "Ezekiel"),
    ("ez", "Ezekiel"),
    ("dan", "Daniel"),
    ("dn", "Daniel"),
    ("hos", "Hosea"),
    ("joel", "Joel"),
    ("amos", "Amos"),
    ("obad", "Obadiah"),
    ("ob", "Obadiah"),
    ("jonah", "Jonah"),
    ("jon", "Jonah"),
    ("mic", "Micah"),
    ("nah", "Nahum"),
    ("hab", "Habakkuk"),
    ("zeph", "Zephaniah"),
    ("hag", "Haggai"),
    ("zech", "Zechariah"),
    ("mal", "Malachi"),
    // New Testament
    ("matt", "Matthew"),
    ("mt", "Matthew"),
    ("mark", "Mark"),
    ("mk", "Mark"),
    ("luke", "Luke"),
    ("lk", "Luke"),
    ("john", "John"),
    ("jn", "John"),
    ("acts", "Acts"),
    ("rom", "Romans"),
    ("1cor", "1 Corinthians"),
    ("1co", "1 Corinthians"),
    ("2cor", "2 Corinthians"),
    ("2co", "2 Corinthians"),
    ("gal", "Galatians"),
    ("eph", "Ephesians"),
    ("phil", "Philippians"),
    ("php", "Philippians"),
    ("col", "Colossians"),
    ("1thes", "1 Thessalonians"),
    ("1th", "1 Thessalonians"),
    ("2thes", "2 Thessalonians"),
    ("2th", "2 Thessalonians"),
    ("1tim", "1 Timothy"),
    ("1tm", "1 Timothy"),
    ("2tim", "2 Timothy"),
    ("2tm", "2 Timothy"),
    ("titus", "Titus"),
    ("philem", "Philemon"),
    ("phm", "Philemon"),
    ("heb", "Hebrews"),
    ("jas", "James"),
    ("1pet", "1 Peter"),
    ("1pt", "1 Peter"),
    ("2pet", "2 Peter"),
    ("2pt", "2 Peter"),
    ("1john", "1 John"),
    ("1jn", "1 John"),
    ("2john", "2 John"),
    ("2jn", "2 John"),
    ("3john", "3 John"),
    ("3jn", "3 John"),
    ("jude", "Jude"),
    ("rev", "Revelation"),
];

/// Normalize a raw book name into a lookup key: lowercase, periods and
/// spaces stripped, ordinal words and suffixes reduced to digits. A few
/// punctuation-bearing forms (D&C, JS-M, JS-H, W of M, A of F) keep their
/// distinctive shape.
fn normalize_key(raw: &str) -> String {
    let upper = raw.to_uppercase();
    if upper == "D&C" || upper == "D. AND C." {
        return "d&c".to_string();
    }
    if upper.contains("JS-M") {
        return "js-m".to_string();
    }
    if upper.contains("JS-H") || upper.contains("JS-HIST") {
        return "js-h".to_string();
    }
    if upper.contains("W OF M") {
        return "wofm".to_string();
    }
    if upper.contains("A OF F") {
        return "a of f".to_string();
    }

    let mut key: String = raw
        .to_lowercase()
        .chars()
        .filter(|c| *c != '.' && !c.is_whitespace())
        .collect();
    for (word, digit) in [
        ("1st", "1"),
        ("first", "1"),
        ("2nd", "2"),
        ("second", "2"),
        ("3rd", "3"),
        ("third", "3"),
        ("4th", "4"),
        ("fourth", "4"),
    ] {
        key = key.replace(word, digit);
    }
    key
}

/// Expand a book abbreviation to its full, formal name.
///
/// Returns `None` when the input matches no known abbreviation; callers
/// fall back to matching the raw input directly against the book directory.
#[must_use]
pub fn canonical_book_name(raw: &str) -> Option<&'static str> {
    let key = normalize_key(raw);
    ABBREVIATIONS
        .iter()
        .find(|(abbrev, _)| *abbrev == key)
        .map(|(_, full)| *full)
}
