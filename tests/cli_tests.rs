//! CLI tests for the convert subcommand, run against a seeded dataset.

mod common;

use assert_cmd::Command;
use predicates::prelude::*;

fn canon_xref() -> Command {
    Command::cargo_bin("canon-xref").expect("binary exists")
}

#[test]
fn test_convert_verse_text_output() {
    let fixture = common::fixture();

    canon_xref()
        .arg("convert")
        .arg("1 Nephi 3:7")
        .arg("--source")
        .arg("lds")
        .arg("--database")
        .arg(&fixture.db_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("LDS"))
        .stdout(predicate::str::contains("RLDS"))
        .stdout(predicate::str::contains(
            "I will go and do the things which the Lord hath commanded",
        ))
        .stdout(predicate::str::contains(
            "For I know the Lord giveth no commandments",
        ));
}

#[test]
fn test_convert_accepts_abbreviated_lowercase_input() {
    let fixture = common::fixture();

    canon_xref()
        .arg("convert")
        .arg("1 ne 3:7")
        .arg("--database")
        .arg(&fixture.db_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("RLDS"));
}

#[test]
fn test_convert_unmapped_verse_reports_no_counterpart() {
    let fixture = common::fixture();

    canon_xref()
        .arg("convert")
        .arg("1 Nephi 3:8")
        .arg("--database")
        .arg(&fixture.db_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("no direct counterpart"));
}

#[test]
fn test_convert_whole_chapter() {
    let fixture = common::fixture();

    canon_xref()
        .arg("convert")
        .arg("Alma 1")
        .arg("--database")
        .arg(&fixture.db_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("=== Alma 1 ==="));
}

#[test]
fn test_convert_whole_book_prints_every_chapter() {
    let fixture = common::fixture();

    canon_xref()
        .arg("convert")
        .arg("Alma")
        .arg("--database")
        .arg(&fixture.db_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("=== Alma 1 ==="))
        .stdout(predicate::str::contains("=== Alma 2 ==="));
}

#[test]
fn test_convert_json_output() {
    let fixture = common::fixture();

    let output = canon_xref()
        .arg("convert")
        .arg("1 Nephi 3:7")
        .arg("--format")
        .arg("json")
        .arg("--database")
        .arg(&fixture.db_path)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let value: serde_json::Value = serde_json::from_slice(&output).expect("valid JSON");
    assert_eq!(value["query"]["book"], "1 Nephi");
    assert_eq!(value["query"]["corpus"], "lds");

    let pairs = value["pairs"].as_array().expect("pairs array");
    assert_eq!(pairs.len(), 1);
    assert_eq!(pairs[0]["targets"].as_array().map(Vec::len), Some(2));
}

#[test]
fn test_convert_not_found_fails() {
    let fixture = common::fixture();

    canon_xref()
        .arg("convert")
        .arg("1 Nephi 99:1")
        .arg("--database")
        .arg(&fixture.db_path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("was not found in the LDS canon"));
}

#[test]
fn test_convert_unknown_book_fails() {
    let fixture = common::fixture();

    canon_xref()
        .arg("convert")
        .arg("Hezekiah 1:1")
        .arg("--database")
        .arg(&fixture.db_path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot parse reference"));
}

#[test]
fn test_convert_missing_database_fails() {
    canon_xref()
        .arg("convert")
        .arg("1 Nephi 3:7")
        .arg("--database")
        .arg("/no/such/scriptures.db")
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot open dataset"));
}

#[test]
fn test_verbose_flag_explains_parse() {
    let fixture = common::fixture();

    canon_xref()
        .arg("convert")
        .arg("1 Nephi 3:7")
        .arg("--verbose")
        .arg("--database")
        .arg(&fixture.db_path)
        .assert()
        .success()
        .stderr(predicate::str::contains("Parsed as 1 Nephi 3:7"));
}
