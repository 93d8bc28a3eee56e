//! Integration tests for the tatekumi CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const BOOK_JSON: &str = r#"{
    "title": "吾輩は猫である",
    "chapters": [
        {
            "title": "一",
            "text": "吾輩は猫である。名前はまだ無い。",
            "annotations": [
                {"word": "吾輩", "reading": "わがはい", "definition": "I (archaic)"}
            ]
        },
        {"title": "二", "text": "どこで生れたかとんと見当がつかぬ。"}
    ]
}"#;

fn write_book(dir: &TempDir, name: &str, content: &str) -> String {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path.display().to_string()
}

#[test]
fn test_paginate_json_book() {
    let dir = TempDir::new().unwrap();
    let book = write_book(&dir, "neko.json", BOOK_JSON);

    let mut cmd = Command::cargo_bin("tatekumi").unwrap();
    cmd.arg("paginate").arg(&book).arg("--quiet");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("=== page 1 (chapter 0) ==="))
        .stdout(predicate::str::contains("吾輩(わがはい)は猫である。"))
        .stdout(predicate::str::contains("page(s)"));
}

#[test]
fn test_paginate_plain_text() {
    let dir = TempDir::new().unwrap();
    let book = write_book(&dir, "plain.txt", "私は猫です。ただの猫です。");

    let mut cmd = Command::cargo_bin("tatekumi").unwrap();
    cmd.arg("paginate").arg(&book).arg("--quiet");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("私は猫です。ただの猫です。"));
}

#[test]
fn test_paginate_json_format() {
    let dir = TempDir::new().unwrap();
    let book = write_book(&dir, "neko.json", BOOK_JSON);

    let mut cmd = Command::cargo_bin("tatekumi").unwrap();
    cmd.arg("paginate")
        .arg(&book)
        .arg("--quiet")
        .arg("-f")
        .arg("json");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"pages\""))
        .stdout(predicate::str::contains("\"ruby\""))
        .stdout(predicate::str::contains("わがはい"));
}

#[test]
fn test_paginate_rejects_zero_capacity() {
    let dir = TempDir::new().unwrap();
    let book = write_book(&dir, "plain.txt", "本文。");

    let mut cmd = Command::cargo_bin("tatekumi").unwrap();
    cmd.arg("paginate")
        .arg(&book)
        .arg("--quiet")
        .arg("-c")
        .arg("0");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Configuration error"))
        .stderr(predicate::str::contains("chars_per_line=0"));
}

#[test]
fn test_paginate_missing_file() {
    let mut cmd = Command::cargo_bin("tatekumi").unwrap();
    cmd.arg("paginate").arg("/no/such/book.json").arg("--quiet");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("File not found"));
}

#[test]
fn test_validate_clean_book() {
    let dir = TempDir::new().unwrap();
    let book = write_book(&dir, "neko.json", BOOK_JSON);

    let mut cmd = Command::cargo_bin("tatekumi").unwrap();
    cmd.arg("validate").arg(&book).arg("--quiet");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("2 chapter(s)"))
        .stdout(predicate::str::contains("no findings"));
}

#[test]
fn test_validate_reports_findings() {
    let dir = TempDir::new().unwrap();
    let book = write_book(
        &dir,
        "broken.json",
        r#"{"chapters": [{"text": "本文。", "annotations": [{"word": "猫", "reading": "ねこ"}]}]}"#,
    );

    let mut cmd = Command::cargo_bin("tatekumi").unwrap();
    cmd.arg("validate").arg(&book).arg("--quiet");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("finding:"))
        .stdout(predicate::str::contains("猫"));
}

#[test]
fn test_output_to_file() {
    let dir = TempDir::new().unwrap();
    let book = write_book(&dir, "plain.txt", "私は猫です。");
    let out = dir.path().join("pages.txt");

    let mut cmd = Command::cargo_bin("tatekumi").unwrap();
    cmd.arg("paginate")
        .arg(&book)
        .arg("--quiet")
        .arg("-o")
        .arg(&out);

    cmd.assert().success();
    let written = fs::read_to_string(&out).unwrap();
    assert!(written.contains("私は猫です。"));
}
