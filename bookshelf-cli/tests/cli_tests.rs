//! Integration tests for the Bookshelf CLI
//!
//! These only exercise argument handling; nothing here reaches the network.

use assert_cmd::Command;
use predicates::prelude::*;

fn bookshelf() -> Command {
    Command::cargo_bin("bookshelf").unwrap()
}

#[test]
fn test_help() {
    bookshelf()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("search"))
        .stdout(predicate::str::contains("book"))
        .stdout(predicate::str::contains("author"))
        .stdout(predicate::str::contains("new"));
}

#[test]
fn test_version() {
    bookshelf()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("bookshelf"));
}

#[test]
fn test_search_help() {
    bookshelf()
        .args(["search", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Search OpenLibrary"))
        .stdout(predicate::str::contains("--filter"))
        .stdout(predicate::str::contains("--limit"))
        .stdout(predicate::str::contains("--offset"));
}

#[test]
fn test_search_requires_filter() {
    bookshelf()
        .args(["search", "harry"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--filter"));
}

#[test]
fn test_search_rejects_unknown_filter() {
    bookshelf()
        .args(["search", "harry", "--filter", "movies"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a valid filter"));
}

#[test]
fn test_search_rejects_negative_limit() {
    bookshelf()
        .args(["search", "harry", "--filter", "books", "--limit", "-1"])
        .assert()
        .failure();
}

#[test]
fn test_book_requires_key() {
    bookshelf()
        .arg("book")
        .assert()
        .failure()
        .stderr(predicate::str::contains("<KEY>"));
}

#[test]
fn test_new_rejects_zero_limit() {
    bookshelf()
        .args(["new", "--limit", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("at least 1"));
}

#[test]
fn test_unreachable_upstream_fails() {
    bookshelf()
        .args([
            "--base-url",
            "http://127.0.0.1:9",
            "author",
            "OL23919A",
        ])
        .env("BOOKSHELF_UPSTREAM_TIMEOUT_SECS", "2")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to fetch author OL23919A"));
}
