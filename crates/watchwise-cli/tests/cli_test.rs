#![allow(clippy::unwrap_used)]
#![allow(missing_docs)]

use assert_cmd::cargo_bin_cmd;
use predicates::prelude::predicate;

#[test]
fn test_movies_help() {
    // Arrange & Act & Assert
    let mut cmd = cargo_bin_cmd!("watchwise");
    cmd.args(["movies", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--page"));
}

#[test]
fn test_tv_help() {
    // Arrange & Act & Assert
    let mut cmd = cargo_bin_cmd!("watchwise");
    cmd.args(["tv", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--page"));
}

#[test]
fn test_details_help() {
    // Arrange & Act & Assert
    let mut cmd = cargo_bin_cmd!("watchwise");
    cmd.args(["details", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--id"));
}

#[test]
fn test_details_missing_id() {
    // Arrange & Act & Assert
    let mut cmd = cargo_bin_cmd!("watchwise");
    cmd.args(["details"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--id"));
}

#[test]
fn test_search_missing_query() {
    // Arrange & Act & Assert
    let mut cmd = cargo_bin_cmd!("watchwise");
    cmd.args(["search"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--query"));
}

#[test]
fn test_unknown_subcommand_fails() {
    // Arrange & Act & Assert
    let mut cmd = cargo_bin_cmd!("watchwise");
    cmd.args(["channels"]).assert().failure();
}

#[test]
fn test_movies_without_api_key_fails() {
    // Arrange: empty config dir, so no API key is available.
    let dir = tempfile::tempdir().unwrap();

    // Act & Assert
    let mut cmd = cargo_bin_cmd!("watchwise");
    cmd.args(["movies", "--dir", dir.path().to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("API key is not configured"));
}

#[test]
fn test_search_reports_no_results_without_network() {
    // Arrange & Act & Assert: search never calls the catalog, so a dummy
    // key is enough for the command to succeed offline.
    let mut cmd = cargo_bin_cmd!("watchwise");
    cmd.args(["search", "--query", "dune", "--api-key", "dummy"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No results"));
}

#[test]
fn test_search_rejects_unknown_kind() {
    // Arrange & Act & Assert
    let mut cmd = cargo_bin_cmd!("watchwise");
    cmd.args([
        "search",
        "--query",
        "dune",
        "--kind",
        "documentary",
        "--api-key",
        "dummy",
    ])
    .assert()
    .failure()
    .stderr(predicate::str::contains("unknown media kind"));
}
