//! CLI integration tests using assert_cmd to exercise the actual binary.

use assert_cmd::Command;
use predicates::prelude::*;

fn hitparse() -> Command {
    Command::cargo_bin("hitparse").unwrap()
}

#[test]
fn cli_decodes_query_argument() {
    hitparse()
        .arg("en=page_view&tid=G-ABC123")
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""en":"page_view""#))
        .stdout(predicate::str::contains(r#""tid":"G-ABC123""#));
}

#[test]
fn cli_reads_payload_from_stdin() {
    hitparse()
        .write_stdin("?v=2&en=scroll")
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""en":"scroll""#));
}

#[test]
fn cli_pretty_prints_on_request() {
    hitparse()
        .arg("--pretty")
        .arg("en=page_view")
        .assert()
        .success()
        .stdout(predicate::str::contains("  \"en\": \"page_view\""));
}

#[test]
fn cli_surfaces_decode_error_on_stderr() {
    hitparse()
        .arg("no equals no url")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains(
            "Failed to decode payload: invalid input format",
        ));
}

#[test]
fn cli_emits_extracted_domain() {
    hitparse()
        .arg("dl=https%3A%2F%2Fshop.example.com%2Fcart")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            r#""_extracted_domain":"shop.example.com""#,
        ));
}

#[test]
fn cli_expands_dotted_keys_into_nested_json() {
    // Full-line assertion: the array must hang directly off "ep", with no
    // extra object layer wrapping it.
    hitparse()
        .arg("ep.items.0.id=SKU-1")
        .assert()
        .success()
        .stdout(predicate::str::diff(format!(
            "{}\n",
            r#"{"ep":{"items":[{"id":"SKU-1"}]}}"#
        )));
}
