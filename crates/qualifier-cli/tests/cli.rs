//! Integration tests for the qualifier binary.
//!
//! These run the real executable with a clean logging and config environment.

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;

/// Get a command for running qualifier with no ambient configuration.
fn qualifier() -> Command {
    let mut cmd = Command::cargo_bin("qualifier").unwrap();
    cmd.env_remove("RUST_LOG")
        .env_remove("QUALIFIER_CONFIG")
        .env_remove("QUALIFIER_MAX_QUOTE_LENGTH")
        .env_remove("QUALIFIER_OUTPUT_FORMAT")
        .env_remove("QUALIFIER_LOG_LEVEL");
    cmd
}

#[test]
fn run_list_on_fresh_store_prints_nothing() {
    qualifier()
        .args(["run", "quote list"])
        .assert()
        .success()
        .stdout("");
}

#[test]
fn run_creation_succeeds_silently() {
    qualifier()
        .args(["run", r#"quote uwu "Hello Royal""#])
        .assert()
        .success()
        .stdout("");
}

#[test]
fn run_reads_command_from_stdin() {
    qualifier()
        .arg("run")
        .write_stdin("quote list\n")
        .assert()
        .success();
}

#[test]
fn run_rejects_invalid_command() {
    qualifier()
        .args(["run", "unquote \"x\""])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid command"));
}

#[test]
fn run_rejects_missing_text() {
    qualifier()
        .args(["run", "quote piglatin"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("needs quoted text"));
}

#[test]
fn run_rejects_unmodified_uwu() {
    qualifier()
        .args(["run", r#"quote uwu "kitten mittens""#])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Quote was not modified"));
}

#[test]
fn run_rejects_long_quote() {
    let command = format!("quote \"{}\"", "a".repeat(51));
    qualifier()
        .args(["run", &command])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Quote is too long"));
}

#[test]
fn env_override_changes_length_limit() {
    qualifier()
        .env("QUALIFIER_MAX_QUOTE_LENGTH", "5")
        .args(["run", r#"quote "123456""#])
        .assert()
        .failure()
        .stderr(predicate::str::contains("maximum is 5"));
}

#[test]
fn repl_session_adds_then_lists() {
    let session = concat!(
        "quote uwu \"Hello Royal\"\n",
        "quote piglatin \"apple pie\"\n",
        "\n",
        "quote uwu \"Hello Royal\"\n",
        "quote uwu \"kitten\"\n",
        "quote list\n",
    );

    qualifier()
        .arg("repl")
        .write_stdin(session)
        .assert()
        .success()
        .stdout("- Hewwo Woyaw\n- Appleway iepay\n")
        .stderr(predicate::str::contains("Quote has already been added previously"))
        .stderr(predicate::str::contains("Quote was not modified"));
}

#[test]
fn repl_lists_as_json() {
    qualifier()
        .args(["--json", "repl"])
        .write_stdin("quote \"one\"\nquote “two”\nquote list\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"one\"").and(predicate::str::contains("\"two\"")));
}

#[test]
fn config_file_sets_bullet() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[output]\nbullet = \"*\"").unwrap();

    qualifier()
        .arg("--config")
        .arg(file.path())
        .arg("repl")
        .write_stdin("quote \"starred\"\nquote list\n")
        .assert()
        .success()
        .stdout("* starred\n");
}

#[test]
fn missing_config_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    qualifier()
        .arg("--config")
        .arg(dir.path().join("missing.toml"))
        .args(["run", "quote list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration file not found"));
}

#[test]
fn render_piglatin() {
    qualifier()
        .args(["render", "--mode", "piglatin", "yellow"])
        .assert()
        .success()
        .stdout("Ellowyay\n");
}

#[test]
fn render_reads_stdin() {
    qualifier()
        .args(["render", "-m", "uwu"])
        .write_stdin("uwu\n")
        .assert()
        .success()
        .stdout("u-uwu\n");
}

#[test]
fn render_partial_uwu_warns() {
    qualifier()
        .args([
            "render",
            "--mode",
            "uwu",
            "glory u u u u u u u u u u u u u u u u u u u u u",
        ])
        .assert()
        .success()
        .stdout("gwowy u u u u u u u u u u u u u u u u u u u u u\n")
        .stderr(predicate::str::contains("partially transformed"));
}

#[test]
fn render_rejects_unknown_mode() {
    qualifier()
        .args(["render", "--mode", "shout", "hi"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown variant mode"));
}

#[test]
fn config_default_prints_template() {
    qualifier()
        .args(["config", "--default"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[limits]"))
        .stdout(predicate::str::contains("max_quote_length = 50"));
}

#[test]
fn config_shows_effective_values() {
    qualifier()
        .env("QUALIFIER_MAX_QUOTE_LENGTH", "70")
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("max_quote_length = 70"));
}
