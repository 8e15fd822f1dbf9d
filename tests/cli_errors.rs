use assert_fs::prelude::*;
use predicates::prelude::*;
use predicates::str::contains;

fn cmd() -> assert_cmd::Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("shorts-adapter");
    cmd.env_remove("GOOGLE_API_KEY")
        .env_remove("GEMINI_MODEL")
        .env_remove("GEMINI_BASE_URL")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn missing_api_key_is_fatal() {
    cmd()
        .write_stdin("some transcript text")
        .assert()
        .failure()
        .code(1)
        .stderr(contains("GOOGLE_API_KEY"))
        .stdout(predicates::str::is_empty());
}

#[test]
fn missing_api_key_is_fatal_even_for_empty_input() {
    cmd().write_stdin("").assert().failure().code(1);
}

#[test]
fn zero_max_words_is_invalid() {
    cmd()
        .env("GOOGLE_API_KEY", "k")
        .args(["--max-words", "0"])
        .write_stdin("a b")
        .assert()
        .failure()
        .code(2);
}

#[test]
fn chunks_only_conflicts_with_output() {
    cmd()
        .args(["--chunks-only", "--output", "out.txt"])
        .write_stdin("a b")
        .assert()
        .failure()
        .code(2);
}

#[test]
fn unreadable_input_file_errors() {
    let dir = assert_fs::TempDir::new().unwrap();
    cmd()
        .current_dir(&dir)
        .env("GOOGLE_API_KEY", "k")
        .arg("missing.txt")
        .assert()
        .failure()
        .code(1)
        .stderr(contains("missing.txt"));
    dir.child("missing.txt").assert(predicate::path::missing());
}
