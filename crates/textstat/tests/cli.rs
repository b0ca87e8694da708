//! End-to-end CLI integration tests
//!
//! These tests invoke the compiled binary as a subprocess to verify
//! that the CLI behaves correctly from a user's perspective.

use assert_cmd::Command;
use predicates::prelude::*;

/// Returns a Command configured to run our binary.
#[allow(deprecated)]
fn cmd() -> Command {
    Command::cargo_bin(env!("CARGO_PKG_NAME")).unwrap()
}

fn stdout_json(output: &std::process::Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).expect("stdout should be valid JSON")
}

// =============================================================================
// Help & Version
// =============================================================================

#[test]
fn help_flag_shows_usage() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("Commands:"))
        .stdout(predicate::str::contains("stats"));
}

#[test]
fn version_flag_shows_version() {
    cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn version_only_prints_bare_version() {
    cmd()
        .arg("--version-only")
        .assert()
        .success()
        .stdout(predicate::str::diff(format!(
            "{}\n",
            env!("CARGO_PKG_VERSION")
        )));
}

// =============================================================================
// Stats Command
// =============================================================================

#[test]
fn stats_json_from_file() {
    let tmp = tempfile::NamedTempFile::new().unwrap();
    std::fs::write(tmp.path(), "Hello world.\n\nThis is great!").unwrap();

    let output = cmd()
        .args(["stats", tmp.path().to_str().unwrap(), "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["chars_with_spaces"], 28);
    assert_eq!(json["chars_without_spaces"], 23);
    assert_eq!(json["word_count"], 6);
    assert_eq!(json["paragraph_count"], 2);
    assert_eq!(json["sentence_count"], 2);
    assert_eq!(json["reading_time"]["label"], "1 minute");
    assert_eq!(json["over_max"], false);
}

#[test]
fn stats_reads_stdin() {
    cmd()
        .args(["--color", "never", "stats"])
        .write_stdin("a   b\tc\n d")
        .assert()
        .success()
        .stdout(predicate::str::contains("Words:"))
        .stdout(predicate::str::is_match(r"Words:\s+4\n").unwrap());
}

#[test]
fn stats_dash_reads_stdin() {
    let output = cmd()
        .args(["stats", "-", "--json"])
        .write_stdin("")
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["word_count"], 0);
    assert_eq!(json["paragraph_count"], 0);
    assert_eq!(json["reading_time"]["label"], "0 minutes");
}

#[test]
fn stats_text_output_lists_every_statistic() {
    cmd()
        .args(["--color", "never", "stats"])
        .write_stdin("Hello world. How are you? Fine!")
        .assert()
        .success()
        .stdout(predicate::str::contains("Characters:"))
        .stdout(predicate::str::contains("Characters (no spaces):"))
        .stdout(predicate::str::is_match(r"Sentences:\s+3\n").unwrap())
        .stdout(predicate::str::is_match(r"Paragraphs:\s+1\n").unwrap())
        .stdout(predicate::str::contains("Reading time:"));
}

#[test]
fn stats_markdown_file_is_stripped() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("doc.md");
    std::fs::write(&path, "# Title\n\nOne two.\n\n```\nlet x = 1;\n```\n").unwrap();

    let output = cmd()
        .args(["stats", path.to_str().unwrap(), "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["word_count"], 3);
    assert_eq!(json["paragraph_count"], 2);
}

#[test]
fn stats_strip_markdown_flag_on_stdin() {
    let output = cmd()
        .args(["stats", "--strip-markdown", "--json"])
        .write_stdin("Some **bold** text.")
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["chars_with_spaces"], 15);
}

#[test]
fn stats_max_words_exceeded_fails() {
    cmd()
        .args(["stats", "--max-words", "2"])
        .write_stdin("one two three")
        .assert()
        .failure()
        .stderr(predicate::str::contains("3 words (max: 2)"));
}

#[test]
fn stats_max_words_within_limit_passes() {
    cmd()
        .args(["--color", "never", "stats", "--max-words", "5"])
        .write_stdin("one two three")
        .assert()
        .success()
        .stdout(predicate::str::contains("PASS:"));
}

#[test]
fn stats_max_words_from_env_config() {
    cmd()
        .env("TEXTSTAT_MAX_WORDS", "1")
        .args(["stats"])
        .write_stdin("one two")
        .assert()
        .failure()
        .stderr(predicate::str::contains("max: 1"));
}

#[test]
fn stats_missing_file_fails() {
    cmd()
        .args(["stats", "/nonexistent/file.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read"));
}

#[test]
fn stats_input_limit_enforced() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("textstat.toml");
    std::fs::write(&config_path, "max_input_bytes = 4\n").unwrap();

    cmd()
        .args(["--config", config_path.to_str().unwrap(), "stats"])
        .write_stdin("more than four bytes")
        .assert()
        .failure()
        .stderr(predicate::str::contains("input too large"));
}

#[test]
fn stats_disable_input_limit() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("textstat.toml");
    std::fs::write(
        &config_path,
        "max_input_bytes = 4\ndisable_input_limit = true\n",
    )
    .unwrap();

    cmd()
        .args(["--config", config_path.to_str().unwrap(), "stats"])
        .write_stdin("more than four bytes")
        .assert()
        .success();
}

// =============================================================================
// Live Command
// =============================================================================

#[test]
fn live_emits_update_per_line() {
    let output = cmd()
        .args(["live", "--json"])
        .write_stdin("Hello world.\n\nThis is great!\n")
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let updates: Vec<serde_json::Value> = stdout
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    assert_eq!(updates.len(), 4);
    assert_eq!(updates[0]["word_count"], 0);
    assert_eq!(updates[3]["word_count"], 6);
    assert_eq!(updates[3]["paragraph_count"], 2);
}

#[test]
fn live_clear_marker() {
    let output = cmd()
        .args(["live", "--json", "--clear-marker", "/clear"])
        .write_stdin("one two\n/clear\n")
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let last: serde_json::Value = serde_json::from_str(stdout.lines().last().unwrap()).unwrap();
    assert_eq!(last["word_count"], 0);
    assert_eq!(last["revision"], 2);
}

// =============================================================================
// Reading Time Command
// =============================================================================

#[test]
fn reading_time_labels() {
    for (words, label) in [
        ("0", "0 minutes\n"),
        ("200", "1 minute\n"),
        ("201", "2 minutes\n"),
        ("12000", "1 hour 0 minutes\n"),
        ("12201", "1 hour 2 minutes\n"),
    ] {
        cmd()
            .args(["reading-time", words])
            .assert()
            .success()
            .stdout(predicate::str::diff(label));
    }
}

#[test]
fn reading_time_json() {
    let output = cmd()
        .args(["reading-time", "12201", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["total_minutes"], 62);
    assert_eq!(json["hours"], 1);
    assert_eq!(json["minutes"], 2);
}

#[test]
fn reading_time_rejects_negative() {
    cmd()
        .args(["reading-time", "-5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}

// =============================================================================
// Info Command
// =============================================================================

#[test]
fn info_shows_package_name_and_version() {
    cmd()
        .arg("info")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_NAME")))
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn info_json_outputs_valid_json() {
    let output = cmd().args(["info", "--json"]).output().unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["name"], env!("CARGO_PKG_NAME"));
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    assert_eq!(json["config"]["words_per_minute"], 200);
}

// =============================================================================
// Global Flags
// =============================================================================

#[test]
fn quiet_flag_accepted() {
    cmd().args(["-q", "info"]).assert().success();
}

#[test]
fn multiple_verbose_flags_accepted() {
    cmd().args(["-vv", "info"]).assert().success();
}

#[test]
fn color_never_accepted() {
    cmd().args(["--color", "never", "info"]).assert().success();
}

#[test]
fn log_dir_env_writes_log_file() {
    let dir = tempfile::tempdir().unwrap();
    cmd()
        .env("TEXTSTAT_LOG_DIR", dir.path())
        .args(["-v", "info"])
        .assert()
        .success();
    assert!(dir.path().join("textstat.jsonl").is_file());
}

// =============================================================================
// Error Cases
// =============================================================================

#[test]
fn no_subcommand_shows_help() {
    cmd()
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Usage:"));
}

#[test]
fn invalid_subcommand_shows_error() {
    cmd()
        .arg("not-a-command")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}

#[test]
fn chdir_nonexistent_fails() {
    cmd()
        .args(["-C", "/nonexistent/path/that/does/not/exist", "info"])
        .assert()
        .failure();
}
