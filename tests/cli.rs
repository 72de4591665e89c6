//! CLI integration tests using assert_cmd.
//!
//! Most tests use `--catalog test-catalog/topics.toml` to point at the in-repo
//! fixture. Every test overrides `$HOME` with a temp dir so the real config
//! file is never read or written.

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::{Path, PathBuf};

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("test-catalog")
        .join(name)
}

fn test_catalog() -> PathBuf {
    fixture("topics.toml")
}

#[allow(deprecated)] // cargo_bin_cmd! macro has compile-time issues; cargo_bin works fine
fn topics(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("topics").expect("binary exists");
    cmd.env("HOME", home).env_remove("RUST_LOG");
    cmd
}

fn stdout_of(cmd: &mut Command) -> String {
    let output = cmd.output().expect("run topics");
    assert!(output.status.success(), "command failed: {output:?}");
    String::from_utf8(output.stdout).expect("utf-8 stdout")
}

// ── Search ───────────────────────────────────────────────────────────

#[test]
fn search_exact_name_ranks_first() {
    let home = tempfile::tempdir().unwrap();
    let out = stdout_of(
        topics(home.path())
            .args(["search", "react", "--catalog"])
            .arg(test_catalog()),
    );

    assert!(out.contains("Found 2 topics"), "{out}");
    let react = out.find("React [").expect("React listed");
    let next = out.find("Next.js [").expect("Next.js listed");
    assert!(react < next, "{out}");
}

#[test]
fn search_two_letter_prefix() {
    let home = tempfile::tempdir().unwrap();
    topics(home.path())
        .args(["search", "py", "--catalog"])
        .arg(test_catalog())
        .assert()
        .success()
        .stdout(predicate::str::contains("Python"));
}

#[test]
fn search_short_query_explains() {
    let home = tempfile::tempdir().unwrap();
    topics(home.path())
        .args(["search", " p ", "--catalog"])
        .arg(test_catalog())
        .assert()
        .success()
        .stdout(predicate::str::contains("Query too short"));
}

#[test]
fn search_no_results() {
    let home = tempfile::tempdir().unwrap();
    topics(home.path())
        .args(["search", "xyznotfound", "--catalog"])
        .arg(test_catalog())
        .assert()
        .success()
        .stdout(predicate::str::contains("No topics found."));
}

#[test]
fn search_limit_flag() {
    let home = tempfile::tempdir().unwrap();
    topics(home.path())
        .args(["search", "react", "--limit", "1", "--catalog"])
        .arg(test_catalog())
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Found 1 topic:")
                .and(predicate::str::contains("React"))
                .and(predicate::str::contains("Next.js").not()),
        );
}

#[test]
fn search_json_has_no_scores() {
    let home = tempfile::tempdir().unwrap();
    let out = stdout_of(
        topics(home.path())
            .args(["search", "react", "--json", "--catalog"])
            .arg(test_catalog()),
    );

    let value: serde_json::Value = serde_json::from_str(&out).expect("valid JSON");
    let items = value.as_array().expect("JSON array");
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["name"], "React");
    assert_eq!(items[0]["category"], "Web Development");
    for item in items {
        assert!(item.get("score").is_none());
        assert!(item["keywords"].is_array());
    }
}

#[test]
fn search_category_filter() {
    let home = tempfile::tempdir().unwrap();
    topics(home.path())
        .args(["search", "learning", "--catalog"])
        .arg(test_catalog())
        .assert()
        .success()
        .stdout(predicate::str::contains("Machine Learning"));

    topics(home.path())
        .args([
            "search",
            "learning",
            "--category",
            "web development",
            "--catalog",
        ])
        .arg(test_catalog())
        .assert()
        .success()
        .stdout(predicate::str::contains("No topics found."));
}

#[test]
fn search_difficulty_filter() {
    let home = tempfile::tempdir().unwrap();
    topics(home.path())
        .args(["search", "data", "--difficulty", "BEGINNER", "--catalog"])
        .arg(test_catalog())
        .assert()
        .success()
        .stdout(
            predicate::str::contains("SQL").and(predicate::str::contains("Machine Learning").not()),
        );
}

#[test]
fn search_multiple_catalogs() {
    let home = tempfile::tempdir().unwrap();
    topics(home.path())
        .args(["search", "k8s", "--catalog"])
        .arg(test_catalog())
        .arg("--catalog")
        .arg(fixture("extra.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Kubernetes"));
}

#[test]
fn search_builtin_catalog_by_default() {
    let home = tempfile::tempdir().unwrap();
    topics(home.path())
        .args(["search", "machine learning"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Machine Learning")
                .and(predicate::str::contains("Deep Learning")),
        );
}

// ── Suggest ──────────────────────────────────────────────────────────

#[test]
fn suggest_count() {
    let home = tempfile::tempdir().unwrap();
    topics(home.path())
        .args(["suggest", "--count", "3", "--catalog"])
        .arg(test_catalog())
        .assert()
        .success()
        .stdout(predicate::str::contains("Found 3 topics"));
}

#[test]
fn suggest_count_larger_than_catalog() {
    let home = tempfile::tempdir().unwrap();
    topics(home.path())
        .args(["suggest", "--count", "100", "--catalog"])
        .arg(test_catalog())
        .assert()
        .success()
        .stdout(predicate::str::contains("Found 6 topics"));
}

#[test]
fn suggest_seed_is_reproducible() {
    let home = tempfile::tempdir().unwrap();
    let run = || {
        stdout_of(
            topics(home.path())
                .args(["suggest", "--seed", "7", "--json", "--catalog"])
                .arg(test_catalog()),
        )
    };
    let first = run();
    assert_eq!(first, run());

    let value: serde_json::Value = serde_json::from_str(&first).expect("valid JSON");
    assert_eq!(value.as_array().expect("JSON array").len(), 6);
}

// ── Browse ───────────────────────────────────────────────────────────

#[test]
fn categories_lists_with_counts() {
    let home = tempfile::tempdir().unwrap();
    topics(home.path())
        .args(["categories", "--catalog"])
        .arg(test_catalog())
        .assert()
        .success()
        .stdout(
            predicate::str::contains("5 categories (6 topics)")
                .and(predicate::str::contains("Web Development (2)")),
        );
}

#[test]
fn list_by_category() {
    let home = tempfile::tempdir().unwrap();
    topics(home.path())
        .args(["list", "--category", "web development", "--catalog"])
        .arg(test_catalog())
        .assert()
        .success()
        .stdout(
            predicate::str::contains("React")
                .and(predicate::str::contains("Next.js"))
                .and(predicate::str::contains("Python").not()),
        );
}

#[test]
fn list_by_difficulty() {
    let home = tempfile::tempdir().unwrap();
    topics(home.path())
        .args(["list", "--difficulty", "advanced", "--catalog"])
        .arg(test_catalog())
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Found 1 topic:")
                .and(predicate::str::contains("Dynamic Programming")),
        );
}

#[test]
fn list_unknown_category_is_empty() {
    let home = tempfile::tempdir().unwrap();
    topics(home.path())
        .args(["list", "--category", "Cooking", "--catalog"])
        .arg(test_catalog())
        .assert()
        .success()
        .stdout(predicate::str::contains("No topics found."));
}

#[test]
fn info_shows_topic_details() {
    let home = tempfile::tempdir().unwrap();
    topics(home.path())
        .args(["info", "react", "--catalog"])
        .arg(test_catalog())
        .assert()
        .success()
        .stdout(
            predicate::str::contains("React")
                .and(predicate::str::contains("category"))
                .and(predicate::str::contains("Web Development"))
                .and(predicate::str::contains("related"))
                .and(predicate::str::contains("Next.js")),
        );
}

#[test]
fn info_not_found() {
    let home = tempfile::tempdir().unwrap();
    topics(home.path())
        .args(["info", "Cobol", "--catalog"])
        .arg(test_catalog())
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

// ── Validate ─────────────────────────────────────────────────────────

#[test]
fn validate_clean_catalog() {
    let home = tempfile::tempdir().unwrap();
    topics(home.path())
        .arg("validate")
        .arg(test_catalog())
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Validation passed")
                .and(predicate::str::contains("warning").not()),
        );
}

#[test]
fn validate_reports_warnings() {
    let home = tempfile::tempdir().unwrap();
    topics(home.path())
        .arg("validate")
        .arg(fixture("duplicates.toml"))
        .assert()
        .success()
        .stdout(
            predicate::str::contains("duplicates the name")
                .and(predicate::str::contains("Expert"))
                .and(predicate::str::contains("duplicate keywords"))
                .and(predicate::str::contains("Validation passed")),
        );
}

#[test]
fn validate_rejects_invalid_topic() {
    let home = tempfile::tempdir().unwrap();
    topics(home.path())
        .arg("validate")
        .arg(fixture("invalid.toml"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("category must not be empty"));
}

#[test]
fn missing_catalog_file_fails() {
    let home = tempfile::tempdir().unwrap();
    topics(home.path())
        .args(["search", "react", "--catalog"])
        .arg(fixture("does-not-exist.toml"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error loading catalog"));
}

// ── Config ───────────────────────────────────────────────────────────

fn write_config(home: &Path, body: &str) {
    let dir = home.join(".config").join("topics");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("config.toml"), body).unwrap();
}

#[test]
fn config_sets_catalog_and_limit() {
    let home = tempfile::tempdir().unwrap();
    write_config(
        home.path(),
        &format!(
            "[search]\nlimit = 1\n\n[catalog]\npaths = [{}]\n",
            toml_string(&test_catalog())
        ),
    );

    topics(home.path())
        .args(["search", "react"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Found 1 topic:").and(predicate::str::contains("React")),
        );

    // flags override config
    topics(home.path())
        .args(["search", "react", "--limit", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Found 2 topics"));
}

#[test]
fn malformed_config_fails() {
    let home = tempfile::tempdir().unwrap();
    write_config(home.path(), "not valid toml {{{");

    topics(home.path())
        .args(["search", "react"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error loading config"));
}

#[test]
fn setup_writes_config_once() {
    let home = tempfile::tempdir().unwrap();
    topics(home.path())
        .arg("setup")
        .assert()
        .success()
        .stdout(predicate::str::contains("[search]").and(predicate::str::contains("limit = 8")));

    assert!(home.path().join(".config/topics/config.toml").is_file());

    topics(home.path())
        .arg("setup")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--force"));

    topics(home.path())
        .args(["setup", "--force"])
        .assert()
        .success();
}

fn toml_string(path: &Path) -> String {
    toml::Value::String(path.display().to_string()).to_string()
}
