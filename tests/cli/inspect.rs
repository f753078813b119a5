use crate::support::{fieldstash, write_config, write_record};
use base64::{engine::general_purpose, Engine as _};
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

// ============================================================================
// Inspect command tests
// ============================================================================

fn cache_with(json: &str) -> String {
    format!("<div>{}</div>", general_purpose::STANDARD.encode(json))
}

#[test]
fn test_inspect_lists_items_without_modifying() {
    let dir = tempdir().unwrap();
    let config = write_config(dir.path(), &["Basic"]);
    let cache = cache_with(r#"[{"field": "Front", "html": "Hello"}, {"field": "Old", "html": "x"}]"#);
    let note = write_record(
        dir.path(),
        "Basic",
        &[("Title", "t"), ("Front", ""), ("Cache", cache.as_str())],
    );
    let before = fs::read_to_string(&note).unwrap();

    fieldstash()
        .arg("--config")
        .arg(&config)
        .arg("inspect")
        .arg(&note)
        .assert()
        .success()
        .stdout(predicate::str::contains("Front: Hello"))
        .stdout(predicate::str::contains("Old (unknown field): x"));

    assert_eq!(fs::read_to_string(&note).unwrap(), before);
}

#[test]
fn test_inspect_json() {
    let dir = tempdir().unwrap();
    let config = write_config(dir.path(), &["Basic"]);
    let cache = cache_with(r#"[{"field": "Front", "html": "Hello"}]"#);
    let note = write_record(
        dir.path(),
        "Basic",
        &[("Title", "t"), ("Front", ""), ("Cache", cache.as_str())],
    );

    let output = fieldstash()
        .arg("--config")
        .arg(&config)
        .args(["--format", "json", "inspect"])
        .arg(&note)
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        json,
        serde_json::json!([{"field": "Front", "html": "Hello", "known": true}])
    );
}

#[test]
fn test_inspect_empty_cache() {
    let dir = tempdir().unwrap();
    let config = write_config(dir.path(), &["Basic"]);
    let note = write_record(dir.path(), "Basic", &[("Title", "t"), ("Cache", "")]);

    fieldstash()
        .arg("--config")
        .arg(&config)
        .arg("inspect")
        .arg(&note)
        .assert()
        .success()
        .stdout(predicate::str::contains("cache is empty"));
}

#[test]
fn test_inspect_corrupt_cache() {
    let dir = tempdir().unwrap();
    let config = write_config(dir.path(), &["Basic"]);
    let note = write_record(
        dir.path(),
        "Basic",
        &[("Title", "t"), ("Cache", "<div>@@@</div>")],
    );

    fieldstash()
        .arg("--config")
        .arg(&config)
        .arg("inspect")
        .arg(&note)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("inspect failed"))
        .stderr(predicate::str::contains("error: corrupt payload").not());
}

#[test]
fn test_inspect_missing_cache_field() {
    let dir = tempdir().unwrap();
    let config = write_config(dir.path(), &["Basic"]);
    let note = write_record(dir.path(), "Basic", &[("Title", "t"), ("Front", "f")]);

    fieldstash()
        .arg("--config")
        .arg(&config)
        .arg("inspect")
        .arg(&note)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("inspect skipped"))
        .stderr(predicate::str::contains("error: note type").not());
}
