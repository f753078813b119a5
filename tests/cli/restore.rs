use crate::support::{
    basic_fields, field_value, fieldstash, read_field, write_config, write_record,
};
use base64::{engine::general_purpose, Engine as _};
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

// ============================================================================
// Restore command tests
// ============================================================================

#[test]
fn test_backup_then_restore() {
    let dir = tempdir().unwrap();
    let config = write_config(dir.path(), &["Basic"]);
    let note = write_record(dir.path(), "Basic", &basic_fields());

    fieldstash()
        .arg("--config")
        .arg(&config)
        .arg("backup")
        .arg(&note)
        .assert()
        .success();

    fieldstash()
        .arg("--config")
        .arg(&config)
        .arg("restore")
        .arg(&note)
        .assert()
        .success()
        .stdout(predicate::str::contains("restored: Front"));

    assert_eq!(read_field(&note, "Front"), "Hello <b>world</b>");
    assert_eq!(read_field(&note, "Cache"), "");
    assert_eq!(read_field(&note, "Image"), "<img>");
    assert_eq!(read_field(&note, "Title"), "Greeting");
}

#[test]
fn test_restore_unicode_content() {
    let dir = tempdir().unwrap();
    let config = write_config(dir.path(), &["Basic"]);
    let note = write_record(
        dir.path(),
        "Basic",
        &[
            ("Title", "t"),
            ("Front", "Grüße 🌍 <i>ok</i>"),
            ("Back", "日本語"),
            ("Cache", ""),
        ],
    );

    for command in ["backup", "restore"] {
        fieldstash()
            .arg("--config")
            .arg(&config)
            .arg(command)
            .arg(&note)
            .assert()
            .success();
    }

    assert_eq!(read_field(&note, "Front"), "Grüße 🌍 <i>ok</i>");
    assert_eq!(read_field(&note, "Back"), "日本語");
}

#[test]
fn test_restore_corrupt_cache_leaves_note_untouched() {
    let dir = tempdir().unwrap();
    let config = write_config(dir.path(), &["Basic"]);
    let note = write_record(
        dir.path(),
        "Basic",
        &[
            ("Title", "t"),
            ("Front", "current"),
            ("Cache", "<div>not-valid-base64!!</div>"),
        ],
    );
    let before = fs::read_to_string(&note).unwrap();

    fieldstash()
        .arg("--config")
        .arg(&config)
        .arg("restore")
        .arg(&note)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("restore failed"))
        .stderr(predicate::str::contains("error: corrupt payload").not());

    assert_eq!(fs::read_to_string(&note).unwrap(), before);
}

#[test]
fn test_restore_empty_cache() {
    let dir = tempdir().unwrap();
    let config = write_config(dir.path(), &["Basic"]);
    let note = write_record(dir.path(), "Basic", &basic_fields());
    let before = fs::read_to_string(&note).unwrap();

    fieldstash()
        .arg("--config")
        .arg(&config)
        .arg("restore")
        .arg(&note)
        .assert()
        .success()
        .stdout(predicate::str::contains("cache is empty"));

    assert_eq!(fs::read_to_string(&note).unwrap(), before);
}

#[test]
fn test_restore_skips_unknown_fields() {
    let dir = tempdir().unwrap();
    let config = write_config(dir.path(), &["Basic"]);
    let payload = general_purpose::STANDARD.encode(
        r#"[{"field": "Front", "html": "f"}, {"field": "Removed", "html": "r"}]"#,
    );
    let cache = format!("<div>{}</div>", payload);
    let note = write_record(
        dir.path(),
        "Basic",
        &[("Title", "t"), ("Front", ""), ("Cache", cache.as_str())],
    );

    fieldstash()
        .arg("--config")
        .arg(&config)
        .args(["--format", "json", "restore"])
        .arg(&note)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"fields\":[\"Front\"]"));

    assert_eq!(read_field(&note, "Front"), "f");
    assert_eq!(read_field(&note, "Cache"), "");
}

#[test]
fn test_restore_unsupported_note_type_quiet_still_notifies() {
    let dir = tempdir().unwrap();
    let config = write_config(dir.path(), &["Basic"]);
    let note = write_record(dir.path(), "Cloze", &basic_fields());

    fieldstash()
        .arg("--config")
        .arg(&config)
        .args(["--quiet", "restore"])
        .arg(&note)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("('Cloze')"));
}

#[test]
fn test_restore_new_note_printed_not_written() {
    let dir = tempdir().unwrap();
    let config = write_config(dir.path(), &["Basic"]);
    let cache = format!(
        "<div>{}</div>",
        general_purpose::STANDARD.encode(r#"[{"field": "Front", "html": "Hello <b>world</b>"}]"#)
    );
    let note = write_record(
        dir.path(),
        "Basic",
        &[("Title", "t"), ("Front", ""), ("Cache", cache.as_str())],
    );
    let before = fs::read_to_string(&note).unwrap();

    let output = fieldstash()
        .arg("--config")
        .arg(&config)
        .args(["--quiet", "restore", "--new"])
        .arg(&note)
        .output()
        .unwrap();
    assert!(output.status.success());
    assert!(output.stderr.is_empty());

    let updated: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(field_value(&updated, "Front"), "Hello <b>world</b>");
    assert_eq!(field_value(&updated, "Cache"), "");

    assert_eq!(fs::read_to_string(&note).unwrap(), before);
}
