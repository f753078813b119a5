use crate::support::{
    basic_fields, field_value, fieldstash, read_field, write_config, write_record,
};
use base64::{engine::general_purpose, Engine as _};
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

// ============================================================================
// Backup command tests
// ============================================================================

#[test]
fn test_backup_basic_note() {
    let dir = tempdir().unwrap();
    let config = write_config(dir.path(), &["Basic"]);
    let note = write_record(dir.path(), "Basic", &basic_fields());

    fieldstash()
        .arg("--config")
        .arg(&config)
        .arg("backup")
        .arg(&note)
        .assert()
        .success()
        .stdout(predicate::str::contains("backed up: Front"));

    let expected = format!(
        "<div>{}</div>",
        general_purpose::STANDARD.encode(r#"[{"field": "Front", "html": "Hello <b>world</b>"}]"#)
    );
    assert_eq!(read_field(&note, "Cache"), expected);
    assert_eq!(read_field(&note, "Front"), "");
    assert_eq!(read_field(&note, "Back"), "");
    assert_eq!(read_field(&note, "Image"), "<img>");
    assert_eq!(read_field(&note, "Title"), "Greeting");
}

#[test]
fn test_backup_json_format() {
    let dir = tempdir().unwrap();
    let config = write_config(dir.path(), &["Basic"]);
    let note = write_record(dir.path(), "Basic", &basic_fields());

    let output = fieldstash()
        .arg("--config")
        .arg(&config)
        .args(["--format", "json", "backup"])
        .arg(&note)
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["outcome"], "backed_up");
    assert_eq!(json["fields"], serde_json::json!(["Front"]));
    assert_eq!(json["persisted"], true);
}

#[test]
fn test_backup_unsupported_note_type() {
    let dir = tempdir().unwrap();
    let config = write_config(dir.path(), &["Basic", "Vocab"]);
    let note = write_record(dir.path(), "Cloze", &basic_fields());
    let before = fs::read_to_string(&note).unwrap();

    fieldstash()
        .arg("--config")
        .arg(&config)
        .arg("backup")
        .arg(&note)
        .assert()
        .code(2)
        .stderr(predicate::str::contains(
            "This note type ('Cloze') is not enabled for backup/restore.",
        ))
        .stderr(predicate::str::contains("- Basic, Vocab"));

    assert_eq!(fs::read_to_string(&note).unwrap(), before);
}

#[test]
fn test_backup_unsupported_json_error() {
    let dir = tempdir().unwrap();
    let config = write_config(dir.path(), &["Basic"]);
    let note = write_record(dir.path(), "Cloze", &basic_fields());

    fieldstash()
        .arg("--config")
        .arg(&config)
        .args(["--format", "json", "backup"])
        .arg(&note)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("\"type\":\"unsupported_schema\""));
}

#[test]
fn test_backup_missing_cache_field() {
    let dir = tempdir().unwrap();
    let config = write_config(dir.path(), &["Basic"]);
    let note = write_record(dir.path(), "Basic", &[("Title", "t"), ("Front", "f")]);
    let before = fs::read_to_string(&note).unwrap();

    fieldstash()
        .arg("--config")
        .arg(&config)
        .arg("backup")
        .arg(&note)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("backup skipped"))
        .stderr(predicate::str::contains("error: note type").not());

    assert_eq!(fs::read_to_string(&note).unwrap(), before);
}

#[test]
fn test_backup_nothing_to_back_up() {
    let dir = tempdir().unwrap();
    let config = write_config(dir.path(), &["Basic"]);
    let note = write_record(
        dir.path(),
        "Basic",
        &[("Title", "t"), ("Front", "  "), ("Image", "<img>"), ("Cache", "")],
    );
    let before = fs::read_to_string(&note).unwrap();

    fieldstash()
        .arg("--config")
        .arg(&config)
        .arg("backup")
        .arg(&note)
        .assert()
        .success()
        .stdout(predicate::str::contains("nothing to back up"));

    assert_eq!(fs::read_to_string(&note).unwrap(), before);
}

#[test]
fn test_backup_new_note_printed_not_written() {
    let dir = tempdir().unwrap();
    let config = write_config(dir.path(), &["Basic"]);
    let note = write_record(dir.path(), "Basic", &basic_fields());
    let before = fs::read_to_string(&note).unwrap();

    let output = fieldstash()
        .arg("--config")
        .arg(&config)
        .args(["backup", "--new"])
        .arg(&note)
        .output()
        .unwrap();
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("backed up: Front"));

    let updated: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let expected = format!(
        "<div>{}</div>",
        general_purpose::STANDARD.encode(r#"[{"field": "Front", "html": "Hello <b>world</b>"}]"#)
    );
    assert_eq!(field_value(&updated, "Cache"), expected);
    assert_eq!(field_value(&updated, "Front"), "");
    assert_eq!(field_value(&updated, "Image"), "<img>");

    assert_eq!(fs::read_to_string(&note).unwrap(), before);
}

#[test]
fn test_backup_new_note_json_format() {
    let dir = tempdir().unwrap();
    let config = write_config(dir.path(), &["Basic"]);
    let note = write_record(dir.path(), "Basic", &basic_fields());
    let before = fs::read_to_string(&note).unwrap();

    let output = fieldstash()
        .arg("--config")
        .arg(&config)
        .args(["--format", "json", "backup", "--new"])
        .arg(&note)
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["outcome"], "backed_up");
    assert_eq!(json["persisted"], false);
    assert_eq!(field_value(&json["note"], "Front"), "");
    assert!(field_value(&json["note"], "Cache").starts_with("<div>"));

    assert_eq!(fs::read_to_string(&note).unwrap(), before);
}

#[test]
fn test_backup_uses_global_config_dir() {
    let dir = tempdir().unwrap();
    let config_dir = dir.path().join("cfg");
    fs::create_dir_all(&config_dir).unwrap();
    write_config(&config_dir, &["Basic"]);
    let note = write_record(dir.path(), "Basic", &basic_fields());

    fieldstash()
        .env("FIELDSTASH_CONFIG_DIR", &config_dir)
        .env_remove("FIELDSTASH_CONFIG")
        .arg("backup")
        .arg(&note)
        .assert()
        .success();

    assert_eq!(read_field(&note, "Front"), "");
}

#[test]
fn test_backup_without_any_config_enables_nothing() {
    let dir = tempdir().unwrap();
    let note = write_record(dir.path(), "Basic", &basic_fields());

    fieldstash()
        .env("FIELDSTASH_CONFIG_DIR", dir.path().join("empty"))
        .env_remove("FIELDSTASH_CONFIG")
        .arg("backup")
        .arg(&note)
        .assert()
        .code(2);
}

#[test]
fn test_backup_invalid_note_file() {
    let dir = tempdir().unwrap();
    let config = write_config(dir.path(), &["Basic"]);
    let note = dir.path().join("note.json");
    fs::write(&note, "{not json").unwrap();

    fieldstash()
        .arg("--config")
        .arg(&config)
        .arg("backup")
        .arg(&note)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("invalid record"));
}
