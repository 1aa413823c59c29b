//! End-to-end tests for the `sqlchange` binary.

use std::io::Write;
use std::process::{Command, Output};

use tempfile::NamedTempFile;

const SEED_COLUMN: &str = r#"{
    "name": "column",
    "attributes": [
        {"name": "name", "value": "created"},
        {"name": "type", "value": "TIMESTAMP"},
        {"name": "defaultValueDate", "value": "2024-01-01T00:00:00"},
        {"name": "value", "value": "now()"}
    ]
}"#;

fn column_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

fn sqlchange(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_sqlchange"))
        .args(args)
        .env_remove("SQLCHANGE_DIALECT")
        .output()
        .unwrap()
}

#[test]
fn render_uses_selected_dialect() {
    let file = column_file(SEED_COLUMN);
    let path = file.path().to_str().unwrap();

    let out = sqlchange(&["--dialect", "oracle", "render", "--input", path]);
    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert!(stdout.contains("default: to_date('2024-01-01 00:00:00', 'YYYY-MM-DD HH24:MI:SS')"));
    assert!(stdout.contains("value: 'now()'"));

    let out = sqlchange(&["render", "--input", path]);
    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert!(stdout.contains("dialect: postgresql"));
    assert!(stdout.contains("value: now()"));
}

#[test]
fn dialect_from_environment() {
    let file = column_file(SEED_COLUMN);
    let out = Command::new(env!("CARGO_BIN_EXE_sqlchange"))
        .args(["render", "--input", file.path().to_str().unwrap()])
        .env("SQLCHANGE_DIALECT", "db2")
        .output()
        .unwrap();
    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert!(stdout.contains("default: TIMESTAMP('2024-01-01 00:00:00')"));
}

#[test]
fn tree_outputs_xml() {
    let file = column_file(SEED_COLUMN);
    let out = sqlchange(&["tree", "--input", file.path().to_str().unwrap()]);
    assert!(out.status.success());
    assert_eq!(
        String::from_utf8(out.stdout).unwrap(),
        "<column name=\"created\" type=\"TIMESTAMP\" defaultValueDate=\"2024-01-01T00:00:00\" value=\"now()\"/>\n"
    );
}

#[test]
fn unknown_dialect_is_rejected() {
    let out = sqlchange(&["--dialect", "informix", "dialects"]);
    assert!(!out.status.success());
}

#[test]
fn invalid_document_fails() {
    let file = column_file(
        r#"{"name": "column", "attributes": [{"name": "type", "value": "INT"}]}"#,
    );
    let out = sqlchange(&["render", "--input", file.path().to_str().unwrap()]);
    assert!(!out.status.success());
    let stderr = String::from_utf8(out.stderr).unwrap();
    assert!(stderr.contains("missing required attribute 'name'"));
}

#[test]
fn missing_input_file_fails() {
    let out = sqlchange(&["render", "--input", "/nonexistent/column.json"]);
    assert!(!out.status.success());
    let stderr = String::from_utf8(out.stderr).unwrap();
    assert!(stderr.contains("Failed to read"));
}
