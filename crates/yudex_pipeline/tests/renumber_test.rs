//! Integration tests for the index renumbering pipeline.

mod common;

use std::fs;

use common::write_file;
use serde_json::Value;
use tempfile::tempdir;
use yudex_pipeline::{renumber, PipelineError};

#[test]
fn renumbers_in_array_order() {
    let dir = tempdir().unwrap();
    let index = write_file(
        dir.path(),
        "yudu_pokedex.json",
        r#"[
            {"yudex_id": "Y0093", "name": "妙蛙种子", "world_gen": "Y"},
            {"yudex_id": "Y0002", "name": "妙蛙草", "world_gen": "Y"},
            {"yudex_id": "", "name": "妙蛙花", "world_gen": "Y"}
        ]"#,
    );

    let report = renumber(&index).unwrap();
    assert_eq!(report.renumbered, 3);
    assert_eq!(report.skipped, 0);

    let entries: Vec<Value> =
        serde_json::from_str(&fs::read_to_string(&index).unwrap()).unwrap();
    let ids: Vec<&str> = entries
        .iter()
        .map(|e| e["yudex_id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, ["Y0001", "Y0002", "Y0003"]);
    // Order untouched: the formerly-Y0093 entry is still first
    assert_eq!(entries[0]["name"], "妙蛙种子");
}

#[test]
fn skips_elements_without_id_and_preserves_them() {
    let dir = tempdir().unwrap();
    let index = write_file(
        dir.path(),
        "yudu_pokedex.json",
        r#"[
            {"yudex_id": "Y0010", "name": "a"},
            {"name": "no id here", "extra": [1, 2]},
            42,
            {"yudex_id": "Y0020", "name": "b"}
        ]"#,
    );

    let report = renumber(&index).unwrap();
    assert_eq!(report.renumbered, 2);
    assert_eq!(report.skipped, 2);
    assert_eq!(report.warnings.len(), 2);

    let entries: Vec<Value> =
        serde_json::from_str(&fs::read_to_string(&index).unwrap()).unwrap();
    assert_eq!(entries[0]["yudex_id"], "Y0001");
    // Skipped elements pass through untouched and consume no number
    assert_eq!(entries[1]["name"], "no id here");
    assert_eq!(entries[1]["extra"], serde_json::json!([1, 2]));
    assert_eq!(entries[2], serde_json::json!(42));
    assert_eq!(entries[3]["yudex_id"], "Y0002");
}

#[test]
fn renumbering_twice_is_idempotent() {
    let dir = tempdir().unwrap();
    let index = write_file(
        dir.path(),
        "yudu_pokedex.json",
        r#"[
            {"yudex_id": "Y0500", "name": "a"},
            {"yudex_id": "Y0001", "name": "b"}
        ]"#,
    );

    renumber(&index).unwrap();
    let first = fs::read_to_string(&index).unwrap();
    renumber(&index).unwrap();
    let second = fs::read_to_string(&index).unwrap();
    assert_eq!(first, second);
}

#[test]
fn missing_file_is_fatal() {
    let dir = tempdir().unwrap();
    let err = renumber(&dir.path().join("nope.json")).unwrap_err();
    assert!(matches!(err, PipelineError::ReadInput { .. }));
}

#[test]
fn non_array_top_level_is_fatal_and_leaves_file_alone() {
    let dir = tempdir().unwrap();
    let index = write_file(dir.path(), "yudu_pokedex.json", r#"{"yudex_id": "Y0001"}"#);

    let err = renumber(&index).unwrap_err();
    assert!(matches!(err, PipelineError::NotAnArray { .. }));
    assert_eq!(
        fs::read_to_string(&index).unwrap(),
        r#"{"yudex_id": "Y0001"}"#
    );
}

#[test]
fn unparseable_file_is_fatal() {
    let dir = tempdir().unwrap();
    let index = write_file(dir.path(), "yudu_pokedex.json", "{broken");

    let err = renumber(&index).unwrap_err();
    assert!(matches!(err, PipelineError::ParseInput { .. }));
}
