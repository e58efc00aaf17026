use super::*;
use std::sync::atomic::{AtomicUsize, Ordering};

static FILE_COUNTER: AtomicUsize = AtomicUsize::new(0);

fn write_temp(content: &str) -> std::path::PathBuf {
    let mut path = std::env::temp_dir();
    let id = FILE_COUNTER.fetch_add(1, Ordering::SeqCst);
    path.push(format!(
        "kira_sepsis_input_test_{}_{}.json",
        std::process::id(),
        id
    ));
    std::fs::write(&path, content).unwrap();
    path
}

const BATCH: &str = r#"[
  {
    "id": "bed-7",
    "note": "Pasien demam, curiga sepsis",
    "vitals_trend": [
      {"rr": 18, "sbp": 122, "hr": 95, "temp_c": 37.2, "spo2": 96},
      {"rr": 24, "sbp": 98, "hr": 118, "temp_c": 38.6, "spo2": 93, "altered_mental_status": true}
    ],
    "lab": {"wbc": 15.5, "lactate": 3.1}
  },
  {
    "note": "stable",
    "vitals_trend": [
      {"rr": 16, "sbp": 124, "hr": 82, "temp_c": 36.8, "spo2": 97, "mental_status_altered": false}
    ]
  }
]"#;

#[test]
fn test_parse_records_with_defaults() {
    let records = parse_records(BATCH).unwrap();
    assert_eq!(records.len(), 2);

    let first = &records[0];
    assert_eq!(first.id.as_deref(), Some("bed-7"));
    assert_eq!(first.vitals_trend.len(), 2);
    assert!(first.vitals_trend[1].altered_mental_status);
    assert!(!first.vitals_trend[0].altered_mental_status);
    assert_eq!(first.lab.lactate, Some(3.1));
    assert_eq!(first.lab.creatinine, None);

    let second = &records[1];
    assert_eq!(second.id, None);
    assert_eq!(second.display_id(1), "record_1");
    assert_eq!(second.lab, crate::model::labs::LabSnapshot::default());
}

#[test]
fn test_empty_array_is_empty_batch() {
    assert!(parse_records("[]").unwrap().is_empty());
    assert!(parse_records(" [ ]\n").unwrap().is_empty());
}

#[test]
fn test_load_empty_batch_file() {
    let path = write_temp("[]");
    let records = load_records(&path).unwrap();
    assert!(records.is_empty());
    std::fs::remove_file(&path).ok();
}

#[test]
fn test_malformed_json_is_parse_error() {
    let err = parse_records("{\"note\": 1}").unwrap_err();
    assert!(matches!(err, InputError::Json(_)));
    assert!(err.to_string().starts_with("parse error"));
}

#[test]
fn test_missing_vitals_field_is_parse_error() {
    let err = parse_records(r#"[{"note": "x"}]"#).unwrap_err();
    assert!(matches!(err, InputError::Json(_)));
}

#[test]
fn test_load_records_from_file() {
    let path = write_temp(BATCH);
    let records = load_records(&path).unwrap();
    assert_eq!(records.len(), 2);
    std::fs::remove_file(&path).ok();
}

#[test]
fn test_empty_trend_is_loaded() {
    let path = write_temp(r#"[{"note": "x", "vitals_trend": []}]"#);
    let records = load_records(&path).unwrap();
    assert!(records[0].vitals_trend.is_empty());
    std::fs::remove_file(&path).ok();
}

#[test]
fn test_missing_file_is_io_error() {
    let err = load_records(std::path::Path::new("/nonexistent/kira_sepsis.json")).unwrap_err();
    assert!(matches!(err, InputError::Io(_)));
}
