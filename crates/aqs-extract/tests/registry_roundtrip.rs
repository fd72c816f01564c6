use std::collections::BTreeMap;
use std::fs;

use aqs_core::{RawResult, RunProvenance};
use aqs_extract::{
    extract_basic_properties, registry_append, registry_query, write_table_csv, ExtractionRun,
    Query, Registry, MISSING_LITERAL,
};

fn sample_run(plan_hash: &str, date: &str) -> ExtractionRun {
    let mut properties = BTreeMap::new();
    properties.insert("ph".to_string(), 7.1);
    let mut phases = BTreeMap::new();
    phases.insert("liquid1".to_string(), properties);
    let results = vec![
        RawResult {
            phases,
            scaling_tendencies: BTreeMap::new(),
        },
        RawResult::default(),
    ];
    let report = extract_basic_properties(&results, "liquid1", &["ph".to_string()]);
    ExtractionRun {
        provenance: RunProvenance {
            plan_hash: plan_hash.to_string(),
            base_hash: "base".to_string(),
            created_at: date.to_string(),
            tool_versions: BTreeMap::new(),
        },
        report,
    }
}

#[test]
fn csv_registry_roundtrips() {
    let dir = tempfile::tempdir().expect("tempdir");
    let registry = Registry::from_path(dir.path().join("runs.csv"));
    registry_append(&registry, &sample_run("plan-a", "2024-05-01T00:00:00Z")).expect("append");
    registry_append(&registry, &sample_run("plan-b", "2024-05-02T00:00:00Z")).expect("append");

    let all = registry_query(&registry, &Query::default()).expect("query");
    assert_eq!(all.columns[1], "plan_hash");
    assert_eq!(all.rows.len(), 4);

    let filtered = registry_query(
        &registry,
        &Query {
            plan_hash: Some("plan-a".to_string()),
            limit: None,
        },
    )
    .expect("query");
    assert_eq!(filtered.rows.len(), 2);
    assert!(filtered.rows.iter().all(|row| row[1] == "plan-a"));
    // The phase-missing row serializes its cells as the explicit marker.
    assert!(filtered.rows[1][4].contains("missing"));
}

#[test]
fn sqlite_registry_roundtrips() {
    let dir = tempfile::tempdir().expect("tempdir");
    let registry = Registry::from_path(dir.path().join("runs.sqlite"));
    assert!(matches!(registry, Registry::Sqlite(_)));
    registry_append(&registry, &sample_run("plan-a", "2024-05-01T00:00:00Z")).expect("append");
    registry_append(&registry, &sample_run("plan-a", "2024-05-03T00:00:00Z")).expect("append");

    let limited = registry_query(
        &registry,
        &Query {
            plan_hash: Some("plan-a".to_string()),
            limit: Some(3),
        },
    )
    .expect("query");
    assert_eq!(limited.rows.len(), 3);
    assert_eq!(limited.rows[0][3], "0");
    assert_eq!(limited.rows[1][3], "1");
}

#[test]
fn querying_a_missing_registry_returns_an_empty_table() {
    let dir = tempfile::tempdir().expect("tempdir");
    let registry = Registry::from_path(dir.path().join("absent.csv"));
    let table = registry_query(&registry, &Query::default()).expect("query");
    assert!(table.rows.is_empty());
    assert_eq!(table.columns.len(), 5);
}

#[test]
fn table_csv_uses_the_missing_literal() {
    let dir = tempfile::tempdir().expect("tempdir");
    let run = sample_run("plan-a", "2024-05-01T00:00:00Z");
    let path = dir.path().join("table.csv");
    write_table_csv(&path, &run.report.table).expect("write csv");
    let text = fs::read_to_string(&path).expect("read csv");
    let mut lines = text.lines();
    assert_eq!(lines.next(), Some("index,ph"));
    assert_eq!(lines.next(), Some("0,7.1"));
    let phase_missing_row = lines.next().expect("row");
    assert_eq!(phase_missing_row, format!("1,{}", MISSING_LITERAL));
}
