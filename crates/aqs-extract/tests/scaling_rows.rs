use std::collections::BTreeMap;

use aqs_core::RawResult;
use aqs_extract::{extract_scaling_tendencies, Cell, SCALING_TARGET};

fn tendencies(pairs: &[(&str, f64)]) -> RawResult {
    let mut scaling_tendencies = BTreeMap::new();
    for (name, value) in pairs {
        scaling_tendencies.insert(name.to_string(), *value);
    }
    RawResult {
        phases: BTreeMap::new(),
        scaling_tendencies,
    }
}

fn names(names: &[&str]) -> Vec<String> {
    names.iter().map(|name| name.to_string()).collect()
}

#[test]
fn missing_scalant_marks_its_cell() {
    let results = vec![
        tendencies(&[("CACO3", 1.4), ("CASO4.2H2O", 0.3)]),
        tendencies(&[("CACO3", 2.1)]),
    ];
    let report = extract_scaling_tendencies(&results, &names(&["CACO3", "CASO4.2H2O"]));
    assert_eq!(report.target, SCALING_TARGET);
    assert_eq!(report.table.rows.len(), 2);
    assert_eq!(report.table.columns.len(), 2);
    assert_eq!(report.table.cell(0, "CACO3"), Some(&Cell::Value(1.4)));
    assert_eq!(report.table.cell(0, "CASO4.2H2O"), Some(&Cell::Value(0.3)));
    assert_eq!(report.table.cell(1, "CACO3"), Some(&Cell::Value(2.1)));
    assert_eq!(report.table.cell(1, "CASO4.2H2O"), Some(&Cell::Missing));
    assert_eq!(report.summary.rows, 2);
    assert_eq!(report.summary.rows_missing_phase, 0);
    assert_eq!(report.summary.missing_cells, 1);
}

#[test]
fn tendency_of_zero_is_not_missing() {
    let results = vec![tendencies(&[("CACO3", 0.0)])];
    let report = extract_scaling_tendencies(&results, &names(&["CACO3"]));
    let cell = report.table.cell(0, "CACO3").expect("cell");
    assert!(!cell.is_missing());
    assert_eq!(cell.value(), Some(0.0));
}

#[test]
fn scalant_order_matches_the_request() {
    let results = vec![tendencies(&[("BASO4", 0.1), ("CACO3", 1.0), ("SIO2", 0.4)])];
    let report = extract_scaling_tendencies(&results, &names(&["SIO2", "BASO4", "CACO3"]));
    assert_eq!(report.table.columns, vec!["SIO2", "BASO4", "CACO3"]);
    assert_eq!(report.table.rows[0].cells[0], Cell::Value(0.4));
    assert_eq!(report.table.rows[0].cells[1], Cell::Value(0.1));
    assert_eq!(report.table.rows[0].cells[2], Cell::Value(1.0));
}
