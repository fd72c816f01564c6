use aqs_core::RawResult;
use serde::{Deserialize, Serialize};

use crate::table::{Cell, ExtractedTable, MissingSummary, TableRow};

/// Reserved target label recorded for scaling-tendency extractions.
pub const SCALING_TARGET: &str = "scaling-tendency";

/// Flat table plus missing-data accounting for one extraction call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractionReport {
    /// Phase the properties were read from, or [`SCALING_TARGET`].
    pub target: String,
    /// The extracted table.
    pub table: ExtractedTable,
    /// Aggregate missing-data counts.
    pub summary: MissingSummary,
}

/// Flattens the requested phase properties across all raw results.
///
/// A raw result without the requested phase contributes a row of missing
/// markers and is counted in the summary; it never fails the call. A
/// property absent from a present phase marks only its own cell. The output
/// always has one row per input and one column per requested property, even
/// when a property is absent from every result.
pub fn extract_basic_properties(
    results: &[RawResult],
    phase: &str,
    properties: &[String],
) -> ExtractionReport {
    let mut summary = MissingSummary {
        rows: results.len(),
        ..MissingSummary::default()
    };
    let mut rows = Vec::with_capacity(results.len());
    for (index, result) in results.iter().enumerate() {
        let cells = match result.phases.get(phase) {
            Some(reported) => properties
                .iter()
                .map(|property| match reported.get(property) {
                    Some(value) => Cell::Value(*value),
                    None => {
                        summary.missing_cells += 1;
                        Cell::Missing
                    }
                })
                .collect(),
            None => {
                summary.rows_missing_phase += 1;
                summary.missing_cells += properties.len();
                vec![Cell::Missing; properties.len()]
            }
        };
        rows.push(TableRow { index, cells });
    }
    ExtractionReport {
        target: phase.to_string(),
        table: ExtractedTable {
            columns: properties.to_vec(),
            rows,
        },
        summary,
    }
}

/// Flattens the requested scaling tendencies across all raw results.
///
/// The scalant map has no phase level, so only individual cells can be
/// missing.
pub fn extract_scaling_tendencies(results: &[RawResult], scalants: &[String]) -> ExtractionReport {
    let mut summary = MissingSummary {
        rows: results.len(),
        ..MissingSummary::default()
    };
    let mut rows = Vec::with_capacity(results.len());
    for (index, result) in results.iter().enumerate() {
        let cells = scalants
            .iter()
            .map(|scalant| match result.scaling_tendencies.get(scalant) {
                Some(value) => Cell::Value(*value),
                None => {
                    summary.missing_cells += 1;
                    Cell::Missing
                }
            })
            .collect();
        rows.push(TableRow { index, cells });
    }
    ExtractionReport {
        target: SCALING_TARGET.to_string(),
        table: ExtractedTable {
            columns: scalants.to_vec(),
            rows,
        },
        summary,
    }
}
