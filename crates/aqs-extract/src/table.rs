use serde::{Deserialize, Serialize};

/// A single table cell: either a reported value or the explicit missing
/// marker. The marker is a distinct variant so "service returned no value"
/// can never be confused with a numeric zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Cell {
    /// Value reported by the service.
    Value(f64),
    /// The service returned no value for this cell.
    Missing,
}

impl Cell {
    /// Whether this cell carries the missing marker.
    pub fn is_missing(&self) -> bool {
        matches!(self, Cell::Missing)
    }

    /// Returns the reported value, if any.
    pub fn value(&self) -> Option<f64> {
        match self {
            Cell::Value(value) => Some(*value),
            Cell::Missing => None,
        }
    }
}

/// One row of an extracted table, keyed by the survey point index that
/// produced the underlying raw result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableRow {
    /// Position of the raw result in the extraction input, expected to be
    /// the survey point index.
    pub index: usize,
    /// Cells parallel to the table's column list.
    pub cells: Vec<Cell>,
}

/// Flat table of requested properties across all survey points.
///
/// Column order matches the request order, never the source order. Row
/// order matches the input order; the extractor does not re-sort.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractedTable {
    /// Requested property or scalant names, in request order.
    pub columns: Vec<String>,
    /// One row per input raw result.
    pub rows: Vec<TableRow>,
}

impl ExtractedTable {
    /// Returns the position of a column by name.
    pub fn column_position(&self, column: &str) -> Option<usize> {
        self.columns.iter().position(|name| name == column)
    }

    /// Looks up a cell by row position and column name.
    pub fn cell(&self, row: usize, column: &str) -> Option<&Cell> {
        let position = self.column_position(column)?;
        self.rows.get(row)?.cells.get(position)
    }
}

/// Aggregate missing-data counts surfaced after an extraction completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct MissingSummary {
    /// Total rows produced (one per input raw result).
    pub rows: usize,
    /// Rows whose phase lookup failed entirely.
    pub rows_missing_phase: usize,
    /// Individual absent cells, including all cells of phase-missing rows.
    pub missing_cells: usize,
}
