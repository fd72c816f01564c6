use std::fs::{self, File};
use std::io::BufWriter;
use std::path::Path;

use aqs_core::errors::{AqsError, ErrorInfo};
use csv::WriterBuilder;

use crate::table::{Cell, ExtractedTable};

/// Literal written for missing cells in CSV output, distinct from any
/// numeric value.
pub const MISSING_LITERAL: &str = "NA";

fn wrap_csv(code: &str, err: csv::Error) -> AqsError {
    AqsError::Extract(ErrorInfo::new(code, "CSV table failure").with_hint(err.to_string()))
}

fn cell_literal(cell: &Cell) -> String {
    match cell {
        Cell::Value(value) => value.to_string(),
        Cell::Missing => MISSING_LITERAL.to_string(),
    }
}

/// Writes an extracted table as CSV: an `index` column followed by the
/// requested columns in request order.
pub fn write_table_csv(path: &Path, table: &ExtractedTable) -> Result<(), AqsError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|err| {
            AqsError::Extract(
                ErrorInfo::new("table-create-dir", "failed to create table directory")
                    .with_context("path", parent.display().to_string())
                    .with_hint(err.to_string()),
            )
        })?;
    }
    let file = File::create(path).map_err(|err| {
        AqsError::Extract(
            ErrorInfo::new("table-create", "failed to create CSV table")
                .with_context("path", path.display().to_string())
                .with_hint(err.to_string()),
        )
    })?;
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .from_writer(BufWriter::new(file));

    let mut header = Vec::with_capacity(table.columns.len() + 1);
    header.push("index".to_string());
    header.extend(table.columns.iter().cloned());
    writer
        .write_record(&header)
        .map_err(|err| wrap_csv("table-write-header", err))?;

    for row in &table.rows {
        let mut record = Vec::with_capacity(header.len());
        record.push(row.index.to_string());
        for cell in &row.cells {
            record.push(cell_literal(cell));
        }
        writer
            .write_record(&record)
            .map_err(|err| wrap_csv("table-write-row", err))?;
    }
    writer
        .flush()
        .map_err(|err| wrap_csv("table-flush", err.into()))?;
    Ok(())
}
