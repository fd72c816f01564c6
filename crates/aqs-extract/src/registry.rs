use std::fs::{self, OpenOptions};
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use aqs_core::errors::{AqsError, ErrorInfo};
use aqs_core::{to_canonical_json_bytes, RunProvenance};
use csv::{ReaderBuilder, WriterBuilder};
use rusqlite::{params, Connection};
use serde::{Deserialize, Serialize};

use crate::extract::ExtractionReport;
use crate::table::TableRow;

/// Supported registry backends, selected by file extension.
#[derive(Debug, Clone, PartialEq)]
pub enum Registry {
    Csv(PathBuf),
    Sqlite(PathBuf),
}

impl Registry {
    /// Construct a registry handle from a filesystem path.
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("sqlite") | Some("db") => Registry::Sqlite(path),
            _ => Registry::Csv(path),
        }
    }
}

/// One extraction run submitted to the registry: the report plus the
/// provenance identifying the survey that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractionRun {
    /// Provenance of the run (plan/base hashes, timestamp, tool versions).
    pub provenance: RunProvenance,
    /// The extraction output appended to the registry.
    pub report: ExtractionReport,
}

/// Query descriptor for registry lookups.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Query {
    #[serde(default)]
    pub plan_hash: Option<String>,
    #[serde(default)]
    pub limit: Option<usize>,
}

/// Table representation returned from registry queries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegistryTable {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Append an [`ExtractionRun`] to the registry backend, one record per
/// table row.
pub fn registry_append(registry: &Registry, run: &ExtractionRun) -> Result<(), AqsError> {
    match registry {
        Registry::Csv(path) => append_csv(path, run),
        Registry::Sqlite(path) => append_sqlite(path, run),
    }
}

/// Query the registry returning a structured table.
pub fn registry_query(registry: &Registry, query: &Query) -> Result<RegistryTable, AqsError> {
    match registry {
        Registry::Csv(path) => query_csv(path, query),
        Registry::Sqlite(path) => query_sqlite(path, query),
    }
}

fn append_csv(path: &Path, run: &ExtractionRun) -> Result<(), AqsError> {
    ensure_parent(path)?;
    let file_exists = path.exists();
    let file = OpenOptions::new()
        .append(true)
        .create(true)
        .open(path)
        .map_err(|err| {
            AqsError::Registry(
                ErrorInfo::new("registry-open", "failed to open CSV registry")
                    .with_context("path", path.display().to_string())
                    .with_hint(err.to_string()),
            )
        })?;
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .from_writer(BufWriter::new(file));
    if !file_exists {
        writer
            .write_record(["date", "plan_hash", "target", "row_index", "cells"])
            .map_err(|err| wrap_csv("registry-write-header", err))?;
    }
    for row in &run.report.table.rows {
        let record = vec![
            run.provenance.created_at.clone(),
            run.provenance.plan_hash.clone(),
            run.report.target.clone(),
            row.index.to_string(),
            cells_string(row)?,
        ];
        writer
            .write_record(&record)
            .map_err(|err| wrap_csv("registry-write-row", err))?;
    }
    writer
        .flush()
        .map_err(|err| wrap_csv("registry-flush", err.into()))?;
    Ok(())
}

fn append_sqlite(path: &Path, run: &ExtractionRun) -> Result<(), AqsError> {
    ensure_parent(path)?;
    let mut conn = Connection::open(path).map_err(|err| {
        AqsError::Registry(
            ErrorInfo::new("registry-sqlite-open", "failed to open sqlite registry")
                .with_context("path", path.display().to_string())
                .with_hint(err.to_string()),
        )
    })?;
    conn.execute_batch(
        r#"CREATE TABLE IF NOT EXISTS runs (
            date TEXT NOT NULL,
            plan_hash TEXT NOT NULL,
            target TEXT NOT NULL,
            row_index INTEGER NOT NULL,
            cells TEXT NOT NULL
        );"#,
    )
    .map_err(|err| {
        AqsError::Registry(
            ErrorInfo::new("registry-sqlite-schema", "failed to ensure registry schema")
                .with_hint(err.to_string()),
        )
    })?;
    let tx = conn.transaction().map_err(|err| {
        AqsError::Registry(
            ErrorInfo::new("registry-sqlite-transaction", "failed to start transaction")
                .with_hint(err.to_string()),
        )
    })?;
    for row in &run.report.table.rows {
        tx.execute(
            r#"INSERT INTO runs (date, plan_hash, target, row_index, cells)
             VALUES (?1, ?2, ?3, ?4, ?5)"#,
            params![
                &run.provenance.created_at,
                &run.provenance.plan_hash,
                &run.report.target,
                row.index as i64,
                cells_string(row)?,
            ],
        )
        .map_err(|err| {
            AqsError::Registry(
                ErrorInfo::new("registry-sqlite-insert", "failed to append registry row")
                    .with_hint(err.to_string()),
            )
        })?;
    }
    tx.commit().map_err(|err| {
        AqsError::Registry(
            ErrorInfo::new("registry-sqlite-commit", "failed to commit registry rows")
                .with_hint(err.to_string()),
        )
    })?;
    Ok(())
}

fn query_csv(path: &Path, query: &Query) -> Result<RegistryTable, AqsError> {
    if !path.exists() {
        return Ok(empty_table());
    }
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .map_err(|err| wrap_csv("registry-read", err))?;
    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result.map_err(|err| wrap_csv("registry-record", err))?;
        if let Some(plan_hash) = &query.plan_hash {
            if record.get(1) != Some(plan_hash) {
                continue;
            }
        }
        rows.push(record.iter().map(|s| s.to_string()).collect::<Vec<_>>());
        if let Some(limit) = query.limit {
            if rows.len() >= limit {
                break;
            }
        }
    }
    Ok(RegistryTable {
        columns: table_columns(),
        rows,
    })
}

fn query_sqlite(path: &Path, query: &Query) -> Result<RegistryTable, AqsError> {
    if !path.exists() {
        return Ok(empty_table());
    }
    let conn = Connection::open(path).map_err(|err| {
        AqsError::Registry(
            ErrorInfo::new("registry-sqlite-open", "failed to open sqlite registry")
                .with_hint(err.to_string()),
        )
    })?;
    let mut sql = "SELECT date, plan_hash, target, row_index, cells FROM runs".to_string();
    if query.plan_hash.is_some() {
        sql.push_str(" WHERE plan_hash = ?1");
    }
    sql.push_str(" ORDER BY date, plan_hash, row_index");
    if let Some(limit) = query.limit {
        sql.push_str(&format!(" LIMIT {}", limit));
    }
    let mut stmt = conn.prepare(&sql).map_err(|err| {
        AqsError::Registry(
            ErrorInfo::new("registry-sqlite-prepare", "failed to prepare registry query")
                .with_hint(err.to_string()),
        )
    })?;
    let mut rows_iter = if let Some(plan_hash) = &query.plan_hash {
        stmt.query([plan_hash])
    } else {
        stmt.query([])
    }
    .map_err(|err| {
        AqsError::Registry(
            ErrorInfo::new("registry-sqlite-query", "failed to execute registry query")
                .with_hint(err.to_string()),
        )
    })?;
    let mut rows = Vec::new();
    while let Some(row) = rows_iter.next().map_err(|err| {
        AqsError::Registry(
            ErrorInfo::new("registry-sqlite-row", "failed to fetch registry row")
                .with_hint(err.to_string()),
        )
    })? {
        let mut result = Vec::with_capacity(5);
        for idx in 0..5 {
            let value: String = if idx == 3 {
                let raw: i64 = row.get(idx).map_err(|err| {
                    AqsError::Registry(
                        ErrorInfo::new("registry-sqlite-get", "failed to read column")
                            .with_hint(err.to_string()),
                    )
                })?;
                raw.to_string()
            } else {
                row.get(idx).map_err(|err| {
                    AqsError::Registry(
                        ErrorInfo::new("registry-sqlite-get", "failed to read column")
                            .with_hint(err.to_string()),
                    )
                })?
            };
            result.push(value);
        }
        rows.push(result);
        if let Some(limit) = query.limit {
            if rows.len() >= limit {
                break;
            }
        }
    }
    Ok(RegistryTable {
        columns: table_columns(),
        rows,
    })
}

fn cells_string(row: &TableRow) -> Result<String, AqsError> {
    let bytes = to_canonical_json_bytes(&row.cells)?;
    String::from_utf8(bytes).map_err(|err| {
        AqsError::Registry(
            ErrorInfo::new("registry-canonical", "failed to encode canonical json")
                .with_hint(err.to_string()),
        )
    })
}

fn ensure_parent(path: &Path) -> Result<(), AqsError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|err| {
            AqsError::Registry(
                ErrorInfo::new("registry-create", "failed to create registry directory")
                    .with_context("path", parent.display().to_string())
                    .with_hint(err.to_string()),
            )
        })?
    }
    Ok(())
}

fn table_columns() -> Vec<String> {
    vec![
        "date".into(),
        "plan_hash".into(),
        "target".into(),
        "row_index".into(),
        "cells".into(),
    ]
}

fn empty_table() -> RegistryTable {
    RegistryTable {
        columns: table_columns(),
        rows: Vec::new(),
    }
}

fn wrap_csv(code: &str, err: csv::Error) -> AqsError {
    AqsError::Registry(ErrorInfo::new(code, "CSV registry failure").with_hint(err.to_string()))
}
