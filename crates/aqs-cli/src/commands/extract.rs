use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

use aqs_core::{from_json_slice, to_canonical_json_bytes, RawResult, RunProvenance};
use aqs_extract::{
    extract_basic_properties, registry_append, write_table_csv, ExtractionReport, ExtractionRun,
    Registry,
};
use chrono::Utc;
use clap::Args;

use super::survey::tool_versions;

#[derive(Args, Debug)]
pub struct ExtractArgs {
    /// JSON array of raw results, or a directory of per-point result files.
    #[arg(long)]
    pub results: PathBuf,
    /// Phase to read properties from.
    #[arg(long)]
    pub phase: String,
    /// Property names to extract, in output column order.
    #[arg(long, value_delimiter = ',', required = true)]
    pub properties: Vec<String>,
    /// Output directory for the table artefacts.
    #[arg(long)]
    pub out: PathBuf,
    /// Optional registry file (.csv or .sqlite/.db) to append the run to.
    #[arg(long)]
    pub registry: Option<PathBuf>,
    /// Plan hash recorded with the registry entry.
    #[arg(long, default_value = "")]
    pub plan_hash: String,
    /// Base state hash recorded with the registry entry.
    #[arg(long, default_value = "")]
    pub base_hash: String,
}

pub fn run(args: &ExtractArgs) -> Result<(), Box<dyn Error>> {
    fs::create_dir_all(&args.out)?;
    let results = load_results(&args.results)?;
    let report = extract_basic_properties(&results, &args.phase, &args.properties);
    persist_report(&args.out, &report)?;
    if let Some(registry_path) = &args.registry {
        append_to_registry(registry_path, &args.plan_hash, &args.base_hash, &report)?;
    }
    Ok(())
}

/// Loads raw results either from a single JSON array file or from a
/// directory of per-point JSON files taken in sorted order.
pub(crate) fn load_results(path: &Path) -> Result<Vec<RawResult>, Box<dyn Error>> {
    if path.is_dir() {
        let mut paths: Vec<PathBuf> = fs::read_dir(path)?
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| path.extension().and_then(|ext| ext.to_str()) == Some("json"))
            .collect();
        paths.sort();
        let mut results = Vec::with_capacity(paths.len());
        for path in paths {
            let result: RawResult = from_json_slice(&fs::read(&path)?)?;
            results.push(result);
        }
        Ok(results)
    } else {
        let results: Vec<RawResult> = from_json_slice(&fs::read(path)?)?;
        Ok(results)
    }
}

pub(crate) fn persist_report(out: &Path, report: &ExtractionReport) -> Result<(), Box<dyn Error>> {
    let bytes = to_canonical_json_bytes(report)?;
    fs::write(out.join("extraction_report.json"), bytes)?;
    write_table_csv(&out.join("table.csv"), &report.table)?;
    Ok(())
}

pub(crate) fn append_to_registry(
    path: &Path,
    plan_hash: &str,
    base_hash: &str,
    report: &ExtractionReport,
) -> Result<(), Box<dyn Error>> {
    let registry = Registry::from_path(path);
    let run = ExtractionRun {
        provenance: RunProvenance {
            plan_hash: plan_hash.to_string(),
            base_hash: base_hash.to_string(),
            created_at: Utc::now().to_rfc3339(),
            tool_versions: tool_versions(),
        },
        report: report.clone(),
    };
    registry_append(&registry, &run)?;
    Ok(())
}
