use std::error::Error;
use std::fs;
use std::path::PathBuf;

use aqs_extract::extract_scaling_tendencies;
use clap::Args;

use super::extract::{append_to_registry, load_results, persist_report};

#[derive(Args, Debug)]
pub struct ScalingArgs {
    /// JSON array of raw results, or a directory of per-point result files.
    #[arg(long)]
    pub results: PathBuf,
    /// Scalant names to extract, in output column order.
    #[arg(long, value_delimiter = ',', required = true)]
    pub scalants: Vec<String>,
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

pub fn run(args: &ScalingArgs) -> Result<(), Box<dyn Error>> {
    fs::create_dir_all(&args.out)?;
    let results = load_results(&args.results)?;
    let report = extract_scaling_tendencies(&results, &args.scalants);
    persist_report(&args.out, &report)?;
    if let Some(registry_path) = &args.registry {
        append_to_registry(registry_path, &args.plan_hash, &args.base_hash, &report)?;
    }
    Ok(())
}
