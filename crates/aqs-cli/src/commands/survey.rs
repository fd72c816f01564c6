use std::collections::BTreeMap;
use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

use aqs_core::{from_json_slice, to_canonical_json_bytes, RunProvenance, SampleState};
use aqs_survey::{load_plan, survey, SurveyReport};
use chrono::Utc;
use clap::Args;

#[derive(Args, Debug)]
pub struct SurveyArgs {
    #[arg(long)]
    pub plan: PathBuf,
    #[arg(long)]
    pub base: PathBuf,
    #[arg(long)]
    pub out: PathBuf,
}

pub fn run(args: &SurveyArgs) -> Result<(), Box<dyn Error>> {
    fs::create_dir_all(&args.out)?;
    let plan = load_plan(&args.plan)?;
    let base: SampleState = from_json_slice(&fs::read(&args.base)?)?;
    let report = survey(&plan, &base)?;
    persist_report(&args.out, &report)?;
    Ok(())
}

fn persist_report(out: &Path, report: &SurveyReport) -> Result<(), Box<dyn Error>> {
    let bytes = to_canonical_json_bytes(report)?;
    fs::write(out.join("survey_report.json"), bytes)?;
    // Zero-padded point directories fix the submission order the caller
    // must preserve when correlating results.
    for point in &report.points {
        let point_dir = out.join(format!("point_{:04}", point.index));
        fs::create_dir_all(&point_dir)?;
        let state_bytes = to_canonical_json_bytes(&point.state)?;
        fs::write(point_dir.join("state.json"), state_bytes)?;
    }
    let provenance = RunProvenance {
        plan_hash: report.plan_hash.clone(),
        base_hash: report.base_hash.clone(),
        created_at: Utc::now().to_rfc3339(),
        tool_versions: tool_versions(),
    };
    let provenance_bytes = to_canonical_json_bytes(&provenance)?;
    fs::write(out.join("provenance.json"), provenance_bytes)?;
    Ok(())
}

pub(crate) fn tool_versions() -> BTreeMap<String, String> {
    let mut versions = BTreeMap::new();
    versions.insert("aqs-cli".to_string(), env!("CARGO_PKG_VERSION").to_string());
    versions
}
