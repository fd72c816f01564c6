use std::error::Error;
use std::io::{self, Write};
use std::path::PathBuf;

use aqs_extract::{registry_query, Query, Registry};
use clap::Args;

#[derive(Args, Debug)]
pub struct QueryArgs {
    /// Registry file to query (.csv or .sqlite/.db).
    #[arg(long)]
    pub registry: PathBuf,
    /// Restrict output to a single plan hash.
    #[arg(long)]
    pub plan_hash: Option<String>,
    /// Maximum number of rows to print.
    #[arg(long)]
    pub limit: Option<usize>,
}

pub fn run(args: &QueryArgs) -> Result<(), Box<dyn Error>> {
    let registry = Registry::from_path(&args.registry);
    let query = Query {
        plan_hash: args.plan_hash.clone(),
        limit: args.limit,
    };
    let table = registry_query(&registry, &query)?;
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    writeln!(handle, "{}", table.columns.join(","))?;
    for row in &table.rows {
        writeln!(handle, "{}", row.join(","))?;
    }
    Ok(())
}
