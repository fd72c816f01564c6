use std::error::Error;

use clap::{Parser, Subcommand};
use commands::{
    extract::{self, ExtractArgs},
    query::{self, QueryArgs},
    scaling::{self, ScalingArgs},
    survey::{self, SurveyArgs},
};

mod commands;

#[derive(Parser, Debug)]
#[command(name = "aqs-cli", about = "AQS composition survey CLI")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Expand a survey plan into per-point sample states.
    Survey(SurveyArgs),
    /// Flatten phase properties from raw results into a table.
    Extract(ExtractArgs),
    /// Flatten scaling tendencies from raw results into a table.
    Scaling(ScalingArgs),
    /// Query a results registry.
    Query(QueryArgs),
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    match cli.command {
        Command::Survey(args) => survey::run(&args),
        Command::Extract(args) => extract::run(&args),
        Command::Scaling(args) => scaling::run(&args),
        Command::Query(args) => query::run(&args),
    }
}
