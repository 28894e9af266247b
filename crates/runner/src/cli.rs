use clap::Parser;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::Level;

use common::{Operation, RecordFamily};

use super::config::ReportFormat;
use super::error::Error;

/// Runs the value-vs-boxed layout sweeps and reports time, bytes and
/// allocations per operation.
#[derive(Debug, Parser)]
#[command(name = "pv-runner")]
pub struct Args {
    /// Configuration file; defaults to `crates/runner/Config.toml`.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Record family to run (repeatable). All families when omitted.
    #[arg(long = "family")]
    pub families: Vec<String>,

    /// Operation to run (repeatable). All operations when omitted.
    #[arg(long = "operation")]
    pub operations: Vec<String>,

    /// Overrides `report.format`.
    #[arg(long, value_enum)]
    pub format: Option<ReportFormat>,

    /// Overrides `report.output`; stdout when neither is set.
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// CSV report of an earlier run to diff against.
    #[arg(long)]
    pub baseline: Option<PathBuf>,

    #[arg(long, default_value = "info")]
    pub log_level: Level,
}

/// Parses `names`, or returns every value of `all` when none were given.
pub fn select<T>(names: &[String], all: &[T]) -> Result<Vec<T>, Error>
where
    T: FromStr<Err = common::error::Error> + Copy,
{
    if names.is_empty() {
        return Ok(all.to_vec());
    }
    names
        .iter()
        .map(|n| n.parse::<T>().map_err(Error::from))
        .collect()
}

pub fn families(args: &Args) -> Result<Vec<RecordFamily>, Error> {
    select(&args.families, &RecordFamily::ALL)
}

pub fn operations(args: &Args) -> Result<Vec<Operation>, Error> {
    select(&args.operations, &Operation::ALL)
}
