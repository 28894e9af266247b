pub mod baseline;
pub mod cli;
pub mod config;
pub mod error;
pub mod log;

use alloc_tracker::Allocator;
use clap::Parser;
use std::alloc::System;
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;
use tracing::{error, info};

use cli::Args;
use config::{Config, ReportFormat};
use error::Error;
use perf_bench::report::{bench_lines, markdown, write_csv};
use perf_bench::{Measurement, Suite};

#[global_allocator]
static ALLOCATOR: Allocator<System> = Allocator::system();

fn main() {
    let args = Args::parse();
    log::init_logger(args.log_level);

    if let Err(e) = run(args) {
        error!("{}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), Error> {
    let config = match &args.config {
        Some(path) => config::load_config_from(path)?,
        None => config::load_config()?,
    };
    let families = cli::families(&args)?;
    let operations = cli::operations(&args)?;

    let suite = build_suite(&config);
    let measurements = suite.run_all(&families, &operations);
    info!("Collected {} measurements", measurements.len());

    let format = args.format.unwrap_or(config.report.format);
    let output = args.output.as_deref().or(config.report.output.as_deref());
    write_report(format, output, &measurements)?;

    if let Some(path) = &args.baseline {
        let previous = baseline::load_baseline(path)?;
        let deltas = baseline::compare(&previous, &measurements);
        info!(
            "{} of {} benchmarks found in baseline {}",
            deltas.len(),
            measurements.len(),
            path.display()
        );
        println!("{}", baseline::render(&deltas));
    }

    Ok(())
}

fn build_suite(config: &Config) -> Suite {
    config.sweeps.iter().fold(
        Suite::new(config.runner.measure_config()).with_reads(config.runner.reads),
        |suite, sweep| suite.with_sweep(sweep.family, sweep.dataset.clone()),
    )
}

fn write_report(
    format: ReportFormat,
    output: Option<&Path>,
    measurements: &[Measurement],
) -> Result<(), Error> {
    let mut sink: Box<dyn Write> = match output {
        Some(path) => {
            info!("Writing {:?} report to {}", format, path.display());
            Box::new(File::create(path)?)
        }
        None => Box::new(io::stdout().lock()),
    };

    match format {
        ReportFormat::Csv => write_csv(&mut sink, measurements)?,
        ReportFormat::Markdown => writeln!(sink, "{}", markdown(measurements))?,
        ReportFormat::Bench => writeln!(sink, "{}", bench_lines(measurements))?,
    }
    sink.flush()?;
    Ok(())
}
