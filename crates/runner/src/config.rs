use clap::ValueEnum;
use config::{Config as ConfigLoader, Environment, File};
use serde::Deserialize;
use std::env;
use std::path::{Path, PathBuf};
use std::time::Duration;

use common::{DatasetConfig, RecordFamily};
use perf_bench::MeasureConfig;

use super::error::Error;

#[derive(Debug, Deserialize, Clone)]
pub struct RunnerConfig {
    pub target_time_ms: u64,
    pub min_iterations: u64,
    pub max_iterations: u64,
    pub reads: usize,
}

impl RunnerConfig {
    pub fn measure_config(&self) -> MeasureConfig {
        MeasureConfig {
            target_time: Duration::from_millis(self.target_time_ms),
            min_iterations: self.min_iterations,
            max_iterations: self.max_iterations,
        }
    }
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    Csv,
    Markdown,
    Bench,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ReportConfig {
    pub format: ReportFormat,
    #[serde(default)]
    pub output: Option<PathBuf>,
}

/// Replaces the built-in sweep of one family.
#[derive(Debug, Deserialize, Clone)]
pub struct SweepOverride {
    pub family: RecordFamily,
    pub dataset: DatasetConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub runner: RunnerConfig,
    pub report: ReportConfig,
    #[serde(default)]
    pub sweeps: Vec<SweepOverride>,
}

/// Loads `crates/runner/Config.toml` under the current directory, layered
/// with `PV__*` environment variables.
pub fn load_config() -> Result<Config, Error> {
    let base_path = env::current_dir().map_err(|e| {
        Error::ConfigLoadError(format!("Failed to determine current directory: {}", e))
    })?;

    let config_file_path: PathBuf = base_path
        .join("crates")
        .join("runner")
        .join("Config.toml");

    load_config_from(&config_file_path)
}

/// Loads configuration from `path` and environment variables.
pub fn load_config_from(path: &Path) -> Result<Config, Error> {
    if !path.exists() {
        return Err(Error::ConfigLoadError(format!(
            "Configuration file not found at path: {}",
            path.display()
        )));
    }

    let s = ConfigLoader::builder()
        .add_source(File::from(path).required(true))
        .add_source(
            Environment::with_prefix("PV")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        )
        .build()
        .map_err(|e| Error::ConfigLoadError(e.to_string()))?;

    s.try_deserialize()
        .map_err(|e| Error::ConfigLoadError(format!("Failed to deserialize config: {}", e)))
}
