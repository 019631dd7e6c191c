mod error;
mod summary;

pub use error::{CoverageError, Result};
use summary::{LineCoverage, line_coverage};

use std::path::{Path, PathBuf};

use clap::Args;
use serde_json::Value;

use crate::shared::config::CoverageConfig;

#[derive(Args, Debug, Clone, PartialEq)]
pub struct CheckCoverageArgs {
    /// Coverage summary JSON, relative to the working directory
    /// [default: coverage/coverage-summary.json]
    #[arg(long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Minimum line coverage percentage [default: 80]
    #[arg(
        long,
        value_name = "NUMBER",
        value_parser = parse_min,
        allow_negative_numbers = true
    )]
    pub min: Option<f64>,
}

/// Accept only finite numbers; `f64::from_str` alone would let "NaN" and "inf" through.
fn parse_min(value: &str) -> std::result::Result<f64, String> {
    match value.trim().parse::<f64>() {
        Ok(min) if min.is_finite() => Ok(min),
        _ => Err(format!("Invalid --min value: {value}")),
    }
}

pub fn run(args: &CheckCoverageArgs, config: &CoverageConfig) -> Result<()> {
    let (file, min) = settings(args, config);
    let workdir = std::env::current_dir()?;

    let coverage = check(&workdir, file, min)?;
    println!("{}", passed_message(coverage.percent, min));
    Ok(())
}

/// Flags win over the project config.
fn settings<'a>(args: &'a CheckCoverageArgs, config: &'a CoverageConfig) -> (&'a Path, f64) {
    let file = args.file.as_deref().unwrap_or(config.file.as_path());
    let min = args.min.unwrap_or(config.min);
    (file, min)
}

fn passed_message(coverage: f64, min: f64) -> String {
    format!("Coverage check passed: {coverage}% >= {min}%.")
}

/// Read the summary at `workdir`/`file` and compare its line coverage
/// against `min`.
pub fn check(workdir: &Path, file: &Path, min: f64) -> Result<LineCoverage> {
    let summary = read_summary(workdir, file)?;
    let coverage = line_coverage(&summary).ok_or(CoverageError::UnrecognizedFormat)?;
    tracing::debug!(
        percent = coverage.percent,
        key_path = coverage.path,
        min,
        "line coverage"
    );

    if coverage.percent < min {
        return Err(CoverageError::BelowThreshold {
            coverage: coverage.percent,
            min,
        }
        .into());
    }

    Ok(coverage)
}

fn read_summary(workdir: &Path, file: &Path) -> Result<Value> {
    let path = workdir.join(file);
    let content = std::fs::read_to_string(&path).map_err(|source| CoverageError::Unreadable {
        path: path.clone(),
        file: file.to_path_buf(),
        source,
    })?;
    let summary = serde_json::from_str(&content).map_err(|source| CoverageError::Malformed {
        path: path.clone(),
        file: file.to_path_buf(),
        source,
    })?;
    Ok(summary)
}
