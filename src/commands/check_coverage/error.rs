use std::path::PathBuf;

use thiserror::Error;

use super::summary;

#[derive(Error, Debug)]
pub enum CoverageError {
    #[error(
        "Unable to read coverage summary at {}.\nEnsure test:coverage generates {}.",
        .path.display(),
        .file.display()
    )]
    Unreadable {
        path: PathBuf,
        file: PathBuf,
        source: std::io::Error,
    },

    #[error(
        "Unable to read coverage summary at {}.\nEnsure test:coverage generates {}.",
        .path.display(),
        .file.display()
    )]
    Malformed {
        path: PathBuf,
        file: PathBuf,
        source: serde_json::Error,
    },

    #[error(
        "Invalid coverage summary format.\nExpected one of: {}",
        summary::expected_paths()
    )]
    UnrecognizedFormat,

    #[error("Coverage check failed: {coverage}% < {min}% (minimum required).")]
    BelowThreshold { coverage: f64, min: f64 },
}

pub type Result<T> = anyhow::Result<T>;
