use std::path::{Path, PathBuf};

use indoc::formatdoc;
use thiserror::Error;

/// Suite scripts CI pipelines conventionally expect, with what each covers.
const EXPECTED_SUITES: &[(&str, &str)] = &[
    ("test:tdd", "tests driven by how the code behaves."),
    ("test:bdd", "scenario tests derived from the specs."),
    ("test:e2e", "end-to-end tests derived from the specs."),
    (
        "test:coverage",
        "generates the coverage report (coverage/coverage-summary.json).",
    ),
];

#[derive(Error, Debug)]
pub enum RunScriptError {
    #[error("Unable to read package manifest at {}.", .path.display())]
    ManifestUnreadable {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid package manifest at {}.", .path.display())]
    ManifestMalformed {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("{}", missing_script_message(.name, .manifest))]
    MissingScript { name: String, manifest: PathBuf },

    #[error("Script \"{name}\" is not a command string, which --launcher shell requires.")]
    NotACommand { name: String },

    #[error("Failed to launch `{command}`")]
    Launch {
        command: String,
        source: std::io::Error,
    },
}

fn missing_script_message(name: &str, manifest: &Path) -> String {
    let suites = EXPECTED_SUITES
        .iter()
        .map(|(suite, meaning)| format!("- \"{suite}\": {meaning}"))
        .collect::<Vec<_>>()
        .join("\n");

    formatdoc! {"
        Missing required npm script: \"{name}\".
        Define it in {manifest}.
        Expected suites:
        {suites}",
        manifest = manifest.display(),
    }
}

pub type Result<T> = anyhow::Result<T>;
