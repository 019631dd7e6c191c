use std::path::{Path, PathBuf};

use schemars::JsonSchema;
use serde::Deserialize;

/// Config file names searched in the working directory, in order.
const CONFIG_FILE_NAMES: &[&str] = &[".ci-guard.yaml", ".ci-guard.yml"];

/// Top-level project configuration for ci-guard.
#[derive(Debug, Default, Deserialize, JsonSchema, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Branch freshness settings.
    #[serde(default)]
    pub branch: BranchConfig,

    /// Coverage threshold settings.
    #[serde(default)]
    pub coverage: CoverageConfig,

    /// Package script runner settings.
    #[serde(default)]
    pub scripts: ScriptsConfig,
}

/// Branch freshness configuration.
#[derive(Debug, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct BranchConfig {
    /// Remote to fetch branches from (default: "origin").
    #[serde(default = "default_remote")]
    #[schemars(default = "default_remote")]
    pub remote: String,

    /// Base branch when not running for a pull request and BASE_BRANCH is
    /// unset (default: "master").
    #[serde(default = "default_base_branch")]
    #[schemars(default = "default_base_branch")]
    pub default_base: String,
}

impl Default for BranchConfig {
    fn default() -> Self {
        Self {
            remote: default_remote(),
            default_base: default_base_branch(),
        }
    }
}

/// Coverage threshold configuration.
#[derive(Debug, Deserialize, JsonSchema, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct CoverageConfig {
    /// Coverage summary file, relative to the working directory
    /// (default: "coverage/coverage-summary.json").
    #[serde(default = "default_coverage_file")]
    #[schemars(default = "default_coverage_file")]
    pub file: PathBuf,

    /// Minimum line coverage percentage (default: 80).
    #[serde(default = "default_min_coverage")]
    #[schemars(default = "default_min_coverage")]
    pub min: f64,
}

impl Default for CoverageConfig {
    fn default() -> Self {
        Self {
            file: default_coverage_file(),
            min: default_min_coverage(),
        }
    }
}

/// Package script runner configuration.
#[derive(Debug, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ScriptsConfig {
    /// Package manifest declaring the scripts (default: "package.json").
    #[serde(default = "default_manifest")]
    #[schemars(default = "default_manifest")]
    pub manifest: PathBuf,

    /// How declared scripts are launched (default: "npm").
    #[serde(default)]
    pub launcher: Launcher,
}

impl Default for ScriptsConfig {
    fn default() -> Self {
        Self {
            manifest: default_manifest(),
            launcher: Launcher::default(),
        }
    }
}

/// How a declared package script is launched.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, JsonSchema, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Launcher {
    /// `npm run <name>`, which also runs pre/post scripts.
    #[default]
    Npm,
    /// `sh -c <command>` with the declared command string.
    Shell,
}

fn default_remote() -> String {
    "origin".to_string()
}

fn default_base_branch() -> String {
    "master".to_string()
}

fn default_coverage_file() -> PathBuf {
    PathBuf::from("coverage/coverage-summary.json")
}

fn default_min_coverage() -> f64 {
    80.0
}

fn default_manifest() -> PathBuf {
    PathBuf::from("package.json")
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read config file (permission error, etc.)
    #[error("Failed to read config file {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    /// YAML parse error
    #[error("Invalid config file {path}: {message}")]
    ParseError { path: PathBuf, message: String },

    /// Parsed but semantically invalid value
    #[error("Invalid config file {path}: {message}")]
    InvalidValue { path: PathBuf, message: String },
}

/// Load configuration from the current working directory.
/// Returns Config::default() if no config file exists.
pub fn load_config() -> anyhow::Result<Config> {
    let cwd = std::env::current_dir()?;
    load_config_from_dir(&cwd)
}

/// Load configuration from a specific directory.
/// Searches for .ci-guard.yaml, then .ci-guard.yml in the given directory.
pub fn load_config_from_dir(dir: &Path) -> anyhow::Result<Config> {
    for filename in CONFIG_FILE_NAMES {
        let path = dir.join(filename);
        match std::fs::read_to_string(&path) {
            Ok(content) => return parse_config(&content, &path),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => continue,
            Err(e) => return Err(ConfigError::ReadError { path, source: e }.into()),
        }
    }

    Ok(Config::default())
}

/// Parse YAML content into Config.
fn parse_config(content: &str, path: &Path) -> anyhow::Result<Config> {
    let config: Config = serde_yaml::from_str(content).map_err(|e| ConfigError::ParseError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    if !config.coverage.min.is_finite() {
        return Err(ConfigError::InvalidValue {
            path: path.to_path_buf(),
            message: format!(
                "coverage.min must be a finite number, got {}",
                config.coverage.min
            ),
        }
        .into());
    }

    Ok(config)
}

/// Generate JSON Schema for the Config struct.
pub fn generate_schema() -> schemars::Schema {
    schemars::schema_for!(Config)
}
