//! Centralized reader for the environment variables ci-guard consults.
//!
//! Variable names are private constants here; the rest of the crate reads
//! values through the `EnvVars` snapshot.

const EVENT_NAME: &str = "GITHUB_EVENT_NAME";
const BASE_REF: &str = "GITHUB_BASE_REF";
const HEAD_REF: &str = "GITHUB_HEAD_REF";
const BASE_BRANCH: &str = "BASE_BRANCH";
const LOG: &str = "CI_GUARD_LOG";
const LOG_FORMAT: &str = "CI_GUARD_LOG_FORMAT";

/// Snapshot of the relevant environment variables at load time.
///
/// Empty values are treated as unset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvVars {
    /// Name of the CI event that triggered the run (e.g. "pull_request", "push").
    pub event_name: Option<String>,

    /// Target branch of a pull request.
    pub base_ref: Option<String>,

    /// Source branch of a pull request.
    pub head_ref: Option<String>,

    /// Base branch for non pull-request runs.
    pub base_branch: Option<String>,

    /// Log filter directive, e.g. "debug" or "ci_guard=trace".
    pub log: Option<String>,

    /// Log output format: "json" or unset for human-readable lines.
    pub log_format: Option<String>,
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|s| !s.is_empty())
}

impl EnvVars {
    /// Read all relevant environment variables from the current process.
    pub fn load() -> Self {
        Self {
            event_name: non_empty_var(EVENT_NAME),
            base_ref: non_empty_var(BASE_REF),
            head_ref: non_empty_var(HEAD_REF),
            base_branch: non_empty_var(BASE_BRANCH),
            log: non_empty_var(LOG),
            log_format: non_empty_var(LOG_FORMAT),
        }
    }
}
