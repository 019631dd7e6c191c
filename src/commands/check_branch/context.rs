//! Base/head selection from the CI environment.

use super::error::CheckBranchError;
use crate::shared::env_var::EnvVars;

/// Event name GitHub Actions uses for pull request runs.
const PULL_REQUEST_EVENT: &str = "pull_request";

/// Which revision is checked against the base branch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeadRevision {
    /// Remote tip of the pull request's source branch.
    RemoteBranch(String),
    /// Whatever `HEAD` points at in the current checkout.
    CurrentCheckout,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchContext {
    pub base_ref: String,
    pub head: HeadRevision,
}

impl BranchContext {
    /// Pull requests take their base from `GITHUB_BASE_REF` and head from
    /// `GITHUB_HEAD_REF`. Other events use `BASE_BRANCH`, then `default_base`,
    /// against the current checkout.
    pub fn resolve(env: &EnvVars, default_base: &str) -> Result<Self, CheckBranchError> {
        let is_pull_request = env.event_name.as_deref() == Some(PULL_REQUEST_EVENT);

        let base_ref = if is_pull_request {
            env.base_ref.clone()
        } else {
            env.base_branch
                .clone()
                .or_else(|| Some(default_base.to_string()))
        };
        let base_ref = base_ref
            .filter(|b| !b.is_empty())
            .ok_or(CheckBranchError::MissingBaseRef)?;

        let head = match &env.head_ref {
            Some(head_ref) if is_pull_request => HeadRevision::RemoteBranch(head_ref.clone()),
            _ => HeadRevision::CurrentCheckout,
        };

        Ok(Self { base_ref, head })
    }
}
