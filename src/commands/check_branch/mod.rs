mod context;
mod error;

pub use context::{BranchContext, HeadRevision};
pub use error::{CheckBranchError, Result};

use std::path::Path;

use anyhow::Context;
use git2::{Oid, Repository};

use crate::infra::git::{
    MergeCommit, fetch_branch, merge_base, merge_commits_between, open_repo_at,
    remote_branch_ref, resolve_commit,
};
use crate::shared::config::BranchConfig;
use crate::shared::env_var::EnvVars;

/// Outcome of comparing a head revision against the base branch tip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Freshness {
    /// Base tip is an ancestor of head and the range has no merge commits.
    UpToDate,
    /// Head forked from an older base commit.
    Behind { base_tip: Oid, merge_base: Oid },
    /// Rebased, but `base..head` contains merge commits.
    NonLinear(Vec<MergeCommit>),
}

const VERIFY_FAILED: &str = "Failed to verify branch freshness and linear history.";

/// Verify the current checkout is rebased on its base branch and linear.
pub fn run(env: &EnvVars, config: &BranchConfig) -> Result<()> {
    let context = BranchContext::resolve(env, &config.default_base)?;
    tracing::debug!(base = %context.base_ref, head = ?context.head, "resolved branch context");

    let workdir = std::env::current_dir().context(VERIFY_FAILED)?;
    check(&workdir, &context, config)?;

    println!("{}", up_to_date_message(&config.remote, &context.base_ref));
    Ok(())
}

/// Turn the freshness of `workdir` into a verdict. Failures to inspect the
/// repository are reported under [`VERIFY_FAILED`].
fn check(workdir: &Path, context: &BranchContext, config: &BranchConfig) -> Result<()> {
    let freshness = verify(workdir, &config.remote, context).context(VERIFY_FAILED)?;

    match freshness {
        Freshness::UpToDate => Ok(()),
        Freshness::Behind {
            base_tip,
            merge_base,
        } => Err(CheckBranchError::Behind {
            base: format!("{}/{}", config.remote, context.base_ref),
            expected: base_tip,
            actual: merge_base,
        }
        .into()),
        Freshness::NonLinear(commits) => Err(CheckBranchError::NonLinear { commits }.into()),
    }
}

fn up_to_date_message(remote: &str, base: &str) -> String {
    format!("Branch is up to date with {remote}/{base} and has linear history.")
}

/// Fetch the branches named by `context` from `remote` and assess the head.
pub fn verify(workdir: &Path, remote: &str, context: &BranchContext) -> Result<Freshness> {
    let repo = open_repo_at(workdir)?;

    fetch_branch(workdir, remote, &context.base_ref)?;
    if let HeadRevision::RemoteBranch(head_ref) = &context.head {
        fetch_branch(workdir, remote, head_ref)?;
    }

    let base_tip = resolve_commit(&repo, &remote_branch_ref(remote, &context.base_ref))?;
    let head = match &context.head {
        HeadRevision::RemoteBranch(head_ref) => {
            resolve_commit(&repo, &remote_branch_ref(remote, head_ref))?
        }
        HeadRevision::CurrentCheckout => resolve_commit(&repo, "HEAD")?,
    };
    tracing::debug!(%base_tip, %head, "resolved revisions");

    assess(&repo, base_tip, head)
}

/// Check that `base_tip` is the merge-base of `head` and that no merge
/// commits sit between them.
pub fn assess(repo: &Repository, base_tip: Oid, head: Oid) -> Result<Freshness> {
    let merge_base = merge_base(repo, head, base_tip)?;
    if merge_base != base_tip {
        tracing::info!(%base_tip, %merge_base, "branch is behind base");
        return Ok(Freshness::Behind {
            base_tip,
            merge_base,
        });
    }

    let merges = merge_commits_between(repo, base_tip, head)?;
    if !merges.is_empty() {
        tracing::info!(count = merges.len(), "merge commits found");
        return Ok(Freshness::NonLinear(merges));
    }

    Ok(Freshness::UpToDate)
}
