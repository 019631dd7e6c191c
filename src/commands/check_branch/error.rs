use git2::Oid;
use thiserror::Error;

use crate::infra::git::MergeCommit;

#[derive(Error, Debug)]
pub enum CheckBranchError {
    #[error("Missing base branch reference.")]
    MissingBaseRef,

    #[error(
        "Branch is behind {base}.\nExpected merge-base {expected}, got {actual}.\nPlease rebase on the latest base branch."
    )]
    Behind {
        base: String,
        expected: Oid,
        actual: Oid,
    },

    #[error(
        "Linear history required: merge commits found in branch.\n{}\nPlease rebase and remove merge commits before pushing.",
        format_merge_commits(.commits)
    )]
    NonLinear { commits: Vec<MergeCommit> },
}

fn format_merge_commits(commits: &[MergeCommit]) -> String {
    commits
        .iter()
        .map(|commit| format!("- {} {}", commit.id, commit.subject))
        .collect::<Vec<_>>()
        .join("\n")
}

pub type Result<T> = anyhow::Result<T>;
