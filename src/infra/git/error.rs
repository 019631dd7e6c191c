//! Git error types.

use std::path::PathBuf;

use git2::Oid;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GitError {
    #[error("Not in a git repository: {}", .0.display())]
    NotInRepo(PathBuf),

    #[error("Failed to run git")]
    Spawn(#[source] std::io::Error),

    #[error("git fetch --no-tags {remote} {branch} failed ({status})")]
    FetchFailed {
        remote: String,
        branch: String,
        status: String,
    },

    #[error("Unknown revision: {0}")]
    UnknownRevision(String),

    #[error("No common ancestor between {head} and {base}")]
    NoMergeBase { head: Oid, base: Oid },

    #[error("Git error: {0}")]
    Git2(#[from] git2::Error),
}

pub type Result<T> = anyhow::Result<T>;
