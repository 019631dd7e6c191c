//! Git operations.
//!
//! History inspection goes through git2 (libgit2). Fetching shells out to the
//! `git` binary so that credentials configured by the CI checkout apply.

mod error;
mod history;
mod repo;
#[cfg(test)]
pub mod test_utils;

pub use history::{MergeCommit, merge_base, merge_commits_between, resolve_commit};
pub use repo::{fetch_branch, open_repo_at, remote_branch_ref};
