//! Repository operations.

use std::path::Path;
use std::process::Command;

use git2::{Repository, RepositoryOpenFlags};

use super::error::{GitError, Result};

/// Open a git repository at `path` or any of its parents.
pub fn open_repo_at(path: &Path) -> Result<Repository> {
    let repo = Repository::open_ext(
        path,
        RepositoryOpenFlags::empty(),
        std::iter::empty::<&Path>(),
    )
    .map_err(|_| GitError::NotInRepo(path.to_path_buf()))?;
    Ok(repo)
}

/// Full name of the remote-tracking ref for `branch`, e.g. `refs/remotes/origin/main`.
pub fn remote_branch_ref(remote: &str, branch: &str) -> String {
    format!("refs/remotes/{remote}/{branch}")
}

/// Fetch a single branch from `remote` into its remote-tracking ref, without tags.
///
/// libgit2 ignores `http.extraheader`, which is how CI checkouts usually pass
/// their token, so this runs `git fetch` with stdio inherited.
pub fn fetch_branch(workdir: &Path, remote: &str, branch: &str) -> Result<()> {
    let refspec = format!("+refs/heads/{branch}:{}", remote_branch_ref(remote, branch));
    tracing::info!(remote, branch, "fetching branch");

    let status = Command::new("git")
        .current_dir(workdir)
        .args(["fetch", "--no-tags", remote, &refspec])
        .status()
        .map_err(GitError::Spawn)?;

    if !status.success() {
        let status = status
            .code()
            .map(|c| format!("exit status {c}"))
            .unwrap_or_else(|| "terminated by signal".to_string());
        return Err(GitError::FetchFailed {
            remote: remote.to_string(),
            branch: branch.to_string(),
            status,
        }
        .into());
    }

    Ok(())
}
