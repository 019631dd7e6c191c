//! Commit graph queries.

use git2::{ErrorCode, Oid, Repository, Sort};

use super::error::{GitError, Result};

/// A commit with more than one parent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeCommit {
    pub id: Oid,
    /// First line of the commit message.
    pub subject: String,
}

/// Resolve a revision spec (ref name, `HEAD`, hash) to a commit id.
pub fn resolve_commit(repo: &Repository, spec: &str) -> Result<Oid> {
    let object = repo
        .revparse_single(spec)
        .map_err(|_| GitError::UnknownRevision(spec.to_string()))?;
    let commit = object.peel_to_commit().map_err(GitError::Git2)?;
    Ok(commit.id())
}

/// Nearest common ancestor of `head` and `base` (`git merge-base head base`).
pub fn merge_base(repo: &Repository, head: Oid, base: Oid) -> Result<Oid> {
    match repo.merge_base(head, base) {
        Ok(oid) => Ok(oid),
        Err(e) if e.code() == ErrorCode::NotFound => {
            Err(GitError::NoMergeBase { head, base }.into())
        }
        Err(e) => Err(GitError::Git2(e).into()),
    }
}

/// Merge commits reachable from `head` but not from `base`
/// (`git rev-list --merges base..head`), newest first.
pub fn merge_commits_between(
    repo: &Repository,
    base: Oid,
    head: Oid,
) -> Result<Vec<MergeCommit>> {
    let mut walk = repo.revwalk().map_err(GitError::Git2)?;
    walk.set_sorting(Sort::TOPOLOGICAL | Sort::TIME)
        .map_err(GitError::Git2)?;
    walk.push(head).map_err(GitError::Git2)?;
    walk.hide(base).map_err(GitError::Git2)?;

    let mut merges = Vec::new();
    for oid in walk {
        let oid = oid.map_err(GitError::Git2)?;
        let commit = repo.find_commit(oid).map_err(GitError::Git2)?;
        if commit.parent_count() > 1 {
            merges.push(MergeCommit {
                id: commit.id(),
                subject: commit.summary().unwrap_or_default().to_string(),
            });
        }
    }

    Ok(merges)
}
