//! Test utilities for building commit graphs in temporary git repositories.

use std::cell::Cell;
use std::path::Path;

use git2::{Commit, Oid, Repository, Signature, Time};
use tempfile::TempDir;

use super::repo::{open_repo_at, remote_branch_ref};

/// Seconds between consecutive test commits, so ids and ordering are stable.
const COMMIT_INTERVAL: i64 = 60;

/// A temporary git repository for testing.
pub struct TempRepo {
    dir: TempDir,
    clock: Cell<i64>,
}

impl TempRepo {
    /// Create a new empty repository (unborn HEAD).
    pub fn new() -> Self {
        let dir = TempDir::new().expect("create temp dir");
        Repository::init(dir.path()).expect("init repo");
        Self {
            dir,
            clock: Cell::new(1_700_000_000),
        }
    }

    /// Get the path to the repository.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Open the repository.
    pub fn open(&self) -> Repository {
        open_repo_at(self.dir.path()).expect("open temp repo")
    }

    /// Create a commit with an empty tree on top of `parents` without moving any ref.
    pub fn commit(&self, message: &str, parents: &[Oid]) -> Oid {
        let repo = self.open();
        let time = self.clock.get();
        self.clock.set(time + COMMIT_INTERVAL);

        let sig = Signature::new("Test", "test@example.com", &Time::new(time, 0)).unwrap();
        let tree_id = repo.treebuilder(None).unwrap().write().unwrap();
        let tree = repo.find_tree(tree_id).unwrap();
        let parents: Vec<Commit<'_>> = parents
            .iter()
            .map(|id| repo.find_commit(*id).unwrap())
            .collect();
        let parent_refs: Vec<&Commit<'_>> = parents.iter().collect();

        repo.commit(None, &sig, &sig, message, &tree, &parent_refs)
            .expect("create commit")
    }

    /// Point `refs/heads/<name>` at `oid`.
    pub fn set_branch(&self, name: &str, oid: Oid) {
        let repo = self.open();
        repo.reference(&format!("refs/heads/{name}"), oid, true, "test branch")
            .expect("set branch");
    }

    /// Point `refs/remotes/<remote>/<name>` at `oid`.
    pub fn set_remote_branch(&self, remote: &str, name: &str, oid: Oid) {
        let repo = self.open();
        repo.reference(
            &remote_branch_ref(remote, name),
            oid,
            true,
            "test remote branch",
        )
        .expect("set remote branch");
    }

    /// Create a lightweight tag.
    pub fn tag(&self, name: &str, oid: Oid) {
        let repo = self.open();
        repo.reference(&format!("refs/tags/{name}"), oid, true, "test tag")
            .expect("set tag");
    }

    /// Make `refs/heads/<name>` the current HEAD.
    pub fn checkout(&self, name: &str) {
        self.open()
            .set_head(&format!("refs/heads/{name}"))
            .expect("set HEAD");
    }

    /// Register another repository on disk as a remote.
    pub fn add_remote(&self, name: &str, path: &Path) {
        let url = path.to_str().expect("utf-8 temp path");
        let repo = self.open();
        repo.remote(name, url).expect("add remote");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commit_chain_records_parents() {
        let temp = TempRepo::new();
        let first = temp.commit("first", &[]);
        let second = temp.commit("second", &[first]);

        let repo = temp.open();
        let commit = repo.find_commit(second).unwrap();
        assert_eq!(commit.parent_count(), 1);
        assert_eq!(commit.parent_id(0).unwrap(), first);
    }

    #[test]
    fn checkout_moves_head() {
        let temp = TempRepo::new();
        let first = temp.commit("first", &[]);
        temp.set_branch("main", first);
        temp.checkout("main");

        let repo = temp.open();
        assert_eq!(repo.head().unwrap().target(), Some(first));
    }
}
