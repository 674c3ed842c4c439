//! HEAD state and current branch resolution.

use git2::{Branch, BranchType};
use tracing::debug;

use crate::git::{GitRepository, GitUtilsError};

const HEADS_PREFIX: &str = "refs/heads/";

/// Point-in-time state of HEAD.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeadState {
    /// HEAD points at a branch, by short name. The branch may be unborn.
    Attached(String),
    /// HEAD points directly at a commit.
    Detached,
}

impl HeadState {
    /// Branch short name, if attached.
    pub fn branch_name(&self) -> Option<&str> {
        match self {
            Self::Attached(name) => Some(name),
            Self::Detached => None,
        }
    }
}

impl GitRepository {
    /// Reads the current HEAD state without modifying the repository.
    pub fn head_state(&self) -> Result<HeadState, GitUtilsError> {
        let repo = self.repository();
        if repo.head_detached()? {
            return Ok(HeadState::Detached);
        }

        // Read the symbolic target directly so an unborn branch still has a name.
        let head = repo.find_reference("HEAD")?;
        let target = head
            .symbolic_target()
            .ok_or_else(|| git2::Error::from_str("HEAD is neither symbolic nor detached"))?;
        let name = target.strip_prefix(HEADS_PREFIX).unwrap_or(target);

        Ok(HeadState::Attached(name.to_string()))
    }

    /// Returns the checked out branch, or `None` when HEAD is detached.
    ///
    /// An attached HEAD whose name has no matching local branch (an unborn
    /// branch, or damaged refs) is reported as
    /// [`GitUtilsError::BranchResolutionFailure`] rather than `None`.
    pub fn current_branch(&self) -> Result<Option<Branch<'_>>, GitUtilsError> {
        let name = match self.head_state()? {
            HeadState::Detached => {
                debug!("HEAD is detached; no current branch");
                return Ok(None);
            }
            HeadState::Attached(name) => name,
        };

        match self.repository().find_branch(&name, BranchType::Local) {
            Ok(branch) => Ok(Some(branch)),
            Err(e) if e.code() == git2::ErrorCode::NotFound => {
                debug!("HEAD names missing branch {name}");
                Err(GitUtilsError::BranchResolutionFailure { name })
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Short name of the checked out branch, or `None` when HEAD is detached.
    pub fn current_branch_name(&self) -> Result<Option<String>, GitUtilsError> {
        let Some(branch) = self.current_branch()? else {
            return Ok(None);
        };
        let name = branch
            .name()?
            .ok_or_else(|| git2::Error::from_str("branch name is not valid UTF-8"))?;
        Ok(Some(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use git2::{Repository, RepositoryInitOptions, Signature};
    use std::path::Path;
    use tempfile::TempDir;

    fn init_on_main(path: &Path) -> Repository {
        let mut opts = RepositoryInitOptions::new();
        opts.initial_head("main");
        Repository::init_opts(path, &opts).unwrap()
    }

    fn commit_empty_tree(repo: &Repository) -> git2::Oid {
        let signature = Signature::now("Test User", "test@example.com").unwrap();
        let tree_id = repo.index().unwrap().write_tree().unwrap();
        let tree = repo.find_tree(tree_id).unwrap();
        repo.commit(Some("HEAD"), &signature, &signature, "Initial", &tree, &[])
            .unwrap()
    }

    #[test]
    fn attached_head_resolves_branch() {
        let temp_dir = TempDir::new().unwrap();
        let raw = init_on_main(temp_dir.path());
        commit_empty_tree(&raw);

        let repo = GitRepository::from_repository(raw).unwrap();
        assert_eq!(repo.head_state().unwrap(), HeadState::Attached("main".into()));

        let branch = repo.current_branch().unwrap().unwrap();
        assert_eq!(branch.name().unwrap(), Some("main"));
        assert!(branch.is_head());
    }

    #[test]
    fn detached_head_has_no_branch() {
        let temp_dir = TempDir::new().unwrap();
        let raw = init_on_main(temp_dir.path());
        let oid = commit_empty_tree(&raw);
        raw.set_head_detached(oid).unwrap();

        let repo = GitRepository::from_repository(raw).unwrap();
        assert_eq!(repo.head_state().unwrap(), HeadState::Detached);
        assert!(repo.current_branch().unwrap().is_none());
        assert_eq!(repo.current_branch_name().unwrap(), None);
    }

    #[test]
    fn current_branch_is_idempotent() {
        let temp_dir = TempDir::new().unwrap();
        let raw = init_on_main(temp_dir.path());
        commit_empty_tree(&raw);

        let repo = GitRepository::from_repository(raw).unwrap();
        let first = repo.current_branch_name().unwrap();
        let second = repo.current_branch_name().unwrap();
        assert_eq!(first, second);
        assert_eq!(first.as_deref(), Some("main"));
    }

    #[test]
    fn missing_branch_is_resolution_failure() {
        let temp_dir = TempDir::new().unwrap();
        let raw = init_on_main(temp_dir.path());
        commit_empty_tree(&raw);
        raw.set_head("refs/heads/ghost").unwrap();

        let repo = GitRepository::from_repository(raw).unwrap();
        assert_eq!(
            repo.head_state().unwrap(),
            HeadState::Attached("ghost".into())
        );
        match repo.current_branch() {
            Err(GitUtilsError::BranchResolutionFailure { name }) => assert_eq!(name, "ghost"),
            Err(other) => panic!("unexpected error: {other}"),
            Ok(_) => panic!("expected BranchResolutionFailure"),
        };
    }

    #[test]
    fn unborn_branch_is_attached_but_unresolved() {
        let temp_dir = TempDir::new().unwrap();
        let repo = GitRepository::from_repository(init_on_main(temp_dir.path())).unwrap();

        assert_eq!(repo.head_state().unwrap().branch_name(), Some("main"));
        assert!(matches!(
            repo.current_branch(),
            Err(GitUtilsError::BranchResolutionFailure { .. })
        ));
    }
}
