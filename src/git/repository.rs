//! Repository discovery and the opened-repository handle.

use std::env;
use std::path::{Path, PathBuf};

use git2::{ErrorCode, Repository};
use tracing::debug;

use crate::git::GitUtilsError;
use crate::utils::settings;

/// Handle to an opened repository, bound to its root directory.
pub struct GitRepository {
    repo: Repository,
    root: PathBuf,
    git_program: String,
}

/// Finds the repository enclosing an arbitrary filesystem path.
pub struct RepositoryLocator;

impl RepositoryLocator {
    /// Searches `path` and its ancestors for a repository and opens it.
    ///
    /// The path is made absolute first, so `NotARepository` always reports
    /// an absolute path. The process working directory is left untouched.
    pub fn discover<P: AsRef<Path>>(path: P) -> Result<GitRepository, GitUtilsError> {
        let path = std::path::absolute(path.as_ref())?;
        debug!("Discovering repository from {}", path.display());

        let repo = match Repository::discover(&path) {
            Ok(repo) => repo,
            Err(e) if e.code() == ErrorCode::NotFound => {
                return Err(GitUtilsError::NotARepository { path });
            }
            Err(e) => return Err(e.into()),
        };

        GitRepository::from_repository(repo)
    }

    /// Discovers the repository for `path` and makes its root the current
    /// working directory.
    ///
    /// The directory change is process-wide. Callers must not run this
    /// concurrently with other operations that resolve relative paths.
    pub fn locate<P: AsRef<Path>>(path: P) -> Result<GitRepository, GitUtilsError> {
        let repo = Self::discover(path)?;
        env::set_current_dir(repo.root())?;
        debug!("Changed working directory to {}", repo.root().display());
        Ok(repo)
    }
}

impl GitRepository {
    /// Wraps an already opened repository.
    ///
    /// Fails with [`GitUtilsError::Settings`] when the settings file is malformed.
    pub fn from_repository(repo: Repository) -> Result<Self, GitUtilsError> {
        // Bare repositories have no working tree; their metadata dir is the root.
        let root = repo.workdir().unwrap_or_else(|| repo.path()).to_path_buf();

        Ok(Self {
            repo,
            root,
            git_program: settings::git_program()?,
        })
    }

    /// Overrides the program used for external tool invocations.
    pub fn with_git_program(mut self, program: impl Into<String>) -> Self {
        self.git_program = program.into();
        self
    }

    /// Repository root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Whether the repository has no working tree.
    pub fn is_bare(&self) -> bool {
        self.repo.is_bare()
    }

    /// Program invoked for external tool calls.
    pub fn git_program(&self) -> &str {
        &self.git_program
    }

    /// Get access to the underlying git2::Repository
    pub fn repository(&self) -> &Repository {
        &self.repo
    }
}
