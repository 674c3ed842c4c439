//! Info command — outputs repository and HEAD information in YAML format.

use anyhow::{Context, Result};
use clap::Parser;
use git2::ErrorCode;
use serde::Serialize;

use crate::cli::RepoArgs;
use crate::git::{GitRepository, GitUtilsError, HeadState};

/// Info command options.
#[derive(Parser)]
pub struct InfoCommand {
    /// Repository selection.
    #[command(flatten)]
    pub repo: RepoArgs,
}

/// Repository summary emitted by the info command.
#[derive(Debug, Serialize)]
pub struct RepositoryInfo {
    /// Repository root directory.
    pub root: String,
    /// Whether the repository has no working tree.
    pub bare: bool,
    /// State of HEAD.
    pub head: HeadInfo,
}

/// HEAD details.
#[derive(Debug, Serialize)]
pub struct HeadInfo {
    /// Whether HEAD points directly at a commit.
    pub detached: bool,
    /// Checked out branch; absent when detached or when HEAD names a missing branch.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branch: Option<String>,
    /// Name HEAD points at when no such branch exists (unborn or damaged refs).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub missing_branch: Option<String>,
    /// Full id of the HEAD commit; absent on an unborn branch.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commit: Option<String>,
    /// Abbreviated id of the HEAD commit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub short_hash: Option<String>,
}

impl RepositoryInfo {
    /// Collects information about a repository without modifying it.
    pub fn collect(repo: &GitRepository) -> Result<Self> {
        let head_state = repo.head_state().context("Failed to read HEAD")?;

        let (branch, missing_branch) = match repo.current_branch_name() {
            Ok(branch) => (branch, None),
            Err(GitUtilsError::BranchResolutionFailure { name }) => (None, Some(name)),
            Err(e) => return Err(e).context("Failed to resolve current branch"),
        };

        let commit = match repo.resolve_commit("HEAD") {
            Ok(oid) => Some(oid),
            Err(GitUtilsError::Git(e))
                if matches!(e.code(), ErrorCode::UnbornBranch | ErrorCode::NotFound) =>
            {
                None
            }
            Err(e) => return Err(e).context("Failed to resolve HEAD commit"),
        };

        let short_hash = commit
            .map(|oid| repo.short_hash(oid))
            .transpose()
            .context("Failed to abbreviate HEAD commit")?;

        Ok(Self {
            root: repo.root().to_string_lossy().to_string(),
            bare: repo.is_bare(),
            head: HeadInfo {
                detached: head_state == HeadState::Detached,
                branch,
                missing_branch,
                commit: commit.map(|oid| oid.to_string()),
                short_hash,
            },
        })
    }

    /// Renders the summary as YAML.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).context("Failed to serialize repository info")
    }
}

impl InfoCommand {
    /// Executes the info command.
    pub fn execute(self) -> Result<()> {
        let repo = self.repo.locate()?;
        let info = RepositoryInfo::collect(&repo)?;
        print!("{}", info.to_yaml()?);
        Ok(())
    }
}
