//! Typed errors for repository and reference operations.

use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

/// Errors raised while locating a repository or resolving its references.
#[derive(Error, Debug)]
pub enum GitUtilsError {
    /// No repository metadata was found in the path or any of its ancestors.
    #[error("Cannot find a repository in '{}'.", .path.display())]
    NotARepository {
        /// Absolute path the search started from.
        path: PathBuf,
    },

    /// The external tool could not be started.
    #[error("Failed to run '{program}': {source}")]
    ToolSpawn {
        /// Program that was invoked.
        program: String,
        /// Underlying spawn error.
        #[source]
        source: std::io::Error,
    },

    /// The external tool ran but exited unsuccessfully.
    #[error("'{program}' exited with {status}: {stderr}")]
    ToolExit {
        /// Program that was invoked.
        program: String,
        /// Exit status reported by the tool.
        status: ExitStatus,
        /// Captured standard error, trimmed.
        stderr: String,
    },

    /// HEAD is attached but its shorthand does not name a local branch.
    #[error("HEAD refers to '{name}', which is not an existing branch")]
    BranchResolutionFailure {
        /// Shorthand name read from HEAD.
        name: String,
    },

    /// The settings file exists but could not be read or parsed.
    #[error("Invalid settings: {0}")]
    Settings(String),

    /// Any other libgit2 failure.
    #[error(transparent)]
    Git(#[from] git2::Error),

    /// Filesystem failure while normalising paths or changing directory.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl GitUtilsError {
    /// Returns true if this error reports a failed external tool invocation.
    pub fn is_tool_failure(&self) -> bool {
        matches!(self, Self::ToolSpawn { .. } | Self::ToolExit { .. })
    }
}
