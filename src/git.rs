//! Repository discovery and commit reference helpers.

pub mod branch;
pub mod commit;
pub mod error;
pub mod repository;

pub use branch::HeadState;
pub use commit::{sign_offs, trim_tool_output};
pub use error::GitUtilsError;
pub use repository::{GitRepository, RepositoryLocator};

/// Program used for external tool invocations when none is configured.
pub const DEFAULT_GIT_PROGRAM: &str = "git";
