//! # gitutils
//!
//! Repository discovery and commit reference helpers built on libgit2.
//!
//! ## Quick Start
//!
//! ```no_run
//! use gitutils::git::RepositoryLocator;
//!
//! let repo = RepositoryLocator::discover(".")?;
//! let head = repo.resolve_commit("HEAD")?;
//! println!("{} at {}", repo.root().display(), repo.short_hash(head)?);
//!
//! match repo.current_branch_name()? {
//!     Some(branch) => println!("on {branch}"),
//!     None => println!("detached"),
//! }
//! # Ok::<(), gitutils::git::GitUtilsError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod cli;
pub mod git;
pub mod utils;

pub use crate::cli::Cli;
pub use crate::git::{GitRepository, GitUtilsError, RepositoryLocator};

/// The current version of gitutils.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
