//! CLI interface for gitutils.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};

use crate::git::{GitRepository, RepositoryLocator};

pub mod branch;
pub mod info;
pub mod root;
pub mod short_hash;
pub mod sign_offs;

/// gitutils: repository discovery and commit reference helpers.
#[derive(Parser)]
#[command(name = "gitutils")]
#[command(about = "Repository discovery and commit reference helpers", long_about = None)]
#[command(version)]
pub struct Cli {
    /// The command to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Prints the root of the repository enclosing a path.
    Root(root::RootCommand),
    /// Prints the abbreviated hash of a commit.
    ShortHash(short_hash::ShortHashCommand),
    /// Prints the current branch, or nothing when HEAD is detached.
    Branch(branch::BranchCommand),
    /// Prints the Signed-off-by trailers of a commit.
    SignOffs(sign_offs::SignOffsCommand),
    /// Outputs repository and HEAD information in YAML format.
    Info(info::InfoCommand),
}

/// Repository selection shared by commands that operate on a repository.
#[derive(Args, Debug, Clone)]
pub struct RepoArgs {
    /// Any path inside the repository.
    #[arg(short = 'C', long = "repo", value_name = "PATH", default_value = ".")]
    pub path: PathBuf,
}

impl RepoArgs {
    /// Locates the repository and enters its root directory.
    pub fn locate(&self) -> Result<GitRepository> {
        Ok(RepositoryLocator::locate(&self.path)?)
    }
}

impl Cli {
    /// Executes the CLI command.
    pub fn execute(self) -> Result<()> {
        match self.command {
            Commands::Root(cmd) => cmd.execute(),
            Commands::ShortHash(cmd) => cmd.execute(),
            Commands::Branch(cmd) => cmd.execute(),
            Commands::SignOffs(cmd) => cmd.execute(),
            Commands::Info(cmd) => cmd.execute(),
        }
    }
}
