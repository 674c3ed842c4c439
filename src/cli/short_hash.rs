//! Short-hash command — prints the abbreviated id of a commit.

use anyhow::{Context, Result};
use clap::Parser;

use crate::cli::RepoArgs;

/// Short-hash command options.
#[derive(Parser)]
pub struct ShortHashCommand {
    /// Revision to abbreviate (hash, branch, HEAD~1, ...).
    #[arg(value_name = "REV", default_value = "HEAD")]
    pub revision: String,

    /// Abbreviate with libgit2 instead of running git.
    #[arg(long)]
    pub in_process: bool,

    /// Repository selection.
    #[command(flatten)]
    pub repo: RepoArgs,
}

impl ShortHashCommand {
    /// Executes the short-hash command.
    pub fn execute(self) -> Result<()> {
        let repo = self.repo.locate()?;
        let commit = repo
            .resolve_commit(&self.revision)
            .with_context(|| format!("Failed to resolve revision: {}", self.revision))?;

        let short = if self.in_process {
            repo.short_id(commit)?
        } else {
            repo.short_hash(commit)
                .context("Failed to abbreviate commit hash")?
        };

        println!("{short}");
        Ok(())
    }
}
