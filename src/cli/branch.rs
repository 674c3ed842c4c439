//! Branch command — prints the current branch name.

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use crate::cli::RepoArgs;

/// Branch command options.
#[derive(Parser)]
pub struct BranchCommand {
    /// Repository selection.
    #[command(flatten)]
    pub repo: RepoArgs,
}

impl BranchCommand {
    /// Executes the branch command.
    pub fn execute(self) -> Result<()> {
        let repo = self.repo.locate()?;

        match repo
            .current_branch_name()
            .context("Failed to resolve current branch")?
        {
            Some(name) => println!("{name}"),
            None => info!("HEAD is detached"),
        }

        Ok(())
    }
}
