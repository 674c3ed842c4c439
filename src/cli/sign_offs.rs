//! Sign-offs command — prints the Signed-off-by trailers of a commit.

use anyhow::{Context, Result};
use clap::Parser;

use crate::cli::RepoArgs;

/// Sign-offs command options.
#[derive(Parser)]
pub struct SignOffsCommand {
    /// Revision whose message is inspected.
    #[arg(value_name = "REV", default_value = "HEAD")]
    pub revision: String,

    /// Repository selection.
    #[command(flatten)]
    pub repo: RepoArgs,
}

impl SignOffsCommand {
    /// Executes the sign-offs command.
    pub fn execute(self) -> Result<()> {
        let repo = self.repo.locate()?;
        let commit = repo
            .resolve_commit(&self.revision)
            .with_context(|| format!("Failed to resolve revision: {}", self.revision))?;

        for sign_off in repo.commit_sign_offs(commit)? {
            println!("{sign_off}");
        }

        Ok(())
    }
}
