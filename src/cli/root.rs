//! Root command — prints the repository root for a path.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::git::RepositoryLocator;

/// Root command options.
#[derive(Parser)]
pub struct RootCommand {
    /// Path to start searching from.
    #[arg(value_name = "PATH", default_value = ".")]
    pub path: PathBuf,
}

impl RootCommand {
    /// Executes the root command.
    pub fn execute(self) -> Result<()> {
        let repo = RepositoryLocator::locate(&self.path)?;
        println!("{}", repo.root().display());
        Ok(())
    }
}
