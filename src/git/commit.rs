//! Commit identifiers: abbreviation, revision lookup and sign-off trailers.

use std::process::Command;
use std::sync::LazyLock;

use git2::Oid;
use regex::Regex;
use tracing::debug;

use crate::git::{GitRepository, GitUtilsError};

#[allow(clippy::expect_used)]
static SIGN_OFF_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^Signed-off-by: (.*)$").expect("sign-off pattern is valid"));

/// Variables that would point the tool at a different repository than the handle.
const INHERITED_REPO_VARS: [&str; 5] = [
    "GIT_WORK_TREE",
    "GIT_COMMON_DIR",
    "GIT_INDEX_FILE",
    "GIT_OBJECT_DIRECTORY",
    "GIT_ALTERNATE_OBJECT_DIRECTORIES",
];

/// Returns the value of every `Signed-off-by:` trailer in a commit message,
/// in the order they appear.
pub fn sign_offs(message: &str) -> Vec<String> {
    SIGN_OFF_RE
        .captures_iter(message)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().trim_end().to_string())
        .collect()
}

/// Strips the trailing newline and whitespace a command line tool prints.
pub fn trim_tool_output(output: &str) -> &str {
    output.trim_end()
}

impl GitRepository {
    /// Abbreviates a commit id exactly as `git rev-parse --short` does.
    ///
    /// The tool runs in the repository root with `GIT_DIR` pinned to this
    /// repository, ignoring any repository selected by the caller's
    /// environment. Every call spawns a new process.
    pub fn short_hash(&self, commit: Oid) -> Result<String, GitUtilsError> {
        let program = self.git_program();
        let full_id = commit.to_string();
        debug!("Running {program} rev-parse --short {full_id}");

        let mut command = Command::new(program);
        command
            .args(["rev-parse", "--short", &full_id])
            .current_dir(self.root())
            .env("GIT_DIR", self.repository().path());
        for var in INHERITED_REPO_VARS {
            command.env_remove(var);
        }

        let output = command
            .output()
            .map_err(|source| GitUtilsError::ToolSpawn {
                program: program.to_string(),
                source,
            })?;

        if !output.status.success() {
            return Err(GitUtilsError::ToolExit {
                program: program.to_string(),
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        Ok(trim_tool_output(&stdout).to_string())
    }

    /// Abbreviates a commit id in-process using libgit2.
    ///
    /// Honours `core.abbrev` and extends the prefix until it is unique, so
    /// it normally agrees with [`GitRepository::short_hash`] without
    /// spawning a process.
    pub fn short_id(&self, commit: Oid) -> Result<String, GitUtilsError> {
        let object = self.repository().find_object(commit, None)?;
        let buf = object.short_id()?;
        buf.as_str()
            .map(str::to_string)
            .ok_or_else(|| git2::Error::from_str("abbreviated id is not valid UTF-8").into())
    }

    /// Resolves a revision (`HEAD`, a branch name, a hash prefix) to a commit id.
    pub fn resolve_commit(&self, revspec: &str) -> Result<Oid, GitUtilsError> {
        let object = self.repository().revparse_single(revspec)?;
        let commit = object.peel_to_commit()?;
        Ok(commit.id())
    }

    /// Returns the sign-off trailers of a commit's message.
    pub fn commit_sign_offs(&self, commit: Oid) -> Result<Vec<String>, GitUtilsError> {
        let commit = self.repository().find_commit(commit)?;
        Ok(sign_offs(&String::from_utf8_lossy(commit.message_bytes())))
    }
}
