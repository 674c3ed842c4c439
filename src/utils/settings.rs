//! Settings and configuration utilities.
//!
//! Settings are read from $HOME/.gitutils/settings.json and act as a
//! fallback for environment variables.

use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::debug;

use crate::git::{GitUtilsError, DEFAULT_GIT_PROGRAM};

/// Environment key naming the program used for external tool calls.
pub const GIT_PROGRAM_KEY: &str = "GITUTILS_GIT";

/// Settings loaded from $HOME/.gitutils/settings.json.
#[derive(Debug, Default, Deserialize)]
pub struct Settings {
    /// Environment variable overrides.
    #[serde(default)]
    pub env: HashMap<String, String>,
}

impl Settings {
    /// Loads settings from the default location.
    pub fn load() -> Result<Self> {
        let settings_path = Self::get_settings_path()?;
        Self::load_from_path(&settings_path)
    }

    /// Loads settings from a specific path.
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings file: {}", path.display()))?;

        serde_json::from_str::<Self>(&content)
            .with_context(|| format!("Failed to parse settings file: {}", path.display()))
    }

    /// Returns the default settings path.
    pub fn get_settings_path() -> Result<PathBuf> {
        let home_dir = dirs::home_dir().context("Failed to determine home directory")?;

        Ok(home_dir.join(".gitutils").join("settings.json"))
    }

    /// Returns an environment variable with fallback to settings.
    pub fn get_env_var(&self, key: &str) -> Option<String> {
        env::var(key).ok().or_else(|| self.env.get(key).cloned())
    }

    /// Program to run for external tool invocations.
    pub fn git_program(&self) -> String {
        self.get_env_var(GIT_PROGRAM_KEY)
            .filter(|program| !program.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_GIT_PROGRAM.to_string())
    }
}

/// Resolves the external tool program from the environment and settings file.
///
/// A settings file that exists but cannot be read or parsed is an error.
pub fn git_program() -> Result<String, GitUtilsError> {
    let settings = match Settings::get_settings_path() {
        Ok(path) => Settings::load_from_path(&path)
            .map_err(|e| GitUtilsError::Settings(format!("{e:#}")))?,
        Err(e) => {
            debug!("No settings file: {e:#}");
            Settings::default()
        }
    };

    Ok(settings.git_program())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn settings_load_from_path() {
        let temp_dir = TempDir::new().unwrap();
        let settings_path = temp_dir.path().join("settings.json");

        let settings_json = r#"{
            "env": {
                "GITUTILS_TEST_VAR": "test_value",
                "GITUTILS_GIT": "/usr/local/bin/git"
            }
        }"#;
        fs::write(&settings_path, settings_json).unwrap();

        let settings = Settings::load_from_path(&settings_path).unwrap();

        assert_eq!(settings.env.get("GITUTILS_TEST_VAR").unwrap(), "test_value");
        assert_eq!(settings.env.get("GITUTILS_GIT").unwrap(), "/usr/local/bin/git");
    }

    #[test]
    fn settings_missing_file_is_default() {
        let temp_dir = TempDir::new().unwrap();
        let settings = Settings::load_from_path(temp_dir.path().join("absent.json")).unwrap();
        assert!(settings.env.is_empty());
    }

    #[test]
    fn settings_malformed_file_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let settings_path = temp_dir.path().join("settings.json");
        fs::write(&settings_path, "{ not json").unwrap();

        let err = Settings::load_from_path(&settings_path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse settings file"));
    }

    #[test]
    fn settings_get_env_var_prefers_environment() {
        let mut settings = Settings::default();
        settings
            .env
            .insert("GITUTILS_TEST_PRECEDENCE".to_string(), "from_file".to_string());

        assert_eq!(
            settings.get_env_var("GITUTILS_TEST_PRECEDENCE").unwrap(),
            "from_file"
        );

        env::set_var("GITUTILS_TEST_PRECEDENCE", "from_env");
        assert_eq!(
            settings.get_env_var("GITUTILS_TEST_PRECEDENCE").unwrap(),
            "from_env"
        );
        env::remove_var("GITUTILS_TEST_PRECEDENCE");
    }

    #[test]
    fn git_program_blank_falls_back_to_default() {
        let mut settings = Settings::default();
        settings
            .env
            .insert("UNRELATED".to_string(), "value".to_string());
        if env::var(GIT_PROGRAM_KEY).is_err() {
            assert_eq!(settings.git_program(), DEFAULT_GIT_PROGRAM);
        }

        let blank = Settings {
            env: HashMap::from([(GIT_PROGRAM_KEY.to_string(), "  ".to_string())]),
        };
        if env::var(GIT_PROGRAM_KEY).is_err() {
            assert_eq!(blank.git_program(), DEFAULT_GIT_PROGRAM);
        }
    }
}
