//! Settings and configuration utilities.
//!
//! This module reads settings from $HOME/.git-cc/settings.json. Every key is
//! optional; command-line flags take precedence over the file.

use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::data::changelog;
use crate::git::DEFAULT_REMOTE;
use crate::prompt::{DEFAULT_BUFFER_SIZE, DEFAULT_MESSAGE};

/// Settings loaded from $HOME/.git-cc/settings.json.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Settings {
    /// Message shown before every interactive read.
    pub prompt: String,
    /// Longest accepted line of interactive input, in bytes.
    pub buffer_size: usize,
    /// Remote used by `get-url` when `--remote` is absent.
    pub remote: String,
    /// Prefix of changelog entries when `--prefix` is absent.
    pub changelog_prefix: String,
    /// Environment variable overrides.
    pub env: HashMap<String, String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            prompt: DEFAULT_MESSAGE.to_string(),
            buffer_size: DEFAULT_BUFFER_SIZE,
            remote: DEFAULT_REMOTE.to_string(),
            changelog_prefix: changelog::DEFAULT_PREFIX.to_string(),
            env: HashMap::new(),
        }
    }
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

        // If file doesn't exist, return default settings
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

        Ok(home_dir.join(".git-cc").join("settings.json"))
    }

    /// Returns an environment variable with fallback to settings.
    pub fn get_env_var(&self, key: &str) -> Option<String> {
        env::var(key).ok().or_else(|| self.env.get(key).cloned())
    }
}
