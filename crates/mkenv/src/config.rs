//! Layered configuration for mkenv.
//!
//! Values are looked up in this order: an explicit `--config` path, an
//! `mkenv.toml` in the scanned directory, then the user configuration
//! directory. The first file found supplies the file-level values; command
//! line flags override them, and `[package-map]` entries are merged over the
//! built-in canonicalization table.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use etcetera::{BaseStrategy, choose_base_strategy};
use indexmap::IndexMap;
use log::debug;
use serde::Deserialize;

/// Name of the configuration file, both in the project root and under the
/// user configuration directory.
pub const CONFIG_FILE_NAME: &str = "mkenv.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct Config {
    /// Default environment name, overridden by `--env-name`
    pub env_name: Option<String>,
    /// Default interpreter version, overridden by `--python-version`
    pub python_version: Option<String>,
    /// Overrides and extensions of the built-in package table. An empty
    /// value suppresses the name entirely.
    pub package_map: IndexMap<String, String>,
}

impl Config {
    /// Load configuration for a run.
    ///
    /// An explicit path must exist and parse; a malformed table silently
    /// producing a differently-mapped document is worse than failing, so
    /// parse errors are fatal for discovered files too.
    pub fn load(explicit: Option<&Path>, root: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        let project = root.join(CONFIG_FILE_NAME);
        if project.is_file() {
            return Self::from_file(&project);
        }

        if let Some(user) = Self::user_config_path()
            && user.is_file()
        {
            return Self::from_file(&user);
        }

        Ok(Self::default())
    }

    fn from_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let config: Self = toml::from_str(&text)
            .with_context(|| format!("failed to parse config file {}", path.display()))?;
        debug!("loaded configuration from {}", path.display());
        Ok(config)
    }

    /// `<user config dir>/mkenv/mkenv.toml`, if a home directory exists.
    fn user_config_path() -> Option<PathBuf> {
        let strategy = choose_base_strategy().ok()?;
        Some(strategy.config_dir().join("mkenv").join(CONFIG_FILE_NAME))
    }
}
