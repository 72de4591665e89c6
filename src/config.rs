//! CLI configuration: config file loading and defaults.
//!
//! The config file lives at `~/.config/topics/config.toml` and controls the
//! default search limits, the suggestion count, and which catalog files to
//! load instead of the built-in catalog.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::search::SearchOptions;
use crate::suggest::DEFAULT_SUGGESTIONS;

/// Top-level CLI configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TopicsConfig {
    pub search: SearchConfig,
    pub suggestions: SuggestionsConfig,
    pub catalog: CatalogConfig,
}

/// `[search]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub limit: usize,
    pub min_query_length: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        let defaults = SearchOptions::default();
        Self {
            limit: defaults.limit,
            min_query_length: defaults.min_query_length,
        }
    }
}

impl SearchConfig {
    pub fn options(&self) -> SearchOptions {
        SearchOptions {
            limit: self.limit,
            min_query_length: self.min_query_length,
        }
    }
}

/// `[suggestions]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SuggestionsConfig {
    pub count: usize,
}

impl Default for SuggestionsConfig {
    fn default() -> Self {
        Self {
            count: DEFAULT_SUGGESTIONS,
        }
    }
}

/// `[catalog]` section: catalog files to load. Empty means built-in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    pub paths: Vec<PathBuf>,
}

/// Load configuration from `~/.config/topics/config.toml`.
///
/// Returns defaults if the file is absent. Errors if present but malformed.
pub fn load_config() -> Result<TopicsConfig> {
    let path = config_path();
    if !path.is_file() {
        tracing::debug!(path = %path.display(), "No config file, using defaults");
        return Ok(TopicsConfig::default());
    }
    load_config_from(&path)
}

/// Load configuration from a specific path.
pub fn load_config_from(path: &Path) -> Result<TopicsConfig> {
    let raw = std::fs::read_to_string(path).map_err(|e| Error::ConfigRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    let config: TopicsConfig = toml::from_str(&raw).map_err(|e| Error::ConfigParse {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(config)
}

/// Write `config` to `~/.config/topics/config.toml`, creating the directory.
/// Returns the path written.
pub fn write_config(config: &TopicsConfig) -> Result<PathBuf> {
    let path = config_path();
    write_config_to(config, &path)?;
    Ok(path)
}

/// Write `config` to a specific path.
pub fn write_config_to(config: &TopicsConfig, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| Error::ConfigWrite {
            path: parent.to_path_buf(),
            source: e,
        })?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::ConfigSerialize)?;
    std::fs::write(path, content).map_err(|e| Error::ConfigWrite {
        path: path.to_path_buf(),
        source: e,
    })?;
    tracing::info!(path = %path.display(), "Wrote config");
    Ok(())
}

/// The topics config directory: `~/.config/topics/`.
pub fn config_dir() -> PathBuf {
    if let Ok(home) = std::env::var("HOME") {
        PathBuf::from(home).join(".config").join("topics")
    } else {
        PathBuf::from("/tmp").join("topics").join("config")
    }
}

/// Full path of the config file.
pub fn config_path() -> PathBuf {
    config_dir().join("config.toml")
}
