//! Consolidated error types for the topic search library.
//!
//! Search, sampling and filtering are total and never fail. Everything that
//! reads or writes files (catalogs, config) uses `crate::error::{Error, Result}`.
//! The binary crate (`main.rs`) uses `anyhow` where appropriate.

use std::path::PathBuf;

/// Convenience alias used throughout the library.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for topic search library operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    // -- Catalog --
    #[error("failed to read catalog at {path}: {source}")]
    CatalogRead {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse catalog{}: {source}", display_origin(.origin))]
    CatalogParse {
        origin: Option<PathBuf>,
        source: toml::de::Error,
    },
    #[error("failed to parse JSON catalog{}: {source}", display_origin(.origin))]
    CatalogJson {
        origin: Option<PathBuf>,
        source: serde_json::Error,
    },
    #[error("invalid topic #{index}: {reason}")]
    InvalidTopic { index: usize, reason: String },

    // -- Config --
    #[error("failed to read config at {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config at {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("failed to write config to {path}: {source}")]
    ConfigWrite {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to serialize config: {0}")]
    ConfigSerialize(toml::ser::Error),
}

fn display_origin(origin: &Option<PathBuf>) -> String {
    match origin {
        Some(path) => format!(" at {}", path.display()),
        None => String::new(),
    }
}
