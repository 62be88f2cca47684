//! Error types for the dotconfig overlay engine.

use std::path::PathBuf;
use thiserror::Error;

/// Errors produced by a single overlay invocation.
///
/// None of these are retried; each one ends the invocation and leaves the
/// dotconfig on disk exactly as it was.
#[derive(Debug, Error)]
pub enum OverlayError {
    #[error("no options given")]
    EmptyInput,

    #[error("dotconfig file does not exist: {0}")]
    ConfigNotFound(PathBuf),

    #[error("dotconfig file not found: {0}")]
    NotFound(PathBuf),

    #[error("{path}:{line}: {message}")]
    Parse {
        path: PathBuf,
        line: usize,
        message: String,
    },

    #[error("conflicting values for option {key}: '{first}' and '{second}'")]
    DuplicateKey {
        key: String,
        first: String,
        second: String,
    },

    #[error("invalid option '{directive}': {reason}")]
    InvalidDirective { directive: String, reason: String },

    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to get user input: {0}")]
    Prompt(String),
}

impl OverlayError {
    pub(crate) fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        OverlayError::Write {
            path: path.into(),
            source,
        }
    }
}

/// Errors surfaced at the application boundary (settings, logging, commands).
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Overlay(#[from] OverlayError),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl From<config::ConfigError> for ApiError {
    fn from(err: config::ConfigError) -> Self {
        ApiError::ConfigError(err.to_string())
    }
}
