//! Error types for runetrack operations.
//!
//! This module defines [`RunetrackError`], the primary error type used
//! throughout the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `RunetrackError` for failures at the IO boundary (config, content
//!   bundles, fact sources, snapshots)
//! - Use `anyhow::Error` (via `RunetrackError::Other`) for unexpected errors
//! - The evaluation core never errors: missing facts are modeled as
//!   [`RequirementStatus::Unknown`](crate::requirements::RequirementStatus::Unknown)

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for runetrack operations.
#[derive(Debug, Error)]
pub enum RunetrackError {
    /// Explicitly requested configuration file not found.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Invalid configuration structure or values.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// Content bundle file not found.
    #[error("Content bundle not found: {path}")]
    ContentNotFound { path: PathBuf },

    /// Content bundle failed to parse (including unrecognized requirement types).
    #[error("Failed to parse content bundle at {path}: {message}")]
    ContentParseError { path: PathBuf, message: String },

    /// Content bundle parsed but failed structural validation.
    #[error("Invalid content bundle: {count} error(s), first: {first}")]
    ContentValidationError { count: usize, first: String },

    /// Fact source file not found.
    #[error("Fact source not found: {path}")]
    FactsNotFound { path: PathBuf },

    /// Failed to parse a fact source.
    #[error("Failed to parse facts at {path}: {message}")]
    FactsParseError { path: PathBuf, message: String },

    /// Snapshot file not found.
    #[error("Snapshot not found: {path}")]
    SnapshotNotFound { path: PathBuf },

    /// Failed to parse a progress snapshot.
    #[error("Failed to parse snapshot at {path}: {message}")]
    SnapshotParseError { path: PathBuf, message: String },

    /// A single inline requirement could not be parsed.
    #[error("Invalid requirement: {message}")]
    RequirementParseError { message: String },

    /// A lookup by id found nothing in the loaded content.
    #[error("Unknown {kind} '{id}'")]
    UnknownContent { kind: &'static str, id: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for runetrack operations.
pub type Result<T> = std::result::Result<T, RunetrackError>;
