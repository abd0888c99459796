//! Error types for gradtrack operations.
//!
//! This module defines [`GradError`], the error type used by every
//! boundary of the crate (file loading, parsing, schema migration, CLI),
//! and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - The calculation engine never fails: malformed rules, missing
//!   course-type data and bad credit values degrade to "matches nothing"
//!   or zero credits instead of producing an error
//! - Use `GradError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `GradError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for gradtrack operations.
#[derive(Debug, Error)]
pub enum GradError {
    /// Project configuration file not found at expected location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse a configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Invalid configuration structure or values.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// An input file (requirements, courses, course types) does not exist.
    #[error("{kind} file not found: {path}")]
    InputNotFound { kind: String, path: PathBuf },

    /// An input file exists but could not be parsed.
    #[error("Failed to parse {kind} file at {path}: {message}")]
    InputParseError {
        kind: String,
        path: PathBuf,
        message: String,
    },

    /// A legacy requirement definition could not be converted.
    #[error("Cannot migrate requirement definition: {message}")]
    MigrationError { message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for gradtrack operations.
pub type Result<T> = std::result::Result<T, GradError>;
