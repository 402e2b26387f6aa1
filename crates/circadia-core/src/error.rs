//! Core error types for circadia-core.
//!
//! The engine itself is a total function over its declared inputs; errors
//! only arise at the collaborator boundary (record validation, persistence).

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for circadia-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Configuration/persistence errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic errors with context
    #[error("{0}")]
    Custom(String),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load stored records
    #[error("Failed to load records from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save stored records
    #[error("Failed to save records to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// No platform configuration directory available
    #[error("Could not resolve a configuration directory for this platform")]
    NoConfigDir,
}

/// Validation errors.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// Invalid value
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue { field: String, message: String },

    /// Cycle length outside the supported range
    #[error("Cycle length {value} is outside the supported range {min}..={max} days")]
    CycleLengthOutOfRange { value: u32, min: u32, max: u32 },
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
