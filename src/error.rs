//! Error types for droidcheck operations.
//!
//! This module defines [`VerifyError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Expected check failures (missing tool, unset variable, version mismatch)
//!   are built as `VerifyError` values and logged through their `Display`,
//!   then reported as the check's boolean outcome
//! - `VerifyError` is returned when something stops a check from producing
//!   an outcome at all; the verifier records that check as failed and moves on
//! - Use `anyhow::Error` (via `VerifyError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for droidcheck operations.
#[derive(Debug, Error)]
pub enum VerifyError {
    /// Command not found on PATH or exited non-zero.
    #[error("{tool} - Not found or failed: {reason}")]
    ToolMissing { tool: String, reason: String },

    /// Tool output did not contain the expected version string.
    #[error("{tool} - Version mismatch. Expected: {expected}")]
    VersionMismatch { tool: String, expected: String },

    /// Required environment variable is unset or empty.
    #[error("{description} ({name}) - Not set")]
    EnvVarUnset { description: String, name: String },

    /// Required path does not exist.
    #[error("{description}: {path} - Not found")]
    PathNotFound { description: String, path: PathBuf },

    /// Automation server printed neither banner nor error before the deadline.
    #[error("{server} - Startup timeout")]
    ServerStartupTimeout { server: String },

    /// Automation server reported an error while starting.
    #[error("{server} - Error: {output}")]
    ServerStartupError { server: String, output: String },

    /// Automation server could not be spawned or exited before it was ready.
    #[error("{server} - Failed to start: {reason}")]
    ServerSpawnFailure { server: String, reason: String },

    /// A check failed in a way it did not anticipate.
    #[error("{check} - Unexpected error: {message}")]
    UnexpectedException { check: String, message: String },

    /// Configuration file not found at expected location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for droidcheck operations.
pub type Result<T> = std::result::Result<T, VerifyError>;
