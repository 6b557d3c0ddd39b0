//! Error types for check-lfs operations.
//!
//! This module defines [`CheckError`], the error type returned by the
//! prerequisite checker, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - The library keeps failure causes distinct so callers and tests can
//!   inspect them
//! - The binary collapses every variant into the same exit code and the same
//!   instructional message; no cause is surfaced with its own code

use thiserror::Error;

/// Why a tool failed verification.
#[derive(Debug, Error)]
pub enum CheckError {
    /// The probe command could not be spawned at all (not on PATH,
    /// permission denied, ...).
    #[error("Failed to run '{command}': {source}")]
    SpawnFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// The probe command ran but exited nonzero.
    #[error("Command failed with exit code {code:?}: {command}")]
    CommandFailed { command: String, code: Option<i32> },

    /// The probe command exited zero but its output did not identify the tool.
    #[error("Unexpected output from '{command}': expected prefix '{expected}', got '{reported}'")]
    UnexpectedOutput {
        command: String,
        expected: String,
        reported: String,
    },
}

/// Result type alias for check-lfs operations.
pub type Result<T> = std::result::Result<T, CheckError>;
