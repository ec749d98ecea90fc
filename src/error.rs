//! Error types for sprint
//!
//! Exit codes:
//! - 0: Success
//! - 2: User error (bad args, invalid config or snapshot)
//! - 3: Blocked by policy (project exists but is not visible)
//! - 4: Operation failed (I/O, parse errors)
//!
//! The task table pipeline itself never fails; these errors only come from
//! the boundaries around it (loading input, config, project resolution).

use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the sprint CLI
pub mod exit_codes {
    pub const USER_ERROR: i32 = 2;
    pub const POLICY_BLOCKED: i32 = 3;
    pub const OPERATION_FAILED: i32 = 4;
}

/// Main error type for sprint operations
#[derive(Error, Debug)]
pub enum Error {
    // User errors (exit code 2)
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Invalid snapshot: {0}")]
    InvalidSnapshot(String),

    #[error("Snapshot not found: {0}")]
    SnapshotNotFound(PathBuf),

    // Policy blocks (exit code 3)
    #[error("You do not have permission to view {0}")]
    PolicyDenied(String),

    // Operation failures (exit code 4)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

impl Error {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            // User errors
            Error::InvalidConfig(_)
            | Error::InvalidArgument(_)
            | Error::InvalidSnapshot(_)
            | Error::SnapshotNotFound(_) => exit_codes::USER_ERROR,

            // Policy blocks
            Error::PolicyDenied(_) => exit_codes::POLICY_BLOCKED,

            // Operation failures
            Error::Io(_)
            | Error::Json(_)
            | Error::TomlParse(_) => exit_codes::OPERATION_FAILED,
        }
    }
}

/// Result type alias for sprint operations
pub type Result<T> = std::result::Result<T, Error>;
