//! Typed error definitions for dir_flatten.
//! Provides a small set of well-known failure modes for better logs, tests and exit codes.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FlattenError {
    #[error("Directory '{0}' does not exist")]
    RootNotFound(PathBuf),

    #[error("'{0}' is not a directory")]
    RootNotDirectory(PathBuf),

    #[error("Target '{0}' exists but is not a directory")]
    TargetNotDirectory(PathBuf),

    #[error("Cannot move '{src}': '{dest}' already exists")]
    DestinationExists { src: PathBuf, dest: PathBuf },

    #[error("Invalid target directory name '{0}': must be a single plain path component")]
    InvalidTargetName(String),

    #[error("Invalid configuration in {path}: {reason}")]
    Config { path: PathBuf, reason: String },

    #[error("Operation interrupted by user")]
    Interrupted,
}

impl FlattenError {
    /// Process exit code for this failure.
    pub fn code(&self) -> u8 {
        match self {
            FlattenError::RootNotFound(_) | FlattenError::RootNotDirectory(_) => 2,
            FlattenError::TargetNotDirectory(_) => 3,
            FlattenError::DestinationExists { .. } => 4,
            FlattenError::InvalidTargetName(_) | FlattenError::Config { .. } => 5,
            FlattenError::Interrupted => 130,
        }
    }

    /// Short machine-friendly label used as a structured log field.
    pub fn kind(&self) -> &'static str {
        match self {
            FlattenError::RootNotFound(_) => "root_not_found",
            FlattenError::RootNotDirectory(_) => "root_not_directory",
            FlattenError::TargetNotDirectory(_) => "target_not_directory",
            FlattenError::DestinationExists { .. } => "destination_exists",
            FlattenError::InvalidTargetName(_) => "invalid_target_name",
            FlattenError::Config { .. } => "config",
            FlattenError::Interrupted => "interrupted",
        }
    }
}

/// Exit code for any error surfaced by the application; untyped I/O failures map to 1.
pub fn exit_code_for(err: &anyhow::Error) -> u8 {
    err.downcast_ref::<FlattenError>()
        .map(FlattenError::code)
        .unwrap_or(1)
}
