//! Application layer errors.
//!
//! These errors represent failures talking to the outside world, not data
//! model violations. Those are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// A scaffold file (or an existing artifact) could not be opened or read.
    #[error("Failed to read {}: {reason}", path.display())]
    FileReadFailure { path: PathBuf, reason: String },

    /// The output file could not be created or written.
    #[error("Failed to write {}: {reason}", path.display())]
    FileCreateFailure { path: PathBuf, reason: String },

    /// The version-control executable is not on the search path.
    #[error("Required executable '{name}' not found on PATH")]
    MissingExecutable { name: String },

    /// The version-control executable could not be spawned.
    #[error("Command `{command}` failed: {reason}")]
    SubprocessFailed { command: String, reason: String },

    /// Lock poisoned in an in-memory adapter.
    #[error("Adapter state lock poisoned")]
    LockPoisoned,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::FileReadFailure { path, .. } => vec![
                format!("Missing or unreadable: {}", path.display()),
                "Run datagen from the directory that contains the scaffold sources".into(),
                "Check --source-dir or paths.source_dir in datagen.toml".into(),
            ],
            Self::FileCreateFailure { path, .. } => vec![
                format!("Failed to write: {}", path.display()),
                "Check that you have write permissions".into(),
                "Ensure the parent directory exists".into(),
            ],
            Self::MissingExecutable { name } => vec![
                format!("Install '{}' and make sure it is on your PATH", name),
                "Or point vcs.program in datagen.toml at the executable".into(),
            ],
            Self::SubprocessFailed { .. } => vec![
                "Run datagen from inside a git working tree with at least one commit".into(),
                "Re-run with -vv to see the command output".into(),
            ],
            Self::LockPoisoned => vec!["Check the error details above".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::FileReadFailure { .. } | Self::MissingExecutable { .. } => {
                ErrorCategory::NotFound
            }
            Self::SubprocessFailed { .. } => ErrorCategory::Validation,
            Self::FileCreateFailure { .. } | Self::LockPoisoned => ErrorCategory::Internal,
        }
    }
}
