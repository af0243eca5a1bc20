// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (carried inside reports and summaries)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Manifest Errors
    // ========================================================================
    #[error("Scaffold manifest has no entries")]
    EmptyManifest,

    #[error("Duplicate scaffold entry: {name}")]
    DuplicateEntry { name: String },

    #[error("Duplicate constant name: {constant}")]
    DuplicateConstant { constant: String },

    #[error("Absolute paths not allowed: {path}")]
    AbsolutePathNotAllowed { path: String },

    #[error("Path escapes the source directory: {path}")]
    PathEscapesRoot { path: String },

    #[error("Invalid constant name '{constant}': {reason}")]
    InvalidConstantName { constant: String, reason: String },

    // ========================================================================
    // Content Errors
    // ========================================================================
    #[error("Scaffold file '{name}' is not valid UTF-8")]
    NonUtf8Content { name: String },

    #[error("Invalid fingerprint '{value}': expected 32 lowercase hex characters")]
    InvalidFingerprint { value: String },

    // ========================================================================
    // Repository Errors
    // ========================================================================
    #[error("Commit hash too short: got {actual:?}, need at least {required} characters")]
    CommitTooShort { actual: String, required: usize },

    // ========================================================================
    // Artifact Errors
    // ========================================================================
    #[error("Malformed artifact: {reason}")]
    MalformedArtifact { reason: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::CommitTooShort { .. } => vec![
                "The repository needs at least one commit".into(),
                "Run datagen from inside a git working tree".into(),
                "Try: git log -n 1".into(),
            ],
            Self::NonUtf8Content { name } => vec![
                format!("Re-save '{}' as UTF-8 text", name),
                "Binary scaffold files cannot be embedded as string constants".into(),
            ],
            Self::MalformedArtifact { .. } => vec![
                "The generated file was edited by hand or is truncated".into(),
                "Regenerate it: datagen generate".into(),
            ],
            Self::InvalidFingerprint { .. } => vec![
                "A recorded hash line was edited by hand".into(),
                "Regenerate the artifact: datagen generate".into(),
            ],
            Self::EmptyManifest
            | Self::DuplicateEntry { .. }
            | Self::DuplicateConstant { .. }
            | Self::AbsolutePathNotAllowed { .. }
            | Self::PathEscapesRoot { .. }
            | Self::InvalidConstantName { .. } => vec![
                "The built-in scaffold manifest is inconsistent".into(),
                "This is a bug, please report it".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::CommitTooShort { .. } | Self::NonUtf8Content { .. } => {
                ErrorCategory::Validation
            }
            Self::MalformedArtifact { .. } | Self::InvalidFingerprint { .. } => {
                ErrorCategory::Validation
            }
            _ => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Internal,
}
