//! Version-control adapter with canned answers.

use datagen_core::{
    application::{ApplicationError, ports::VersionControl},
    error::DatagenResult,
};

/// Answers version queries from fixed values instead of a repository.
///
/// Used by tests and by callers that already know the version, e.g. a
/// packaging pipeline building from an exported tarball.
#[derive(Debug, Clone)]
pub struct FixedVersionControl {
    tag: Option<String>,
    commit: String,
    available: bool,
}

impl FixedVersionControl {
    pub fn new(tag: Option<&str>, commit: impl Into<String>) -> Self {
        Self {
            tag: tag.map(str::to_string),
            commit: commit.into(),
            available: true,
        }
    }

    /// Behave as if the executable could not be found.
    pub fn unavailable() -> Self {
        Self {
            tag: None,
            commit: String::new(),
            available: false,
        }
    }
}

impl VersionControl for FixedVersionControl {
    fn ensure_available(&self) -> DatagenResult<()> {
        if self.available {
            Ok(())
        } else {
            Err(ApplicationError::MissingExecutable { name: "git".into() }.into())
        }
    }

    fn nearest_tag(&self) -> DatagenResult<Option<String>> {
        Ok(self.tag.clone())
    }

    fn head_commit(&self) -> DatagenResult<String> {
        Ok(self.commit.clone())
    }
}
