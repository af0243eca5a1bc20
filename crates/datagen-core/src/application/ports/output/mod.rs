//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `datagen-adapters` crate provides implementations.

use crate::domain::{GeneratedArtifact, RecordedFingerprint};
use crate::error::DatagenResult;
use std::path::Path;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `datagen_adapters::filesystem::LocalFilesystem` (production)
/// - `datagen_adapters::filesystem::MemoryFilesystem` (testing)
pub trait Filesystem: Send + Sync {
    /// Read a file's raw bytes.
    fn read_file(&self, path: &Path) -> DatagenResult<Vec<u8>>;

    /// Replace a file's content in full.
    fn write_file(&self, path: &Path, content: &str) -> DatagenResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;
}

/// Port for the version-control system.
///
/// Implemented by:
/// - `datagen_adapters::vcs::GitCli` (production, shells out to `git`)
/// - `datagen_adapters::vcs::FixedVersionControl` (testing)
pub trait VersionControl: Send + Sync {
    /// Fail with `MissingExecutable` if the tool cannot be resolved.
    fn ensure_available(&self) -> DatagenResult<()>;

    /// Nearest tag reachable from HEAD, raw. `None` when the lookup fails
    /// (typically: no tags yet).
    fn nearest_tag(&self) -> DatagenResult<Option<String>>;

    /// Full hash of HEAD, raw command output.
    fn head_commit(&self) -> DatagenResult<String>;
}

/// Port for turning an artifact into source text and reading it back.
///
/// Implemented by:
/// - `datagen_adapters::renderer::RustSourceRenderer`
pub trait ArtifactRenderer: Send + Sync {
    /// Render the full output file.
    fn render(&self, artifact: &GeneratedArtifact) -> DatagenResult<String>;

    /// Recover the fingerprint comments from a previously rendered file.
    fn extract_fingerprints(&self, rendered: &str) -> DatagenResult<Vec<RecordedFingerprint>>;
}
