pub mod artifact;
pub mod check_report;
pub mod common;
pub mod manifest;
pub mod repo_version;
pub mod scaffold_file;

pub use crate::domain::DomainError;
pub use artifact::{ArtifactOrigin, GeneratedArtifact, RecordedFingerprint};
pub use check_report::{CheckReport, FileCheck, FileStatus};
pub use manifest::{ManifestEntry, ScaffoldManifest};
pub use repo_version::RepoVersion;
pub use scaffold_file::ScaffoldFile;
