//! The generated artifact: everything a renderer needs, nothing it computes.

use chrono::{DateTime, SecondsFormat, Utc};

use super::{repo_version::RepoVersion, scaffold_file::ScaffoldFile};
use crate::domain::value_objects::Fingerprint;

/// Where the artifact came from, quoted in its header so readers know what
/// to edit instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactOrigin {
    /// Scaffold source directory, as configured (relative).
    pub source_dir: String,
    /// File name of the generated artifact.
    pub output_name: String,
}

/// In-memory form of the output file. Built fresh on every run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedArtifact {
    generated_at: DateTime<Utc>,
    origin: ArtifactOrigin,
    version: RepoVersion,
    files: Vec<ScaffoldFile>,
}

impl GeneratedArtifact {
    pub fn new(
        generated_at: DateTime<Utc>,
        origin: ArtifactOrigin,
        version: RepoVersion,
        files: Vec<ScaffoldFile>,
    ) -> Self {
        Self {
            generated_at,
            origin,
            version,
            files,
        }
    }

    /// RFC 3339 timestamp with second precision, as written to the header.
    pub fn timestamp(&self) -> String {
        self.generated_at.to_rfc3339_opts(SecondsFormat::Secs, true)
    }

    pub fn origin(&self) -> &ArtifactOrigin {
        &self.origin
    }

    pub fn version(&self) -> &RepoVersion {
        &self.version
    }

    pub fn files(&self) -> &[ScaffoldFile] {
        &self.files
    }
}

/// A `hash:` line read back from an existing artifact, paired with the
/// constant it annotates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedFingerprint {
    pub constant: String,
    pub fingerprint: Fingerprint,
}
