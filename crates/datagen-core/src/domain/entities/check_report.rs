use std::path::PathBuf;

use serde::Serialize;

use super::{artifact::RecordedFingerprint, scaffold_file::ScaffoldFile};
use crate::domain::value_objects::Fingerprint;

/// Drift state of one embedded file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FileStatus {
    /// Recorded fingerprint equals the current source fingerprint.
    UpToDate,
    /// Source changed since the artifact was generated.
    Stale,
    /// The artifact has no `hash:` line for this constant.
    Missing,
}

/// Comparison result for a single manifest entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileCheck {
    pub name: String,
    pub constant: String,
    pub current: Fingerprint,
    pub recorded: Option<Fingerprint>,
    pub status: FileStatus,
}

/// Outcome of comparing an existing artifact against its scaffold sources.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckReport {
    pub artifact: PathBuf,
    pub files: Vec<FileCheck>,
}

impl CheckReport {
    /// Pair each freshly read source with what the artifact recorded for it.
    pub fn compare(
        artifact: impl Into<PathBuf>,
        sources: &[ScaffoldFile],
        recorded: &[RecordedFingerprint],
    ) -> Self {
        let files = sources
            .iter()
            .map(|source| {
                let recorded = recorded
                    .iter()
                    .find(|r| r.constant == source.constant())
                    .map(|r| r.fingerprint.clone());
                let status = match &recorded {
                    None => FileStatus::Missing,
                    Some(fp) if fp == source.fingerprint() => FileStatus::UpToDate,
                    Some(_) => FileStatus::Stale,
                };
                FileCheck {
                    name: source.name().to_string(),
                    constant: source.constant().to_string(),
                    current: source.fingerprint().clone(),
                    recorded,
                    status,
                }
            })
            .collect();

        Self {
            artifact: artifact.into(),
            files,
        }
    }

    /// `true` when every entry is [`FileStatus::UpToDate`].
    pub fn is_current(&self) -> bool {
        self.files.iter().all(|f| f.status == FileStatus::UpToDate)
    }

    /// Logical names of entries that are stale or missing.
    pub fn outdated(&self) -> Vec<String> {
        self.files
            .iter()
            .filter(|f| f.status != FileStatus::UpToDate)
            .map(|f| f.name.clone())
            .collect()
    }
}
