use super::{DomainError, manifest::ManifestEntry};
use crate::domain::value_objects::Fingerprint;

/// A scaffold file read from disk, with its fingerprint.
///
/// Immutable once built. The fingerprint is always computed from the same
/// bytes that become [`ScaffoldFile::content`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldFile {
    entry: ManifestEntry,
    content: String,
    fingerprint: Fingerprint,
}

impl ScaffoldFile {
    /// Fingerprint the raw bytes and decode them as UTF-8.
    pub fn from_bytes(entry: ManifestEntry, bytes: Vec<u8>) -> Result<Self, DomainError> {
        let fingerprint = Fingerprint::of(&bytes);
        let content = String::from_utf8(bytes).map_err(|_| DomainError::NonUtf8Content {
            name: entry.name().to_string(),
        })?;
        Ok(Self {
            entry,
            content,
            fingerprint,
        })
    }

    pub fn name(&self) -> &str {
        self.entry.name()
    }

    pub fn constant(&self) -> &str {
        self.entry.constant()
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn fingerprint(&self) -> &Fingerprint {
        &self.fingerprint
    }
}
