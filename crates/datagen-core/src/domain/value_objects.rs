//! Domain value objects: Fingerprint, CommitPrefix, VersionLabel.
//!
//! # Design
//!
//! These are pure value types, equality-by-value with no identity. Each one
//! enforces its invariant at construction so the rest of the crate can pass
//! them around without re-checking.

use crate::domain::error::DomainError;
use md5::{Digest, Md5};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── Fingerprint ──────────────────────────────────────────────────────────────

/// Lowercase hexadecimal MD5 digest of a scaffold file's raw bytes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Fingerprint(String);

impl Fingerprint {
    /// Length of the hex rendering of an MD5 digest.
    pub const HEX_LEN: usize = 32;

    /// Compute the fingerprint of `bytes`.
    pub fn of(bytes: &[u8]) -> Self {
        Self(format!("{:x}", Md5::digest(bytes)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Fingerprint {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let valid = s.len() == Self::HEX_LEN
            && s.bytes().all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b));
        if valid {
            Ok(Self(s.to_string()))
        } else {
            Err(DomainError::InvalidFingerprint {
                value: s.to_string(),
            })
        }
    }
}

// ── CommitPrefix ─────────────────────────────────────────────────────────────

/// The first [`CommitPrefix::LEN`] characters of the HEAD commit hash.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CommitPrefix(String);

impl CommitPrefix {
    pub const LEN: usize = 7;

    /// Derive a prefix from raw `git log` output.
    ///
    /// Surrounding whitespace, `-` and `'` are stripped first; `--format='%H'`
    /// wraps the hash in single quotes on some shells.
    pub fn from_raw(raw: &str) -> Result<Self, DomainError> {
        let trimmed = raw.trim_matches(|c: char| c.is_whitespace() || c == '-' || c == '\'');
        let prefix: String = trimmed.chars().take(Self::LEN).collect();
        if prefix.chars().count() < Self::LEN {
            return Err(DomainError::CommitTooShort {
                actual: trimmed.to_string(),
                required: Self::LEN,
            });
        }
        Ok(Self(prefix))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CommitPrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ── VersionLabel ─────────────────────────────────────────────────────────────

/// Nearest tag reachable from HEAD. Empty when the repository has no tags.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VersionLabel(String);

impl VersionLabel {
    /// Build a label from raw `git describe` output.
    pub fn from_raw(raw: &str) -> Self {
        Self(raw.trim().to_string())
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VersionLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
