//! The fixed list of scaffold files that get embedded.
//!
//! Each [`ManifestEntry`] ties together three names for the same file:
//!
//! - the **logical name**: where the file lands in a freshly initialised
//!   project (`src/main.rs`)
//! - the **source path**: where it lives under the scaffold source directory
//!   (`main.rs`)
//! - the **constant**: the identifier of the generated item (`DATA_MAIN_DOT_RS`)
//!
//! The set is not pluggable; [`ScaffoldManifest::standard`] is the only
//! manifest the binary uses. It is still a plain data structure so tests can
//! build smaller ones.

use std::collections::HashSet;

use super::{DomainError, common::RelativePath};

/// One scaffold file to embed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestEntry {
    name: String,
    path: RelativePath,
    constant: String,
}

impl ManifestEntry {
    /// Build an entry, validating the source path and constant name.
    pub fn new(
        name: impl Into<String>,
        path: impl Into<std::path::PathBuf>,
        constant: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let constant = constant.into();
        validate_constant(&constant)?;
        Ok(Self {
            name: name.into(),
            path: RelativePath::try_new(path)?,
            constant,
        })
    }

    /// Logical name of the file in a new project.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Location relative to the scaffold source directory.
    pub fn path(&self) -> &RelativePath {
        &self.path
    }

    /// Identifier of the generated constant.
    pub fn constant(&self) -> &str {
        &self.constant
    }
}

/// Ordered, validated list of scaffold files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldManifest {
    entries: Vec<ManifestEntry>,
}

impl ScaffoldManifest {
    /// Build a manifest, rejecting empty lists and duplicate names/constants.
    pub fn new(entries: Vec<ManifestEntry>) -> Result<Self, DomainError> {
        let manifest = Self { entries };
        manifest.validate()?;
        Ok(manifest)
    }

    /// The six files shipped to every new project.
    pub fn standard() -> Self {
        const STANDARD: [(&str, &str, &str); 6] = [
            ("Dockerfile", "Dockerfile", "DATA_DOCKERFILE"),
            ("Makefile", "Makefile", "DATA_MAKEFILE"),
            (".gitignore", ".gitignore", "DATA_DOT_GITIGNORE"),
            (".dockerignore", ".dockerignore", "DATA_DOT_DOCKERIGNORE"),
            ("Cargo.toml", "Cargo.toml", "DATA_CARGO_DOT_TOML"),
            ("src/main.rs", "main.rs", "DATA_MAIN_DOT_RS"),
        ];

        let entries = STANDARD
            .iter()
            .map(|(name, path, constant)| ManifestEntry {
                name: (*name).to_string(),
                path: RelativePath::try_new(*path)
                    .unwrap_or_else(|e| unreachable!("standard manifest path: {e}")),
                constant: (*constant).to_string(),
            })
            .collect();

        Self { entries }
    }

    pub fn entries(&self) -> &[ManifestEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up an entry by its generated constant name.
    pub fn by_constant(&self, constant: &str) -> Option<&ManifestEntry> {
        self.entries.iter().find(|e| e.constant == constant)
    }

    pub(crate) fn validate(&self) -> Result<(), DomainError> {
        if self.entries.is_empty() {
            return Err(DomainError::EmptyManifest);
        }

        let mut names = HashSet::new();
        let mut constants = HashSet::new();
        for entry in &self.entries {
            if !names.insert(entry.name.as_str()) {
                return Err(DomainError::DuplicateEntry {
                    name: entry.name.clone(),
                });
            }
            if !constants.insert(entry.constant.as_str()) {
                return Err(DomainError::DuplicateConstant {
                    constant: entry.constant.clone(),
                });
            }
        }
        Ok(())
    }
}

/// Names reserved for the version items and the file index.
const RESERVED_CONSTANTS: [&str; 3] = ["VERSION", "COMMIT", "SCAFFOLD_FILES"];

fn validate_constant(constant: &str) -> Result<(), DomainError> {
    let invalid = |reason: &str| DomainError::InvalidConstantName {
        constant: constant.to_string(),
        reason: reason.to_string(),
    };

    let mut chars = constant.chars();
    match chars.next() {
        None => return Err(invalid("empty")),
        Some(c) if !c.is_ascii_uppercase() => {
            return Err(invalid("must start with an uppercase ASCII letter"));
        }
        Some(_) => {}
    }
    if !chars.all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_') {
        return Err(invalid("only A-Z, 0-9 and '_' are allowed"));
    }
    if RESERVED_CONSTANTS.contains(&constant) {
        return Err(invalid("reserved"));
    }
    Ok(())
}
