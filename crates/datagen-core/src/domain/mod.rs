// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for datagen.
//!
//! This module contains the pure data model of a generation run. All I/O,
//! subprocess and rendering concerns are handled via ports (traits) defined
//! in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **Immutable entities**: All domain objects are Clone + PartialEq
//!
// Public API - what the world sees
pub mod entities;
pub mod error;
pub mod value_objects;

// Private implementation details - not visible outside domain
mod validation;

// Re-exports for convenience
pub use entities::{
    ArtifactOrigin, CheckReport, FileCheck, FileStatus, GeneratedArtifact, ManifestEntry,
    RecordedFingerprint, RepoVersion, ScaffoldFile, ScaffoldManifest, common::RelativePath,
};

pub use error::{DomainError, ErrorCategory};

pub use value_objects::{CommitPrefix, Fingerprint, VersionLabel};

pub use validation::DomainValidator;

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================================================
    // Cross-entity checks
    // ========================================================================

    #[test]
    fn standard_manifest_passes_validator() {
        assert!(DomainValidator::validate_manifest(&ScaffoldManifest::standard()).is_ok());
    }

    #[test]
    fn scaffold_file_keeps_manifest_identity() {
        let manifest = ScaffoldManifest::standard();
        let entry = manifest.by_constant("DATA_DOCKERFILE").unwrap().clone();
        let file = ScaffoldFile::from_bytes(entry, b"FROM rust:1.85\n".to_vec()).unwrap();
        assert_eq!(file.name(), "Dockerfile");
        assert_eq!(file.constant(), "DATA_DOCKERFILE");
    }

    #[test]
    fn domain_error_categories() {
        assert_eq!(
            DomainError::CommitTooShort {
                actual: String::new(),
                required: 7
            }
            .category(),
            ErrorCategory::Validation
        );
        assert_eq!(DomainError::EmptyManifest.category(), ErrorCategory::Internal);
    }

    #[test]
    fn every_domain_error_has_suggestions() {
        let errors = [
            DomainError::EmptyManifest,
            DomainError::NonUtf8Content { name: "x".into() },
            DomainError::MalformedArtifact {
                reason: "x".into(),
            },
            DomainError::CommitTooShort {
                actual: "x".into(),
                required: 7,
            },
        ];
        for err in errors {
            assert!(!err.suggestions().is_empty(), "{err}");
        }
    }
}
