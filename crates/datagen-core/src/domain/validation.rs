use crate::domain::{entities::ScaffoldManifest, error::DomainError};

/// Centralized domain validation.
///
/// All validation logic lives here, not scattered across services.
pub struct DomainValidator;

impl DomainValidator {
    pub fn validate_manifest(manifest: &ScaffoldManifest) -> Result<(), DomainError> {
        manifest.validate()
    }
}
