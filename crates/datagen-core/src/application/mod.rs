//! Application layer for datagen.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (EmbedService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but holds no data
//! rules itself. Those live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{EmbedService, EmbeddedFile, GenerationSummary, Layout, RenderedArtifact};

// Re-export port traits (for adapter implementation)
pub use ports::{ArtifactRenderer, Filesystem, VersionControl};

pub use error::ApplicationError;
