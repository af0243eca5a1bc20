//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "generate the artifact" or "check for drift".

pub mod embed_service;

pub use embed_service::{
    EmbedService, EmbeddedFile, GenerationSummary, Layout, RenderedArtifact,
};
