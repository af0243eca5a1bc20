//! datagen Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for datagen, the
//! build-time tool that embeds project scaffold files and repository version
//! metadata into a generated Rust source file.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           datagen-cli (CLI)             │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │             (EmbedService)              │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ (Filesystem, VersionControl, Renderer)  │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    datagen-adapters (Infrastructure)    │
//! │ (LocalFilesystem, GitCli, RustSource…)  │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │ (ScaffoldManifest, Fingerprint, Artifact)│
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use datagen_core::application::{EmbedService, Layout};
//!
//! let service = EmbedService::new(filesystem, vcs, renderer, Layout::new(cwd));
//! let summary = service.generate()?;
//! println!("wrote {} ({})", summary.output.display(), summary.version);
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        EmbedService, GenerationSummary, Layout,
        ports::{ArtifactRenderer, Filesystem, VersionControl},
    };
    pub use crate::domain::{
        CheckReport, CommitPrefix, Fingerprint, GeneratedArtifact, ManifestEntry, RepoVersion,
        ScaffoldFile, ScaffoldManifest, VersionLabel,
    };
    pub use crate::error::{DatagenError, DatagenResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
