//! Infrastructure adapters for datagen.
//!
//! This crate implements the ports defined in `datagen-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod filesystem;
pub mod renderer;
pub mod vcs;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use renderer::RustSourceRenderer;
pub use vcs::{FixedVersionControl, GitCli};
