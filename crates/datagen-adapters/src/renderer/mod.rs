//! Artifact renderers.

mod rust_source;

pub use rust_source::RustSourceRenderer;
