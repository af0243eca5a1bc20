//! Command handlers.
//!
//! Each handler translates parsed arguments into a core service call and
//! renders the result. No business logic lives here.

use std::path::Path;

use datagen_adapters::{GitCli, LocalFilesystem, RustSourceRenderer};
use datagen_core::application::{EmbedService, Layout};

use crate::{
    cli::PathArgs,
    config::AppConfig,
    error::{CliResult, IntoCli},
};

pub mod check;
pub mod completions;
pub mod generate;

/// Resolve the layout: CLI flags win over configuration.
fn resolve_layout(root: &Path, paths: &PathArgs, config: &AppConfig) -> Layout {
    let mut layout = config.layout(root);
    if let Some(dir) = &paths.source_dir {
        layout = layout.with_source_dir(dir);
    }
    if let Some(output) = &paths.output {
        layout = layout.with_output(output);
    }
    layout
}

/// Wire the production adapters around the working directory.
fn build_service(paths: &PathArgs, config: &AppConfig) -> CliResult<EmbedService> {
    let root = std::env::current_dir()
        .with_cli_context(|| "Failed to determine the working directory")?;
    let layout = resolve_layout(&root, paths, config);

    Ok(EmbedService::new(
        Box::new(LocalFilesystem::new()),
        Box::new(GitCli::new(&root).with_program(&config.vcs.program)),
        Box::new(RustSourceRenderer::new()),
        layout,
    ))
}
