//! Implementation of `datagen generate` (the default command).

use tracing::{debug, instrument};

use crate::{
    cli::GenerateArgs,
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

/// Execute the `datagen generate` command.
///
/// 1. Wire adapters around the working directory
/// 2. `--dry-run`: render and print, write nothing
/// 3. Otherwise generate, write, and summarise
#[instrument(skip_all, fields(dry_run = args.dry_run))]
pub fn execute(args: GenerateArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let service = super::build_service(&args.paths, &config)?;
    debug!(output = %service.layout().output_path().display(), "Layout resolved");

    if args.dry_run {
        let rendered = service.render()?;
        output.emit(&rendered.text)?;
        return Ok(());
    }

    let summary = service.generate()?;

    if output.is_json() {
        return output.json(&summary);
    }

    output.success(&format!(
        "Wrote {} ({} files, {} bytes)",
        summary.output.display(),
        summary.files.len(),
        summary.bytes
    ))?;
    for file in &summary.files {
        output.detail(&format!(
            "{:<14} {}  {}",
            file.name, file.fingerprint, file.constant
        ))?;
    }
    if summary.version.label.is_empty() {
        output.warning("No tag reachable from HEAD; VERSION is empty")?;
    }
    output.detail(&format!("version {}", summary.version))?;

    Ok(())
}
