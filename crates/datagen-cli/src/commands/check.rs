//! Implementation of `datagen check`.

use tracing::instrument;

use datagen_core::domain::FileStatus;

use crate::{
    cli::CheckArgs,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `datagen check` command.
///
/// Succeeds when every recorded fingerprint matches its source; otherwise
/// fails with [`CliError::ArtifactOutOfDate`].
#[instrument(skip_all)]
pub fn execute(args: CheckArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let service = super::build_service(&args.paths, &config)?;
    let report = service.check()?;

    if output.is_json() {
        output.json(&report)?;
    } else {
        for file in &report.files {
            let line = format!("{:<14} {}", file.name, file.current);
            match file.status {
                FileStatus::UpToDate => output.detail(&line)?,
                FileStatus::Stale => output.failure(&format!("{line}  changed"))?,
                FileStatus::Missing => output.warning(&format!("{line}  not recorded"))?,
            }
        }
    }

    if !report.is_current() {
        return Err(CliError::ArtifactOutOfDate {
            files: report.outdated(),
            artifact: report.artifact,
        });
    }

    if !output.is_json() {
        output.success(&format!("{} is up to date", report.artifact.display()))?;
    }
    Ok(())
}
