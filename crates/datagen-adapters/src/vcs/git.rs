//! Git adapter shelling out to the `git` executable.

use std::{
    path::PathBuf,
    process::{Command, Output},
};

use tracing::{debug, instrument};

use datagen_core::{
    application::{ApplicationError, ports::VersionControl},
    error::DatagenResult,
};

const DESCRIBE_ARGS: &[&str] = &["describe", "--tags", "--abbrev=0"];
// The quotes are passed through literally; `CommitPrefix` strips them.
const HEAD_ARGS: &[&str] = &["log", "-n", "1", "--format='%H'"];

/// Queries a working tree through the `git` command-line client.
#[derive(Debug, Clone)]
pub struct GitCli {
    program: String,
    workdir: PathBuf,
}

impl GitCli {
    /// Run `git` inside `workdir`.
    pub fn new(workdir: impl Into<PathBuf>) -> Self {
        Self {
            program: "git".into(),
            workdir: workdir.into(),
        }
    }

    /// Use a different executable name or path.
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    fn describe(&self, args: &[&str]) -> String {
        format!("{} {}", self.program, args.join(" "))
    }

    fn run(&self, args: &[&str]) -> DatagenResult<Output> {
        Command::new(&self.program)
            .args(args)
            .current_dir(&self.workdir)
            .output()
            .map_err(|e| {
                ApplicationError::SubprocessFailed {
                    command: self.describe(args),
                    reason: e.to_string(),
                }
                .into()
            })
    }
}

impl VersionControl for GitCli {
    fn ensure_available(&self) -> DatagenResult<()> {
        let resolved =
            which::which(&self.program).map_err(|_| ApplicationError::MissingExecutable {
                name: self.program.clone(),
            })?;
        debug!(path = %resolved.display(), "Resolved version-control executable");
        Ok(())
    }

    #[instrument(skip(self), fields(workdir = %self.workdir.display()))]
    fn nearest_tag(&self) -> DatagenResult<Option<String>> {
        let output = match self.run(DESCRIBE_ARGS) {
            Ok(output) => output,
            Err(e) => {
                debug!(error = %e, "Tag lookup could not run");
                return Ok(None);
            }
        };

        if !output.status.success() {
            debug!(
                status = %output.status,
                stderr = %String::from_utf8_lossy(&output.stderr).trim(),
                "No tag reachable from HEAD"
            );
            return Ok(None);
        }

        Ok(Some(String::from_utf8_lossy(&output.stdout).into_owned()))
    }

    #[instrument(skip(self), fields(workdir = %self.workdir.display()))]
    fn head_commit(&self) -> DatagenResult<String> {
        let output = self.run(HEAD_ARGS)?;

        // No commits or no repository: stdout is empty and the caller
        // rejects the short hash.
        if !output.status.success() {
            debug!(
                status = %output.status,
                stderr = %String::from_utf8_lossy(&output.stderr).trim(),
                "Commit lookup exited non-zero"
            );
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
