//! Local filesystem adapter using std::fs.

use std::io::{self, Write};
use std::path::Path;

use tempfile::NamedTempFile;

use datagen_core::{
    application::{ApplicationError, ports::Filesystem},
    error::{DatagenError, DatagenResult},
};

/// Production filesystem implementation using `std::fs`.
///
/// Writes go to a temporary file next to the target and are renamed into
/// place, so a failed run never leaves a truncated artifact behind.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn read_file(&self, path: &Path) -> DatagenResult<Vec<u8>> {
        std::fs::read(path).map_err(|e| ApplicationError::FileReadFailure {
            path: path.to_path_buf(),
            reason: e.to_string(),
        }
        .into())
    }

    fn write_file(&self, path: &Path, content: &str) -> DatagenResult<()> {
        let dir = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));

        let mut tmp =
            NamedTempFile::new_in(dir).map_err(|e| map_write_error(path, e, "create temp file"))?;
        tmp.write_all(content.as_bytes())
            .map_err(|e| map_write_error(path, e, "write"))?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            // NamedTempFile is created 0600; generated sources should be readable.
            tmp.as_file()
                .set_permissions(std::fs::Permissions::from_mode(0o644))
                .map_err(|e| map_write_error(path, e, "set permissions"))?;
        }

        tmp.persist(path)
            .map_err(|e| map_write_error(path, e.error, "replace"))?;
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

fn map_write_error(path: &Path, e: io::Error, operation: &str) -> DatagenError {
    ApplicationError::FileCreateFailure {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_then_read_round_trips_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.rs");
        let fs = LocalFilesystem::new();

        fs.write_file(&path, "pub const X: &str = \"x\";\n").unwrap();
        assert!(fs.exists(&path));
        assert_eq!(
            fs.read_file(&path).unwrap(),
            b"pub const X: &str = \"x\";\n".to_vec()
        );
    }

    #[test]
    fn write_replaces_existing_file_in_full() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.rs");
        std::fs::write(&path, "a much longer previous artifact body\n").unwrap();

        LocalFilesystem::new().write_file(&path, "short\n").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "short\n");
    }

    #[test]
    fn read_missing_file_is_read_failure() {
        let dir = tempfile::tempdir().unwrap();
        let err = LocalFilesystem::new()
            .read_file(&dir.path().join("Dockerfile"))
            .unwrap_err();
        assert!(matches!(
            err,
            DatagenError::Application(ApplicationError::FileReadFailure { .. })
        ));
    }

    #[test]
    fn write_into_missing_directory_is_create_failure() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no").join("such").join("data.rs");
        let err = LocalFilesystem::new().write_file(&path, "x").unwrap_err();
        assert!(matches!(
            err,
            DatagenError::Application(ApplicationError::FileCreateFailure { .. })
        ));
        assert!(!path.exists());
    }

    #[cfg(unix)]
    #[test]
    fn written_file_is_world_readable() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.rs");
        LocalFilesystem::new().write_file(&path, "x").unwrap();
        let mode = std::fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o644);
    }
}
