//! In-memory filesystem adapter for testing.

use std::{
    collections::HashMap,
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use datagen_core::{
    application::{ApplicationError, ports::Filesystem},
    error::DatagenResult,
};

/// In-memory filesystem for testing.
///
/// Clones share the same storage, so a test can keep a handle after boxing
/// one into a service.
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<HashMap<PathBuf, Vec<u8>>>>,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a file (testing helper).
    pub fn insert(&self, path: impl Into<PathBuf>, content: impl Into<Vec<u8>>) {
        if let Ok(mut inner) = self.inner.write() {
            inner.insert(path.into(), content.into());
        }
    }

    /// Delete a file (testing helper).
    pub fn remove(&self, path: &Path) {
        if let Ok(mut inner) = self.inner.write() {
            inner.remove(path);
        }
    }

    /// Read a file's content as text (testing helper).
    pub fn read_to_string(&self, path: &Path) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner
            .get(path)
            .map(|b| String::from_utf8_lossy(b).into_owned())
    }

    /// List all files.
    pub fn list_files(&self) -> Vec<PathBuf> {
        self.inner
            .read()
            .map(|inner| inner.keys().cloned().collect())
            .unwrap_or_default()
    }
}

impl Filesystem for MemoryFilesystem {
    fn read_file(&self, path: &Path) -> DatagenResult<Vec<u8>> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::LockPoisoned)?;

        inner.get(path).cloned().ok_or_else(|| {
            ApplicationError::FileReadFailure {
                path: path.to_path_buf(),
                reason: "No such file in memory filesystem".into(),
            }
            .into()
        })
    }

    fn write_file(&self, path: &Path, content: &str) -> DatagenResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::LockPoisoned)?;

        inner.insert(path.to_path_buf(), content.as_bytes().to_vec());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.inner
            .read()
            .map(|inner| inner.contains_key(path))
            .unwrap_or(false)
    }
}
