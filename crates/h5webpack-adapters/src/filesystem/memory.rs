//! In-memory filesystem adapter for testing.

use std::{
    collections::{BTreeMap, BTreeSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use h5webpack_core::{
    application::{ApplicationError, ports::Filesystem},
    domain::FileContent,
    error::{H5Error, H5Result},
};

/// In-memory filesystem for testing.
///
/// Clones share state, so a test can hand one clone to the service and keep
/// another for assertions. [`MemoryFilesystem::fail_on`] injects a failure
/// at a specific path.
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: BTreeMap<PathBuf, FileContent>,
    directories: BTreeSet<PathBuf>,
    fail_at: Option<PathBuf>,
    writes: usize,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make any operation touching `path` fail.
    pub fn fail_on(self, path: impl Into<PathBuf>) -> Self {
        if let Ok(mut inner) = self.inner.write() {
            inner.fail_at = Some(path.into());
        }
        self
    }

    /// Seed a pre-existing file (to simulate a non-empty destination).
    pub fn with_file(self, path: impl Into<PathBuf>, content: &str) -> Self {
        if let Ok(mut inner) = self.inner.write() {
            inner.files.insert(path.into(), FileContent::Text(content.to_string()));
        }
        self
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: &Path) -> Option<FileContent> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path).cloned()
    }

    /// Read a text file, `None` for missing or binary files.
    pub fn read_to_string(&self, path: &Path) -> Option<String> {
        match self.read_file(path)? {
            FileContent::Text(s) => Some(s),
            FileContent::Binary(_) => None,
        }
    }

    /// Number of successful `write_file` calls.
    pub fn write_count(&self) -> usize {
        self.inner.read().map(|inner| inner.writes).unwrap_or_default()
    }
}

fn lock_error(path: &Path) -> H5Error {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: "memory filesystem lock poisoned".into(),
    }
    .into()
}

fn injected(path: &Path) -> H5Error {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: "injected failure".into(),
    }
    .into()
}

impl Filesystem for MemoryFilesystem {
    fn ensure_directory(&self, path: &Path) -> H5Result<()> {
        let mut inner = self.inner.write().map_err(|_| lock_error(path))?;

        if inner.fail_at.as_deref() == Some(path) {
            return Err(injected(path));
        }
        if inner.files.contains_key(path) {
            return Err(ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "a file exists at this path".into(),
            }
            .into());
        }

        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            inner.directories.insert(current.clone());
        }

        Ok(())
    }

    fn write_file(&self, path: &Path, content: &FileContent) -> H5Result<()> {
        let mut inner = self.inner.write().map_err(|_| lock_error(path))?;

        if inner.fail_at.as_deref() == Some(path) {
            return Err(injected(path));
        }

        // Ensure parent exists
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && !inner.directories.contains(parent)
        {
            return Err(ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "Parent directory does not exist".into(),
            }
            .into());
        }

        inner.files.insert(path.to_path_buf(), content.clone());
        inner.writes += 1;
        Ok(())
    }

    fn is_empty_directory(&self, path: &Path) -> H5Result<bool> {
        let inner = self.inner.read().map_err(|_| lock_error(path))?;
        let has_child = inner
            .files
            .keys()
            .chain(inner.directories.iter())
            .any(|p| p != path && p.starts_with(path));
        Ok(!has_child)
    }
}
