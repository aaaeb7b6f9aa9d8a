//! Local filesystem adapter using std::fs.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

use h5webpack_core::{
    application::{ApplicationError, ports::Filesystem},
    domain::FileContent,
    error::{H5Error, H5Result},
};
use tracing::trace;

#[cfg(unix)]
const DIR_MODE: u32 = 0o755;
#[cfg(unix)]
const FILE_MODE: u32 = 0o666;

/// Production filesystem implementation using `std::fs`.
///
/// Directories are created with mode `0755` and files with `0666` on Unix,
/// both subject to the process umask.
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
    fn ensure_directory(&self, path: &Path) -> H5Result<()> {
        trace!(path = %path.display(), "mkdir -p");

        let mut builder = fs::DirBuilder::new();
        builder.recursive(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::DirBuilderExt;
            builder.mode(DIR_MODE);
        }

        match builder.create(path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists && path.is_dir() => Ok(()),
            Err(e) => Err(map_io_error(path, e, "create directory")),
        }
    }

    fn write_file(&self, path: &Path, content: &FileContent) -> H5Result<()> {
        trace!(path = %path.display(), bytes = content.len(), "write");

        let mut options = OpenOptions::new();
        options.write(true).create(true).truncate(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(FILE_MODE);
        }

        let mut file = options
            .open(path)
            .map_err(|e| map_io_error(path, e, "write file"))?;
        file.write_all(content.as_bytes())
            .map_err(|e| map_io_error(path, e, "write file"))
    }

    fn is_empty_directory(&self, path: &Path) -> H5Result<bool> {
        match fs::read_dir(path) {
            Ok(mut entries) => Ok(entries.next().is_none()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(true),
            Err(e) => Err(map_io_error(path, e, "read directory")),
        }
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> H5Error {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("Failed to {operation}: {e}"),
    }
    .into()
}
