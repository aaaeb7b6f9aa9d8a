//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `h5webpack-adapters` crate provides implementations; the CLI provides
//! the progress reporter.

use std::path::Path;

use crate::domain::{FileContent, TemplateBinding};
use crate::error::H5Result;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `h5webpack_adapters::filesystem::LocalFilesystem` (production)
/// - `h5webpack_adapters::filesystem::MemoryFilesystem` (testing)
///
/// Failures other than "already exists" are fatal and never retried.
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all missing ancestors. No-op if it exists.
    fn ensure_directory(&self, path: &Path) -> H5Result<()>;

    /// Write a file, replacing any previous content.
    fn write_file(&self, path: &Path, content: &FileContent) -> H5Result<()>;

    /// `true` if `path` is missing or an empty directory.
    fn is_empty_directory(&self, path: &Path) -> H5Result<bool>;
}

/// Port for the template corpus, addressed by logical name.
///
/// Implemented by:
/// - `h5webpack_adapters::templates::EmbeddedTemplates` (compiled-in corpus)
#[cfg_attr(test, mockall::automock)]
pub trait TemplateStore: Send + Sync {
    /// Bytes of a template copied verbatim (text or binary).
    fn raw(&self, name: &str) -> H5Result<Vec<u8>>;
}

/// Port for template rendering.
///
/// Implemented by:
/// - `h5webpack_adapters::renderer::MiniJinjaRenderer`
///
/// Rendering is a pure function of the binding and the corpus.
#[cfg_attr(test, mockall::automock)]
pub trait TemplateRenderer: Send + Sync {
    fn render(&self, binding: &TemplateBinding) -> H5Result<String>;
}

/// Port for human-facing progress.
#[cfg_attr(test, mockall::automock)]
pub trait ProgressReporter: Send + Sync {
    /// A directory or file was created (or an existing directory confirmed).
    fn created(&self, path: &Path);

    /// Every branch has completed. Called exactly once per successful run.
    fn finished(&self, destination: &Path);
}
