//! Scaffold Service - main application orchestrator.
//!
//! This service coordinates the scaffolding workflow:
//! 1. Plan the project structure for the configuration
//! 2. Create the root and the shared `src/` skeleton
//! 3. Materialize each branch, counting it down on a [`CompletionLatch`]
//! 4. Signal completion once the latch opens
//!
//! Branches run sequentially. The first failure aborts the run and files
//! already written stay on disk.

use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

use crate::{
    application::{
        ApplicationError, CompletionLatch,
        ports::{Filesystem, ProgressReporter, TemplateRenderer, TemplateStore},
    },
    domain::{
        self, Configuration, CreationLog, FileContent, FileSource,
        FsEntry, ProjectStructure,
    },
    error::{H5Error, H5Result},
};

/// Outcome of a successful run.
#[derive(Debug, Clone)]
pub struct ScaffoldReport {
    pub app_name: String,
    pub root: PathBuf,
    pub branches: usize,
    pub created: CreationLog,
}

impl ScaffoldReport {
    pub fn entry_count(&self) -> usize {
        self.created.len()
    }
}

/// Main scaffolding service.
pub struct ScaffoldService {
    store: Box<dyn TemplateStore>,
    renderer: Box<dyn TemplateRenderer>,
    filesystem: Box<dyn Filesystem>,
    progress: Box<dyn ProgressReporter>,
}

impl ScaffoldService {
    pub fn new(
        store: Box<dyn TemplateStore>,
        renderer: Box<dyn TemplateRenderer>,
        filesystem: Box<dyn Filesystem>,
        progress: Box<dyn ProgressReporter>,
    ) -> Self {
        Self {
            store,
            renderer,
            filesystem,
            progress,
        }
    }

    /// Scaffold a project named `app_name` into `destination`.
    ///
    /// The destination must already have passed the emptiness check (or the
    /// user must have accepted writing into it). Paths are reported joined
    /// onto `destination` exactly as given.
    #[instrument(
        skip_all,
        fields(app = %app_name, config = %cfg, destination = %destination.display())
    )]
    pub fn scaffold(
        &self,
        app_name: &str,
        cfg: &Configuration,
        destination: &Path,
    ) -> H5Result<ScaffoldReport> {
        info!("Scaffolding project");

        let structure = domain::plan(app_name, destination, cfg)?;

        let created = self.write_structure(&structure)?;

        info!(entries = created.len(), "Scaffold completed successfully");
        Ok(ScaffoldReport {
            app_name: app_name.to_string(),
            root: destination.to_path_buf(),
            branches: structure.branches().len(),
            created,
        })
    }

    fn write_structure(&self, structure: &ProjectStructure) -> H5Result<CreationLog> {
        let root = structure.root();
        let mut log = CreationLog::new();

        self.create_directory(root, &mut log)?;
        for dir in structure.skeleton() {
            self.create_directory(&root.join(&dir.path), &mut log)?;
        }

        let mut latch = CompletionLatch::new(structure.branches().len());
        for plan in structure.branches() {
            debug!(branch = %plan.branch, entries = plan.entries.len(), "Writing branch");

            for entry in &plan.entries {
                match entry {
                    FsEntry::Directory(dir) => {
                        self.create_directory(&root.join(&dir.path), &mut log)?;
                    }
                    FsEntry::File(file) => {
                        let path = root.join(&file.path);
                        let content = self.resolve(&file.source)?;
                        self.filesystem.write_file(&path, &content)?;
                        self.progress.created(&path);
                        log.record(path);
                    }
                }
            }

            if latch.complete()? {
                self.progress.finished(root);
            }
        }

        Ok(log)
    }

    fn create_directory(&self, path: &Path, log: &mut CreationLog) -> H5Result<()> {
        self.filesystem.ensure_directory(path)?;
        self.progress.created(path);
        log.record(path);
        Ok(())
    }

    /// Turn a planned source into the bytes that land on disk.
    fn resolve(&self, source: &FileSource) -> H5Result<FileContent> {
        match source {
            FileSource::Render(binding) => Ok(FileContent::Text(self.renderer.render(binding)?)),
            FileSource::Copy {
                template,
                binary: true,
            } => Ok(FileContent::Binary(self.store.raw(template)?)),
            FileSource::Copy {
                template,
                binary: false,
            } => {
                let bytes = self.store.raw(template)?;
                String::from_utf8(bytes).map(FileContent::Text).map_err(|e| {
                    H5Error::from(ApplicationError::RenderingFailed {
                        template: template.clone(),
                        reason: e.to_string(),
                    })
                })
            }
            FileSource::Generated(text) => Ok(FileContent::Text(text.clone())),
        }
    }
}
