use std::collections::HashSet;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::domain::{entities::binding::TemplateBinding, error::DomainError};

/// Final project structure ready for materialization.
///
/// This is the output of scaffold planning. Paths are relative to `root`.
/// Directories every branch depends on live in `skeleton`; the rest is
/// grouped by [`Branch`] so the writer can signal completion per branch.
#[derive(Debug, Clone)]
pub struct ProjectStructure {
    pub(crate) root: PathBuf,
    pub(crate) skeleton: Vec<DirectoryToCreate>,
    pub(crate) branches: Vec<BranchPlan>,
}

impl ProjectStructure {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            skeleton: Vec::new(),
            branches: Vec::new(),
        }
    }

    pub fn add_skeleton_directory(&mut self, path: impl Into<PathBuf>) {
        self.skeleton.push(DirectoryToCreate { path: path.into() });
    }

    pub fn add_branch(&mut self, plan: BranchPlan) {
        self.branches.push(plan);
    }

    pub fn with_skeleton_directory(mut self, path: impl Into<PathBuf>) -> Self {
        self.add_skeleton_directory(path);
        self
    }

    pub fn with_branch(mut self, plan: BranchPlan) -> Self {
        self.add_branch(plan);
        self
    }

    /// Every path must be relative and appear at most once across the whole
    /// structure; a run never writes the same path twice.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.branches.is_empty() {
            return Err(DomainError::EmptyPlan);
        }

        let mut seen = HashSet::new();
        for path in self.paths() {
            if path.is_absolute() {
                return Err(DomainError::AbsolutePathNotAllowed {
                    path: path.display().to_string(),
                });
            }
            if !seen.insert(path) {
                return Err(DomainError::DuplicatePath {
                    path: path.display().to_string(),
                });
            }
        }

        Ok(())
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn skeleton(&self) -> &[DirectoryToCreate] {
        &self.skeleton
    }

    pub fn branches(&self) -> &[BranchPlan] {
        &self.branches
    }

    /// All relative paths in write order.
    pub fn paths(&self) -> impl Iterator<Item = &Path> {
        self.skeleton
            .iter()
            .map(|d| d.path.as_path())
            .chain(self.branches.iter().flat_map(|b| b.entries.iter().map(FsEntry::path)))
    }

    pub fn files(&self) -> impl Iterator<Item = &FileToWrite> {
        self.branches.iter().flat_map(|b| &b.entries).filter_map(|e| match e {
            FsEntry::File(f) => Some(f),
            _ => None,
        })
    }

    pub fn directories(&self) -> impl Iterator<Item = &DirectoryToCreate> {
        self.skeleton.iter().chain(
            self.branches.iter().flat_map(|b| &b.entries).filter_map(|e| match e {
                FsEntry::Directory(d) => Some(d),
                _ => None,
            }),
        )
    }

    pub fn entry_count(&self) -> usize {
        self.paths().count()
    }
}

/// An independent unit of work. Branches touch disjoint subtrees; the
/// scaffold is complete when every planned branch has finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Branch {
    /// `src/js/` and the script entries.
    Scripts,
    /// `src/js/libs/` and the cache utility.
    CacheLibs,
    /// `src/css/` and the stylesheets.
    Styles,
    /// `src/images/` and the sample image.
    Images,
    /// HTML pages and the optional `src/font/` directory.
    Markup,
    /// `package.json` and `.gitignore`.
    Manifest,
    /// `webpack/` and its two configuration files.
    BuildConfig,
}

impl Branch {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Scripts => "scripts",
            Self::CacheLibs => "cache-libs",
            Self::Styles => "styles",
            Self::Images => "images",
            Self::Markup => "markup",
            Self::Manifest => "manifest",
            Self::BuildConfig => "build-config",
        }
    }
}

impl fmt::Display for Branch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Entries of one branch, in write order.
#[derive(Debug, Clone)]
pub struct BranchPlan {
    pub branch: Branch,
    pub entries: Vec<FsEntry>,
}

impl BranchPlan {
    pub fn new(branch: Branch) -> Self {
        Self {
            branch,
            entries: Vec::new(),
        }
    }

    pub fn directory(mut self, path: impl Into<PathBuf>) -> Self {
        self.entries.push(FsEntry::Directory(DirectoryToCreate { path: path.into() }));
        self
    }

    pub fn file(mut self, path: impl Into<PathBuf>, source: FileSource) -> Self {
        self.entries.push(FsEntry::File(FileToWrite {
            path: path.into(),
            source,
        }));
        self
    }
}

#[derive(Debug, Clone)]
pub enum FsEntry {
    File(FileToWrite),
    Directory(DirectoryToCreate),
}

impl FsEntry {
    pub fn path(&self) -> &Path {
        match self {
            Self::File(f) => &f.path,
            Self::Directory(d) => &d.path,
        }
    }
}

/// Where a file's bytes come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileSource {
    /// Render a named template against a binding.
    Render(TemplateBinding),
    /// Copy a named template verbatim.
    Copy { template: String, binary: bool },
    /// Content computed during planning (the manifest).
    Generated(String),
}

impl FileSource {
    pub fn copy_text(template: impl Into<String>) -> Self {
        Self::Copy {
            template: template.into(),
            binary: false,
        }
    }

    pub fn copy_binary(template: impl Into<String>) -> Self {
        Self::Copy {
            template: template.into(),
            binary: true,
        }
    }
}

#[derive(Debug, Clone)]
pub struct FileToWrite {
    pub path: PathBuf,
    pub source: FileSource,
}

#[derive(Debug, Clone)]
pub struct DirectoryToCreate {
    pub path: PathBuf,
}

/// Resolved bytes of a file, as handed to the filesystem port.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileContent {
    Text(String),
    Binary(Vec<u8>),
}

impl FileContent {
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Self::Text(s) => s.as_bytes(),
            Self::Binary(b) => b,
        }
    }

    pub fn is_binary(&self) -> bool {
        matches!(self, Self::Binary(_))
    }

    pub fn len(&self) -> usize {
        self.as_bytes().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
