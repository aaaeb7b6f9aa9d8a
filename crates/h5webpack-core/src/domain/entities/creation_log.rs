use std::path::{Path, PathBuf};

/// Paths created during one run, in creation order.
///
/// Append-only. Feeds progress output and lets callers check exactly which
/// paths a run produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreationLog {
    entries: Vec<PathBuf>,
}

impl CreationLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, path: impl Into<PathBuf>) {
        self.entries.push(path.into());
    }

    pub fn contains(&self, path: impl AsRef<Path>) -> bool {
        self.entries.iter().any(|p| p == path.as_ref())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Path> {
        self.entries.iter().map(PathBuf::as_path)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
