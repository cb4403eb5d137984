use rustc_hash::FxHashSet;
use std::path::{Path, PathBuf};

/// Set of resolved absolute file paths already entered during one analysis.
///
/// Every recursive resolution checks membership here before reading a file,
/// which is what guarantees termination on mutually referencing files.
#[derive(Debug, Clone, Default)]
pub struct VisitedFiles {
    paths: FxHashSet<PathBuf>,
}

impl VisitedFiles {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the set with the file an analysis starts from.
    pub fn starting_at(path: &Path) -> Self {
        let mut visited = Self::new();
        visited.insert(path);
        visited
    }

    pub fn contains(&self, path: &Path) -> bool {
        self.paths.contains(path)
    }

    /// Marks `path` as entered. Returns `false` if it was already present.
    pub fn insert(&mut self, path: &Path) -> bool {
        if self.paths.contains(path) {
            return false;
        }
        self.paths.insert(path.to_path_buf())
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}
