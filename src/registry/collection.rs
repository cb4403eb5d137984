//! Workflow file enumeration.

use crate::error::AnalysisError;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Directory whose files are registered for `workflows_path`: the path
/// itself when it is a directory, otherwise its parent.
pub fn workflow_directory(workflows_path: &Path) -> PathBuf {
    if workflows_path.is_dir() {
        return workflows_path.to_path_buf();
    }
    workflows_path
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Files directly inside `dir` that hold workflow code, sorted by name.
///
/// Barrel files (`index.js`, `index.ts`), declaration files and source maps
/// are skipped, as are subdirectories.
pub fn collect_workflow_files(dir: &Path) -> Result<Vec<PathBuf>, AnalysisError> {
    let mut files = Vec::new();
    for entry in WalkDir::new(dir).min_depth(1).max_depth(1).sort_by_file_name() {
        let entry = entry.map_err(|err| {
            let path = err.path().map(Path::to_path_buf).unwrap_or_else(|| dir.to_path_buf());
            AnalysisError::io(path, err.into())
        })?;
        if !entry.file_type().is_file() {
            continue;
        }
        let Some(name) = entry.file_name().to_str() else {
            continue;
        };
        if is_workflow_file_name(name) {
            files.push(entry.into_path());
        }
    }
    Ok(files)
}

pub(crate) fn is_workflow_file_name(name: &str) -> bool {
    !is_barrel_file(name) && !name.ends_with(".d.ts") && !name.ends_with(".js.map")
}

/// `index.js`, `index.ts`, and the truncated `index.j` / `index.t`.
fn is_barrel_file(name: &str) -> bool {
    matches!(name, "index.js" | "index.ts" | "index.j" | "index.t")
}
