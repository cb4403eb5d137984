//! Module specifier resolution against the file system.
//!
//! Resolution is deliberately narrow: the exact path, the path with `.js`
//! appended, then `index.js` inside it. No other extensions or export
//! condition maps are consulted.

use super::constants::{INDEX_FILE, NODE_MODULES_DIR, PACKAGE_MANIFEST, SCRIPT_EXTENSION};
use serde::Deserialize;
use std::ffi::OsString;
use std::path::{Component, Path, PathBuf};

/// Makes `path` absolute and removes `.` and `..` components lexically.
///
/// Symlinks are not followed, so two spellings of the same file through
/// different links stay distinct.
pub fn normalize_path(path: &Path) -> PathBuf {
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("/"))
            .join(path)
    };

    let mut normalized = PathBuf::new();
    for component in absolute.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other.as_os_str()),
        }
    }
    normalized
}

/// Returns true for `./x`, `../x` and absolute specifiers.
pub fn is_relative_specifier(specifier: &str) -> bool {
    specifier == "."
        || specifier == ".."
        || specifier.starts_with("./")
        || specifier.starts_with("../")
        || specifier.starts_with('/')
}

/// Resolves `specifier` relative to the directory containing `from_file`.
///
/// Tries `<dir>/<specifier>`, `<dir>/<specifier>.js`, `<dir>/<specifier>/index.js`
/// in that order; the first one that is an existing file wins.
pub fn resolve_module_path(specifier: &str, from_file: &Path) -> Option<PathBuf> {
    let dir = from_file.parent().unwrap_or_else(|| Path::new("/"));
    let target = normalize_path(&dir.join(specifier));
    load_as_file_or_index(&target)
}

/// Resolves a package-style specifier to the package's entry file.
///
/// Walks up from the directory of `from_file` looking for
/// `node_modules/<specifier>`. A match is accepted as a file, as a `.js`
/// file, or as a package directory whose manifest `main` (default
/// `index.js`) resolves to a file. Relative specifiers return `None`.
pub fn resolve_package_entry(specifier: &str, from_file: &Path) -> Option<PathBuf> {
    if specifier.is_empty() || is_relative_specifier(specifier) {
        return None;
    }

    let start = normalize_path(from_file);
    let start_dir = start.parent()?;
    for ancestor in start_dir.ancestors() {
        if ancestor.file_name().is_some_and(|name| name == NODE_MODULES_DIR) {
            continue;
        }
        let candidate = ancestor.join(NODE_MODULES_DIR).join(specifier);
        if let Some(file) = load_as_file(&candidate) {
            return Some(file);
        }
        if candidate.is_dir()
            && let Some(entry) = load_package_directory(&candidate)
        {
            return Some(entry);
        }
    }

    tracing::debug!(specifier, from = %from_file.display(), "package entry not found");
    None
}

fn load_as_file_or_index(target: &Path) -> Option<PathBuf> {
    load_as_file(target).or_else(|| {
        let index = target.join(INDEX_FILE);
        index.is_file().then_some(index)
    })
}

fn load_as_file(target: &Path) -> Option<PathBuf> {
    if target.is_file() {
        return Some(target.to_path_buf());
    }
    let with_extension = append_extension(target, SCRIPT_EXTENSION);
    with_extension.is_file().then_some(with_extension)
}

fn load_package_directory(dir: &Path) -> Option<PathBuf> {
    if let Some(main) = read_manifest_main(&dir.join(PACKAGE_MANIFEST)) {
        let target = normalize_path(&dir.join(main));
        if let Some(entry) = load_as_file_or_index(&target) {
            return Some(entry);
        }
    }
    let index = dir.join(INDEX_FILE);
    index.is_file().then_some(index)
}

#[derive(Debug, Deserialize)]
struct PackageManifest {
    #[serde(default)]
    main: Option<String>,
}

fn read_manifest_main(manifest: &Path) -> Option<String> {
    let text = std::fs::read_to_string(manifest).ok()?;
    match serde_json::from_str::<PackageManifest>(&text) {
        Ok(parsed) => parsed.main.filter(|main| !main.is_empty()),
        Err(err) => {
            tracing::debug!(manifest = %manifest.display(), %err, "ignoring malformed package manifest");
            None
        }
    }
}

/// `foo/bar` -> `foo/bar.js`, keeping any existing dots in the file name.
fn append_extension(path: &Path, extension: &str) -> PathBuf {
    let mut raw: OsString = path.as_os_str().to_os_string();
    raw.push(".");
    raw.push(extension);
    PathBuf::from(raw)
}
