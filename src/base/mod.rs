//! Foundation types for workflow dependency analysis.
//!
//! This module provides the leaves every other stage builds on:
//! - [`constants`] - SDK vocabulary and option keys
//! - [`normalize_path`], [`resolve_module_path`] - Module specifier resolution
//! - [`resolve_package_entry`] - `node_modules` lookup for package specifiers
//! - [`VisitedFiles`] - Cycle guard for cross-file resolution
//!
//! This module has NO dependencies on other crate modules.

pub mod constants;
mod paths;
mod visited;

pub use paths::{is_relative_specifier, normalize_path, resolve_module_path, resolve_package_entry};
pub use visited::VisitedFiles;
