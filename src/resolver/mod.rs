//! Import and constant resolution.
//!
//! Per-file binding tables plus on-demand lookups into other files:
//!
//! - [`imports`] - [`ImportMap`] built from `import` and `require` bindings
//! - [`values`] - String constants declared or exported by a module
//! - [`reexports`] - Star re-export detection (`export *` and its compiled form)
//! - [`classes`] - Locating the file that actually declares a class
//!
//! Lookups into other files never fail loudly: an unreadable, missing or
//! unparsable module simply contributes nothing.

mod classes;
mod imports;
mod reexports;
mod values;

pub use classes::declares_class;
pub use imports::{ImportMap, collect_imports, is_constant_identifier, top_level_const_names};
pub use reexports::re_export_specifiers;
pub use values::find_constant_literal;

use crate::base::{VisitedFiles, resolve_module_path};
use crate::config::AnalyzerConfig;
use crate::parser::with_collaborator_file;
use std::path::{Path, PathBuf};

/// Cross-file lookups driven by the configured SDK vocabulary.
pub struct ModuleResolver<'c> {
    config: &'c AnalyzerConfig,
}

impl<'c> ModuleResolver<'c> {
    pub fn new(config: &'c AnalyzerConfig) -> Self {
        Self { config }
    }

    /// Resolves `specifier` from `from_file` and returns the string literal
    /// bound to `constant_name` there, following star re-exports.
    pub fn resolve_constant_value(
        &self,
        specifier: &str,
        constant_name: &str,
        from_file: &Path,
    ) -> Option<String> {
        let path = resolve_module_path(specifier, from_file)?;
        if path.extension().is_some_and(|ext| ext == "map") {
            return None;
        }
        let mut visited = VisitedFiles::new();
        let value = self.constant_in_file(&path, constant_name, &mut visited);
        tracing::trace!(
            specifier,
            constant_name,
            resolved = value.as_deref().unwrap_or("<none>"),
            "[RESOLVE] constant lookup"
        );
        value
    }

    fn constant_in_file(
        &self,
        path: &Path,
        constant_name: &str,
        visited: &mut VisitedFiles,
    ) -> Option<String> {
        if !visited.insert(path) {
            tracing::debug!(path = %path.display(), "[RESOLVE] re-export cycle");
            return None;
        }

        let (value, re_exports) = with_collaborator_file(path, |program| {
            (
                find_constant_literal(program, constant_name),
                re_export_specifiers(program, &self.config.re_export_helper),
            )
        })?;
        if value.is_some() {
            return value;
        }

        re_exports.iter().find_map(|specifier| {
            let target = resolve_module_path(specifier, path)?;
            self.constant_in_file(&target, constant_name, visited)
        })
    }

    /// Finds the file that declares `class_name`, starting at `file` and
    /// following star re-exports.
    pub fn find_class_definition_file(&self, class_name: &str, file: &Path) -> Option<PathBuf> {
        let mut visited = VisitedFiles::new();
        self.class_in_file(class_name, file, &mut visited)
    }

    fn class_in_file(
        &self,
        class_name: &str,
        file: &Path,
        visited: &mut VisitedFiles,
    ) -> Option<PathBuf> {
        if !file.is_file() || !visited.insert(file) {
            return None;
        }

        let (declared, re_exports) = with_collaborator_file(file, |program| {
            (
                declares_class(program, class_name),
                re_export_specifiers(program, &self.config.re_export_helper),
            )
        })?;
        if declared {
            return Some(file.to_path_buf());
        }

        re_exports.iter().find_map(|specifier| {
            let target = resolve_module_path(specifier, file)?;
            self.class_in_file(class_name, &target, visited)
        })
    }
}
