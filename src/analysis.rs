//! Per-file dependency analysis.
//!
//! [`Analyzer::analyze`] turns one workflow file into a [`WorkflowComponent`]:
//!
//! ```text
//! parse → imports → wrappers → exported name
//!       → inherited + class + module + instantiated activities
//!       → child workflows → dedupe
//! ```
//!
//! Only the entry file can fail. Every collaborator file opened on the way
//! (base classes, constant modules, instantiated classes) degrades to an
//! empty contribution.

use crate::base::{VisitedFiles, normalize_path};
use crate::component::{WorkflowComponent, dedupe_by_key};
use crate::config::AnalyzerConfig;
use crate::extract::{
    FileContext, extract_child_workflows, extract_class_activities, extract_inherited_activities,
    extract_instantiated_activities, extract_module_activities, find_exported_name,
    find_wrapper_names,
};
use crate::parser::{parse_source, with_parsed_file};
use crate::resolver::collect_imports;
use oxc_allocator::Allocator;
use oxc_ast::ast::Program;
use std::path::Path;

pub use crate::error::AnalysisError;

/// Analyzes workflow files with a fixed SDK vocabulary.
///
/// The analyzer holds no per-file state, so one instance can be shared
/// across threads.
#[derive(Debug, Clone, Default)]
pub struct Analyzer {
    config: AnalyzerConfig,
}

impl Analyzer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: AnalyzerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Reads, parses and analyzes the workflow file at `path`.
    ///
    /// `fallback_queue` is reported for every activity or child workflow
    /// whose own queue cannot be determined statically.
    pub fn analyze(
        &self,
        path: impl AsRef<Path>,
        fallback_queue: &str,
    ) -> Result<WorkflowComponent, AnalysisError> {
        let path = normalize_path(path.as_ref());
        tracing::debug!(path = %path.display(), fallback_queue, "[ANALYZE] workflow file");
        with_parsed_file(&path, |program| self.analyze_program(program, &path, fallback_queue))
    }

    /// Analyzes in-memory `source` as if it were the file at `path`.
    ///
    /// Relative imports are still resolved against `path` on disk.
    pub fn analyze_source(
        &self,
        source: &str,
        path: impl AsRef<Path>,
        fallback_queue: &str,
    ) -> Result<WorkflowComponent, AnalysisError> {
        let path = normalize_path(path.as_ref());
        let allocator = Allocator::default();
        let program = parse_source(&allocator, source, &path)
            .map_err(|err| AnalysisError::unparsable(&path, err.message))?;
        Ok(self.analyze_program(&program, &path, fallback_queue))
    }

    fn analyze_program(
        &self,
        program: &Program<'_>,
        path: &Path,
        fallback_queue: &str,
    ) -> WorkflowComponent {
        let imports = collect_imports(program);
        let wrappers = find_wrapper_names(program, &self.config);
        let name = find_exported_name(program);
        let ctx = FileContext::new(program, &imports, path, fallback_queue, &self.config);

        let mut activities = extract_inherited_activities(&ctx, &mut VisitedFiles::starting_at(path));
        activities.extend(extract_class_activities(&ctx));
        activities.extend(extract_module_activities(&ctx));
        activities.extend(extract_instantiated_activities(
            &ctx,
            &mut VisitedFiles::starting_at(path),
        ));
        let activities =
            dedupe_by_key(activities, |activity| (activity.name.clone(), activity.task_queue.clone()));

        let child_workflows = extract_child_workflows(&ctx, &wrappers);

        tracing::debug!(
            path = %path.display(),
            name = name.as_deref().unwrap_or("<anonymous>"),
            activities = activities.len(),
            child_workflows = child_workflows.len(),
            "[ANALYZE] done"
        );

        WorkflowComponent { name, activities, child_workflows, task_queue: None }
    }
}

/// Analyzes `path` with the default SDK vocabulary.
pub fn analyze(
    path: impl AsRef<Path>,
    fallback_queue: &str,
) -> Result<WorkflowComponent, AnalysisError> {
    Analyzer::new().analyze(path, fallback_queue)
}
