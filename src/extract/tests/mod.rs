#![allow(clippy::unwrap_used, clippy::expect_used)]


use super::FileContext;
use crate::component::ActivityComponent;
use crate::config::AnalyzerConfig;
use crate::parser::parse_source;
use crate::resolver::collect_imports;
use oxc_allocator::Allocator;
use std::path::Path;

pub(super) const DEFAULT_QUEUE: &str = "current-task-queue";

/// Parses `source` as if it lived at `path` and runs `f` against it.
pub(super) fn with_context<T>(
    source: &str,
    path: &Path,
    f: impl FnOnce(&FileContext<'_, '_>) -> T,
) -> T {
    let allocator = Allocator::default();
    let program = parse_source(&allocator, source, path).unwrap();
    let imports = collect_imports(&program);
    let config = AnalyzerConfig::default();
    let ctx = FileContext::new(&program, &imports, path, DEFAULT_QUEUE, &config);
    f(&ctx)
}

pub(super) fn with_snippet<T>(source: &str, f: impl FnOnce(&FileContext<'_, '_>) -> T) -> T {
    with_context(source, Path::new("/workflows/snippet.workflow.js"), f)
}

pub(super) fn pairs(activities: &[ActivityComponent]) -> Vec<(&str, &str)> {
    activities
        .iter()
        .map(|a| (a.name.as_str(), a.task_queue.as_deref().unwrap_or("<none>")))
        .collect()
}
