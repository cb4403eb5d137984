//! Locating and analyzing the JS fixture tree.

use std::path::PathBuf;
use workflow_deps::{WorkflowComponent, analyze};

pub const CURRENT_QUEUE: &str = "current-task-queue";

/// Root of the checked-in fixture tree.
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests").join("fixtures")
}

pub fn workflow_fixture(name: &str) -> PathBuf {
    fixtures_dir().join("workflows").join(name)
}

/// Analyzes a fixture under `fixtures/workflows` with [`CURRENT_QUEUE`].
pub fn analyze_fixture(name: &str) -> WorkflowComponent {
    let path = workflow_fixture(name);
    analyze(&path, CURRENT_QUEUE)
        .unwrap_or_else(|err| panic!("fixture {} failed to analyze: {err}", path.display()))
}

/// `(name, taskQueue)` pairs of a component's activities.
pub fn activity_pairs(component: &WorkflowComponent) -> Vec<(String, String)> {
    component
        .activities
        .iter()
        .map(|a| (a.name.clone(), a.task_queue.clone().unwrap_or_default()))
        .collect()
}

/// `(name, taskQueue)` pairs of a component's child workflows.
pub fn child_pairs(component: &WorkflowComponent) -> Vec<(String, String)> {
    component
        .child_workflows
        .iter()
        .map(|c| (c.name.clone().unwrap_or_default(), c.task_queue.clone().unwrap_or_default()))
        .collect()
}

/// Owned pairs from string literals, for comparisons.
pub fn pairs(expected: &[(&str, &str)]) -> Vec<(String, String)> {
    expected.iter().map(|(n, q)| (n.to_string(), q.to_string())).collect()
}
