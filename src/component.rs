//! Dependency records produced by analysis and aggregated by the registry.
//!
//! Serialized field names are camelCase and absent optionals are omitted, so
//! the JSON matches what registry consumers already read.

use serde::{Deserialize, Serialize};

/// One remote operation reachable from a workflow.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityComponent {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task_queue: Option<String>,
}

impl ActivityComponent {
    pub fn new(name: impl Into<String>, task_queue: Option<String>) -> Self {
        Self { name: name.into(), task_queue }
    }

    pub fn on_queue(name: impl Into<String>, task_queue: impl Into<String>) -> Self {
        Self::new(name, Some(task_queue.into()))
    }
}

/// One distinct child workflow start site.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChildWorkflowComponent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task_queue: Option<String>,
}

impl ChildWorkflowComponent {
    pub fn on_queue(name: impl Into<String>, task_queue: impl Into<String>) -> Self {
        Self { name: Some(name.into()), task_queue: Some(task_queue.into()) }
    }
}

/// Dependency record for one analyzed workflow file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowComponent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub activities: Vec<ActivityComponent>,
    pub child_workflows: Vec<ChildWorkflowComponent>,
    /// Set by the registry to the queue the workflow's worker polls.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task_queue: Option<String>,
}

/// Everything a registry has collected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryComponents {
    pub activities: Vec<ActivityComponent>,
    pub workflows: Vec<WorkflowComponent>,
}

/// Drops later entries whose `key` was already seen, keeping first-seen order.
pub(crate) fn dedupe_by_key<T, K>(items: Vec<T>, key: impl Fn(&T) -> K) -> Vec<T>
where
    K: Eq + std::hash::Hash,
{
    let mut seen = rustc_hash::FxHashSet::default();
    items.into_iter().filter(|item| seen.insert(key(item))).collect()
}
