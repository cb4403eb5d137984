//! Service-level registry of activities and analyzed workflows.
//!
//! Workers report what they host through explicit calls:
//!
//! - [`RegistryService::register_activities`] - Activity names served on a queue
//! - [`RegistryService::register_workflows`] - Every workflow file next to a path
//! - [`RegistryService::register_worker`] - Both, from one [`WorkerRegistration`]
//!
//! The aggregate is exposed as a [`RegistryComponents`] snapshot or as a
//! [`RegistryManifest`] ready to be served by whatever transport the caller
//! picks.

mod collection;

pub use collection::{collect_workflow_files, workflow_directory};

use crate::analysis::Analyzer;
use crate::component::{ActivityComponent, RegistryComponents, WorkflowComponent};
use crate::error::AnalysisError;
use parking_lot::RwLock;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// What a worker hosts, as reported when it is created.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkerRegistration {
    pub task_queue: String,
    pub activity_names: Vec<String>,
    /// Any path inside (or naming) the worker's workflow directory.
    pub workflows_path: Option<PathBuf>,
}

impl WorkerRegistration {
    pub fn new(task_queue: impl Into<String>) -> Self {
        Self { task_queue: task_queue.into(), ..Self::default() }
    }

    pub fn with_activities<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.activity_names.extend(names.into_iter().map(Into::into));
        self
    }

    pub fn with_workflows_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.workflows_path = Some(path.into());
        self
    }
}

/// Serializable view of a registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistryManifest {
    pub service_name: String,
    pub registry_version: String,
    pub components: RegistryComponents,
}

/// Thread-safe aggregate of everything registered by a service's workers.
pub struct RegistryService {
    service_name: String,
    analyzer: Analyzer,
    components: RwLock<RegistryComponents>,
}

impl RegistryService {
    pub fn new(service_name: impl Into<String>) -> Self {
        Self::with_analyzer(service_name, Analyzer::new())
    }

    pub fn with_analyzer(service_name: impl Into<String>, analyzer: Analyzer) -> Self {
        Self {
            service_name: service_name.into(),
            analyzer,
            components: RwLock::new(RegistryComponents::default()),
        }
    }

    pub fn service_name(&self) -> &str {
        &self.service_name
    }

    /// Appends one activity per name, in order, tagged with `task_queue`.
    pub fn register_activities<I, S>(&self, names: I, task_queue: Option<&str>)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let activities: Vec<_> = names
            .into_iter()
            .map(|name| ActivityComponent::new(name, task_queue.map(str::to_string)))
            .collect();
        tracing::info!(
            count = activities.len(),
            task_queue = task_queue.unwrap_or("<none>"),
            "[REGISTRY] registered activities"
        );
        self.components.write().activities.extend(activities);
    }

    /// Analyzes every workflow file in the directory of `workflows_path`
    /// and appends the results, tagged with `task_queue`.
    ///
    /// Files are analyzed in parallel but appended in file-name order. If
    /// any file fails, nothing from this call is appended. Returns the
    /// number of workflows appended.
    pub fn register_workflows(
        &self,
        workflows_path: impl AsRef<Path>,
        task_queue: &str,
    ) -> Result<usize, AnalysisError> {
        let dir = workflow_directory(workflows_path.as_ref());
        let files = collect_workflow_files(&dir)?;

        let results: Vec<Result<WorkflowComponent, AnalysisError>> = files
            .par_iter()
            .map(|file| {
                let mut workflow = self.analyzer.analyze(file, task_queue)?;
                workflow.task_queue = Some(task_queue.to_string());
                Ok(workflow)
            })
            .collect();
        let workflows = results
            .into_iter()
            .collect::<Result<Vec<_>, _>>()
            .inspect_err(|err| {
                tracing::warn!(dir = %dir.display(), %err, "[REGISTRY] workflow registration aborted");
            })?;

        let count = workflows.len();
        tracing::info!(dir = %dir.display(), count, task_queue, "[REGISTRY] registered workflows");
        self.components.write().workflows.extend(workflows);
        Ok(count)
    }

    /// Registers a worker's activities and, when it has one, its workflow
    /// directory.
    pub fn register_worker(&self, worker: &WorkerRegistration) -> Result<(), AnalysisError> {
        self.register_activities(&worker.activity_names, Some(&worker.task_queue));
        if let Some(path) = &worker.workflows_path {
            self.register_workflows(path, &worker.task_queue)?;
        }
        Ok(())
    }

    /// Copy of everything registered so far.
    pub fn snapshot(&self) -> RegistryComponents {
        self.components.read().clone()
    }

    pub fn manifest(&self) -> RegistryManifest {
        RegistryManifest {
            service_name: self.service_name.clone(),
            registry_version: env!("CARGO_PKG_VERSION").to_string(),
            components: self.snapshot(),
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.manifest())
    }
}
