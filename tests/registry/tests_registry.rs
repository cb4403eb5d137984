#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::helpers::fixtures::{fixtures_dir, workflow_fixture};
use std::sync::Arc;
use workflow_deps::{RegistryService, WorkerRegistration};

#[test]
fn test_fixture_directory_registration() {
    let registry = RegistryService::new("fixtures-service");
    let count = registry
        .register_workflows(workflow_fixture("index.js"), "fixtures-queue")
        .unwrap();

    let workflows = registry.snapshot().workflows;
    assert_eq!(count, workflows.len());
    assert!(workflows.iter().all(|w| w.task_queue.as_deref() == Some("fixtures-queue")));

    let names: Vec<_> = workflows.iter().filter_map(|w| w.name.as_deref()).collect();
    assert_eq!(names.first(), Some(&"testBaseClassWorkflow"));
    assert!(names.contains(&"mixedActivitiesWorkflow"));
    assert!(names.contains(&"dynamicHandlerWorkflow"));
    // helpers/ is a subdirectory and is not walked.
    assert!(!names.contains(&"HandlerA"));
    assert_eq!(count, 21);
}

#[test]
fn test_fallback_queue_is_the_worker_queue() {
    let registry = RegistryService::new("svc");
    registry.register_workflows(workflow_fixture("index.js"), "worker-q").unwrap();

    let workflows = registry.snapshot().workflows;
    let local = workflows
        .iter()
        .find(|w| w.name.as_deref() == Some("localActivitiesWorkflow"))
        .unwrap();
    assert!(local.activities.iter().all(|a| a.task_queue.as_deref() == Some("worker-q")));
}

#[test]
fn test_concurrent_workers_share_one_registry() {
    let registry = Arc::new(RegistryService::new("svc"));
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let registry = Arc::clone(&registry);
            std::thread::spawn(move || {
                let worker = WorkerRegistration::new(format!("queue-{i}")).with_activities([format!("activity-{i}")]);
                registry.register_worker(&worker).unwrap();
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let mut queues: Vec<_> = registry
        .snapshot()
        .activities
        .into_iter()
        .filter_map(|a| a.task_queue)
        .collect();
    queues.sort();
    assert_eq!(queues, vec!["queue-0", "queue-1", "queue-2", "queue-3"]);
}

#[test]
fn test_manifest_json() {
    let registry = RegistryService::new("manifest-service");
    let worker = WorkerRegistration::new("main")
        .with_activities(["sendEmail"])
        .with_workflows_path(fixtures_dir().join("workflows"));
    registry.register_worker(&worker).unwrap();

    let json: serde_json::Value = serde_json::from_str(&registry.to_json().unwrap()).unwrap();
    assert_eq!(json["serviceName"], "manifest-service");
    assert_eq!(json["registryVersion"], env!("CARGO_PKG_VERSION"));
    assert_eq!(json["components"]["activities"][0], serde_json::json!({ "name": "sendEmail", "taskQueue": "main" }));
    assert!(json["components"]["workflows"].as_array().unwrap().len() > 1);
}
