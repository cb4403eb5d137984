#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::helpers::fixtures::{CURRENT_QUEUE, activity_pairs, analyze_fixture, pairs};
use rstest::rstest;

#[test]
fn test_mixed_activities() {
    let component = analyze_fixture("mixed-activities.workflow.js");
    assert_eq!(component.name.as_deref(), Some("mixedActivitiesWorkflow"));
    assert_eq!(
        activity_pairs(&component),
        pairs(&[
            ("myActivity", CURRENT_QUEUE),
            ("myOtherActivity", CURRENT_QUEUE),
            ("myLocalActivity", CURRENT_QUEUE),
            ("myOtherLocalActivity", CURRENT_QUEUE),
            ("myRemoteTaskActivity", "remote-task-queue"),
            ("myOtherRemoteTaskActivity", "remote-task-queue"),
            ("myRemoteTaskActivity", "second-remote-task-queue"),
            ("mySecondRemoteTaskActivity", "second-remote-task-queue"),
        ])
    );
    assert!(component.child_workflows.is_empty());
}

#[rstest]
#[case(
    "local-activities.workflow.js",
    "localActivitiesWorkflow",
    &[("localActivity1", CURRENT_QUEUE), ("localActivity2", CURRENT_QUEUE)]
)]
#[case(
    "remote-activities.workflow.js",
    "remoteActivitiesWorkflow",
    &[("remoteActivity1", "remote-queue"), ("remoteActivity2", "remote-queue")]
)]
#[case(
    "mixed-queues.workflow.js",
    "mixedQueuesWorkflow",
    &[("defaultActivity", CURRENT_QUEUE), ("queueActivity1", "queue-1"), ("queueActivity2", "queue-2")]
)]
#[case("no-activities.workflow.js", "noActivitiesWorkflow", &[])]
#[case(
    "class-based.workflow.js",
    "MyClassWorkflow",
    &[
        ("classActivity1", CURRENT_QUEUE),
        ("classActivity2", CURRENT_QUEUE),
        ("remoteClassActivity", "remote-queue"),
    ]
)]
#[case(
    "wrapped-options.workflow.js",
    "wrappedOptionsWorkflow",
    &[("submitResult", "task-runner-queue"), ("processData", "TASK_RUNNER_QUEUE")]
)]
#[case(
    "dot-notation-activities.workflow.js",
    "dotNotationActivitiesWorkflow",
    &[
        ("importDb", CURRENT_QUEUE),
        ("exportDb", CURRENT_QUEUE),
        ("processData", "remote-task-queue"),
        ("sendNotification", "remote-task-queue"),
    ]
)]
fn test_activity_fixtures(#[case] file: &str, #[case] name: &str, #[case] expected: &[(&str, &str)]) {
    let component = analyze_fixture(file);
    assert_eq!(component.name.as_deref(), Some(name));
    assert_eq!(activity_pairs(&component), pairs(expected));
    assert!(component.child_workflows.is_empty());
}

#[test]
fn test_serialized_shape() {
    let component = analyze_fixture("remote-activities.workflow.js");
    let json = serde_json::to_value(&component).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "name": "remoteActivitiesWorkflow",
            "activities": [
                { "name": "remoteActivity1", "taskQueue": "remote-queue" },
                { "name": "remoteActivity2", "taskQueue": "remote-queue" }
            ],
            "childWorkflows": []
        })
    );
}
