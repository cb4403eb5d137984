#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::helpers::fixtures::{CURRENT_QUEUE, activity_pairs, analyze_fixture, child_pairs, pairs};

#[test]
fn test_base_class_activities_come_first() {
    let component = analyze_fixture("base-class-extension.workflow.js");
    assert_eq!(component.name.as_deref(), Some("testBaseClassWorkflow"));
    assert_eq!(
        activity_pairs(&component),
        pairs(&[
            ("baseActivity1", "base-activities"),
            ("baseActivity2", "base-activities"),
            ("baseActivity3", "base-activities"),
            ("baseActivity4", "base-activities"),
            ("baseActivity5", "base-activities"),
            ("baseActivity6", "base-activities"),
            ("baseActivity7", "base-activities"),
            ("childActivity1", "child-activities"),
            ("childActivity2", "child-activities"),
        ])
    );
    assert!(component.child_workflows.is_empty());
}

#[test]
fn test_lookup_table_instantiation_contributes_every_handler() {
    let component = analyze_fixture("instantiated-classes.workflow.js");
    assert_eq!(component.name.as_deref(), Some("dynamicHandlerWorkflow"));
    assert_eq!(
        activity_pairs(&component),
        pairs(&[
            ("aggregateData", "MAIN_TASK_QUEUE"),
            ("getAvailableItems", "MAIN_TASK_QUEUE"),
            ("fetchEntities", "DATA_TASK_QUEUE"),
            ("startB", "TASK_QUEUE_B"),
            ("stopB", "TASK_QUEUE_B"),
            ("activateA", "TASK_QUEUE_A"),
            ("deactivateA", "TASK_QUEUE_A"),
        ])
    );
}

#[test]
fn test_direct_instantiation() {
    let component = analyze_fixture("class-instantiation.workflow.js");
    assert_eq!(component.name.as_deref(), Some("classInstantiationWorkflow"));
    assert_eq!(
        activity_pairs(&component),
        pairs(&[
            ("loadData", "WORKFLOW_TASK_QUEUE"),
            ("activateA", "TASK_QUEUE_A"),
            ("deactivateA", "TASK_QUEUE_A"),
            ("startB", "TASK_QUEUE_B"),
            ("stopB", "TASK_QUEUE_B"),
        ])
    );
}

#[test]
fn test_imported_constant_queues() {
    let component = analyze_fixture("constant-queue.workflow.js");
    assert_eq!(
        activity_pairs(&component),
        pairs(&[("chargeCard", "billing-queue"), ("unknownQueueActivity", "MISSING_QUEUE")])
    );
    assert_eq!(child_pairs(&component), pairs(&[("receiptWorkflow", "receipts-queue")]));
}

#[test]
fn test_helper_module_without_workflow_analyzes_cleanly() {
    let component = analyze_fixture("helpers/handler-a.js");
    assert_eq!(component.name.as_deref(), Some("HandlerA"));
    assert_eq!(
        activity_pairs(&component),
        pairs(&[("activateA", "TASK_QUEUE_A"), ("deactivateA", "TASK_QUEUE_A")])
    );
    assert!(component.activities.iter().all(|a| a.task_queue.as_deref() != Some(CURRENT_QUEUE)));
}
