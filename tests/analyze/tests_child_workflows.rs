#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::helpers::fixtures::{CURRENT_QUEUE, analyze_fixture, child_pairs, pairs};
use rstest::rstest;

#[rstest]
#[case(
    "child-workflows.workflow.js",
    "childWorkflowsWorkflow",
    &[("myChildWorkflow", "child-task-queue"), ("anotherChildWorkflow", CURRENT_QUEUE)]
)]
#[case(
    "method-child-workflows.workflow.js",
    "MethodChildWorkflow",
    &[("testWorkflow", "test-queue"), ("anotherTestWorkflow", CURRENT_QUEUE)]
)]
#[case(
    "wrapper-child-workflows.workflow.js",
    "promiseAllWrapperWorkflow",
    &[("testChildWorkflow1", "test-queue-1"), ("testChildWorkflow2", "test-queue-2")]
)]
#[case(
    "false-positive.workflow.js",
    "mixedSignatureWrapperWorkflow",
    &[("testChildWorkflow", "test-queue")]
)]
#[case(
    "parent-class-wrapper.workflow.js",
    "childWorkflowFromParentClass",
    &[
        ("exportFilesWorkflow", "fs-service"),
        ("exportDbWorkflow", "db-api"),
        ("deleteBackupWorkflow", "sites-backup"),
    ]
)]
#[case(
    "member-expression-name.workflow.js",
    "childWorkflowWithDotName",
    &[("testChildWorkflow", "test-queue")]
)]
#[case(
    "member-expression-child-workflows.workflow.js",
    "memberExpressionChildWorkflowsWorkflow",
    &[
        ("deleteInstanceResources", "resource-task-queue"),
        ("instanceBackup", "backup-task-queue"),
        ("httpRulesDelete", CURRENT_QUEUE),
    ]
)]
#[case(
    "nested-member-expression-child-workflows.workflow.js",
    "nestedMemberExpressionChildWorkflowsWorkflow",
    &[("deleteResource", "resource-queue"), ("backupResource", "backup-queue")]
)]
#[case("member-expression-non-constant.workflow.js", "memberExpressionNonConstantWorkflow", &[])]
fn test_child_workflow_fixtures(
    #[case] file: &str,
    #[case] name: &str,
    #[case] expected: &[(&str, &str)],
) {
    let component = analyze_fixture(file);
    assert_eq!(component.name.as_deref(), Some(name));
    assert_eq!(child_pairs(&component), pairs(expected));
    assert!(component.activities.is_empty());
}
