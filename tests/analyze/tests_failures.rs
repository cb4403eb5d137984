#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::helpers::fixtures::CURRENT_QUEUE;
use std::fs;
use tempfile::TempDir;
use workflow_deps::{AnalysisError, analyze};

#[test]
fn test_corrupt_entry_file_is_fatal() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("corrupt.workflow.js");
    fs::write(&path, "const { a } = proxyActivities({ taskQueue: \"q\" ").unwrap();

    let err = analyze(&path, CURRENT_QUEUE).unwrap_err();
    assert!(matches!(err, AnalysisError::UnparsableSource { .. }));
    assert!(err.to_string().contains("corrupt.workflow.js"));
}

#[test]
fn test_leading_control_bytes_are_fatal() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("garbled.workflow.js");
    fs::write(&path, "\0\u{1}garbage ]]] {{{").unwrap();

    let err = analyze(&path, CURRENT_QUEUE).unwrap_err();
    assert!(matches!(err, AnalysisError::UnparsableSource { .. }));
    assert_eq!(err.path(), path.as_path());
}

#[test]
fn test_trailing_control_bytes_are_fatal() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("tail.workflow.js");
    fs::write(&path, "const { a } = proxyActivities({ taskQueue: \"q\" });\n\x7f\x01\x02\x03").unwrap();

    let err = analyze(&path, CURRENT_QUEUE).unwrap_err();
    assert!(matches!(err, AnalysisError::UnparsableSource { .. }));
}

#[test]
fn test_missing_base_class_module_is_not_fatal() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("orphan.workflow.js");
    fs::write(
        &path,
        r#"
const base_1 = require("./does-not-exist");
const { ownActivity } = proxyActivities({ taskQueue: "own" });
class Orphan extends base_1.MissingBase {}
exports.orphan = Orphan;
"#,
    )
    .unwrap();

    let component = analyze(&path, CURRENT_QUEUE).unwrap();
    assert_eq!(component.name.as_deref(), Some("orphan"));
    assert_eq!(component.activities.len(), 1);
    assert_eq!(component.activities[0].name, "ownActivity");
}

#[test]
fn test_unparsable_collaborator_contributes_nothing() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("broken-base.js"), "class Broken extends {").unwrap();
    let path = dir.path().join("entry.workflow.js");
    fs::write(
        &path,
        "const broken_1 = require(\"./broken-base\");\nclass Entry extends broken_1.Broken {}\n",
    )
    .unwrap();

    let component = analyze(&path, CURRENT_QUEUE).unwrap();
    assert!(component.activities.is_empty());
}

#[test]
fn test_mutually_extending_files_terminate() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("ping.js"),
        "const pong_1 = require(\"./pong\");\nconst { ping } = proxyActivities({});\nclass Ping extends pong_1.Pong {}\nexports.Ping = Ping;\n",
    )
    .unwrap();
    fs::write(
        dir.path().join("pong.js"),
        "const ping_1 = require(\"./ping\");\nconst { pong } = proxyActivities({});\nclass Pong extends ping_1.Ping {}\nexports.Pong = Pong;\n",
    )
    .unwrap();

    let component = analyze(dir.path().join("ping.js"), CURRENT_QUEUE).unwrap();
    let names: Vec<_> = component.activities.iter().map(|a| a.name.as_str()).collect();
    assert_eq!(names, vec!["pong", "ping"]);
}
