//! SDK vocabulary recognized by the analyzer.
//!
//! These are the defaults used by [`AnalyzerConfig`](crate::config::AnalyzerConfig);
//! everything name-based in the extractors can be overridden there.

/// Functions that bind a set of remote operations to a task queue.
pub const PROXY_FUNCTIONS: &[&str] = &["proxyActivities", "proxyLocalActivities"];

/// Function that starts a child workflow.
pub const CHILD_START_FUNCTION: &str = "executeChild";

/// Helper emitted by compiled modules for `export * from "..."`.
pub const RE_EXPORT_HELPER: &str = "__exportStar";

/// Options key holding the target task queue.
pub const TASK_QUEUE_KEY: &str = "taskQueue";

/// Options key holding a child workflow's type.
pub const WORKFLOW_TYPE_KEY: &str = "type";

/// Property that names a function or class (`fn.name`).
pub const NAME_PROPERTY: &str = "name";

pub const EXPORTS_OBJECT: &str = "exports";
pub const MODULE_OBJECT: &str = "module";
pub const REQUIRE_FUNCTION: &str = "require";

/// Suffix tried after the exact path when resolving a specifier.
pub const SCRIPT_EXTENSION: &str = "js";

/// Directory entry file tried last when resolving a specifier.
pub const INDEX_FILE: &str = "index.js";

pub const PACKAGE_MANIFEST: &str = "package.json";
pub const NODE_MODULES_DIR: &str = "node_modules";

/// File extensions parsed with TypeScript syntax enabled.
pub const TYPESCRIPT_EXTENSIONS: &[&str] = &["ts", "mts", "cts", "tsx"];
