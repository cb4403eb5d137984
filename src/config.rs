//! Analyzer configuration.
//!
//! The extractors are driven by names rather than by imported symbols, so
//! the SDK vocabulary lives here and can be swapped for forks or wrappers
//! of the orchestration SDK.

use crate::base::constants::{CHILD_START_FUNCTION, PROXY_FUNCTIONS, RE_EXPORT_HELPER};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AnalyzerConfig {
    /// Calls that bind a set of activities to a task queue.
    pub proxy_functions: Vec<String>,
    /// Call that starts a child workflow.
    pub child_start_function: String,
    /// Helper used by compiled output for star re-exports.
    pub re_export_helper: String,
}

impl AnalyzerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a JSON document; missing fields keep their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn is_proxy_function(&self, name: &str) -> bool {
        self.proxy_functions.iter().any(|candidate| candidate == name)
    }

    pub fn is_child_start_function(&self, name: &str) -> bool {
        self.child_start_function == name
    }
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            proxy_functions: PROXY_FUNCTIONS.iter().map(|name| (*name).to_string()).collect(),
            child_start_function: CHILD_START_FUNCTION.to_string(),
            re_export_helper: RE_EXPORT_HELPER.to_string(),
        }
    }
}
