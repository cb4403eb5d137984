//! # workflow-deps
//!
//! Static dependency extraction for Temporal-style JavaScript workflow files.
//!
//! Given a workflow file, [`analyze`] reports the activities it can invoke
//! and the child workflows it can start, each with the task queue it runs
//! on. Nothing is executed: the file and the modules it imports are parsed
//! and pattern-matched.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! registry   → Service aggregate of workers' activities and workflows
//!   ↓
//! analysis   → Per-file pipeline, public entry point
//!   ↓
//! extract    → Activity, child workflow, inheritance, instantiation sites
//!   ↓
//! resolver   → Import map, constant and class lookup across files
//!   ↓
//! syntax     → Shape recognizers over the oxc AST
//!   ↓
//! parser     → oxc parse with script/module fallback
//!   ↓
//! base       → Path resolution, visited-file sets, SDK constants
//! ```

// ============================================================================
// MODULES (dependency order: base → parser → syntax → resolver → extract → analysis → registry)
// ============================================================================

/// Foundation: module path resolution, visited-file sets, SDK names
pub mod base;

/// SDK vocabulary the extractors match against
pub mod config;

/// Errors returned by analysis and registration
pub mod error;

/// Parser: oxc with script-then-module fallback
pub mod parser;

/// Syntax: recognizers for call, member and object shapes
pub mod syntax;

/// Resolver: imports, constants, re-exports, class declarations
pub mod resolver;

/// Extractors for each kind of dependency site
pub mod extract;

/// Output records
pub mod component;

/// Per-file analysis pipeline
pub mod analysis;

/// Registry of workers' activities and workflows
pub mod registry;

// Re-export the public entry points
pub use analysis::{Analyzer, analyze};
pub use component::{ActivityComponent, ChildWorkflowComponent, RegistryComponents, WorkflowComponent};
pub use config::AnalyzerConfig;
pub use error::AnalysisError;
pub use registry::{RegistryManifest, RegistryService, WorkerRegistration};
