//! Dependency extraction.
//!
//! ## Module Structure
//!
//! - [`activities`] - Proxy calls and their usages (module and class scope)
//! - [`child_workflows`] - Child workflow start sites, direct or via wrappers
//! - [`inheritance`] - Activities inherited through `extends` across files
//! - [`instantiation`] - Activities of classes created with `new`
//! - [`exports`] - The workflow's exported name
//!
//! Every extractor reads a [`FileContext`]; cross-file extractors build a
//! fresh context for each collaborator file they open.

pub mod activities;
pub mod child_workflows;
pub mod exports;
pub mod inheritance;
pub mod instantiation;

pub use activities::{
    extract_class_activities, extract_module_activities, find_proxy_usages, proxy_task_queue,
};
pub use child_workflows::{extract_child_workflows, find_wrapper_names};
pub use exports::find_exported_name;
pub use inheritance::{BaseClassRef, extract_inherited_activities, find_base_class};
pub use instantiation::{ClassRef, extract_instantiated_activities, find_instantiated_classes};

use crate::component::ActivityComponent;
use crate::config::AnalyzerConfig;
use crate::resolver::{ImportMap, ModuleResolver};
use oxc_ast::ast::Program;
use std::path::Path;

/// Everything an extractor needs to know about the file it is reading.
#[derive(Clone, Copy)]
pub struct FileContext<'p, 'a> {
    pub program: &'p Program<'a>,
    pub imports: &'p ImportMap,
    /// Absolute path of the file, used to resolve relative specifiers.
    pub path: &'p Path,
    /// Queue assigned to anything whose own queue cannot be resolved.
    pub fallback_queue: &'p str,
    pub config: &'p AnalyzerConfig,
}

impl<'p, 'a> FileContext<'p, 'a> {
    pub fn new(
        program: &'p Program<'a>,
        imports: &'p ImportMap,
        path: &'p Path,
        fallback_queue: &'p str,
        config: &'p AnalyzerConfig,
    ) -> Self {
        Self { program, imports, path, fallback_queue, config }
    }

    /// Context for a collaborator file, keeping the queue and configuration.
    pub fn for_file<'q, 'b>(
        &self,
        program: &'q Program<'b>,
        imports: &'q ImportMap,
        path: &'q Path,
    ) -> FileContext<'q, 'b>
    where
        'p: 'q,
    {
        FileContext {
            program,
            imports,
            path,
            fallback_queue: self.fallback_queue,
            config: self.config,
        }
    }

    pub fn resolver(&self) -> ModuleResolver<'p> {
        ModuleResolver::new(self.config)
    }
}

/// Module-scope then class-scope activities of one collaborator file.
pub(crate) fn file_activities(ctx: &FileContext<'_, '_>) -> Vec<ActivityComponent> {
    let mut activities = extract_module_activities(ctx);
    activities.extend(extract_class_activities(ctx));
    activities
}

#[cfg(test)]
mod tests;
