//! Activities inherited through `extends`.
//!
//! The base class is looked up through the import map, resolved to the file
//! that really declares it (following star re-exports, and package entry
//! files for package specifiers), and its activities are collected before
//! the subclass's own. The chain is followed recursively; a shared
//! [`VisitedFiles`] set cuts cycles.

use super::{FileContext, file_activities};
use crate::base::{VisitedFiles, resolve_module_path, resolve_package_entry};
use crate::component::ActivityComponent;
use crate::parser::with_collaborator_file;
use crate::resolver::collect_imports;
use oxc_ast::ast::{Class, Expression, Program};
use oxc_ast_visit::{Visit, walk};
use std::path::PathBuf;

/// The target of an `extends` clause.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseClassRef {
    pub class_name: String,
    /// Binding the class was read from in `extends module.Class`.
    pub module_binding: Option<String>,
}

impl BaseClassRef {
    fn from_super_class(expr: &Expression<'_>) -> Option<Self> {
        match expr {
            Expression::Identifier(ident) => {
                Some(Self { class_name: ident.name.to_string(), module_binding: None })
            }
            Expression::StaticMemberExpression(member) => match &member.object {
                Expression::Identifier(object) => Some(Self {
                    class_name: member.property.name.to_string(),
                    module_binding: Some(object.name.to_string()),
                }),
                _ => None,
            },
            _ => None,
        }
    }

    /// Import map key for this reference.
    fn binding(&self) -> &str {
        self.module_binding.as_deref().unwrap_or(&self.class_name)
    }
}

/// Base of the first class in the file with a recognizable `extends`.
pub fn find_base_class(program: &Program<'_>) -> Option<BaseClassRef> {
    let mut finder = BaseClassFinder { class_name: None, found: None };
    finder.visit_program(program);
    finder.found
}

/// Base of the class named `class_name`, if it has a recognizable `extends`.
pub fn find_declared_base(program: &Program<'_>, class_name: &str) -> Option<BaseClassRef> {
    let mut finder = BaseClassFinder { class_name: Some(class_name), found: None };
    finder.visit_program(program);
    finder.found
}

struct BaseClassFinder<'n> {
    /// Only classes with this name, when set.
    class_name: Option<&'n str>,
    found: Option<BaseClassRef>,
}

impl<'a> Visit<'a> for BaseClassFinder<'_> {
    fn visit_class(&mut self, class: &Class<'a>) {
        if self.found.is_some() {
            return;
        }
        let name_matches = match self.class_name {
            Some(wanted) => class.id.as_ref().is_some_and(|id| id.name == wanted),
            None => true,
        };
        if name_matches
            && let Some(base) = class.super_class.as_ref().and_then(BaseClassRef::from_super_class)
        {
            self.found = Some(base);
            return;
        }
        walk::walk_class(self, class);
    }
}

/// File declaring `base`, as seen from the file in `ctx`.
fn resolve_base_class_path(base: &BaseClassRef, ctx: &FileContext<'_, '_>) -> Option<PathBuf> {
    let Some(specifier) = ctx.imports.get(base.binding()) else {
        tracing::debug!(class = %base.class_name, "[INHERIT] base class is not imported");
        return None;
    };
    let resolver = ctx.resolver();
    if let Some(local) = resolve_module_path(specifier, ctx.path) {
        return resolver.find_class_definition_file(&base.class_name, &local);
    }
    let entry = resolve_package_entry(specifier, ctx.path)?;
    resolver.find_class_definition_file(&base.class_name, &entry)
}

/// Activities of the whole base chain of the first derived class in `ctx`.
pub fn extract_inherited_activities(
    ctx: &FileContext<'_, '_>,
    visited: &mut VisitedFiles,
) -> Vec<ActivityComponent> {
    match find_base_class(ctx.program) {
        Some(base) => inherited_from(&base, ctx, visited),
        None => Vec::new(),
    }
}

/// Activities reachable from `base`: its own ancestors first, then the
/// module and class scope of the file declaring it.
pub(crate) fn inherited_from(
    base: &BaseClassRef,
    ctx: &FileContext<'_, '_>,
    visited: &mut VisitedFiles,
) -> Vec<ActivityComponent> {
    let Some(path) = resolve_base_class_path(base, ctx) else {
        tracing::debug!(class = %base.class_name, from = %ctx.path.display(), "[INHERIT] unresolved base class");
        return Vec::new();
    };
    if !visited.insert(&path) {
        tracing::debug!(path = %path.display(), "[INHERIT] already visited");
        return Vec::new();
    }

    tracing::trace!(class = %base.class_name, path = %path.display(), "[INHERIT] base class");
    with_collaborator_file(&path, |program| {
        let imports = collect_imports(program);
        let base_ctx = ctx.for_file(program, &imports, &path);
        let mut activities = extract_inherited_activities(&base_ctx, visited);
        activities.extend(file_activities(&base_ctx));
        activities
    })
    .unwrap_or_default()
}
