//! Activities of classes created with `new`.
//!
//! `new lookup[key]()` is over-approximated: every class listed as a value
//! in the `lookup` object literal counts as instantiated.

use super::inheritance::{find_declared_base, inherited_from};
use super::{FileContext, file_activities};
use crate::base::{VisitedFiles, resolve_module_path};
use crate::component::ActivityComponent;
use crate::parser::with_collaborator_file;
use crate::resolver::collect_imports;
use crate::syntax::binding_name;
use indexmap::IndexMap;
use oxc_ast::ast::{Declaration, Expression, NewExpression, ObjectPropertyKind, Program, Statement};
use oxc_ast_visit::{Visit, walk};

/// A class found in a `new` expression or a lookup table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassRef {
    pub class_name: String,
    /// Binding the class was read from in `new module.Class()`.
    pub module_binding: Option<String>,
}

impl ClassRef {
    fn named(class_name: &str) -> Self {
        Self { class_name: class_name.to_string(), module_binding: None }
    }

    fn from_module(module: &str, class_name: &str) -> Self {
        Self { class_name: class_name.to_string(), module_binding: Some(module.to_string()) }
    }

    /// `Class` or `module.Class` as an expression.
    fn from_expression(expr: &Expression<'_>) -> Option<Self> {
        match expr {
            Expression::Identifier(ident) => Some(Self::named(&ident.name)),
            Expression::StaticMemberExpression(member) => match &member.object {
                Expression::Identifier(object) => Some(Self::from_module(&object.name, &member.property.name)),
                _ => None,
            },
            _ => None,
        }
    }
}

/// Instantiated classes keyed by class name, in first-seen order.
///
/// A class seen again keeps its position but takes the latest reference.
pub fn find_instantiated_classes(program: &Program<'_>) -> IndexMap<String, ClassRef> {
    let mut finder = InstantiationFinder { program, classes: IndexMap::new() };
    finder.visit_program(program);
    finder.classes
}

struct InstantiationFinder<'p, 'a> {
    program: &'p Program<'a>,
    classes: IndexMap<String, ClassRef>,
}

impl InstantiationFinder<'_, '_> {
    fn record(&mut self, class_ref: ClassRef) {
        self.classes.insert(class_ref.class_name.clone(), class_ref);
    }
}

impl<'a> Visit<'a> for InstantiationFinder<'_, 'a> {
    fn visit_new_expression(&mut self, new_expr: &NewExpression<'a>) {
        match &new_expr.callee {
            Expression::Identifier(ident) => self.record(ClassRef::named(&ident.name)),
            Expression::StaticMemberExpression(member) => {
                if let Expression::Identifier(object) = &member.object {
                    self.record(ClassRef::from_module(&object.name, &member.property.name));
                }
            }
            Expression::ComputedMemberExpression(member) => {
                if let Expression::Identifier(table) = &member.object {
                    for class_ref in lookup_table_classes(self.program, &table.name) {
                        self.record(class_ref);
                    }
                }
            }
            _ => {}
        }
        walk::walk_new_expression(self, new_expr);
    }
}

/// Classes listed as values of the module-scope object literal bound to
/// `table`. Declarations nested in functions or blocks are not tables.
pub fn lookup_table_classes(program: &Program<'_>, table: &str) -> Vec<ClassRef> {
    program
        .body
        .iter()
        .filter_map(|statement| match statement {
            Statement::VariableDeclaration(decl) => Some(&**decl),
            Statement::ExportNamedDeclaration(export) => match &export.declaration {
                Some(Declaration::VariableDeclaration(decl)) => Some(&**decl),
                _ => None,
            },
            _ => None,
        })
        .flat_map(|decl| decl.declarations.iter())
        .filter(|declarator| binding_name(&declarator.id) == Some(table))
        .filter_map(|declarator| match declarator.init.as_ref().map(Expression::get_inner_expression) {
            Some(Expression::ObjectExpression(object)) => Some(object),
            _ => None,
        })
        .flat_map(|object| object.properties.iter())
        .filter_map(|property| match property {
            ObjectPropertyKind::ObjectProperty(prop) => ClassRef::from_expression(&prop.value),
            _ => None,
        })
        .collect()
}

/// Activities declared in the files of every instantiated, imported class.
pub fn extract_instantiated_activities(
    ctx: &FileContext<'_, '_>,
    visited: &mut VisitedFiles,
) -> Vec<ActivityComponent> {
    let mut activities = Vec::new();
    for class_ref in find_instantiated_classes(ctx.program).values() {
        activities.extend(class_activities(class_ref, ctx, visited));
    }
    activities
}

fn class_activities(
    class_ref: &ClassRef,
    ctx: &FileContext<'_, '_>,
    visited: &mut VisitedFiles,
) -> Vec<ActivityComponent> {
    let specifier = ctx.imports.get(&class_ref.class_name).or_else(|| {
        class_ref.module_binding.as_deref().and_then(|module| ctx.imports.get(module))
    });
    let Some(specifier) = specifier else {
        return Vec::new();
    };
    let Some(module_path) = resolve_module_path(specifier, ctx.path) else {
        tracing::debug!(class = %class_ref.class_name, specifier, "[INSTANTIATE] unresolved import");
        return Vec::new();
    };
    // Barrel files re-export the class; analyze the file that declares it.
    let path = ctx
        .resolver()
        .find_class_definition_file(&class_ref.class_name, &module_path)
        .unwrap_or(module_path);
    if !visited.insert(&path) {
        return Vec::new();
    }

    tracing::trace!(class = %class_ref.class_name, path = %path.display(), "[INSTANTIATE] class file");
    with_collaborator_file(&path, |program| {
        let imports = collect_imports(program);
        let class_ctx = ctx.for_file(program, &imports, &path);
        let mut activities = match find_declared_base(program, &class_ref.class_name) {
            Some(base) => inherited_from(&base, &class_ctx, visited),
            None => Vec::new(),
        };
        activities.extend(file_activities(&class_ctx));
        activities
    })
    .unwrap_or_default()
}
