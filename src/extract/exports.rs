//! The name a workflow file exports its workflow under.

use crate::base::constants::{EXPORTS_OBJECT, MODULE_OBJECT};
use oxc_ast::ast::{
    AssignmentExpression, AssignmentTarget, Declaration, ExportDefaultDeclaration,
    ExportDefaultDeclarationKind, ExportNamedDeclaration, Expression, Program,
};
use oxc_ast_visit::{Visit, walk};

/// Exported workflow name, by priority:
/// 1. `export function|class X`
/// 2. `export default function|class X` or `export default X`
/// 3. `exports.X = ...` or `module.exports = X`
///
/// Within a tier the first occurrence in source order wins.
pub fn find_exported_name(program: &Program<'_>) -> Option<String> {
    let mut finder = ExportNameFinder::default();
    finder.visit_program(program);
    finder.named.or(finder.default).or(finder.assigned)
}

#[derive(Default)]
struct ExportNameFinder {
    named: Option<String>,
    default: Option<String>,
    assigned: Option<String>,
}

fn keep_first(slot: &mut Option<String>, candidate: Option<&str>) {
    if slot.is_none()
        && let Some(name) = candidate
    {
        *slot = Some(name.to_string());
    }
}

impl<'a> Visit<'a> for ExportNameFinder {
    fn visit_export_named_declaration(&mut self, decl: &ExportNamedDeclaration<'a>) {
        let candidate = match &decl.declaration {
            Some(Declaration::FunctionDeclaration(func)) => func.id.as_ref().map(|id| id.name.as_str()),
            Some(Declaration::ClassDeclaration(class)) => class.id.as_ref().map(|id| id.name.as_str()),
            _ => None,
        };
        keep_first(&mut self.named, candidate);
        walk::walk_export_named_declaration(self, decl);
    }

    fn visit_export_default_declaration(&mut self, decl: &ExportDefaultDeclaration<'a>) {
        let candidate = match &decl.declaration {
            ExportDefaultDeclarationKind::FunctionDeclaration(func) => {
                func.id.as_ref().map(|id| id.name.as_str())
            }
            ExportDefaultDeclarationKind::ClassDeclaration(class) => {
                class.id.as_ref().map(|id| id.name.as_str())
            }
            ExportDefaultDeclarationKind::Identifier(ident) => Some(ident.name.as_str()),
            _ => None,
        };
        keep_first(&mut self.default, candidate);
        walk::walk_export_default_declaration(self, decl);
    }

    fn visit_assignment_expression(&mut self, assign: &AssignmentExpression<'a>) {
        if let AssignmentTarget::StaticMemberExpression(target) = &assign.left {
            let candidate = if target.object.is_specific_id(EXPORTS_OBJECT) {
                Some(target.property.name.as_str())
            } else if target.object.is_specific_id(MODULE_OBJECT) && target.property.name == EXPORTS_OBJECT {
                match &assign.right {
                    Expression::Identifier(ident) => Some(ident.name.as_str()),
                    _ => None,
                }
            } else {
                None
            };
            keep_first(&mut self.assigned, candidate);
        }
        walk::walk_assignment_expression(self, assign);
    }
}
