use crate::base::constants::{EXPORTS_OBJECT, MODULE_OBJECT};
use crate::syntax::{binding_name, string_literal};
use oxc_ast::ast::{
    AssignmentTarget, Declaration, Expression, Program, Statement, VariableDeclaration,
    VariableDeclarationKind,
};

/// String literal bound to `name` in `program`, if any.
///
/// Checked in priority order:
/// 1. a top-level `const name = "..."`
/// 2. an `export const|let|var name = "..."`
/// 3. `exports.name = "..."` (or `module.exports.name`) at the top level,
///    including chained assignments
pub fn find_constant_literal(program: &Program<'_>, name: &str) -> Option<String> {
    top_level_const_literal(program, name)
        .or_else(|| exported_declaration_literal(program, name))
        .or_else(|| exports_assignment_literal(program, name))
        .map(str::to_string)
}

fn declarator_literal<'p>(decl: &'p VariableDeclaration<'_>, name: &str) -> Option<&'p str> {
    decl.declarations.iter().find_map(|declarator| {
        if binding_name(&declarator.id) != Some(name) {
            return None;
        }
        declarator.init.as_ref().and_then(string_literal)
    })
}

fn top_level_const_literal<'p>(program: &'p Program<'_>, name: &str) -> Option<&'p str> {
    program.body.iter().find_map(|statement| match statement {
        Statement::VariableDeclaration(decl) if decl.kind == VariableDeclarationKind::Const => {
            declarator_literal(decl, name)
        }
        _ => None,
    })
}

fn exported_declaration_literal<'p>(program: &'p Program<'_>, name: &str) -> Option<&'p str> {
    program.body.iter().find_map(|statement| match statement {
        Statement::ExportNamedDeclaration(export) => match &export.declaration {
            Some(Declaration::VariableDeclaration(decl)) => declarator_literal(decl, name),
            _ => None,
        },
        _ => None,
    })
}

fn exports_assignment_literal<'p>(program: &'p Program<'_>, name: &str) -> Option<&'p str> {
    program.body.iter().find_map(|statement| match statement {
        Statement::ExpressionStatement(stmt) => assigned_export_literal(&stmt.expression, name),
        _ => None,
    })
}

/// Walks `a = b = "lit"` chains looking for an `exports.name` target.
fn assigned_export_literal<'p>(expr: &'p Expression<'_>, name: &str) -> Option<&'p str> {
    let Expression::AssignmentExpression(assign) = expr else {
        return None;
    };
    if is_exports_member(&assign.left, name) {
        return chain_value(&assign.right).and_then(string_literal);
    }
    assigned_export_literal(&assign.right, name)
}

/// Final right-hand side of an assignment chain.
fn chain_value<'p, 'a>(expr: &'p Expression<'a>) -> Option<&'p Expression<'a>> {
    match expr {
        Expression::AssignmentExpression(assign) => chain_value(&assign.right),
        other => Some(other),
    }
}

fn is_exports_member(target: &AssignmentTarget<'_>, name: &str) -> bool {
    let AssignmentTarget::StaticMemberExpression(member) = target else {
        return false;
    };
    if member.property.name != name {
        return false;
    }
    member.object.is_specific_id(EXPORTS_OBJECT)
        || member.object.is_specific_member_access(MODULE_OBJECT, EXPORTS_OBJECT)
}
