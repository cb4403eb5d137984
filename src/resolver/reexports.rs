use crate::syntax::{call_matches, first_argument, require_specifier};
use oxc_ast::ast::{CallExpression, ExportAllDeclaration, Program};
use oxc_ast_visit::{Visit, walk};

/// Specifiers this program re-exports wholesale, in source order.
///
/// Recognizes `export * from "x"` and the compiled
/// `helper(require("x"), exports)` form, where `helper` is matched by name
/// in any of the accepted callee forms (`tslib_1.__exportStar`, bare
/// `__exportStar`, sequence-wrapped).
pub fn re_export_specifiers(program: &Program<'_>, helper: &str) -> Vec<String> {
    let mut finder = ReExportFinder { helper, specifiers: Vec::new() };
    finder.visit_program(program);
    finder.specifiers
}

struct ReExportFinder<'h> {
    helper: &'h str,
    specifiers: Vec<String>,
}

impl<'a> Visit<'a> for ReExportFinder<'_> {
    fn visit_export_all_declaration(&mut self, decl: &ExportAllDeclaration<'a>) {
        if decl.exported.is_none() {
            self.specifiers.push(decl.source.value.to_string());
        }
    }

    fn visit_call_expression(&mut self, call: &CallExpression<'a>) {
        if call_matches(call, |name| name == self.helper)
            && let Some(specifier) = first_argument(&call.arguments).and_then(require_specifier)
        {
            self.specifiers.push(specifier.to_string());
        }
        walk::walk_call_expression(self, call);
    }
}
