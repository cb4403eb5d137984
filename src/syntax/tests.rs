#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::*;
use crate::parser::parse_source;
use oxc_allocator::Allocator;
use oxc_ast::ast::{Declaration, Statement};
use rstest::rstest;
use std::path::Path;

fn with_expression<T>(source: &str, f: impl FnOnce(&Expression<'_>) -> T) -> T {
    let allocator = Allocator::default();
    let program = parse_source(&allocator, source, Path::new("snippet.js")).unwrap();
    let Statement::ExpressionStatement(stmt) = &program.body[0] else {
        panic!("expected an expression statement in {source:?}");
    };
    f(&stmt.expression)
}

fn with_call<T>(source: &str, f: impl FnOnce(&CallExpression<'_>) -> T) -> T {
    with_expression(source, |expr| {
        let Expression::CallExpression(call) = expr else {
            panic!("expected a call in {source:?}");
        };
        f(call)
    })
}

#[rstest]
#[case("proxyActivities({})", Some("proxyActivities"))]
#[case("workflow.proxyActivities({})", Some("proxyActivities"))]
#[case("(0, workflow_1.proxyActivities)({})", Some("proxyActivities"))]
#[case("(0, 1, workflow_1.proxyActivities)({})", None)]
#[case("(0, proxyActivities)({})", None)]
#[case("factory()({})", None)]
fn test_call_target_name(#[case] source: &str, #[case] expected: Option<&str>) {
    with_call(source, |call| assert_eq!(call_target_name(&call.callee), expected));
}

#[test]
fn test_callee_name_ignores_sequences() {
    with_call("(0, workflow_1.executeChild)('x')", |call| {
        assert_eq!(callee_name(&call.callee), None);
    });
    with_call("this.executeChildOperation({})", |call| {
        assert_eq!(callee_name(&call.callee), Some("executeChildOperation"));
    });
}

#[rstest]
#[case("this.executeChild({})", true)]
#[case("this['executeChild']({})", true)]
#[case("helper.executeChild({})", false)]
#[case("executeChild({})", false)]
fn test_is_this_member_call(#[case] source: &str, #[case] expected: bool) {
    with_call(source, |call| assert_eq!(is_this_member_call(&call.callee), expected));
}

#[test]
fn test_object_property_lookup() {
    with_call("f({ taskQueue: 'q', type: wf, 'quoted': 1, ...rest })", |call| {
        let object = as_object(first_argument(&call.arguments).unwrap()).unwrap();
        assert_eq!(object_property(object, "taskQueue").and_then(string_literal), Some("q"));
        assert_eq!(object_property(object, "type").and_then(identifier_name), Some("wf"));
        assert!(!has_object_property(object, "quoted"));
        assert!(!has_object_property(object, "args"));
    });
}

#[test]
fn test_spread_argument_is_skipped() {
    with_call("f(...items)", |call| assert!(first_argument(&call.arguments).is_none()));
}

#[test]
fn test_require_specifier() {
    with_expression("require('./consts')", |expr| {
        assert_eq!(require_specifier(expr), Some("./consts"));
    });
    with_expression("require(name)", |expr| assert_eq!(require_specifier(expr), None));
    with_expression("load('./consts')", |expr| assert_eq!(require_specifier(expr), None));
}

#[test]
fn test_this_member_name() {
    with_expression("this.activities", |expr| {
        assert_eq!(this_member_name(expr), Some("activities"));
    });
    with_expression("self.activities", |expr| assert_eq!(this_member_name(expr), None));
}

#[test]
fn test_destructured_names_prefer_local_binding() {
    let allocator = Allocator::default();
    let source = "const { a, b: renamed, c = 1, d: { e }, ...rest } = acts;";
    let program = parse_source(&allocator, source, Path::new("snippet.js")).unwrap();
    let Statement::VariableDeclaration(decl) = &program.body[0] else {
        panic!("expected a declaration");
    };
    let BindingPattern::ObjectPattern(pattern) = &decl.declarations[0].id else {
        panic!("expected an object pattern");
    };
    assert_eq!(destructured_names(pattern), vec!["a", "renamed", "c", "d"]);
}

#[test]
fn test_binding_name() {
    let allocator = Allocator::default();
    let program =
        parse_source(&allocator, "export const acts = 1;", Path::new("snippet.mjs")).unwrap();
    let Statement::ExportNamedDeclaration(export) = &program.body[0] else {
        panic!("expected an export");
    };
    let Some(Declaration::VariableDeclaration(decl)) = &export.declaration else {
        panic!("expected a variable declaration");
    };
    assert_eq!(binding_name(&decl.declarations[0].id), Some("acts"));
}
