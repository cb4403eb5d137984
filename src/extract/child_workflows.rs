//! Child workflow start sites.
//!
//! A start site is recognized when it is:
//! - a *direct* call to the start function (not `this.<name>(...)`), or
//! - a call to a local *wrapper* whose first argument is `{ type, ... }`, or
//! - any method call whose first argument carries both `type` and `taskQueue`.
//!
//! Wrappers are functions, methods or function-valued variables whose body
//! contains a direct call. Arguments that are not statically constant are
//! skipped rather than guessed.

use super::FileContext;
use super::activities::resolve_member_queue;
use crate::base::constants::{NAME_PROPERTY, TASK_QUEUE_KEY, WORKFLOW_TYPE_KEY};
use crate::component::ChildWorkflowComponent;
use crate::config::AnalyzerConfig;
use crate::resolver::is_constant_identifier;
use crate::syntax::{
    argument_at, as_object, binding_name, call_matches, callee_name, first_argument,
    is_this_member_call, object_property, property_key_name,
};
use oxc_ast::ast::{
    CallExpression, Expression, Function, FunctionBody, FunctionType, MethodDefinition,
    ObjectExpression, StaticMemberExpression, VariableDeclarator,
};
use oxc_ast_visit::{Visit, walk};
use oxc_syntax::scope::ScopeFlags;
use rustc_hash::FxHashSet;

// ============================================================================
// CALL CLASSIFICATION
// ============================================================================

/// `executeChild(...)` in any accepted callee form, except `this.executeChild(...)`.
pub fn is_direct_child_call(call: &CallExpression<'_>, config: &AnalyzerConfig) -> bool {
    call_matches(call, |name| config.is_child_start_function(name)) && !is_this_member_call(&call.callee)
}

/// True if `call` starts a child workflow, directly or through a wrapper.
pub fn is_child_start_call(
    call: &CallExpression<'_>,
    wrappers: &FxHashSet<String>,
    config: &AnalyzerConfig,
) -> bool {
    if is_direct_child_call(call, config) {
        return true;
    }
    let Some(options) = first_argument(&call.arguments).and_then(as_object) else {
        return false;
    };
    let has_type = object_property(options, WORKFLOW_TYPE_KEY).is_some();

    let calls_wrapper = callee_name(&call.callee).is_some_and(|name| wrappers.contains(name));
    if calls_wrapper && has_type {
        return true;
    }

    call.callee.is_member_expression() && has_type && object_property(options, TASK_QUEUE_KEY).is_some()
}

// ============================================================================
// WRAPPERS
// ============================================================================

/// Names of local functions and methods whose body makes a direct start call.
pub fn find_wrapper_names(
    program: &oxc_ast::ast::Program<'_>,
    config: &AnalyzerConfig,
) -> FxHashSet<String> {
    let mut finder = WrapperFinder { config, names: FxHashSet::default() };
    finder.visit_program(program);
    finder.names
}

struct WrapperFinder<'c> {
    config: &'c AnalyzerConfig,
    names: FxHashSet<String>,
}

impl WrapperFinder<'_> {
    fn record(&mut self, name: &str) {
        tracing::trace!(name, "[CHILD] wrapper");
        self.names.insert(name.to_string());
    }
}

impl<'a> Visit<'a> for WrapperFinder<'_> {
    fn visit_function(&mut self, func: &Function<'a>, flags: ScopeFlags) {
        if func.r#type == FunctionType::FunctionDeclaration
            && let Some(id) = &func.id
            && func.body.as_ref().is_some_and(|body| body_starts_child(body, self.config))
        {
            self.record(id.name.as_str());
        }
        walk::walk_function(self, func, flags);
    }

    fn visit_method_definition(&mut self, method: &MethodDefinition<'a>) {
        if let Some(name) = property_key_name(&method.key)
            && method.value.body.as_ref().is_some_and(|body| body_starts_child(body, self.config))
        {
            self.record(name);
        }
        walk::walk_method_definition(self, method);
    }

    fn visit_variable_declarator(&mut self, decl: &VariableDeclarator<'a>) {
        if let Some(name) = binding_name(&decl.id) {
            let starts_child = match &decl.init {
                Some(Expression::ArrowFunctionExpression(arrow)) => body_starts_child(&arrow.body, self.config),
                Some(Expression::FunctionExpression(func)) => {
                    func.body.as_ref().is_some_and(|body| body_starts_child(body, self.config))
                }
                _ => false,
            };
            if starts_child {
                self.record(name);
            }
        }
        walk::walk_variable_declarator(self, decl);
    }
}

fn body_starts_child(body: &FunctionBody<'_>, config: &AnalyzerConfig) -> bool {
    let mut finder = DirectCallFinder { config, found: false };
    finder.visit_function_body(body);
    finder.found
}

struct DirectCallFinder<'c> {
    config: &'c AnalyzerConfig,
    found: bool,
}

impl<'a> Visit<'a> for DirectCallFinder<'_> {
    fn visit_call_expression(&mut self, call: &CallExpression<'a>) {
        if self.found {
            return;
        }
        if is_direct_child_call(call, self.config) {
            self.found = true;
            return;
        }
        walk::walk_call_expression(self, call);
    }
}

// ============================================================================
// EXTRACTION
// ============================================================================

/// Child workflows started from this file, deduplicated on (name, queue).
pub fn extract_child_workflows(
    ctx: &FileContext<'_, '_>,
    wrappers: &FxHashSet<String>,
) -> Vec<ChildWorkflowComponent> {
    let mut collector = ChildStartCollector { ctx, wrappers, children: Vec::new() };
    collector.visit_program(ctx.program);
    collector.children
}

struct ChildStartCollector<'c, 'p, 'a> {
    ctx: &'c FileContext<'p, 'a>,
    wrappers: &'c FxHashSet<String>,
    children: Vec<ChildWorkflowComponent>,
}

impl<'a> Visit<'a> for ChildStartCollector<'_, '_, 'a> {
    fn visit_call_expression(&mut self, call: &CallExpression<'a>) {
        if is_child_start_call(call, self.wrappers, self.ctx.config) {
            let direct = is_direct_child_call(call, self.ctx.config);
            let (name, queue) = child_workflow_info(call, direct, self.ctx);
            if let Some(name) = name {
                let child = ChildWorkflowComponent::on_queue(
                    name,
                    queue.unwrap_or_else(|| self.ctx.fallback_queue.to_string()),
                );
                tracing::trace!(?child, direct, "[CHILD] start site");
                if !self.children.contains(&child) {
                    self.children.push(child);
                }
            }
        }
        walk::walk_call_expression(self, call);
    }
}

/// Workflow name and queue from a recognized start call's arguments.
fn child_workflow_info(
    call: &CallExpression<'_>,
    direct: bool,
    ctx: &FileContext<'_, '_>,
) -> (Option<String>, Option<String>) {
    let Some(first) = first_argument(&call.arguments) else {
        return (None, None);
    };
    let second_options = || {
        argument_at(&call.arguments, 1)
            .and_then(as_object)
            .and_then(|options| options_task_queue(options, ctx))
    };

    match first {
        Expression::StringLiteral(lit) => (Some(lit.value.to_string()), second_options()),
        Expression::Identifier(ident) if direct => (Some(ident.name.to_string()), second_options()),
        Expression::StaticMemberExpression(member) if direct => match constant_member_name(member, ctx) {
            Some(name) => (Some(name), second_options()),
            None => (None, None),
        },
        Expression::ObjectExpression(options) => (
            object_property(options, WORKFLOW_TYPE_KEY).and_then(|value| workflow_type_name(value, ctx)),
            options_task_queue(options, ctx),
        ),
        _ => (None, None),
    }
}

/// `CONST.prop` or `ns.CONST.prop`, when the root binding is a constant.
/// The name is the accessed property itself, not the value it holds.
fn constant_member_name(member: &StaticMemberExpression<'_>, ctx: &FileContext<'_, '_>) -> Option<String> {
    let root = match &member.object {
        Expression::Identifier(ident) => ident.name.as_str(),
        Expression::StaticMemberExpression(inner) => match &inner.object {
            Expression::Identifier(ns) => ns.name.as_str(),
            _ => return None,
        },
        _ => return None,
    };
    is_constant_identifier(root, ctx.program, ctx.imports).then(|| member.property.name.to_string())
}

/// Name carried by a `type:` option.
///
/// `X.name` and `ns.X.name` name the workflow function `X`. Any other member
/// names its own property, and only when its root is a constant.
fn workflow_type_name(value: &Expression<'_>, ctx: &FileContext<'_, '_>) -> Option<String> {
    match value {
        Expression::StringLiteral(lit) => Some(lit.value.to_string()),
        Expression::Identifier(ident) => Some(ident.name.to_string()),
        Expression::StaticMemberExpression(member) if member.property.name == NAME_PROPERTY => {
            match &member.object {
                Expression::Identifier(ident) => Some(ident.name.to_string()),
                Expression::StaticMemberExpression(inner) => Some(inner.property.name.to_string()),
                _ => None,
            }
        }
        Expression::StaticMemberExpression(member) => constant_member_name(member, ctx),
        _ => None,
    }
}

/// `taskQueue:` of a child's options. Members hanging off a call are never
/// resolved, and an unresolvable member yields nothing.
fn options_task_queue(options: &ObjectExpression<'_>, ctx: &FileContext<'_, '_>) -> Option<String> {
    match object_property(options, TASK_QUEUE_KEY)? {
        Expression::StringLiteral(lit) => Some(lit.value.to_string()),
        Expression::Identifier(ident) => Some(ident.name.to_string()),
        Expression::StaticMemberExpression(member) => {
            if matches!(member.object, Expression::CallExpression(_)) {
                return None;
            }
            resolve_member_queue(member, ctx)
        }
        _ => None,
    }
}
