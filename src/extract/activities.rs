//! Proxy calls and the activities invoked through them.
//!
//! A proxy call binds a set of activities to a task queue:
//!
//! ```text
//! const { a, b } = proxyActivities({ taskQueue: "q" });    destructured
//! const acts = proxyActivities({ taskQueue: "q" });        bound, used as acts.a() / acts["b"]()
//! class W { acts = proxyActivities(...) }                  class field
//! constructor() { this.acts = proxyActivities(...) }       constructor assignment
//! ```
//!
//! Class-bound sets are only read through `const { a } = this.acts`.

use super::FileContext;
use crate::base::constants::TASK_QUEUE_KEY;
use crate::component::ActivityComponent;
use crate::config::AnalyzerConfig;
use crate::syntax::{
    call_matches, destructured_names, first_argument, identifier_member,
    object_property, property_key_name, this_member_name,
};
use oxc_ast::ast::{
    AssignmentTarget, BindingPattern, CallExpression, Class, ClassElement, Expression,
    MethodDefinitionKind, Program, Statement, StaticMemberExpression, VariableDeclarator,
};
use oxc_ast_visit::{Visit, walk};

pub fn is_proxy_call(call: &CallExpression<'_>, config: &AnalyzerConfig) -> bool {
    call_matches(call, |name| config.is_proxy_function(name))
}

// ============================================================================
// TASK QUEUES
// ============================================================================

/// Task queue a proxy call binds to, or the context's fallback queue.
pub fn proxy_task_queue(call: &CallExpression<'_>, ctx: &FileContext<'_, '_>) -> String {
    proxy_options_queue(call, ctx).unwrap_or_else(|| ctx.fallback_queue.to_string())
}

fn proxy_options_queue(call: &CallExpression<'_>, ctx: &FileContext<'_, '_>) -> Option<String> {
    match first_argument(&call.arguments)? {
        Expression::ObjectExpression(options) => match object_property(options, TASK_QUEUE_KEY)? {
            Expression::StringLiteral(lit) => Some(lit.value.to_string()),
            // An unresolvable member falls back to the member's own name.
            Expression::StaticMemberExpression(member) => Some(
                resolve_member_queue(member, ctx)
                    .unwrap_or_else(|| member.property.name.to_string()),
            ),
            _ => None,
        },
        // Options builder: `proxyActivities(buildOptions(QUEUE))`.
        Expression::CallExpression(builder) => match first_argument(&builder.arguments)? {
            Expression::StringLiteral(lit) => Some(lit.value.to_string()),
            Expression::Identifier(ident) => Some(ident.name.to_string()),
            Expression::StaticMemberExpression(member) => resolve_member_queue(member, ctx),
            _ => None,
        },
        _ => None,
    }
}

/// `binding.NAME` where `binding` is imported: the string constant `NAME`
/// holds in the imported module.
pub(crate) fn resolve_member_queue(
    member: &StaticMemberExpression<'_>,
    ctx: &FileContext<'_, '_>,
) -> Option<String> {
    let (object, property) = identifier_member(member)?;
    let specifier = ctx.imports.get(object)?;
    ctx.resolver().resolve_constant_value(specifier, property, ctx.path)
}

// ============================================================================
// MODULE SCOPE
// ============================================================================

/// Activities bound by `const|let|var x = proxyCall(...)` anywhere in the file.
pub fn extract_module_activities(ctx: &FileContext<'_, '_>) -> Vec<ActivityComponent> {
    let mut collector = ModuleProxyCollector { ctx, activities: Vec::new() };
    collector.visit_program(ctx.program);
    collector.activities
}

struct ModuleProxyCollector<'c, 'p, 'a> {
    ctx: &'c FileContext<'p, 'a>,
    activities: Vec<ActivityComponent>,
}

impl<'a> Visit<'a> for ModuleProxyCollector<'_, '_, 'a> {
    fn visit_variable_declarator(&mut self, decl: &VariableDeclarator<'a>) {
        if let Some(Expression::CallExpression(call)) = &decl.init
            && is_proxy_call(call, self.ctx.config)
        {
            let queue = proxy_task_queue(call, self.ctx);
            let names = match &decl.id {
                BindingPattern::ObjectPattern(pattern) => destructured_names(pattern),
                BindingPattern::BindingIdentifier(ident) => {
                    find_proxy_usages(self.ctx.program, ident.name.as_str())
                }
                _ => Vec::new(),
            };
            tracing::trace!(queue = %queue, count = names.len(), "[ACTIVITIES] proxy binding");
            self.activities
                .extend(names.into_iter().map(|name| ActivityComponent::on_queue(name, queue.as_str())));
        }
        walk::walk_variable_declarator(self, decl);
    }
}

/// Activities invoked through the plain binding `binding`, in source order.
///
/// Counts `binding.name(...)`, `binding["name"](...)` and later
/// `const { name } = binding` destructurings. Each name is reported once.
pub fn find_proxy_usages(program: &Program<'_>, binding: &str) -> Vec<String> {
    let mut finder = ProxyUsageFinder { binding, names: Vec::new() };
    finder.visit_program(program);
    finder.names
}

struct ProxyUsageFinder<'b> {
    binding: &'b str,
    names: Vec<String>,
}

impl ProxyUsageFinder<'_> {
    fn record(&mut self, name: &str) {
        if !self.names.iter().any(|existing| existing == name) {
            self.names.push(name.to_string());
        }
    }
}

impl<'a> Visit<'a> for ProxyUsageFinder<'_> {
    fn visit_call_expression(&mut self, call: &CallExpression<'a>) {
        match &call.callee {
            Expression::StaticMemberExpression(member) if member.object.is_specific_id(self.binding) => {
                self.record(member.property.name.as_str());
            }
            Expression::ComputedMemberExpression(member) if member.object.is_specific_id(self.binding) => {
                if let Expression::StringLiteral(lit) = &member.expression {
                    self.record(lit.value.as_str());
                }
            }
            _ => {}
        }
        walk::walk_call_expression(self, call);
    }

    fn visit_variable_declarator(&mut self, decl: &VariableDeclarator<'a>) {
        if let BindingPattern::ObjectPattern(pattern) = &decl.id
            && decl.init.as_ref().is_some_and(|init| init.is_specific_id(self.binding))
        {
            for name in destructured_names(pattern) {
                self.record(&name);
            }
        }
        walk::walk_variable_declarator(self, decl);
    }
}

// ============================================================================
// CLASS SCOPE
// ============================================================================

/// Activities bound to class fields, by initializer or in a constructor.
pub fn extract_class_activities(ctx: &FileContext<'_, '_>) -> Vec<ActivityComponent> {
    let mut collector = ClassProxyCollector { ctx, activities: Vec::new() };
    collector.visit_program(ctx.program);
    collector.activities
}

struct ClassProxyCollector<'c, 'p, 'a> {
    ctx: &'c FileContext<'p, 'a>,
    activities: Vec<ActivityComponent>,
}

impl<'a> ClassProxyCollector<'_, '_, 'a> {
    fn record_field(&mut self, class: &Class<'a>, field: &str, call: &CallExpression<'a>) {
        let queue = proxy_task_queue(call, self.ctx);
        let names = find_class_field_usages(class, field);
        tracing::trace!(field, queue = %queue, count = names.len(), "[ACTIVITIES] class proxy field");
        self.activities
            .extend(names.into_iter().map(|name| ActivityComponent::on_queue(name, queue.as_str())));
    }
}

impl<'a> Visit<'a> for ClassProxyCollector<'_, '_, 'a> {
    fn visit_class(&mut self, class: &Class<'a>) {
        let config = self.ctx.config;

        for element in &class.body.body {
            if let ClassElement::PropertyDefinition(property) = element
                && let Some(field) = property_key_name(&property.key)
                && let Some(Expression::CallExpression(call)) = &property.value
                && is_proxy_call(call, config)
            {
                self.record_field(class, field, call);
            }
        }

        for element in &class.body.body {
            let ClassElement::MethodDefinition(method) = element else {
                continue;
            };
            if method.kind != MethodDefinitionKind::Constructor {
                continue;
            }
            let Some(body) = &method.value.body else {
                continue;
            };
            for statement in &body.statements {
                if let Statement::ExpressionStatement(stmt) = statement
                    && let Expression::AssignmentExpression(assign) = &stmt.expression
                    && let AssignmentTarget::StaticMemberExpression(target) = &assign.left
                    && matches!(target.object, Expression::ThisExpression(_))
                    && let Expression::CallExpression(call) = &assign.right
                    && is_proxy_call(call, config)
                {
                    self.record_field(class, target.property.name.as_str(), call);
                }
            }
        }

        walk::walk_class(self, class);
    }
}

/// Names destructured from `this.field` anywhere inside `class`.
pub fn find_class_field_usages(class: &Class<'_>, field: &str) -> Vec<String> {
    let mut finder = FieldUsageFinder { field, names: Vec::new() };
    finder.visit_class(class);
    finder.names
}

struct FieldUsageFinder<'f> {
    field: &'f str,
    names: Vec<String>,
}

impl<'a> Visit<'a> for FieldUsageFinder<'_> {
    fn visit_variable_declarator(&mut self, decl: &VariableDeclarator<'a>) {
        if let BindingPattern::ObjectPattern(pattern) = &decl.id
            && decl.init.as_ref().and_then(this_member_name) == Some(self.field)
        {
            self.names.extend(destructured_names(pattern));
        }
        walk::walk_variable_declarator(self, decl);
    }
}
