//! Shape recognizers over the JavaScript AST.
//!
//! Compiled and hand-written workflow code express the same call in several
//! syntactic forms. Each helper here recognizes one form and nothing else;
//! the extractors compose them per call-site kind.
//!
//! Callee forms accepted by [`call_target_name`]:
//!
//! ```text
//! proxyActivities(...)                    bare identifier
//! (0, workflow_1.proxyActivities)(...)    two-element sequence around a member
//! workflow.proxyActivities(...)           member call
//! ```

use oxc_ast::ast::{
    Argument, BindingPattern, CallExpression, Expression, ObjectExpression, ObjectPattern,
    ObjectPropertyKind, PropertyKey, StaticMemberExpression,
};

use crate::base::constants::REQUIRE_FUNCTION;

// ============================================================================
// CALLEES
// ============================================================================

/// Name a call targets, across the three accepted callee forms.
pub fn call_target_name<'e>(callee: &'e Expression<'_>) -> Option<&'e str> {
    match callee {
        Expression::Identifier(ident) => Some(ident.name.as_str()),
        Expression::StaticMemberExpression(member) => Some(member.property.name.as_str()),
        Expression::SequenceExpression(seq) if seq.expressions.len() == 2 => match &seq.expressions[1] {
            Expression::StaticMemberExpression(member) => Some(member.property.name.as_str()),
            _ => None,
        },
        _ => None,
    }
}

/// True if `call` targets a name accepted by `is_target`.
pub fn call_matches(call: &CallExpression<'_>, is_target: impl Fn(&str) -> bool) -> bool {
    call_target_name(&call.callee).is_some_and(is_target)
}

/// Plain callee name: an identifier, or the property of a static member.
///
/// Unlike [`call_target_name`] this does not look through sequences; it is
/// used to match calls against locally declared wrapper names.
pub fn callee_name<'e>(callee: &'e Expression<'_>) -> Option<&'e str> {
    match callee {
        Expression::Identifier(ident) => Some(ident.name.as_str()),
        Expression::StaticMemberExpression(member) => Some(member.property.name.as_str()),
        _ => None,
    }
}

/// `this.x(...)`, `this["x"](...)` or `this.#x(...)`.
pub fn is_this_member_call(callee: &Expression<'_>) -> bool {
    callee
        .as_member_expression()
        .is_some_and(|member| matches!(member.object(), Expression::ThisExpression(_)))
}

// ============================================================================
// ARGUMENTS AND LITERALS
// ============================================================================

/// The `index`th argument, unless it is a spread.
pub fn argument_at<'e, 'a>(arguments: &'e [Argument<'a>], index: usize) -> Option<&'e Expression<'a>> {
    arguments.get(index).and_then(Argument::as_expression)
}

pub fn first_argument<'e, 'a>(arguments: &'e [Argument<'a>]) -> Option<&'e Expression<'a>> {
    argument_at(arguments, 0)
}

pub fn string_literal<'e>(expr: &'e Expression<'_>) -> Option<&'e str> {
    match expr {
        Expression::StringLiteral(lit) => Some(lit.value.as_str()),
        _ => None,
    }
}

pub fn identifier_name<'e>(expr: &'e Expression<'_>) -> Option<&'e str> {
    match expr {
        Expression::Identifier(ident) => Some(ident.name.as_str()),
        _ => None,
    }
}

/// `object.property` where `object` is a plain identifier.
pub fn identifier_member<'e>(member: &'e StaticMemberExpression<'_>) -> Option<(&'e str, &'e str)> {
    let object = identifier_name(&member.object)?;
    Some((object, member.property.name.as_str()))
}

/// `require("specifier")` with a string literal argument.
pub fn require_specifier<'e>(expr: &'e Expression<'_>) -> Option<&'e str> {
    let Expression::CallExpression(call) = expr else {
        return None;
    };
    if !call.callee.is_specific_id(REQUIRE_FUNCTION) {
        return None;
    }
    first_argument(&call.arguments).and_then(string_literal)
}

// ============================================================================
// OBJECTS
// ============================================================================

/// Identifier name of a non-computed property key.
pub fn property_key_name<'e>(key: &'e PropertyKey<'_>) -> Option<&'e str> {
    match key {
        PropertyKey::StaticIdentifier(ident) => Some(ident.name.as_str()),
        _ => None,
    }
}

/// Value of the property whose identifier key is `key`.
pub fn object_property<'e, 'a>(object: &'e ObjectExpression<'a>, key: &str) -> Option<&'e Expression<'a>> {
    object.properties.iter().find_map(|property| match property {
        ObjectPropertyKind::ObjectProperty(prop) if property_key_name(&prop.key) == Some(key) => {
            Some(&prop.value)
        }
        _ => None,
    })
}

pub fn has_object_property(object: &ObjectExpression<'_>, key: &str) -> bool {
    object_property(object, key).is_some()
}

/// If `expr` is an object literal, that literal.
pub fn as_object<'e, 'a>(expr: &'e Expression<'a>) -> Option<&'e ObjectExpression<'a>> {
    match expr {
        Expression::ObjectExpression(object) => Some(object),
        _ => None,
    }
}

// ============================================================================
// BINDINGS
// ============================================================================

/// Names bound by an object destructuring, in source order.
///
/// `{ a, b: c }` yields `a`, `c`; a property whose value is a nested pattern
/// or a default falls back to its key. Rest elements are ignored.
pub fn destructured_names(pattern: &ObjectPattern<'_>) -> Vec<String> {
    pattern
        .properties
        .iter()
        .filter_map(|property| match &property.value {
            BindingPattern::BindingIdentifier(ident) => Some(ident.name.as_str()),
            _ => property_key_name(&property.key),
        })
        .map(str::to_string)
        .collect()
}

/// Name of a plain identifier binding.
pub fn binding_name<'e>(pattern: &'e BindingPattern<'_>) -> Option<&'e str> {
    match pattern {
        BindingPattern::BindingIdentifier(ident) => Some(ident.name.as_str()),
        _ => None,
    }
}

/// `this.field` as an expression.
pub fn this_member_name<'e>(expr: &'e Expression<'_>) -> Option<&'e str> {
    match expr {
        Expression::StaticMemberExpression(member)
            if matches!(member.object, Expression::ThisExpression(_)) =>
        {
            Some(member.property.name.as_str())
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests;
