use crate::syntax::{binding_name, call_target_name, first_argument, require_specifier};
use oxc_ast::ast::{
    Declaration, Expression, ImportDeclaration, ImportDeclarationSpecifier, Program, Statement,
    VariableDeclarationKind, VariableDeclarator,
};
use oxc_ast_visit::{Visit, walk};
use rustc_hash::FxHashMap;
use smol_str::SmolStr;

/// Compiler helpers that wrap a `require` call without changing what it binds.
const INTEROP_HELPERS: &[&str] = &["__importStar", "__importDefault"];

/// Local binding name -> module specifier, for one file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportMap {
    bindings: FxHashMap<SmolStr, SmolStr>,
}

impl ImportMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a binding; a later binding of the same name replaces it.
    pub fn insert(&mut self, local: impl Into<SmolStr>, specifier: impl Into<SmolStr>) {
        self.bindings.insert(local.into(), specifier.into());
    }

    pub fn get(&self, local: &str) -> Option<&str> {
        self.bindings.get(local).map(SmolStr::as_str)
    }

    pub fn contains(&self, local: &str) -> bool {
        self.bindings.contains_key(local)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

/// Builds the import map for a program.
///
/// Named, default and namespace imports are recorded, as is any
/// `const|let|var x = require("path")` at any depth (optionally wrapped in
/// an interop helper such as `tslib_1.__importStar`).
pub fn collect_imports(program: &Program<'_>) -> ImportMap {
    let mut collector = ImportCollector { map: ImportMap::new() };
    collector.visit_program(program);
    tracing::trace!(bindings = collector.map.len(), "[IMPORTS] collected");
    collector.map
}

struct ImportCollector {
    map: ImportMap,
}

impl<'a> Visit<'a> for ImportCollector {
    fn visit_import_declaration(&mut self, decl: &ImportDeclaration<'a>) {
        let source = decl.source.value.as_str();
        let Some(specifiers) = &decl.specifiers else {
            return;
        };
        for specifier in specifiers.iter() {
            let local = match specifier {
                ImportDeclarationSpecifier::ImportSpecifier(s) => &s.local,
                ImportDeclarationSpecifier::ImportDefaultSpecifier(s) => &s.local,
                ImportDeclarationSpecifier::ImportNamespaceSpecifier(s) => &s.local,
            };
            self.map.insert(local.name.as_str(), source);
        }
    }

    fn visit_variable_declarator(&mut self, decl: &VariableDeclarator<'a>) {
        if let (Some(local), Some(init)) = (binding_name(&decl.id), &decl.init)
            && let Some(specifier) = required_module(init)
        {
            self.map.insert(local, specifier);
        }
        walk::walk_variable_declarator(self, decl);
    }
}

fn required_module<'e>(init: &'e Expression<'_>) -> Option<&'e str> {
    if let Some(specifier) = require_specifier(init) {
        return Some(specifier);
    }
    let Expression::CallExpression(call) = init else {
        return None;
    };
    if !call_target_name(&call.callee).is_some_and(|name| INTEROP_HELPERS.contains(&name)) {
        return None;
    }
    first_argument(&call.arguments).and_then(require_specifier)
}

/// Names declared by top-level `const` statements, exported or not.
pub fn top_level_const_names<'p>(program: &'p Program<'_>) -> Vec<&'p str> {
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
        .filter(|decl| decl.kind == VariableDeclarationKind::Const)
        .flat_map(|decl| decl.declarations.iter().filter_map(|d| binding_name(&d.id)))
        .collect()
}

/// True if `name` is an imported binding or a top-level `const`.
///
/// Separates statically known namespace objects from runtime values such as
/// function parameters that merely look the same.
pub fn is_constant_identifier(name: &str, program: &Program<'_>, imports: &ImportMap) -> bool {
    imports.contains(name) || top_level_const_names(program).contains(&name)
}
