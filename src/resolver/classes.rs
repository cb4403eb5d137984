use oxc_ast::ast::{Class, Program};
use oxc_ast_visit::{Visit, walk};

/// True if a class named `class_name` is declared anywhere in `program`.
///
/// Named class expressions count too, which covers compiled decorator
/// output (`let X = class X { ... }`).
pub fn declares_class(program: &Program<'_>, class_name: &str) -> bool {
    let mut finder = ClassFinder { class_name, found: false };
    finder.visit_program(program);
    finder.found
}

struct ClassFinder<'n> {
    class_name: &'n str,
    found: bool,
}

impl<'a> Visit<'a> for ClassFinder<'_> {
    fn visit_class(&mut self, class: &Class<'a>) {
        if self.found {
            return;
        }
        if class.id.as_ref().is_some_and(|id| id.name == self.class_name) {
            self.found = true;
            return;
        }
        walk::walk_class(self, class);
    }
}
