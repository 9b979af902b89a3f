use crate::ast;
use crate::ast::Node;
use crate::validation::Rule;
use crate::validation::ValidationContext;
use crate::validation::ValidationErrorCollector;
use crate::validation::ValidationErrorType;
use std::collections::HashSet;

#[derive(Debug, Default)]
pub struct UniqueArgumentNames;
impl UniqueArgumentNames {
    fn check_arguments(arguments: &[Node], errors: &mut ValidationErrorCollector) {
        let mut seen = HashSet::new();
        for arg_node in arguments {
            if let Some(arg) = arg_node.as_argument() {
                if !seen.insert(arg.name.as_str()) {
                    errors.add_error(
                        ValidationErrorType::DuplicateArgumentNames,
                        arg_node.location(),
                        format!("There can be only one argument named `{}`", arg.name),
                    );
                }
            }
        }
    }
}
impl<'a> Rule<'a> for UniqueArgumentNames {
    fn name(&self) -> &'static str {
        "UniqueArgumentNames"
    }

    fn check_directive(
        &mut self,
        _ctx: &ValidationContext<'a>,
        _node: &'a Node,
        directive: &'a ast::Directive,
        errors: &mut ValidationErrorCollector,
    ) {
        Self::check_arguments(&directive.arguments, errors);
    }

    fn check_field(
        &mut self,
        _ctx: &ValidationContext<'a>,
        _node: &'a Node,
        field: &'a ast::Field,
        errors: &mut ValidationErrorCollector,
    ) {
        Self::check_arguments(&field.arguments, errors);
    }
}
