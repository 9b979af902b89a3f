use crate::ast;
use crate::ast::Node;
use crate::validation::Rule;
use crate::validation::ValidationContext;
use crate::validation::ValidationErrorCollector;
use crate::validation::ValidationErrorType;

/// An anonymous operation must be the only operation in its document.
#[derive(Debug, Default)]
pub struct LoneAnonymousOperation {
    operation_count: usize,
}
impl<'a> Rule<'a> for LoneAnonymousOperation {
    fn name(&self) -> &'static str {
        "LoneAnonymousOperation"
    }

    fn check_document(
        &mut self,
        _ctx: &ValidationContext<'a>,
        _node: &'a Node,
        document: &'a ast::Document,
        _errors: &mut ValidationErrorCollector,
    ) {
        self.operation_count = document.operations().count();
    }

    fn check_operation_definition(
        &mut self,
        _ctx: &ValidationContext<'a>,
        node: &'a Node,
        operation_definition: &'a ast::OperationDefinition,
        errors: &mut ValidationErrorCollector,
    ) {
        if operation_definition.name.is_none() && self.operation_count > 1 {
            errors.add_error(
                ValidationErrorType::LoneAnonymousOperationViolation,
                node.location(),
                "An anonymous operation must be the only operation in its document",
            );
        }
    }
}
