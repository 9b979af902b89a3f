use crate::ast;
use crate::ast::Node;
use crate::validation::Rule;
use crate::validation::ValidationContext;
use crate::validation::ValidationErrorCollector;
use crate::validation::ValidationErrorType;

/// Operations may only be of a kind the schema defines a root type for.
#[derive(Debug, Default)]
pub struct KnownOperationTypes;
impl<'a> Rule<'a> for KnownOperationTypes {
    fn name(&self) -> &'static str {
        "KnownOperationTypes"
    }

    fn check_operation_definition(
        &mut self,
        ctx: &ValidationContext<'a>,
        node: &'a Node,
        operation_definition: &'a ast::OperationDefinition,
        errors: &mut ValidationErrorCollector,
    ) {
        let operation = operation_definition.operation;
        if ctx.schema().root_operation_type(operation).is_none() {
            errors.add_error(
                ValidationErrorType::UnknownOperation,
                node.location(),
                format!("The schema does not define a {operation} root operation type"),
            );
        }
    }
}
