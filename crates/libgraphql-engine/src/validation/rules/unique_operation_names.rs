use crate::ast;
use crate::ast::Node;
use crate::validation::Rule;
use crate::validation::ValidationContext;
use crate::validation::ValidationErrorCollector;
use crate::validation::ValidationErrorType;
use std::collections::HashSet;

#[derive(Debug, Default)]
pub struct UniqueOperationNames<'a> {
    seen: HashSet<&'a str>,
}
impl<'a> Rule<'a> for UniqueOperationNames<'a> {
    fn name(&self) -> &'static str {
        "UniqueOperationNames"
    }

    fn check_operation_definition(
        &mut self,
        _ctx: &ValidationContext<'a>,
        node: &'a Node,
        operation_definition: &'a ast::OperationDefinition,
        errors: &mut ValidationErrorCollector,
    ) {
        if let Some(op_name) = &operation_definition.name {
            if !self.seen.insert(op_name.as_str()) {
                errors.add_error(
                    ValidationErrorType::DuplicateOperationName,
                    node.location(),
                    format!("There can be only one operation named `{op_name}`"),
                );
            }
        }
    }
}
