use crate::ast;
use crate::ast::Node;
use crate::validation::Rule;
use crate::validation::ValidationContext;
use crate::validation::ValidationErrorCollector;
use crate::validation::ValidationErrorType;
use std::collections::HashSet;

#[derive(Debug, Default)]
pub struct UniqueVariableNames;
impl<'a> Rule<'a> for UniqueVariableNames {
    fn name(&self) -> &'static str {
        "UniqueVariableNames"
    }

    fn check_operation_definition(
        &mut self,
        _ctx: &ValidationContext<'a>,
        _node: &'a Node,
        operation_definition: &'a ast::OperationDefinition,
        errors: &mut ValidationErrorCollector,
    ) {
        let mut seen = HashSet::new();
        for var_def_node in &operation_definition.variable_definitions {
            let Some(var_def) = var_def_node.as_variable_definition() else {
                continue;
            };
            if !seen.insert(var_def.name.as_str()) {
                errors.add_error(
                    ValidationErrorType::DuplicateVariableName,
                    var_def_node.location(),
                    format!("There can be only one variable named `${}`", var_def.name),
                );
            }
        }
    }
}
