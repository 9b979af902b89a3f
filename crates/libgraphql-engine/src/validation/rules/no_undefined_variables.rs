use crate::ast;
use crate::ast::Node;
use crate::validation::Rule;
use crate::validation::ValidationContext;
use crate::validation::ValidationErrorCollector;
use crate::validation::ValidationErrorType;
use std::collections::HashSet;

/// Variables used by an operation, or by any fragment it spreads, must be
/// defined by that operation.
#[derive(Debug, Default)]
pub struct NoUndefinedVariables;
impl<'a> Rule<'a> for NoUndefinedVariables {
    fn name(&self) -> &'static str {
        "NoUndefinedVariables"
    }

    fn check_operation_definition(
        &mut self,
        ctx: &ValidationContext<'a>,
        node: &'a Node,
        operation_definition: &'a ast::OperationDefinition,
        errors: &mut ValidationErrorCollector,
    ) {
        let defined: HashSet<&str> = operation_definition.variable_definitions.iter()
            .filter_map(|var_def| var_def.as_variable_definition())
            .map(|var_def| var_def.name.as_str())
            .collect();
        let mut reported = HashSet::new();
        for (usage_node, usage) in ctx.recursive_variable_usages(node) {
            let var_name = usage.name.as_str();
            if defined.contains(var_name) || !reported.insert(var_name) {
                continue;
            }
            let message = match &operation_definition.name {
                Some(op_name) => format!(
                    "Variable `${var_name}` is not defined by operation `{op_name}`",
                ),
                None => format!("Variable `${var_name}` is not defined"),
            };
            errors.add_error_at(
                ValidationErrorType::UndefinedVariable,
                usage_node.location().into_iter()
                    .chain(node.location())
                    .cloned()
                    .collect(),
                message,
            );
        }
    }
}
