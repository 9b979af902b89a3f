use crate::ast;
use crate::ast::Node;
use crate::validation::Rule;
use crate::validation::ValidationContext;
use crate::validation::ValidationErrorCollector;
use crate::validation::ValidationErrorType;
use std::collections::HashSet;

/// Every variable an operation defines must be used by it, or by a fragment
/// it spreads.
#[derive(Debug, Default)]
pub struct NoUnusedVariables;
impl<'a> Rule<'a> for NoUnusedVariables {
    fn name(&self) -> &'static str {
        "NoUnusedVariables"
    }

    fn check_operation_definition(
        &mut self,
        ctx: &ValidationContext<'a>,
        node: &'a Node,
        operation_definition: &'a ast::OperationDefinition,
        errors: &mut ValidationErrorCollector,
    ) {
        let used: HashSet<&str> = ctx.recursive_variable_usages(node)
            .into_iter()
            .map(|(_, usage)| usage.name.as_str())
            .collect();
        for var_def_node in &operation_definition.variable_definitions {
            if let Some(var_def) = var_def_node.as_variable_definition() {
                if !used.contains(var_def.name.as_str()) {
                    errors.add_error(
                        ValidationErrorType::UnusedVariable,
                        var_def_node.location(),
                        format!("Variable `${}` is never used", var_def.name),
                    );
                }
            }
        }
    }
}
