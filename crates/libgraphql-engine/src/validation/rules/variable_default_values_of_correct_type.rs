use crate::ast;
use crate::ast::Node;
use crate::types::is_valid_literal_value;
use crate::validation::Rule;
use crate::validation::ValidationContext;
use crate::validation::ValidationErrorCollector;
use crate::validation::ValidationErrorType;

/// A variable's default value must be a valid literal of the variable's type.
///
/// Variables whose type does not resolve to an input type are skipped. Those
/// are reported by `KnownTypeNames` or `VariablesAreInputTypes`.
#[derive(Debug, Default)]
pub struct VariableDefaultValuesOfCorrectType;
impl<'a> Rule<'a> for VariableDefaultValuesOfCorrectType {
    fn name(&self) -> &'static str {
        "VariableDefaultValuesOfCorrectType"
    }

    fn check_variable_definition(
        &mut self,
        ctx: &ValidationContext<'a>,
        node: &'a Node,
        variable_definition: &'a ast::VariableDefinition,
        errors: &mut ValidationErrorCollector,
    ) {
        let input_type = match ctx.input_type() {
            Some(input_type) => input_type,
            None => return,
        };
        if let Some(default_value) = &variable_definition.default_value {
            if !is_valid_literal_value(ctx.schema(), default_value, input_type) {
                errors.add_error(
                    ValidationErrorType::BadValueForDefaultArg,
                    node.location(),
                    format!(
                        "Bad default value {} for type {input_type}",
                        ast::print_value(default_value),
                    ),
                );
            }
        }
    }
}
