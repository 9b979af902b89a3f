use crate::ast;
use crate::ast::Node;
use crate::types::is_valid_literal_value;
use crate::validation::Rule;
use crate::validation::ValidationContext;
use crate::validation::ValidationErrorCollector;
use crate::validation::ValidationErrorType;

/// Literal argument values must be valid for the argument's declared type.
/// Variables are assumed to hold valid values here; `VariableTypesMatch`
/// checks them.
#[derive(Debug, Default)]
pub struct ArgumentsOfCorrectType;
impl<'a> Rule<'a> for ArgumentsOfCorrectType {
    fn name(&self) -> &'static str {
        "ArgumentsOfCorrectType"
    }

    fn check_argument(
        &mut self,
        ctx: &ValidationContext<'a>,
        node: &'a Node,
        argument: &'a ast::Argument,
        errors: &mut ValidationErrorCollector,
    ) {
        let param = match ctx.argument() {
            Some(param) => param,
            None => return,
        };
        let type_annot = param.type_annotation();
        if !is_valid_literal_value(ctx.schema(), &argument.value, type_annot) {
            errors.add_error(
                ValidationErrorType::WrongType,
                node.location(),
                format!(
                    "Argument `{}` has an invalid value {}: expected type `{type_annot}`",
                    argument.name,
                    ast::print_value(&argument.value),
                ),
            );
        }
    }
}
