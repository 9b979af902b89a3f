use crate::ast;
use crate::ast::Node;
use crate::validation::Rule;
use crate::validation::ValidationContext;
use crate::validation::ValidationErrorCollector;
use crate::validation::ValidationErrorType;

#[derive(Debug, Default)]
pub struct FieldsOnCorrectType;
impl<'a> Rule<'a> for FieldsOnCorrectType {
    fn name(&self) -> &'static str {
        "FieldsOnCorrectType"
    }

    fn check_field(
        &mut self,
        ctx: &ValidationContext<'a>,
        node: &'a Node,
        field: &'a ast::Field,
        errors: &mut ValidationErrorCollector,
    ) {
        if let Some(parent_type) = ctx.parent_type() {
            if ctx.field_definition().is_none() {
                errors.add_error(
                    ValidationErrorType::FieldUndefined,
                    node.location(),
                    format!(
                        "Field `{}` is not defined on type `{}`",
                        field.name,
                        parent_type.name(),
                    ),
                );
            }
        }
    }
}
