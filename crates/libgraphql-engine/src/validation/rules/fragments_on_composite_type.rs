use crate::ast;
use crate::ast::Node;
use crate::validation::Rule;
use crate::validation::ValidationContext;
use crate::validation::ValidationErrorCollector;
use crate::validation::ValidationErrorType;

/// Fragment type conditions must name an object, interface, or union type.
#[derive(Debug, Default)]
pub struct FragmentsOnCompositeType;
impl<'a> Rule<'a> for FragmentsOnCompositeType {
    fn name(&self) -> &'static str {
        "FragmentsOnCompositeType"
    }

    fn check_fragment_definition(
        &mut self,
        ctx: &ValidationContext<'a>,
        node: &'a Node,
        fragment_definition: &'a ast::FragmentDefinition,
        errors: &mut ValidationErrorCollector,
    ) {
        let type_name = fragment_definition.type_condition_name();
        if let Some(type_) = ctx.schema().get_type(type_name) {
            if !type_.is_composite() {
                errors.add_error(
                    ValidationErrorType::FragmentTypeConditionInvalid,
                    node.location(),
                    format!(
                        "Fragment `{}` can not condition on non-composite type `{type_name}`",
                        fragment_definition.name,
                    ),
                );
            }
        }
    }

    fn check_inline_fragment(
        &mut self,
        ctx: &ValidationContext<'a>,
        node: &'a Node,
        inline_fragment: &'a ast::InlineFragment,
        errors: &mut ValidationErrorCollector,
    ) {
        let type_name = match inline_fragment.type_condition_name() {
            Some(type_name) => type_name,
            None => return,
        };
        if let Some(type_) = ctx.schema().get_type(type_name) {
            if !type_.is_composite() {
                errors.add_error(
                    ValidationErrorType::InlineFragmentTypeConditionInvalid,
                    node.location(),
                    format!(
                        "Inline fragment can not condition on non-composite type `{type_name}`",
                    ),
                );
            }
        }
    }
}
