use crate::ast;
use crate::ast::Node;
use crate::types::TypeAnnotation;
use crate::validation::Rule;
use crate::validation::ValidationContext;
use crate::validation::ValidationErrorCollector;
use crate::validation::ValidationErrorType;

#[derive(Debug, Default)]
pub struct VariablesAreInputTypes;
impl<'a> Rule<'a> for VariablesAreInputTypes {
    fn name(&self) -> &'static str {
        "VariablesAreInputTypes"
    }

    fn check_variable_definition(
        &mut self,
        ctx: &ValidationContext<'a>,
        node: &'a Node,
        variable_definition: &'a ast::VariableDefinition,
        errors: &mut ValidationErrorCollector,
    ) {
        let type_annot = match TypeAnnotation::from_ast_node(&variable_definition.var_type) {
            Some(type_annot) => type_annot,
            None => return,
        };
        let type_name = type_annot.innermost_named_type_annotation().graphql_type_name();
        // Unknown types are reported by `KnownTypeNames`.
        if let Some(type_) = ctx.schema().get_type(type_name) {
            if !type_.is_input_type() {
                errors.add_error(
                    ValidationErrorType::NonInputTypeOnVariable,
                    node.location(),
                    format!(
                        "Variable `${}` can not have type `{type_annot}`: `{type_name}` \
                        is not an input type",
                        variable_definition.name,
                    ),
                );
            }
        }
    }
}
