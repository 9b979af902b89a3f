use crate::ast;
use crate::ast::Node;
use crate::validation::Rule;
use crate::validation::ValidationContext;
use crate::validation::ValidationErrorCollector;
use crate::validation::ValidationErrorType;

/// Leaf-typed fields must not have a selection set; composite-typed fields
/// must.
#[derive(Debug, Default)]
pub struct ScalarLeafs;
impl<'a> Rule<'a> for ScalarLeafs {
    fn name(&self) -> &'static str {
        "ScalarLeafs"
    }

    fn check_field(
        &mut self,
        ctx: &ValidationContext<'a>,
        node: &'a Node,
        field: &'a ast::Field,
        errors: &mut ValidationErrorCollector,
    ) {
        let field_def = match ctx.field_definition() {
            Some(field_def) => field_def,
            None => return,
        };
        let type_annot = field_def.type_annotation();
        let type_name = type_annot.innermost_named_type_annotation().graphql_type_name();
        let type_ = match ctx.schema().get_type(type_name) {
            Some(type_) => type_,
            None => return,
        };

        if type_.is_leaf() && field.selection_set.is_some() {
            errors.add_error(
                ValidationErrorType::SubSelectionNotAllowed,
                node.location(),
                format!(
                    "Field `{}` of type `{type_annot}` must not have a selection set",
                    field.name,
                ),
            );
        } else if type_.is_composite() && field.selection_set.is_none() {
            errors.add_error(
                ValidationErrorType::SubSelectionRequired,
                node.location(),
                format!(
                    "Field `{}` of type `{type_annot}` must have a selection set",
                    field.name,
                ),
            );
        }
    }
}
