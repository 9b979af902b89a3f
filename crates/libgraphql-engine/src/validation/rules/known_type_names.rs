use crate::ast;
use crate::ast::Node;
use crate::validation::Rule;
use crate::validation::ValidationContext;
use crate::validation::ValidationErrorCollector;
use crate::validation::ValidationErrorType;

/// Every type named in a variable type or type condition must exist.
#[derive(Debug, Default)]
pub struct KnownTypeNames;
impl<'a> Rule<'a> for KnownTypeNames {
    fn name(&self) -> &'static str {
        "KnownTypeNames"
    }

    fn check_type_name(
        &mut self,
        ctx: &ValidationContext<'a>,
        node: &'a Node,
        type_name: &'a ast::TypeName,
        errors: &mut ValidationErrorCollector,
    ) {
        if ctx.schema().get_type(type_name.name.as_str()).is_none() {
            errors.add_error(
                ValidationErrorType::UnknownType,
                node.location(),
                format!("Unknown type `{}`", type_name.name),
            );
        }
    }
}
