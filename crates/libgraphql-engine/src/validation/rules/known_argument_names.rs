use crate::ast;
use crate::ast::Node;
use crate::ast::NodeKind;
use crate::validation::Rule;
use crate::validation::ValidationContext;
use crate::validation::ValidationErrorCollector;
use crate::validation::ValidationErrorType;

/// Arguments passed to a known field or directive must be declared by it.
#[derive(Debug, Default)]
pub struct KnownArgumentNames;
impl<'a> Rule<'a> for KnownArgumentNames {
    fn name(&self) -> &'static str {
        "KnownArgumentNames"
    }

    fn check_argument(
        &mut self,
        ctx: &ValidationContext<'a>,
        node: &'a Node,
        argument: &'a ast::Argument,
        errors: &mut ValidationErrorCollector,
    ) {
        if ctx.argument().is_some() {
            return;
        }

        let message = match ctx.parent_node().map(Node::kind) {
            Some(NodeKind::Directive(directive)) if ctx.directive().is_some() => format!(
                "Unknown argument `{}` on directive `@{}`",
                argument.name,
                directive.name,
            ),
            Some(NodeKind::Field(field)) => match (ctx.parent_type(), ctx.field_definition()) {
                (Some(parent_type), Some(_)) => format!(
                    "Unknown argument `{}` on field `{}.{}`",
                    argument.name,
                    parent_type.name(),
                    field.name,
                ),
                _ => return,
            },
            _ => return,
        };
        errors.add_error(ValidationErrorType::UnknownArgument, node.location(), message);
    }
}
