use crate::ast;
use crate::ast::Node;
use crate::ast::NodeKind;
use crate::schema::DirectiveUsageError;
use crate::types::DirectiveLocation;
use crate::validation::Rule;
use crate::validation::ValidationContext;
use crate::validation::ValidationErrorCollector;
use crate::validation::ValidationErrorType;

/// Directives must be defined by the schema and used only where their
/// definition allows. Directive arguments are checked by the argument rules.
#[derive(Debug, Default)]
pub struct KnownDirectives;
impl KnownDirectives {
    fn directive_location(parent: &Node) -> Option<DirectiveLocation> {
        Some(match parent.kind() {
            NodeKind::OperationDefinition(op) => op.operation.into(),
            NodeKind::Field(_) => DirectiveLocation::Field,
            NodeKind::FragmentDefinition(_) => DirectiveLocation::FragmentDefinition,
            NodeKind::FragmentSpread(_) => DirectiveLocation::FragmentSpread,
            NodeKind::InlineFragment(_) => DirectiveLocation::InlineFragment,
            NodeKind::VariableDefinition(_) => DirectiveLocation::VariableDefinition,
            _ => return None,
        })
    }
}
impl<'a> Rule<'a> for KnownDirectives {
    fn name(&self) -> &'static str {
        "KnownDirectives"
    }

    fn check_directive(
        &mut self,
        ctx: &ValidationContext<'a>,
        node: &'a Node,
        directive: &'a ast::Directive,
        errors: &mut ValidationErrorCollector,
    ) {
        let location = match ctx.parent_node().and_then(Self::directive_location) {
            Some(location) => location,
            None => return,
        };
        let usage_errors = ctx.schema().check_directive_usage(
            directive.name.as_str(),
            location,
            &directive.arguments,
        );
        for usage_error in usage_errors {
            let kind = match usage_error {
                DirectiveUsageError::UnknownDirective { .. } =>
                    ValidationErrorType::UnknownDirective,
                DirectiveUsageError::MisplacedDirective { .. } =>
                    ValidationErrorType::MisplacedDirective,
                DirectiveUsageError::InvalidArgumentValue { .. }
                    | DirectiveUsageError::MissingRequiredArgument { .. }
                    | DirectiveUsageError::UnknownArgument { .. } => continue,
            };
            errors.add_error(kind, node.location(), usage_error.to_string());
        }
    }
}
