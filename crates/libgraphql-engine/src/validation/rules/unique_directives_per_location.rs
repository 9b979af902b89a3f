use crate::ast;
use crate::ast::Node;
use crate::validation::Rule;
use crate::validation::ValidationContext;
use crate::validation::ValidationErrorCollector;
use crate::validation::ValidationErrorType;
use std::collections::HashSet;

/// A non-repeatable directive may appear at most once on any one node.
/// Directives the schema does not define are left to `KnownDirectives`.
#[derive(Debug, Default)]
pub struct UniqueDirectivesPerLocation;
impl UniqueDirectivesPerLocation {
    fn check_directives(
        ctx: &ValidationContext<'_>,
        directives: &[Node],
        errors: &mut ValidationErrorCollector,
    ) {
        let mut seen = HashSet::new();
        for directive_node in directives {
            let Some(directive) = directive_node.as_directive() else {
                continue;
            };
            let repeatable = ctx.schema()
                .directive(directive.name.as_str())
                .is_some_and(|def| def.is_repeatable());
            if !repeatable && !seen.insert(directive.name.as_str()) {
                errors.add_error(
                    ValidationErrorType::DuplicateDirectiveName,
                    directive_node.location(),
                    format!(
                        "The directive `@{}` can only be used once at this location",
                        directive.name,
                    ),
                );
            }
        }
    }
}
impl<'a> Rule<'a> for UniqueDirectivesPerLocation {
    fn name(&self) -> &'static str {
        "UniqueDirectivesPerLocation"
    }

    fn check_field(
        &mut self,
        ctx: &ValidationContext<'a>,
        _node: &'a Node,
        field: &'a ast::Field,
        errors: &mut ValidationErrorCollector,
    ) {
        Self::check_directives(ctx, &field.directives, errors);
    }

    fn check_fragment_definition(
        &mut self,
        ctx: &ValidationContext<'a>,
        _node: &'a Node,
        fragment_definition: &'a ast::FragmentDefinition,
        errors: &mut ValidationErrorCollector,
    ) {
        Self::check_directives(ctx, &fragment_definition.directives, errors);
    }

    fn check_fragment_spread(
        &mut self,
        ctx: &ValidationContext<'a>,
        _node: &'a Node,
        fragment_spread: &'a ast::FragmentSpread,
        errors: &mut ValidationErrorCollector,
    ) {
        Self::check_directives(ctx, &fragment_spread.directives, errors);
    }

    fn check_inline_fragment(
        &mut self,
        ctx: &ValidationContext<'a>,
        _node: &'a Node,
        inline_fragment: &'a ast::InlineFragment,
        errors: &mut ValidationErrorCollector,
    ) {
        Self::check_directives(ctx, &inline_fragment.directives, errors);
    }

    fn check_operation_definition(
        &mut self,
        ctx: &ValidationContext<'a>,
        _node: &'a Node,
        operation_definition: &'a ast::OperationDefinition,
        errors: &mut ValidationErrorCollector,
    ) {
        Self::check_directives(ctx, &operation_definition.directives, errors);
    }

    fn check_variable_definition(
        &mut self,
        ctx: &ValidationContext<'a>,
        _node: &'a Node,
        variable_definition: &'a ast::VariableDefinition,
        errors: &mut ValidationErrorCollector,
    ) {
        Self::check_directives(ctx, &variable_definition.directives, errors);
    }
}
