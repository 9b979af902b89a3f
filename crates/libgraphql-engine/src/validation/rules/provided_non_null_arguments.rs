use crate::ast;
use crate::ast::Node;
use crate::types::Parameter;
use crate::validation::Rule;
use crate::validation::ValidationContext;
use crate::validation::ValidationErrorCollector;
use crate::validation::ValidationErrorType;
use indexmap::IndexMap;

/// Non-null arguments without a default value must be provided.
#[derive(Debug, Default)]
pub struct ProvidedNonNullArguments;
impl ProvidedNonNullArguments {
    fn missing_arguments<'p>(
        params: &'p IndexMap<String, Parameter>,
        provided: &[Node],
    ) -> impl Iterator<Item = &'p Parameter> {
        let provided_names: Vec<&str> = provided.iter()
            .filter_map(|node| node.as_argument())
            .map(|arg| arg.name.as_str())
            .collect();
        params.values()
            .filter(move |param| {
                param.is_required() && !provided_names.contains(&param.name())
            })
    }
}
impl<'a> Rule<'a> for ProvidedNonNullArguments {
    fn name(&self) -> &'static str {
        "ProvidedNonNullArguments"
    }

    fn check_directive(
        &mut self,
        ctx: &ValidationContext<'a>,
        node: &'a Node,
        directive: &'a ast::Directive,
        errors: &mut ValidationErrorCollector,
    ) {
        let directive_def = match ctx.directive() {
            Some(directive_def) => directive_def,
            None => return,
        };
        for param in Self::missing_arguments(directive_def.parameters(), &directive.arguments) {
            errors.add_error(
                ValidationErrorType::MissingDirectiveArgument,
                node.location(),
                format!(
                    "Directive `@{}` is missing required argument `{}` of type `{}`",
                    directive.name,
                    param.name(),
                    param.type_annotation(),
                ),
            );
        }
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
        for param in Self::missing_arguments(field_def.parameters(), &field.arguments) {
            errors.add_error(
                ValidationErrorType::MissingFieldArgument,
                node.location(),
                format!(
                    "Field `{}` is missing required argument `{}` of type `{}`",
                    field.name,
                    param.name(),
                    param.type_annotation(),
                ),
            );
        }
    }
}
