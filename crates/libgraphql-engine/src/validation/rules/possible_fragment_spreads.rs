use crate::ast;
use crate::ast::Node;
use crate::schema::Schema;
use crate::types::GraphQLType;
use crate::validation::Rule;
use crate::validation::ValidationContext;
use crate::validation::ValidationErrorCollector;
use crate::validation::ValidationErrorType;
use std::collections::HashSet;

/// A fragment may only be spread where some object type could satisfy both
/// the fragment's type condition and the enclosing selection set's type.
#[derive(Debug, Default)]
pub struct PossibleFragmentSpreads;
impl PossibleFragmentSpreads {
    fn types_overlap(schema: &Schema, a: &GraphQLType, b: &GraphQLType) -> bool {
        let possible_names = |type_: &GraphQLType| -> HashSet<String> {
            schema.possible_types(type_)
                .into_iter()
                .map(|obj_type| obj_type.name().to_string())
                .collect()
        };
        !possible_names(a).is_disjoint(&possible_names(b))
    }
}
impl<'a> Rule<'a> for PossibleFragmentSpreads {
    fn name(&self) -> &'static str {
        "PossibleFragmentSpreads"
    }

    fn check_fragment_spread(
        &mut self,
        ctx: &ValidationContext<'a>,
        node: &'a Node,
        fragment_spread: &'a ast::FragmentSpread,
        errors: &mut ValidationErrorCollector,
    ) {
        let schema = ctx.schema();
        let frag_name = fragment_spread.fragment_name.as_str();
        let Some(frag_type) = ctx.fragment(frag_name)
            .and_then(|frag| schema.get_type(frag.type_condition_name()))
            .filter(|type_| type_.is_composite())
        else {
            return;
        };
        let Some(parent_type) = ctx.parent_type() else {
            return;
        };
        if !Self::types_overlap(schema, frag_type, parent_type) {
            errors.add_error(
                ValidationErrorType::InvalidFragmentType,
                node.location(),
                format!(
                    "Fragment `{frag_name}` cannot be spread here as objects of type \
                     `{}` can never be of type `{}`",
                    parent_type.name(),
                    frag_type.name(),
                ),
            );
        }
    }

    fn check_inline_fragment(
        &mut self,
        ctx: &ValidationContext<'a>,
        node: &'a Node,
        inline_fragment: &'a ast::InlineFragment,
        errors: &mut ValidationErrorCollector,
    ) {
        let schema = ctx.schema();
        let Some(frag_type) = inline_fragment.type_condition_name()
            .and_then(|type_name| schema.get_type(type_name))
            .filter(|type_| type_.is_composite())
        else {
            return;
        };
        let Some(parent_type) = ctx.parent_type() else {
            return;
        };
        if !Self::types_overlap(schema, frag_type, parent_type) {
            errors.add_error(
                ValidationErrorType::InvalidFragmentType,
                node.location(),
                format!(
                    "Fragment cannot be spread here as objects of type `{}` can \
                     never be of type `{}`",
                    parent_type.name(),
                    frag_type.name(),
                ),
            );
        }
    }
}
