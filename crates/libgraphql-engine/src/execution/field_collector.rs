use crate::ast::Node;
use crate::ast::NodeKind;
use crate::execution::ExecutionContext;
use crate::execution::execution_context::coerce_argument_values;
use crate::schema::Schema;
use crate::types::ObjectType;
use indexmap::IndexMap;
use std::collections::HashSet;

/// [`Field`](crate::ast::Field) nodes selected on one object, grouped by
/// response key, in selection order.
pub(crate) type GroupedFields = IndexMap<String, Vec<Node>>;

/// Collects the fields that `selection_sets` select on an object of type
/// `object_type`, following fragment spreads and inline fragments whose type
/// condition applies and dropping selections excluded by `@skip` or
/// `@include`.
pub(crate) fn collect_fields<'d>(
    ctx: &ExecutionContext,
    object_type: &ObjectType,
    selection_sets: impl IntoIterator<Item = &'d Node>,
) -> GroupedFields {
    let mut fields = IndexMap::new();
    let mut visited_fragments = HashSet::new();
    for selection_set in selection_sets {
        collect_fields_impl(ctx, object_type, selection_set, &mut visited_fragments, &mut fields);
    }
    fields
}

fn collect_fields_impl(
    ctx: &ExecutionContext,
    object_type: &ObjectType,
    selection_set: &Node,
    visited_fragments: &mut HashSet<String>,
    fields: &mut GroupedFields,
) {
    let selections = match selection_set.as_selection_set() {
        Some(selection_set) => &selection_set.selections,
        None => return,
    };
    for selection in selections {
        match selection.kind() {
            NodeKind::Field(field) => {
                if !should_include(ctx, &field.directives) {
                    continue;
                }
                fields.entry(field.response_key().to_string())
                    .or_default()
                    .push(selection.clone());
            },

            NodeKind::FragmentSpread(spread) => {
                if !should_include(ctx, &spread.directives)
                    || !visited_fragments.insert(spread.fragment_name.clone()) {
                    continue;
                }
                let fragment = match ctx.fragment(spread.fragment_name.as_str()) {
                    Some(fragment) => fragment,
                    None => continue,
                };
                let type_condition = Some(fragment.type_condition_name());
                if does_fragment_type_apply(ctx.schema(), object_type, type_condition) {
                    collect_fields_impl(
                        ctx,
                        object_type,
                        &fragment.selection_set,
                        visited_fragments,
                        fields,
                    );
                }
            },

            NodeKind::InlineFragment(inline_fragment) => {
                if !should_include(ctx, &inline_fragment.directives) {
                    continue;
                }
                let type_condition = inline_fragment.type_condition_name();
                if does_fragment_type_apply(ctx.schema(), object_type, type_condition) {
                    collect_fields_impl(
                        ctx,
                        object_type,
                        &inline_fragment.selection_set,
                        visited_fragments,
                        fields,
                    );
                }
            },

            _ => (),
        }
    }
}

fn does_fragment_type_apply(
    schema: &Schema,
    object_type: &ObjectType,
    type_condition: Option<&str>,
) -> bool {
    match type_condition {
        None => true,
        Some(type_name) => schema.get_type(type_name)
            .is_some_and(|condition_type| schema.is_possible_type(condition_type, object_type)),
    }
}

/// Applies `@skip(if:)` and `@include(if:)`. A condition that fails to coerce
/// excludes nothing.
fn should_include(ctx: &ExecutionContext, directives: &[Node]) -> bool {
    for directive in directives.iter().filter_map(|node| node.as_directive()) {
        let skip_when = match directive.name.as_str() {
            "skip" => true,
            "include" => false,
            _ => continue,
        };
        let directive_def = match ctx.schema().directive(directive.name.as_str()) {
            Some(directive_def) => directive_def,
            None => continue,
        };
        let condition = coerce_argument_values(
            ctx.schema(),
            directive_def.parameters(),
            &directive.arguments,
            ctx.variables(),
        ).ok().and_then(|args| args.get("if").and_then(|value| value.as_bool()));
        if condition == Some(skip_when) {
            return false;
        }
    }
    true
}
