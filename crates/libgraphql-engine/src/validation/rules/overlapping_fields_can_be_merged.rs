use crate::ast;
use crate::ast::Node;
use crate::ast::NodeKind;
use crate::loc::SourceLocation;
use crate::schema::Schema;
use crate::types::Field;
use crate::types::GraphQLType;
use crate::types::TypeAnnotation;
use crate::validation::Rule;
use crate::validation::ValidationContext;
use crate::validation::ValidationErrorCollector;
use crate::validation::ValidationErrorType;
use indexmap::IndexMap;
use std::collections::HashSet;

/// One field selection reached while collecting a selection set, along with
/// the type it was selected on.
#[derive(Clone, Copy)]
struct FieldAndType<'a> {
    def: Option<&'a Field>,
    field: &'a ast::Field,
    node: &'a Node,
    parent_type: Option<&'a GraphQLType>,
}

struct Conflict {
    locations: Vec<SourceLocation>,
    reason: String,
}

/// Fields sharing a response key must resolve to the same value: the same
/// field with the same arguments (unless their parent types can never be the
/// same object), with response shapes that can be merged, all the way down
/// through their sub-selections.
///
/// https://spec.graphql.org/October2021/#sec-Field-Selection-Merging
#[derive(Debug, Default)]
pub struct OverlappingFieldsCanBeMerged {
    /// Pairs of field nodes already compared, so a pair reachable from more
    /// than one selection set is reported once.
    compared: HashSet<(*const Node, *const Node, bool)>,
}
impl OverlappingFieldsCanBeMerged {
    fn find_conflict<'a>(
        &mut self,
        ctx: &ValidationContext<'a>,
        a: FieldAndType<'a>,
        b: FieldAndType<'a>,
        parents_exclusive: bool,
    ) -> Option<Conflict> {
        if std::ptr::eq(a.node, b.node) {
            return None;
        }
        let (first, second) = if (a.node as *const Node) < (b.node as *const Node) {
            (a.node as *const Node, b.node as *const Node)
        } else {
            (b.node as *const Node, a.node as *const Node)
        };
        if !self.compared.insert((first, second, parents_exclusive)) {
            return None;
        }

        let locations = a.node.location().into_iter()
            .chain(b.node.location())
            .cloned()
            .collect::<Vec<_>>();
        let parents_exclusive = parents_exclusive || match (a.parent_type, b.parent_type) {
            (Some(GraphQLType::Object(a_obj)), Some(GraphQLType::Object(b_obj))) =>
                a_obj.name() != b_obj.name(),
            _ => false,
        };

        if !parents_exclusive {
            if a.field.name != b.field.name {
                return Some(Conflict {
                    locations,
                    reason: format!(
                        "`{}` and `{}` are different fields",
                        a.field.name,
                        b.field.name,
                    ),
                });
            }
            if !same_arguments(&a.field.arguments, &b.field.arguments) {
                return Some(Conflict {
                    locations,
                    reason: "they have differing arguments".to_string(),
                });
            }
        }

        if let (Some(a_def), Some(b_def)) = (a.def, b.def) {
            let (a_type, b_type) = (a_def.type_annotation(), b_def.type_annotation());
            if !same_response_shape(ctx.schema(), a_type, b_type) {
                return Some(Conflict {
                    locations,
                    reason: format!("they return conflicting types `{a_type}` and `{b_type}`"),
                });
            }
        }

        let (Some(a_sel), Some(b_sel)) = (&a.field.selection_set, &b.field.selection_set) else {
            return None;
        };
        let a_fields = collect_fields(ctx, selection_type(ctx.schema(), a.def), a_sel);
        let b_fields = collect_fields(ctx, selection_type(ctx.schema(), b.def), b_sel);
        for (response_key, a_subfields) in &a_fields {
            let Some(b_subfields) = b_fields.get(response_key) else {
                continue;
            };
            for &a_sub in a_subfields {
                for &b_sub in b_subfields {
                    if let Some(sub) = self.find_conflict(ctx, a_sub, b_sub, parents_exclusive) {
                        let mut locations = locations;
                        locations.extend(sub.locations);
                        return Some(Conflict {
                            locations,
                            reason: format!(
                                "subfields `{response_key}` conflict because {}",
                                sub.reason,
                            ),
                        });
                    }
                }
            }
        }
        None
    }
}
impl<'a> Rule<'a> for OverlappingFieldsCanBeMerged {
    fn name(&self) -> &'static str {
        "OverlappingFieldsCanBeMerged"
    }

    fn check_selection_set(
        &mut self,
        ctx: &ValidationContext<'a>,
        node: &'a Node,
        _selection_set: &'a ast::SelectionSet,
        errors: &mut ValidationErrorCollector,
    ) {
        let fields = collect_fields(ctx, ctx.parent_type(), node);
        for (response_key, fields_for_key) in &fields {
            for (i, &a) in fields_for_key.iter().enumerate() {
                for &b in &fields_for_key[i + 1..] {
                    if let Some(conflict) = self.find_conflict(ctx, a, b, false) {
                        errors.add_error_at(
                            ValidationErrorType::FieldsConflict,
                            conflict.locations,
                            format!(
                                "Fields `{response_key}` conflict because {}. Use different \
                                 aliases on the fields to fetch both if this was intentional",
                                conflict.reason,
                            ),
                        );
                    }
                }
            }
        }
    }
}

/// Every field selected by `selection_set`, grouped by response key,
/// looking through inline fragments and fragment spreads.
fn collect_fields<'a>(
    ctx: &ValidationContext<'a>,
    parent_type: Option<&'a GraphQLType>,
    selection_set: &'a Node,
) -> IndexMap<&'a str, Vec<FieldAndType<'a>>> {
    let mut fields = IndexMap::new();
    let mut visited_fragments = HashSet::new();
    collect_fields_into(ctx, parent_type, selection_set, &mut fields, &mut visited_fragments);
    fields
}

fn collect_fields_into<'a>(
    ctx: &ValidationContext<'a>,
    parent_type: Option<&'a GraphQLType>,
    selection_set: &'a Node,
    fields: &mut IndexMap<&'a str, Vec<FieldAndType<'a>>>,
    visited_fragments: &mut HashSet<&'a str>,
) {
    let schema = ctx.schema();
    let Some(selection_set) = selection_set.as_selection_set() else {
        return;
    };
    for selection in &selection_set.selections {
        match selection.kind() {
            NodeKind::Field(field) => {
                let def = parent_type.and_then(|parent_type| {
                    schema.field_definition(parent_type, field.name.as_str())
                });
                fields.entry(field.response_key()).or_default().push(FieldAndType {
                    def,
                    field,
                    node: selection,
                    parent_type,
                });
            },

            NodeKind::InlineFragment(inline_frag) => {
                let frag_type = match inline_frag.type_condition_name() {
                    Some(type_name) => schema.get_type(type_name),
                    None => parent_type,
                };
                collect_fields_into(
                    ctx,
                    frag_type,
                    &inline_frag.selection_set,
                    fields,
                    visited_fragments,
                );
            },

            NodeKind::FragmentSpread(spread) => {
                let frag_name = spread.fragment_name.as_str();
                if !visited_fragments.insert(frag_name) {
                    continue;
                }
                if let Some(frag) = ctx.fragment(frag_name) {
                    collect_fields_into(
                        ctx,
                        schema.get_type(frag.type_condition_name()),
                        &frag.selection_set,
                        fields,
                        visited_fragments,
                    );
                }
            },

            _ => (),
        }
    }
}

/// The composite type a field's sub-selection selects on.
fn selection_type<'a>(schema: &'a Schema, def: Option<&'a Field>) -> Option<&'a GraphQLType> {
    def.and_then(|def| schema.get_type(
        def.type_annotation().innermost_named_type_annotation().graphql_type_name(),
    ))
}

fn same_arguments(a: &[Node], b: &[Node]) -> bool {
    let printed = |args: &[Node]| -> IndexMap<String, String> {
        args.iter()
            .filter_map(Node::as_argument)
            .map(|arg| (arg.name.clone(), ast::print_value(&arg.value)))
            .collect()
    };
    let (a, b) = (printed(a), printed(b));
    a.len() == b.len() && a.iter().all(|(name, value)| b.get(name) == Some(value))
}

/// Whether two field types produce responses of the same shape: matching
/// list and non-null wrappers, and identical leaf types at the core.
/// Composite cores are compared through their sub-selections instead.
fn same_response_shape(schema: &Schema, a: &TypeAnnotation, b: &TypeAnnotation) -> bool {
    if a.nullable() != b.nullable() {
        return false;
    }
    match (a, b) {
        (TypeAnnotation::List(a_list), TypeAnnotation::List(b_list)) => same_response_shape(
            schema,
            a_list.inner_type_annotation(),
            b_list.inner_type_annotation(),
        ),
        (TypeAnnotation::Named(a_named), TypeAnnotation::Named(b_named)) => {
            let (a_name, b_name) = (a_named.graphql_type_name(), b_named.graphql_type_name());
            let is_leaf = |name: &str| schema.get_type(name).is_some_and(GraphQLType::is_leaf);
            if is_leaf(a_name) || is_leaf(b_name) {
                a_name == b_name
            } else {
                true
            }
        },
        _ => false,
    }
}
