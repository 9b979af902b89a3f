use crate::ast;
use crate::ast::Node;
use crate::ast::NodeKind;
use crate::schema::Schema;
use crate::types::GraphQLType;
use crate::types::TypeAnnotation;
use crate::validation::Rule;
use crate::validation::ValidationContext;
use crate::validation::ValidationErrorCollector;
use crate::validation::ValidationErrorType;
use std::collections::HashMap;
use std::collections::HashSet;

/// Where a group of variable usages was found.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
enum UsageScope<'a> {
    Fragment(&'a str),
    /// Keyed by the address of the operation's node.
    Operation(*const Node),
}

#[derive(Debug)]
struct VariableUsage<'a> {
    expected_type: TypeAnnotation,
    location_has_default: bool,
    node: &'a Node,
    var_name: &'a str,
}

/// A variable may only be used where its declared type is compatible with
/// the type expected at that position.
///
/// Usages inside fragments are checked against every operation that
/// (transitively) spreads the fragment, once the whole document has been
/// seen. A nullable variable may flow into a non-null position only when the
/// variable or the position has a non-null default value.
#[derive(Debug, Default)]
pub struct VariableTypesMatch<'a> {
    scope: Option<UsageScope<'a>>,
    usages: HashMap<UsageScope<'a>, Vec<VariableUsage<'a>>>,
}
impl<'a> VariableTypesMatch<'a> {
    fn collect_usages(
        &mut self,
        schema: &Schema,
        value: &'a Node,
        expected_type: &TypeAnnotation,
        location_has_default: bool,
    ) {
        let scope = match self.scope {
            Some(scope) => scope,
            None => return,
        };
        match value.kind() {
            NodeKind::VariableReference(var_ref) => {
                self.usages.entry(scope).or_default().push(VariableUsage {
                    expected_type: expected_type.clone(),
                    location_has_default,
                    node: value,
                    var_name: var_ref.name.as_str(),
                });
            },

            NodeKind::ListValue(list) => {
                let item_type = match expected_type.as_list_annotation() {
                    Some(list_annot) => list_annot.inner_type_annotation(),
                    None => return,
                };
                for item in &list.values {
                    self.collect_usages(schema, item, item_type, false);
                }
            },

            NodeKind::ObjectValue(object) => {
                let input_object = match expected_type.as_named_annotation()
                    .and_then(|named| schema.get_type(named.graphql_type_name()))
                    .and_then(GraphQLType::as_input_object)
                {
                    Some(input_object) => input_object,
                    None => return,
                };
                for (field_name, field_value) in object.field_entries() {
                    if let Some(input_field) = input_object.fields().get(field_name) {
                        self.collect_usages(
                            schema,
                            field_value,
                            input_field.type_annotation(),
                            has_non_null_default(input_field.default_value()),
                        );
                    }
                }
            },

            _ => (),
        }
    }
}
impl<'a> Rule<'a> for VariableTypesMatch<'a> {
    fn name(&self) -> &'static str {
        "VariableTypesMatch"
    }

    fn check_operation_definition(
        &mut self,
        _ctx: &ValidationContext<'a>,
        node: &'a Node,
        _operation_definition: &'a ast::OperationDefinition,
        _errors: &mut ValidationErrorCollector,
    ) {
        self.scope = Some(UsageScope::Operation(node as *const Node));
    }

    fn check_fragment_definition(
        &mut self,
        _ctx: &ValidationContext<'a>,
        _node: &'a Node,
        fragment_definition: &'a ast::FragmentDefinition,
        _errors: &mut ValidationErrorCollector,
    ) {
        self.scope = Some(UsageScope::Fragment(fragment_definition.name.as_str()));
    }

    fn check_argument(
        &mut self,
        ctx: &ValidationContext<'a>,
        _node: &'a Node,
        argument: &'a ast::Argument,
        _errors: &mut ValidationErrorCollector,
    ) {
        if let Some(param) = ctx.argument() {
            self.collect_usages(
                ctx.schema(),
                &argument.value,
                param.type_annotation(),
                has_non_null_default(param.default_value()),
            );
        }
    }

    fn leave_document(
        &mut self,
        ctx: &ValidationContext<'a>,
        _node: &'a Node,
        document: &'a ast::Document,
        errors: &mut ValidationErrorCollector,
    ) {
        let schema = ctx.schema();
        let mut reported = HashSet::new();
        for (op_node, operation) in document.operations() {
            let var_defs: HashMap<&str, (TypeAnnotation, bool)> = operation
                .variable_definitions
                .iter()
                .filter_map(|node| node.as_variable_definition())
                .filter_map(|var_def| {
                    let var_type = TypeAnnotation::from_ast_node(&var_def.var_type)?;
                    let has_default = has_non_null_default(var_def.default_value.as_deref());
                    Some((var_def.name.as_str(), (var_type, has_default)))
                })
                .collect();

            let scopes = std::iter::once(UsageScope::Operation(op_node as *const Node))
                .chain(
                    ctx.recursively_referenced_fragments(op_node)
                        .into_iter()
                        .map(|(_, frag)| UsageScope::Fragment(frag.name.as_str())),
                );
            for scope in scopes {
                let usages = match self.usages.get(&scope) {
                    Some(usages) => usages,
                    None => continue,
                };
                for usage in usages {
                    let (var_type, var_has_default) = match var_defs.get(usage.var_name) {
                        Some(var_def) => var_def,
                        None => continue,
                    };
                    if var_type.innermost_type(schema).is_none() {
                        continue;
                    }
                    let allowed = is_variable_usage_allowed(
                        schema,
                        var_type,
                        *var_has_default,
                        &usage.expected_type,
                        usage.location_has_default,
                    );
                    if !allowed && reported.insert(usage.node as *const Node) {
                        errors.add_error(
                            ValidationErrorType::VariableTypeMismatch,
                            usage.node.location(),
                            format!(
                                "Variable `${}` of type `{var_type}` used in position \
                                expecting type `{}`",
                                usage.var_name,
                                usage.expected_type,
                            ),
                        );
                    }
                }
            }
        }
    }
}

fn has_non_null_default(default_value: Option<&Node>) -> bool {
    default_value.is_some_and(|value| !matches!(value.kind(), NodeKind::NullValue(_)))
}

fn is_variable_usage_allowed(
    schema: &Schema,
    var_type: &TypeAnnotation,
    var_has_default: bool,
    location_type: &TypeAnnotation,
    location_has_default: bool,
) -> bool {
    if var_type.nullable() && !location_type.nullable() {
        if !var_has_default && !location_has_default {
            return false;
        }
        return var_type.is_subtype_of(schema, &location_type.to_nullable());
    }
    var_type.is_subtype_of(schema, location_type)
}
