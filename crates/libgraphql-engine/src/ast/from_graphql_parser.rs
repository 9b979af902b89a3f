use crate::ast;
use crate::ast::AstError;
use crate::ast::Node;
use crate::ast::NodeKind;
use crate::loc;
use graphql_parser::query as gql;
use std::path::Path;

/// Parses an executable GraphQL document into a [`Node`] tree whose root is
/// a [`NodeKind::Document`].
///
/// Lexing and parsing is delegated to the `graphql_parser` crate; this
/// function only converts its AST into [`Node`]s. Note that
/// `graphql_parser` does not retain the source order of object-literal
/// fields (they come back sorted by name) and does not track positions for
/// arguments, values, or type references. Those nodes take the
/// [`location`](Node::location) of the field, directive, or definition that
/// encloses them.
pub fn parse_document(
    source: &str,
    file: Option<&Path>,
) -> Result<Node, AstError> {
    let ast_doc = gql::parse_query::<String>(source)
        .map_err(|err| AstError::ParseError {
            file: file.map(|file| file.to_path_buf()),
            message: err.to_string(),
        })?;

    let converter = Converter { file };
    let definitions = ast_doc.definitions
        .iter()
        .map(|def| converter.definition(def))
        .collect::<Vec<_>>();

    log::trace!(
        "Converted {} definition(s) from `{}`",
        definitions.len(),
        file.map(|file| file.display().to_string()).unwrap_or_default(),
    );

    Ok(Node::document(definitions))
}

/// Converts a `graphql_parser` value literal (e.g. an SDL default value or
/// directive argument) into a value [`Node`].
pub(crate) fn value_from_ast(value: &gql::Value<'_, String>) -> Node {
    Converter { file: None }.value(None, value)
}

struct Converter<'a> {
    file: Option<&'a Path>,
}
impl Converter<'_> {
    fn at(&self, pos: graphql_parser::Pos, kind: NodeKind) -> Node {
        Node::builder(kind)
            .location(Some(loc::SourceLocation::from_ast_pos(self.file, pos)))
            .build()
    }

    /// Stamps a node built without a position of its own with the position
    /// of its enclosing node.
    fn located(&self, pos: Option<graphql_parser::Pos>, node: Node) -> Node {
        match pos {
            Some(pos) => node.transform(|builder| builder.location(
                Some(loc::SourceLocation::from_ast_pos(self.file, pos)),
            )),
            None => node,
        }
    }

    fn definition(&self, def: &gql::Definition<'_, String>) -> Node {
        match def {
            gql::Definition::Operation(op) => self.operation(op),
            gql::Definition::Fragment(frag) => self.at(
                frag.position,
                NodeKind::FragmentDefinition(ast::FragmentDefinition {
                    directives: self.directives(&frag.directives),
                    name: frag.name.clone(),
                    selection_set: Box::new(self.selection_set(&frag.selection_set)),
                    type_condition: Box::new(
                        self.type_condition(frag.position, &frag.type_condition),
                    ),
                }),
            ),
        }
    }

    fn operation(&self, op: &gql::OperationDefinition<'_, String>) -> Node {
        let (pos, operation, name, var_defs, directives, selection_set) = match op {
            gql::OperationDefinition::SelectionSet(sel_set) => {
                return self.at(
                    sel_set.span.0,
                    NodeKind::OperationDefinition(ast::OperationDefinition {
                        directives: vec![],
                        name: None,
                        operation: ast::OperationType::Query,
                        selection_set: Box::new(self.selection_set(sel_set)),
                        variable_definitions: vec![],
                    }),
                );
            },
            gql::OperationDefinition::Query(q) => (
                q.position,
                ast::OperationType::Query,
                &q.name,
                &q.variable_definitions,
                &q.directives,
                &q.selection_set,
            ),
            gql::OperationDefinition::Mutation(m) => (
                m.position,
                ast::OperationType::Mutation,
                &m.name,
                &m.variable_definitions,
                &m.directives,
                &m.selection_set,
            ),
            gql::OperationDefinition::Subscription(s) => (
                s.position,
                ast::OperationType::Subscription,
                &s.name,
                &s.variable_definitions,
                &s.directives,
                &s.selection_set,
            ),
        };

        self.at(pos, NodeKind::OperationDefinition(ast::OperationDefinition {
            directives: self.directives(directives),
            name: name.clone(),
            operation,
            selection_set: Box::new(self.selection_set(selection_set)),
            variable_definitions: var_defs.iter()
                .map(|var_def| self.variable_definition(var_def))
                .collect(),
        }))
    }

    fn variable_definition(&self, var_def: &gql::VariableDefinition<'_, String>) -> Node {
        self.at(var_def.position, NodeKind::VariableDefinition(ast::VariableDefinition {
            default_value: var_def.default_value.as_ref()
                .map(|value| Box::new(self.value(Some(var_def.position), value))),
            directives: vec![],
            name: var_def.name.clone(),
            var_type: Box::new(self.type_ref(var_def.position, &var_def.var_type)),
        }))
    }

    fn selection_set(&self, sel_set: &gql::SelectionSet<'_, String>) -> Node {
        self.at(sel_set.span.0, NodeKind::SelectionSet(ast::SelectionSet {
            selections: sel_set.items.iter()
                .map(|selection| self.selection(selection))
                .collect(),
        }))
    }

    fn selection(&self, selection: &gql::Selection<'_, String>) -> Node {
        match selection {
            gql::Selection::Field(field) => self.at(
                field.position,
                NodeKind::Field(ast::Field {
                    alias: field.alias.clone(),
                    arguments: self.arguments(field.position, &field.arguments),
                    directives: self.directives(&field.directives),
                    name: field.name.clone(),
                    selection_set:
                        if field.selection_set.items.is_empty() {
                            None
                        } else {
                            Some(Box::new(self.selection_set(&field.selection_set)))
                        },
                }),
            ),

            gql::Selection::FragmentSpread(spread) => self.at(
                spread.position,
                NodeKind::FragmentSpread(ast::FragmentSpread {
                    directives: self.directives(&spread.directives),
                    fragment_name: spread.fragment_name.clone(),
                }),
            ),

            gql::Selection::InlineFragment(inline_frag) => self.at(
                inline_frag.position,
                NodeKind::InlineFragment(ast::InlineFragment {
                    directives: self.directives(&inline_frag.directives),
                    selection_set: Box::new(self.selection_set(&inline_frag.selection_set)),
                    type_condition: inline_frag.type_condition.as_ref()
                        .map(|type_cond| Box::new(
                            self.type_condition(inline_frag.position, type_cond),
                        )),
                }),
            ),
        }
    }

    fn type_condition(
        &self,
        pos: graphql_parser::Pos,
        type_cond: &gql::TypeCondition<'_, String>,
    ) -> Node {
        let gql::TypeCondition::On(type_name) = type_cond;
        self.located(Some(pos), Node::type_name(type_name))
    }

    fn directives(&self, directives: &[gql::Directive<'_, String>]) -> Vec<Node> {
        directives.iter()
            .map(|directive| self.at(
                directive.position,
                NodeKind::Directive(ast::Directive {
                    arguments: self.arguments(directive.position, &directive.arguments),
                    name: directive.name.clone(),
                }),
            ))
            .collect()
    }

    fn arguments(
        &self,
        pos: graphql_parser::Pos,
        arguments: &[(String, gql::Value<'_, String>)],
    ) -> Vec<Node> {
        arguments.iter()
            .map(|(name, value)| self.located(
                Some(pos),
                Node::argument(name, self.value(Some(pos), value)),
            ))
            .collect()
    }

    fn type_ref(&self, pos: graphql_parser::Pos, type_: &gql::Type<'_, String>) -> Node {
        let node = match type_ {
            gql::Type::NamedType(name) => Node::type_name(name),
            gql::Type::ListType(inner) => Node::list_type(self.type_ref(pos, inner)),
            // graphql_parser never nests NonNullType directly inside
            // NonNullType.
            gql::Type::NonNullType(inner) => Node::new(
                NodeKind::NonNullType(ast::NonNullType {
                    inner: Box::new(self.type_ref(pos, inner)),
                }),
            ),
        };
        self.located(Some(pos), node)
    }

    fn value(&self, pos: Option<graphql_parser::Pos>, value: &gql::Value<'_, String>) -> Node {
        let node = match value {
            gql::Value::Variable(name) => Node::variable_reference(name),
            // graphql_parser stores every int literal as an i64.
            gql::Value::Int(num) => Node::int_value(num.as_i64().unwrap_or_default()),
            gql::Value::Float(float) => Node::float_value(*float),
            gql::Value::String(string) => Node::string_value(string),
            gql::Value::Boolean(boolean) => Node::boolean_value(*boolean),
            gql::Value::Null => Node::null_value(),
            gql::Value::Enum(name) => Node::enum_value(name),
            gql::Value::List(values) => Node::list_value(
                values.iter().map(|value| self.value(pos, value)).collect(),
            ),
            gql::Value::Object(fields) => Node::new(NodeKind::ObjectValue(ast::ObjectValue {
                fields: fields.iter()
                    .map(|(name, value)| self.located(
                        pos,
                        Node::object_field(name, self.value(pos, value)),
                    ))
                    .collect(),
            })),
        };
        self.located(pos, node)
    }
}
