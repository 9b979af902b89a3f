use crate::ast;
use crate::ast::AstError;
use crate::ast::Comment;
use crate::ast::IgnoredChars;
use crate::ast::NodeChildrenContainer;
use crate::ast::NodeKind;
use crate::ast::node_kind::Cardinality;
use crate::loc;
use indexmap::IndexMap;

type Result<T> = std::result::Result<T, AstError>;

/// An immutable element of an executable GraphQL document.
///
/// A [`Node`] exclusively owns its children (no sharing, no cycles), so
/// [`Node::deep_copy()`] always produces a structurally independent tree. The
/// only ways to derive a changed [`Node`] are [`Node::transform()`] and
/// [`Node::with_new_children()`], both of which return a new [`Node`].
///
/// `PartialEq` compares every attribute (including source locations and
/// comments). Use [`Node::is_equal_to()`] to compare semantic content only.
#[derive(Clone, Debug, PartialEq)]
pub struct Node {
    additional_data: IndexMap<String, String>,
    comments: Vec<Comment>,
    ignored_chars: IgnoredChars,
    kind: NodeKind,
    location: Option<loc::SourceLocation>,
}
impl Node {
    pub fn builder(kind: NodeKind) -> NodeBuilder {
        NodeBuilder::new(kind)
    }

    pub fn new(kind: NodeKind) -> Self {
        NodeBuilder::new(kind).build()
    }

    /// Insertion-ordered auxiliary string data attached to this [`Node`] by
    /// whatever produced it.
    pub fn additional_data(&self) -> &IndexMap<String, String> {
        &self.additional_data
    }

    pub fn comments(&self) -> &[Comment] {
        self.comments.as_slice()
    }

    pub fn ignored_chars(&self) -> &IgnoredChars {
        &self.ignored_chars
    }

    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    pub fn kind_name(&self) -> &'static str {
        self.kind.name()
    }

    pub fn location(&self) -> Option<&loc::SourceLocation> {
        self.location.as_ref()
    }

    /// A flat, ordered view of every direct child of this [`Node`].
    pub fn children(&self) -> Vec<&Node> {
        self.role_children()
            .into_iter()
            .flat_map(|(_role, nodes)| nodes)
            .collect()
    }

    /// The direct children of this [`Node`] keyed by child role.
    ///
    /// Only roles that currently hold at least one child are present.
    pub fn named_children(&self) -> NodeChildrenContainer {
        self.role_children()
            .into_iter()
            .filter(|(_role, nodes)| !nodes.is_empty())
            .fold(NodeChildrenContainer::new(), |container, (role, nodes)| {
                container.with_children(
                    role,
                    nodes.into_iter().cloned().collect(),
                )
            })
    }

    fn role_children(&self) -> Vec<(&'static str, Vec<&Node>)> {
        fn opt(node: &Option<Box<Node>>) -> Vec<&Node> {
            node.as_deref().into_iter().collect()
        }

        match &self.kind {
            NodeKind::Document(doc) => vec![
                ("definitions", doc.definitions.iter().collect()),
            ],
            NodeKind::OperationDefinition(op) => vec![
                ("variable_definitions", op.variable_definitions.iter().collect()),
                ("directives", op.directives.iter().collect()),
                ("selection_set", vec![op.selection_set.as_ref()]),
            ],
            NodeKind::VariableDefinition(var_def) => vec![
                ("type", vec![var_def.var_type.as_ref()]),
                ("default_value", opt(&var_def.default_value)),
                ("directives", var_def.directives.iter().collect()),
            ],
            NodeKind::FragmentDefinition(frag) => vec![
                ("type_condition", vec![frag.type_condition.as_ref()]),
                ("directives", frag.directives.iter().collect()),
                ("selection_set", vec![frag.selection_set.as_ref()]),
            ],
            NodeKind::SelectionSet(sel_set) => vec![
                ("selections", sel_set.selections.iter().collect()),
            ],
            NodeKind::Field(field) => vec![
                ("arguments", field.arguments.iter().collect()),
                ("directives", field.directives.iter().collect()),
                ("selection_set", opt(&field.selection_set)),
            ],
            NodeKind::FragmentSpread(spread) => vec![
                ("directives", spread.directives.iter().collect()),
            ],
            NodeKind::InlineFragment(inline_frag) => vec![
                ("type_condition", opt(&inline_frag.type_condition)),
                ("directives", inline_frag.directives.iter().collect()),
                ("selection_set", vec![inline_frag.selection_set.as_ref()]),
            ],
            NodeKind::Argument(arg) => vec![
                ("value", vec![arg.value.as_ref()]),
            ],
            NodeKind::ObjectField(obj_field) => vec![
                ("value", vec![obj_field.value.as_ref()]),
            ],
            NodeKind::Directive(directive) => vec![
                ("arguments", directive.arguments.iter().collect()),
            ],
            NodeKind::ListType(list_type) => vec![
                ("type", vec![list_type.inner.as_ref()]),
            ],
            NodeKind::NonNullType(non_null_type) => vec![
                ("type", vec![non_null_type.inner.as_ref()]),
            ],
            NodeKind::ListValue(list) => vec![
                ("values", list.values.iter().collect()),
            ],
            NodeKind::ObjectValue(obj) => vec![
                ("object_fields", obj.fields.iter().collect()),
            ],
            NodeKind::TypeName(_)
                | NodeKind::NullValue(_)
                | NodeKind::IntValue(_)
                | NodeKind::FloatValue(_)
                | NodeKind::StringValue(_)
                | NodeKind::BooleanValue(_)
                | NodeKind::EnumValue(_)
                | NodeKind::VariableReference(_) => vec![],
        }
    }

    /// Returns a copy of this [`Node`] whose children are exactly those held
    /// by `new_children`. Roles absent from `new_children` end up empty.
    ///
    /// Fails if `new_children` holds a role this node's kind does not have,
    /// more than one node for a single-child role, a node of the wrong kind
    /// for its role, or nothing for a required role. Leaf kinds (e.g.
    /// [`NodeKind::NullValue`]) have no roles at all and so reject any
    /// non-empty container.
    pub fn with_new_children(
        &self,
        mut new_children: NodeChildrenContainer,
    ) -> Result<Node> {
        let node_kind = self.kind.name();
        let roles = self.kind.child_roles();
        for (role_name, nodes) in new_children.entries() {
            if nodes.is_empty() && roles.is_empty() {
                continue;
            }

            let role = roles.iter()
                .find(|role| role.name == role_name)
                .ok_or_else(|| AstError::UnexpectedChildRole {
                    node_kind,
                    role: role_name.to_string(),
                })?;

            if role.cardinality != Cardinality::Many && nodes.len() > 1 {
                return Err(AstError::TooManyChildren {
                    count: nodes.len(),
                    node_kind,
                    role: role.name,
                });
            }

            if let Some(bad_node) = nodes.iter().find(|node| !(role.accepts)(&node.kind)) {
                return Err(AstError::UnexpectedChildKind {
                    child_kind: bad_node.kind_name(),
                    node_kind,
                    role: role.name,
                });
            }
        }

        let children = &mut new_children;
        let kind = match &self.kind {
            NodeKind::Document(_) => NodeKind::Document(ast::Document {
                definitions: children.take("definitions"),
            }),
            NodeKind::OperationDefinition(op) =>
                NodeKind::OperationDefinition(ast::OperationDefinition {
                    directives: children.take("directives"),
                    name: op.name.clone(),
                    operation: op.operation,
                    selection_set: take_required(children, node_kind, "selection_set")?,
                    variable_definitions: children.take("variable_definitions"),
                }),
            NodeKind::VariableDefinition(var_def) =>
                NodeKind::VariableDefinition(ast::VariableDefinition {
                    default_value: children.take_one("default_value"),
                    directives: children.take("directives"),
                    name: var_def.name.clone(),
                    var_type: take_required(children, node_kind, "type")?,
                }),
            NodeKind::FragmentDefinition(frag) =>
                NodeKind::FragmentDefinition(ast::FragmentDefinition {
                    directives: children.take("directives"),
                    name: frag.name.clone(),
                    selection_set: take_required(children, node_kind, "selection_set")?,
                    type_condition: take_required(children, node_kind, "type_condition")?,
                }),
            NodeKind::SelectionSet(_) => NodeKind::SelectionSet(ast::SelectionSet {
                selections: children.take("selections"),
            }),
            NodeKind::Field(field) => NodeKind::Field(ast::Field {
                alias: field.alias.clone(),
                arguments: children.take("arguments"),
                directives: children.take("directives"),
                name: field.name.clone(),
                selection_set: children.take_one("selection_set"),
            }),
            NodeKind::FragmentSpread(spread) =>
                NodeKind::FragmentSpread(ast::FragmentSpread {
                    directives: children.take("directives"),
                    fragment_name: spread.fragment_name.clone(),
                }),
            NodeKind::InlineFragment(_) =>
                NodeKind::InlineFragment(ast::InlineFragment {
                    directives: children.take("directives"),
                    selection_set: take_required(children, node_kind, "selection_set")?,
                    type_condition: children.take_one("type_condition"),
                }),
            NodeKind::Argument(arg) => NodeKind::Argument(ast::Argument {
                name: arg.name.clone(),
                value: take_required(children, node_kind, "value")?,
            }),
            NodeKind::ObjectField(obj_field) =>
                NodeKind::ObjectField(ast::ObjectField {
                    name: obj_field.name.clone(),
                    value: take_required(children, node_kind, "value")?,
                }),
            NodeKind::Directive(directive) => NodeKind::Directive(ast::Directive {
                arguments: children.take("arguments"),
                name: directive.name.clone(),
            }),
            NodeKind::ListType(_) => NodeKind::ListType(ast::ListType {
                inner: take_required(children, node_kind, "type")?,
            }),
            NodeKind::NonNullType(_) => NodeKind::NonNullType(ast::NonNullType {
                inner: take_required(children, node_kind, "type")?,
            }),
            NodeKind::ListValue(_) => NodeKind::ListValue(ast::ListValue {
                values: children.take("values"),
            }),
            NodeKind::ObjectValue(_) => NodeKind::ObjectValue(ast::ObjectValue {
                fields: children.take("object_fields"),
            }),
            leaf @ (NodeKind::TypeName(_)
                | NodeKind::NullValue(_)
                | NodeKind::IntValue(_)
                | NodeKind::FloatValue(_)
                | NodeKind::StringValue(_)
                | NodeKind::BooleanValue(_)
                | NodeKind::EnumValue(_)
                | NodeKind::VariableReference(_)) => leaf.clone(),
        };

        Ok(Node {
            additional_data: self.additional_data.clone(),
            comments: self.comments.clone(),
            ignored_chars: self.ignored_chars.clone(),
            kind,
            location: self.location.clone(),
        })
    }

    /// Copies this [`Node`] into a fresh [`NodeBuilder`], applies
    /// `transformer` to it, and builds the result. `self` is left unchanged.
    pub fn transform(
        &self,
        transformer: impl FnOnce(NodeBuilder) -> NodeBuilder,
    ) -> Node {
        transformer(self.to_builder()).build()
    }

    pub fn to_builder(&self) -> NodeBuilder {
        NodeBuilder {
            additional_data: self.additional_data.clone(),
            comments: self.comments.clone(),
            ignored_chars: self.ignored_chars.clone(),
            kind: self.kind.clone(),
            location: self.location.clone(),
        }
    }

    /// Returns a structurally independent copy of this entire subtree.
    pub fn deep_copy(&self) -> Node {
        self.clone()
    }

    /// Compares the semantic content of two trees: kinds, names, literal
    /// values, operation types, and (recursively) children. Source
    /// locations, comments, ignored characters, and additional data are not
    /// compared.
    pub fn is_equal_to(&self, other: &Node) -> bool {
        if !self.has_equal_attributes(other) {
            return false;
        }
        let self_children = self.children();
        let other_children = other.children();
        self_children.len() == other_children.len()
            && self_children.iter()
                .zip(other_children.iter())
                .all(|(a, b)| a.is_equal_to(b))
    }

    fn has_equal_attributes(&self, other: &Node) -> bool {
        use NodeKind as K;
        match (&self.kind, &other.kind) {
            (K::Document(_), K::Document(_))
                | (K::SelectionSet(_), K::SelectionSet(_))
                | (K::InlineFragment(_), K::InlineFragment(_))
                | (K::ListType(_), K::ListType(_))
                | (K::NonNullType(_), K::NonNullType(_))
                | (K::NullValue(_), K::NullValue(_))
                | (K::ListValue(_), K::ListValue(_))
                | (K::ObjectValue(_), K::ObjectValue(_)) => true,
            (K::OperationDefinition(a), K::OperationDefinition(b)) =>
                a.operation == b.operation && a.name == b.name,
            (K::VariableDefinition(a), K::VariableDefinition(b)) => a.name == b.name,
            (K::FragmentDefinition(a), K::FragmentDefinition(b)) => a.name == b.name,
            (K::Field(a), K::Field(b)) => a.alias == b.alias && a.name == b.name,
            (K::FragmentSpread(a), K::FragmentSpread(b)) =>
                a.fragment_name == b.fragment_name,
            (K::Argument(a), K::Argument(b)) => a.name == b.name,
            (K::Directive(a), K::Directive(b)) => a.name == b.name,
            (K::TypeName(a), K::TypeName(b)) => a.name == b.name,
            (K::IntValue(a), K::IntValue(b)) => a.value == b.value,
            (K::FloatValue(a), K::FloatValue(b)) => a.value == b.value,
            (K::StringValue(a), K::StringValue(b)) => a.value == b.value,
            (K::BooleanValue(a), K::BooleanValue(b)) => a.value == b.value,
            (K::EnumValue(a), K::EnumValue(b)) => a.name == b.name,
            (K::ObjectField(a), K::ObjectField(b)) => a.name == b.name,
            (K::VariableReference(a), K::VariableReference(b)) => a.name == b.name,
            _ => false,
        }
    }

    // Constructors

    pub fn document(definitions: Vec<Node>) -> Self {
        Self::new(NodeKind::Document(ast::Document { definitions }))
    }

    pub fn operation_definition(
        operation: ast::OperationType,
        name: Option<&str>,
        variable_definitions: Vec<Node>,
        selection_set: Node,
    ) -> Self {
        Self::new(NodeKind::OperationDefinition(ast::OperationDefinition {
            directives: vec![],
            name: name.map(|name| name.to_string()),
            operation,
            selection_set: Box::new(selection_set),
            variable_definitions,
        }))
    }

    pub fn variable_definition(
        name: &str,
        var_type: Node,
        default_value: Option<Node>,
    ) -> Self {
        Self::new(NodeKind::VariableDefinition(ast::VariableDefinition {
            default_value: default_value.map(Box::new),
            directives: vec![],
            name: name.to_string(),
            var_type: Box::new(var_type),
        }))
    }

    pub fn fragment_definition(
        name: &str,
        type_condition: &str,
        selection_set: Node,
    ) -> Self {
        Self::new(NodeKind::FragmentDefinition(ast::FragmentDefinition {
            directives: vec![],
            name: name.to_string(),
            selection_set: Box::new(selection_set),
            type_condition: Box::new(Self::type_name(type_condition)),
        }))
    }

    pub fn selection_set(selections: Vec<Node>) -> Self {
        Self::new(NodeKind::SelectionSet(ast::SelectionSet { selections }))
    }

    pub fn field(
        name: &str,
        arguments: Vec<Node>,
        selection_set: Option<Node>,
    ) -> Self {
        Self::new(NodeKind::Field(ast::Field {
            alias: None,
            arguments,
            directives: vec![],
            name: name.to_string(),
            selection_set: selection_set.map(Box::new),
        }))
    }

    pub fn fragment_spread(fragment_name: &str) -> Self {
        Self::new(NodeKind::FragmentSpread(ast::FragmentSpread {
            directives: vec![],
            fragment_name: fragment_name.to_string(),
        }))
    }

    pub fn inline_fragment(
        type_condition: Option<&str>,
        selection_set: Node,
    ) -> Self {
        Self::new(NodeKind::InlineFragment(ast::InlineFragment {
            directives: vec![],
            selection_set: Box::new(selection_set),
            type_condition: type_condition.map(|name| Box::new(Self::type_name(name))),
        }))
    }

    pub fn argument(name: &str, value: Node) -> Self {
        Self::new(NodeKind::Argument(ast::Argument {
            name: name.to_string(),
            value: Box::new(value),
        }))
    }

    pub fn directive(name: &str, arguments: Vec<Node>) -> Self {
        Self::new(NodeKind::Directive(ast::Directive {
            arguments,
            name: name.to_string(),
        }))
    }

    pub fn type_name(name: &str) -> Self {
        Self::new(NodeKind::TypeName(ast::TypeName {
            name: name.to_string(),
        }))
    }

    pub fn list_type(inner: Node) -> Self {
        Self::new(NodeKind::ListType(ast::ListType {
            inner: Box::new(inner),
        }))
    }

    /// Fails if `inner` is itself a [`NodeKind::NonNullType`] (or not a type
    /// reference at all).
    pub fn non_null_type(inner: Node) -> Result<Self> {
        if !matches!(inner.kind, NodeKind::TypeName(_) | NodeKind::ListType(_)) {
            return Err(AstError::UnexpectedChildKind {
                child_kind: inner.kind_name(),
                node_kind: "NonNullType",
                role: "type",
            });
        }
        Ok(Self::new(NodeKind::NonNullType(ast::NonNullType {
            inner: Box::new(inner),
        })))
    }

    pub fn null_value() -> Self {
        Self::new(NodeKind::NullValue(ast::NullValue))
    }

    pub fn int_value(value: i64) -> Self {
        Self::new(NodeKind::IntValue(ast::IntValue { value }))
    }

    pub fn float_value(value: f64) -> Self {
        Self::new(NodeKind::FloatValue(ast::FloatValue { value }))
    }

    pub fn string_value(value: &str) -> Self {
        Self::new(NodeKind::StringValue(ast::StringValue {
            value: value.to_string(),
        }))
    }

    pub fn boolean_value(value: bool) -> Self {
        Self::new(NodeKind::BooleanValue(ast::BooleanValue { value }))
    }

    pub fn enum_value(name: &str) -> Self {
        Self::new(NodeKind::EnumValue(ast::EnumValue {
            name: name.to_string(),
        }))
    }

    pub fn list_value(values: Vec<Node>) -> Self {
        Self::new(NodeKind::ListValue(ast::ListValue { values }))
    }

    pub fn object_value<'a>(
        fields: impl IntoIterator<Item = (&'a str, Node)>,
    ) -> Self {
        Self::new(NodeKind::ObjectValue(ast::ObjectValue {
            fields: fields.into_iter()
                .map(|(name, value)| Self::object_field(name, value))
                .collect(),
        }))
    }

    pub fn object_field(name: &str, value: Node) -> Self {
        Self::new(NodeKind::ObjectField(ast::ObjectField {
            name: name.to_string(),
            value: Box::new(value),
        }))
    }

    pub fn variable_reference(name: &str) -> Self {
        Self::new(NodeKind::VariableReference(ast::VariableReference {
            name: name.to_string(),
        }))
    }

    // Accessors

    pub fn as_document(&self) -> Option<&ast::Document> {
        if let NodeKind::Document(doc) = &self.kind { Some(doc) } else { None }
    }

    pub fn as_operation_definition(&self) -> Option<&ast::OperationDefinition> {
        if let NodeKind::OperationDefinition(op) = &self.kind { Some(op) } else { None }
    }

    pub fn as_variable_definition(&self) -> Option<&ast::VariableDefinition> {
        if let NodeKind::VariableDefinition(var_def) = &self.kind { Some(var_def) } else { None }
    }

    pub fn as_fragment_definition(&self) -> Option<&ast::FragmentDefinition> {
        if let NodeKind::FragmentDefinition(frag) = &self.kind { Some(frag) } else { None }
    }

    pub fn as_selection_set(&self) -> Option<&ast::SelectionSet> {
        if let NodeKind::SelectionSet(sel_set) = &self.kind { Some(sel_set) } else { None }
    }

    pub fn as_field(&self) -> Option<&ast::Field> {
        if let NodeKind::Field(field) = &self.kind { Some(field) } else { None }
    }

    pub fn as_fragment_spread(&self) -> Option<&ast::FragmentSpread> {
        if let NodeKind::FragmentSpread(spread) = &self.kind { Some(spread) } else { None }
    }

    pub fn as_inline_fragment(&self) -> Option<&ast::InlineFragment> {
        if let NodeKind::InlineFragment(frag) = &self.kind { Some(frag) } else { None }
    }

    pub fn as_argument(&self) -> Option<&ast::Argument> {
        if let NodeKind::Argument(arg) = &self.kind { Some(arg) } else { None }
    }

    pub fn as_directive(&self) -> Option<&ast::Directive> {
        if let NodeKind::Directive(directive) = &self.kind { Some(directive) } else { None }
    }

    pub fn as_type_name(&self) -> Option<&ast::TypeName> {
        if let NodeKind::TypeName(type_name) = &self.kind { Some(type_name) } else { None }
    }

    pub fn as_object_field(&self) -> Option<&ast::ObjectField> {
        if let NodeKind::ObjectField(field) = &self.kind { Some(field) } else { None }
    }

    pub fn as_variable_reference(&self) -> Option<&ast::VariableReference> {
        if let NodeKind::VariableReference(var_ref) = &self.kind { Some(var_ref) } else { None }
    }
}

/// Captures everything needed to construct a [`Node`].
#[derive(Clone, Debug)]
pub struct NodeBuilder {
    additional_data: IndexMap<String, String>,
    comments: Vec<Comment>,
    ignored_chars: IgnoredChars,
    kind: NodeKind,
    location: Option<loc::SourceLocation>,
}
impl NodeBuilder {
    pub fn new(kind: NodeKind) -> Self {
        Self {
            additional_data: IndexMap::new(),
            comments: vec![],
            ignored_chars: IgnoredChars::default(),
            kind,
            location: None,
        }
    }

    pub fn additional_data(
        mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.additional_data.insert(key.into(), value.into());
        self
    }

    pub fn build(self) -> Node {
        Node {
            additional_data: self.additional_data,
            comments: self.comments,
            ignored_chars: self.ignored_chars,
            kind: self.kind,
            location: self.location,
        }
    }

    pub fn comment(mut self, comment: Comment) -> Self {
        self.comments.push(comment);
        self
    }

    pub fn comments(mut self, comments: Vec<Comment>) -> Self {
        self.comments = comments;
        self
    }

    pub fn current_kind(&self) -> &NodeKind {
        &self.kind
    }

    pub fn ignored_chars(mut self, ignored_chars: IgnoredChars) -> Self {
        self.ignored_chars = ignored_chars;
        self
    }

    pub fn kind(mut self, kind: NodeKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn location(mut self, location: Option<loc::SourceLocation>) -> Self {
        self.location = location;
        self
    }
}

fn take_required(
    children: &mut NodeChildrenContainer,
    node_kind: &'static str,
    role: &'static str,
) -> Result<Box<Node>> {
    children.take_one(role).ok_or(AstError::MissingChild { node_kind, role })
}
