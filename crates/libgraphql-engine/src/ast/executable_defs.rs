use crate::ast::Node;

/// The root of an executable document.
#[derive(Clone, Debug, PartialEq)]
pub struct Document {
    /// [`OperationDefinition`] and [`FragmentDefinition`] nodes, in source
    /// order.
    pub definitions: Vec<Node>,
}
impl Document {
    pub fn operations(&self) -> impl Iterator<Item = (&Node, &OperationDefinition)> {
        self.definitions.iter().filter_map(|def| {
            def.as_operation_definition().map(|op| (def, op))
        })
    }

    pub fn fragments(&self) -> impl Iterator<Item = (&Node, &FragmentDefinition)> {
        self.definitions.iter().filter_map(|def| {
            def.as_fragment_definition().map(|frag| (def, frag))
        })
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum OperationType {
    Query,
    Mutation,
    Subscription,
}
impl OperationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Query => "query",
            Self::Mutation => "mutation",
            Self::Subscription => "subscription",
        }
    }
}
impl std::fmt::Display for OperationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct OperationDefinition {
    pub directives: Vec<Node>,
    pub name: Option<String>,
    pub operation: OperationType,
    pub selection_set: Box<Node>,
    pub variable_definitions: Vec<Node>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct VariableDefinition {
    pub default_value: Option<Box<Node>>,
    pub directives: Vec<Node>,
    pub name: String,
    /// A [`TypeName`](crate::ast::TypeName),
    /// [`ListType`](crate::ast::ListType), or
    /// [`NonNullType`](crate::ast::NonNullType) node.
    pub var_type: Box<Node>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FragmentDefinition {
    pub directives: Vec<Node>,
    pub name: String,
    pub selection_set: Box<Node>,
    pub type_condition: Box<Node>,
}
impl FragmentDefinition {
    pub fn type_condition_name(&self) -> &str {
        self.type_condition.as_type_name()
            .map(|type_name| type_name.name.as_str())
            .unwrap_or_default()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SelectionSet {
    /// [`Field`], [`FragmentSpread`], and [`InlineFragment`] nodes, in source
    /// order.
    pub selections: Vec<Node>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Field {
    pub alias: Option<String>,
    pub arguments: Vec<Node>,
    pub directives: Vec<Node>,
    pub name: String,
    pub selection_set: Option<Box<Node>>,
}
impl Field {
    /// The key this field's value is written under in a response: the alias
    /// when one is given, otherwise the field name.
    pub fn response_key(&self) -> &str {
        self.alias.as_deref().unwrap_or(self.name.as_str())
    }

    pub fn argument(&self, name: &str) -> Option<&Argument> {
        self.arguments.iter()
            .filter_map(|arg| arg.as_argument())
            .find(|arg| arg.name == name)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct FragmentSpread {
    pub directives: Vec<Node>,
    pub fragment_name: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct InlineFragment {
    pub directives: Vec<Node>,
    pub selection_set: Box<Node>,
    pub type_condition: Option<Box<Node>>,
}
impl InlineFragment {
    pub fn type_condition_name(&self) -> Option<&str> {
        self.type_condition.as_ref()
            .and_then(|node| node.as_type_name())
            .map(|type_name| type_name.name.as_str())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Argument {
    pub name: String,
    pub value: Box<Node>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Directive {
    pub arguments: Vec<Node>,
    pub name: String,
}
impl Directive {
    pub fn argument(&self, name: &str) -> Option<&Argument> {
        self.arguments.iter()
            .filter_map(|arg| arg.as_argument())
            .find(|arg| arg.name == name)
    }
}
