use crate::ast;

/// The variant tag of a [`Node`](crate::ast::Node) together with its
/// per-variant payload.
#[derive(Clone, Debug, PartialEq)]
pub enum NodeKind {
    Document(ast::Document),
    OperationDefinition(ast::OperationDefinition),
    VariableDefinition(ast::VariableDefinition),
    FragmentDefinition(ast::FragmentDefinition),
    SelectionSet(ast::SelectionSet),
    Field(ast::Field),
    FragmentSpread(ast::FragmentSpread),
    InlineFragment(ast::InlineFragment),
    Argument(ast::Argument),
    Directive(ast::Directive),
    TypeName(ast::TypeName),
    ListType(ast::ListType),
    NonNullType(ast::NonNullType),
    NullValue(ast::NullValue),
    IntValue(ast::IntValue),
    FloatValue(ast::FloatValue),
    StringValue(ast::StringValue),
    BooleanValue(ast::BooleanValue),
    EnumValue(ast::EnumValue),
    ListValue(ast::ListValue),
    ObjectValue(ast::ObjectValue),
    ObjectField(ast::ObjectField),
    VariableReference(ast::VariableReference),
}
impl NodeKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Document(_) => "Document",
            Self::OperationDefinition(_) => "OperationDefinition",
            Self::VariableDefinition(_) => "VariableDefinition",
            Self::FragmentDefinition(_) => "FragmentDefinition",
            Self::SelectionSet(_) => "SelectionSet",
            Self::Field(_) => "Field",
            Self::FragmentSpread(_) => "FragmentSpread",
            Self::InlineFragment(_) => "InlineFragment",
            Self::Argument(_) => "Argument",
            Self::Directive(_) => "Directive",
            Self::TypeName(_) => "TypeName",
            Self::ListType(_) => "ListType",
            Self::NonNullType(_) => "NonNullType",
            Self::NullValue(_) => "NullValue",
            Self::IntValue(_) => "IntValue",
            Self::FloatValue(_) => "FloatValue",
            Self::StringValue(_) => "StringValue",
            Self::BooleanValue(_) => "BooleanValue",
            Self::EnumValue(_) => "EnumValue",
            Self::ListValue(_) => "ListValue",
            Self::ObjectValue(_) => "ObjectValue",
            Self::ObjectField(_) => "ObjectField",
            Self::VariableReference(_) => "VariableReference",
        }
    }

    pub fn is_selection(&self) -> bool {
        matches!(
            self,
            Self::Field(_) | Self::FragmentSpread(_) | Self::InlineFragment(_),
        )
    }

    pub fn is_type_ref(&self) -> bool {
        matches!(
            self,
            Self::TypeName(_) | Self::ListType(_) | Self::NonNullType(_),
        )
    }

    pub fn is_value(&self) -> bool {
        matches!(
            self,
            Self::NullValue(_)
                | Self::IntValue(_)
                | Self::FloatValue(_)
                | Self::StringValue(_)
                | Self::BooleanValue(_)
                | Self::EnumValue(_)
                | Self::ListValue(_)
                | Self::ObjectValue(_)
                | Self::VariableReference(_)
        )
    }

    fn is_const_value(&self) -> bool {
        self.is_value() && !matches!(self, Self::VariableReference(_))
    }

    /// The child roles a node of this kind can hold, in the order its
    /// children are reported by [`Node::children()`](crate::ast::Node::children).
    pub(super) fn child_roles(&self) -> &'static [ChildRole] {
        match self {
            Self::Document(_) => DOCUMENT_ROLES,
            Self::OperationDefinition(_) => OPERATION_DEFINITION_ROLES,
            Self::VariableDefinition(_) => VARIABLE_DEFINITION_ROLES,
            Self::FragmentDefinition(_) => FRAGMENT_DEFINITION_ROLES,
            Self::SelectionSet(_) => SELECTION_SET_ROLES,
            Self::Field(_) => FIELD_ROLES,
            Self::FragmentSpread(_) => FRAGMENT_SPREAD_ROLES,
            Self::InlineFragment(_) => INLINE_FRAGMENT_ROLES,
            Self::Argument(_) | Self::ObjectField(_) => VALUE_HOLDER_ROLES,
            Self::Directive(_) => DIRECTIVE_ROLES,
            Self::ListType(_) => LIST_TYPE_ROLES,
            Self::NonNullType(_) => NON_NULL_TYPE_ROLES,
            Self::ListValue(_) => LIST_VALUE_ROLES,
            Self::ObjectValue(_) => OBJECT_VALUE_ROLES,
            Self::TypeName(_)
                | Self::NullValue(_)
                | Self::IntValue(_)
                | Self::FloatValue(_)
                | Self::StringValue(_)
                | Self::BooleanValue(_)
                | Self::EnumValue(_)
                | Self::VariableReference(_) => &[],
        }
    }
}

const DOCUMENT_ROLES: &[ChildRole] = &[
    ChildRole::many("definitions", is_definition),
];
const OPERATION_DEFINITION_ROLES: &[ChildRole] = &[
    ChildRole::many("variable_definitions", is_variable_definition),
    ChildRole::many("directives", is_directive),
    ChildRole::one("selection_set", is_selection_set),
];
const VARIABLE_DEFINITION_ROLES: &[ChildRole] = &[
    ChildRole::one("type", NodeKind::is_type_ref),
    ChildRole::optional("default_value", NodeKind::is_const_value),
    ChildRole::many("directives", is_directive),
];
const FRAGMENT_DEFINITION_ROLES: &[ChildRole] = &[
    ChildRole::one("type_condition", is_type_name),
    ChildRole::many("directives", is_directive),
    ChildRole::one("selection_set", is_selection_set),
];
const SELECTION_SET_ROLES: &[ChildRole] = &[
    ChildRole::many("selections", NodeKind::is_selection),
];
const FIELD_ROLES: &[ChildRole] = &[
    ChildRole::many("arguments", is_argument),
    ChildRole::many("directives", is_directive),
    ChildRole::optional("selection_set", is_selection_set),
];
const FRAGMENT_SPREAD_ROLES: &[ChildRole] = &[
    ChildRole::many("directives", is_directive),
];
const INLINE_FRAGMENT_ROLES: &[ChildRole] = &[
    ChildRole::optional("type_condition", is_type_name),
    ChildRole::many("directives", is_directive),
    ChildRole::one("selection_set", is_selection_set),
];
const VALUE_HOLDER_ROLES: &[ChildRole] = &[
    ChildRole::one("value", NodeKind::is_value),
];
const DIRECTIVE_ROLES: &[ChildRole] = &[
    ChildRole::many("arguments", is_argument),
];
const LIST_TYPE_ROLES: &[ChildRole] = &[
    ChildRole::one("type", NodeKind::is_type_ref),
];
const NON_NULL_TYPE_ROLES: &[ChildRole] = &[
    ChildRole::one("type", is_nullable_type_ref),
];
const LIST_VALUE_ROLES: &[ChildRole] = &[
    ChildRole::many("values", NodeKind::is_value),
];
const OBJECT_VALUE_ROLES: &[ChildRole] = &[
    ChildRole::many("object_fields", is_object_field),
];

fn is_argument(kind: &NodeKind) -> bool {
    matches!(kind, NodeKind::Argument(_))
}

fn is_definition(kind: &NodeKind) -> bool {
    matches!(
        kind,
        NodeKind::OperationDefinition(_) | NodeKind::FragmentDefinition(_),
    )
}

fn is_directive(kind: &NodeKind) -> bool {
    matches!(kind, NodeKind::Directive(_))
}

fn is_nullable_type_ref(kind: &NodeKind) -> bool {
    matches!(kind, NodeKind::TypeName(_) | NodeKind::ListType(_))
}

fn is_object_field(kind: &NodeKind) -> bool {
    matches!(kind, NodeKind::ObjectField(_))
}

fn is_selection_set(kind: &NodeKind) -> bool {
    matches!(kind, NodeKind::SelectionSet(_))
}

fn is_type_name(kind: &NodeKind) -> bool {
    matches!(kind, NodeKind::TypeName(_))
}

fn is_variable_definition(kind: &NodeKind) -> bool {
    matches!(kind, NodeKind::VariableDefinition(_))
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) enum Cardinality {
    Many,
    One,
    Optional,
}

pub(super) struct ChildRole {
    pub(super) accepts: fn(&NodeKind) -> bool,
    pub(super) cardinality: Cardinality,
    pub(super) name: &'static str,
}
impl ChildRole {
    const fn many(name: &'static str, accepts: fn(&NodeKind) -> bool) -> Self {
        Self { accepts, cardinality: Cardinality::Many, name }
    }

    const fn one(name: &'static str, accepts: fn(&NodeKind) -> bool) -> Self {
        Self { accepts, cardinality: Cardinality::One, name }
    }

    const fn optional(name: &'static str, accepts: fn(&NodeKind) -> bool) -> Self {
        Self { accepts, cardinality: Cardinality::Optional, name }
    }
}
