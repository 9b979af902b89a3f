use crate::ast::Node;

#[derive(Clone, Debug, PartialEq)]
pub struct TypeName {
    pub name: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ListType {
    pub inner: Box<Node>,
}

/// Wraps a [`TypeName`] or [`ListType`] node. Never wraps another
/// [`NonNullType`].
#[derive(Clone, Debug, PartialEq)]
pub struct NonNullType {
    pub inner: Box<Node>,
}
