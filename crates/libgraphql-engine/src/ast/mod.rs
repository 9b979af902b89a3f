//! An immutable syntax tree for executable GraphQL documents.
//!
//! Every element of a document is a [`Node`]: one struct carrying the
//! metadata common to all elements (source location, comments, ignored
//! characters, auxiliary string data) plus a [`NodeKind`] tag whose payload
//! holds the element's own attributes and owned children.
//!
//! Nodes are never mutated in place. [`Node::transform()`] and
//! [`Node::with_new_children()`] return new nodes and leave the receiver
//! untouched.

mod ast_error;
mod comment;
mod executable_defs;
mod from_graphql_parser;
mod node;
mod node_children_container;
mod node_kind;
mod printer;
mod type_refs;
mod values;

pub use ast_error::AstError;
pub use comment::Comment;
pub use comment::IgnoredChar;
pub use comment::IgnoredCharKind;
pub use comment::IgnoredChars;
pub use executable_defs::Argument;
pub use executable_defs::Directive;
pub use executable_defs::Document;
pub use executable_defs::Field;
pub use executable_defs::FragmentDefinition;
pub use executable_defs::FragmentSpread;
pub use executable_defs::InlineFragment;
pub use executable_defs::OperationDefinition;
pub use executable_defs::OperationType;
pub use executable_defs::SelectionSet;
pub use executable_defs::VariableDefinition;
pub use from_graphql_parser::parse_document;
pub(crate) use from_graphql_parser::value_from_ast;
pub use node::Node;
pub use node::NodeBuilder;
pub use node_children_container::NodeChildrenContainer;
pub use node_kind::NodeKind;
pub use printer::print_type;
pub use printer::print_value;
pub use type_refs::ListType;
pub use type_refs::NonNullType;
pub use type_refs::TypeName;
pub use values::BooleanValue;
pub use values::EnumValue;
pub use values::FloatValue;
pub use values::IntValue;
pub use values::ListValue;
pub use values::NullValue;
pub use values::ObjectField;
pub use values::ObjectValue;
pub use values::StringValue;
pub use values::VariableReference;

#[cfg(test)]
mod tests;
