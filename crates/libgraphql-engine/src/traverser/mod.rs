//! Depth-first traversal of trees and graphs.
//!
//! [`Traverser`] walks anything given a function that lists a value's
//! children; [`NodeTraverser`] specializes it for [`ast::Node`](crate::ast::Node)
//! trees with one typed [`NodeVisitor`] callback per node kind; and
//! [`SchemaTraverser`] walks the (possibly cyclic) graph of named types in a
//! [`Schema`](crate::schema::Schema).

mod node_traverser;
mod node_visitor;
mod schema_traverser;
mod traversal_control;
mod traverser;
mod traverser_context;

pub use node_traverser::NodeTraverser;
pub use node_visitor::NodeContext;
pub use node_visitor::NodeVisitor;
pub use node_visitor::VisitResult;
pub use schema_traverser::SchemaTraverser;
pub use traversal_control::TraversalControl;
pub use traverser::Traverser;
pub use traverser::TraverserResult;
pub use traverser::TraverserVisitor;
pub use traverser_context::TraverserContext;

#[cfg(test)]
mod tests;
