//! A GraphQL language engine.
//!
//! The engine is made of a handful of layers, leaf-first:
//!
//! - [`ast`]: an immutable, tagged-union syntax tree for executable GraphQL
//!   documents.
//! - [`traverser`]: a generic depth-first tree/graph walker plus a typed
//!   [`NodeVisitor`](traverser::NodeVisitor) for [`ast::Node`] trees.
//! - [`types`] and [`schema`]: an in-memory schema type system where types
//!   reference each other by name through the [`schema::Schema`] registry.
//! - [`validation`]: a registry of independent rules run in a single
//!   traversal of a document.
//! - [`execution`] and [`instrumentation`]: resolves an operation against a
//!   schema with pluggable data fetchers, with every phase wrapped by an
//!   instrumentation chain.
//! - [`reactive`]: a lock-free mutual-exclusion executor used to serialize
//!   asynchronous field completions.

pub mod ast;
pub mod execution;
pub mod instrumentation;
pub mod loc;
mod named_ref;
pub mod reactive;
pub mod schema;
pub mod traverser;
pub mod types;
pub mod validation;
mod value;
pub mod wiring;

pub use execution::GraphQL;
pub use named_ref::DerefByName;
pub use named_ref::DerefByNameError;
pub use named_ref::NamedRef;
pub use value::Value;

#[cfg(test)]
mod test_utils;
