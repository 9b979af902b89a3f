//! Validation of executable documents against a [`Schema`](crate::schema::Schema).
//!
//! A [`Validator`] holds a list of [`RuleFactory`]s. For each document it
//! instantiates every rule and walks the document once with a
//! [`NodeTraverser`](crate::traverser::NodeTraverser), fanning each node out
//! to every rule. Rules share a [`ValidationContext`] carrying type
//! information for the current node, and report into a shared
//! [`ValidationErrorCollector`].

mod rule;
pub mod rules;
mod rules_visitor;
mod validation_context;
mod validation_error;
mod validator;

pub use rule::Rule;
pub use rule::RuleFactory;
pub(crate) use rules_visitor::RulesVisitor;
pub use validation_context::ValidationContext;
pub use validation_error::ValidationError;
pub use validation_error::ValidationErrorCollector;
pub use validation_error::ValidationErrorType;
pub use validator::ValidationState;
pub use validator::Validator;

#[cfg(test)]
mod tests;
