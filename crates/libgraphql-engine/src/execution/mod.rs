//! Executes a validated operation against a [`Schema`](crate::schema::Schema).
//!
//! Fields resolve through the [`DataFetcher`]s of a
//! [`RuntimeWiring`](crate::wiring::RuntimeWiring), each of which may complete
//! immediately or later through a [`Deferred`]. Sibling fields of queries are
//! resolved concurrently while the root fields of a mutation run one after
//! another. A field error nulls the nearest nullable ancestor of the field
//! and is reported alongside the partial data.

mod data_fetcher;
mod deferred;
mod execution_context;
mod execution_error;
mod execution_input;
mod execution_result;
mod execution_strategy;
mod field_collector;
mod graphql;
mod type_resolver;

pub use data_fetcher::DataFetcher;
pub use data_fetcher::DataFetchingEnvironment;
pub use data_fetcher::FetchedValue;
pub use data_fetcher::FieldError;
pub use data_fetcher::PropertyDataFetcher;
pub use deferred::Deferred;
pub(crate) use execution_context::ExecutionContext;
pub(crate) use execution_context::coerce_argument_values;
pub use execution_error::ExecutionError;
pub use execution_input::ExecutionInput;
pub use execution_input::RequestSource;
pub use execution_result::ErrorKind;
pub use execution_result::ExecutionResult;
pub use execution_result::GraphQLError;
pub use execution_result::PathSegment;
pub use graphql::GraphQL;
pub use graphql::GraphQLBuilder;
pub use type_resolver::TypeResolutionEnvironment;
pub use type_resolver::TypeResolver;
pub use type_resolver::TypenameTypeResolver;

#[cfg(test)]
mod tests;
