#[allow(clippy::module_inception)]
mod schema;
pub(crate) mod schema_builder;
mod type_validation_error;

pub use schema::DirectiveUsageError;
pub use schema::Schema;
pub use schema_builder::SchemaBuilder;
pub use schema_builder::SchemaBuildError;
pub use type_validation_error::TypeValidationError;
