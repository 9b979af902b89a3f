//! Connects a [`Schema`](crate::schema::Schema) to the code that resolves it:
//! data fetchers per field, type resolvers per abstract type, and coercion per
//! custom scalar.

mod noop_wiring_factory;
mod runtime_wiring;
mod wiring_environments;
mod wiring_factory;

pub use noop_wiring_factory::NoopWiringFactory;
pub use runtime_wiring::RuntimeWiring;
pub use runtime_wiring::RuntimeWiringBuilder;
pub use wiring_environments::FieldWiringEnvironment;
pub use wiring_environments::InterfaceWiringEnvironment;
pub use wiring_environments::ScalarWiringEnvironment;
pub use wiring_environments::UnionWiringEnvironment;
pub use wiring_factory::WiringFactory;

#[cfg(test)]
mod tests;
