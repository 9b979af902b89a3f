use crate::execution::DataFetcher;
use crate::execution::TypeResolver;
use crate::types::Coercing;
use crate::wiring::FieldWiringEnvironment;
use crate::wiring::InterfaceWiringEnvironment;
use crate::wiring::ScalarWiringEnvironment;
use crate::wiring::UnionWiringEnvironment;
use std::sync::Arc;

/// Supplies wiring for schema elements that a
/// [`RuntimeWiring`](crate::wiring::RuntimeWiring) has no explicit entry for.
///
/// Each `get_*` method is only ever called after its `provides_*` counterpart
/// returned `true` for the same environment.
pub trait WiringFactory: Send + Sync {
    fn provides_scalar(&self, env: &ScalarWiringEnvironment<'_>) -> bool;
    fn get_scalar(&self, env: &ScalarWiringEnvironment<'_>) -> Arc<dyn Coercing>;

    fn provides_type_resolver_for_interface(
        &self,
        env: &InterfaceWiringEnvironment<'_>,
    ) -> bool;
    fn get_type_resolver_for_interface(
        &self,
        env: &InterfaceWiringEnvironment<'_>,
    ) -> Arc<dyn TypeResolver>;

    fn provides_type_resolver_for_union(&self, env: &UnionWiringEnvironment<'_>) -> bool;
    fn get_type_resolver_for_union(
        &self,
        env: &UnionWiringEnvironment<'_>,
    ) -> Arc<dyn TypeResolver>;

    fn provides_data_fetcher(&self, env: &FieldWiringEnvironment<'_>) -> bool;
    fn get_data_fetcher(&self, env: &FieldWiringEnvironment<'_>) -> Arc<dyn DataFetcher>;

    /// The fallback for fields that neither the
    /// [`RuntimeWiring`](crate::wiring::RuntimeWiring) nor
    /// [`WiringFactory::provides_data_fetcher()`] cover. `None` defers to the
    /// wiring's own default.
    fn default_data_fetcher(
        &self,
        _env: &FieldWiringEnvironment<'_>,
    ) -> Option<Arc<dyn DataFetcher>> {
        None
    }
}
