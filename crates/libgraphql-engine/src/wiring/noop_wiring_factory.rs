use crate::execution::DataFetcher;
use crate::execution::TypeResolver;
use crate::types::Coercing;
use crate::wiring::FieldWiringEnvironment;
use crate::wiring::InterfaceWiringEnvironment;
use crate::wiring::ScalarWiringEnvironment;
use crate::wiring::UnionWiringEnvironment;
use crate::wiring::WiringFactory;
use std::sync::Arc;

/// A [`WiringFactory`] that provides nothing.
///
/// Its `get_*` methods panic. Reaching one means a caller ignored a `false`
/// from the matching `provides_*` method, which is a bug in that caller.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopWiringFactory;
impl NoopWiringFactory {
    fn never_provided(what: &str) -> ! {
        panic!(
            "NoopWiringFactory was asked for a {what} after declaring that it \
            provides none. This is a bug in the caller."
        )
    }
}
impl WiringFactory for NoopWiringFactory {
    fn provides_scalar(&self, _env: &ScalarWiringEnvironment<'_>) -> bool {
        false
    }

    fn get_scalar(&self, _env: &ScalarWiringEnvironment<'_>) -> Arc<dyn Coercing> {
        Self::never_provided("scalar")
    }

    fn provides_type_resolver_for_interface(
        &self,
        _env: &InterfaceWiringEnvironment<'_>,
    ) -> bool {
        false
    }

    fn get_type_resolver_for_interface(
        &self,
        _env: &InterfaceWiringEnvironment<'_>,
    ) -> Arc<dyn TypeResolver> {
        Self::never_provided("interface type resolver")
    }

    fn provides_type_resolver_for_union(&self, _env: &UnionWiringEnvironment<'_>) -> bool {
        false
    }

    fn get_type_resolver_for_union(
        &self,
        _env: &UnionWiringEnvironment<'_>,
    ) -> Arc<dyn TypeResolver> {
        Self::never_provided("union type resolver")
    }

    fn provides_data_fetcher(&self, _env: &FieldWiringEnvironment<'_>) -> bool {
        false
    }

    fn get_data_fetcher(&self, _env: &FieldWiringEnvironment<'_>) -> Arc<dyn DataFetcher> {
        Self::never_provided("data fetcher")
    }
}
