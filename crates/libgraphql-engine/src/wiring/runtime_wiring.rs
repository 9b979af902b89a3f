use crate::execution::DataFetcher;
use crate::execution::PropertyDataFetcher;
use crate::execution::TypeResolver;
use crate::execution::TypenameTypeResolver;
use crate::types::Coercing;
use crate::types::Field;
use crate::types::GraphQLType;
use crate::types::ObjectType;
use crate::types::ScalarType;
use crate::wiring::FieldWiringEnvironment;
use crate::wiring::InterfaceWiringEnvironment;
use crate::wiring::NoopWiringFactory;
use crate::wiring::ScalarWiringEnvironment;
use crate::wiring::UnionWiringEnvironment;
use crate::wiring::WiringFactory;
use indexmap::IndexMap;
use std::sync::Arc;

/// The resolvers, type resolvers, and scalar coercions used to execute
/// operations against one [`Schema`](crate::schema::Schema).
///
/// Lookups try explicit registrations first, then the [`WiringFactory`], then
/// a default: [`PropertyDataFetcher`] for fields, [`TypenameTypeResolver`] for
/// abstract types, and the schema's own coercion for scalars.
pub struct RuntimeWiring {
    data_fetchers: IndexMap<String, IndexMap<String, Arc<dyn DataFetcher>>>,
    default_data_fetcher: Arc<dyn DataFetcher>,
    scalars: IndexMap<String, Arc<dyn Coercing>>,
    type_resolvers: IndexMap<String, Arc<dyn TypeResolver>>,
    wiring_factory: Arc<dyn WiringFactory>,
}
impl RuntimeWiring {
    pub fn builder() -> RuntimeWiringBuilder {
        RuntimeWiringBuilder::new()
    }

    pub fn new() -> Self {
        Self::builder().build()
    }

    pub(crate) fn data_fetcher(
        &self,
        parent_type: &ObjectType,
        field_definition: &Field,
    ) -> Arc<dyn DataFetcher> {
        if let Some(fetcher) = self.data_fetchers
            .get(parent_type.name())
            .and_then(|fields| fields.get(field_definition.name())) {
            return Arc::clone(fetcher);
        }

        let env = FieldWiringEnvironment {
            field_definition,
            parent_type,
        };
        if self.wiring_factory.provides_data_fetcher(&env) {
            return self.wiring_factory.get_data_fetcher(&env);
        }
        self.wiring_factory
            .default_data_fetcher(&env)
            .unwrap_or_else(|| Arc::clone(&self.default_data_fetcher))
    }

    pub(crate) fn scalar_coercing(
        &self,
        scalar_type: &ScalarType,
    ) -> Option<Arc<dyn Coercing>> {
        if let Some(coercing) = self.scalars.get(scalar_type.name()) {
            return Some(Arc::clone(coercing));
        }

        let env = ScalarWiringEnvironment { scalar_type };
        if self.wiring_factory.provides_scalar(&env) {
            Some(self.wiring_factory.get_scalar(&env))
        } else {
            None
        }
    }

    pub(crate) fn type_resolver(&self, abstract_type: &GraphQLType) -> Arc<dyn TypeResolver> {
        if let Some(resolver) = self.type_resolvers.get(abstract_type.name()) {
            return Arc::clone(resolver);
        }

        match abstract_type {
            GraphQLType::Interface(interface_type) => {
                let env = InterfaceWiringEnvironment { interface_type };
                if self.wiring_factory.provides_type_resolver_for_interface(&env) {
                    return self.wiring_factory.get_type_resolver_for_interface(&env);
                }
            },
            GraphQLType::Union(union_type) => {
                let env = UnionWiringEnvironment { union_type };
                if self.wiring_factory.provides_type_resolver_for_union(&env) {
                    return self.wiring_factory.get_type_resolver_for_union(&env);
                }
            },
            _ => (),
        }
        Arc::new(TypenameTypeResolver)
    }
}
impl Default for RuntimeWiring {
    fn default() -> Self {
        Self::new()
    }
}
impl std::fmt::Debug for RuntimeWiring {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuntimeWiring")
            .field("data_fetchers", &self.data_fetchers.iter()
                .map(|(type_name, fields)| (type_name, fields.keys().collect::<Vec<_>>()))
                .collect::<Vec<_>>())
            .field("scalars", &self.scalars.keys().collect::<Vec<_>>())
            .field("type_resolvers", &self.type_resolvers.keys().collect::<Vec<_>>())
            .finish_non_exhaustive()
    }
}

pub struct RuntimeWiringBuilder {
    data_fetchers: IndexMap<String, IndexMap<String, Arc<dyn DataFetcher>>>,
    default_data_fetcher: Option<Arc<dyn DataFetcher>>,
    scalars: IndexMap<String, Arc<dyn Coercing>>,
    type_resolvers: IndexMap<String, Arc<dyn TypeResolver>>,
    wiring_factory: Option<Arc<dyn WiringFactory>>,
}
impl RuntimeWiringBuilder {
    pub fn build(self) -> RuntimeWiring {
        RuntimeWiring {
            data_fetchers: self.data_fetchers,
            default_data_fetcher: self.default_data_fetcher
                .unwrap_or_else(|| Arc::new(PropertyDataFetcher)),
            scalars: self.scalars,
            type_resolvers: self.type_resolvers,
            wiring_factory: self.wiring_factory
                .unwrap_or_else(|| Arc::new(NoopWiringFactory)),
        }
    }

    pub fn data_fetcher(
        mut self,
        type_name: &str,
        field_name: &str,
        fetcher: impl DataFetcher + 'static,
    ) -> Self {
        self.data_fetchers
            .entry(type_name.to_string())
            .or_default()
            .insert(field_name.to_string(), Arc::new(fetcher));
        self
    }

    pub fn default_data_fetcher(mut self, fetcher: impl DataFetcher + 'static) -> Self {
        self.default_data_fetcher = Some(Arc::new(fetcher));
        self
    }

    fn new() -> Self {
        Self {
            data_fetchers: IndexMap::new(),
            default_data_fetcher: None,
            scalars: IndexMap::new(),
            type_resolvers: IndexMap::new(),
            wiring_factory: None,
        }
    }

    pub fn scalar(mut self, scalar_name: &str, coercing: impl Coercing + 'static) -> Self {
        self.scalars.insert(scalar_name.to_string(), Arc::new(coercing));
        self
    }

    pub fn type_resolver(
        mut self,
        abstract_type_name: &str,
        resolver: impl TypeResolver + 'static,
    ) -> Self {
        self.type_resolvers.insert(abstract_type_name.to_string(), Arc::new(resolver));
        self
    }

    pub fn wiring_factory(mut self, factory: impl WiringFactory + 'static) -> Self {
        self.wiring_factory = Some(Arc::new(factory));
        self
    }
}
