use crate::schema::Schema;
use crate::types::GraphQLType;
use crate::Value;
use std::any::Any;

/// Picks the concrete object type of a value resolved for a field of interface
/// or union type.
///
/// Returns the name of an object type. The executor reports a field error when
/// no name is returned, or when the named type is not a possible type of the
/// abstract type.
pub trait TypeResolver: Send + Sync {
    fn resolve_type(&self, env: &TypeResolutionEnvironment<'_>) -> Option<String>;
}
impl<F> TypeResolver for F
where
    F: Fn(&TypeResolutionEnvironment<'_>) -> Option<String> + Send + Sync,
{
    fn resolve_type(&self, env: &TypeResolutionEnvironment<'_>) -> Option<String> {
        self(env)
    }
}

pub struct TypeResolutionEnvironment<'a> {
    pub(crate) abstract_type: &'a GraphQLType,
    pub(crate) context: &'a (dyn Any + Send + Sync),
    pub(crate) schema: &'a Schema,
    pub(crate) value: &'a Value,
}
impl<'a> TypeResolutionEnvironment<'a> {
    pub fn abstract_type(&self) -> &'a GraphQLType {
        self.abstract_type
    }

    pub fn context<T: Any>(&self) -> Option<&'a T> {
        self.context.downcast_ref::<T>()
    }

    pub fn schema(&self) -> &'a Schema {
        self.schema
    }

    pub fn value(&self) -> &'a Value {
        self.value
    }
}

/// Reads the type name from the value's own `__typename` entry.
#[derive(Clone, Copy, Debug, Default)]
pub struct TypenameTypeResolver;
impl TypeResolver for TypenameTypeResolver {
    fn resolve_type(&self, env: &TypeResolutionEnvironment<'_>) -> Option<String> {
        env.value()
            .as_object()?
            .get("__typename")?
            .as_str()
            .map(str::to_string)
    }
}
