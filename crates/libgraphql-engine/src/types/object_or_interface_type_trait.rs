use crate::loc;
use crate::schema::Schema;
use crate::types::DeprecationState;
use crate::types::DirectiveAnnotation;
use crate::types::Field;
use crate::types::InterfaceType;
use indexmap::IndexMap;

/// Accessors shared by [`ObjectType`](crate::types::ObjectType) and
/// [`InterfaceType`](crate::types::InterfaceType).
pub trait ObjectOrInterfaceTypeTrait {
    fn def_location(&self) -> &loc::SchemaDefLocation;
    fn description(&self) -> Option<&str>;
    fn deprecation_state(&self) -> DeprecationState<'_>;
    fn directives(&self) -> &Vec<DirectiveAnnotation>;
    fn field(&self, name: &str) -> Option<&Field>;
    fn fields(&self) -> &IndexMap<String, Field>;
    fn interfaces<'schema>(&self, schema: &'schema Schema) -> Vec<&'schema InterfaceType>;
    fn interface_names(&self) -> Vec<&str>;
    fn name(&self) -> &str;
}
