use crate::loc;
use crate::schema::Schema;
use crate::types::DeprecationState;
use crate::types::DirectiveAnnotation;
use crate::types::Field;
use crate::types::InterfaceType;
use crate::types::ObjectOrInterfaceTypeData;
use crate::types::ObjectOrInterfaceTypeTrait;
use indexmap::IndexMap;
use inherent::inherent;
use std::path::Path;

/// Represents an
/// [object type](https://spec.graphql.org/October2021/#sec-Objects)
/// defined within some [`Schema`].
#[derive(Clone, Debug, PartialEq)]
pub struct ObjectType(pub(crate) ObjectOrInterfaceTypeData);
impl ObjectType {
    pub fn new(name: &str) -> Self {
        Self(ObjectOrInterfaceTypeData::new(name))
    }

    pub fn with_field(mut self, field: Field) -> Self {
        self.0.add_field(field);
        self
    }

    pub fn with_interface(mut self, iface_name: &str) -> Self {
        self.0.add_interface(iface_name);
        self
    }

    pub(crate) fn from_sdl(
        file: Option<&Path>,
        def: &graphql_parser::schema::ObjectType<'_, String>,
    ) -> Self {
        Self(ObjectOrInterfaceTypeData::from_sdl(
            file,
            def.position,
            &def.name,
            def.description.as_ref(),
            &def.implements_interfaces,
            &def.directives,
            &def.fields,
        ))
    }

    /// Indicates if this type implements `interface`, either directly or
    /// through another interface it implements.
    pub fn implements_interface(
        &self,
        schema: &Schema,
        interface: &InterfaceType,
    ) -> bool {
        self.0.interface_names().contains(&interface.name())
            || self.0.interfaces(schema).iter().any(|iface| {
                iface.interface_names().contains(&interface.name())
            })
    }
}

#[inherent]
impl ObjectOrInterfaceTypeTrait for ObjectType {
    /// The [`SchemaDefLocation`](loc::SchemaDefLocation) indicating where
    /// this [`ObjectType`] was defined.
    pub fn def_location(&self) -> &loc::SchemaDefLocation {
        self.0.def_location()
    }

    /// The description of this [`ObjectType`] as defined in the schema
    /// (e.g. in a """-string immediately before the type definition).
    pub fn description(&self) -> Option<&str> {
        self.0.description()
    }

    /// The [`DeprecationState`] of this [`ObjectType`] as indicated by the
    /// presence of a `@deprecated` annotation.
    pub fn deprecation_state(&self) -> DeprecationState<'_> {
        self.0.deprecation_state()
    }

    /// The list of [`DirectiveAnnotation`]s applied to this [`ObjectType`].
    ///
    /// This list is ordered the same as the annotations on the type
    /// definition, followed by those of any type extensions in the order the
    /// extensions were loaded.
    pub fn directives(&self) -> &Vec<DirectiveAnnotation> {
        self.0.directives()
    }

    pub fn field(&self, name: &str) -> Option<&Field> {
        self.0.field(name)
    }

    /// A map from FieldName -> [`Field`] for all fields defined on this
    /// [`ObjectType`].
    ///
    /// This returns an [`IndexMap`] so that entries retain the order the
    /// fields were defined in.
    pub fn fields(&self) -> &IndexMap<String, Field> {
        self.0.fields()
    }

    /// The list of [`InterfaceType`]s implemented by this [`ObjectType`].
    pub fn interfaces<'schema>(&self, schema: &'schema Schema) -> Vec<&'schema InterfaceType> {
        self.0.interfaces(schema)
    }

    /// The names of all [`InterfaceType`]s implemented by this [`ObjectType`].
    ///
    /// This can be useful when the [`Schema`] object is unavailable or
    /// inconvenient to access but the type's name is all that is needed.
    pub fn interface_names(&self) -> Vec<&str> {
        self.0.interface_names()
    }

    /// The name of this [`ObjectType`].
    pub fn name(&self) -> &str {
        self.0.name()
    }
}
