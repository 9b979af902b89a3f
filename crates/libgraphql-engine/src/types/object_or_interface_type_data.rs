use crate::loc;
use crate::schema::Schema;
use crate::types::DeprecationState;
use crate::types::DirectiveAnnotation;
use crate::types::Field;
use crate::types::InterfaceType;
use crate::types::NamedGraphQLTypeRef;
use crate::types::ObjectOrInterfaceTypeTrait;
use indexmap::IndexMap;
use inherent::inherent;
use std::path::Path;

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct ObjectOrInterfaceTypeData {
    pub(super) def_location: loc::SchemaDefLocation,
    pub(super) description: Option<String>,
    pub(super) directives: Vec<DirectiveAnnotation>,
    pub(super) fields: IndexMap<String, Field>,
    pub(super) interfaces: Vec<NamedGraphQLTypeRef>,
    pub(super) name: String,
}
impl ObjectOrInterfaceTypeData {
    pub(super) fn new(name: &str) -> Self {
        Self {
            def_location: loc::SchemaDefLocation::Programmatic,
            description: None,
            directives: vec![],
            fields: IndexMap::new(),
            interfaces: vec![],
            name: name.to_string(),
        }
    }

    pub(super) fn from_sdl(
        file: Option<&Path>,
        position: graphql_parser::Pos,
        name: &str,
        description: Option<&String>,
        implements_interfaces: &[String],
        directives: &[graphql_parser::schema::Directive<'_, String>],
        fields: &[graphql_parser::schema::Field<'_, String>],
    ) -> Self {
        let def_location = loc::SchemaDefLocation::from_ast_pos(file, position);
        Self {
            description: description.cloned(),
            directives: DirectiveAnnotation::from_sdl(file, directives),
            fields: fields.iter()
                .map(|field| (field.name.to_owned(), Field::from_sdl(file, field)))
                .collect(),
            interfaces: implements_interfaces.iter()
                .map(|iface_name| NamedGraphQLTypeRef::new(iface_name, def_location.clone()))
                .collect(),
            name: name.to_string(),
            def_location,
        }
    }

    /// Merges the fields, interfaces, and directives of a type extension into
    /// this type.
    pub(crate) fn extend_from_sdl(
        &mut self,
        file: Option<&Path>,
        position: graphql_parser::Pos,
        implements_interfaces: &[String],
        directives: &[graphql_parser::schema::Directive<'_, String>],
        fields: &[graphql_parser::schema::Field<'_, String>],
    ) {
        let ext_location = loc::SchemaDefLocation::from_ast_pos(file, position);
        self.directives.extend(DirectiveAnnotation::from_sdl(file, directives));
        for field in fields {
            self.fields.insert(field.name.to_owned(), Field::from_sdl(file, field));
        }
        for iface_name in implements_interfaces {
            self.interfaces.push(NamedGraphQLTypeRef::new(iface_name, ext_location.clone()));
        }
    }

    pub(crate) fn add_field(&mut self, field: Field) {
        self.fields.insert(field.name().to_string(), field);
    }

    pub(super) fn add_interface(&mut self, iface_name: &str) {
        self.interfaces.push(NamedGraphQLTypeRef::new(
            iface_name,
            loc::SchemaDefLocation::Programmatic,
        ));
    }
}

#[inherent]
impl ObjectOrInterfaceTypeTrait for ObjectOrInterfaceTypeData {
    pub fn def_location(&self) -> &loc::SchemaDefLocation {
        &self.def_location
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn deprecation_state(&self) -> DeprecationState<'_> {
        (&self.directives).into()
    }

    pub fn directives(&self) -> &Vec<DirectiveAnnotation> {
        &self.directives
    }

    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.get(name)
    }

    pub fn fields(&self) -> &IndexMap<String, Field> {
        &self.fields
    }

    /// Interfaces that don't resolve to an [`InterfaceType`] in `schema` are
    /// skipped. A built [`Schema`] never contains such references.
    pub fn interfaces<'schema>(
        &self,
        schema: &'schema Schema,
    ) -> Vec<&'schema InterfaceType> {
        self.interfaces
            .iter()
            .filter_map(|iface_ref| iface_ref.deref(schema).ok())
            .filter_map(|type_| type_.as_interface())
            .collect()
    }

    pub fn interface_names(&self) -> Vec<&str> {
        self.interfaces
            .iter()
            .map(|iface_ref| iface_ref.name())
            .collect()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
