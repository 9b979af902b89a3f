use crate::loc;
use crate::types::DeprecationState;
use crate::types::DirectiveAnnotation;
use indexmap::IndexMap;
use std::path::Path;

/// Represents an
/// [enum type](https://spec.graphql.org/October2021/#sec-Enums) defined
/// within some [`Schema`](crate::schema::Schema).
#[derive(Clone, Debug, PartialEq)]
pub struct EnumType {
    pub(super) def_location: loc::SchemaDefLocation,
    pub(super) description: Option<String>,
    pub(super) directives: Vec<DirectiveAnnotation>,
    pub(super) name: String,
    pub(super) values: IndexMap<String, EnumValue>,
}
impl EnumType {
    pub fn new<'a>(name: &str, value_names: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            def_location: loc::SchemaDefLocation::Programmatic,
            description: None,
            directives: vec![],
            name: name.to_string(),
            values: value_names.into_iter()
                .map(|value_name| (value_name.to_string(), EnumValue {
                    def_location: loc::SchemaDefLocation::Programmatic,
                    description: None,
                    directives: vec![],
                    name: value_name.to_string(),
                }))
                .collect(),
        }
    }

    pub fn def_location(&self) -> &loc::SchemaDefLocation {
        &self.def_location
    }

    pub fn deprecation_state(&self) -> DeprecationState<'_> {
        (&self.directives).into()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn directives(&self) -> &Vec<DirectiveAnnotation> {
        &self.directives
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn value(&self, name: &str) -> Option<&EnumValue> {
        self.values.get(name)
    }

    /// Values in the order they were defined.
    pub fn values(&self) -> &IndexMap<String, EnumValue> {
        &self.values
    }

    pub(crate) fn from_sdl(
        file: Option<&Path>,
        def: &graphql_parser::schema::EnumType<'_, String>,
    ) -> Self {
        Self {
            def_location: loc::SchemaDefLocation::from_ast_pos(file, def.position),
            description: def.description.clone(),
            directives: DirectiveAnnotation::from_sdl(file, &def.directives),
            name: def.name.to_owned(),
            values: EnumValue::map_from_sdl(file, &def.values),
        }
    }

    pub(crate) fn extend_from_sdl(
        &mut self,
        file: Option<&Path>,
        ext: &graphql_parser::schema::EnumTypeExtension<'_, String>,
    ) {
        self.directives.extend(DirectiveAnnotation::from_sdl(file, &ext.directives));
        self.values.extend(EnumValue::map_from_sdl(file, &ext.values));
    }
}

/// One of the named values of an [`EnumType`].
#[derive(Clone, Debug, PartialEq)]
pub struct EnumValue {
    pub(super) def_location: loc::SchemaDefLocation,
    pub(super) description: Option<String>,
    pub(super) directives: Vec<DirectiveAnnotation>,
    pub(super) name: String,
}
impl EnumValue {
    pub fn def_location(&self) -> &loc::SchemaDefLocation {
        &self.def_location
    }

    pub fn deprecation_state(&self) -> DeprecationState<'_> {
        (&self.directives).into()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn directives(&self) -> &Vec<DirectiveAnnotation> {
        &self.directives
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    fn map_from_sdl(
        file: Option<&Path>,
        sdl_values: &[graphql_parser::schema::EnumValue<'_, String>],
    ) -> IndexMap<String, EnumValue> {
        sdl_values.iter()
            .map(|sdl_value| (sdl_value.name.to_owned(), EnumValue {
                def_location: loc::SchemaDefLocation::from_ast_pos(file, sdl_value.position),
                description: sdl_value.description.clone(),
                directives: DirectiveAnnotation::from_sdl(file, &sdl_value.directives),
                name: sdl_value.name.to_owned(),
            }))
            .collect()
    }
}
