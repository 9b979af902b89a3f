use crate::loc;
use crate::types::DeprecationState;
use crate::types::DirectiveAnnotation;
use crate::types::InputField;
use indexmap::IndexMap;
use std::path::Path;

/// Represents an
/// [input object type](https://spec.graphql.org/October2021/#sec-Input-Objects)
/// defined within some [`Schema`](crate::schema::Schema).
#[derive(Clone, Debug, PartialEq)]
pub struct InputObjectType {
    pub(super) def_location: loc::SchemaDefLocation,
    pub(super) description: Option<String>,
    pub(super) directives: Vec<DirectiveAnnotation>,
    pub(super) fields: IndexMap<String, InputField>,
    pub(super) name: String,
}
impl InputObjectType {
    pub fn new(name: &str) -> Self {
        Self {
            def_location: loc::SchemaDefLocation::Programmatic,
            description: None,
            directives: vec![],
            fields: IndexMap::new(),
            name: name.to_string(),
        }
    }

    pub fn with_field(mut self, field: InputField) -> Self {
        self.fields.insert(field.name().to_string(), field);
        self
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

    /// A map from FieldName -> [`InputField`], in definition order.
    pub fn fields(&self) -> &IndexMap<String, InputField> {
        &self.fields
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub(crate) fn from_sdl(
        file: Option<&Path>,
        def: &graphql_parser::schema::InputObjectType<'_, String>,
    ) -> Self {
        Self {
            def_location: loc::SchemaDefLocation::from_ast_pos(file, def.position),
            description: def.description.clone(),
            directives: DirectiveAnnotation::from_sdl(file, &def.directives),
            fields: def.fields.iter()
                .map(|input_val| (
                    input_val.name.to_owned(),
                    InputField::from_sdl(file, input_val),
                ))
                .collect(),
            name: def.name.to_owned(),
        }
    }

    pub(crate) fn extend_from_sdl(
        &mut self,
        file: Option<&Path>,
        ext: &graphql_parser::schema::InputObjectTypeExtension<'_, String>,
    ) {
        self.directives.extend(DirectiveAnnotation::from_sdl(file, &ext.directives));
        for input_val in &ext.fields {
            self.fields.insert(
                input_val.name.to_owned(),
                InputField::from_sdl(file, input_val),
            );
        }
    }
}
