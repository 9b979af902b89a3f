use crate::loc;
use crate::types::DeprecationState;
use crate::types::DirectiveAnnotation;
use crate::types::Parameter;
use crate::types::TypeAnnotation;
use indexmap::IndexMap;
use std::path::Path;

/// Represents a field defined on an [`ObjectType`](crate::types::ObjectType)
/// or [`InterfaceType`](crate::types::InterfaceType).
#[derive(Clone, Debug, PartialEq)]
pub struct Field {
    pub(super) def_location: loc::SchemaDefLocation,
    pub(super) description: Option<String>,
    pub(super) directives: Vec<DirectiveAnnotation>,
    pub(super) name: String,
    pub(super) parameters: IndexMap<String, Parameter>,
    pub(super) type_annotation: TypeAnnotation,
}
impl Field {
    pub fn new(name: &str, type_annotation: TypeAnnotation) -> Self {
        Self {
            def_location: loc::SchemaDefLocation::Programmatic,
            description: None,
            directives: vec![],
            name: name.to_string(),
            parameters: IndexMap::new(),
            type_annotation,
        }
    }

    /// The `__typename: String!` meta-field implicitly defined on every
    /// object and interface type.
    pub(crate) fn typename_meta_field() -> Self {
        let mut field = Self::new("__typename", TypeAnnotation::named("String", false));
        field.def_location = loc::SchemaDefLocation::GraphQLBuiltIn;
        field
    }

    pub fn with_directive(mut self, directive: DirectiveAnnotation) -> Self {
        self.directives.push(directive);
        self
    }

    pub fn with_parameter(mut self, parameter: Parameter) -> Self {
        self.parameters.insert(parameter.name().to_string(), parameter);
        self
    }

    pub fn def_location(&self) -> &loc::SchemaDefLocation {
        &self.def_location
    }

    /// The [`DeprecationState`] of this [`Field`] as indicated by the
    /// presence of a `@deprecated` annotation.
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

    /// Parameters in the order they were declared.
    pub fn parameters(&self) -> &IndexMap<String, Parameter> {
        &self.parameters
    }

    pub fn type_annotation(&self) -> &TypeAnnotation {
        &self.type_annotation
    }

    pub(crate) fn from_sdl(
        file: Option<&Path>,
        sdl_field: &graphql_parser::schema::Field<'_, String>,
    ) -> Self {
        let def_location = loc::SchemaDefLocation::from_ast_pos(file, sdl_field.position);
        Field {
            description: sdl_field.description.clone(),
            directives: DirectiveAnnotation::from_sdl(file, &sdl_field.directives),
            name: sdl_field.name.to_owned(),
            parameters: sdl_field.arguments.iter()
                .map(|input_val| (
                    input_val.name.to_owned(),
                    Parameter::from_sdl(file, input_val),
                ))
                .collect(),
            type_annotation: TypeAnnotation::from_sdl_type(
                &def_location,
                &sdl_field.field_type,
            ),
            def_location,
        }
    }
}
