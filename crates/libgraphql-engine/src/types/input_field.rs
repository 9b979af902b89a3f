use crate::ast;
use crate::loc;
use crate::types::DirectiveAnnotation;
use crate::types::TypeAnnotation;
use std::path::Path;

/// Represents an
/// [input field](https://spec.graphql.org/October2021/#InputFieldsDefinition)
/// defined on an [`InputObjectType`](crate::types::InputObjectType).
#[derive(Clone, Debug, PartialEq)]
pub struct InputField {
    pub(super) def_location: loc::SchemaDefLocation,
    pub(super) default_value: Option<ast::Node>,
    pub(super) description: Option<String>,
    pub(super) directives: Vec<DirectiveAnnotation>,
    pub(super) name: String,
    pub(super) type_annotation: TypeAnnotation,
}
impl InputField {
    pub fn new(name: &str, type_annotation: TypeAnnotation) -> Self {
        Self {
            def_location: loc::SchemaDefLocation::Programmatic,
            default_value: None,
            description: None,
            directives: vec![],
            name: name.to_string(),
            type_annotation,
        }
    }

    pub fn with_default_value(mut self, default_value: ast::Node) -> Self {
        self.default_value = Some(default_value);
        self
    }

    /// The [`SchemaDefLocation`](loc::SchemaDefLocation) indicating where
    /// this [`InputField`] was defined.
    pub fn def_location(&self) -> &loc::SchemaDefLocation {
        &self.def_location
    }

    pub fn default_value(&self) -> Option<&ast::Node> {
        self.default_value.as_ref()
    }

    /// The description of this [`InputField`] as defined in the schema
    /// (e.g. in a `"""`-string immediately before the input field definition).
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// The list of [`DirectiveAnnotation`]s applied to this [`InputField`],
    /// in the order they were written.
    pub fn directives(&self) -> &Vec<DirectiveAnnotation> {
        &self.directives
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// The [`TypeAnnotation`] specifying the schema-defined type of this
    /// [`InputField`].
    pub fn type_annotation(&self) -> &TypeAnnotation {
        &self.type_annotation
    }

    pub(crate) fn from_sdl(
        file: Option<&Path>,
        input_val: &graphql_parser::schema::InputValue<'_, String>,
    ) -> Self {
        let def_location = loc::SchemaDefLocation::from_ast_pos(file, input_val.position);
        InputField {
            default_value: input_val.default_value.as_ref().map(ast::value_from_ast),
            description: input_val.description.clone(),
            directives: DirectiveAnnotation::from_sdl(file, &input_val.directives),
            name: input_val.name.to_owned(),
            type_annotation: TypeAnnotation::from_sdl_type(
                &def_location,
                &input_val.value_type,
            ),
            def_location,
        }
    }
}
