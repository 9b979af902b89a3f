use crate::ast;
use crate::loc;
use crate::types::TypeAnnotation;
use std::path::Path;

/// An argument declared on a [`Field`](crate::types::Field) or
/// [`Directive`](crate::types::Directive).
#[derive(Clone, Debug, PartialEq)]
pub struct Parameter {
    pub(super) def_location: loc::SchemaDefLocation,
    pub(super) default_value: Option<ast::Node>,
    pub(super) description: Option<String>,
    pub(super) name: String,
    pub(super) type_annotation: TypeAnnotation,
}
impl Parameter {
    pub fn new(name: &str, type_annotation: TypeAnnotation) -> Self {
        Self {
            def_location: loc::SchemaDefLocation::Programmatic,
            default_value: None,
            description: None,
            name: name.to_string(),
            type_annotation,
        }
    }

    pub fn with_default_value(mut self, default_value: ast::Node) -> Self {
        self.default_value = Some(default_value);
        self
    }

    pub fn def_location(&self) -> &loc::SchemaDefLocation {
        &self.def_location
    }

    /// The default value literal, exactly as written in the schema.
    pub fn default_value(&self) -> Option<&ast::Node> {
        self.default_value.as_ref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// A parameter is required when it is non-null and has no default.
    pub fn is_required(&self) -> bool {
        !self.type_annotation.nullable() && self.default_value.is_none()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn type_annotation(&self) -> &TypeAnnotation {
        &self.type_annotation
    }

    pub(crate) fn from_sdl(
        file: Option<&Path>,
        input_val: &graphql_parser::schema::InputValue<'_, String>,
    ) -> Self {
        let def_location = loc::SchemaDefLocation::from_ast_pos(file, input_val.position);
        Parameter {
            default_value: input_val.default_value.as_ref().map(ast::value_from_ast),
            description: input_val.description.clone(),
            name: input_val.name.to_owned(),
            type_annotation: TypeAnnotation::from_sdl_type(
                &def_location,
                &input_val.value_type,
            ),
            def_location,
        }
    }
}
