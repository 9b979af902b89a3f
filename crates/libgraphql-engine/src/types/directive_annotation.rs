use crate::ast;
use crate::loc;
use indexmap::IndexMap;
use std::path::Path;

/// A directive applied to some schema element (e.g. `@deprecated(reason:
/// "...")` on a field). Arguments are kept as the literal value [`ast::Node`]s
/// written in the schema.
#[derive(Clone, Debug, PartialEq)]
pub struct DirectiveAnnotation {
    pub(crate) arguments: IndexMap<String, ast::Node>,
    pub(crate) location: loc::SchemaDefLocation,
    pub(crate) name: String,
}
impl DirectiveAnnotation {
    pub fn new(name: &str) -> Self {
        Self {
            arguments: IndexMap::new(),
            location: loc::SchemaDefLocation::Programmatic,
            name: name.to_string(),
        }
    }

    pub fn with_argument(mut self, name: &str, value: ast::Node) -> Self {
        self.arguments.insert(name.to_string(), value);
        self
    }

    pub fn argument(&self, name: &str) -> Option<&ast::Node> {
        self.arguments.get(name)
    }

    pub fn arguments(&self) -> &IndexMap<String, ast::Node> {
        &self.arguments
    }

    pub fn directive_name(&self) -> &str {
        self.name.as_str()
    }

    pub fn location(&self) -> &loc::SchemaDefLocation {
        &self.location
    }

    pub(crate) fn from_sdl(
        file: Option<&Path>,
        sdl_annots: &[graphql_parser::schema::Directive<'_, String>],
    ) -> Vec<Self> {
        sdl_annots.iter().map(|sdl_annot| Self {
            arguments: sdl_annot.arguments.iter()
                .map(|(name, value)| (name.to_string(), ast::value_from_ast(value)))
                .collect(),
            location: loc::SchemaDefLocation::from_ast_pos(file, sdl_annot.position),
            name: sdl_annot.name.to_string(),
        }).collect()
    }
}
