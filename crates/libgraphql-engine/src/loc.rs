use std::path::Path;
use std::path::PathBuf;

/// A position within some GraphQL source text.
///
/// Very similar to graphql_parser's [Pos](graphql_parser::Pos) (1-based line
/// and column), except it optionally carries a [`PathBuf`] to the file the
/// source text was loaded from.
#[derive(
    Clone,
    Debug,
    Eq,
    Hash,
    PartialEq,
    serde::Deserialize,
    serde::Serialize,
)]
pub struct SourceLocation {
    pub line: usize,
    pub column: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}
impl SourceLocation {
    pub fn new(line: usize, column: usize) -> Self {
        Self {
            line,
            column,
            file: None,
        }
    }

    pub(crate) fn from_ast_pos(
        file: Option<&Path>,
        pos: graphql_parser::Pos,
    ) -> Self {
        Self {
            line: pos.line,
            column: pos.column,
            file: file.map(|f| f.to_path_buf()),
        }
    }

    pub fn with_file(mut self, file: impl AsRef<Path>) -> Self {
        self.file = Some(file.as_ref().to_path_buf());
        self
    }

    /// Key used to order locations as they appear in a single document.
    pub(crate) fn document_order_key(&self) -> (usize, usize) {
        (self.line, self.column)
    }
}
impl std::fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.file {
            Some(file) => write!(f, "{}:{}:{}", file.display(), self.line, self.column),
            None => write!(f, "{}:{}", self.line, self.column),
        }
    }
}

/// Where some schema element (type, field, directive, ...) was defined.
#[derive(
    Clone,
    Debug,
    Eq,
    PartialEq,
    serde::Deserialize,
    serde::Serialize,
)]
pub enum SchemaDefLocation {
    /// Defined implicitly by GraphQL itself (e.g. `Int`, `@skip`).
    GraphQLBuiltIn,

    /// Defined through the programmatic builder APIs rather than loaded from
    /// SDL.
    Programmatic,

    /// Loaded from SDL source text.
    Schema(SourceLocation),
}
impl SchemaDefLocation {
    pub(crate) fn from_ast_pos(
        file: Option<&Path>,
        pos: graphql_parser::Pos,
    ) -> Self {
        Self::Schema(SourceLocation::from_ast_pos(file, pos))
    }

    pub fn source_location(&self) -> Option<&SourceLocation> {
        if let Self::Schema(loc) = self {
            Some(loc)
        } else {
            None
        }
    }
}
impl std::convert::From<SourceLocation> for SchemaDefLocation {
    fn from(value: SourceLocation) -> Self {
        Self::Schema(value)
    }
}
