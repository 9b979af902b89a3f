use crate::loc;
use crate::types::BooleanCoercing;
use crate::types::Coercing;
use crate::types::DeprecationState;
use crate::types::DirectiveAnnotation;
use crate::types::FloatCoercing;
use crate::types::IdCoercing;
use crate::types::IntCoercing;
use crate::types::LiteralPassthroughCoercing;
use crate::types::StringCoercing;
use std::path::Path;
use std::sync::Arc;

const BUILTIN_SCALAR_NAMES: [&str; 5] = ["Boolean", "Float", "ID", "Int", "String"];

/// Represents a
/// [scalar type](https://spec.graphql.org/October2021/#sec-Scalars) defined
/// within some [`Schema`](crate::schema::Schema).
///
/// Every scalar carries the [`Coercing`] used to validate literals, coerce
/// variables, and serialize results. Custom scalars default to
/// [`LiteralPassthroughCoercing`] until a
/// [`RuntimeWiring`](crate::wiring::RuntimeWiring) supplies their coercion.
#[derive(Clone)]
pub struct ScalarType {
    pub(super) coercing: Arc<dyn Coercing>,
    pub(super) def_location: loc::SchemaDefLocation,
    pub(super) description: Option<String>,
    pub(super) directives: Vec<DirectiveAnnotation>,
    pub(super) name: String,
}

impl ScalarType {
    /// A custom scalar with [`LiteralPassthroughCoercing`].
    pub fn new(name: &str) -> Self {
        Self {
            coercing: Arc::new(LiteralPassthroughCoercing),
            def_location: loc::SchemaDefLocation::Programmatic,
            description: None,
            directives: vec![],
            name: name.to_string(),
        }
    }

    /// One of the five scalars every schema defines implicitly, or `None` if
    /// `name` is not a built-in scalar name.
    pub fn builtin(name: &str) -> Option<Self> {
        let coercing: Arc<dyn Coercing> = match name {
            "Boolean" => Arc::new(BooleanCoercing),
            "Float" => Arc::new(FloatCoercing),
            "ID" => Arc::new(IdCoercing),
            "Int" => Arc::new(IntCoercing),
            "String" => Arc::new(StringCoercing),
            _ => return None,
        };
        Some(Self {
            coercing,
            def_location: loc::SchemaDefLocation::GraphQLBuiltIn,
            description: None,
            directives: vec![],
            name: name.to_string(),
        })
    }

    pub fn builtins() -> impl Iterator<Item = ScalarType> {
        BUILTIN_SCALAR_NAMES.into_iter().filter_map(Self::builtin)
    }

    pub fn is_builtin_name(name: &str) -> bool {
        BUILTIN_SCALAR_NAMES.contains(&name)
    }

    pub fn with_coercing(mut self, coercing: Arc<dyn Coercing>) -> Self {
        self.coercing = coercing;
        self
    }

    pub fn coercing(&self) -> &dyn Coercing {
        self.coercing.as_ref()
    }

    /// The [loc::SchemaDefLocation] indicating where this [ScalarType] was
    /// defined within the schema.
    pub fn def_location(&self) -> &loc::SchemaDefLocation {
        &self.def_location
    }

    /// The [`DeprecationState`] of this [`ScalarType`] as indicated by the
    /// presence of a `@deprecated` annotation.
    pub fn deprecation_state(&self) -> DeprecationState<'_> {
        (&self.directives).into()
    }

    /// The description of this [`ScalarType`] as defined in the schema
    /// (e.g. in a """-string immediately before the type definition).
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// The list of [DirectiveAnnotation]s applied to this [ScalarType].
    ///
    /// Annotations from a type extension follow those of the definition.
    pub fn directives(&self) -> &Vec<DirectiveAnnotation> {
        &self.directives
    }

    pub fn is_builtin(&self) -> bool {
        matches!(self.def_location, loc::SchemaDefLocation::GraphQLBuiltIn)
    }

    // The name of this [ScalarType].
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// The `url` argument of a `@specifiedBy` annotation, if present.
    pub fn specified_by_url(&self) -> Option<&str> {
        self.directives.iter()
            .find(|annot| annot.directive_name() == "specifiedBy")
            .and_then(|annot| annot.argument("url"))
            .and_then(|url| match url.kind() {
                crate::ast::NodeKind::StringValue(string) => Some(string.value.as_str()),
                _ => None,
            })
    }

    pub(crate) fn from_sdl(
        file: Option<&Path>,
        def: &graphql_parser::schema::ScalarType<'_, String>,
    ) -> Self {
        Self {
            coercing: Arc::new(LiteralPassthroughCoercing),
            def_location: loc::SchemaDefLocation::from_ast_pos(file, def.position),
            description: def.description.clone(),
            directives: DirectiveAnnotation::from_sdl(file, &def.directives),
            name: def.name.to_owned(),
        }
    }

    pub(crate) fn extend_from_sdl(
        &mut self,
        file: Option<&Path>,
        ext: &graphql_parser::schema::ScalarTypeExtension<'_, String>,
    ) {
        self.directives.extend(DirectiveAnnotation::from_sdl(file, &ext.directives));
    }
}
impl std::fmt::Debug for ScalarType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScalarType")
            .field("def_location", &self.def_location)
            .field("description", &self.description)
            .field("directives", &self.directives)
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}
impl std::cmp::PartialEq for ScalarType {
    fn eq(&self, other: &Self) -> bool {
        self.def_location == other.def_location
            && self.description == other.description
            && self.directives == other.directives
            && self.name == other.name
    }
}
