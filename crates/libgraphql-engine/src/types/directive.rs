use crate::ast::OperationType;
use crate::loc;
use crate::types::Parameter;
use crate::types::TypeAnnotation;
use indexmap::IndexMap;
use std::path::Path;

/// Represents a defined directive.
#[derive(Clone, Debug, PartialEq)]
pub struct Directive {
    pub(super) def_location: loc::SchemaDefLocation,
    pub(super) description: Option<String>,
    pub(super) locations: Vec<DirectiveLocation>,
    pub(super) name: String,
    pub(super) parameters: IndexMap<String, Parameter>,
    pub(super) repeatable: bool,
}
impl Directive {
    pub fn new(
        name: &str,
        locations: impl IntoIterator<Item = DirectiveLocation>,
    ) -> Self {
        Self {
            def_location: loc::SchemaDefLocation::Programmatic,
            description: None,
            locations: locations.into_iter().collect(),
            name: name.to_string(),
            parameters: IndexMap::new(),
            repeatable: false,
        }
    }

    pub fn with_parameter(mut self, param: Parameter) -> Self {
        self.parameters.insert(param.name().to_string(), param);
        self
    }

    pub fn repeatable(mut self) -> Self {
        self.repeatable = true;
        self
    }

    /// `@deprecated(reason: String = "No longer supported")`
    pub fn deprecated() -> Self {
        Self::builtin(
            "deprecated",
            [
                DirectiveLocation::ArgumentDefinition,
                DirectiveLocation::EnumValue,
                DirectiveLocation::FieldDefinition,
                DirectiveLocation::InputFieldDefinition,
            ],
        ).with_parameter(
            Parameter::new("reason", TypeAnnotation::named("String", true))
                .with_default_value(crate::ast::Node::string_value("No longer supported")),
        )
    }

    /// `@include(if: Boolean!)`
    pub fn include() -> Self {
        Self::builtin("include", Self::EXECUTABLE_FIELD_LOCATIONS)
            .with_parameter(Parameter::new("if", TypeAnnotation::named("Boolean", false)))
    }

    /// `@skip(if: Boolean!)`
    pub fn skip() -> Self {
        Self::builtin("skip", Self::EXECUTABLE_FIELD_LOCATIONS)
            .with_parameter(Parameter::new("if", TypeAnnotation::named("Boolean", false)))
    }

    /// `@specifiedBy(url: String!)`
    pub fn specified_by() -> Self {
        Self::builtin("specifiedBy", [DirectiveLocation::Scalar])
            .with_parameter(Parameter::new("url", TypeAnnotation::named("String", false)))
    }

    pub fn builtins() -> Vec<Self> {
        vec![
            Self::deprecated(),
            Self::include(),
            Self::skip(),
            Self::specified_by(),
        ]
    }

    const EXECUTABLE_FIELD_LOCATIONS: [DirectiveLocation; 3] = [
        DirectiveLocation::Field,
        DirectiveLocation::FragmentSpread,
        DirectiveLocation::InlineFragment,
    ];

    fn builtin(
        name: &str,
        locations: impl IntoIterator<Item = DirectiveLocation>,
    ) -> Self {
        let mut directive = Self::new(name, locations);
        directive.def_location = loc::SchemaDefLocation::GraphQLBuiltIn;
        directive
    }

    pub fn def_location(&self) -> &loc::SchemaDefLocation {
        &self.def_location
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn is_builtin(&self) -> bool {
        matches!(self.def_location, loc::SchemaDefLocation::GraphQLBuiltIn)
    }

    pub fn is_repeatable(&self) -> bool {
        self.repeatable
    }

    pub fn locations(&self) -> &[DirectiveLocation] {
        &self.locations
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn parameters(&self) -> &IndexMap<String, Parameter> {
        &self.parameters
    }

    pub(crate) fn from_sdl(
        file: Option<&Path>,
        def: &graphql_parser::schema::DirectiveDefinition<'_, String>,
    ) -> Self {
        Self {
            def_location: loc::SchemaDefLocation::from_ast_pos(file, def.position),
            description: def.description.clone(),
            locations: def.locations.iter().map(DirectiveLocation::from).collect(),
            name: def.name.to_owned(),
            parameters: def.arguments.iter()
                .map(|input_val| (
                    input_val.name.to_owned(),
                    Parameter::from_sdl(file, input_val),
                ))
                .collect(),
            repeatable: def.repeatable,
        }
    }
}
/// The places a [`Directive`] may be applied.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum DirectiveLocation {
    // Executable locations
    Query,
    Mutation,
    Subscription,
    Field,
    FragmentDefinition,
    FragmentSpread,
    InlineFragment,
    VariableDefinition,

    // Type system locations
    Schema,
    Scalar,
    Object,
    FieldDefinition,
    ArgumentDefinition,
    Interface,
    Union,
    Enum,
    EnumValue,
    InputObject,
    InputFieldDefinition,
}
impl DirectiveLocation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Query => "QUERY",
            Self::Mutation => "MUTATION",
            Self::Subscription => "SUBSCRIPTION",
            Self::Field => "FIELD",
            Self::FragmentDefinition => "FRAGMENT_DEFINITION",
            Self::FragmentSpread => "FRAGMENT_SPREAD",
            Self::InlineFragment => "INLINE_FRAGMENT",
            Self::VariableDefinition => "VARIABLE_DEFINITION",
            Self::Schema => "SCHEMA",
            Self::Scalar => "SCALAR",
            Self::Object => "OBJECT",
            Self::FieldDefinition => "FIELD_DEFINITION",
            Self::ArgumentDefinition => "ARGUMENT_DEFINITION",
            Self::Interface => "INTERFACE",
            Self::Union => "UNION",
            Self::Enum => "ENUM",
            Self::EnumValue => "ENUM_VALUE",
            Self::InputObject => "INPUT_OBJECT",
            Self::InputFieldDefinition => "INPUT_FIELD_DEFINITION",
        }
    }
}
impl std::convert::From<OperationType> for DirectiveLocation {
    fn from(value: OperationType) -> Self {
        match value {
            OperationType::Query => Self::Query,
            OperationType::Mutation => Self::Mutation,
            OperationType::Subscription => Self::Subscription,
        }
    }
}
impl std::convert::From<&graphql_parser::schema::DirectiveLocation> for DirectiveLocation {
    fn from(value: &graphql_parser::schema::DirectiveLocation) -> Self {
        use graphql_parser::schema::DirectiveLocation as SdlLocation;
        match value {
            SdlLocation::Query => Self::Query,
            SdlLocation::Mutation => Self::Mutation,
            SdlLocation::Subscription => Self::Subscription,
            SdlLocation::Field => Self::Field,
            SdlLocation::FragmentDefinition => Self::FragmentDefinition,
            SdlLocation::FragmentSpread => Self::FragmentSpread,
            SdlLocation::InlineFragment => Self::InlineFragment,
            SdlLocation::VariableDefinition => Self::VariableDefinition,
            SdlLocation::Schema => Self::Schema,
            SdlLocation::Scalar => Self::Scalar,
            SdlLocation::Object => Self::Object,
            SdlLocation::FieldDefinition => Self::FieldDefinition,
            SdlLocation::ArgumentDefinition => Self::ArgumentDefinition,
            SdlLocation::Interface => Self::Interface,
            SdlLocation::Union => Self::Union,
            SdlLocation::Enum => Self::Enum,
            SdlLocation::EnumValue => Self::EnumValue,
            SdlLocation::InputObject => Self::InputObject,
            SdlLocation::InputFieldDefinition => Self::InputFieldDefinition,
        }
    }
}
impl std::fmt::Display for DirectiveLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
