use crate::ast::OperationType;
use crate::loc;
use crate::schema::Schema;
use crate::schema::TypeValidationError;
use crate::types::Directive;
use crate::types::EnumType;
use crate::types::Field;
use crate::types::GraphQLType;
use crate::types::GraphQLTypeKind;
use crate::types::InputObjectType;
use crate::types::InputObjectTypeValidator;
use crate::types::InterfaceType;
use crate::types::NamedGraphQLTypeRef;
use crate::types::ObjectOrInterfaceTypeValidator;
use crate::types::ObjectType;
use crate::types::ScalarType;
use crate::types::UnionType;
use crate::types::UnionTypeValidator;
use crate::wiring::RuntimeWiring;
use indexmap::IndexMap;
use std::collections::HashSet;
use std::path::Path;
use std::path::PathBuf;
use std::sync::OnceLock;
use thiserror::Error;

type Result<T> = std::result::Result<T, SchemaBuildError>;

fn builtin_directive_names() -> &'static HashSet<&'static str> {
    static NAMES: OnceLock<HashSet<&'static str>> = OnceLock::new();
    NAMES.get_or_init(|| {
        HashSet::from([
            "skip",
            "include",
            "deprecated",
            "specifiedBy",
        ])
    })
}

/// A type extension whose target may not have been loaded yet. Extensions are
/// applied at [`SchemaBuilder::build()`] time, in the order they were loaded.
#[derive(Debug)]
struct PendingExtension {
    ext: graphql_parser::schema::TypeExtension<'static, String>,
    file: PathBuf,
}

/// Utility for building a [Schema].
///
/// Types and directives can be loaded from SDL ([`SchemaBuilder::load_str()`],
/// [`SchemaBuilder::load_file()`]) or registered programmatically
/// ([`SchemaBuilder::add_type()`], [`SchemaBuilder::add_directive()`]), in any
/// mix.
#[derive(Debug)]
pub struct SchemaBuilder {
    directive_defs: IndexMap<String, Directive>,
    mutation_type: Option<NamedTypeDefLocation>,
    pending_extensions: Vec<PendingExtension>,
    query_type: Option<NamedTypeDefLocation>,
    str_load_counter: u16,
    subscription_type: Option<NamedTypeDefLocation>,
    types: IndexMap<String, GraphQLType>,
}
impl SchemaBuilder {
    pub fn add_directive(mut self, directive: Directive) -> Result<Self> {
        self.insert_directive(directive)?;
        Ok(self)
    }

    pub fn add_type(mut self, type_: GraphQLType) -> Result<Self> {
        self.insert_type(type_)?;
        Ok(self)
    }

    pub fn build(self) -> Result<Schema> {
        self.build_impl(None)
    }

    /// Builds the [`Schema`], taking the coercion of custom scalars from
    /// `wiring`.
    pub fn build_with_wiring(self, wiring: &RuntimeWiring) -> Result<Schema> {
        self.build_impl(Some(wiring))
    }

    fn build_impl(mut self, wiring: Option<&RuntimeWiring>) -> Result<Schema> {
        self.inject_missing_builtin_directives();
        self.apply_pending_extensions()?;

        let query_type = match self.query_type.take() {
            Some(def) => def,
            None => Self::default_root_type(&self.types, "Query")
                .ok_or(SchemaBuildError::NoQueryOperationTypeDefined)?,
        };
        let mutation_type = self.mutation_type.take().or_else(
            || Self::default_root_type(&self.types, "Mutation")
        );
        let subscription_type = self.subscription_type.take().or_else(
            || Self::default_root_type(&self.types, "Subscription")
        );

        let root_types = [
            (OperationType::Query, Some(&query_type)),
            (OperationType::Mutation, mutation_type.as_ref()),
            (OperationType::Subscription, subscription_type.as_ref()),
        ];
        for (operation, root_type) in &root_types {
            let root_type = match root_type {
                Some(root_type) => root_type,
                None => continue,
            };
            match self.types.get(root_type.type_name.as_str()) {
                Some(GraphQLType::Object(_)) => (),
                Some(type_) => return Err(SchemaBuildError::NonObjectRootOperationType {
                    def_location: root_type.def_location.to_owned(),
                    operation: *operation,
                    type_kind: type_.kind(),
                    type_name: root_type.type_name.to_owned(),
                }),
                None => return Err(SchemaBuildError::UndefinedRootOperationType {
                    def_location: root_type.def_location.to_owned(),
                    operation: *operation,
                    type_name: root_type.type_name.to_owned(),
                }),
            }
        }

        // As per spec:
        //
        // > The query, mutation, and subscription root types must all be
        // > different types if provided.
        //
        // https://spec.graphql.org/October2021/#sel-FAHTRLCAACG0B57a
        for (idx, (operation1, root_type1)) in root_types.iter().enumerate() {
            for (operation2, root_type2) in &root_types[idx + 1..] {
                if let (Some(root_type1), Some(root_type2)) = (root_type1, root_type2) {
                    if root_type1.type_name == root_type2.type_name {
                        return Err(SchemaBuildError::NonUniqueOperationTypes {
                            reused_type_name: root_type1.type_name.to_owned(),
                            operation1: *operation1,
                            operation1_loc: root_type1.def_location.to_owned(),
                            operation2: *operation2,
                            operation2_loc: root_type2.def_location.to_owned(),
                        });
                    }
                }
            }
        }

        self.check_names()?;
        self.inject_typename_fields();
        if let Some(wiring) = wiring {
            for type_ in self.types.values_mut() {
                if let GraphQLType::Scalar(scalar_type) = type_ {
                    if let Some(coercing) = wiring.scalar_coercing(scalar_type) {
                        *scalar_type = scalar_type.clone().with_coercing(coercing);
                    }
                }
            }
        }

        let errors = self.validate_types();
        if !errors.is_empty() {
            return Err(SchemaBuildError::TypeValidationErrors { errors });
        }

        let schema = Schema {
            directive_defs: self.directive_defs,
            query_type: NamedGraphQLTypeRef::new(
                query_type.type_name,
                query_type.def_location,
            ),
            mutation_type: mutation_type.map(|t| NamedGraphQLTypeRef::new(
                t.type_name,
                t.def_location,
            )),
            subscription_type: subscription_type.map(|t| NamedGraphQLTypeRef::new(
                t.type_name,
                t.def_location,
            )),
            types: self.types,
        };
        log::debug!(
            "Built schema with {} types ({} reachable from root operation types) \
            and {} directives",
            schema.types.len(),
            schema.reachable_types().len(),
            schema.directive_defs.len(),
        );
        Ok(schema)
    }

    pub fn new() -> Self {
        Self {
            directive_defs: IndexMap::new(),
            mutation_type: None,
            pending_extensions: vec![],
            query_type: None,
            str_load_counter: 0,
            subscription_type: None,
            types: ScalarType::builtins()
                .map(|scalar| (scalar.name().to_string(), GraphQLType::Scalar(scalar)))
                .collect(),
        }
    }

    pub fn load_file(
        self,
        file_path: impl AsRef<Path>,
    ) -> Result<Self> {
        self.load_files(vec![file_path])
    }

    pub fn load_files(
        mut self,
        file_paths: Vec<impl AsRef<Path>>,
    ) -> Result<Self> {
        for file_path in file_paths {
            let file_path = file_path.as_ref();
            let file_content = std::fs::read_to_string(file_path)
                .map_err(|err| SchemaBuildError::SchemaFileReadError {
                    err: err.to_string(),
                    file: file_path.to_path_buf(),
                })?;
            self = self.load_str(
                Some(file_path.to_path_buf()),
                file_content.as_str(),
            )?;
        }
        Ok(self)
    }

    pub fn load_str(
        mut self,
        file_path: Option<PathBuf>,
        content: &str,
    ) -> Result<Self> {
        let file_path =
            if let Some(file_path) = file_path {
                file_path
            } else {
                let ctr = self.str_load_counter;
                self.str_load_counter += 1;
                PathBuf::from(format!("str://{ctr}"))
            };
        log::trace!("Loading schema definitions from {}", file_path.display());

        let ast_doc =
            graphql_parser::schema::parse_schema::<String>(content)
                .map_err(|err| SchemaBuildError::ParseError {
                    file: file_path.to_owned(),
                    err: err.to_string(),
                })?.into_static();

        for def in ast_doc.definitions {
            self.visit_ast_def(file_path.as_path(), def)?;
        }

        Ok(self)
    }

    /// Explicitly names the root type for one kind of operation, as a
    /// `schema { query: .. }` block would.
    pub fn with_root_operation_type(
        mut self,
        operation: OperationType,
        type_name: &str,
    ) -> Result<Self> {
        self.set_root_operation_type(operation, NamedTypeDefLocation {
            def_location: loc::SchemaDefLocation::Programmatic,
            type_name: type_name.to_string(),
        })?;
        Ok(self)
    }

    fn apply_pending_extensions(&mut self) -> Result<()> {
        use graphql_parser::schema::TypeExtension;
        for PendingExtension { ext, file } in std::mem::take(&mut self.pending_extensions) {
            let file = Some(file.as_path());
            let (ext_name, ext_kind, ext_pos) = match &ext {
                TypeExtension::Enum(ext) => (&ext.name, GraphQLTypeKind::Enum, ext.position),
                TypeExtension::InputObject(ext) => (&ext.name, GraphQLTypeKind::InputObject, ext.position),
                TypeExtension::Interface(ext) => (&ext.name, GraphQLTypeKind::Interface, ext.position),
                TypeExtension::Object(ext) => (&ext.name, GraphQLTypeKind::Object, ext.position),
                TypeExtension::Scalar(ext) => (&ext.name, GraphQLTypeKind::Scalar, ext.position),
                TypeExtension::Union(ext) => (&ext.name, GraphQLTypeKind::Union, ext.position),
            };
            let extension_loc = loc::SchemaDefLocation::from_ast_pos(file, ext_pos);
            let type_ = match self.types.get_mut(ext_name.as_str()) {
                Some(type_) => type_,
                None => return Err(SchemaBuildError::ExtensionOfUndefinedType {
                    extension_loc,
                    type_name: ext_name.to_owned(),
                }),
            };
            if type_.def_location() == &loc::SchemaDefLocation::GraphQLBuiltIn {
                return Err(SchemaBuildError::ExtensionOfBuiltinType {
                    extension_loc,
                    type_name: ext_name.to_owned(),
                });
            }

            match (type_, &ext) {
                (GraphQLType::Enum(enum_type), TypeExtension::Enum(ext)) =>
                    enum_type.extend_from_sdl(file, ext),
                (GraphQLType::InputObject(input_obj_type), TypeExtension::InputObject(ext)) =>
                    input_obj_type.extend_from_sdl(file, ext),
                (GraphQLType::Interface(iface_type), TypeExtension::Interface(ext)) =>
                    iface_type.0.extend_from_sdl(
                        file,
                        ext.position,
                        &ext.implements_interfaces,
                        &ext.directives,
                        &ext.fields,
                    ),
                (GraphQLType::Object(obj_type), TypeExtension::Object(ext)) =>
                    obj_type.0.extend_from_sdl(
                        file,
                        ext.position,
                        &ext.implements_interfaces,
                        &ext.directives,
                        &ext.fields,
                    ),
                (GraphQLType::Scalar(scalar_type), TypeExtension::Scalar(ext)) =>
                    scalar_type.extend_from_sdl(file, ext),
                (GraphQLType::Union(union_type), TypeExtension::Union(ext)) =>
                    union_type.extend_from_sdl(file, ext),
                (type_, _) => return Err(SchemaBuildError::InvalidExtensionType {
                    extension_kind: ext_kind,
                    extension_loc,
                    type_kind: type_.kind(),
                    type_name: ext_name.to_owned(),
                }),
            }
        }
        Ok(())
    }

    fn check_names(&self) -> Result<()> {
        for type_ in self.types.values() {
            let fields = match type_ {
                GraphQLType::Enum(enum_type) if enum_type.values().is_empty() =>
                    return Err(SchemaBuildError::EnumWithNoVariants {
                        location: enum_type.def_location().to_owned(),
                        type_name: enum_type.name().to_string(),
                    }),
                GraphQLType::Object(obj_type) => obj_type.fields(),
                GraphQLType::Interface(iface_type) => iface_type.fields(),
                _ => continue,
            };
            for (field_name, field) in fields {
                if field_name.starts_with("__") {
                    return Err(SchemaBuildError::InvalidDunderPrefixedFieldName {
                        def_location: field.def_location().to_owned(),
                        field_name: field_name.to_owned(),
                        type_name: type_.name().to_string(),
                    });
                }
                if let Some(param_name) = field.parameters().keys()
                    .find(|param_name| param_name.starts_with("__")) {
                    return Err(SchemaBuildError::InvalidDunderPrefixedParamName {
                        def_location: field.def_location().to_owned(),
                        field_name: field_name.to_owned(),
                        param_name: param_name.to_owned(),
                        type_name: type_.name().to_string(),
                    });
                }
            }

            if let GraphQLType::Interface(iface_type) = type_ {
                if iface_type.interface_names().contains(&iface_type.name()) {
                    return Err(SchemaBuildError::InvalidSelfImplementingInterface {
                        def_location: iface_type.def_location().to_owned(),
                        interface_name: iface_type.name().to_string(),
                    });
                }
            }
        }
        Ok(())
    }

    fn default_root_type(
        types: &IndexMap<String, GraphQLType>,
        type_name: &str,
    ) -> Option<NamedTypeDefLocation> {
        match types.get(type_name) {
            Some(GraphQLType::Object(obj_type)) => Some(NamedTypeDefLocation {
                def_location: obj_type.def_location().clone(),
                type_name: type_name.to_string(),
            }),
            _ => None,
        }
    }

    fn inject_missing_builtin_directives(&mut self) {
        for directive in Directive::builtins() {
            if !self.directive_defs.contains_key(directive.name()) {
                self.directive_defs.insert(directive.name().to_string(), directive);
            }
        }
    }

    fn inject_typename_fields(&mut self) {
        for type_ in self.types.values_mut() {
            match type_ {
                GraphQLType::Interface(iface_type) =>
                    iface_type.0.add_field(Field::typename_meta_field()),
                GraphQLType::Object(obj_type) =>
                    obj_type.0.add_field(Field::typename_meta_field()),
                _ => (),
            }
        }
    }

    fn insert_directive(&mut self, directive: Directive) -> Result<()> {
        if builtin_directive_names().contains(directive.name()) {
            return Err(SchemaBuildError::RedefinitionOfBuiltinDirective {
                directive_name: directive.name().to_string(),
                location: directive.def_location().to_owned(),
            });
        }

        if directive.name().starts_with("__") {
            return Err(SchemaBuildError::InvalidDunderPrefixedDirectiveName {
                def_location: directive.def_location().to_owned(),
                directive_name: directive.name().to_string(),
            });
        }

        if let Some(existing) = self.directive_defs.get(directive.name()) {
            return Err(SchemaBuildError::DuplicateDirectiveDefinition {
                directive_name: directive.name().to_string(),
                location1: existing.def_location().to_owned(),
                location2: directive.def_location().to_owned(),
            });
        }

        self.directive_defs.insert(directive.name().to_string(), directive);
        Ok(())
    }

    fn insert_type(&mut self, type_: GraphQLType) -> Result<()> {
        let type_name = type_.name().to_string();
        if type_name.starts_with("__") {
            return Err(SchemaBuildError::InvalidDunderPrefixedTypeName {
                def_location: type_.def_location().to_owned(),
                type_name,
            });
        }

        if let Some(existing) = self.types.get(type_name.as_str()) {
            if existing.def_location() == &loc::SchemaDefLocation::GraphQLBuiltIn {
                return Err(SchemaBuildError::RedefinitionOfBuiltinType {
                    location: type_.def_location().to_owned(),
                    type_name,
                });
            }
            return Err(SchemaBuildError::DuplicateTypeDefinition {
                def1: existing.def_location().to_owned(),
                def2: type_.def_location().to_owned(),
                type_name,
            });
        }

        self.types.insert(type_name, type_);
        Ok(())
    }

    fn set_root_operation_type(
        &mut self,
        operation: OperationType,
        typedef_loc: NamedTypeDefLocation,
    ) -> Result<()> {
        let slot = match operation {
            OperationType::Query => &mut self.query_type,
            OperationType::Mutation => &mut self.mutation_type,
            OperationType::Subscription => &mut self.subscription_type,
        };
        if let Some(existing_typedef_loc) = slot {
            return Err(SchemaBuildError::DuplicateOperationDefinition {
                operation,
                location1: existing_typedef_loc.clone(),
                location2: typedef_loc,
            });
        }
        *slot = Some(typedef_loc);
        Ok(())
    }

    fn validate_types(&self) -> Vec<TypeValidationError> {
        let mut errors = vec![];
        for type_ in self.types.values() {
            match type_ {
                GraphQLType::InputObject(input_obj_type) => errors.append(
                    &mut InputObjectTypeValidator::new(input_obj_type, &self.types).validate(),
                ),
                GraphQLType::Interface(iface_type) => errors.append(
                    &mut ObjectOrInterfaceTypeValidator::new(&iface_type.0, &self.types)
                        .validate(&mut HashSet::new()),
                ),
                GraphQLType::Object(obj_type) => errors.append(
                    &mut ObjectOrInterfaceTypeValidator::new(&obj_type.0, &self.types)
                        .validate(&mut HashSet::new()),
                ),
                GraphQLType::Union(union_type) => errors.append(
                    &mut UnionTypeValidator::new(union_type, &self.types).validate(),
                ),
                GraphQLType::Enum(_) | GraphQLType::Scalar(_) => (),
            }
        }
        errors
    }

    fn visit_ast_def(
        &mut self,
        file_path: &Path,
        def: graphql_parser::schema::Definition<'static, String>,
    ) -> Result<()> {
        use graphql_parser::schema::Definition;
        match def {
            Definition::SchemaDefinition(schema_def) =>
                self.visit_ast_schemablock_def(file_path, schema_def),
            Definition::TypeDefinition(type_def) =>
                self.visit_ast_type_def(file_path, type_def),
            Definition::TypeExtension(ext) => {
                self.pending_extensions.push(PendingExtension {
                    ext,
                    file: file_path.to_path_buf(),
                });
                Ok(())
            },
            Definition::DirectiveDefinition(directive_def) =>
                self.insert_directive(Directive::from_sdl(Some(file_path), &directive_def)),
        }
    }

    fn visit_ast_schemablock_def(
        &mut self,
        file_path: &Path,
        schema_def: graphql_parser::schema::SchemaDefinition<'static, String>,
    ) -> Result<()> {
        let root_type_names = [
            (OperationType::Query, schema_def.query),
            (OperationType::Mutation, schema_def.mutation),
            (OperationType::Subscription, schema_def.subscription),
        ];
        for (operation, type_name) in root_type_names {
            if let Some(type_name) = type_name {
                self.set_root_operation_type(operation, NamedTypeDefLocation::from_pos(
                    type_name,
                    file_path,
                    schema_def.position,
                ))?;
            }
        }
        Ok(())
    }

    fn visit_ast_type_def(
        &mut self,
        file_path: &Path,
        type_def: graphql_parser::schema::TypeDefinition<'static, String>,
    ) -> Result<()> {
        use graphql_parser::schema::TypeDefinition;
        let file = Some(file_path);
        let type_ = match &type_def {
            TypeDefinition::Enum(def) =>
                GraphQLType::Enum(EnumType::from_sdl(file, def)),
            TypeDefinition::InputObject(def) =>
                GraphQLType::InputObject(InputObjectType::from_sdl(file, def)),
            TypeDefinition::Interface(def) =>
                GraphQLType::Interface(InterfaceType::from_sdl(file, def)),
            TypeDefinition::Object(def) =>
                GraphQLType::Object(ObjectType::from_sdl(file, def)),
            TypeDefinition::Scalar(def) =>
                GraphQLType::Scalar(ScalarType::from_sdl(file, def)),
            TypeDefinition::Union(def) =>
                GraphQLType::Union(UnionType::from_sdl(file, def)),
        };
        self.insert_type(type_)
    }
}
impl Default for SchemaBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum SchemaBuildError {
    #[error("Multiple directives were defined with the name `@{directive_name}`")]
    DuplicateDirectiveDefinition {
        directive_name: String,
        location1: loc::SchemaDefLocation,
        location2: loc::SchemaDefLocation,
    },

    #[error("The {operation} root operation type was defined more than once")]
    DuplicateOperationDefinition {
        operation: OperationType,
        location1: NamedTypeDefLocation,
        location2: NamedTypeDefLocation,
    },

    #[error("Multiple GraphQL types with the name `{type_name}` were defined")]
    DuplicateTypeDefinition {
        type_name: String,
        def1: loc::SchemaDefLocation,
        def2: loc::SchemaDefLocation,
    },

    #[error("Enum types must define one or more unique variants")]
    EnumWithNoVariants {
        type_name: String,
        location: loc::SchemaDefLocation,
    },

    #[error("The built-in `{type_name}` type can not be extended")]
    ExtensionOfBuiltinType {
        type_name: String,
        extension_loc: loc::SchemaDefLocation,
    },

    #[error("Attempted to extend the `{type_name}` type, which is not defined")]
    ExtensionOfUndefinedType {
        type_name: String,
        extension_loc: loc::SchemaDefLocation,
    },

    #[error(
        "Attempted to extend the {} type `{type_name}` with a {} type \
        extension",
        type_kind.name(),
        extension_kind.name(),
    )]
    InvalidExtensionType {
        extension_kind: GraphQLTypeKind,
        extension_loc: loc::SchemaDefLocation,
        type_kind: GraphQLTypeKind,
        type_name: String,
    },

    #[error("Custom directive names must not start with `__`")]
    InvalidDunderPrefixedDirectiveName {
        def_location: loc::SchemaDefLocation,
        directive_name: String,
    },

    #[error("Field names must not start with `__`")]
    InvalidDunderPrefixedFieldName {
        def_location: loc::SchemaDefLocation,
        field_name: String,
        type_name: String,
    },

    #[error("Parameter names must not start with `__`")]
    InvalidDunderPrefixedParamName {
        def_location: loc::SchemaDefLocation,
        field_name: String,
        param_name: String,
        type_name: String,
    },

    #[error("Type names must not start with `__`")]
    InvalidDunderPrefixedTypeName {
        def_location: loc::SchemaDefLocation,
        type_name: String,
    },

    #[error(
        "Interface types may not declare that they implement themselves: The \
        `{interface_name}` interface does just that"
    )]
    InvalidSelfImplementingInterface {
        def_location: loc::SchemaDefLocation,
        interface_name: String,
    },

    #[error("Attempted to build a schema that has no Query operation type defined")]
    NoQueryOperationTypeDefined,

    #[error(
        "The {operation} root operation type must be an object type, but \
        `{type_name}` is a {} type",
        type_kind.name(),
    )]
    NonObjectRootOperationType {
        def_location: loc::SchemaDefLocation,
        operation: OperationType,
        type_kind: GraphQLTypeKind,
        type_name: String,
    },

    #[error(
        "The {operation1} and {operation2} root operation are defined with \
        the same GraphQL type, but this is not allowed in GraphQL. All root \
        operations must be defined with different types."
    )]
    NonUniqueOperationTypes {
        reused_type_name: String,
        operation1: OperationType,
        operation1_loc: loc::SchemaDefLocation,
        operation2: OperationType,
        operation2_loc: loc::SchemaDefLocation
    },

    #[error("Error parsing schema string in {}: {err}", file.display())]
    ParseError {
        file: PathBuf,
        err: String,
    },

    #[error("Attempted to redefine the builtin `@{directive_name}` directive")]
    RedefinitionOfBuiltinDirective {
        directive_name: String,
        location: loc::SchemaDefLocation,
    },

    #[error("Attempted to redefine the builtin `{type_name}` type")]
    RedefinitionOfBuiltinType {
        location: loc::SchemaDefLocation,
        type_name: String,
    },

    #[error("Failure while trying to read schema file {}: {err}", file.display())]
    SchemaFileReadError {
        err: String,
        file: PathBuf,
    },

    #[error(
        "Encountered the following type-validation errors while building the \
        schema:\n\n{}",
        errors.iter()
            .map(|s| format!("  * {s}"))
            .collect::<Vec<_>>()
            .join("\n"),
    )]
    TypeValidationErrors {
        errors: Vec<TypeValidationError>,
    },

    #[error(
        "The {operation} root operation type is declared as `{type_name}`, but \
        no type with that name is defined"
    )]
    UndefinedRootOperationType {
        def_location: loc::SchemaDefLocation,
        operation: OperationType,
        type_name: String,
    },
}

/// Represents the file location of a given type's definition in the schema.
#[derive(Clone, Debug, PartialEq)]
pub struct NamedTypeDefLocation {
    pub def_location: loc::SchemaDefLocation,
    pub type_name: String,
}
impl NamedTypeDefLocation {
    pub(crate) fn from_pos(
        type_name: String,
        file: &Path,
        pos: graphql_parser::Pos,
    ) -> Self {
        Self {
            def_location: loc::SchemaDefLocation::from_ast_pos(Some(file), pos),
            type_name,
        }
    }
}
