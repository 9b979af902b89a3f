use crate::ast;
use crate::ast::OperationType;
use crate::schema::SchemaBuilder;
use crate::traverser::SchemaTraverser;
use crate::types::CoercionError;
use crate::types::Directive;
use crate::types::DirectiveLocation;
use crate::types::Field;
use crate::types::GraphQLType;
use crate::types::NamedGraphQLTypeRef;
use crate::types::ObjectType;
use crate::types::VariableValues;
use crate::types::coerce_literal;
use indexmap::IndexMap;
use thiserror::Error;

/// Represents a fully typechecked and immutable GraphQL schema.
///
/// A [`Schema`] is only ever produced by [`SchemaBuilder::build()`], so every
/// type reference it holds resolves and every root operation type is an
/// [`ObjectType`]. Share it across threads behind an `Arc`.
#[derive(Clone, Debug, PartialEq)]
pub struct Schema {
    pub(crate) directive_defs: IndexMap<String, Directive>,
    pub(crate) query_type: NamedGraphQLTypeRef,
    pub(crate) mutation_type: Option<NamedGraphQLTypeRef>,
    pub(crate) subscription_type: Option<NamedGraphQLTypeRef>,
    pub(crate) types: IndexMap<String, GraphQLType>,
}
impl Schema {
    /// Returns an [`IndexMap<String, Directive>`] containing all directives
    /// defined within this [`Schema`].
    ///
    /// [^note] This map includes both directives defined while building this
    /// [`Schema`] as well as implicitly-defined, built-in directives like
    /// `@deprecated`.
    pub fn all_directives(&self) -> &IndexMap<String, Directive> {
        &self.directive_defs
    }

    /// Returns an [`IndexMap<String, GraphQLType>`] containing all types
    /// defined within this [`Schema`].
    ///
    /// [^note] This map includes both types defined while building this
    /// [`Schema`] as well as implicitly-defined, built-in scalars like `Int`.
    pub fn all_types(&self) -> &IndexMap<String, GraphQLType> {
        &self.types
    }

    /// Helper function that just delegates to [`SchemaBuilder::new()`].
    pub fn builder() -> SchemaBuilder {
        SchemaBuilder::new()
    }

    /// Checks a usage of a directive (e.g. `@include(if: $flag)` on a field)
    /// against the directive's definition: the directive must exist, be
    /// allowed at `location`, receive only declared arguments with values of
    /// the declared types, and receive every required argument.
    ///
    /// `arguments` are [`Argument`](ast::Argument) nodes. Variables in
    /// argument values are assumed to hold valid values.
    pub fn check_directive_usage(
        &self,
        directive_name: &str,
        location: DirectiveLocation,
        arguments: &[ast::Node],
    ) -> Vec<DirectiveUsageError> {
        let directive = match self.directive_defs.get(directive_name) {
            Some(directive) => directive,
            None => return vec![DirectiveUsageError::UnknownDirective {
                directive_name: directive_name.to_string(),
            }],
        };

        let mut errors = vec![];
        if !directive.locations().contains(&location) {
            errors.push(DirectiveUsageError::MisplacedDirective {
                directive_name: directive_name.to_string(),
                location,
            });
        }

        let provided_args: IndexMap<&str, &ast::Node> = arguments.iter()
            .filter_map(|node| node.as_argument())
            .map(|arg| (arg.name.as_str(), arg.value.as_ref()))
            .collect();
        for (arg_name, arg_value) in &provided_args {
            let param = match directive.parameters().get(*arg_name) {
                Some(param) => param,
                None => {
                    errors.push(DirectiveUsageError::UnknownArgument {
                        argument_name: arg_name.to_string(),
                        directive_name: directive_name.to_string(),
                    });
                    continue;
                },
            };
            if let Err(err) = coerce_literal(
                self,
                arg_value,
                param.type_annotation(),
                VariableValues::AssumeValid,
            ) {
                errors.push(DirectiveUsageError::InvalidArgumentValue {
                    argument_name: arg_name.to_string(),
                    directive_name: directive_name.to_string(),
                    err,
                });
            }
        }

        for (param_name, param) in directive.parameters() {
            if param.is_required() && !provided_args.contains_key(param_name.as_str()) {
                errors.push(DirectiveUsageError::MissingRequiredArgument {
                    argument_name: param_name.to_string(),
                    directive_name: directive_name.to_string(),
                });
            }
        }

        errors
    }

    pub fn directive(&self, name: &str) -> Option<&Directive> {
        self.directive_defs.get(name)
    }

    /// Looks up a field selectable on `parent_type`, including the
    /// `__typename` meta-field every composite type (unions included)
    /// supports.
    pub fn field_definition<'schema>(
        &'schema self,
        parent_type: &'schema GraphQLType,
        field_name: &str,
    ) -> Option<&'schema Field> {
        match parent_type {
            GraphQLType::Object(obj_type) => obj_type.field(field_name),
            GraphQLType::Interface(iface_type) => iface_type.field(field_name),
            GraphQLType::Union(_) if field_name == "__typename" =>
                Some(typename_meta_field()),
            _ => None,
        }
    }

    pub fn get_type(&self, name: &str) -> Option<&GraphQLType> {
        self.types.get(name)
    }

    /// Indicates whether `object_type` is a possible runtime type of
    /// `abstract_type`: a member of the union, an implementor of the
    /// interface, or the object type itself.
    pub fn is_possible_type(
        &self,
        abstract_type: &GraphQLType,
        object_type: &ObjectType,
    ) -> bool {
        match abstract_type {
            GraphQLType::Interface(iface_type) =>
                object_type.interface_names().contains(&iface_type.name()),
            GraphQLType::Union(union_type) =>
                union_type.has_member(object_type.name()),
            GraphQLType::Object(obj_type) =>
                obj_type.name() == object_type.name(),
            _ => false,
        }
    }

    /// Returns this [`Schema`]'s Mutation[^note] root operation type (if one was
    /// defined).
    ///
    /// [^note] It is ***strongly*** recommended that you use
    /// [`Schema::mutation_type()`] in favor of looking for an
    /// [`ObjectType`] whose name is `"Mutation"`.
    /// GraphQL [defines an object type named "Mutation" as the _default_
    /// Mutation type ](https://spec.graphql.org/October2021/#sec-Root-Operation-Types.Default-Root-Operation-Type-Names),
    /// but it is also [possible to override this default
    /// ](https://spec.graphql.org/October2021/#RootOperationTypeDefinition) and
    /// use a differently-named [`ObjectType`] instead.
    pub fn mutation_type(&self) -> Option<&ObjectType> {
        self.mutation_type.as_ref().map(|named_ref| self.deref_root_type(named_ref))
    }

    /// All object types that could be the runtime type of `abstract_type`, in
    /// schema definition order.
    pub fn possible_types(&self, abstract_type: &GraphQLType) -> Vec<&ObjectType> {
        self.types.values()
            .filter_map(|type_| type_.as_object())
            .filter(|obj_type| self.is_possible_type(abstract_type, obj_type))
            .collect()
    }

    /// Returns this [`Schema`]'s Query root operation type.
    ///
    /// As with [`Schema::mutation_type()`], this factors in any `schema { .. }`
    /// override of the default `"Query"` name.
    pub fn query_type(&self) -> &ObjectType {
        self.deref_root_type(&self.query_type)
    }

    /// Every type reachable from the root operation types through fields,
    /// parameters, implemented interfaces, union members, and input fields.
    /// Each type appears once, in the order it was first reached.
    pub fn reachable_types(&self) -> Vec<&GraphQLType> {
        let roots: Vec<&GraphQLType> = [
            Some(&self.query_type),
            self.mutation_type.as_ref(),
            self.subscription_type.as_ref(),
        ].into_iter()
            .flatten()
            .filter_map(|named_ref| named_ref.deref(self).ok())
            .collect();
        SchemaTraverser::new(self).reachable_from(roots)
    }

    /// The root type for operations of the given [`OperationType`], if the
    /// schema defines one.
    pub fn root_operation_type(&self, operation: OperationType) -> Option<&ObjectType> {
        match operation {
            OperationType::Query => Some(self.query_type()),
            OperationType::Mutation => self.mutation_type(),
            OperationType::Subscription => self.subscription_type(),
        }
    }

    /// Returns this [`Schema`]'s Subscription root operation type (if one was
    /// defined).
    pub fn subscription_type(&self) -> Option<&ObjectType> {
        self.subscription_type.as_ref().map(|named_ref| self.deref_root_type(named_ref))
    }

    fn deref_root_type(&self, named_ref: &NamedGraphQLTypeRef) -> &ObjectType {
        named_ref.deref(self)
            .ok()
            .and_then(|type_| type_.as_object())
            .expect("root operation types are checked to be object types at build time")
    }
}

/// The `__typename: String!` meta-field.
fn typename_meta_field() -> &'static Field {
    static FIELD: std::sync::OnceLock<Field> = std::sync::OnceLock::new();
    FIELD.get_or_init(Field::typename_meta_field)
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum DirectiveUsageError {
    #[error(
        "Invalid value for the `{argument_name}` argument of \
        `@{directive_name}`: {err}"
    )]
    InvalidArgumentValue {
        argument_name: String,
        directive_name: String,
        err: CoercionError,
    },

    #[error("The `@{directive_name}` directive may not be used on {location}")]
    MisplacedDirective {
        directive_name: String,
        location: DirectiveLocation,
    },

    #[error(
        "The `@{directive_name}` directive requires the `{argument_name}` \
        argument, but it was not provided"
    )]
    MissingRequiredArgument {
        argument_name: String,
        directive_name: String,
    },

    #[error("The `@{directive_name}` directive has no `{argument_name}` argument")]
    UnknownArgument {
        argument_name: String,
        directive_name: String,
    },

    #[error("Unknown directive `@{directive_name}`")]
    UnknownDirective {
        directive_name: String,
    },
}
