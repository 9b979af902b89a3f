mod coercing;
mod coercion;
mod deprecation_state;
mod directive;
mod directive_annotation;
mod enum_type;
mod field;
mod graphql_type;
mod graphql_type_kind;
mod input_field;
mod input_object_type;
mod input_object_type_validator;
mod interface_type;
mod list_type_annotation;
mod named_graphql_type_ref;
mod named_type_annotation;
mod object_or_interface_type_data;
mod object_or_interface_type_trait;
mod object_or_interface_type_validator;
mod object_type;
mod parameter;
mod scalar_type;
mod type_annotation;
mod union_type;
mod union_type_validator;

pub use coercing::BooleanCoercing;
pub use coercing::Coercing;
pub use coercing::CoercingError;
pub use coercing::FloatCoercing;
pub use coercing::IdCoercing;
pub use coercing::IntCoercing;
pub use coercing::LiteralPassthroughCoercing;
pub use coercing::StringCoercing;
pub use coercion::CoercionError;
pub use coercion::VariableValues;
pub use coercion::coerce_input_value;
pub use coercion::coerce_literal;
pub(crate) use coercion::is_absent_variable;
pub use coercion::is_valid_literal_value;
pub use deprecation_state::DeprecationState;
pub use directive::Directive;
pub use directive::DirectiveLocation;
pub use directive_annotation::DirectiveAnnotation;
pub use enum_type::EnumType;
pub use enum_type::EnumValue;
pub use field::Field;
pub use graphql_type::GraphQLType;
pub use graphql_type_kind::GraphQLTypeKind;
pub use input_field::InputField;
pub use input_object_type::InputObjectType;
pub(crate) use input_object_type_validator::InputObjectTypeValidator;
pub use interface_type::InterfaceType;
pub use list_type_annotation::ListTypeAnnotation;
pub use named_graphql_type_ref::NamedGraphQLTypeRef;
pub use named_type_annotation::NamedTypeAnnotation;
use object_or_interface_type_data::ObjectOrInterfaceTypeData;
pub use object_or_interface_type_trait::ObjectOrInterfaceTypeTrait;
pub(crate) use object_or_interface_type_validator::ObjectOrInterfaceTypeValidator;
pub use object_type::ObjectType;
pub use parameter::Parameter;
pub use scalar_type::ScalarType;
pub use type_annotation::TypeAnnotation;
pub use union_type::UnionType;
pub(crate) use union_type_validator::UnionTypeValidator;

#[cfg(test)]
mod tests;
