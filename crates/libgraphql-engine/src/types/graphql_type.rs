use crate::loc;
use crate::named_ref::DerefByName;
use crate::named_ref::DerefByNameError;
use crate::schema::Schema;
use crate::types::EnumType;
use crate::types::GraphQLTypeKind;
use crate::types::InputObjectType;
use crate::types::InterfaceType;
use crate::types::ObjectType;
use crate::types::ScalarType;
use crate::types::UnionType;

/// Represents a named GraphQL type defined within a [`Schema`].
///
/// List and non-null wrapping are not types of their own here; they are
/// expressed by [`TypeAnnotation`](crate::types::TypeAnnotation) at each
/// place a type is referenced.
#[derive(Clone, Debug, PartialEq)]
pub enum GraphQLType {
    Enum(EnumType),
    InputObject(InputObjectType),
    Interface(InterfaceType),
    Object(ObjectType),
    Scalar(ScalarType),
    Union(UnionType),
}
impl GraphQLType {
    pub fn as_enum(&self) -> Option<&EnumType> {
        if let Self::Enum(type_) = self { Some(type_) } else { None }
    }

    pub fn as_input_object(&self) -> Option<&InputObjectType> {
        if let Self::InputObject(type_) = self { Some(type_) } else { None }
    }

    pub fn as_interface(&self) -> Option<&InterfaceType> {
        if let Self::Interface(type_) = self { Some(type_) } else { None }
    }

    pub fn as_object(&self) -> Option<&ObjectType> {
        if let Self::Object(type_) = self { Some(type_) } else { None }
    }

    pub fn as_scalar(&self) -> Option<&ScalarType> {
        if let Self::Scalar(type_) = self { Some(type_) } else { None }
    }

    pub fn as_union(&self) -> Option<&UnionType> {
        if let Self::Union(type_) = self { Some(type_) } else { None }
    }

    pub fn def_location(&self) -> &loc::SchemaDefLocation {
        match self {
            Self::Enum(t) => t.def_location(),
            Self::InputObject(t) => t.def_location(),
            Self::Interface(t) => t.def_location(),
            Self::Object(t) => t.def_location(),
            Self::Scalar(t) => t.def_location(),
            Self::Union(t) => t.def_location(),
        }
    }

    pub fn description(&self) -> Option<&str> {
        match self {
            Self::Enum(t) => t.description(),
            Self::InputObject(t) => t.description(),
            Self::Interface(t) => t.description(),
            Self::Object(t) => t.description(),
            Self::Scalar(t) => t.description(),
            Self::Union(t) => t.description(),
        }
    }

    /// Interfaces and unions.
    pub fn is_abstract(&self) -> bool {
        matches!(self, Self::Interface(_) | Self::Union(_))
    }

    /// Types that have a selection set: objects, interfaces, and unions.
    pub fn is_composite(&self) -> bool {
        matches!(self, Self::Interface(_) | Self::Object(_) | Self::Union(_))
    }

    /// Indicates if this type can be used as the type of a variable,
    /// parameter, or input field.
    pub fn is_input_type(&self) -> bool {
        matches!(self, Self::Enum(_) | Self::InputObject(_) | Self::Scalar(_))
    }

    /// Scalars and enums.
    pub fn is_leaf(&self) -> bool {
        matches!(self, Self::Enum(_) | Self::Scalar(_))
    }

    /// Indicates if this type can be used as the type of an output field.
    pub fn is_output_type(&self) -> bool {
        !matches!(self, Self::InputObject(_))
    }

    pub fn kind(&self) -> GraphQLTypeKind {
        self.into()
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Enum(t) => t.name(),
            Self::InputObject(t) => t.name(),
            Self::Interface(t) => t.name(),
            Self::Object(t) => t.name(),
            Self::Scalar(t) => t.name(),
            Self::Union(t) => t.name(),
        }
    }
}
impl DerefByName for GraphQLType {
    type Source = Schema;

    fn deref_name<'a>(
        schema: &'a Schema,
        name: &str,
    ) -> Result<&'a Self, DerefByNameError> {
        schema.types.get(name).ok_or_else(
            || DerefByNameError::DanglingReference(name.to_string()),
        )
    }
}
