use crate::types::GraphQLType;

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum GraphQLTypeKind {
    Enum,
    InputObject,
    Interface,
    Object,
    Scalar,
    Union,
}
impl GraphQLTypeKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Enum => "enum",
            Self::InputObject => "input object",
            Self::Interface => "interface",
            Self::Object => "object",
            Self::Scalar => "scalar",
            Self::Union => "union",
        }
    }
}
impl std::convert::From<&GraphQLType> for GraphQLTypeKind {
    fn from(value: &GraphQLType) -> Self {
        match value {
            GraphQLType::Enum(_) => Self::Enum,
            GraphQLType::InputObject(_) => Self::InputObject,
            GraphQLType::Interface(_) => Self::Interface,
            GraphQLType::Object(_) => Self::Object,
            GraphQLType::Scalar(_) => Self::Scalar,
            GraphQLType::Union(_) => Self::Union,
        }
    }
}
