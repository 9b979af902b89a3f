use crate::ast;
use crate::ast::NodeKind;
use crate::loc;
use crate::schema::Schema;
use crate::types::GraphQLType;
use crate::types::ListTypeAnnotation;
use crate::types::NamedGraphQLTypeRef;
use crate::types::NamedTypeAnnotation;
use indexmap::IndexMap;

/// Represents the annotated type for a [`Field`](crate::types::Field),
/// [`Parameter`](crate::types::Parameter), [`InputField`](crate::types::InputField),
/// or operation variable.
///
/// Non-null wrapping is a flag on each level rather than a wrapper of its
/// own, so a non-null type can never wrap another non-null type.
#[derive(Clone, Debug, PartialEq)]
pub enum TypeAnnotation {
    List(ListTypeAnnotation),
    Named(NamedTypeAnnotation),
}
impl TypeAnnotation {
    pub fn named(type_name: &str, nullable: bool) -> Self {
        Self::Named(NamedTypeAnnotation {
            nullable,
            type_ref: NamedGraphQLTypeRef::new(
                type_name,
                loc::SchemaDefLocation::Programmatic,
            ),
        })
    }

    pub fn list(inner: TypeAnnotation, nullable: bool) -> Self {
        Self::List(ListTypeAnnotation {
            inner_type_ref: Box::new(inner),
            nullable,
            ref_location: loc::SchemaDefLocation::Programmatic,
        })
    }

    /// Unwrap the [`ListTypeAnnotation`] if this annotation is one.
    pub fn as_list_annotation(&self) -> Option<&ListTypeAnnotation> {
        if let Self::List(annot) = self {
            Some(annot)
        } else {
            None
        }
    }

    /// Unwrap the [`NamedTypeAnnotation`] if this annotation is one.
    pub fn as_named_annotation(&self) -> Option<&NamedTypeAnnotation> {
        if let Self::Named(annot) = self {
            Some(annot)
        } else {
            None
        }
    }

    /// Builds a [`TypeAnnotation`] from a [`TypeName`](ast::TypeName),
    /// [`ListType`](ast::ListType), or [`NonNullType`](ast::NonNullType)
    /// node. Returns `None` for any other kind of node.
    pub fn from_ast_node(node: &ast::Node) -> Option<Self> {
        let ref_location = match node.location() {
            Some(src_loc) => loc::SchemaDefLocation::Schema(src_loc.clone()),
            None => loc::SchemaDefLocation::Programmatic,
        };
        Self::from_ast_node_impl(&ref_location, node, /* nullable = */ true)
    }

    fn from_ast_node_impl(
        ref_location: &loc::SchemaDefLocation,
        node: &ast::Node,
        nullable: bool,
    ) -> Option<Self> {
        match node.kind() {
            NodeKind::TypeName(type_name) => Some(Self::Named(NamedTypeAnnotation {
                nullable,
                type_ref: NamedGraphQLTypeRef::new(&type_name.name, ref_location.clone()),
            })),
            NodeKind::ListType(list) => Some(Self::List(ListTypeAnnotation {
                inner_type_ref: Box::new(
                    Self::from_ast_node_impl(ref_location, &list.inner, true)?,
                ),
                nullable,
                ref_location: ref_location.clone(),
            })),
            NodeKind::NonNullType(non_null) =>
                Self::from_ast_node_impl(ref_location, &non_null.inner, false),
            _ => None,
        }
    }

    pub(crate) fn from_sdl_type(
        ref_location: &loc::SchemaDefLocation,
        sdl_type: &graphql_parser::schema::Type<'_, String>,
    ) -> Self {
        Self::from_sdl_type_impl(ref_location, sdl_type, /* nullable = */ true)
    }

    fn from_sdl_type_impl(
        ref_location: &loc::SchemaDefLocation,
        sdl_type: &graphql_parser::schema::Type<'_, String>,
        nullable: bool,
    ) -> Self {
        use graphql_parser::schema::Type;
        match sdl_type {
            Type::ListType(inner) => Self::List(ListTypeAnnotation {
                inner_type_ref: Box::new(
                    Self::from_sdl_type_impl(ref_location, inner, true),
                ),
                nullable,
                ref_location: ref_location.clone(),
            }),

            Type::NamedType(name) => Self::Named(NamedTypeAnnotation {
                nullable,
                type_ref: NamedGraphQLTypeRef::new(name, ref_location.clone()),
            }),

            Type::NonNullType(inner) =>
                Self::from_sdl_type_impl(ref_location, inner, false),
        }
    }

    /// Recursively unwrap this [`TypeAnnotation`] and return the inner-most
    /// [`NamedTypeAnnotation`] from it.
    pub fn innermost_named_type_annotation(&self) -> &NamedTypeAnnotation {
        match self {
            TypeAnnotation::List(ListTypeAnnotation { inner_type_ref, .. })
                => inner_type_ref.innermost_named_type_annotation(),
            TypeAnnotation::Named(named_annot)
                => named_annot,
        }
    }

    /// The [`GraphQLType`] beneath every list and non-null wrapper, if the
    /// schema defines it.
    pub fn innermost_type<'schema>(
        &self,
        schema: &'schema Schema,
    ) -> Option<&'schema GraphQLType> {
        schema.get_type(self.innermost_named_type_annotation().graphql_type_name())
    }

    /// Check if two type annotations are definitionally equal.
    ///
    /// Two type annotations are equivalent if they have:
    /// - Same type structure (Named vs List)
    /// - Same nullability at each level
    /// - Same innermost type name
    ///
    /// Source location is ignored.
    pub fn is_equivalent_to(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::List(self_list), Self::List(other_list))
                => self_list.is_equivalent_to(other_list),
            (Self::Named(self_named), Self::Named(other_named))
                => self_named.is_equivalent_to(other_named),
            _ => false,
        }
    }

    pub fn is_list(&self) -> bool {
        matches!(self, Self::List(_))
    }

    /// Indicates if a value of this type can always be used where `other` is
    /// expected (covariant output-type compatibility): non-null may narrow a
    /// nullable type, lists must match lists, and an object may stand in for
    /// an interface or union it belongs to.
    pub fn is_subtype_of(&self, schema: &Schema, other: &Self) -> bool {
        self.is_subtype_of_impl(&schema.types, other)
    }

    pub(crate) fn is_subtype_of_impl(
        &self,
        types_map: &IndexMap<String, GraphQLType>,
        other: &Self,
    ) -> bool {
        if self.nullable() && !other.nullable() {
            return false;
        }
        match (self, other) {
            (Self::List(self_inner), Self::List(other_inner))
                => self_inner.is_subtype_of_impl(types_map, other_inner),
            (Self::Named(self_named), Self::Named(other_named))
                => self_named.is_subtype_of_impl(types_map, other_named),
            (Self::List(_), Self::Named(_)) | (Self::Named(_), Self::List(_))
                => false,
        }
    }

    /// Indicates if this [`TypeAnnotation`] is [nullable or
    /// non-nullable](https://spec.graphql.org/October2021/#sec-Non-Null).
    pub fn nullable(&self) -> bool {
        match self {
            TypeAnnotation::List(ListTypeAnnotation { nullable, .. }) => *nullable,
            TypeAnnotation::Named(NamedTypeAnnotation { nullable, .. }) => *nullable,
        }
    }

    /// The same annotation with its outermost level made nullable.
    pub fn to_nullable(&self) -> Self {
        let mut annot = self.clone();
        match &mut annot {
            Self::List(list) => list.nullable = true,
            Self::Named(named) => named.nullable = true,
        }
        annot
    }

    pub fn ref_location(&self) -> &loc::SchemaDefLocation {
        match self {
            Self::List(annot) => annot.ref_location(),
            Self::Named(annot) => annot.ref_location(),
        }
    }
}
impl std::convert::From<ListTypeAnnotation> for TypeAnnotation {
    fn from(value: ListTypeAnnotation) -> Self {
        Self::List(value)
    }
}
impl std::convert::From<NamedTypeAnnotation> for TypeAnnotation {
    fn from(value: NamedTypeAnnotation) -> Self {
        Self::Named(value)
    }
}
impl std::fmt::Display for TypeAnnotation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::List(list_annot) => write!(
                f,
                "[{}]{}",
                list_annot.inner_type_annotation(),
                if list_annot.nullable() { "" } else { "!" },
            ),

            Self::Named(named_annot) => write!(
                f,
                "{}{}",
                named_annot.graphql_type_name(),
                if named_annot.nullable() { "" } else { "!" },
            ),
        }
    }
}
