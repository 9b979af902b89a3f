use crate::loc;
use crate::schema::Schema;
use crate::types::GraphQLType;
use crate::types::TypeAnnotation;
use indexmap::IndexMap;

#[derive(Clone, Debug, PartialEq)]
pub struct ListTypeAnnotation {
    pub(super) inner_type_ref: Box<TypeAnnotation>,
    pub(super) nullable: bool,
    pub(super) ref_location: loc::SchemaDefLocation,
}
impl ListTypeAnnotation {
    pub fn inner_type_annotation(&self) -> &TypeAnnotation {
        &self.inner_type_ref
    }

    pub fn is_equivalent_to(&self, other: &Self) -> bool {
        self.nullable == other.nullable
            && self.inner_type_ref.is_equivalent_to(&other.inner_type_ref)
    }

    pub fn is_subtype_of(
        &self,
        schema: &Schema,
        other: &Self,
    ) -> bool {
        self.is_subtype_of_impl(&schema.types, other)
    }

    pub(super) fn is_subtype_of_impl(
        &self,
        types_map: &IndexMap<String, GraphQLType>,
        other: &Self,
    ) -> bool {
        (!self.nullable || other.nullable)
            && self.inner_type_ref.is_subtype_of_impl(types_map, &other.inner_type_ref)
    }

    pub fn nullable(&self) -> bool {
        self.nullable
    }

    pub fn ref_location(&self) -> &loc::SchemaDefLocation {
        &self.ref_location
    }
}
