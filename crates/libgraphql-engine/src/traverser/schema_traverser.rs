use crate::schema::Schema;
use crate::traverser::TraversalControl;
use crate::traverser::Traverser;
use crate::traverser::TraverserContext;
use crate::traverser::TraverserResult;
use crate::traverser::TraverserVisitor;
use crate::types::Field;
use crate::types::GraphQLType;
use indexmap::IndexMap;
use std::convert::Infallible;

/// Walks the graph of named types in a [`Schema`].
///
/// A type's children are the types it references: field types and field
/// parameter types (objects and interfaces), implemented interfaces, union
/// members, and input field types. Types reference each other by name, so the
/// graph may contain cycles; each type is entered at most once.
pub struct SchemaTraverser<'a> {
    schema: &'a Schema,
}
impl<'a> SchemaTraverser<'a> {
    pub fn new(schema: &'a Schema) -> Self {
        Self { schema }
    }

    /// The named types referenced directly by `type_`, in definition order.
    pub fn referenced_types(&self, type_: &'a GraphQLType) -> Vec<&'a GraphQLType> {
        let schema = self.schema;
        match type_ {
            GraphQLType::Object(obj_type) => obj_type.interface_names()
                .into_iter()
                .map(|iface_name| schema.get_type(iface_name))
                .chain(field_types(schema, obj_type.fields()))
                .flatten()
                .collect(),

            GraphQLType::Interface(iface_type) => iface_type.interface_names()
                .into_iter()
                .map(|iface_name| schema.get_type(iface_name))
                .chain(field_types(schema, iface_type.fields()))
                .flatten()
                .collect(),

            GraphQLType::Union(union_type) => union_type.member_types(schema),

            GraphQLType::InputObject(input_obj_type) => input_obj_type.fields()
                .values()
                .filter_map(|input_field| input_field.type_annotation().innermost_type(schema))
                .collect(),

            GraphQLType::Enum(_) | GraphQLType::Scalar(_) => vec![],
        }
    }

    pub fn traverse<A, V>(
        &self,
        roots: impl IntoIterator<Item = &'a GraphQLType>,
        accumulator: A,
        visitor: &mut V,
    ) -> Result<TraverserResult<A>, V::Error>
    where
        V: TraverserVisitor<'a, GraphQLType, A>,
    {
        Traverser::depth_first(|type_: &'a GraphQLType| self.referenced_types(type_))
            .with_visited_tracking()
            .traverse(roots, accumulator, visitor)
    }

    /// Every type reachable from `roots` (roots included), in the order each
    /// was first entered.
    pub fn reachable_from(
        &self,
        roots: impl IntoIterator<Item = &'a GraphQLType>,
    ) -> Vec<&'a GraphQLType> {
        match self.traverse(roots, vec![], &mut CollectTypes) {
            Ok(result) => result.accumulator,
            Err(never) => match never {},
        }
    }
}

fn field_types<'a>(
    schema: &'a Schema,
    fields: &'a IndexMap<String, Field>,
) -> impl Iterator<Item = Option<&'a GraphQLType>> {
    fields.values().flat_map(move |field| {
        std::iter::once(field.type_annotation().innermost_type(schema))
            .chain(field.parameters().values().map(move |param| {
                param.type_annotation().innermost_type(schema)
            }))
    })
}

struct CollectTypes;
impl<'a> TraverserVisitor<'a, GraphQLType, Vec<&'a GraphQLType>> for CollectTypes {
    type Error = Infallible;

    fn enter(
        &mut self,
        type_: &'a GraphQLType,
        ctx: &mut TraverserContext<'a, GraphQLType, Vec<&'a GraphQLType>>,
    ) -> Result<TraversalControl, Self::Error> {
        ctx.accumulator_mut().push(type_);
        Ok(TraversalControl::Continue)
    }
}
