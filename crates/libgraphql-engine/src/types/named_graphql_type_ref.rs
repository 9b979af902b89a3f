use crate::named_ref::NamedRef;
use crate::schema::Schema;
use crate::types::GraphQLType;

/// A by-name reference to some [`GraphQLType`] registered in a [`Schema`].
pub type NamedGraphQLTypeRef = NamedRef<Schema, GraphQLType>;
