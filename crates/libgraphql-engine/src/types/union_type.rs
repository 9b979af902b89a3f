use crate::loc;
use crate::schema::Schema;
use crate::types::DeprecationState;
use crate::types::DirectiveAnnotation;
use crate::types::GraphQLType;
use crate::types::NamedGraphQLTypeRef;
use indexmap::IndexMap;
use std::path::Path;

/// Represents a
/// [union type](https://spec.graphql.org/October2021/#sec-Unions) defined
/// within some [`Schema`].
#[derive(Clone, Debug, PartialEq)]
pub struct UnionType {
    pub(crate) def_location: loc::SchemaDefLocation,
    pub(super) description: Option<String>,
    pub(crate) directives: Vec<DirectiveAnnotation>,
    pub(crate) members: IndexMap<String, NamedGraphQLTypeRef>,
    pub(crate) name: String,
}
impl UnionType {
    pub fn new<'a>(
        name: &str,
        member_type_names: impl IntoIterator<Item = &'a str>,
    ) -> Self {
        Self {
            def_location: loc::SchemaDefLocation::Programmatic,
            description: None,
            directives: vec![],
            members: member_type_names.into_iter()
                .map(|member_name| (
                    member_name.to_string(),
                    NamedGraphQLTypeRef::new(member_name, loc::SchemaDefLocation::Programmatic),
                ))
                .collect(),
            name: name.to_string(),
        }
    }

    /// The [`SchemaDefLocation`](loc::SchemaDefLocation) indicating where
    /// this [`UnionType`] was defined.
    pub fn def_location(&self) -> &loc::SchemaDefLocation {
        &self.def_location
    }

    /// The [`DeprecationState`] of this [`UnionType`] as indicated by the
    /// presence of a `@deprecated` annotation.
    pub fn deprecation_state(&self) -> DeprecationState<'_> {
        (&self.directives).into()
    }

    /// The list of [`DirectiveAnnotation`]s applied to this [`UnionType`].
    pub fn directives(&self) -> &Vec<DirectiveAnnotation> {
        &self.directives
    }

    /// The description of this [`UnionType`] as defined in the schema
    /// (e.g. in a """-string immediately before the type definition).
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn has_member(&self, type_name: &str) -> bool {
        self.members.contains_key(type_name)
    }

    /// An ordered list of the names of each [`GraphQLType`] defined as a member
    /// of this union.
    ///
    /// The order of this `Vec` retains the same ordering as the order of
    /// members defined on the union type in the schema. Members added from
    /// type extensions follow, in the order the extensions were loaded.
    pub fn member_type_names(&self) -> Vec<&str> {
        self.members.keys()
            .map(|type_name| type_name.as_str())
            .collect()
    }

    /// An ordered list of [`GraphQLType`]s defined as a member of this union.
    pub fn member_types<'schema>(
        &self,
        schema: &'schema Schema,
    ) -> Vec<&'schema GraphQLType> {
        self.members.values()
            .filter_map(|type_ref| type_ref.deref(schema).ok())
            .collect()
    }

    /// The name of this [`UnionType`].
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub(crate) fn from_sdl(
        file: Option<&Path>,
        def: &graphql_parser::schema::UnionType<'_, String>,
    ) -> Self {
        let def_location = loc::SchemaDefLocation::from_ast_pos(file, def.position);
        Self {
            description: def.description.clone(),
            directives: DirectiveAnnotation::from_sdl(file, &def.directives),
            members: def.types.iter()
                .map(|member_name| (
                    member_name.to_owned(),
                    NamedGraphQLTypeRef::new(member_name, def_location.clone()),
                ))
                .collect(),
            name: def.name.to_owned(),
            def_location,
        }
    }

    pub(crate) fn extend_from_sdl(
        &mut self,
        file: Option<&Path>,
        ext: &graphql_parser::schema::UnionTypeExtension<'_, String>,
    ) {
        let ext_location = loc::SchemaDefLocation::from_ast_pos(file, ext.position);
        self.directives.extend(DirectiveAnnotation::from_sdl(file, &ext.directives));
        for member_name in &ext.types {
            self.members.insert(
                member_name.to_owned(),
                NamedGraphQLTypeRef::new(member_name, ext_location.clone()),
            );
        }
    }
}
