use crate::schema::TypeValidationError;
use crate::types::GraphQLType;
use crate::types::InputObjectType;
use crate::types::TypeAnnotation;
use indexmap::IndexMap;

/// Checks the fields of one input object type: each must reference a defined
/// input type, and no chain of non-null fields may lead back to the type
/// itself (such a value could never be written down).
pub(crate) struct InputObjectTypeValidator<'a> {
    errors: Vec<TypeValidationError>,
    type_: &'a InputObjectType,
    types_map: &'a IndexMap<String, GraphQLType>,
}
impl<'a> InputObjectTypeValidator<'a> {
    pub fn new(
        type_: &'a InputObjectType,
        types_map: &'a IndexMap<String, GraphQLType>,
    ) -> Self {
        Self {
            errors: vec![],
            type_,
            types_map,
        }
    }

    pub fn validate(mut self) -> Vec<TypeValidationError> {
        self.check_field_types();
        let mut visiting = vec![self.type_.name()];
        self.find_unbroken_cycles(self.type_, &mut vec![], &mut visiting);
        self.errors
    }

    /// Input object fields can not be declared with an output type.
    ///
    /// https://spec.graphql.org/October2021/#sel-IAHhBXDDBFCAACEB4iG
    fn check_field_types(&mut self) {
        let type_ = self.type_;
        for (field_name, field) in type_.fields() {
            let annotation = field.type_annotation();
            let type_name = annotation.innermost_named_type_annotation().graphql_type_name();
            match self.types_map.get(type_name) {
                Some(innermost) if !innermost.is_input_type() => self.errors.push(
                    TypeValidationError::InvalidInputFieldWithOutputType {
                        def_location: annotation.ref_location().to_owned(),
                        field_name: field_name.to_owned(),
                        invalid_type_name: type_name.to_string(),
                        parent_type_name: type_.name().to_owned(),
                    },
                ),
                Some(_) => (),
                None => self.errors.push(TypeValidationError::UndefinedTypeName {
                    ref_location: annotation.ref_location().to_owned(),
                    undefined_type_name: type_name.to_string(),
                }),
            }
        }
    }

    /// Follows every non-null field depth-first from `current`. Only cycles
    /// through the validated type are reported here; any other cycle is
    /// reported when one of its own members is validated.
    fn find_unbroken_cycles(
        &mut self,
        current: &'a InputObjectType,
        path: &mut Vec<String>,
        visiting: &mut Vec<&'a str>,
    ) {
        let types_map = self.types_map;
        for (field_name, field) in current.fields() {
            let annotation = field.type_annotation();
            if is_cycle_breaking(annotation) {
                continue;
            }

            let type_name = annotation.innermost_named_type_annotation().graphql_type_name();
            path.push(format!("{}.{field_name}", current.name()));
            if type_name == self.type_.name() {
                self.errors.push(TypeValidationError::CircularInputFieldChain {
                    circular_field_path: path.clone(),
                });
            } else if !visiting.contains(&type_name)
                && let Some(GraphQLType::InputObject(next)) = types_map.get(type_name) {
                visiting.push(next.name());
                self.find_unbroken_cycles(next, path, visiting);
                visiting.pop();
            }
            path.pop();
        }
    }
}

/// Whether a value of this type may be omitted somewhere along its wrappers.
fn is_cycle_breaking(annotation: &TypeAnnotation) -> bool {
    match annotation {
        TypeAnnotation::List(list) =>
            list.nullable() || is_cycle_breaking(list.inner_type_annotation()),
        TypeAnnotation::Named(named) => named.nullable(),
    }
}
