use crate::schema::TypeValidationError;
use crate::types::Field;
use crate::types::GraphQLType;
use crate::types::InterfaceType;
use crate::types::ObjectOrInterfaceTypeData;
use crate::types::TypeAnnotation;
use indexmap::IndexMap;
use std::collections::HashSet;

/// Checks one object or interface type against the interfaces it implements
/// (transitively), and checks that its fields and field parameters reference
/// types of the right kind.
pub(crate) struct ObjectOrInterfaceTypeValidator<'a> {
    errors: Vec<TypeValidationError>,
    type_: &'a ObjectOrInterfaceTypeData,
    types_map: &'a IndexMap<String, GraphQLType>,
}
impl<'a> ObjectOrInterfaceTypeValidator<'a> {
    pub fn new(
        type_: &'a ObjectOrInterfaceTypeData,
        types_map: &'a IndexMap<String, GraphQLType>,
    ) -> Self {
        Self {
            errors: vec![],
            type_,
            types_map,
        }
    }

    /// `verified_interface_impls` is shared across the whole walk of this
    /// type's interface hierarchy so each interface is checked once.
    pub fn validate(
        mut self,
        verified_interface_impls: &mut HashSet<&'a str>,
    ) -> Vec<TypeValidationError> {
        let type_ = self.type_;
        let declared: HashSet<&'a str> =
            type_.interface_names().into_iter().collect();
        self.check_implementations(&declared, &[], verified_interface_impls);

        for (field_name, field) in type_.fields() {
            self.check_field_type(field_name, field);
            self.check_parameter_types(field);
        }
        self.errors
    }

    fn check_implementations(
        &mut self,
        iface_names: &HashSet<&'a str>,
        inheritance_path: &[&'a str],
        verified_interface_impls: &mut HashSet<&'a str>,
    ) {
        let type_ = self.type_;
        for &iface_name in iface_names {
            // Interfaces may implement other interfaces, so the same one can
            // be reached more than once.
            if !verified_interface_impls.insert(iface_name) {
                continue;
            }
            let Some(iface) = self.resolve_interface(iface_name) else {
                continue;
            };

            // https://spec.graphql.org/October2021/#IsValidImplementation()
            let inherited: HashSet<&'a str> =
                iface.interface_names().into_iter().collect();
            let type_ifaces: HashSet<&str> =
                type_.interface_names().iter().copied().collect();
            for missing in inherited.iter().filter(|name| !type_ifaces.contains(*name)) {
                self.errors.push(TypeValidationError::MissingRecursiveInterfaceImplementation {
                    def_location: type_.def_location().to_owned(),
                    inheritance_path: inheritance_path.iter()
                        .map(|name| name.to_string())
                        .collect(),
                    missing_recursive_interface_name: missing.to_string(),
                    type_name: type_.name().to_string(),
                });
            }

            let mut child_path = inheritance_path.to_vec();
            child_path.push(iface_name);
            self.check_implementations(&inherited, &child_path, verified_interface_impls);

            for (field_name, iface_field) in iface.fields() {
                match type_.fields().get(field_name) {
                    Some(type_field) =>
                        self.check_field_implementation(iface_name, iface_field, type_field),
                    None => self.errors.push(TypeValidationError::MissingInterfaceSpecifiedField {
                        def_location: type_.def_location().to_owned(),
                        field_name: field_name.to_string(),
                        interface_name: iface_name.to_string(),
                        type_name: type_.name().to_string(),
                    }),
                }
            }
        }
    }

    fn resolve_interface(&mut self, iface_name: &str) -> Option<&'a InterfaceType> {
        let (type_, types_map) = (self.type_, self.types_map);
        let Some(iface_type) = types_map.get(iface_name) else {
            self.errors.push(TypeValidationError::ImplementsUndefinedInterface {
                def_location: type_.def_location().to_owned(),
                type_name: type_.name().to_string(),
                undefined_interface_name: iface_name.to_string(),
            });
            return None;
        };

        let iface = iface_type.as_interface();
        if iface.is_none() {
            self.errors.push(TypeValidationError::ImplementsNonInterfaceType {
                def_location: type_.def_location().to_owned(),
                non_interface_type_name: iface_type.name().to_string(),
                type_name: type_.name().to_string(),
            });
        }
        iface
    }

    fn check_field_implementation(
        &mut self,
        iface_name: &str,
        iface_field: &Field,
        type_field: &Field,
    ) {
        let type_ = self.type_;
        let type_name = type_.name();
        let field_name = type_field.name();
        let iface_params = iface_field.parameters();
        let type_params = type_field.parameters();

        // Every interface parameter is present with an equivalent type.
        for (param_name, iface_param) in iface_params {
            let Some(type_param) = type_params.get(param_name) else {
                self.errors.push(TypeValidationError::MissingInterfaceSpecifiedFieldParameter {
                    def_location: type_field.def_location().to_owned(),
                    field_name: field_name.to_string(),
                    interface_name: iface_name.to_string(),
                    missing_parameter_name: param_name.to_string(),
                    type_name: type_name.to_string(),
                });
                continue;
            };

            let expected = iface_param.type_annotation();
            let actual = type_param.type_annotation();
            if !actual.is_equivalent_to(expected) {
                self.errors.push(TypeValidationError::InvalidInterfaceSpecifiedFieldParameterType {
                    def_location: type_param.def_location().to_owned(),
                    expected_parameter_type: expected.to_owned(),
                    field_name: field_name.to_string(),
                    interface_name: iface_name.to_string(),
                    invalid_parameter_type: actual.to_owned(),
                    parameter_name: param_name.to_string(),
                    type_name: type_name.to_string(),
                });
            }
        }

        // Extra parameters must be optional.
        //
        // See 2.d at https://spec.graphql.org/October2021/#IsValidImplementation()
        let required_extras = type_params.iter()
            .filter(|(param_name, _)| !iface_params.contains_key(*param_name))
            .filter(|(_, param)| {
                !param.type_annotation().nullable() && param.default_value().is_none()
            });
        for (param_name, param) in required_extras {
            self.errors.push(
                TypeValidationError::InvalidRequiredAdditionalParameterOnInterfaceSpecifiedField {
                    def_location: param.def_location().to_owned(),
                    field_name: field_name.to_string(),
                    interface_name: iface_name.to_string(),
                    parameter_name: param_name.to_string(),
                    type_name: type_name.to_string(),
                },
            );
        }

        let expected = iface_field.type_annotation();
        let actual = type_field.type_annotation();
        if !actual.is_subtype_of_impl(self.types_map, expected) {
            self.errors.push(TypeValidationError::InvalidInterfaceSpecifiedFieldType {
                def_location: type_field.def_location().to_owned(),
                expected_field_type: expected.to_owned(),
                field_name: field_name.to_string(),
                interface_name: iface_name.to_string(),
                invalid_field_type: actual.to_owned(),
                type_name: type_name.to_string(),
            });
        }
    }

    /// Fields must have output types.
    ///
    /// https://spec.graphql.org/October2021/#sel-JAHZhCFDBFABLBgB_pM
    fn check_field_type(&mut self, field_name: &str, field: &Field) {
        let annotation = field.type_annotation();
        if let Some((type_name, innermost)) = self.innermost_type(annotation)
            && !innermost.is_output_type() {
            self.errors.push(TypeValidationError::InvalidOutputFieldWithInputType {
                def_location: annotation.ref_location().to_owned(),
                field_name: field_name.to_string(),
                input_type_name: type_name.to_string(),
                parent_type_name: self.type_.name().to_string(),
            });
        }
    }

    /// Parameters must have input types.
    ///
    /// https://spec.graphql.org/October2021/#sel-KAHZhCFDBHBDCAACEB6yD
    fn check_parameter_types(&mut self, field: &Field) {
        for (param_name, param) in field.parameters() {
            let annotation = param.type_annotation();
            if let Some((type_name, innermost)) = self.innermost_type(annotation)
                && !innermost.is_input_type() {
                self.errors.push(TypeValidationError::InvalidParameterWithOutputOnlyType {
                    def_location: annotation.ref_location().to_owned(),
                    outputonly_type_name: type_name.to_string(),
                    parameter_name: param_name.to_string(),
                });
            }
        }
    }

    /// Looks up the named type at the core of `annotation`, recording an
    /// [`TypeValidationError::UndefinedTypeName`] when there is none.
    fn innermost_type<'t>(
        &mut self,
        annotation: &'t TypeAnnotation,
    ) -> Option<(&'t str, &'a GraphQLType)> {
        let type_name = annotation.innermost_named_type_annotation().graphql_type_name();
        let types_map = self.types_map;
        let innermost = types_map.get(type_name);
        if innermost.is_none() {
            self.errors.push(TypeValidationError::UndefinedTypeName {
                ref_location: annotation.ref_location().to_owned(),
                undefined_type_name: type_name.to_string(),
            });
        }
        innermost.map(|type_| (type_name, type_))
    }
}
