use crate::schema::TypeValidationError;
use crate::types::GraphQLType;
use crate::types::ObjectOrInterfaceTypeData;
use indexmap::IndexMap;

pub(super) struct ObjectOrInterfaceTypeValidator<'a> {
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

    pub fn validate(mut self) -> Vec<TypeValidationError> {
        let type_name = self.type_.name();

        for iface_name in self.type_.interface_names() {
            match self.types_map.get(iface_name) {
                Some(GraphQLType::Interface(_)) => (),

                Some(non_iface_type) => self.errors.push(
                    TypeValidationError::ImplementsNonInterfaceType {
                        non_interface_type_name: non_iface_type.name().to_string(),
                        type_name: type_name.to_string(),
                    }
                ),

                None => self.errors.push(
                    TypeValidationError::ImplementsUndefinedInterface {
                        type_name: type_name.to_string(),
                        undefined_interface_name: iface_name.to_string(),
                    }
                ),
            }
        }

        for (field_name, field) in self.type_.fields() {
            let field_type_name = field.type_annotation().innermost_type_name();
            match self.types_map.get(field_type_name) {
                Some(field_type) if !field_type.is_output_type() => self.errors.push(
                    TypeValidationError::InvalidOutputFieldWithInputType {
                        field_name: field_name.to_string(),
                        input_type_name: field_type_name.to_string(),
                        parent_type_name: type_name.to_string(),
                    }
                ),
                Some(_) => (),
                None => self.errors.push(
                    TypeValidationError::UndefinedTypeName {
                        referencing_type_name: type_name.to_string(),
                        undefined_type_name: field_type_name.to_string(),
                    }
                ),
            }

            for (param_name, param) in field.parameters() {
                let param_type_name = param.type_annotation().innermost_type_name();
                match self.types_map.get(param_type_name) {
                    Some(param_type) if !param_type.is_input_type() => self.errors.push(
                        TypeValidationError::InvalidParameterWithOutputOnlyType {
                            field_name: field_name.to_string(),
                            outputonly_type_name: param_type_name.to_string(),
                            parameter_name: param_name.to_string(),
                            parent_type_name: type_name.to_string(),
                        }
                    ),
                    Some(_) => (),
                    None => self.errors.push(
                        TypeValidationError::UndefinedTypeName {
                            referencing_type_name: type_name.to_string(),
                            undefined_type_name: param_type_name.to_string(),
                        }
                    ),
                }
            }
        }

        self.errors
    }
}
