use crate::schema::TypeValidationError;
use crate::types::GraphQLType;
use crate::types::InputObjectType;
use indexmap::IndexMap;

pub(super) struct InputObjectTypeValidator<'a> {
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
        for (field_name, field) in self.type_.fields() {
            let field_type_name = field.type_annotation().innermost_type_name();
            match self.types_map.get(field_type_name) {
                Some(field_type) if !field_type.is_input_type() => self.errors.push(
                    TypeValidationError::InvalidInputFieldWithOutputType {
                        field_name: field_name.to_string(),
                        invalid_type_name: field_type_name.to_string(),
                        parent_type_name: self.type_.name().to_string(),
                    }
                ),
                Some(_) => (),
                None => self.errors.push(
                    TypeValidationError::UndefinedTypeName {
                        referencing_type_name: self.type_.name().to_string(),
                        undefined_type_name: field_type_name.to_string(),
                    }
                ),
            }
        }

        self.errors
    }
}
