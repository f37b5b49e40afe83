use crate::schema::SchemaBuildError;
use crate::types::GraphQLType;
use crate::types::InputObjectTypeValidator;
use crate::types::ObjectOrInterfaceTypeValidator;
use crate::types::UnionTypeValidator;
use indexmap::IndexMap;

type Result<T> = std::result::Result<T, SchemaBuildError>;

/// The name -> [`GraphQLType`] arena a [`Schema`](crate::schema::Schema) is
/// built in. Types are registered empty first and populated afterwards, so
/// that fields may refer to types registered later (or to themselves).
#[derive(Debug)]
pub struct TypesMapBuilder {
    pub(crate) types: IndexMap<String, GraphQLType>,
}
impl TypesMapBuilder {
    pub fn new() -> Self {
        Self {
            types: IndexMap::from([
                ("Boolean".to_string(), GraphQLType::Bool),
                ("Float".to_string(), GraphQLType::Float),
                ("ID".to_string(), GraphQLType::ID),
                ("Int".to_string(), GraphQLType::Int),
                ("String".to_string(), GraphQLType::String),
            ]),
        }
    }

    pub fn add_new_type(
        &mut self,
        type_name: &str,
        type_: GraphQLType,
    ) -> Result<()> {
        if self.types.contains_key(type_name) {
            return Err(SchemaBuildError::DuplicateTypeDefinition {
                type_name: type_name.to_string(),
            });
        }

        self.types.insert(type_name.to_string(), type_);
        Ok(())
    }

    pub fn into_types_map(self) -> Result<IndexMap<String, GraphQLType>> {
        // Final validation of all types together.
        let mut errors = vec![];
        for type_ in self.types.values() {
            match type_ {
                GraphQLType::Bool
                | GraphQLType::Enum(_)
                | GraphQLType::Float
                | GraphQLType::ID
                | GraphQLType::Int
                | GraphQLType::Scalar(_)
                | GraphQLType::String
                    => (),

                GraphQLType::InputObject(type_) => errors.append(
                    &mut InputObjectTypeValidator::new(type_, &self.types)
                        .validate()
                ),

                GraphQLType::Interface(type_) => errors.append(
                    &mut ObjectOrInterfaceTypeValidator::new(&type_.0, &self.types)
                        .validate()
                ),

                GraphQLType::Object(type_) => errors.append(
                    &mut ObjectOrInterfaceTypeValidator::new(&type_.0, &self.types)
                        .validate()
                ),

                GraphQLType::Union(type_) => errors.append(
                    &mut UnionTypeValidator::new(type_, &self.types)
                        .validate()
                ),
            }
        }

        if !errors.is_empty() {
            return Err(SchemaBuildError::TypeValidationErrors { errors });
        }

        Ok(self.types)
    }

    pub fn get_type_mut(
        &mut self,
        type_name: &str,
    ) -> Option<&mut GraphQLType> {
        self.types.get_mut(type_name)
    }
}
impl std::default::Default for TypesMapBuilder {
    fn default() -> Self {
        Self::new()
    }
}
