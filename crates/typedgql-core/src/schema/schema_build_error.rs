use crate::introspection::SchemaLoadError;
use crate::operation::OperationKind;
use crate::schema::TypeValidationError;
use crate::types::GraphQLTypeKind;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SchemaBuildError {
    #[error("Multiple GraphQL types named `{type_name}` were defined")]
    DuplicateTypeDefinition {
        type_name: String,
    },

    #[error(
        "The {operation} root operation type must be an object type, but \
        `{type_name}` is a {type_kind} type"
    )]
    InvalidOperationType {
        operation: OperationKind,
        type_kind: GraphQLTypeKind,
        type_name: String,
    },

    #[error("Failed to load the introspection schema: {0}")]
    LoadError(#[from] SchemaLoadError),

    #[error("No query root operation type was defined")]
    NoQueryOperationTypeDefined,

    #[error("Encountered errors while validating the schema's types: {errors:#?}")]
    TypeValidationErrors {
        errors: Vec<TypeValidationError>,
    },

    #[error(
        "The {operation} root operation type is `{type_name}`, but no type \
        with that name is defined"
    )]
    UndefinedOperationType {
        operation: OperationKind,
        type_name: String,
    },

    #[error(
        "No scalar codec was bound for the following custom scalars: {}",
        scalar_names.join(", "),
    )]
    UndefinedScalars {
        scalar_names: Vec<String>,
    },
}
