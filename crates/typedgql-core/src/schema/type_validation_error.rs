use crate::types::GraphQLTypeKind;
use thiserror::Error;

/// A consistency problem found among the types of an introspected schema.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum TypeValidationError {
    #[error(
        "The `{type_name}` type implements `{non_interface_type_name}`, which \
        is not an interface type"
    )]
    ImplementsNonInterfaceType {
        non_interface_type_name: String,
        type_name: String,
    },

    #[error(
        "The `{type_name}` type implements `{undefined_interface_name}`, which \
        is not defined in the schema"
    )]
    ImplementsUndefinedInterface {
        type_name: String,
        undefined_interface_name: String,
    },

    #[error(
        "Input fields can not be declared with a non-input type: The \
        `{parent_type_name}.{field_name}` field is an input field, but the \
        `{invalid_type_name}` type is a non-input type."
    )]
    InvalidInputFieldWithOutputType {
        field_name: String,
        invalid_type_name: String,
        parent_type_name: String,
    },

    #[error(
        "Output fields can not be declared with an input type: The \
        `{parent_type_name}.{field_name}` field is an output field, but the \
        `{input_type_name}` type is an input-type"
    )]
    InvalidOutputFieldWithInputType {
        field_name: String,
        input_type_name: String,
        parent_type_name: String,
    },

    #[error(
        "Parameters can only be declared with input-compatible types: The \
        `{parameter_name}` parameter of `{parent_type_name}.{field_name}` was \
        declared with the `{outputonly_type_name}` type, which is not an \
        input-compatible type."
    )]
    InvalidParameterWithOutputOnlyType {
        field_name: String,
        outputonly_type_name: String,
        parameter_name: String,
        parent_type_name: String,
    },

    #[error(
        "Invalid union member type: The `{union_type_name}` type defines one \
        of its members as `{invalid_member_type_name}`, but this type is a \
        {invalid_member_type_kind} type and union members can only be object \
        types."
    )]
    InvalidUnionMemberTypeKind {
        invalid_member_type_kind: GraphQLTypeKind,
        invalid_member_type_name: String,
        union_type_name: String,
    },

    #[error(
        "The `{referencing_type_name}` type refers to `{undefined_type_name}`, \
        but there is no type defined with that name"
    )]
    UndefinedTypeName {
        referencing_type_name: String,
        undefined_type_name: String,
    },
}
