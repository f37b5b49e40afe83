mod deprecation_state;
mod enum_type;
mod field;
mod graphql_type;
mod graphql_type_kind;
mod input_field;
mod input_object_type;
mod input_object_type_validator;
mod interface_type;
mod object_or_interface_type_data;
mod object_or_interface_type_trait;
mod object_or_interface_type_validator;
mod object_type;
mod parameter;
mod scalar_codec;
mod scalar_type;
mod type_annotation;
mod types_map_builder;
mod union_type;
mod union_type_validator;

use crate::named_ref::NamedRef;
use crate::schema::Schema;

pub use deprecation_state::DeprecationState;
pub use enum_type::EnumType;
pub use enum_type::EnumValue;
pub use enum_type::NamedEnumValueRef;
pub use field::Field;
pub use graphql_type::GraphQLType;
pub use graphql_type_kind::GraphQLTypeKind;
pub use input_field::InputField;
pub use input_object_type::InputObjectType;
use input_object_type_validator::InputObjectTypeValidator;
pub use interface_type::InterfaceType;
pub(crate) use object_or_interface_type_data::ObjectOrInterfaceTypeData;
use object_or_interface_type_trait::ObjectOrInterfaceTypeTrait;
use object_or_interface_type_validator::ObjectOrInterfaceTypeValidator;
pub use object_type::ObjectType;
pub use parameter::Parameter;
pub use scalar_codec::AnyScalar;
pub use scalar_codec::ScalarBindings;
pub use scalar_codec::ScalarCodec;
pub use scalar_type::ScalarType;
pub use type_annotation::TypeAnnotation;
pub(crate) use types_map_builder::TypesMapBuilder;
pub use union_type::UnionType;
use union_type_validator::UnionTypeValidator;

pub type NamedGraphQLTypeRef = NamedRef<Schema, GraphQLType>;

#[cfg(test)]
mod tests;
