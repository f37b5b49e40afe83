//! Reading the result of an introspection query into typed
//! [`TypeDescription`]s.

mod introspection_query;
mod introspection_schema;
mod schema_load_error;
mod type_description;
mod type_kind;
mod type_ref;

pub use introspection_query::INTROSPECTION_QUERY;
pub use introspection_schema::IntrospectionEnumValue;
pub use introspection_schema::IntrospectionField;
pub use introspection_schema::IntrospectionInputValue;
pub use introspection_schema::IntrospectionRootType;
pub use introspection_schema::IntrospectionSchema;
pub use introspection_schema::IntrospectionType;
pub use introspection_schema::IntrospectionTypeRef;
pub use schema_load_error::SchemaLoadError;
pub use type_description::EnumDescription;
pub use type_description::EnumValueDescription;
pub use type_description::FieldDescription;
pub use type_description::InputObjectDescription;
pub use type_description::InputValueDescription;
pub use type_description::InterfaceDescription;
pub use type_description::load;
pub use type_description::ObjectDescription;
pub use type_description::ScalarDescription;
pub use type_description::TypeDescription;
pub use type_description::UnionDescription;
pub use type_kind::TypeKind;
pub use type_ref::TypeRef;

#[cfg(test)]
mod tests;
