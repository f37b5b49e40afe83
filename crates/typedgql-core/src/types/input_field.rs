use crate::schema::Schema;
use crate::types::GraphQLType;
use crate::types::NamedGraphQLTypeRef;
use crate::types::TypeAnnotation;

/// Represents a field defined on an
/// [`InputObjectType`](crate::types::InputObjectType).
#[derive(Clone, Debug, PartialEq)]
pub struct InputField {
    pub(crate) default_value: Option<String>,
    pub(crate) description: Option<String>,
    pub(crate) name: String,
    pub(crate) parent_type: NamedGraphQLTypeRef,
    pub(crate) type_annotation: TypeAnnotation,
}
impl InputField {
    /// The default value of this [`InputField`], as the GraphQL literal text
    /// reported by introspection.
    pub fn default_value(&self) -> Option<&str> {
        self.default_value.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// An [`InputField`] must be supplied when its type is non-nullable and
    /// it has no default value.
    pub fn is_required(&self) -> bool {
        !self.type_annotation.is_nullable() && self.default_value.is_none()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// The input object type this [`InputField`] is defined on.
    pub fn parent_type<'schema>(
        &self,
        schema: &'schema Schema,
    ) -> &'schema GraphQLType {
        self.parent_type.deref(schema)
            .expect("type is present in schema")
    }

    pub fn type_annotation(&self) -> &TypeAnnotation {
        &self.type_annotation
    }
}
