use crate::types::TypeAnnotation;

/// Represents an argument accepted by some [`Field`](crate::types::Field).
#[derive(Clone, Debug, PartialEq)]
pub struct Parameter {
    pub(crate) default_value: Option<String>,
    pub(crate) description: Option<String>,
    pub(crate) name: String,
    pub(crate) type_annotation: TypeAnnotation,
}
impl Parameter {
    /// The default value of this [`Parameter`], as the GraphQL literal text
    /// reported by introspection.
    pub fn default_value(&self) -> Option<&str> {
        self.default_value.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// A [`Parameter`] must be supplied when its type is non-nullable and it
    /// has no default value.
    pub fn is_required(&self) -> bool {
        !self.type_annotation.is_nullable() && self.default_value.is_none()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn type_annotation(&self) -> &TypeAnnotation {
        &self.type_annotation
    }
}
