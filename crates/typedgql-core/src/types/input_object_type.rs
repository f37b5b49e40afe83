use crate::types::InputField;
use indexmap::IndexMap;

/// Represents an
/// [input object type](https://spec.graphql.org/October2021/#sec-Input-Objects)
/// defined within some [`Schema`](crate::schema::Schema).
#[derive(Clone, Debug, PartialEq)]
pub struct InputObjectType {
    pub(crate) description: Option<String>,
    pub(crate) fields: IndexMap<String, InputField>,
    pub(crate) name: String,
}
impl InputObjectType {
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// A map from FieldName -> [`InputField`] for all fields defined on this
    /// [`InputObjectType`], ordered as introspection listed them.
    pub fn fields(&self) -> &IndexMap<String, InputField> {
        &self.fields
    }

    /// The name of this [`InputObjectType`].
    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
