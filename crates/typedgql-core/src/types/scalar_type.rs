use crate::types::ScalarCodec;
use std::sync::Arc;

/// Represents a custom
/// [scalar type](https://spec.graphql.org/October2021/#sec-Scalars) defined
/// within some [`Schema`](crate::schema::Schema), together with the
/// [`ScalarCodec`] that was bound to it when the schema was built.
///
/// The built-in scalars are not represented by this type; see
/// [`GraphQLType::Bool`](crate::types::GraphQLType::Bool) and friends.
#[derive(Clone, Debug)]
pub struct ScalarType {
    pub(crate) codec: Arc<dyn ScalarCodec>,
    pub(crate) description: Option<String>,
    pub(crate) name: String,
}
impl ScalarType {
    /// The [`ScalarCodec`] used to check argument values of this type and to
    /// load response values of this type.
    pub fn codec(&self) -> &dyn ScalarCodec {
        self.codec.as_ref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// The name of this [`ScalarType`].
    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
impl PartialEq for ScalarType {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.description == other.description
            && Arc::ptr_eq(&self.codec, &other.codec)
    }
}
