use crate::schema::Schema;
use crate::types::NamedGraphQLTypeRef;
use crate::types::ObjectType;
use indexmap::IndexMap;

/// Represents a
/// [union type](https://spec.graphql.org/October2021/#sec-Unions) defined
/// within some [`Schema`].
#[derive(Clone, Debug, PartialEq)]
pub struct UnionType {
    pub(crate) description: Option<String>,
    pub(crate) members: IndexMap<String, NamedGraphQLTypeRef>,
    pub(crate) name: String,
}
impl UnionType {
    /// The description of this [`UnionType`] as reported by introspection.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn has_member(&self, type_name: &str) -> bool {
        self.members.contains_key(type_name)
    }

    /// An ordered list of the names of each [`ObjectType`] defined as a member
    /// of this union.
    pub fn member_type_names(&self) -> Vec<&str> {
        self.members.keys()
            .map(|type_name| type_name.as_str())
            .collect()
    }

    /// An ordered list of the [`ObjectType`]s defined as members of this
    /// union.
    pub fn member_types<'schema>(
        &self,
        schema: &'schema Schema,
    ) -> Vec<&'schema ObjectType> {
        self.members.values()
            .map(|type_ref| {
                type_ref.deref(schema)
                    .expect("type is present in schema")
                    .as_object()
                    .expect("union member is an object type")
            })
            .collect()
    }

    /// The name of this [`UnionType`].
    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
