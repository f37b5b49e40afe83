use crate::introspection::IntrospectionSchema;
use crate::introspection::SchemaLoadError;
use crate::schema::SchemaBuilder;
use crate::types::GraphQLType;
use crate::types::NamedGraphQLTypeRef;
use indexmap::IndexMap;
use std::path::Path;

/// Represents a fully typechecked and immutable GraphQL schema, built from
/// the result of an introspection query.
///
/// A [`Schema`] is never mutated after it is built, so it can be shared
/// across threads freely.
#[derive(Clone, Debug, PartialEq)]
pub struct Schema {
    pub(crate) introspection: IntrospectionSchema,
    pub(crate) mutation_type: Option<NamedGraphQLTypeRef>,
    pub(crate) query_type: NamedGraphQLTypeRef,
    pub(crate) subscription_type: Option<NamedGraphQLTypeRef>,
    pub(crate) types: IndexMap<String, GraphQLType>,
}
impl Schema {
    /// Returns an [`IndexMap<String, GraphQLType>`] containing all types
    /// defined within this [`Schema`], in the order introspection listed
    /// them.
    ///
    /// [^note] This map includes both the types reported by introspection as
    /// well as the built-in scalar types like [`GraphQLType::Bool`], which are
    /// always present.
    pub fn all_types(&self) -> &IndexMap<String, GraphQLType> {
        &self.types
    }

    /// Helper function that just delegates to [`SchemaBuilder::new()`].
    pub fn builder() -> SchemaBuilder {
        SchemaBuilder::new()
    }

    /// Look up a type defined within this [`Schema`] by name.
    pub fn get_type(&self, type_name: &str) -> Option<&GraphQLType> {
        self.types.get(type_name)
    }

    /// The introspection result this [`Schema`] was built from.
    pub fn introspection(&self) -> &IntrospectionSchema {
        &self.introspection
    }

    /// Returns this [`Schema`]'s Mutation root operation type (if one was
    /// defined).
    pub fn mutation_type(&self) -> Option<&GraphQLType> {
        self.mutation_type.as_ref().map(|named_ref| {
            named_ref.deref(self)
                .expect("type is present in schema")
        })
    }

    /// Returns this [`Schema`]'s Query root operation type.
    ///
    /// GraphQL [defines an object type named "Query" as the _default_ Query
    /// type](https://spec.graphql.org/October2021/#sec-Root-Operation-Types.Default-Root-Operation-Type-Names),
    /// but introspection may report a differently-named type. This returns
    /// whichever type introspection reported.
    pub fn query_type(&self) -> &GraphQLType {
        self.query_type.deref(self)
            .expect("type is present in schema")
    }

    /// Returns this [`Schema`]'s Subscription root operation type (if one was
    /// defined).
    pub fn subscription_type(&self) -> Option<&GraphQLType> {
        self.subscription_type.as_ref().map(|named_ref| {
            named_ref.deref(self)
                .expect("type is present in schema")
        })
    }

    /// The introspection result this [`Schema`] was built from, in the shape
    /// an introspection response carries in its `data`.
    pub fn to_json_value(&self) -> Result<serde_json::Value, SchemaLoadError> {
        self.introspection.to_json_value()
    }

    /// Write the introspection result this [`Schema`] was built from to a
    /// JSON file that [`SchemaBuilder::from_path()`] can load again.
    pub fn to_path(&self, file_path: impl AsRef<Path>) -> Result<(), SchemaLoadError> {
        let file_path = file_path.as_ref();
        let json = serde_json::to_string_pretty(&self.to_json_value()?)?;
        std::fs::write(file_path, json).map_err(|err| SchemaLoadError::FileWriteError {
            file_path: file_path.to_path_buf(),
            err,
        })
    }
}
