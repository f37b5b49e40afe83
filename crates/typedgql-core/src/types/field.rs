use crate::schema::Schema;
use crate::types::DeprecationState;
use crate::types::GraphQLType;
use crate::types::NamedGraphQLTypeRef;
use crate::types::Parameter;
use crate::types::TypeAnnotation;
use indexmap::IndexMap;

/// Represents a field defined on an [`ObjectType`](crate::types::ObjectType)
/// or [`InterfaceType`](crate::types::InterfaceType).
#[derive(Clone, Debug, PartialEq)]
pub struct Field {
    pub(crate) deprecation_reason: Option<String>,
    pub(crate) description: Option<String>,
    pub(crate) is_deprecated: bool,
    pub(crate) name: String,
    pub(crate) parameters: IndexMap<String, Parameter>,
    pub(crate) parent_type: NamedGraphQLTypeRef,
    pub(crate) type_annotation: TypeAnnotation,
}
impl Field {
    /// The [`DeprecationState`] of this [`Field`] as reported by
    /// introspection.
    pub fn deprecation_state(&self) -> DeprecationState<'_> {
        DeprecationState::new(
            self.is_deprecated,
            self.deprecation_reason.as_deref(),
        )
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Indicates if this is one of the implicitly-defined meta fields
    /// (`__typename`, `__schema`, `__type`).
    pub fn is_meta_field(&self) -> bool {
        self.name.starts_with("__")
    }

    /// The name of this [`Field`].
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// A map from ParameterName -> [`Parameter`] for each argument this
    /// [`Field`] accepts, ordered as introspection listed them.
    pub fn parameters(&self) -> &IndexMap<String, Parameter> {
        &self.parameters
    }

    /// The object or interface type this [`Field`] is defined on.
    pub fn parent_type<'schema>(
        &self,
        schema: &'schema Schema,
    ) -> &'schema GraphQLType {
        self.parent_type.deref(schema)
            .expect("type is present in schema")
    }

    /// The name of the type this [`Field`] is defined on.
    ///
    /// This can be useful when the [`Schema`] object is unavailable or
    /// inconvenient to access but the type's name is all that's needed.
    pub fn parent_type_name(&self) -> &str {
        self.parent_type.name()
    }

    /// The resolved result type of this [`Field`].
    pub fn type_annotation(&self) -> &TypeAnnotation {
        &self.type_annotation
    }
}
