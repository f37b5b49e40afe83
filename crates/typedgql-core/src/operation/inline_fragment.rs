use crate::operation::SelectionSet;
use crate::schema::Schema;
use crate::types::GraphQLType;
use crate::types::InterfaceType;
use crate::types::NamedGraphQLTypeRef;
use crate::types::ObjectType;
use crate::validation;
use crate::validation::ValidationError;

/// A selection set that only applies when the runtime type of the selected
/// value is `on_type`: `... on Type { ... }`.
///
/// An [`InlineFragment`] can only be constructed against a [`Schema`], and
/// its selection set is validated against `on_type` at construction time.
#[derive(Clone, Debug, PartialEq)]
pub struct InlineFragment {
    pub(super) on_type: NamedGraphQLTypeRef,
    pub(super) selection_set: SelectionSet,
}
impl InlineFragment {
    /// Build an inline fragment on the object or interface type named
    /// `on_type_name`, validating `selection_set` against it.
    pub fn new(
        schema: &Schema,
        on_type_name: &str,
        selection_set: impl Into<SelectionSet>,
    ) -> Result<Self, ValidationError> {
        let selection_set = selection_set.into();
        let on_type = schema.get_type(on_type_name)
            .ok_or_else(|| ValidationError::UnknownType {
                type_name: on_type_name.to_string(),
            })?;
        if !matches!(on_type, GraphQLType::Object(_) | GraphQLType::Interface(_)) {
            return Err(ValidationError::SelectionsNotSupported);
        }

        validation::validate(schema, on_type, &selection_set)?;

        Ok(Self {
            on_type: NamedGraphQLTypeRef::new(on_type_name),
            selection_set,
        })
    }

    /// The type this fragment applies to.
    pub fn on_type<'schema>(&self, schema: &'schema Schema) -> &'schema GraphQLType {
        self.on_type.deref(schema)
            .expect("type is present in schema")
    }

    /// The name of the type this fragment applies to.
    pub fn on_type_name(&self) -> &str {
        self.on_type.name()
    }

    pub fn selection_set(&self) -> &SelectionSet {
        &self.selection_set
    }
}

impl ObjectType {
    /// Build an [`InlineFragment`] on this type. See [`InlineFragment::new()`].
    pub fn inline_fragment(
        &self,
        schema: &Schema,
        selection_set: impl Into<SelectionSet>,
    ) -> Result<InlineFragment, ValidationError> {
        InlineFragment::new(schema, self.name(), selection_set)
    }
}

impl InterfaceType {
    /// Build an [`InlineFragment`] on this type. See [`InlineFragment::new()`].
    pub fn inline_fragment(
        &self,
        schema: &Schema,
        selection_set: impl Into<SelectionSet>,
    ) -> Result<InlineFragment, ValidationError> {
        InlineFragment::new(schema, self.name(), selection_set)
    }
}
