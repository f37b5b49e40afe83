use crate::operation::OperationKind;
use crate::operation::SelectionSet;
use crate::schema::Schema;
use crate::types::GraphQLType;
use crate::types::NamedGraphQLTypeRef;
use crate::validation;
use crate::validation::ValidationError;
use thiserror::Error;

type Result<T> = std::result::Result<T, OperationBuildError>;

/// A validated operation, ready to be serialized and sent.
#[derive(Clone, Debug, PartialEq)]
pub struct Operation {
    pub(super) kind: OperationKind,
    pub(super) root_type: NamedGraphQLTypeRef,
    pub(super) selection_set: SelectionSet,
}
impl Operation {
    /// Validate `selection_set` against the root type of `kind` and wrap it
    /// in an [`Operation`].
    pub fn build(
        schema: &Schema,
        kind: OperationKind,
        selection_set: impl Into<SelectionSet>,
    ) -> Result<Self> {
        let selection_set = selection_set.into();
        let root_type_ref = match kind {
            OperationKind::Mutation => schema.mutation_type.as_ref()
                .ok_or(OperationBuildError::NoMutationTypeDefinedInSchema)?,
            OperationKind::Query => &schema.query_type,
            OperationKind::Subscription => schema.subscription_type.as_ref()
                .ok_or(OperationBuildError::NoSubscriptionTypeDefinedInSchema)?,
        };
        let root_type = root_type_ref.deref(schema)
            .expect("type is present in schema");

        validation::validate(schema, root_type, &selection_set)?;

        Ok(Self {
            kind,
            root_type: root_type_ref.clone(),
            selection_set,
        })
    }

    pub fn kind(&self) -> OperationKind {
        self.kind
    }

    /// The root type this operation's selection set was validated against.
    pub fn root_type<'schema>(&self, schema: &'schema Schema) -> &'schema GraphQLType {
        self.root_type.deref(schema)
            .expect("type is present in schema")
    }

    pub fn root_type_name(&self) -> &str {
        self.root_type.name()
    }

    pub fn selection_set(&self) -> &SelectionSet {
        &self.selection_set
    }
}

impl Schema {
    /// Build a `mutation` [`Operation`]. Fails if this schema defines no
    /// mutation root type.
    pub fn mutation(&self, selection_set: impl Into<SelectionSet>) -> Result<Operation> {
        Operation::build(self, OperationKind::Mutation, selection_set)
    }

    /// Build a `query` [`Operation`].
    pub fn query(&self, selection_set: impl Into<SelectionSet>) -> Result<Operation> {
        Operation::build(self, OperationKind::Query, selection_set)
    }

    /// Build a `subscription` [`Operation`]. Fails if this schema defines no
    /// subscription root type.
    ///
    /// Only building and serializing is supported; executing a subscription
    /// needs a streaming transport this crate does not provide.
    pub fn subscription(&self, selection_set: impl Into<SelectionSet>) -> Result<Operation> {
        Operation::build(self, OperationKind::Subscription, selection_set)
    }
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum OperationBuildError {
    #[error("No mutation root type is defined in the schema")]
    NoMutationTypeDefinedInSchema,

    #[error("No subscription root type is defined in the schema")]
    NoSubscriptionTypeDefinedInSchema,

    #[error("Invalid selection set: {0}")]
    ValidationError(#[from] ValidationError),
}
