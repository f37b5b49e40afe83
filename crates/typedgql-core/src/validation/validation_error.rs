use crate::Value;
use thiserror::Error;

/// Why a selection set failed validation against a type.
///
/// Failures within a field's selection are wrapped in
/// [`ValidationError::Selection`] once per nesting level (and failures within
/// an inline fragment in [`ValidationError::InlineFragment`]), so the
/// outermost error carries the full path from the validated type down to the
/// offending selection. See [`ValidationError::path()`] and
/// [`ValidationError::root_cause()`].
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("A selection set must select at least one field")]
    EmptySelectionSet,

    #[error("In `... on {on}`: {error}")]
    InlineFragment {
        on: String,
        error: Box<ValidationError>,
    },

    #[error("Invalid value for argument `{name}` ({value:?}): {reason}")]
    InvalidArgumentType {
        name: String,
        reason: String,
        value: Value,
    },

    #[error("Missing required argument `{name}`")]
    MissingArgument {
        name: String,
    },

    #[error("No such argument `{name}`")]
    NoSuchArgument {
        name: String,
    },

    #[error("No such field")]
    NoSuchField,

    #[error("In `{on}.{field}`: {error}")]
    Selection {
        on: String,
        field: String,
        error: Box<ValidationError>,
    },

    #[error("Selections are not supported on this type")]
    SelectionsNotSupported,

    #[error("No type named `{type_name}` is defined in the schema")]
    UnknownType {
        type_name: String,
    },
}
impl ValidationError {
    /// The chain of selections leading from the validated type to the
    /// failure, outermost first.
    pub fn path(&self) -> Vec<ValidationPathSegment<'_>> {
        let mut path = vec![];
        let mut error = self;
        loop {
            match error {
                Self::InlineFragment { on, error: inner } => {
                    path.push(ValidationPathSegment::InlineFragment { on });
                    error = inner.as_ref();
                },
                Self::Selection { on, field, error: inner } => {
                    path.push(ValidationPathSegment::Field { on, field });
                    error = inner.as_ref();
                },
                _ => return path,
            }
        }
    }

    /// The innermost error, with every path wrapper removed.
    pub fn root_cause(&self) -> &ValidationError {
        match self {
            Self::InlineFragment { error, .. }
                | Self::Selection { error, .. } => error.root_cause(),
            _ => self,
        }
    }

    pub(super) fn in_field(self, on: &str, field: &str) -> Self {
        Self::Selection {
            on: on.to_string(),
            field: field.to_string(),
            error: Box::new(self),
        }
    }

    pub(super) fn in_inline_fragment(self, on: &str) -> Self {
        Self::InlineFragment {
            on: on.to_string(),
            error: Box::new(self),
        }
    }
}

/// One step of a [`ValidationError::path()`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ValidationPathSegment<'a> {
    /// The field named `field`, selected on the type named `on`.
    Field {
        on: &'a str,
        field: &'a str,
    },

    /// An inline fragment on the type named `on`.
    InlineFragment {
        on: &'a str,
    },
}
impl std::fmt::Display for ValidationPathSegment<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Field { on, field } => write!(f, "{on}.{field}"),
            Self::InlineFragment { on } => write!(f, "... on {on}"),
        }
    }
}
