use thiserror::Error;

/// One step into the `data` of a response: an object key (the alias or name
/// of a selected field) or a list index.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum ResponsePathSegment {
    Index(usize),
    Key(String),
}

/// The location within a response's `data` that a [`LoadError`] occurred at,
/// rendered as `dog.friends[2].name`.
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct ResponsePath(Vec<ResponsePathSegment>);
impl ResponsePath {
    pub fn segments(&self) -> &[ResponsePathSegment] {
        self.0.as_slice()
    }

    pub(super) fn with_index(&self, index: usize) -> Self {
        let mut segments = self.0.clone();
        segments.push(ResponsePathSegment::Index(index));
        Self(segments)
    }

    pub(super) fn with_key(&self, key: &str) -> Self {
        let mut segments = self.0.clone();
        segments.push(ResponsePathSegment::Key(key.to_string()));
        Self(segments)
    }
}
impl std::fmt::Display for ResponsePath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.0.is_empty() {
            return f.write_str("<root>");
        }
        for (idx, segment) in self.0.iter().enumerate() {
            match segment {
                ResponsePathSegment::Index(index) => write!(f, "[{index}]")?,
                ResponsePathSegment::Key(key) if idx == 0 => f.write_str(key)?,
                ResponsePathSegment::Key(key) => write!(f, ".{key}")?,
            }
        }
        Ok(())
    }
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum LoadError {
    #[error("Expected a list at `{path}`, found `{found}`")]
    ExpectedList {
        found: serde_json::Value,
        path: ResponsePath,
    },

    #[error("Expected an object at `{path}`, found `{found}`")]
    ExpectedObject {
        found: serde_json::Value,
        path: ResponsePath,
    },

    #[error("Invalid `{type_name}` value at `{path}`: {reason}")]
    InvalidScalar {
        path: ResponsePath,
        reason: String,
        type_name: String,
    },

    #[error("The selected field `{path}` is missing from the response")]
    MissingField {
        path: ResponsePath,
    },

    #[error(
        "The `{type_name}` type has no field named `{field_name}` (selected \
        at `{path}`)"
    )]
    NoSuchField {
        field_name: String,
        path: ResponsePath,
        type_name: String,
    },

    #[error("`{type_name}` at `{path}` is not a type a response can hold")]
    NotAnOutputType {
        path: ResponsePath,
        type_name: String,
    },

    #[error("Unexpected null at non-null `{path}`")]
    UnexpectedNull {
        path: ResponsePath,
    },

    #[error("`{value}` at `{path}` is not a value of the `{enum_name}` enum")]
    UnknownEnumValue {
        enum_name: String,
        path: ResponsePath,
        value: String,
    },
}
impl LoadError {
    /// Where in the response's `data` this error occurred.
    pub fn path(&self) -> &ResponsePath {
        match self {
            Self::ExpectedList { path, .. }
            | Self::ExpectedObject { path, .. }
            | Self::InvalidScalar { path, .. }
            | Self::MissingField { path }
            | Self::NoSuchField { path, .. }
            | Self::NotAnOutputType { path, .. }
            | Self::UnexpectedNull { path }
            | Self::UnknownEnumValue { path, .. } => path,
        }
    }
}
