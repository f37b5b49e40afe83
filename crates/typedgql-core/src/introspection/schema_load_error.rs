use std::path::PathBuf;
use thiserror::Error;

/// Errors encountered while reading or classifying an introspection
/// response.
#[derive(Debug, Error)]
pub enum SchemaLoadError {
    #[error("Failed to read the introspection schema file at `{}`: {err}", file_path.display())]
    FileReadError {
        file_path: PathBuf,
        err: std::io::Error,
    },

    #[error("Failed to write the introspection schema file at `{}`: {err}", file_path.display())]
    FileWriteError {
        file_path: PathBuf,
        err: std::io::Error,
    },

    #[error("Failed to parse introspection JSON: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error(
        "Malformed type reference of kind `{kind}`: `LIST` and `NON_NULL` \
        references require `ofType`, all other kinds require `name`"
    )]
    MalformedTypeRef {
        kind: String,
        name: Option<String>,
    },

    #[error(
        "The `{type_name}` type has kind `{kind}`, which requires `{member}` \
        to be present"
    )]
    MissingTypeMember {
        kind: String,
        member: &'static str,
        type_name: String,
    },

    #[error("Found a type of kind `{kind}` with no name")]
    MissingTypeName {
        kind: String,
    },

    #[error(
        "The `{type_name}` type has kind `{kind}`, which must not define \
        `{member}`"
    )]
    UnexpectedTypeMember {
        kind: String,
        member: &'static str,
        type_name: String,
    },

    #[error(
        "Unrecognized type kind `{kind}`{}",
        type_name.as_ref()
            .map(|name| format!(" for the `{name}` type"))
            .unwrap_or_default(),
    )]
    UnknownTypeKind {
        kind: String,
        type_name: Option<String>,
    },
}
