use thiserror::Error;
use typedgql_core::introspection::SchemaLoadError;
use typedgql_core::response::ErrorResponse;
use typedgql_core::response::LoadError;
use typedgql_core::schema::SchemaBuildError;

/// Why executing a document against an endpoint failed.
#[derive(Debug, Error)]
pub enum ExecutionError {
    #[error("Failed to decode the response body as a GraphQL response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error(transparent)]
    ErrorResponse(#[from] ErrorResponse),

    #[error("The server responded with HTTP status {status}: {body}")]
    HttpStatus {
        body: String,
        status: reqwest::StatusCode,
    },

    #[error("Failed to read the introspection result: {0}")]
    Introspection(#[from] SchemaLoadError),

    #[error("Failed to load the response data: {0}")]
    Load(#[from] LoadError),

    #[error("Failed to build a schema from the introspection result: {0}")]
    SchemaBuild(#[from] SchemaBuildError),

    #[error("Subscriptions cannot be executed over a single HTTP request")]
    SubscriptionNotSupported,

    #[error("The request failed: {0}")]
    Transport(#[from] reqwest::Error),
}
