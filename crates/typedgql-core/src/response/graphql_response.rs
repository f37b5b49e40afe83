use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

/// The `{"data": ..., "errors": [...]}` envelope a GraphQL server responds
/// with.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct GraphQLResponse {
    #[serde(default)]
    pub data: Option<serde_json::Value>,

    #[serde(default)]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<serde_json::Value>,
}
impl GraphQLResponse {
    pub fn from_slice(bytes: &[u8]) -> serde_json::Result<Self> {
        serde_json::from_slice(bytes)
    }

    #[allow(clippy::should_implement_trait)]
    pub fn from_str(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// The response's `data`, or an [`ErrorResponse`] if the server reported
    /// any errors (even alongside data).
    ///
    /// A response with neither errors nor data yields `null`.
    pub fn into_data(self) -> Result<serde_json::Value, ErrorResponse> {
        if !self.errors.is_empty() {
            return Err(ErrorResponse {
                data: self.data.unwrap_or_else(|| {
                    serde_json::Value::Object(serde_json::Map::new())
                }),
                errors: self.errors,
            });
        }
        Ok(self.data.unwrap_or(serde_json::Value::Null))
    }
}

/// Errors reported by a GraphQL server, along with whatever `data` came back
/// with them.
#[derive(Clone, Debug, Error, PartialEq)]
#[error("The server responded with {} error(s): {}", .errors.len(), summarize_errors(.errors))]
pub struct ErrorResponse {
    pub data: serde_json::Value,
    pub errors: Vec<serde_json::Value>,
}
impl ErrorResponse {
    /// The `message` of each reported error that has one.
    pub fn messages(&self) -> Vec<&str> {
        self.errors.iter()
            .filter_map(|error| error.get("message"))
            .filter_map(serde_json::Value::as_str)
            .collect()
    }
}

fn summarize_errors(errors: &[serde_json::Value]) -> String {
    errors.iter()
        .map(|error| match error.get("message").and_then(serde_json::Value::as_str) {
            Some(message) => message.to_string(),
            None => error.to_string(),
        })
        .collect::<Vec<_>>()
        .join("; ")
}
