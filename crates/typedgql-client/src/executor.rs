use crate::ExecutionError;
use crate::ExecutorBuilder;
use reqwest::header::ACCEPT;
use reqwest::header::CONTENT_TYPE;
use reqwest::header::HeaderMap;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use typedgql_core::introspection::INTROSPECTION_QUERY;
use typedgql_core::introspection::IntrospectionSchema;
use typedgql_core::operation::Operation;
use typedgql_core::operation::OperationKind;
use typedgql_core::response::GraphQLResponse;
use typedgql_core::response::ResponseObject;
use typedgql_core::schema::Schema;

type Result<T> = std::result::Result<T, ExecutionError>;

pub(crate) type AuthHook =
    Arc<dyn Fn(reqwest::RequestBuilder) -> reqwest::RequestBuilder + Send + Sync>;

#[derive(Serialize)]
struct QueryRequest<'a> {
    query: &'a str,
}

/// Sends GraphQL documents to one endpoint. Build one with
/// [`Executor::builder()`].
///
/// Cloning an executor is cheap and clones share the underlying
/// connection pool.
#[derive(Clone)]
pub struct Executor {
    pub(crate) auth: Option<AuthHook>,
    pub(crate) client: reqwest::Client,
    pub(crate) default_headers: HeaderMap,
    pub(crate) timeout: Option<Duration>,
    pub(crate) url: reqwest::Url,
}
impl Executor {
    pub fn builder(url: impl Into<String>) -> ExecutorBuilder {
        ExecutorBuilder::new(url)
    }

    /// Execute `operation` and load the response's `data` against `schema`.
    /// See [`Operation::load_response()`].
    pub async fn execute(
        &self,
        schema: &Schema,
        operation: &Operation,
    ) -> Result<ResponseObject> {
        if operation.kind() == OperationKind::Subscription {
            return Err(ExecutionError::SubscriptionNotSupported);
        }
        let data = self.execute_document(operation.to_graphql_string().as_str()).await?;
        Ok(operation.load_response(schema, &data)?)
    }

    /// Send `document` as-is and return the response's `data`.
    ///
    /// A response that reports any `errors` fails with
    /// [`ExecutionError::ErrorResponse`], even when it also carries data.
    pub async fn execute_document(&self, document: &str) -> Result<serde_json::Value> {
        Ok(self.send(document).await?.into_data()?)
    }

    /// Fetch the endpoint's schema with
    /// [`INTROSPECTION_QUERY`](typedgql_core::introspection::INTROSPECTION_QUERY).
    pub async fn introspect(&self) -> Result<IntrospectionSchema> {
        let data = self.execute_document(INTROSPECTION_QUERY).await?;
        Ok(IntrospectionSchema::from_json_value(data)?)
    }

    pub fn url(&self) -> &reqwest::Url {
        &self.url
    }

    async fn send(&self, document: &str) -> Result<GraphQLResponse> {
        log::debug!("sending GraphQL request to `{}`", self.url);
        log::trace!("GraphQL document:\n{document}");

        let mut request = self.client.post(self.url.clone())
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .headers(self.default_headers.clone())
            .json(&QueryRequest { query: document });
        if let Some(timeout) = self.timeout {
            request = request.timeout(timeout);
        }
        if let Some(auth) = &self.auth {
            request = auth(request);
        }

        let response = request.send().await?;
        let status = response.status();
        if status.is_client_error() || status.is_server_error() {
            // The status is the error; a body that can not be read is left empty.
            let body = response.text().await.unwrap_or_default();
            log::warn!("`{}` responded with HTTP status {status}", self.url);
            return Err(ExecutionError::HttpStatus { body, status });
        }

        let body = response.bytes().await?;
        Ok(GraphQLResponse::from_slice(&body)?)
    }
}
impl std::fmt::Debug for Executor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Executor")
            .field("auth", &self.auth.is_some())
            .field("default_headers", &self.default_headers)
            .field("timeout", &self.timeout)
            .field("url", &self.url.as_str())
            .finish_non_exhaustive()
    }
}
