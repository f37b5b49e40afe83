use crate::Executor;
use crate::executor::AuthHook;
use reqwest::header::HeaderMap;
use reqwest::header::HeaderName;
use reqwest::header::HeaderValue;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

type Result<T> = std::result::Result<T, ExecutorBuildError>;

/// Configures an [`Executor`] for a single GraphQL endpoint.
///
/// ```no_run
/// # use typedgql_client::ExecutorBuilder;
/// # use std::time::Duration;
/// let executor = ExecutorBuilder::new("https://example.com/graphql")
///     .timeout(Duration::from_secs(10))
///     .auth(|request| request.bearer_auth("secret"))
///     .build()
///     .unwrap();
/// ```
pub struct ExecutorBuilder {
    auth: Option<AuthHook>,
    client: Option<reqwest::Client>,
    default_headers: HeaderMap,
    timeout: Option<Duration>,
    url: String,
}
impl ExecutorBuilder {
    /// Decorate every request just before it is sent, after all other
    /// headers have been set. Replaces any previously set hook.
    pub fn auth(
        mut self,
        hook: impl Fn(reqwest::RequestBuilder) -> reqwest::RequestBuilder + Send + Sync + 'static,
    ) -> Self {
        self.auth = Some(Arc::new(hook));
        self
    }

    pub fn build(self) -> Result<Executor> {
        let url = reqwest::Url::parse(self.url.as_str())
            .map_err(|err| ExecutorBuildError::InvalidUrl {
                reason: err.to_string(),
                url: self.url.clone(),
            })?;
        let client = match self.client {
            Some(client) => client,
            None => reqwest::Client::builder().build()?,
        };

        Ok(Executor {
            auth: self.auth,
            client,
            default_headers: self.default_headers,
            timeout: self.timeout,
            url,
        })
    }

    /// Send requests through `client` instead of a new one, e.g. to share
    /// its connection pool.
    pub fn client(mut self, client: reqwest::Client) -> Self {
        self.client = Some(client);
        self
    }

    /// Send `name: value` with every request.
    pub fn header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.default_headers.insert(name, value);
        self
    }

    /// Send every header in `headers` with every request.
    pub fn headers(mut self, headers: HeaderMap) -> Self {
        self.default_headers.extend(headers);
        self
    }

    pub fn new(url: impl Into<String>) -> Self {
        Self {
            auth: None,
            client: None,
            default_headers: HeaderMap::new(),
            timeout: None,
            url: url.into(),
        }
    }

    /// Fail requests that have not completed within `timeout`.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

#[derive(Debug, Error)]
pub enum ExecutorBuildError {
    #[error("Failed to build an HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("Invalid endpoint URL `{url}`: {reason}")]
    InvalidUrl {
        reason: String,
        url: String,
    },
}
