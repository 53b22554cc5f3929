//! CLOB REST API client implementation.

use std::sync::Arc;
use std::time::Duration;

use reqwest::Method;
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_tracing::TracingMiddleware;
use url::Url;

use crate::auth::{CredentialsProvider, L2Headers, SystemClock, TimestampProvider};
use crate::error::{ApiError, ClobError};
use crate::rest::endpoints::CLOB_BASE_URL;

/// Default request timeout.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// The Polymarket CLOB REST API client.
///
/// Signs private requests with the configured credentials. Failed requests
/// are reported as-is; the client never retries.
///
/// # Example
///
/// ```rust,no_run
/// use polymarket_clob_auth::rest::ClobRestClient;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = ClobRestClient::new();
///     let time = client.get_server_time().await?;
///     println!("Server time: {}", time);
///     Ok(())
/// }
/// ```
///
/// For private endpoints, provide credentials:
///
/// ```rust,no_run
/// use polymarket_clob_auth::auth::StaticCredentials;
/// use polymarket_clob_auth::rest::ClobRestClient;
/// use std::sync::Arc;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let credentials = Arc::new(StaticCredentials::new("api_key", "c2VjcmV0", "passphrase"));
///     let client = ClobRestClient::builder()
///         .credentials(credentials)
///         .build();
///
///     let keys = client.get_api_keys().await?;
///     println!("Keys: {:?}", keys.api_keys);
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct ClobRestClient {
    http_client: ClientWithMiddleware,
    base_url: String,
    credentials: Option<Arc<dyn CredentialsProvider>>,
    timestamp_provider: Arc<dyn TimestampProvider>,
}

impl ClobRestClient {
    /// Create a new client with default settings.
    ///
    /// This client can only access public endpoints.
    /// Use [`ClobRestClient::builder()`] to configure credentials for private endpoints.
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Create a new client builder.
    pub fn builder() -> ClobRestClientBuilder {
        ClobRestClientBuilder::new()
    }

    /// Make a public GET request.
    pub(crate) async fn public_get<T>(&self, endpoint: &str) -> Result<T, ClobError>
    where
        T: serde::de::DeserializeOwned,
    {
        let url = self.url(endpoint, "")?;
        let response = self.http_client.get(url).send().await?;
        let body = self.read_body(response).await?;
        parse_json(&body)
    }

    /// Make an authenticated GET request and parse the JSON body.
    pub(crate) async fn private_get<T, Q>(&self, endpoint: &str, params: &Q) -> Result<T, ClobError>
    where
        T: serde::de::DeserializeOwned,
        Q: serde::Serialize + ?Sized,
    {
        let body = self.private_request(Method::GET, endpoint, params).await?;
        parse_json(&body)
    }

    /// Make an authenticated request and return the raw body of a success response.
    ///
    /// Only `endpoint` is signed. Query parameters go on the URL but are not
    /// part of the signed message.
    pub(crate) async fn private_request<Q>(
        &self,
        method: Method,
        endpoint: &str,
        params: &Q,
    ) -> Result<String, ClobError>
    where
        Q: serde::Serialize + ?Sized,
    {
        let credentials = self
            .credentials
            .as_ref()
            .ok_or(ClobError::MissingCredentials)?;
        let creds = credentials.get_credentials();

        let timestamp = self.timestamp_provider.timestamp();
        let headers = L2Headers::sign(creds, timestamp, method.as_str(), endpoint)?;
        tracing::debug!(method = %method, path = endpoint, timestamp, "signed CLOB request");

        let query_string = serde_urlencoded::to_string(params)
            .map_err(|e| ClobError::InvalidResponse(e.to_string()))?;
        let url = self.url(endpoint, &query_string)?;

        let response = self
            .http_client
            .request(method, url)
            .headers(headers.to_header_map()?)
            .send()
            .await?;

        self.read_body(response).await
    }

    fn url(&self, endpoint: &str, query_string: &str) -> Result<Url, ClobError> {
        let mut url = Url::parse(&format!(
            "{}{}",
            self.base_url.trim_end_matches('/'),
            endpoint
        ))?;
        if !query_string.is_empty() {
            url.set_query(Some(query_string));
        }
        Ok(url)
    }

    /// Read the body, turning non-success statuses into [`ClobError::Api`].
    async fn read_body(&self, response: reqwest::Response) -> Result<String, ClobError> {
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let error = ApiError::from_response(status.as_u16(), &body);
            tracing::warn!(status = status.as_u16(), error = %error.message, "CLOB request failed");
            return Err(ClobError::Api(error));
        }

        Ok(body)
    }
}

fn parse_json<T>(body: &str) -> Result<T, ClobError>
where
    T: serde::de::DeserializeOwned,
{
    serde_json::from_str(body).map_err(|e| {
        ClobError::InvalidResponse(format!("Failed to parse response: {}. Body: {}", e, body))
    })
}

impl Default for ClobRestClient {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ClobRestClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClobRestClient")
            .field("base_url", &self.base_url)
            .field("has_credentials", &self.credentials.is_some())
            .finish()
    }
}

/// Builder for [`ClobRestClient`].
pub struct ClobRestClientBuilder {
    base_url: String,
    credentials: Option<Arc<dyn CredentialsProvider>>,
    timestamp_provider: Option<Arc<dyn TimestampProvider>>,
    user_agent: Option<String>,
    timeout: Duration,
}

impl ClobRestClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            base_url: CLOB_BASE_URL.to_string(),
            credentials: None,
            timestamp_provider: None,
            user_agent: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Set the base URL (useful for testing with a mock server).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the credentials provider for authenticated requests.
    pub fn credentials(mut self, credentials: Arc<dyn CredentialsProvider>) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Set a custom timestamp provider.
    pub fn timestamp_provider(mut self, provider: Arc<dyn TimestampProvider>) -> Self {
        self.timestamp_provider = Some(provider);
        self
    }

    /// Set a custom user agent.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Set the per-request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build the client.
    pub fn build(self) -> ClobRestClient {
        let mut headers = HeaderMap::new();
        let user_agent = self
            .user_agent
            .unwrap_or_else(|| format!("polymarket-clob-auth/{}", env!("CARGO_PKG_VERSION")));
        let header_value = HeaderValue::from_str(&user_agent)
            .unwrap_or_else(|_| HeaderValue::from_static("polymarket-clob-auth"));
        headers.insert(USER_AGENT, header_value);

        let reqwest_client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(self.timeout)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        let client = ClientBuilder::new(reqwest_client)
            .with(TracingMiddleware::default())
            .build();

        let timestamp_provider = self
            .timestamp_provider
            .unwrap_or_else(|| Arc::new(SystemClock));

        ClobRestClient {
            http_client: client,
            base_url: self.base_url,
            credentials: self.credentials,
            timestamp_provider,
        }
    }
}

impl Default for ClobRestClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
