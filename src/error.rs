//! Error types for the CLOB auth library.

use thiserror::Error;

/// The main error type for all CLOB client operations.
#[derive(Error, Debug)]
pub enum ClobError {
    /// The API secret is not valid base64url.
    #[error("API secret must be valid base64url: {0}")]
    InvalidSecretEncoding(#[source] base64::DecodeError),

    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// HTTP request with middleware failed
    #[error("HTTP request failed: {0}")]
    HttpMiddleware(#[from] reqwest_middleware::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// URL parsing error
    #[error("URL parsing error: {0}")]
    Url(#[from] url::ParseError),

    /// The CLOB API answered with a non-success status
    #[error("CLOB API error: {0}")]
    Api(ApiError),

    /// Authentication error
    #[error("Authentication error: {0}")]
    Auth(String),

    /// A value could not be carried in an HTTP header
    #[error("Invalid header value: {0}")]
    InvalidHeader(String),

    /// Invalid response from the API
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Missing required credentials
    #[error("Missing credentials: API key, secret and passphrase required for private endpoints")]
    MissingCredentials,

    /// A required environment variable is unset or empty
    #[error("Environment variable {0} not set")]
    MissingEnvVar(String),
}

/// An error answered by the CLOB API itself.
///
/// The CLOB reports failures through the HTTP status and, usually, a JSON
/// body of the form `{"error": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    /// HTTP status code
    pub status: u16,
    /// Human-readable error message
    pub message: String,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "HTTP {}: {}", self.status, self.message)
    }
}

#[derive(serde::Deserialize)]
struct ErrorBody {
    error: String,
}

impl ApiError {
    /// Create a new API error from status and message.
    pub fn new(status: u16, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    /// Build an API error from a raw response.
    ///
    /// Uses the `error` field of a JSON body when present, the raw body otherwise.
    pub fn from_response(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<ErrorBody>(body)
            .map(|b| b.error)
            .unwrap_or_else(|_| body.trim().to_string());
        Self::new(status, message)
    }

    /// Check if the credentials or signature were rejected.
    pub fn is_unauthorized(&self) -> bool {
        self.status == 401
    }

    /// Check if this is a rate limit error.
    pub fn is_rate_limit(&self) -> bool {
        self.status == 429
    }

    /// Check if the platform failed on its side.
    pub fn is_server_error(&self) -> bool {
        (500..600).contains(&self.status)
    }
}
