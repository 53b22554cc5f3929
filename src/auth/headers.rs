//! The `POLY_*` header set carried by every signed request.

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};

use crate::auth::{ApiCredentials, sign_request};
use crate::error::ClobError;

/// Header carrying the API key.
pub const POLY_API_KEY: &str = "POLY_API_KEY";
/// Header carrying the request signature.
pub const POLY_SIGNATURE: &str = "POLY_SIGNATURE";
/// Header carrying the signing timestamp.
pub const POLY_TIMESTAMP: &str = "POLY_TIMESTAMP";
/// Header carrying the passphrase.
pub const POLY_PASSPHRASE: &str = "POLY_PASSPHRASE";

/// Authentication headers for one signed request.
#[derive(Clone, PartialEq, Eq)]
pub struct L2Headers {
    api_key: String,
    signature: String,
    timestamp: String,
    passphrase: String,
}

impl L2Headers {
    /// Sign `method` + `path` at `timestamp` and collect the four headers.
    ///
    /// # Errors
    ///
    /// Returns [`ClobError::InvalidSecretEncoding`] if the secret is not base64url.
    ///
    /// # Example
    ///
    /// ```rust
    /// use polymarket_clob_auth::auth::{ApiCredentials, L2Headers};
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let creds = ApiCredentials::new(
    ///     "019b92d8-0000-0000-0000-000000000000",
    ///     "FEXPvHYkCZqhb3RFQnyxppXk6_uUIep7pa0C9V_E6mE=",
    ///     "passphrase",
    /// );
    /// let headers = L2Headers::sign(&creds, 1700000000, "GET", "/balance-allowance")?;
    /// assert_eq!(headers.timestamp(), "1700000000");
    /// assert_eq!(headers.iter().count(), 4);
    /// # Ok(())
    /// # }
    /// ```
    pub fn sign(
        credentials: &ApiCredentials,
        timestamp: i64,
        method: &str,
        path: &str,
    ) -> Result<Self, ClobError> {
        let signature = sign_request(credentials.expose_secret(), timestamp, method, path)?;

        Ok(Self {
            api_key: credentials.api_key().to_string(),
            signature,
            timestamp: timestamp.to_string(),
            passphrase: credentials.expose_passphrase().to_string(),
        })
    }

    /// The `POLY_SIGNATURE` value.
    pub fn signature(&self) -> &str {
        &self.signature
    }

    /// The `POLY_TIMESTAMP` value.
    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    /// Iterate over the four (header name, value) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        [
            (POLY_API_KEY, self.api_key.as_str()),
            (POLY_SIGNATURE, self.signature.as_str()),
            (POLY_TIMESTAMP, self.timestamp.as_str()),
            (POLY_PASSPHRASE, self.passphrase.as_str()),
        ]
        .into_iter()
    }

    /// Convert into a header map for the HTTP transport.
    ///
    /// Header names are lowercased on the wire; HTTP header names are case-insensitive.
    pub fn to_header_map(&self) -> Result<HeaderMap, ClobError> {
        let mut map = HeaderMap::with_capacity(4);
        for (name, value) in self.iter() {
            let header_name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|e| ClobError::InvalidHeader(format!("{name}: {e}")))?;
            let mut header_value = HeaderValue::from_str(value)
                .map_err(|e| ClobError::InvalidHeader(format!("{name}: {e}")))?;
            if name != POLY_TIMESTAMP {
                header_value.set_sensitive(true);
            }
            map.insert(header_name, header_value);
        }
        Ok(map)
    }
}

impl std::fmt::Debug for L2Headers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("L2Headers")
            .field("api_key", &self.api_key)
            .field("signature", &"[REDACTED]")
            .field("timestamp", &self.timestamp)
            .field("passphrase", &"[REDACTED]")
            .finish()
    }
}
