//! HMAC-SHA256 signature generation for CLOB L2 authentication.
//!
//! Private CLOB endpoints require a signature computed as:
//! ```text
//! base64url(HMAC-SHA256(timestamp + method + path, base64url_decode(api_secret)))
//! ```
//!
//! The signature is then sent in the `POLY_SIGNATURE` header.

use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use base64::Engine;
use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::error::ClobError;

type HmacSha256 = Hmac<Sha256>;

/// URL-safe base64 that always pads on encode and accepts secrets with or
/// without padding on decode.
pub(crate) const BASE64_URL: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new()
        .with_encode_padding(true)
        .with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Build the message the signature is computed over.
///
/// Method and path are used verbatim. A query string is only part of the
/// message if the caller includes it in `path`.
pub fn canonical_message(timestamp: i64, method: &str, path: &str) -> String {
    format!("{timestamp}{method}{path}")
}

/// Sign a request for the CLOB private API.
///
/// # Arguments
///
/// * `api_secret` - The base64url-encoded API secret
/// * `timestamp` - Unix time in seconds, as sent in `POLY_TIMESTAMP`
/// * `method` - The HTTP method (e.g., "GET")
/// * `path` - The request path (e.g., "/balance-allowance")
///
/// # Returns
///
/// Padded base64url-encoded HMAC-SHA256 signature.
///
/// # Example
///
/// ```rust
/// use polymarket_clob_auth::auth::sign_request;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let signature = sign_request(
///     "FEXPvHYkCZqhb3RFQnyxppXk6_uUIep7pa0C9V_E6mE=",
///     1700000000,
///     "GET",
///     "/balance-allowance",
/// )?;
/// assert_eq!(signature, "SUoB_LSDgQw62NUnfR3GPted7vP3pvWrIWglaIrwnj8=");
/// # Ok(())
/// # }
/// ```
pub fn sign_request(
    api_secret: &str,
    timestamp: i64,
    method: &str,
    path: &str,
) -> Result<String, ClobError> {
    let secret_decoded = BASE64_URL
        .decode(api_secret)
        .map_err(ClobError::InvalidSecretEncoding)?;

    let message = canonical_message(timestamp, method, path);

    let mut hmac = HmacSha256::new_from_slice(&secret_decoded)
        .map_err(|e| ClobError::Auth(format!("Invalid HMAC key: {e}")))?;
    hmac.update(message.as_bytes());
    let hmac_result = hmac.finalize().into_bytes();

    Ok(BASE64_URL.encode(hmac_result))
}
