//! Authentication module for the CLOB API.
//!
//! This module provides:
//! - Credential management with secure secret storage
//! - Timestamp sources for signed requests
//! - HMAC-SHA256 signature generation and the `POLY_*` header set

mod credentials;
mod headers;
mod signature;
mod timestamp;

pub use credentials::{
    ApiCredentials, CredentialsProvider, ENV_API_KEY, ENV_API_SECRET, ENV_PASSPHRASE,
    EnvCredentials, StaticCredentials,
};
pub use headers::{L2Headers, POLY_API_KEY, POLY_PASSPHRASE, POLY_SIGNATURE, POLY_TIMESTAMP};
pub use signature::{canonical_message, sign_request};
pub use timestamp::{FixedTimestamp, SystemClock, TimestampProvider};
