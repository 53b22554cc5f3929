//! # Polymarket CLOB Auth
//!
//! Request signing and authenticated REST access for the Polymarket CLOB API.
//!
//! ## Features
//!
//! - HMAC-SHA256 request signing with base64url secrets
//! - The four `POLY_*` authentication headers, ready for any HTTP transport
//! - Credentials passed explicitly, with redacted `Debug` output
//! - A small async client for the endpoints used to verify credentials
//!
//! ## Quick Start
//!
//! ```rust
//! use polymarket_clob_auth::auth::{ApiCredentials, L2Headers};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let credentials = ApiCredentials::new(
//!     "019b92d8-0000-0000-0000-000000000000",
//!     "FEXPvHYkCZqhb3RFQnyxppXk6_uUIep7pa0C9V_E6mE=",
//!     "passphrase",
//! );
//! let headers = L2Headers::sign(&credentials, 1700000000, "GET", "/balance-allowance")?;
//! for (name, value) in headers.iter() {
//!     println!("{name}: {value}");
//! }
//! # Ok(())
//! # }
//! ```

pub mod auth;
pub mod error;
pub mod rest;
pub mod types;

// Re-export commonly used types at crate root
pub use auth::{ApiCredentials, L2Headers, sign_request};
pub use error::ClobError;
pub use types::{AssetType, SignatureType};

/// Result type alias using ClobError
pub type Result<T> = std::result::Result<T, ClobError>;
