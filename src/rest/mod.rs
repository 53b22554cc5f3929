//! Polymarket CLOB REST API client.
//!
//! Covers the public server clock and the private endpoints used to check
//! that a set of API credentials is accepted.
//!
//! ```rust,no_run
//! use polymarket_clob_auth::auth::EnvCredentials;
//! use polymarket_clob_auth::rest::ClobRestClient;
//! use polymarket_clob_auth::rest::private::BalanceAllowanceRequest;
//! use polymarket_clob_auth::types::SignatureType;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let credentials = Arc::new(EnvCredentials::from_env()?);
//!     let client = ClobRestClient::builder().credentials(credentials).build();
//!
//!     let request = BalanceAllowanceRequest::collateral(SignatureType::Eoa);
//!     let balance = client.get_balance_allowance(&request).await?;
//!     println!("Balance: ${:.2} USDC", balance.balance_usdc());
//!     Ok(())
//! }
//! ```

mod client;
mod endpoints;
pub mod private;
pub mod public;

pub use client::{ClobRestClient, ClobRestClientBuilder};
pub use endpoints::*;
