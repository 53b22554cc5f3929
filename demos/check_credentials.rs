//! Example: Check that CLOB API credentials are accepted.
//!
//! Run with: cargo run --example check_credentials
//!
//! Reads `CLOB_API_KEY`, `CLOB_API_SECRET`, `CLOB_PASSPHRASE` and optionally
//! `SIGNATURE_TYPE` (0 = EOA, 1 = email/Magic, 2 = browser proxy).

use std::sync::Arc;

use polymarket_clob_auth::auth::{EnvCredentials, SystemClock, TimestampProvider};
use polymarket_clob_auth::error::ClobError;
use polymarket_clob_auth::rest::private::BalanceAllowanceRequest;
use polymarket_clob_auth::rest::{CLOB_BASE_URL, ClobRestClient};
use polymarket_clob_auth::types::SignatureType;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenv::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let signature_type: SignatureType = std::env::var("SIGNATURE_TYPE")
        .unwrap_or_else(|_| "0".to_string())
        .parse()?;

    let credentials = match EnvCredentials::from_env() {
        Ok(creds) => creds,
        Err(e) => {
            println!("Error: {}", e);
            println!("Export CLOB_API_KEY, CLOB_API_SECRET and CLOB_PASSPHRASE first.");
            return Ok(());
        }
    };

    println!("Host: {}", CLOB_BASE_URL);
    println!("Signature Type: {}", signature_type);

    let client = ClobRestClient::builder()
        .credentials(Arc::new(credentials))
        .build();

    // A skewed local clock is a common cause of rejected signatures.
    match client.get_server_time().await {
        Ok(server_time) => {
            let skew = SystemClock.timestamp() - server_time;
            println!("Clock skew: {}s", skew);
        }
        Err(e) => println!("Server time unavailable: {}", e),
    }

    let request = BalanceAllowanceRequest::collateral(signature_type);
    match client.get_balance_allowance(&request).await {
        Ok(balance) => println!("Balance: ${:.2} USDC", balance.balance_usdc()),
        Err(ClobError::Api(api_error)) if api_error.is_unauthorized() => {
            println!("Credentials rejected: {}", api_error.message);
            println!("Check the key, secret and passphrase, and that SIGNATURE_TYPE matches the wallet.");
        }
        Err(e) => println!("Balance check failed: {}", e),
    }

    Ok(())
}
