//! Example: Sign a request and print the authentication headers.
//!
//! Run with: cargo run --example sign_request -- [METHOD] [PATH]
//!
//! Reads `CLOB_API_KEY`, `CLOB_API_SECRET` and `CLOB_PASSPHRASE` (a `.env`
//! file is honoured). Nothing is sent over the network.

use polymarket_clob_auth::auth::{
    CredentialsProvider, EnvCredentials, L2Headers, SystemClock, TimestampProvider,
    canonical_message,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenv::dotenv();

    let mut args = std::env::args().skip(1);
    let method = args.next().unwrap_or_else(|| "GET".to_string());
    let path = args.next().unwrap_or_else(|| "/balance-allowance".to_string());

    let provider = EnvCredentials::from_env()?;
    let credentials = provider.get_credentials();

    let timestamp = SystemClock.timestamp();
    println!("Timestamp: {}", timestamp);
    println!("Message: {}", canonical_message(timestamp, &method, &path));

    let headers = L2Headers::sign(credentials, timestamp, &method, &path)?;
    println!("Signature: {}", headers.signature());
    for (name, value) in headers.iter() {
        println!("{}: {}", name, value);
    }

    Ok(())
}
