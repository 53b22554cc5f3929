use std::sync::Arc;

use polymarket_clob_auth::auth::EnvCredentials;
use polymarket_clob_auth::rest::ClobRestClient;
use polymarket_clob_auth::rest::private::BalanceAllowanceRequest;
use polymarket_clob_auth::types::SignatureType;

fn live_tests_enabled() -> bool {
    std::env::var("CLOB_LIVE_TESTS").ok().as_deref() == Some("1")
}

#[tokio::test]
#[ignore]
async fn live_server_time_smoke() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenv::dotenv();
    if !live_tests_enabled() {
        return Ok(());
    }

    let client = ClobRestClient::new();
    let server_time = client.get_server_time().await?;
    assert!(server_time > 1_700_000_000);

    Ok(())
}

#[tokio::test]
#[ignore]
async fn live_credentials_smoke() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenv::dotenv();
    if !live_tests_enabled() {
        return Ok(());
    }

    let credentials = match EnvCredentials::try_from_env() {
        Some(creds) => creds,
        None => return Ok(()),
    };
    let signature_type: SignatureType = std::env::var("SIGNATURE_TYPE")
        .unwrap_or_else(|_| "0".to_string())
        .parse()?;
    let client = ClobRestClient::builder()
        .credentials(Arc::new(credentials))
        .build();

    let keys = client.get_api_keys().await?;
    assert!(!keys.api_keys.is_empty());

    let request = BalanceAllowanceRequest::collateral(signature_type);
    let _balance = client.get_balance_allowance(&request).await?;

    Ok(())
}
