use std::sync::Arc;

use tokio_test::{assert_err, assert_ok};
use wiremock::matchers::{header, header_exists, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use polymarket_clob_auth::auth::{FixedTimestamp, StaticCredentials, sign_request};
use polymarket_clob_auth::error::ClobError;
use polymarket_clob_auth::rest::ClobRestClient;
use polymarket_clob_auth::rest::private::BalanceAllowanceRequest;
use polymarket_clob_auth::types::SignatureType;
use rust_decimal::Decimal;

const API_KEY: &str = "019b92d8-9200-7e83-9d00-15e7f2e0a591";
const SECRET: &str = "FEXPvHYkCZqhb3RFQnyxppXk6_uUIep7pa0C9V_E6mE=";
const PASSPHRASE: &str = "294105b4b133c29a887cd933d37486cf";
const TIMESTAMP: i64 = 1700000000;

fn build_client(server: &MockServer) -> ClobRestClient {
    let credentials = Arc::new(StaticCredentials::new(API_KEY, SECRET, PASSPHRASE));
    ClobRestClient::builder()
        .base_url(server.uri())
        .credentials(credentials)
        .timestamp_provider(Arc::new(FixedTimestamp(TIMESTAMP)))
        .build()
}

#[tokio::test]
async fn test_get_balance_allowance_sends_signed_headers() {
    let server = MockServer::start().await;
    let response = serde_json::json!({
        "balance": "25340000",
        "allowances": {
            "0x4bFb41d5B3570DeFd03C39a9A4D8dE6Bd8B8982E": "0"
        }
    });

    // The query string is on the URL but not in the signed message.
    Mock::given(method("GET"))
        .and(path("/balance-allowance"))
        .and(query_param("asset_type", "COLLATERAL"))
        .and(query_param("signature_type", "0"))
        .and(header("POLY_API_KEY", API_KEY))
        .and(header(
            "POLY_SIGNATURE",
            "SUoB_LSDgQw62NUnfR3GPted7vP3pvWrIWglaIrwnj8=",
        ))
        .and(header("POLY_TIMESTAMP", "1700000000"))
        .and(header("POLY_PASSPHRASE", PASSPHRASE))
        .respond_with(ResponseTemplate::new(200).set_body_json(response))
        .expect(1)
        .mount(&server)
        .await;

    let client = build_client(&server);
    let request = BalanceAllowanceRequest::collateral(SignatureType::Eoa);
    let balance = client.get_balance_allowance(&request).await.unwrap();

    assert_eq!(balance.balance, Decimal::from(25_340_000));
    assert_eq!(balance.balance_usdc().to_string(), "25.34");
    assert_eq!(balance.allowances.len(), 1);
}

#[tokio::test]
async fn test_conditional_balance_query() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/balance-allowance"))
        .and(query_param("asset_type", "CONDITIONAL"))
        .and(query_param("token_id", "71321045679252212594626385532706912750332728571942532289631379312455583992563"))
        .and(query_param("signature_type", "2"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "balance": "5000000" })),
        )
        .mount(&server)
        .await;

    let client = build_client(&server);
    let request = BalanceAllowanceRequest::conditional(
        "71321045679252212594626385532706912750332728571942532289631379312455583992563",
        SignatureType::PolyGnosisSafe,
    );
    let balance = client.get_balance_allowance(&request).await.unwrap();

    assert_eq!(balance.balance, Decimal::from(5_000_000));
    assert!(balance.allowances.is_empty());
}

#[tokio::test]
async fn test_get_api_keys() {
    let server = MockServer::start().await;
    let expected = sign_request(SECRET, TIMESTAMP, "GET", "/auth/api-keys").unwrap();

    Mock::given(method("GET"))
        .and(path("/auth/api-keys"))
        .and(header("POLY_SIGNATURE", expected.as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "apiKeys": [API_KEY]
        })))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let keys = client.get_api_keys().await.unwrap();

    assert_eq!(keys.api_keys, vec![API_KEY.to_string()]);
}

#[tokio::test]
async fn test_update_balance_allowance() {
    let server = MockServer::start().await;
    let expected =
        sign_request(SECRET, TIMESTAMP, "GET", "/balance-allowance/update").unwrap();

    Mock::given(method("GET"))
        .and(path("/balance-allowance/update"))
        .and(query_param("asset_type", "COLLATERAL"))
        .and(header("POLY_SIGNATURE", expected.as_str()))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let client = build_client(&server);
    let request = BalanceAllowanceRequest::collateral(SignatureType::Eoa);
    assert_ok!(client.update_balance_allowance(&request).await);
}

#[tokio::test]
async fn test_get_server_time_is_unsigned() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/time"))
        .respond_with(ResponseTemplate::new(200).set_body_string("1700000123"))
        .mount(&server)
        .await;

    let client = ClobRestClient::builder().base_url(server.uri()).build();
    let time = client.get_server_time().await.unwrap();
    assert_eq!(time, 1700000123);

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert!(!requests[0].headers.contains_key("POLY_SIGNATURE"));
}

#[tokio::test]
async fn test_missing_credentials_fails_before_request() {
    let server = MockServer::start().await;

    Mock::given(header_exists("POLY_API_KEY"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = ClobRestClient::builder().base_url(server.uri()).build();
    let request = BalanceAllowanceRequest::collateral(SignatureType::Eoa);
    let result = client.get_balance_allowance(&request).await;

    assert!(matches!(result, Err(ClobError::MissingCredentials)));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_invalid_secret_fails_before_request() {
    let server = MockServer::start().await;
    let credentials = Arc::new(StaticCredentials::new(API_KEY, "not base64!!", PASSPHRASE));
    let client = ClobRestClient::builder()
        .base_url(server.uri())
        .credentials(credentials)
        .build();

    let result = client.get_api_keys().await;

    assert!(matches!(result, Err(ClobError::InvalidSecretEncoding(_))));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_unauthorized_maps_to_api_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/balance-allowance"))
        .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
            "error": "Unauthorized/Invalid api key"
        })))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let request = BalanceAllowanceRequest::collateral(SignatureType::Eoa);
    let error = assert_err!(client.get_balance_allowance(&request).await);

    match error {
        ClobError::Api(api_error) => {
            assert!(api_error.is_unauthorized());
            assert_eq!(api_error.message, "Unauthorized/Invalid api key");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_server_error_is_not_retried() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/auth/api-keys"))
        .respond_with(ResponseTemplate::new(503).set_body_string("Service Unavailable"))
        .expect(1)
        .mount(&server)
        .await;

    let client = build_client(&server);
    let error = assert_err!(client.get_api_keys().await);

    match error {
        ClobError::Api(api_error) => {
            assert!(api_error.is_server_error());
            assert_eq!(api_error.message, "Service Unavailable");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_malformed_success_body() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/auth/api-keys"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let result = client.get_api_keys().await;

    assert!(matches!(result, Err(ClobError::InvalidResponse(_))));
}
