//! Private REST API endpoints (L2 authentication required).
//!
//! These endpoints require API credentials to be configured on the client.

mod types;

pub use types::*;

use reqwest::Method;

use crate::error::ClobError;
use crate::rest::ClobRestClient;
use crate::rest::endpoints::private;

impl ClobRestClient {
    /// Get balance and allowances.
    ///
    /// A successful call proves the credentials are accepted.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use polymarket_clob_auth::auth::StaticCredentials;
    /// use polymarket_clob_auth::rest::ClobRestClient;
    /// use polymarket_clob_auth::rest::private::BalanceAllowanceRequest;
    /// use polymarket_clob_auth::types::SignatureType;
    /// use std::sync::Arc;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let credentials = Arc::new(StaticCredentials::new("key", "c2VjcmV0", "pass"));
    ///     let client = ClobRestClient::builder().credentials(credentials).build();
    ///
    ///     let request = BalanceAllowanceRequest::collateral(SignatureType::Eoa);
    ///     let balance = client.get_balance_allowance(&request).await?;
    ///     println!("{} USDC", balance.balance_usdc());
    ///     Ok(())
    /// }
    /// ```
    pub async fn get_balance_allowance(
        &self,
        request: &BalanceAllowanceRequest,
    ) -> Result<BalanceAllowance, ClobError> {
        self.private_get(private::BALANCE_ALLOWANCE, request).await
    }

    /// Ask the CLOB to refresh its cached balance and allowances.
    pub async fn update_balance_allowance(
        &self,
        request: &BalanceAllowanceRequest,
    ) -> Result<(), ClobError> {
        self.private_request(Method::GET, private::UPDATE_BALANCE_ALLOWANCE, request)
            .await?;
        Ok(())
    }

    /// List the API keys of the account.
    pub async fn get_api_keys(&self) -> Result<ApiKeys, ClobError> {
        self.private_get(private::API_KEYS, &[] as &[(&str, &str)]).await
    }
}
