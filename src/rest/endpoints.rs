//! CLOB REST API endpoint constants.

/// Base URL for the Polymarket CLOB REST API.
pub const CLOB_BASE_URL: &str = "https://clob.polymarket.com";

/// Public endpoints (no authentication required).
pub mod public {
    /// Get server time.
    pub const TIME: &str = "/time";
}

/// Private endpoints (L2 authentication required).
pub mod private {
    /// Get balance and allowances for an asset.
    pub const BALANCE_ALLOWANCE: &str = "/balance-allowance";
    /// Ask the CLOB to refresh its cached balance and allowances.
    pub const UPDATE_BALANCE_ALLOWANCE: &str = "/balance-allowance/update";
    /// List the API keys of the account.
    pub const API_KEYS: &str = "/auth/api-keys";
}
