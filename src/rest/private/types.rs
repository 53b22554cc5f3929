//! Types for private REST API endpoints.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::types::{AssetType, SignatureType};

/// USDC collateral is denominated in micro-units.
const USDC_DECIMALS: u32 = 6;

/// Request for balance and allowances.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BalanceAllowanceRequest {
    /// Asset class to query.
    pub asset_type: AssetType,
    /// Outcome token id, required for conditional assets.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token_id: Option<String>,
    /// Signature type of the funding account.
    pub signature_type: SignatureType,
}

impl BalanceAllowanceRequest {
    /// Query the USDC collateral balance.
    pub fn collateral(signature_type: SignatureType) -> Self {
        Self {
            asset_type: AssetType::Collateral,
            token_id: None,
            signature_type,
        }
    }

    /// Query the balance of one outcome token.
    pub fn conditional(token_id: impl Into<String>, signature_type: SignatureType) -> Self {
        Self {
            asset_type: AssetType::Conditional,
            token_id: Some(token_id.into()),
            signature_type,
        }
    }
}

/// Balance and allowances response.
///
/// Allowances are kept as strings: unlimited approvals are `2^256 - 1`,
/// which does not fit a `Decimal`.
#[derive(Debug, Clone, Deserialize)]
pub struct BalanceAllowance {
    /// Balance in the asset's smallest unit.
    pub balance: Decimal,
    /// Single allowance, when the CLOB reports one.
    #[serde(default)]
    pub allowance: Option<String>,
    /// Allowances keyed by spender contract address.
    #[serde(default)]
    pub allowances: HashMap<String, String>,
}

impl BalanceAllowance {
    /// Collateral balance in whole USDC.
    pub fn balance_usdc(&self) -> Decimal {
        (self.balance * Decimal::new(1, USDC_DECIMALS)).normalize()
    }
}

/// API keys owned by the authenticated account.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiKeys {
    /// Key identifiers.
    #[serde(rename = "apiKeys", default)]
    pub api_keys: Vec<String>,
}
