//! Common domain types for the CLOB API.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// How the account that owns the API key signs orders.
///
/// Sent to the CLOB as its integer code.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum SignatureType {
    /// Externally owned account signing directly
    #[default]
    Eoa,
    /// Email / Magic wallet proxy
    PolyProxy,
    /// Browser wallet behind a Gnosis Safe proxy
    PolyGnosisSafe,
}

impl From<SignatureType> for u8 {
    fn from(value: SignatureType) -> Self {
        match value {
            SignatureType::Eoa => 0,
            SignatureType::PolyProxy => 1,
            SignatureType::PolyGnosisSafe => 2,
        }
    }
}

impl TryFrom<u8> for SignatureType {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(SignatureType::Eoa),
            1 => Ok(SignatureType::PolyProxy),
            2 => Ok(SignatureType::PolyGnosisSafe),
            other => Err(format!("unknown signature type {other}")),
        }
    }
}

impl FromStr for SignatureType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code: u8 = s
            .trim()
            .parse()
            .map_err(|_| format!("signature type must be 0, 1 or 2, got {s:?}"))?;
        Self::try_from(code)
    }
}

impl std::fmt::Display for SignatureType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", u8::from(*self))
    }
}

/// Asset class of a balance query.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AssetType {
    /// USDC collateral
    #[default]
    Collateral,
    /// Outcome tokens of a market (requires a token id)
    Conditional,
}

impl std::fmt::Display for AssetType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AssetType::Collateral => write!(f, "COLLATERAL"),
            AssetType::Conditional => write!(f, "CONDITIONAL"),
        }
    }
}
