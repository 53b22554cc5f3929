//! Public REST API endpoints (no authentication required).

use crate::error::ClobError;
use crate::rest::ClobRestClient;
use crate::rest::endpoints::public;

impl ClobRestClient {
    /// Get the server time in unix seconds.
    ///
    /// Useful to detect clock skew before signing: the CLOB rejects
    /// `POLY_TIMESTAMP` values too far from its own clock.
    pub async fn get_server_time(&self) -> Result<i64, ClobError> {
        self.public_get(public::TIME).await
    }
}
