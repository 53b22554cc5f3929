//! Credential management for CLOB L2 authentication.

use secrecy::{ExposeSecret, SecretString};
use std::sync::Arc;

use crate::error::ClobError;

/// Default environment variable holding the API key.
pub const ENV_API_KEY: &str = "CLOB_API_KEY";
/// Default environment variable holding the base64url API secret.
pub const ENV_API_SECRET: &str = "CLOB_API_SECRET";
/// Default environment variable holding the passphrase.
pub const ENV_PASSPHRASE: &str = "CLOB_PASSPHRASE";

/// API credentials issued by the CLOB credential endpoint.
#[derive(Clone)]
pub struct ApiCredentials {
    api_key: String,
    api_secret: SecretString,
    passphrase: SecretString,
}

impl ApiCredentials {
    /// Create new credentials from an API key, base64url secret and passphrase.
    pub fn new(
        api_key: impl Into<String>,
        api_secret: impl Into<String>,
        passphrase: impl Into<String>,
    ) -> Self {
        Self {
            api_key: api_key.into(),
            api_secret: SecretString::from(api_secret.into()),
            passphrase: SecretString::from(passphrase.into()),
        }
    }

    /// The API key (public identifier).
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Get the API secret for signing.
    ///
    /// This method exposes the secret - use carefully.
    pub fn expose_secret(&self) -> &str {
        self.api_secret.expose_secret()
    }

    /// Get the passphrase sent alongside each signed request.
    pub fn expose_passphrase(&self) -> &str {
        self.passphrase.expose_secret()
    }
}

impl std::fmt::Debug for ApiCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiCredentials")
            .field("api_key", &self.api_key)
            .field("api_secret", &"[REDACTED]")
            .field("passphrase", &"[REDACTED]")
            .finish()
    }
}

/// Trait for providing API credentials.
///
/// Implement this trait to customize how credentials are retrieved,
/// for example from a secrets manager.
pub trait CredentialsProvider: Send + Sync {
    /// Get the credentials.
    fn get_credentials(&self) -> &ApiCredentials;
}

/// Static credentials provider that holds credentials directly.
#[derive(Clone, Debug)]
pub struct StaticCredentials {
    credentials: ApiCredentials,
}

impl StaticCredentials {
    /// Create a new static credentials provider.
    pub fn new(
        api_key: impl Into<String>,
        api_secret: impl Into<String>,
        passphrase: impl Into<String>,
    ) -> Self {
        Self {
            credentials: ApiCredentials::new(api_key, api_secret, passphrase),
        }
    }
}

impl From<ApiCredentials> for StaticCredentials {
    fn from(credentials: ApiCredentials) -> Self {
        Self { credentials }
    }
}

impl CredentialsProvider for StaticCredentials {
    fn get_credentials(&self) -> &ApiCredentials {
        &self.credentials
    }
}

impl CredentialsProvider for Arc<StaticCredentials> {
    fn get_credentials(&self) -> &ApiCredentials {
        &self.credentials
    }
}

/// Credentials provider that reads from environment variables.
///
/// By default, reads `CLOB_API_KEY`, `CLOB_API_SECRET` and `CLOB_PASSPHRASE`,
/// the names printed by the credential derivation flow.
#[derive(Debug)]
pub struct EnvCredentials {
    credentials: ApiCredentials,
}

impl EnvCredentials {
    /// Create credentials from default environment variables.
    ///
    /// # Errors
    ///
    /// Returns [`ClobError::MissingEnvVar`] if any variable is unset or empty.
    pub fn from_env() -> Result<Self, ClobError> {
        Self::from_env_vars(ENV_API_KEY, ENV_API_SECRET, ENV_PASSPHRASE)
    }

    /// Create credentials from custom environment variable names.
    ///
    /// # Errors
    ///
    /// Returns [`ClobError::MissingEnvVar`] if any variable is unset or empty.
    pub fn from_env_vars(
        key_var: &str,
        secret_var: &str,
        passphrase_var: &str,
    ) -> Result<Self, ClobError> {
        let api_key = read_var(key_var)?;
        let api_secret = read_var(secret_var)?;
        let passphrase = read_var(passphrase_var)?;

        Ok(Self {
            credentials: ApiCredentials::new(api_key, api_secret, passphrase),
        })
    }

    /// Try to create credentials from default environment variables.
    ///
    /// Returns `None` if any variable is unset or empty.
    pub fn try_from_env() -> Option<Self> {
        Self::from_env().ok()
    }
}

fn read_var(name: &str) -> Result<String, ClobError> {
    match std::env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value.trim().to_string()),
        _ => Err(ClobError::MissingEnvVar(name.to_string())),
    }
}

impl CredentialsProvider for EnvCredentials {
    fn get_credentials(&self) -> &ApiCredentials {
        &self.credentials
    }
}
