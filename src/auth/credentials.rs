//! Credential management for CEX.IO API authentication.

use secrecy::{ExposeSecret, SecretString};

/// Environment variable holding the CEX.IO account username.
pub const USERNAME_VAR: &str = "CEXIO_USERNAME";
/// Environment variable holding the API key.
pub const API_KEY_VAR: &str = "CEXIO_API_KEY";
/// Environment variable holding the API secret.
pub const API_SECRET_VAR: &str = "CEXIO_API_SECRET";

/// API credentials: account username, API key and secret.
///
/// Immutable once constructed.
#[derive(Clone)]
pub struct Credentials {
    /// The account username (user ID), part of the signed message
    pub username: String,
    /// The API key (public identifier)
    pub api_key: String,
    /// The API secret (private, used for signing)
    api_secret: SecretString,
}

impl Credentials {
    /// Create new credentials from a username, API key and secret.
    pub fn new(
        username: impl Into<String>,
        api_key: impl Into<String>,
        api_secret: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            api_key: api_key.into(),
            api_secret: SecretString::from(api_secret.into()),
        }
    }

    /// Get the API secret for signing.
    ///
    /// This method exposes the secret - use carefully.
    pub fn expose_secret(&self) -> &str {
        self.api_secret.expose_secret()
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("api_key", &self.api_key)
            .field("api_secret", &"[REDACTED]")
            .finish()
    }
}

/// Trait for providing API credentials.
///
/// Implement this trait to customize how credentials are retrieved,
/// for example from a secrets manager.
pub trait CredentialsProvider: Send + Sync {
    /// Get the credentials.
    fn get_credentials(&self) -> &Credentials;
}

/// Static credentials provider that holds credentials directly.
#[derive(Clone)]
pub struct StaticCredentials {
    credentials: Credentials,
}

impl StaticCredentials {
    /// Create a new static credentials provider.
    pub fn new(
        username: impl Into<String>,
        api_key: impl Into<String>,
        api_secret: impl Into<String>,
    ) -> Self {
        Self {
            credentials: Credentials::new(username, api_key, api_secret),
        }
    }
}

impl CredentialsProvider for StaticCredentials {
    fn get_credentials(&self) -> &Credentials {
        &self.credentials
    }
}

/// Credentials provider that reads from environment variables.
///
/// By default, reads from `CEXIO_USERNAME`, `CEXIO_API_KEY` and `CEXIO_API_SECRET`.
pub struct EnvCredentials {
    credentials: Credentials,
}

impl EnvCredentials {
    /// Create credentials from default environment variables.
    ///
    /// # Panics
    ///
    /// Panics if the environment variables are not set.
    pub fn from_env() -> Self {
        Self::from_env_vars(USERNAME_VAR, API_KEY_VAR, API_SECRET_VAR)
    }

    /// Create credentials from custom environment variable names.
    ///
    /// # Panics
    ///
    /// Panics if the environment variables are not set.
    pub fn from_env_vars(username_var: &str, key_var: &str, secret_var: &str) -> Self {
        let read = |var: &str| {
            std::env::var(var).unwrap_or_else(|_| panic!("Environment variable {var} not set"))
        };

        Self {
            credentials: Credentials::new(read(username_var), read(key_var), read(secret_var)),
        }
    }

    /// Try to create credentials from default environment variables.
    ///
    /// Returns `None` if any of the environment variables is not set.
    pub fn try_from_env() -> Option<Self> {
        Self::try_from_env_vars(USERNAME_VAR, API_KEY_VAR, API_SECRET_VAR)
    }

    /// Try to create credentials from custom environment variable names.
    ///
    /// Returns `None` if any of the environment variables is not set.
    pub fn try_from_env_vars(username_var: &str, key_var: &str, secret_var: &str) -> Option<Self> {
        let username = std::env::var(username_var).ok()?;
        let api_key = std::env::var(key_var).ok()?;
        let api_secret = std::env::var(secret_var).ok()?;

        Some(Self {
            credentials: Credentials::new(username, api_key, api_secret),
        })
    }
}

impl CredentialsProvider for EnvCredentials {
    fn get_credentials(&self) -> &Credentials {
        &self.credentials
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credentials_debug_redacted() {
        let creds = Credentials::new("up123", "my_key", "super_secret");
        let debug_str = format!("{:?}", creds);
        assert!(debug_str.contains("up123"));
        assert!(debug_str.contains("my_key"));
        assert!(!debug_str.contains("super_secret"));
        assert!(debug_str.contains("[REDACTED]"));
    }

    #[test]
    fn test_static_credentials() {
        let provider = StaticCredentials::new("user", "key", "secret");
        let creds = provider.get_credentials();
        assert_eq!(creds.username, "user");
        assert_eq!(creds.api_key, "key");
        assert_eq!(creds.expose_secret(), "secret");
    }

    #[test]
    fn test_env_credentials_missing_var() {
        assert!(
            EnvCredentials::try_from_env_vars(
                "CEXIO_TEST_UNSET_USER",
                "CEXIO_TEST_UNSET_KEY",
                "CEXIO_TEST_UNSET_SECRET"
            )
            .is_none()
        );
    }
}
