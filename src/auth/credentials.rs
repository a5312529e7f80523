//! API key management for LiveCoinWatch authentication.

use secrecy::{ExposeSecret, SecretString};

/// Default environment variable holding the API key.
pub const API_KEY_ENV_VAR: &str = "LIVECOINWATCH_API_KEY";

/// The LiveCoinWatch API key, sent as the `x-api-key` header.
///
/// The key is kept in a [`SecretString`] so it never shows up in `Debug` output
/// or logs.
#[derive(Clone)]
pub struct ApiKey {
    key: SecretString,
}

impl ApiKey {
    /// Create an API key from a string.
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: SecretString::from(key.into()),
        }
    }

    /// Get the raw key for the request header.
    ///
    /// This method exposes the secret - use carefully.
    pub fn expose_secret(&self) -> &str {
        self.key.expose_secret()
    }

    /// Read the key from `LIVECOINWATCH_API_KEY`.
    ///
    /// # Panics
    ///
    /// Panics if the environment variable is not set.
    pub fn from_env() -> Self {
        Self::from_env_var(API_KEY_ENV_VAR)
    }

    /// Read the key from a custom environment variable.
    ///
    /// # Panics
    ///
    /// Panics if the environment variable is not set.
    pub fn from_env_var(var: &str) -> Self {
        Self::try_from_env_var(var)
            .unwrap_or_else(|| panic!("Environment variable {var} not set"))
    }

    /// Try to read the key from `LIVECOINWATCH_API_KEY`.
    ///
    /// Returns `None` if the environment variable is not set.
    pub fn try_from_env() -> Option<Self> {
        Self::try_from_env_var(API_KEY_ENV_VAR)
    }

    /// Try to read the key from a custom environment variable.
    ///
    /// Returns `None` if the environment variable is not set.
    pub fn try_from_env_var(var: &str) -> Option<Self> {
        std::env::var(var).ok().map(Self::new)
    }
}

impl std::fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("ApiKey").field(&"[REDACTED]").finish()
    }
}

impl From<&str> for ApiKey {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}

impl From<String> for ApiKey {
    fn from(key: String) -> Self {
        Self::new(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_key_debug_redacted() {
        let key = ApiKey::new("super_secret_key");
        let debug_str = format!("{:?}", key);
        assert!(!debug_str.contains("super_secret_key"));
        assert!(debug_str.contains("[REDACTED]"));
    }

    #[test]
    fn test_api_key_expose() {
        let key: ApiKey = "abc-123".into();
        assert_eq!(key.expose_secret(), "abc-123");
    }

    #[test]
    fn test_missing_env_var() {
        assert!(ApiKey::try_from_env_var("LIVECOINWATCH_TEST_KEY_THAT_IS_NEVER_SET").is_none());
    }
}
