//! Client configuration and credentials.

use std::fmt;
use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};

use crate::client::paginated::DEFAULT_PAGE_SIZE;
use crate::{Error, Result};

/// Production base URL of the MercadoPago REST API.
pub const DEFAULT_API_URL: &str = "https://api.mercadopago.com";

/// OAuth client credentials issued by MercadoPago for an application.
///
/// The secret is held in a [`SecretString`] and never appears in `Debug`
/// output.
///
/// # Example
///
/// ```
/// use mercadopago_rs::Credentials;
///
/// let credentials = Credentials::new("1234567890", "client-secret");
/// assert_eq!(credentials.client_id(), "1234567890");
/// ```
#[derive(Clone)]
pub struct Credentials {
    client_id: String,
    client_secret: SecretString,
}

impl Credentials {
    /// Create credentials from a client id and secret.
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: SecretString::from(client_secret.into()),
        }
    }

    /// Load credentials from the `CLIENT_ID` and `CLIENT_SECRET`
    /// environment variables.
    pub fn from_env() -> Result<Self> {
        let client_id = std::env::var("CLIENT_ID")
            .map_err(|_| Error::Config("CLIENT_ID is not set".to_string()))?;
        let client_secret = std::env::var("CLIENT_SECRET")
            .map_err(|_| Error::Config("CLIENT_SECRET is not set".to_string()))?;
        Ok(Self::new(client_id, client_secret))
    }

    /// The application's client id.
    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    /// The application's client secret.
    pub fn client_secret(&self) -> &SecretString {
        &self.client_secret
    }

    pub(crate) fn expose_secret(&self) -> &str {
        self.client_secret.expose_secret()
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"[REDACTED]")
            .finish()
    }
}

/// Configuration for the MercadoPago client.
///
/// # Example
///
/// ```
/// use mercadopago_rs::ClientConfig;
/// use std::time::Duration;
///
/// let config = ClientConfig::default()
///     .with_timeout(Duration::from_secs(60))
///     .with_user_agent("my-shop/1.0")
///     .with_page_size(50);
/// ```
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL every request path is appended to
    pub api_base_url: String,
    /// Request timeout
    pub timeout: Duration,
    /// User-Agent header value
    pub user_agent: String,
    /// Records requested per page when auto-paginating a search.
    ///
    /// Keep this at or below the provider's maximum `limit`; a capped page
    /// looks like a short page and ends the walk early.
    pub page_size: u32,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            timeout: Duration::from_secs(30),
            user_agent: format!("mercadopago-rs/{} (Rust)", env!("CARGO_PKG_VERSION")),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl ClientConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a configuration from the environment.
    ///
    /// Reads `MERCADOPAGO_API_URL`, `MERCADOPAGO_TIMEOUT_SECS` and
    /// `MERCADOPAGO_PAGE_SIZE`; unset variables keep their defaults.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(url) = lookup("MERCADOPAGO_API_URL") {
            config.api_base_url = url;
        }
        if let Some(secs) = lookup("MERCADOPAGO_TIMEOUT_SECS") {
            let secs: u64 = secs.parse().map_err(|_| {
                Error::Config(format!("MERCADOPAGO_TIMEOUT_SECS is not a number: {}", secs))
            })?;
            config.timeout = Duration::from_secs(secs);
        }
        if let Some(size) = lookup("MERCADOPAGO_PAGE_SIZE") {
            config.page_size = size.parse().map_err(|_| {
                Error::Config(format!("MERCADOPAGO_PAGE_SIZE is not a number: {}", size))
            })?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Point the client at a different API host (a proxy or a mock server).
    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the User-Agent header.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set the page size used by auto-pagination.
    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }

    /// Check the configuration for values the client cannot work with.
    pub fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            return Err(Error::Config("page_size must be at least 1".to_string()));
        }
        url::Url::parse(&self.api_base_url)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.api_base_url, "https://api.mercadopago.com");
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.page_size, 30);
        assert!(config.user_agent.starts_with("mercadopago-rs/"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_from_lookup() {
        let config = ClientConfig::from_lookup(lookup(&[
            ("MERCADOPAGO_API_URL", "http://localhost:8080"),
            ("MERCADOPAGO_TIMEOUT_SECS", "5"),
            ("MERCADOPAGO_PAGE_SIZE", "50"),
        ]))
        .unwrap();

        assert_eq!(config.api_base_url, "http://localhost:8080");
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.page_size, 50);
    }

    #[test]
    fn test_config_from_lookup_rejects_garbage() {
        let err = ClientConfig::from_lookup(lookup(&[("MERCADOPAGO_PAGE_SIZE", "lots")]))
            .unwrap_err();
        assert!(matches!(err, Error::Config(_)));

        let err = ClientConfig::from_lookup(lookup(&[("MERCADOPAGO_PAGE_SIZE", "0")]))
            .unwrap_err();
        assert!(matches!(err, Error::Config(_)));

        let err = ClientConfig::from_lookup(lookup(&[("MERCADOPAGO_API_URL", "not a url")]))
            .unwrap_err();
        assert!(matches!(err, Error::UrlParse(_)));
    }

    #[test]
    fn test_credentials_debug_redacts_secret() {
        let credentials = Credentials::new("1234", "super-secret");
        let debug_str = format!("{:?}", credentials);
        assert!(debug_str.contains("1234"));
        assert!(!debug_str.contains("super-secret"));
        assert!(debug_str.contains("REDACTED"));
    }
}
