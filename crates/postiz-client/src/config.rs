//! Connection settings for the Postiz public API.

use secrecy::{ExposeSecret, SecretString};

use crate::error::{ClientError, ClientResult};

/// Hosted Postiz instance used when no override is given.
pub const DEFAULT_BASE_URL: &str = "https://postiz.com";

/// Path prefix of the public API, appended to the base URL.
pub const API_PREFIX: &str = "/api/public/v1";

/// Environment variable holding the API key.
pub const API_KEY_ENV: &str = "POSTIZ_API_KEY";

/// Environment variable overriding [`DEFAULT_BASE_URL`].
pub const API_URL_ENV: &str = "POSTIZ_API_URL";

/// Static credential and base URL, fixed for the lifetime of a client.
#[derive(Debug)]
pub struct ClientConfig {
    base_url: String,
    api_key: SecretString,
}

impl ClientConfig {
    /// Build a config, rejecting an empty API key.
    ///
    /// `base_url` falls back to [`DEFAULT_BASE_URL`] when `None` or blank.
    pub fn new(api_key: impl Into<String>, base_url: Option<&str>) -> ClientResult<Self> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(ClientError::config_error(format!(
                "{API_KEY_ENV} environment variable is required"
            )));
        }

        let base_url = base_url
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_BASE_URL)
            .trim_end_matches('/')
            .to_string();

        Ok(Self {
            base_url,
            api_key: SecretString::from(api_key),
        })
    }

    /// Read `POSTIZ_API_KEY` and `POSTIZ_API_URL` from the process environment.
    pub fn from_env() -> ClientResult<Self> {
        let api_key = std::env::var(API_KEY_ENV).unwrap_or_default();
        let base_url = std::env::var(API_URL_ENV).ok();
        Self::new(api_key, base_url.as_deref())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL of an API endpoint, e.g. `/posts` → `{base}/api/public/v1/posts`.
    pub fn endpoint_url(&self, endpoint: &str) -> String {
        format!("{}{}{}", self.base_url, API_PREFIX, endpoint)
    }

    pub(crate) fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_base_url() {
        let config = ClientConfig::new("key", None).unwrap();
        assert_eq!(config.base_url(), "https://postiz.com");
        assert_eq!(
            config.endpoint_url("/integrations"),
            "https://postiz.com/api/public/v1/integrations"
        );
    }

    #[test]
    fn test_base_url_override_strips_trailing_slash() {
        let config = ClientConfig::new("key", Some("http://localhost:5000/")).unwrap();
        assert_eq!(config.base_url(), "http://localhost:5000");
        assert_eq!(
            config.endpoint_url("/posts"),
            "http://localhost:5000/api/public/v1/posts"
        );
    }

    #[test]
    fn test_blank_base_url_uses_default() {
        let config = ClientConfig::new("key", Some("  ")).unwrap();
        assert_eq!(config.base_url(), DEFAULT_BASE_URL);
    }

    #[test]
    fn test_empty_api_key_rejected() {
        let err = ClientConfig::new("", None).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Configuration error: POSTIZ_API_KEY environment variable is required"
        );
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let config = ClientConfig::new("super-secret-key", None).unwrap();
        let debug = format!("{:?}", config);
        assert!(!debug.contains("super-secret-key"));
        assert_eq!(config.api_key(), "super-secret-key");
    }
}
