use crate::error::{JotFormError, Result};
use reqwest::blocking::{Client, ClientBuilder};
use std::env;
use std::fmt;

/// Default API host
pub const DEFAULT_BASE_URL: &str = "https://api.jotform.com";

/// Default API version path segment
pub const DEFAULT_API_VERSION: &str = "v1";

/// Environment variable holding the API key
pub const ENV_API_KEY: &str = "JOTFORM_API_KEY";
/// Environment variable overriding the base URL
pub const ENV_BASE_URL: &str = "JOTFORM_BASE_URL";
/// Environment variable overriding the API version
pub const ENV_API_VERSION: &str = "JOTFORM_API_VERSION";

/// Create the HTTP client used for API requests.
///
/// Idle connections are not kept, so every call opens its own connection.
/// Timeouts are left at reqwest's defaults.
pub fn create_rest_client() -> Result<Client> {
    ClientBuilder::new()
        .pool_max_idle_per_host(0)
        .user_agent(concat!("jotform-rust/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| JotFormError::RequestBuild(format!("failed to create HTTP client: {}", e)))
}

/// Configuration for the API client
#[derive(Clone, PartialEq, Eq)]
pub struct Config {
    /// API key, sent as the `apiKey` query parameter on every request
    pub api_key: String,
    /// Scheme and host, without trailing slash
    pub base_url: String,
    /// API version segment, e.g. `v1`
    pub api_version: String,
}

impl Config {
    /// Create a new configuration for the given API key with default host and version
    pub fn new(api_key: impl Into<String>) -> Self {
        Config {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            api_version: DEFAULT_API_VERSION.to_string(),
        }
    }

    /// Read configuration from `JOTFORM_API_KEY`, `JOTFORM_BASE_URL` and
    /// `JOTFORM_API_VERSION`. Only the key is required.
    pub fn from_env() -> Result<Self> {
        let api_key = env::var(ENV_API_KEY)
            .ok()
            .filter(|k| !k.is_empty())
            .ok_or(JotFormError::MissingApiKey)?;

        let mut config = Config::new(api_key);
        if let Ok(base_url) = env::var(ENV_BASE_URL) {
            config = config.with_base_url(base_url);
        }
        if let Ok(version) = env::var(ENV_API_VERSION) {
            config = config.with_api_version(version);
        }
        Ok(config)
    }

    /// Set the base URL (scheme and host)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    /// Set the API version segment
    pub fn with_api_version(mut self, api_version: impl Into<String>) -> Self {
        self.api_version = api_version.into();
        self
    }

    /// Full URL for an endpoint, without the authentication query
    pub fn endpoint_url(&self, endpoint: &str) -> String {
        format!("{}/{}/{}", self.base_url, self.api_version, endpoint)
    }
}

// Implement Debug manually to avoid exposing the API key
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("api_version", &self.api_version)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = Config::new("abc123");
        assert_eq!(config.api_key, "abc123");
        assert_eq!(config.base_url, "https://api.jotform.com");
        assert_eq!(config.api_version, "v1");
    }

    #[test]
    fn test_endpoint_url() {
        let config = Config::new("k")
            .with_base_url("https://eu-api.jotform.com/")
            .with_api_version("v2");
        assert_eq!(
            config.endpoint_url("form/123/questions"),
            "https://eu-api.jotform.com/v2/form/123/questions"
        );
    }

    #[test]
    fn test_debug_redacts_key() {
        let config = Config::new("super-secret");
        let debug = format!("{:?}", config);
        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("<redacted>"));
    }

    // Single test so env mutation never races with another reader.
    #[test]
    fn test_config_from_env() {
        env::remove_var(ENV_API_KEY);
        env::remove_var(ENV_BASE_URL);
        env::remove_var(ENV_API_VERSION);
        assert!(matches!(Config::from_env(), Err(JotFormError::MissingApiKey)));

        env::set_var(ENV_API_KEY, "");
        assert!(matches!(Config::from_env(), Err(JotFormError::MissingApiKey)));

        env::set_var(ENV_API_KEY, "env-key");
        let config = Config::from_env().unwrap();
        assert_eq!(config, Config::new("env-key"));

        env::set_var(ENV_BASE_URL, "https://hipaa-api.jotform.com/");
        env::set_var(ENV_API_VERSION, "v2");
        let config = Config::from_env().unwrap();
        assert_eq!(config.api_key, "env-key");
        assert_eq!(config.base_url, "https://hipaa-api.jotform.com");
        assert_eq!(config.api_version, "v2");

        env::remove_var(ENV_API_KEY);
        env::remove_var(ENV_BASE_URL);
        env::remove_var(ENV_API_VERSION);
    }

    #[test]
    fn test_create_rest_client() {
        assert!(create_rest_client().is_ok());
    }
}
