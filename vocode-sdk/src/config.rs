use std::time::Duration;

/// Configuration for the Vocode client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API key for authentication.
    pub api_key: String,

    /// Base URL for the API (default: https://api.vocode.dev).
    pub base_url: String,

    /// API version path segment (default: v1).
    pub api_version: String,

    /// Request timeout.
    pub timeout: Duration,
}

impl ClientConfig {
    /// Default base URL for the Vocode API.
    pub const DEFAULT_BASE_URL: &'static str = "https://api.vocode.dev";

    /// Default API version segment.
    pub const DEFAULT_API_VERSION: &'static str = "v1";

    /// Default request timeout.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

    /// Create a new client configuration.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: Self::DEFAULT_BASE_URL.to_string(),
            api_version: Self::DEFAULT_API_VERSION.to_string(),
            timeout: Self::DEFAULT_TIMEOUT,
        }
    }

    /// Set the base URL.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the API version segment.
    pub fn api_version(mut self, version: impl Into<String>) -> Self {
        self.api_version = version.into();
        self
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: Self::DEFAULT_BASE_URL.to_string(),
            api_version: Self::DEFAULT_API_VERSION.to_string(),
            timeout: Self::DEFAULT_TIMEOUT,
        }
    }
}
