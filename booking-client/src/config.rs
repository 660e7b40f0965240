//! Client configuration

use std::time::Duration;

/// Booking API served by the back office backend
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Quiet window applied to search input before a list is re-filtered
pub const DEFAULT_SEARCH_DEBOUNCE: Duration = Duration::from_millis(300);

/// Client configuration for the booking back office
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Server base URL (e.g., "http://localhost:8080")
    pub base_url: String,

    /// Request timeout in seconds
    pub timeout: u64,

    /// Debounce window for list search input
    pub search_debounce: Duration,
}

impl ClientConfig {
    /// Create a new client configuration pointing at `base_url`
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: 30,
            search_debounce: DEFAULT_SEARCH_DEBOUNCE,
        }
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    /// Set the search debounce window
    pub fn with_search_debounce(mut self, window: Duration) -> Self {
        self.search_debounce = window;
        self
    }

    /// Create an HTTP client from this configuration
    pub fn build_http_client(&self) -> crate::ClientResult<crate::NetworkHttpClient> {
        crate::NetworkHttpClient::new(self)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.timeout, 30);
        assert_eq!(config.search_debounce, Duration::from_millis(300));
    }

    #[test]
    fn test_config_builder() {
        let config = ClientConfig::new("http://127.0.0.1:9000")
            .with_timeout(5)
            .with_search_debounce(Duration::from_millis(50));

        assert_eq!(config.base_url, "http://127.0.0.1:9000");
        assert_eq!(config.timeout, 5);
        assert_eq!(config.search_debounce, Duration::from_millis(50));
    }
}
