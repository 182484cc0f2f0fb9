//! Client configuration: base URL and request timeout.
//!
//! Both values can be baked in at build time via `MURMUR_API_URL` and
//! `MURMUR_API_TIMEOUT_SECS`, which keeps configuration working on wasm
//! where there is no process environment at runtime. Defaults target a
//! local development server.

use std::time::Duration;

const DEFAULT_BASE_URL: &str = "http://localhost:8080";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Where and how the client talks to the API.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiConfig {
    /// Base URL without a trailing slash, e.g. `http://localhost:8080`.
    pub base_url: String,
    /// Per-request timeout. Applied on native targets only; wasm requests
    /// ride on the browser's own fetch behavior.
    pub timeout: Duration,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            base_url,
            ..Self::default()
        }
    }

    /// Resolve the config from build-time environment overrides.
    pub fn from_env() -> Self {
        let mut config = Self::new(option_env!("MURMUR_API_URL").unwrap_or(DEFAULT_BASE_URL));
        if let Some(secs) = option_env!("MURMUR_API_TIMEOUT_SECS").and_then(|s| s.parse().ok()) {
            config.timeout = Duration::from_secs(secs);
        }
        config
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_trailing_slashes() {
        let config = ApiConfig::new("http://api.example.com/");
        assert_eq!(config.base_url, "http://api.example.com");
    }

    #[test]
    fn default_targets_local_server() {
        let config = ApiConfig::default();
        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.timeout, Duration::from_secs(30));
    }
}
