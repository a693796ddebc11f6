// Transport configuration for building the reqwest::Client.
//
// Kept separate from StationClient so timeout tuning stays in one place
// and tests can build clients against a mock server with short timeouts.

use std::time::Duration;

/// Transport configuration for building the HTTP client.
#[derive(Debug, Clone)]
pub struct TransportConfig {
    pub timeout: Duration,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
        }
    }
}

impl TransportConfig {
    /// Build a `reqwest::Client` from this config.
    pub fn build_client(&self) -> Result<reqwest::Client, crate::error::Error> {
        Ok(reqwest::Client::builder()
            .timeout(self.timeout)
            .user_agent("aquaview/0.1.0")
            .build()?)
    }
}
