//! Client configuration loaded from environment variables.

use std::env;

const DEFAULT_API_URL: &str = "http://localhost:5000/api";

/// Where the post API lives.
///
/// Every request the client makes is built from this one base URL.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Read `QUILL_API_URL`, falling back to the local development server.
    pub fn from_env() -> Self {
        Self::new(env::var("QUILL_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string()))
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}
