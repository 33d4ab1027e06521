/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use crate::constants::{API_BASE_PATH, DEFAULT_HOST, DEFAULT_PORT, DEFAULT_TIMEOUT_SECS};
use crate::utils::config::get_env_or_default;
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
/// Authentication credentials for the Stockfighter API
pub struct Credentials {
    /// API key sent in the `X-Starfighter-Authorization` header
    pub api_key: String,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
/// Configuration for the REST API
pub struct RestApiConfig {
    /// Scheme, host and port of the API, e.g. `https://api.stockfighter.io:443`
    pub base_url: String,
    /// Timeout in seconds for REST API requests
    pub timeout: u64,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
/// Main configuration for the Stockfighter API client
///
/// Built once and handed to [`Client`](crate::client::Client); it is never
/// mutated afterwards.
pub struct Config {
    /// Authentication credentials
    pub credentials: Credentials,
    /// REST API configuration
    pub rest_api: RestApiConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Creates a configuration from the environment
    ///
    /// Loads a `.env` file when present and reads:
    /// * `STOCKFIGHTER_API_KEY`
    /// * `STOCKFIGHTER_BASE_URL` (default `https://api.stockfighter.io:443`)
    /// * `STOCKFIGHTER_TIMEOUT` in seconds (default 30)
    pub fn new() -> Self {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        let api_key = get_env_or_default("STOCKFIGHTER_API_KEY", String::from("default_api_key"));
        let base_url = get_env_or_default("STOCKFIGHTER_BASE_URL", default_base_url());
        let timeout = get_env_or_default("STOCKFIGHTER_TIMEOUT", DEFAULT_TIMEOUT_SECS);

        if api_key == "default_api_key" {
            error!("STOCKFIGHTER_API_KEY not found in environment variables or .env file");
        }

        Self {
            credentials: Credentials { api_key },
            rest_api: RestApiConfig { base_url, timeout },
        }
    }

    /// Creates a configuration for the public API with the given key
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self::with_base_url(api_key, default_base_url())
    }

    /// Creates a configuration pointing at an arbitrary host, e.g. a local test server
    ///
    /// # Arguments
    /// * `api_key` - Static API key
    /// * `base_url` - Scheme, host and optional port, without the `ob/api` suffix
    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            credentials: Credentials {
                api_key: api_key.into(),
            },
            rest_api: RestApiConfig {
                base_url: base_url.into(),
                timeout: DEFAULT_TIMEOUT_SECS,
            },
        }
    }

    /// Returns a copy of this configuration with another request timeout
    pub fn with_timeout(mut self, timeout: u64) -> Self {
        self.rest_api.timeout = timeout;
        self
    }

    /// Root URL of the order book API: `{base_url}/ob/api`
    pub fn api_url(&self) -> String {
        format!(
            "{}/{}",
            self.rest_api.base_url.trim_end_matches('/'),
            API_BASE_PATH
        )
    }
}

fn default_base_url() -> String {
    format!("{DEFAULT_HOST}:{DEFAULT_PORT}")
}
