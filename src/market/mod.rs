//! CoinMarketCap market-data adapter.
//!
//! Each tool maps to one HTTP GET against a fixed path, with the validated,
//! null-stripped arguments forwarded as query parameters.

pub mod tools;

use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::error::{CoinsageError, Result};
use crate::provider::http::shared_client;

pub use tools::market_tools;

pub const DEFAULT_BASE_URL: &str = "https://pro-api.coinmarketcap.com";

const API_KEY_HEADER: &str = "X-CMC_PRO_API_KEY";

/// Thin client for the read-only cryptocurrency endpoints.
///
/// Stateless across calls; safe to clone into each tool handler.
#[derive(Clone)]
pub struct MarketClient {
    base_url: String,
    api_key: String,
}

impl MarketClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: api_key.into(),
        }
    }

    /// Override the API base URL (tests, proxies).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// GET a fixed path, forwarding `params` as query parameters.
    ///
    /// A non-2xx status is an upstream error carrying the tool name and the
    /// parameters attempted; the response body is not interpreted on error.
    pub async fn get(&self, tool: &str, path: &str, params: &Map<String, Value>) -> Result<Value> {
        let query: Vec<(String, String)> = params
            .iter()
            .map(|(key, value)| (key.clone(), query_value(value)))
            .collect();

        debug!(tool, path, params = query.len(), "market request");
        let resp = shared_client()
            .get(format!("{}{}", self.base_url, path))
            .header("Accepts", "application/json")
            .header(API_KEY_HEADER, &self.api_key)
            .query(&query)
            .send()
            .await?;

        let status = resp.status().as_u16();
        if !(200..300).contains(&status) {
            warn!(tool, status, "market request failed");
            return Err(CoinsageError::Upstream {
                tool: tool.to_string(),
                status,
                params: Value::Object(params.clone()),
            });
        }

        Ok(resp.json().await?)
    }
}

/// Render a JSON value as a query-parameter string.
fn query_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn query_values_are_unquoted() {
        assert_eq!(query_value(&json!("BTC,ETH")), "BTC,ETH");
        assert_eq!(query_value(&json!(50)), "50");
        assert_eq!(query_value(&json!(1.5)), "1.5");
        assert_eq!(query_value(&json!(true)), "true");
    }
}
