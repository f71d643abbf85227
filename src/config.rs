//! Environment-backed configuration.

use std::sync::Arc;

use crate::agent::{orchestrator_with_model, Agent, DEFAULT_MAX_ROUNDS, DEFAULT_MODEL};
use crate::error::{CoinsageError, Result};
use crate::market::MarketClient;
use crate::provider::OpenAiResponses;

/// Configuration for wiring up agents.
///
/// The core never configures global logging or installs a tracing
/// subscriber; only credentials, endpoints, and loop limits live here.
#[derive(Debug, Clone, Default)]
pub struct Config {
    openai_api_key: Option<String>,
    market_api_key: Option<String>,
    openai_base_url: Option<String>,
    market_base_url: Option<String>,
    model: Option<String>,
    max_rounds: Option<usize>,
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load from environment variables, reading `.env` first if present.
    ///
    /// Recognized: `OPENAI_API_KEY`, `COINMARKETCAP_API_KEY`,
    /// `OPENAI_BASE_URL`, `COINMARKETCAP_BASE_URL`, `COINSAGE_MODEL`,
    /// `COINSAGE_MAX_ROUNDS`.
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv(); // load .env if present, ignore error
        Self {
            openai_api_key: std::env::var("OPENAI_API_KEY").ok(),
            market_api_key: std::env::var("COINMARKETCAP_API_KEY").ok(),
            openai_base_url: std::env::var("OPENAI_BASE_URL").ok(),
            market_base_url: std::env::var("COINMARKETCAP_BASE_URL").ok(),
            model: std::env::var("COINSAGE_MODEL").ok(),
            max_rounds: std::env::var("COINSAGE_MAX_ROUNDS")
                .ok()
                .and_then(|v| v.parse().ok()),
        }
    }

    pub fn with_openai_api_key(mut self, key: impl Into<String>) -> Self {
        self.openai_api_key = Some(key.into());
        self
    }

    pub fn with_market_api_key(mut self, key: impl Into<String>) -> Self {
        self.market_api_key = Some(key.into());
        self
    }

    pub fn with_openai_base_url(mut self, url: impl Into<String>) -> Self {
        self.openai_base_url = Some(url.into());
        self
    }

    pub fn with_market_base_url(mut self, url: impl Into<String>) -> Self {
        self.market_base_url = Some(url.into());
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    pub fn with_max_rounds(mut self, max_rounds: usize) -> Self {
        self.max_rounds = Some(max_rounds);
        self
    }

    pub fn model(&self) -> &str {
        self.model.as_deref().unwrap_or(DEFAULT_MODEL)
    }

    pub fn max_rounds(&self) -> usize {
        self.max_rounds.unwrap_or(DEFAULT_MAX_ROUNDS)
    }

    /// Build the fully wired orchestrator from this configuration.
    pub fn orchestrator(&self) -> Result<Agent> {
        let openai_key = self
            .openai_api_key
            .clone()
            .ok_or_else(|| CoinsageError::Configuration("OPENAI_API_KEY not set".into()))?;
        let market_key = self
            .market_api_key
            .clone()
            .ok_or_else(|| CoinsageError::Configuration("COINMARKETCAP_API_KEY not set".into()))?;

        let mut llm = OpenAiResponses::new(openai_key);
        if let Some(url) = &self.openai_base_url {
            llm = llm.with_base_url(url.clone());
        }

        let mut market = MarketClient::new(market_key);
        if let Some(url) = &self.market_base_url {
            market = market.with_base_url(url.clone());
        }

        Ok(orchestrator_with_model(Arc::new(llm), market, self.model())
            .with_max_rounds(self.max_rounds()))
    }
}
