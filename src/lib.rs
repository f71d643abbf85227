//! Coinsage — tool-calling crypto research agents.
//!
//! The core of this crate is a generic agent loop over a Responses-style LLM
//! completion capability: it drives one conversation through repeated rounds
//! of model requests, tool dispatch, and result feedback until the model
//! answers without requesting any more tools. On top of the loop sit three
//! concrete agents: a market-data agent backed by six CoinMarketCap query
//! tools, a web-search agent using the provider's built-in search, and an
//! orchestrator whose two tools each delegate to one of the other agents.
//!
//! # Quick Start
//!
//! ```no_run
//! use coinsage::config::Config;
//!
//! # async fn example() -> coinsage::Result<()> {
//! let agent = Config::from_env().orchestrator()?;
//! let outcome = agent.ask("What is the current price of Bitcoin?").await?;
//! println!("{}", outcome.final_text());
//! # Ok(())
//! # }
//! ```

pub mod agent;
pub mod config;
pub mod error;
pub mod market;
pub mod prompts;
pub mod provider;
pub mod tools;
pub mod types;

pub use agent::{Agent, AskOutcome};
pub use error::{CoinsageError, Result};
