//! The market-data agent: six CoinMarketCap tools behind one system prompt.

use std::sync::Arc;

use crate::market::{market_tools, MarketClient};
use crate::prompts::MARKET_DATA_PROMPT;
use crate::provider::ResponsesClient;
use crate::tools::ToolRegistry;

use super::Agent;

/// Build a market-data agent with the default model.
pub fn market_data_agent(client: Arc<dyn ResponsesClient>, market: MarketClient) -> Agent {
    let mut tools = ToolRegistry::new();
    for tool in market_tools(&market) {
        tools.register_arc(tool);
    }
    Agent::new(client, MARKET_DATA_PROMPT, tools)
}
