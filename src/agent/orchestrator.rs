//! Two-tier composition: other agents exposed as callable tools.
//!
//! An [`AgentTool`] is an ordinary tool handler whose implementation runs a
//! nested agent's own `ask` loop to completion and projects its final
//! assistant text as the tool result. The dispatch contract is identical to
//! any HTTP-calling handler, so the agent loop needs no special cases, and a
//! nested failure propagates exactly like any other handler failure.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{Map, Value};
use tracing::debug;

use crate::error::{CoinsageError, Result};
use crate::market::MarketClient;
use crate::prompts::ORCHESTRATOR_PROMPT;
use crate::provider::ResponsesClient;
use crate::tools::{ParamSchema, ToolHandler, ToolRegistry};

use super::{market_data_agent, web_search_agent, Agent, DEFAULT_MODEL};

/// A nested agent exposed as a tool of a parent agent.
pub struct AgentTool {
    name: String,
    description: String,
    schema: ParamSchema,
    agent: Agent,
}

impl AgentTool {
    /// Wrap an agent. The tool takes a single required `query` string and
    /// accepts nothing else.
    pub fn new(name: impl Into<String>, description: impl Into<String>, agent: Agent) -> Self {
        let name = name.into();
        Self {
            schema: ParamSchema::object()
                .string("query", "The question to put to the delegated agent.", true)
                .build(),
            name,
            description: description.into(),
            agent,
        }
    }
}

#[async_trait]
impl ToolHandler for AgentTool {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn schema(&self) -> &ParamSchema {
        &self.schema
    }

    async fn call(&self, args: Map<String, Value>) -> Result<Value> {
        // Registry validation guarantees presence; guard for direct callers.
        let query = args
            .get("query")
            .and_then(Value::as_str)
            .ok_or_else(|| CoinsageError::MissingParameter {
                tool: self.name.clone(),
                parameter: "query".to_string(),
            })?;

        debug!(tool = %self.name, "delegating to nested agent");
        let outcome = self.agent.ask(query).await?;
        Ok(Value::String(outcome.final_text()))
    }
}

/// Build the orchestrator with the default model.
pub fn orchestrator(client: Arc<dyn ResponsesClient>, market: MarketClient) -> Agent {
    orchestrator_with_model(client, market, DEFAULT_MODEL)
}

/// Build the orchestrator, running itself and both nested agents on `model`.
pub fn orchestrator_with_model(
    client: Arc<dyn ResponsesClient>,
    market: MarketClient,
    model: &str,
) -> Agent {
    let mut tools = ToolRegistry::new();
    tools.register(AgentTool::new(
        "market_data_agent",
        "Returns information about cryptocurrencies collected by a delegated LLM agent \
         from the CoinMarketCap API, such as quotes and listings.",
        market_data_agent(client.clone(), market).with_model(model),
    ));
    tools.register(AgentTool::new(
        "web_search_agent",
        "Returns information about cryptocurrencies collected by a delegated LLM agent \
         from its own web searches.",
        web_search_agent(client.clone()).with_model(model),
    ));
    Agent::new(client, ORCHESTRATOR_PROMPT, tools).with_model(model)
}
