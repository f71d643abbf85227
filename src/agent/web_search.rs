//! The web-search agent.
//!
//! Its only tool is the provider's built-in web search, which runs
//! server-side; the registry has no local handlers, so any function call
//! reaching dispatch on this agent fails fast with an unknown-tool error.

use std::sync::Arc;

use crate::prompts::WEB_SEARCH_PROMPT;
use crate::provider::{ResponsesClient, ToolParam};
use crate::tools::ToolRegistry;

use super::Agent;

pub const SEARCH_CONTEXT_SIZE: &str = "medium";

/// Build a web-search agent with the default model.
pub fn web_search_agent(client: Arc<dyn ResponsesClient>) -> Agent {
    let mut tools = ToolRegistry::new();
    tools.declare_builtin(ToolParam::WebSearchPreview {
        search_context_size: SEARCH_CONTEXT_SIZE.to_string(),
    });
    Agent::new(client, WEB_SEARCH_PROMPT, tools)
}
