//! The LLM completion capability and its request/response types.

pub mod http;
pub mod openai;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::types::Item;

pub use openai::OpenAiResponses;

/// A tool declaration sent with every completion request.
///
/// Declarations are immutable, built once per agent at construction time and
/// shared read-only across all calls the agent makes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ToolParam {
    /// A function the core dispatches locally through the tool registry.
    Function {
        name: String,
        description: String,
        parameters: serde_json::Value,
        strict: bool,
    },
    /// The provider's built-in web search. Declared, never locally dispatched.
    WebSearchPreview { search_context_size: String },
}

impl ToolParam {
    /// The declared name, for function tools.
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Function { name, .. } => Some(name),
            Self::WebSearchPreview { .. } => None,
        }
    }
}

/// One completion request: the full conversation plus tool declarations.
#[derive(Debug, Clone, Serialize)]
pub struct ResponseRequest {
    pub model: String,
    pub input: Vec<Item>,
    pub tools: Vec<ToolParam>,
}

/// A completion response: the ordered output items of one round.
///
/// Only the closed item set survives the provider boundary; any other item
/// type the wire carries is dropped during parsing.
#[derive(Debug, Clone)]
pub struct ModelResponse {
    pub id: Option<String>,
    pub output: Vec<Item>,
}

impl ModelResponse {
    /// Concatenated text of every assistant message item, in output order.
    pub fn output_text(&self) -> String {
        self.output
            .iter()
            .filter_map(|item| match item {
                Item::Message(message) => Some(message.text()),
                _ => None,
            })
            .collect()
    }
}

/// The LLM completion capability the agent loop consumes.
///
/// One blocking round trip per call; no client-side retry. A transport
/// failure propagates to the caller as a fatal error.
#[async_trait]
pub trait ResponsesClient: Send + Sync {
    async fn create(&self, request: &ResponseRequest) -> Result<ModelResponse>;
}
