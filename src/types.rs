//! Conversation items exchanged with the Responses-style completion API.
//!
//! One `ask` invocation owns an append-only `Vec<Item>`; the same closed sum
//! type covers both the input transcript and the model's output items, so
//! output items the loop wants to keep are appended verbatim.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Conversation role.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

/// One conversation turn, tagged the way the wire tags it.
///
/// The set is closed: item types the provider emits beyond these (reasoning
/// traces, annotations) are dropped at the provider boundary and never reach
/// the agent loop.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Item {
    Message(Message),
    FunctionCall(FunctionCall),
    FunctionCallOutput(FunctionCallOutput),
    WebSearchCall(WebSearchCall),
}

impl Item {
    /// Build a plain text message turn.
    pub fn message(role: Role, text: impl Into<String>) -> Self {
        Self::Message(Message {
            role,
            content: Value::String(text.into()),
            rest: Map::new(),
        })
    }

    /// Build the result turn answering one function call.
    pub fn function_call_output(call_id: impl Into<String>, output: impl Into<String>) -> Self {
        Self::FunctionCallOutput(FunctionCallOutput {
            call_id: call_id.into(),
            output: output.into(),
        })
    }
}

/// A system, user, or assistant message.
///
/// `content` is a plain string for locally constructed turns and whatever
/// part array the model produced for assistant turns; extra wire fields
/// (id, status) ride along in `rest` so appended items round-trip verbatim.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Message {
    pub role: Role,
    pub content: Value,
    #[serde(flatten, default, skip_serializing_if = "Map::is_empty")]
    pub rest: Map<String, Value>,
}

impl Message {
    /// Extract the text content, concatenating `output_text` parts.
    pub fn text(&self) -> String {
        match &self.content {
            Value::String(text) => text.clone(),
            Value::Array(parts) => parts
                .iter()
                .filter(|p| p.get("type").and_then(Value::as_str) == Some("output_text"))
                .filter_map(|p| p.get("text").and_then(Value::as_str))
                .collect(),
            _ => String::new(),
        }
    }
}

/// A tool invocation requested by the model.
///
/// `call_id` is an opaque string chosen by the model; it must be echoed
/// verbatim in the matching [`FunctionCallOutput`]. `arguments` is the
/// JSON-encoded payload exactly as the model produced it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FunctionCall {
    pub name: String,
    pub call_id: String,
    pub arguments: String,
    #[serde(flatten, default, skip_serializing_if = "Map::is_empty")]
    pub rest: Map<String, Value>,
}

/// The result turn the loop supplies for one function call.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FunctionCallOutput {
    pub call_id: String,
    pub output: String,
}

/// A provider-executed web search invocation.
///
/// The core never dispatches these; they are carried verbatim so the model
/// keeps its own search context on later rounds.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WebSearchCall {
    #[serde(flatten)]
    pub raw: Map<String, Value>,
}
