//! Error types for Coinsage.

use thiserror::Error;

/// Primary error type for all Coinsage operations.
///
/// Every variant is fatal to the `ask` call that raised it; nothing in the
/// agent loop or the tool registry converts an error into a partial answer.
#[derive(Error, Debug)]
pub enum CoinsageError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Authentication error: {0}")]
    Authentication(String),

    /// Network-level failure talking to the LLM or an external API.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Non-success status from the LLM completion endpoint.
    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    /// The model requested a tool the registry does not know.
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    /// A required field was absent from a tool-call payload.
    #[error("Tool '{tool}' is missing required parameter '{parameter}'")]
    MissingParameter { tool: String, parameter: String },

    /// A tool-call payload carried an undeclared field or a value that
    /// violates the declared schema.
    #[error("Invalid parameter for tool '{tool}': {message}")]
    InvalidParameter { tool: String, message: String },

    /// The model's tool-call argument string was not valid JSON.
    #[error("Malformed arguments for tool '{tool}': {message}")]
    MalformedArguments { tool: String, message: String },

    /// An external API behind a tool returned a non-success status.
    /// Carries the attempted parameters, never the response body.
    #[error("Request for tool '{tool}' failed with status {status} (params: {params})")]
    Upstream {
        tool: String,
        status: u16,
        params: serde_json::Value,
    },

    /// The agent loop hit its configured round cap without the model
    /// producing a final answer.
    #[error("Agent loop exceeded {max_rounds} rounds without a final answer")]
    RoundLimitExceeded { max_rounds: usize },
}

impl CoinsageError {
    /// Create an API error from a status code and message.
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, CoinsageError>;
