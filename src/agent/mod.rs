//! The agent loop: drive one conversation to completion.

pub mod market_data;
pub mod orchestrator;
pub mod web_search;

use std::sync::Arc;

use tracing::{debug, error, info, warn};

use crate::error::{CoinsageError, Result};
use crate::provider::{ModelResponse, ResponseRequest, ResponsesClient, ToolParam};
use crate::tools::ToolRegistry;
use crate::types::{Item, Role};

pub use market_data::market_data_agent;
pub use orchestrator::{orchestrator, orchestrator_with_model, AgentTool};
pub use web_search::web_search_agent;

/// Default model identifier for all agents.
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Default cap on model request/response cycles within one `ask`.
pub const DEFAULT_MAX_ROUNDS: usize = 8;

/// What `ask` hands back: the full transcript and the last raw response.
#[derive(Debug)]
pub struct AskOutcome {
    /// Every conversation turn, in the order produced.
    pub transcript: Vec<Item>,
    /// The final model response (the round with zero function calls).
    pub response: ModelResponse,
}

impl AskOutcome {
    /// The final assistant text.
    pub fn final_text(&self) -> String {
        self.response.output_text()
    }
}

/// A configured instance of the agent loop: a system prompt, a model, a tool
/// registry, and a completion-client handle. Immutable after construction.
pub struct Agent {
    system_prompt: String,
    model: String,
    tools: ToolRegistry,
    client: Arc<dyn ResponsesClient>,
    max_rounds: usize,
}

impl std::fmt::Debug for Agent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Agent")
            .field("system_prompt", &self.system_prompt)
            .field("model", &self.model)
            .field("max_rounds", &self.max_rounds)
            .finish_non_exhaustive()
    }
}

impl Agent {
    pub fn new(
        client: Arc<dyn ResponsesClient>,
        system_prompt: impl Into<String>,
        tools: ToolRegistry,
    ) -> Self {
        Self {
            system_prompt: system_prompt.into(),
            model: DEFAULT_MODEL.to_string(),
            tools,
            client,
            max_rounds: DEFAULT_MAX_ROUNDS,
        }
    }

    /// Set the model identifier.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Set the round cap.
    pub fn with_max_rounds(mut self, max_rounds: usize) -> Self {
        self.max_rounds = max_rounds;
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn tools(&self) -> &ToolRegistry {
        &self.tools
    }

    /// Drive one conversation to completion.
    ///
    /// Seeds the conversation with the system and user turns, then repeats:
    /// request a completion, walk the output items in order, dispatch every
    /// function call and append its result under the same call id, carry
    /// web-search and message items verbatim. Stops on the first round with
    /// zero function calls and returns the transcript plus that response.
    ///
    /// Any transport, decode, or dispatch failure aborts the whole call.
    pub async fn ask(&self, prompt: &str) -> Result<AskOutcome> {
        let mut input = vec![
            Item::message(Role::System, &self.system_prompt),
            Item::message(Role::User, prompt),
        ];
        let tools: Vec<ToolParam> = self.tools.declarations();

        let mut round = 0usize;
        loop {
            round += 1;
            if round > self.max_rounds {
                warn!(max_rounds = self.max_rounds, "round limit exceeded");
                return Err(CoinsageError::RoundLimitExceeded {
                    max_rounds: self.max_rounds,
                });
            }

            info!(round, items = input.len(), model = %self.model, "requesting completion");
            let response = self
                .client
                .create(&ResponseRequest {
                    model: self.model.clone(),
                    input: input.clone(),
                    tools: tools.clone(),
                })
                .await?;

            let mut had_function_call = false;
            for item in &response.output {
                match item {
                    Item::FunctionCall(call) => {
                        had_function_call = true;
                        debug!(tool = %call.name, call_id = %call.call_id, "function call");

                        let args: serde_json::Value = serde_json::from_str(&call.arguments)
                            .map_err(|err| CoinsageError::MalformedArguments {
                                tool: call.name.clone(),
                                message: err.to_string(),
                            })?;

                        let result = match self.tools.dispatch(&call.name, args).await {
                            Ok(result) => result,
                            Err(err) => {
                                self.log_abort(&input, &call.name);
                                return Err(err);
                            }
                        };

                        input.push(Item::FunctionCall(call.clone()));
                        input.push(Item::function_call_output(
                            &call.call_id,
                            serde_json::to_string(&result)?,
                        ));
                    }
                    Item::WebSearchCall(_) | Item::Message(_) => input.push(item.clone()),
                    Item::FunctionCallOutput(_) => {
                        // The model never emits result turns; ignore if a
                        // provider ever echoes one back.
                    }
                }
            }

            if !had_function_call {
                debug!(round, items = input.len(), "conversation complete");
                return Ok(AskOutcome {
                    transcript: input,
                    response,
                });
            }
        }
    }

    /// Surface the transcript accumulated up to a mid-round abort, so a
    /// failed call is diagnosable even though only the error is returned.
    fn log_abort(&self, input: &[Item], tool: &str) {
        let transcript = serde_json::to_string(input).unwrap_or_default();
        error!(tool, items = input.len(), %transcript, "aborting ask mid-round");
    }
}
