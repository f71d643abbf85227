//! Tool registry: resolve a declared name to a handler and invoke it safely.

use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, error};

use crate::error::{CoinsageError, Result};
use crate::provider::ToolParam;

use super::handler::ToolHandler;

/// Registry of the tools one agent declares.
///
/// Built once at agent construction and read-only afterwards. Handlers are
/// kept in registration order so declarations reach the model in a stable
/// order across rounds.
#[derive(Default)]
pub struct ToolRegistry {
    handlers: Vec<Arc<dyn ToolHandler>>,
    builtins: Vec<ToolParam>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a locally dispatched tool.
    pub fn register<T: ToolHandler + 'static>(&mut self, handler: T) {
        self.handlers.push(Arc::new(handler));
    }

    /// Register an already-shared handler.
    pub fn register_arc(&mut self, handler: Arc<dyn ToolHandler>) {
        self.handlers.push(handler);
    }

    /// Declare a provider-executed tool that has no local handler.
    pub fn declare_builtin(&mut self, tool: ToolParam) {
        self.builtins.push(tool);
    }

    /// The declarations sent with every completion request.
    pub fn declarations(&self) -> Vec<ToolParam> {
        let mut tools: Vec<ToolParam> = self
            .handlers
            .iter()
            .map(|h| ToolParam::Function {
                name: h.name().to_string(),
                description: h.description().to_string(),
                parameters: h.schema().to_json(),
                strict: true,
            })
            .collect();
        tools.extend(self.builtins.iter().cloned());
        tools
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Resolve a tool name and invoke its handler with a decoded payload.
    ///
    /// Fails with `UnknownTool` before touching the payload when the name is
    /// not registered. Arguments are validated against the declared schema,
    /// then fields carrying the absent marker (`null`) are stripped so they
    /// are never forwarded to the handler.
    pub async fn dispatch(&self, name: &str, args: Value) -> Result<Value> {
        let handler = self
            .handlers
            .iter()
            .find(|h| h.name() == name)
            .ok_or_else(|| {
                error!(tool = name, "tool not found");
                CoinsageError::UnknownTool(name.to_string())
            })?;

        let mut args = match args {
            Value::Object(map) => map,
            other => {
                return Err(CoinsageError::InvalidParameter {
                    tool: name.to_string(),
                    message: format!("arguments must be a JSON object, got {other}"),
                })
            }
        };

        handler.schema().validate(name, &args)?;
        args.retain(|_, value| !value.is_null());

        debug!(tool = name, args = args.len(), "dispatching tool");
        handler.call(args).await
    }
}
