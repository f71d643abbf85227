//! The tool handler trait.

use async_trait::async_trait;
use serde_json::{Map, Value};

use crate::error::Result;

use super::schema::ParamSchema;

/// A named, schema-validated capability the model may request.
///
/// Implementations must be side-effect free with respect to the conversation:
/// they receive validated, null-stripped arguments and return a
/// JSON-serializable result (or an error that aborts the whole `ask`).
#[async_trait]
pub trait ToolHandler: Send + Sync {
    /// Tool name (must match what the model calls).
    fn name(&self) -> &str;

    /// Human-readable description shown to the model.
    fn description(&self) -> &str;

    /// The declared parameter table.
    fn schema(&self) -> &ParamSchema;

    /// Execute with validated arguments.
    async fn call(&self, args: Map<String, Value>) -> Result<Value>;
}
