//! Tool system: schema tables, the handler trait, and the registry.

pub mod handler;
pub mod registry;
pub mod schema;

pub use handler::ToolHandler;
pub use registry::ToolRegistry;
pub use schema::{FieldType, ParamSchema};
