//! Remote tool invocation.
//!
//! The generative tools are hosted remotely and reached through a
//! command-line dispatch shim that takes a tool name plus a JSON parameter
//! object and prints JSON on standard output.

mod cli;
mod response;

pub use cli::CliDispatcher;
pub use response::{extract_task_id, is_still_processing, STILL_PROCESSING_MARKER, TASK_ID_MARKER};

use crate::error::Result;
use async_trait::async_trait;
use serde_json::Value;

/// A remote generative-tool dispatcher.
#[async_trait]
pub trait ToolDispatcher: Send + Sync {
    /// Invoke a named remote tool with JSON-serialized parameters.
    ///
    /// Returns the parsed JSON result, or `None` when the dispatch produced
    /// no output.
    async fn call(&self, tool: &str, params: Value) -> Result<Option<Value>>;
}
