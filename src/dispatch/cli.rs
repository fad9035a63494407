//! Command-line tool dispatcher.

use super::ToolDispatcher;
use crate::error::{BliError, Result};
use async_trait::async_trait;
use serde_json::Value;
use tokio::process::Command;
use tracing::{debug, error};

/// Dispatches remote tool calls through an external CLI.
///
/// The command is invoked as `<command> q tools call --tool-name <tool>
/// --parameters <json>` and is expected to print JSON on stdout.
pub struct CliDispatcher {
    command: String,
}

impl CliDispatcher {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
        }
    }
}

#[async_trait]
impl ToolDispatcher for CliDispatcher {
    async fn call(&self, tool: &str, params: Value) -> Result<Option<Value>> {
        debug!("Dispatching tool {}", tool);

        let result = Command::new(&self.command)
            .arg("q")
            .arg("tools")
            .arg("call")
            .arg("--tool-name")
            .arg(tool)
            .arg("--parameters")
            .arg(params.to_string())
            .output()
            .await;

        let output = match result {
            Ok(o) => o,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                error!("Dispatch command '{}' not found", self.command);
                return Err(BliError::ToolNotFound(self.command.clone()));
            }
            Err(e) => {
                error!("Error running tool {}: {}", tool, e);
                return Err(BliError::Dispatch(format!(
                    "{} execution failed: {e}",
                    self.command
                )));
            }
        };

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            error!("Tool {} failed: {}", tool, stderr.trim());
            return Err(BliError::ToolFailed(format!("{tool}: {}", stderr.trim())));
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        if stdout.trim().is_empty() {
            return Ok(None);
        }

        match serde_json::from_str(&stdout) {
            Ok(value) => Ok(Some(value)),
            Err(e) => {
                error!("Tool {} returned invalid JSON: {}", tool, e);
                Err(BliError::Dispatch(format!(
                    "invalid JSON from {tool}: {e}"
                )))
            }
        }
    }
}
