//! Tool dispatch interface between the agent runtime and local capabilities.

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

/// Describes one callable capability to the model
#[derive(Debug, Clone, Serialize)]
pub struct ToolDescriptor {
    pub name: String,
    pub description: String,
    /// Example input shape shown in the system instructions
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_hint: Option<Value>,
}

/// Result of one tool invocation
#[derive(Debug, Clone)]
pub struct ToolOutput {
    pub value: Value,
    /// Short human-readable summary fed back to the model
    pub message: Option<String>,
}

#[derive(Debug, Error)]
pub enum ToolInvokeError {
    #[error("tool '{0}' is not registered")]
    NotRegistered(String),

    #[error("invalid arguments for tool '{tool}': {reason}")]
    InvalidArguments { tool: String, reason: String },
}

/// Dispatches tool invocations requested by the model.
///
/// Invocation policy belongs to the model; implementations only execute
/// what they are asked to and report the result.
#[async_trait]
pub trait ToolDispatcher: Send + Sync {
    /// All capabilities this dispatcher can execute
    fn descriptors(&self) -> Vec<ToolDescriptor>;

    /// Execute a tool by name with JSON arguments
    async fn invoke(&self, tool: &str, arguments: Value) -> Result<ToolOutput, ToolInvokeError>;
}
